use anyhow::Result;
use duoboy_common::LCD_HEIGHT;

use crate::channel::LineReceiver;
use crate::command::DisplayCommand;
use crate::compositor::{Compositor, ScalingMode};
use crate::driver::{DisplayConfig, DisplayDriver};
use crate::panel::Panel;

/// The consumer side: owns the panel and serves commands from the
/// emulation core.
pub struct DisplayCore<P: Panel> {
    receiver: LineReceiver,
    compositor: Compositor,
    driver: DisplayDriver,
    panel: P,
}

impl<P: Panel> DisplayCore<P> {
    pub fn new(receiver: LineReceiver, mut panel: P, config: &DisplayConfig) -> Self {
        let (width, height) = (panel.width(), panel.height());
        let compositor = Compositor::new(
            config.scaling,
            width,
            height,
            config.color_order,
            config.swap_bytes,
        );
        let driver = DisplayDriver::new(config, width, height);
        panel.fill(0);
        log::info!("Display core ready, {width}x{height}, {:?}", config.scaling);
        Self {
            receiver,
            compositor,
            driver,
            panel,
        }
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn scaling_mode(&self) -> ScalingMode {
        self.compositor.mode()
    }

    /// Waits for one command and handles it.
    ///
    /// Fails only when the emulation core has hung up.
    pub fn dispatch_once(&mut self) -> Result<()> {
        match self.receiver.dequeue_blocking()? {
            Some(DisplayCommand::LcdLine(line)) => self.draw_line(line),
            Some(DisplayCommand::IdleSet(mode)) => self.idle_set(mode),
            Some(DisplayCommand::SetPixel(data)) => {
                log::trace!("SET_PIXEL 0x{data:02X} ignored");
            }
            Some(DisplayCommand::Nop) | None => {}
        }
        Ok(())
    }

    /// Serves commands until the emulation core hangs up, then hands the
    /// panel back.
    pub fn run(mut self) -> P {
        while self.dispatch_once().is_ok() {}
        log::info!("Display core stopped");
        self.panel
    }

    fn draw_line(&mut self, line: u8) {
        let Self {
            receiver,
            compositor,
            driver,
            panel,
        } = self;
        if usize::from(line) < LCD_HEIGHT {
            receiver.with_staged_line(|pixels, colors| {
                let scaled = compositor.compose(line, pixels, colors);
                driver.push(panel, &scaled);
            });
        } else {
            log::warn!("Scanline {line} out of range");
        }
        receiver.ack_line();
    }

    fn idle_set(&mut self, mode: u8) {
        match ScalingMode::from_u8(mode) {
            Some(mode) => self.compositor.set_mode(mode),
            None => log::warn!("Unknown scaling mode {mode}"),
        }
        self.driver.clear(&mut self.panel);
    }
}
