use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::{anyhow, Result};
use crossbeam_channel::{Receiver, Sender};
use duoboy_common::{PixelLine, LCD_WIDTH};

use crate::command::DisplayCommand;
use crate::compositor::ScalingMode;
use crate::palette::ColorSource;

/// Depth of the inter-core hardware FIFO, in words.
pub const FIFO_DEPTH: usize = 8;

/// State shared by the emulation core (producer) and the display core
/// (consumer).
///
/// - `line_busy` is set only by the producer and cleared only by the consumer.
/// - `staging` is written by the producer while `line_busy` is clear and read
///   by the consumer while it is set.
/// - `colors` is replaced by the producer only while no line is in flight.
pub struct LineContext {
    line_busy: AtomicBool,
    staging: Mutex<PixelLine>,
    colors: Mutex<ColorSource>,
}

impl LineContext {
    fn new(colors: ColorSource) -> Self {
        Self {
            line_busy: AtomicBool::new(false),
            staging: Mutex::new([0; LCD_WIDTH]),
            colors: Mutex::new(colors),
        }
    }

    fn staging(&self) -> MutexGuard<'_, PixelLine> {
        self.staging.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn colors(&self) -> MutexGuard<'_, ColorSource> {
        self.colors.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Creates the single-slot line channel between the two cores.
pub fn line_channel(colors: ColorSource) -> (LineSender, LineReceiver) {
    let (tx, rx) = crossbeam_channel::bounded(FIFO_DEPTH);
    let ctx = Arc::new(LineContext::new(colors));
    (
        LineSender {
            ctx: ctx.clone(),
            fifo: tx,
        },
        LineReceiver { ctx, fifo: rx },
    )
}

/// Emulation-core end of the channel.
pub struct LineSender {
    ctx: Arc<LineContext>,
    fifo: Sender<u32>,
}

impl LineSender {
    /// Spins until the display core has acknowledged the in-flight line.
    ///
    /// There is no timeout: a wedged display core stalls the caller forever.
    pub fn wait_line_idle(&self) {
        while self.ctx.line_busy.load(Ordering::SeqCst) {
            std::hint::spin_loop();
        }
    }

    pub fn line_in_flight(&self) -> bool {
        self.ctx.line_busy.load(Ordering::SeqCst)
    }

    /// Stages `pixels` and hands scanline `line` to the display core.
    ///
    /// Does not return before the previous line has been acknowledged.
    pub fn enqueue_line(&self, line: u8, pixels: &PixelLine) -> Result<()> {
        self.wait_line_idle();
        *self.ctx.staging() = *pixels;
        self.ctx.line_busy.store(true, Ordering::SeqCst);
        self.push(DisplayCommand::LcdLine(line))
    }

    /// Clears the display and switches it to `mode`.
    pub fn set_scaling_mode(&self, mode: ScalingMode) -> Result<()> {
        log::info!("Scaling mode: {mode:?}");
        self.push(DisplayCommand::IdleSet(mode as u8))
    }

    pub fn nop(&self) -> Result<()> {
        self.push(DisplayCommand::Nop)
    }

    /// Installs a new colour source between frames.
    pub fn set_colors(&self, colors: ColorSource) {
        self.wait_line_idle();
        *self.ctx.colors() = colors;
    }

    fn push(&self, cmd: DisplayCommand) -> Result<()> {
        self.fifo
            .send(cmd.pack())
            .map_err(|_| anyhow!("display core stopped while sending {cmd:?}"))
    }
}

/// Display-core end of the channel.
pub struct LineReceiver {
    ctx: Arc<LineContext>,
    fifo: Receiver<u32>,
}

impl LineReceiver {
    /// Blocks until the next command word arrives.
    ///
    /// Fails only once every [`LineSender`] has been dropped. Unknown words
    /// decode to `None`.
    pub fn dequeue_blocking(&self) -> Result<Option<DisplayCommand>> {
        let word = self
            .fifo
            .recv()
            .map_err(|_| anyhow!("emulation core disconnected"))?;
        let cmd = DisplayCommand::unpack(word);
        if cmd.is_none() {
            log::warn!("Unknown display command word 0x{word:08X}");
        }
        Ok(cmd)
    }

    /// Runs `f` over the staged scanline and the active colours.
    pub fn with_staged_line<R>(&self, f: impl FnOnce(&PixelLine, &ColorSource) -> R) -> R {
        let staging = self.ctx.staging();
        let colors = self.ctx.colors();
        f(&staging, &colors)
    }

    /// Signals that the staged line has been pushed.
    pub fn ack_line(&self) {
        self.ctx.line_busy.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests;
