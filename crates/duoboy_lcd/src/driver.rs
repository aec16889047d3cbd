use duoboy_common::{ColorOrder, LCD_HEIGHT};
use typed_builder::TypedBuilder;

use crate::compositor::{ScaledLine, ScalingMode};
use crate::panel::Panel;

/// How composited lines reach the panel.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum PushStrategy {
    /// Every line goes straight to the panel.
    #[default]
    Direct,
    /// Lines are collected offscreen and the frame is pushed after line 143.
    Framebuffered,
}

#[derive(TypedBuilder, Clone, Debug)]
pub struct DisplayConfig {
    #[builder(default)]
    pub strategy: PushStrategy,
    #[builder(default = false)]
    pub dma: bool,
    /// Only honoured together with `dma`.
    #[builder(default = false)]
    pub double_buffer: bool,
    #[builder(default)]
    pub color_order: ColorOrder,
    /// Byte-swap each word for controllers that expect big-endian pixels.
    #[builder(default = false)]
    pub swap_bytes: bool,
    #[builder(default)]
    pub scaling: ScalingMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig::builder().build()
    }
}

/// The line push strategy chosen at start-up.
pub enum DisplayDriver {
    Direct(DirectDriver),
    Framebuffered(FramebufferDriver),
}

impl DisplayDriver {
    pub fn new(config: &DisplayConfig, width: u16, height: u16) -> Self {
        log::info!(
            "Display driver: {:?}, dma={}, double_buffer={}",
            config.strategy,
            config.dma,
            config.double_buffer
        );
        match config.strategy {
            PushStrategy::Direct => DisplayDriver::Direct(DirectDriver::new(config.dma)),
            PushStrategy::Framebuffered => DisplayDriver::Framebuffered(FramebufferDriver::new(
                width,
                height,
                config.dma,
                config.dma && config.double_buffer,
            )),
        }
    }

    pub fn push(&mut self, panel: &mut dyn Panel, line: &ScaledLine<'_>) {
        match self {
            DisplayDriver::Direct(d) => d.push(panel, line),
            DisplayDriver::Framebuffered(d) => d.push(panel, line),
        }
    }

    /// Blanks the panel and any offscreen buffers.
    pub fn clear(&mut self, panel: &mut dyn Panel) {
        panel.wait_dma();
        if let DisplayDriver::Framebuffered(d) = self {
            d.clear();
        }
        panel.fill(0);
    }
}

pub struct DirectDriver {
    dma: bool,
    transfer: Vec<u16>,
}

impl DirectDriver {
    pub fn new(dma: bool) -> Self {
        Self {
            dma,
            transfer: Vec::new(),
        }
    }

    pub fn push(&mut self, panel: &mut dyn Panel, line: &ScaledLine<'_>) {
        let width = line.pixels.len() as u16;
        let rows = u16::from(line.rows);
        if self.dma {
            // The engine may still be reading the transfer buffer.
            panel.wait_dma();
            self.transfer.clear();
            for _ in 0..rows {
                self.transfer.extend_from_slice(line.pixels);
            }
            panel.set_window(line.x, line.y, width, rows);
            panel.start_dma(&self.transfer);
        } else {
            panel.set_window(line.x, line.y, width, rows);
            for _ in 0..rows {
                panel.push_pixels(line.pixels);
            }
        }
    }
}

pub struct FramebufferDriver {
    width: u16,
    height: u16,
    dma: bool,
    buffers: Vec<Vec<u16>>,
    writable: usize,
    frames: u64,
    missed_frames: u64,
}

impl FramebufferDriver {
    pub fn new(width: u16, height: u16, dma: bool, double_buffer: bool) -> Self {
        let len = usize::from(width) * usize::from(height);
        let count = if double_buffer { 2 } else { 1 };
        Self {
            width,
            height,
            dma,
            buffers: vec![vec![0; len]; count],
            writable: 0,
            frames: 0,
            missed_frames: 0,
        }
    }

    pub fn is_double_buffered(&self) -> bool {
        self.buffers.len() == 2
    }

    /// Index of the buffer currently being composited into.
    pub fn writable(&self) -> usize {
        self.writable
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames dropped because the previous transfer was still running.
    pub fn missed_frames(&self) -> u64 {
        self.missed_frames
    }

    pub fn push(&mut self, panel: &mut dyn Panel, line: &ScaledLine<'_>) {
        if self.dma && !self.is_double_buffered() {
            // The only buffer may still be streaming out.
            panel.wait_dma();
        }

        let stride = usize::from(self.width);
        let buffer = &mut self.buffers[self.writable];
        let x = usize::from(line.x);
        let len = line.pixels.len().min(stride.saturating_sub(x));
        for row in 0..u16::from(line.rows) {
            let y = usize::from(line.y + row);
            if y >= usize::from(self.height) {
                break;
            }
            let start = y * stride + x;
            buffer[start..start + len].copy_from_slice(&line.pixels[..len]);
        }

        if usize::from(line.line) == LCD_HEIGHT - 1 {
            self.present(panel);
        }
    }

    fn present(&mut self, panel: &mut dyn Panel) {
        if self.is_double_buffered() {
            if panel.dma_busy() {
                self.missed_frames += 1;
                log::debug!("Frame {} missed, DMA still busy", self.frames);
                return;
            }
            let active = self.writable;
            self.writable ^= 1;
            panel.set_window(0, 0, self.width, self.height);
            panel.start_dma(&self.buffers[active]);
        } else {
            panel.set_window(0, 0, self.width, self.height);
            if self.dma {
                panel.start_dma(&self.buffers[0]);
            } else {
                panel.push_pixels(&self.buffers[0]);
            }
        }
        self.frames += 1;
    }

    fn clear(&mut self) {
        for buffer in &mut self.buffers {
            buffer.fill(0);
        }
    }
}
