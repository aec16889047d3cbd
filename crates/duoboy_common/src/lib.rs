pub mod color;
pub mod fatal;
pub mod system;

pub use color::{Color, ColorOrder};
pub use fatal::{fatal_cause, is_fatal, Fatal};
pub use system::{halt, handle_error, SystemControl};

/// Native horizontal resolution of the emulated LCD.
pub const LCD_WIDTH: usize = 160;
/// Native vertical resolution of the emulated LCD.
pub const LCD_HEIGHT: usize = 144;
/// Width of the rotated TFT panel.
pub const DISPLAY_WIDTH: usize = 320;
/// Height of the rotated TFT panel.
pub const DISPLAY_HEIGHT: usize = 240;

/// Raw pixel codes for one emulated scanline.
///
/// Each code carries a palette selector in bits 4..=5 and a shade index in
/// bits 0..=1. In enhanced-colour mode the low six bits index the fixed
/// colour table instead.
pub type PixelLine = [u8; LCD_WIDTH];
