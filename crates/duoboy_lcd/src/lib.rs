//! Display side of the console: the single-slot scanline channel between
//! the emulation core and the display core, palette resolution, scaling and
//! the panel push strategies.

pub mod channel;
pub mod command;
pub mod compositor;
pub mod display_core;
pub mod driver;
pub mod palette;
pub mod panel;

pub use channel::{line_channel, LineReceiver, LineSender};
pub use command::DisplayCommand;
pub use compositor::{Compositor, Layout, ScaledLine, ScalingMode};
pub use display_core::DisplayCore;
pub use driver::{DisplayConfig, DisplayDriver, PushStrategy};
pub use palette::{ColorSource, Palette, PaletteKey, PaletteSelector};
pub use panel::{MemoryPanel, Panel};
