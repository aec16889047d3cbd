mod console;
mod source;
mod system;

pub use console::{Console, ConsoleConfig};
pub use source::{ScanlineSource, Solid, TestPattern};
pub use system::HostSystem;
