use std::fmt;
use std::path::PathBuf;

/// Unrecoverable conditions. Any of these ends the session with a reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fatal {
    StorageMount { root: PathBuf },
    DirectoryOpen { dir: PathBuf },
    RomOpen { path: PathBuf },
    RomRead { offset: u32 },
    /// Read-back of a freshly programmed sector differed from its source.
    FlashMismatch { offset: u32 },
    AuxMemoryInit,
    AuxMemoryWrite { addr: u32 },
}

impl fmt::Display for Fatal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fatal::StorageMount { root } => {
                write!(f, "Failed to mount storage card at '{}'", root.display())
            }
            Fatal::DirectoryOpen { dir } => {
                write!(f, "Failed to open directory '{}'", dir.display())
            }
            Fatal::RomOpen { path } => write!(f, "Failed to open ROM '{}'", path.display()),
            Fatal::RomRead { offset } => write!(f, "Failed to read ROM at 0x{offset:07X}"),
            Fatal::FlashMismatch { offset } => {
                write!(f, "Programming failed - Flash mismatch at 0x{offset:07X}")
            }
            Fatal::AuxMemoryInit => write!(f, "PSRAM init failed"),
            Fatal::AuxMemoryWrite { addr } => write!(f, "PSRAM write failed at 0x{addr:07X}"),
        }
    }
}

impl std::error::Error for Fatal {}

/// Returns the fatal cause carried anywhere in `err`'s context chain.
pub fn fatal_cause(err: &anyhow::Error) -> Option<&Fatal> {
    err.downcast_ref::<Fatal>()
}

pub fn is_fatal(err: &anyhow::Error) -> bool {
    fatal_cause(err).is_some()
}
