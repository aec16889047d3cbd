//! Storage card access for the DuoBoy handheld.
//!
//! Browses cartridge images on the card, streams the chosen ROM into
//! execute-in-place flash or auxiliary memory, and persists cartridge RAM
//! and save states alongside the card's ROMs.

pub mod cart_ram;
pub mod flash;
pub mod header;
pub mod loader;
pub mod psram;
pub mod savestate;
pub mod storage;

pub use cart_ram::{load_cart_ram, save_cart_ram, SAVES_DIR};
pub use flash::{
    FlashConfig, FlashDevice, FlashRegion, HostInterrupts, InterruptControl, InterruptsDisabled,
    MemoryFlash, FLASH_SECTOR_SIZE,
};
pub use header::{CartFeatures, CartridgeHeader};
pub use loader::{LoaderKind, RomLoader};
pub use psram::{AuxMemory, MemoryPsram, PSRAM_CHUNK, PSRAM_SIZE};
pub use savestate::{
    CartState, CgbState, Counters, EmulatorState, Registers, SaveStateLayout, SaveStateManager,
    QUICK_SAVE_DIR,
};
pub use storage::{
    title_file_name, CardStorage, CartridgeFile, FileBrowser, GameSystem, SystemConfig,
    FILES_PER_PAGE, MAX_PATH_LENGTH, UNTITLED,
};
