use anyhow::{ensure, Result};
use bitflags::bitflags;

const TITLE_START: usize = 0x0134;
const TITLE_END: usize = 0x0143;
const CGB_FLAG: usize = 0x0143;
const CART_TYPE: usize = 0x0147;
const ROM_SIZE: usize = 0x0148;
const RAM_SIZE: usize = 0x0149;
/// Smallest image that carries a complete header.
pub const HEADER_END: usize = 0x0150;

const RAM_SIZES: [usize; 6] = [0, 0x800, 0x2000, 0x8000, 0x20000, 0x10000];
/// MBC2 carts always have 512 half-bytes of built-in RAM.
const MBC2_RAM_SIZE: usize = 0x200;

/// Memory bank controller per cartridge type code, -1 where unsupported.
const CART_MBC: [i8; 32] = [
    0, 1, 1, 1, -1, 2, 2, -1, 0, 0, -1, 0, 0, 0, -1, 3, 3, 3, 3, 3, -1, -1, -1, -1, -1, 5, 5, 5,
    5, 5, 5, -1,
];

bitflags! {
    /// Hardware present on the cartridge besides ROM.
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct CartFeatures: u8 {
        const RAM = 1 << 0;
        const BATTERY = 1 << 1;
        const TIMER = 1 << 2;
        const RUMBLE = 1 << 3;
        const MBC2 = 1 << 4;
    }
}

/// Fields of the cartridge header the console cares about.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CartridgeHeader {
    /// Printable title, used for save file names.
    pub title: String,
    /// Wrapping sum of the raw title bytes, keyed by the colour boot ROM.
    pub checksum: u8,
    pub cgb_flag: u8,
    pub cart_type: u8,
    pub rom_size_code: u8,
    pub ram_size_code: u8,
}

impl CartridgeHeader {
    pub fn parse(rom: &[u8]) -> Result<Self> {
        ensure!(
            rom.len() >= HEADER_END,
            "ROM too small for a cartridge header ({} bytes)",
            rom.len()
        );
        let raw_title = &rom[TITLE_START..=TITLE_END];
        let title = raw_title
            .iter()
            .take_while(|&&c| (b' '..=b'_').contains(&c))
            .map(|&c| c as char)
            .collect();
        let checksum = raw_title.iter().fold(0u8, |acc, &c| acc.wrapping_add(c));

        Ok(Self {
            title,
            checksum,
            cgb_flag: rom[CGB_FLAG],
            cart_type: rom[CART_TYPE],
            rom_size_code: rom[ROM_SIZE],
            ram_size_code: rom[RAM_SIZE],
        })
    }

    /// Raw title bytes, as consulted by palette auto-assignment.
    pub fn title_bytes(&self) -> &[u8] {
        self.title.as_bytes()
    }

    pub fn is_cgb(&self) -> bool {
        self.cgb_flag & 0x80 != 0
    }

    /// Bank controller number, or -1 for an unsupported type.
    pub fn mbc(&self) -> i8 {
        CART_MBC
            .get(usize::from(self.cart_type))
            .copied()
            .unwrap_or(-1)
    }

    pub fn features(&self) -> CartFeatures {
        match self.cart_type {
            0x02 | 0x08 | 0x12 | 0x1A => CartFeatures::RAM,
            0x03 | 0x09 | 0x13 | 0x1B => CartFeatures::RAM | CartFeatures::BATTERY,
            0x05 => CartFeatures::MBC2,
            0x06 => CartFeatures::MBC2 | CartFeatures::BATTERY,
            0x0F => CartFeatures::TIMER | CartFeatures::BATTERY,
            0x10 => CartFeatures::TIMER | CartFeatures::RAM | CartFeatures::BATTERY,
            0x1C => CartFeatures::RUMBLE,
            0x1D => CartFeatures::RUMBLE | CartFeatures::RAM,
            0x1E => CartFeatures::RUMBLE | CartFeatures::RAM | CartFeatures::BATTERY,
            _ => CartFeatures::empty(),
        }
    }

    /// Bytes of external cartridge RAM to persist.
    pub fn save_size(&self) -> usize {
        if self.features().contains(CartFeatures::MBC2) {
            return MBC2_RAM_SIZE;
        }
        RAM_SIZES
            .get(usize::from(self.ram_size_code))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
pub(crate) fn test_rom(title: &[u8], cart_type: u8, ram_size_code: u8) -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000];
    rom[TITLE_START..TITLE_START + title.len()].copy_from_slice(title);
    rom[CART_TYPE] = cart_type;
    rom[RAM_SIZE] = ram_size_code;
    rom
}
