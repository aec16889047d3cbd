use super::{color_palette, Palette, PaletteKey};

/// Number of fixed palettes reachable by manual selection.
pub const MANUAL_PALETTE_COUNT: u8 = 13;

/// Picks the boot-ROM palette for a monochrome cartridge.
///
/// `checksum` is the wrapping sum of the header title bytes. Titles that
/// share a checksum are told apart by their fourth character.
pub fn auto_assign_key(checksum: u8, title: &[u8]) -> PaletteKey {
    let disambiguation = title.get(3).copied().unwrap_or(0);
    let (entry, flags) = match checksum {
        0x00 => (0x1C, 0x03),
        0x01 => (0x0F, 0x05),
        0x0C => (0x12, 0x00),
        0x0D => match disambiguation {
            b'E' => (0x0C, 0x03),
            _ => (0x07, 0x04),
        },
        0x10 => (0x0F, 0x05),
        0x14 => (0x10, 0x01),
        0x15 => (0x07, 0x00),
        0x16 => match disambiguation {
            b'M' => (0x0D, 0x05),
            _ => (0x0C, 0x05),
        },
        0x17 => (0x0E, 0x05),
        0x18 => match disambiguation {
            b'I' => (0x1C, 0x03),
            _ => (0x0C, 0x05),
        },
        0x19 => (0x06, 0x03),
        0x1D => (0x08, 0x03),
        0x27 => match disambiguation {
            b'B' => (0x08, 0x05),
            _ => (0x0E, 0x05),
        },
        0x28 => match disambiguation {
            b'A' => (0x13, 0x00),
            _ => (0x0E, 0x03),
        },
        0x29 => (0x0F, 0x05),
        0x2B => (0x0F, 0x05),
        0x34 => (0x04, 0x03),
        0x35 => (0x12, 0x00),
        0x36 => (0x03, 0x05),
        0x39 => (0x0F, 0x03),
        0x3C => (0x0B, 0x02),
        0x3D => (0x05, 0x03),
        0x3E => (0x06, 0x04),
        0x3F => (0x1C, 0x03),
        0x43 => (0x0F, 0x03),
        0x46 => match disambiguation {
            b'E' => (0x0A, 0x03),
            _ => (0x14, 0x05),
        },
        0x49 => (0x08, 0x05),
        0x4B => (0x0E, 0x03),
        0x4E => (0x0B, 0x05),
        0x50 => (0x0C, 0x05),
        0x52 => (0x0F, 0x05),
        0x58 => (0x16, 0x00),
        0x59 => (0x00, 0x05),
        0x5C => (0x08, 0x05),
        0x5D => (0x0F, 0x05),
        0x61 => match disambiguation {
            b'A' => (0x0E, 0x05),
            _ => (0x0B, 0x01),
        },
        0x66 => match disambiguation {
            b'E' => (0x04, 0x03),
            _ => (0x1C, 0x03),
        },
        0x67 => (0x12, 0x00),
        0x68 => (0x0F, 0x05),
        0x69 => (0x07, 0x04),
        0x6A => match disambiguation {
            b'K' => (0x0C, 0x05),
            _ => (0x05, 0x03),
        },
        0x6B => (0x0C, 0x05),
        0x6D => (0x0F, 0x05),
        0x6F => (0x1B, 0x00),
        0x70 => (0x11, 0x05),
        0x71 => (0x06, 0x00),
        0x75 => (0x12, 0x00),
        0x86 => (0x01, 0x05),
        0x88 => (0x08, 0x00),
        0x8B => (0x0E, 0x05),
        0x8C => (0x00, 0x01),
        0x90 => (0x0E, 0x03),
        0x92 => (0x12, 0x00),
        0x95 => (0x05, 0x04),
        0x97 => (0x0F, 0x03),
        0x99 => (0x12, 0x00),
        0x9A => (0x0E, 0x03),
        0x9C => (0x0C, 0x02),
        0x9D => (0x0D, 0x05),
        0xA2 => (0x12, 0x05),
        0xA5 => match disambiguation {
            b'R' => (0x12, 0x03),
            _ => (0x13, 0x00),
        },
        0xA8 => (0x01, 0x05),
        0xAA => (0x1C, 0x01),
        0xB3 => match disambiguation {
            b'U' => (0x00, 0x03),
            b'R' => (0x05, 0x04),
            _ => (0x08, 0x05),
        },
        0xB7 => (0x12, 0x00),
        0xBD => (0x0E, 0x03),
        0xBF => match disambiguation {
            b'C' => (0x02, 0x05),
            _ => (0x0D, 0x03),
        },
        0xC6 => match disambiguation {
            b' ' => (0x1C, 0x03),
            _ => (0x00, 0x05),
        },
        0xC9 => (0x09, 0x05),
        0xCE => (0x02, 0x05),
        0xD1 => (0x02, 0x05),
        0xD3 => match disambiguation {
            b'R' => (0x0D, 0x01),
            _ => (0x15, 0x05),
        },
        0xDB => (0x07, 0x00),
        0xE0 => (0x06, 0x04),
        0xE8 => (0x13, 0x00),
        0xF0 => (0x02, 0x05),
        0xF2 => (0x07, 0x04),
        0xF4 => match disambiguation {
            b' ' => (0x04, 0x03),
            _ => (0x1C, 0x05),
        },
        0xF6 => (0x0F, 0x05),
        0xF7 => (0x12, 0x05),
        0xFF => (0x06, 0x00),
        _ => {
            log::error!("No palette found for checksum 0x{checksum:02X}");
            return PaletteKey::DEFAULT;
        }
    };
    PaletteKey::new(entry, flags)
}

pub fn auto_assign(checksum: u8, title: &[u8]) -> Palette {
    log::info!(
        "auto_assign_palette(0x{checksum:02X}, {})",
        String::from_utf8_lossy(title)
    );
    color_palette(auto_assign_key(checksum, title))
}

/// Maps a manual selection to one of the boot-ROM button-combo palettes.
pub fn manual_assign_key(selection: u8) -> PaletteKey {
    match selection {
        0 => PaletteKey::new(0x05, 0x00),
        1 => PaletteKey::new(0x07, 0x00),
        2 => PaletteKey::new(0x12, 0x00),
        3 => PaletteKey::new(0x13, 0x00),
        4 => PaletteKey::new(0x16, 0x00),
        5 => PaletteKey::new(0x17, 0x00),
        6 => PaletteKey::new(0x19, 0x03),
        7 => PaletteKey::new(0x1C, 0x03),
        8 => PaletteKey::new(0x0D, 0x05),
        9 => PaletteKey::new(0x10, 0x05),
        10 => PaletteKey::new(0x18, 0x05),
        11 => PaletteKey::new(0x1A, 0x05),
        _ => PaletteKey::DEFAULT,
    }
}

pub fn manual_assign(selection: u8) -> Palette {
    log::info!("manual_assign_palette({selection})");
    color_palette(manual_assign_key(selection))
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum PaletteChoice {
    #[default]
    Auto,
    Manual(u8),
}

/// Cycles through automatic assignment and the manual palettes.
#[derive(Copy, Clone, Debug, Default)]
pub struct PaletteSelector {
    selected: u8,
}

impl PaletteSelector {
    const CHOICES: u8 = MANUAL_PALETTE_COUNT + 1;

    pub fn choice(&self) -> PaletteChoice {
        match self.selected {
            0 => PaletteChoice::Auto,
            n => PaletteChoice::Manual(n - 1),
        }
    }

    pub fn select_next(&mut self) -> PaletteChoice {
        self.selected = (self.selected + 1) % Self::CHOICES;
        self.choice()
    }

    pub fn select_prev(&mut self) -> PaletteChoice {
        self.selected = (self.selected + Self::CHOICES - 1) % Self::CHOICES;
        self.choice()
    }

    /// Resolves the current choice for a cartridge.
    pub fn palette(&self, checksum: u8, title: &[u8]) -> Palette {
        match self.choice() {
            PaletteChoice::Auto => auto_assign(checksum, title),
            PaletteChoice::Manual(selection) => manual_assign(selection),
        }
    }
}
