mod assign;
mod table;

pub use assign::{
    auto_assign, auto_assign_key, manual_assign, manual_assign_key, PaletteChoice,
    PaletteSelector, MANUAL_PALETTE_COUNT,
};

use duoboy_common::Color;

/// Bits of a raw pixel code that select the sub-palette.
pub const PALETTE_SELECT_MASK: u8 = 0x30;
/// Bits of a raw pixel code that select the shade.
pub const SHADE_MASK: u8 = 0x03;
/// Bits of a raw pixel code that index the enhanced-colour table.
pub const FIX_PALETTE_MASK: u8 = 0x3F;
/// Entries in the enhanced-colour fixed table.
pub const FIX_PALETTE_LEN: usize = 0x40;

/// Three four-shade sub-palettes, ordered OBJ0, OBJ1, BG.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Palette {
    pub obj0: [Color; 4],
    pub obj1: [Color; 4],
    pub bg: [Color; 4],
}

const DMG_SHADES: [Color; 4] = [
    Color::new_rgb565(0x1B, 0x3F, 0x0A),
    Color::new_rgb565(0x15, 0x33, 0x08),
    Color::new_rgb565(0x0E, 0x27, 0x06),
    Color::new_rgb565(0x08, 0x1C, 0x08),
];

impl Palette {
    /// The monochrome four shades of green.
    pub const DMG: Palette = Palette::new(DMG_SHADES, DMG_SHADES, DMG_SHADES);

    pub const fn new(obj0: [Color; 4], obj1: [Color; 4], bg: [Color; 4]) -> Self {
        Self { obj0, obj1, bg }
    }

    /// Resolves a raw pixel code.
    ///
    /// Selector `3` never comes out of the PPU; it is treated as background.
    #[inline]
    pub fn resolve(&self, code: u8) -> Color {
        let shade = (code & SHADE_MASK) as usize;
        match (code & PALETTE_SELECT_MASK) >> 4 {
            0 => self.obj0[shade],
            1 => self.obj1[shade],
            _ => self.bg[shade],
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::DMG
    }
}

/// Identifies one palette of the colour boot-ROM database.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PaletteKey {
    pub entry: u8,
    pub flags: u8,
}

impl PaletteKey {
    /// Selects [`Palette::DMG`].
    pub const DEFAULT: PaletteKey = PaletteKey::new(0xFF, 0xFF);

    pub const fn new(entry: u8, flags: u8) -> Self {
        Self { entry, flags }
    }
}

/// Looks up a palette by table entry and shuffling flags.
///
/// Unknown pairs fall back to [`Palette::DMG`].
pub fn color_palette(key: PaletteKey) -> Palette {
    log::debug!(
        "color_palette(table_entry=0x{:02X}, shuffling_flags=0x{:02X})",
        key.entry,
        key.flags
    );
    if key == PaletteKey::DEFAULT {
        return Palette::DMG;
    }
    match table::ENTRIES
        .iter()
        .find(|e| e.key == (key.entry, key.flags))
    {
        Some(entry) => entry.palette(),
        None => {
            log::error!(
                "No palette found for table_entry=0x{:02X} shuffling_flags=0x{:02X}",
                key.entry,
                key.flags
            );
            Palette::DMG
        }
    }
}

/// Where the compositor takes its colours from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ColorSource {
    /// Three sub-palettes indexed by selector and shade.
    Dmg(Palette),
    /// Precomputed RGB565 table supplied by the emulation core in
    /// enhanced-colour mode.
    Cgb(Box<[u16; FIX_PALETTE_LEN]>),
}

impl ColorSource {
    #[inline]
    pub fn resolve(&self, code: u8) -> Color {
        match self {
            ColorSource::Dmg(palette) => palette.resolve(code),
            ColorSource::Cgb(table) => Color(table[(code & FIX_PALETTE_MASK) as usize]),
        }
    }
}

impl Default for ColorSource {
    fn default() -> Self {
        ColorSource::Dmg(Palette::DMG)
    }
}

#[cfg(test)]
mod tests;
