use duoboy_common::Color;

use super::Palette;

/// One row of the colour boot-ROM palette database.
pub(super) struct PaletteEntry {
    pub(super) key: (u8, u8),
    obj0: [Color; 4],
    obj1: [Color; 4],
    bg: [Color; 4],
}

impl PaletteEntry {
    pub(super) const fn palette(&self) -> Palette {
        Palette::new(self.obj0, self.obj1, self.bg)
    }
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::new_rgb565(r, g, b)
}

#[rustfmt::skip]
pub(super) static ENTRIES: [PaletteEntry; 51] = [
    PaletteEntry {
        key: (0x00, 0x01),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x1C, 0x00), rgb(0x12, 0x10, 0x00), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x15, 0x2B, 0x10), rgb(0x08, 0x1C, 0x0F), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x15, 0x2B, 0x10), rgb(0x08, 0x1C, 0x0F), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x00, 0x03),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x1C, 0x00), rgb(0x12, 0x10, 0x00), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x1C, 0x00), rgb(0x12, 0x10, 0x00), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x15, 0x2B, 0x10), rgb(0x08, 0x1C, 0x0F), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x00, 0x05),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x1C, 0x00), rgb(0x12, 0x10, 0x00), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0B, 0x2F, 0x1F), rgb(0x1F, 0x00, 0x00), rgb(0x00, 0x00, 0x1F)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x15, 0x2B, 0x10), rgb(0x08, 0x1C, 0x0F), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x01, 0x05),
        obj0: [rgb(0x1F, 0x31, 0x08), rgb(0x1F, 0x35, 0x00), rgb(0x12, 0x0E, 0x00), rgb(0x09, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x13), rgb(0x12, 0x2D, 0x1F), rgb(0x0C, 0x25, 0x0E), rgb(0x00, 0x0E, 0x07)],
    },
    PaletteEntry {
        key: (0x02, 0x05),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x3F, 0x1F), rgb(0x0C, 0x29, 0x1F), rgb(0x00, 0x00, 0x1F)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x2B, 0x0C), rgb(0x10, 0x0C, 0x00), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x0D, 0x3F, 0x00), rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x14, 0x09), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x03, 0x05),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x3F, 0x1F), rgb(0x0C, 0x29, 0x1F), rgb(0x00, 0x00, 0x1F)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x0A, 0x37, 0x00), rgb(0x1F, 0x21, 0x00), rgb(0x1F, 0x3F, 0x00), rgb(0x1F, 0x3F, 0x1F)],
    },
    PaletteEntry {
        key: (0x04, 0x03),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0F, 0x3F, 0x00), rgb(0x16, 0x1C, 0x00), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x05, 0x00),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0A, 0x3F, 0x00), rgb(0x1F, 0x10, 0x00), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0A, 0x3F, 0x00), rgb(0x1F, 0x10, 0x00), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0A, 0x3F, 0x00), rgb(0x1F, 0x10, 0x00), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x05, 0x03),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0A, 0x3F, 0x00), rgb(0x1F, 0x10, 0x00), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x05, 0x04),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0A, 0x3F, 0x00), rgb(0x1F, 0x10, 0x00), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0B, 0x2F, 0x1F), rgb(0x1F, 0x00, 0x00), rgb(0x00, 0x00, 0x1F)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0A, 0x3F, 0x00), rgb(0x1F, 0x10, 0x00), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x06, 0x00),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x27, 0x00), rgb(0x1F, 0x00, 0x00), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x27, 0x00), rgb(0x1F, 0x00, 0x00), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x27, 0x00), rgb(0x1F, 0x00, 0x00), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x06, 0x03),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x27, 0x00), rgb(0x1F, 0x00, 0x00), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x06, 0x04),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x27, 0x00), rgb(0x1F, 0x00, 0x00), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0B, 0x2F, 0x1F), rgb(0x1F, 0x00, 0x00), rgb(0x00, 0x00, 0x1F)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x27, 0x00), rgb(0x1F, 0x00, 0x00), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x07, 0x00),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x3F, 0x00), rgb(0x1F, 0x00, 0x00), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x3F, 0x00), rgb(0x1F, 0x00, 0x00), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x3F, 0x00), rgb(0x1F, 0x00, 0x00), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x07, 0x04),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x3F, 0x00), rgb(0x1F, 0x00, 0x00), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0B, 0x2F, 0x1F), rgb(0x1F, 0x00, 0x00), rgb(0x00, 0x00, 0x1F)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x3F, 0x00), rgb(0x1F, 0x00, 0x00), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x08, 0x00),
        obj0: [rgb(0x14, 0x27, 0x1F), rgb(0x1F, 0x3F, 0x00), rgb(0x00, 0x18, 0x00), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x14, 0x27, 0x1F), rgb(0x1F, 0x3F, 0x00), rgb(0x00, 0x18, 0x00), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x14, 0x27, 0x1F), rgb(0x1F, 0x3F, 0x00), rgb(0x00, 0x18, 0x00), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x08, 0x03),
        obj0: [rgb(0x1F, 0x18, 0x0A), rgb(0x1A, 0x00, 0x00), rgb(0x0C, 0x00, 0x00), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x18, 0x0A), rgb(0x1A, 0x00, 0x00), rgb(0x0C, 0x00, 0x00), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x14, 0x27, 0x1F), rgb(0x1F, 0x3F, 0x00), rgb(0x00, 0x18, 0x00), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x08, 0x05),
        obj0: [rgb(0x1F, 0x18, 0x0A), rgb(0x1A, 0x00, 0x00), rgb(0x0C, 0x00, 0x00), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x00, 0x00, 0x1F), rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x3F, 0x0F), rgb(0x00, 0x21, 0x1F)],
        bg: [rgb(0x14, 0x27, 0x1F), rgb(0x1F, 0x3F, 0x00), rgb(0x00, 0x18, 0x00), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x09, 0x05),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x1C, 0x00), rgb(0x12, 0x10, 0x00), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0C, 0x29, 0x1F), rgb(0x00, 0x00, 0x1F), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x19), rgb(0x0C, 0x3B, 0x1D), rgb(0x13, 0x21, 0x06), rgb(0x0B, 0x16, 0x0B)],
    },
    PaletteEntry {
        key: (0x0A, 0x03),
        obj0: [rgb(0x00, 0x00, 0x00), rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07)],
        obj1: [rgb(0x00, 0x00, 0x00), rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07)],
        bg: [rgb(0x16, 0x2D, 0x1F), rgb(0x1F, 0x3F, 0x12), rgb(0x15, 0x16, 0x08), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x0B, 0x01),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0C, 0x29, 0x1F), rgb(0x00, 0x00, 0x1F), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0C, 0x29, 0x1F), rgb(0x00, 0x00, 0x1F), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x0B, 0x02),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0C, 0x29, 0x1F), rgb(0x00, 0x00, 0x1F), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0C, 0x29, 0x1F), rgb(0x00, 0x00, 0x1F), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x0B, 0x05),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x3F, 0x0F), rgb(0x00, 0x21, 0x1F), rgb(0x1F, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0C, 0x29, 0x1F), rgb(0x00, 0x00, 0x1F), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x0C, 0x02),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x11, 0x23, 0x1B), rgb(0x0A, 0x14, 0x11), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x31, 0x08), rgb(0x1F, 0x35, 0x00), rgb(0x12, 0x0E, 0x00), rgb(0x09, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x11, 0x23, 0x1B), rgb(0x0A, 0x14, 0x11), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x0C, 0x03),
        obj0: [rgb(0x1F, 0x31, 0x08), rgb(0x1F, 0x35, 0x00), rgb(0x12, 0x0E, 0x00), rgb(0x09, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x31, 0x08), rgb(0x1F, 0x35, 0x00), rgb(0x12, 0x0E, 0x00), rgb(0x09, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x11, 0x23, 0x1B), rgb(0x0A, 0x14, 0x11), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x0C, 0x05),
        obj0: [rgb(0x1F, 0x31, 0x08), rgb(0x1F, 0x35, 0x00), rgb(0x12, 0x0E, 0x00), rgb(0x09, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0B, 0x2F, 0x1F), rgb(0x1F, 0x00, 0x00), rgb(0x00, 0x00, 0x1F)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x11, 0x23, 0x1B), rgb(0x0A, 0x14, 0x11), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x0D, 0x01),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x11, 0x23, 0x1B), rgb(0x0A, 0x14, 0x11), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x11, 0x23, 0x1B), rgb(0x0A, 0x14, 0x11), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x0D, 0x03),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x11, 0x23, 0x1B), rgb(0x0A, 0x14, 0x11), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x0D, 0x05),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x2B, 0x0C), rgb(0x10, 0x0C, 0x00), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x11, 0x23, 0x1B), rgb(0x0A, 0x14, 0x11), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x0E, 0x03),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0F, 0x3F, 0x06), rgb(0x00, 0x21, 0x00), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x0E, 0x05),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0C, 0x29, 0x1F), rgb(0x00, 0x00, 0x1F), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0F, 0x3F, 0x06), rgb(0x00, 0x21, 0x00), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x0F, 0x03),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0C, 0x29, 0x1F), rgb(0x00, 0x00, 0x1F), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0C, 0x29, 0x1F), rgb(0x00, 0x00, 0x1F), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x2B, 0x0C), rgb(0x10, 0x0C, 0x00), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x0F, 0x05),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0C, 0x29, 0x1F), rgb(0x00, 0x00, 0x1F), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0F, 0x3F, 0x06), rgb(0x00, 0x21, 0x00), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x2B, 0x0C), rgb(0x10, 0x0C, 0x00), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x10, 0x01),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0F, 0x3F, 0x06), rgb(0x00, 0x21, 0x00), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x10, 0x05),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0F, 0x3F, 0x06), rgb(0x00, 0x21, 0x00), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0C, 0x29, 0x1F), rgb(0x00, 0x00, 0x1F), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x11, 0x05),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x00, 0x3F, 0x00), rgb(0x06, 0x21, 0x00), rgb(0x00, 0x12, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0C, 0x29, 0x1F), rgb(0x00, 0x00, 0x1F), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x12, 0x00),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x2B, 0x0C), rgb(0x10, 0x0C, 0x00), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x2B, 0x0C), rgb(0x10, 0x0C, 0x00), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x2B, 0x0C), rgb(0x10, 0x0C, 0x00), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x12, 0x03),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0F, 0x3F, 0x06), rgb(0x00, 0x21, 0x00), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0F, 0x3F, 0x06), rgb(0x00, 0x21, 0x00), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x2B, 0x0C), rgb(0x10, 0x0C, 0x00), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x12, 0x05),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0F, 0x3F, 0x06), rgb(0x00, 0x21, 0x00), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0C, 0x29, 0x1F), rgb(0x00, 0x00, 0x1F), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x2B, 0x0C), rgb(0x10, 0x0C, 0x00), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x13, 0x00),
        obj0: [rgb(0x00, 0x00, 0x00), rgb(0x00, 0x21, 0x10), rgb(0x1F, 0x37, 0x00), rgb(0x1F, 0x3F, 0x1F)],
        obj1: [rgb(0x00, 0x00, 0x00), rgb(0x00, 0x21, 0x10), rgb(0x1F, 0x37, 0x00), rgb(0x1F, 0x3F, 0x1F)],
        bg: [rgb(0x00, 0x00, 0x00), rgb(0x00, 0x21, 0x10), rgb(0x1F, 0x37, 0x00), rgb(0x1F, 0x3F, 0x1F)],
    },
    PaletteEntry {
        key: (0x14, 0x05),
        obj0: [rgb(0x1F, 0x3F, 0x00), rgb(0x1F, 0x00, 0x00), rgb(0x0C, 0x00, 0x00), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0F, 0x3F, 0x06), rgb(0x00, 0x21, 0x00), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0C, 0x29, 0x1F), rgb(0x00, 0x00, 0x1F), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x15, 0x05),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x2B, 0x0C), rgb(0x10, 0x0C, 0x00), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0C, 0x29, 0x1F), rgb(0x00, 0x00, 0x1F), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x15, 0x2B, 0x10), rgb(0x08, 0x1C, 0x0F), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x16, 0x00),
        obj0: [rgb(0x16, 0x31, 0x14), rgb(0x11, 0x26, 0x0F), rgb(0x0C, 0x1D, 0x0A), rgb(0x06, 0x0E, 0x04)],
        obj1: [rgb(0x16, 0x31, 0x14), rgb(0x11, 0x26, 0x0F), rgb(0x0C, 0x1D, 0x0A), rgb(0x06, 0x0E, 0x04)],
        bg: [rgb(0x16, 0x31, 0x14), rgb(0x11, 0x26, 0x0F), rgb(0x0C, 0x1D, 0x0A), rgb(0x06, 0x0E, 0x04)],
    },
    PaletteEntry {
        key: (0x17, 0x00),
        obj0: [rgb(0x1F, 0x3F, 0x14), rgb(0x1F, 0x25, 0x12), rgb(0x12, 0x25, 0x1F), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x14), rgb(0x1F, 0x25, 0x12), rgb(0x12, 0x25, 0x1F), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x14), rgb(0x1F, 0x25, 0x12), rgb(0x12, 0x25, 0x1F), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x18, 0x05),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0F, 0x3F, 0x06), rgb(0x00, 0x21, 0x00), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0C, 0x29, 0x1F), rgb(0x00, 0x00, 0x1F), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x19, 0x03),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x2B, 0x0C), rgb(0x10, 0x0C, 0x00), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x2B, 0x0C), rgb(0x10, 0x0C, 0x00), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x39, 0x18), rgb(0x19, 0x27, 0x10), rgb(0x10, 0x1A, 0x05), rgb(0x0B, 0x0C, 0x01)],
    },
    PaletteEntry {
        key: (0x1A, 0x05),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0C, 0x29, 0x1F), rgb(0x00, 0x00, 0x1F), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0F, 0x3F, 0x06), rgb(0x00, 0x21, 0x00), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x3F, 0x00), rgb(0x0F, 0x12, 0x00), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x1B, 0x00),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x33, 0x00), rgb(0x13, 0x18, 0x00), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x33, 0x00), rgb(0x13, 0x18, 0x00), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x33, 0x00), rgb(0x13, 0x18, 0x00), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x1C, 0x01),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0F, 0x3F, 0x06), rgb(0x00, 0x18, 0x18), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0F, 0x3F, 0x06), rgb(0x00, 0x18, 0x18), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x1C, 0x03),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0F, 0x3F, 0x06), rgb(0x00, 0x18, 0x18), rgb(0x00, 0x00, 0x00)],
    },
    PaletteEntry {
        key: (0x1C, 0x05),
        obj0: [rgb(0x1F, 0x3F, 0x1F), rgb(0x1F, 0x21, 0x10), rgb(0x12, 0x0E, 0x07), rgb(0x00, 0x00, 0x00)],
        obj1: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0C, 0x29, 0x1F), rgb(0x00, 0x00, 0x1F), rgb(0x00, 0x00, 0x00)],
        bg: [rgb(0x1F, 0x3F, 0x1F), rgb(0x0F, 0x3F, 0x06), rgb(0x00, 0x18, 0x18), rgb(0x00, 0x00, 0x00)],
    },
];
