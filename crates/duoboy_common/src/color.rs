/// A 16-bit RGB565 colour, the native format of the TFT panel.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color::new_rgb565(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb565(0x1F, 0x3F, 0x1F);
    pub const RED: Color = Color::new_rgb565(0x1F, 0, 0);
    pub const GREEN: Color = Color::new_rgb565(0, 0x3F, 0);
    pub const BLUE: Color = Color::new_rgb565(0, 0, 0x1F);

    /// Packs a 5-bit red, 6-bit green and 5-bit blue component.
    #[inline]
    pub const fn new_rgb565(r: u8, g: u8, b: u8) -> Color {
        Color(((r as u16 & 0x1F) << 11) | ((g as u16 & 0x3F) << 5) | (b as u16 & 0x1F))
    }

    #[inline]
    pub const fn raw(&self) -> u16 {
        self.0
    }

    /// Returns the packed `(r5, g6, b5)` components.
    #[inline]
    pub const fn rgb565(&self) -> (u8, u8, u8) {
        (
            (self.0 >> 11) as u8 & 0x1F,
            (self.0 >> 5) as u8 & 0x3F,
            self.0 as u8 & 0x1F,
        )
    }

    /// Exchanges the red and blue fields for BGR-ordered panels.
    #[inline]
    pub const fn to_bgr(self) -> Color {
        let (r, g, b) = self.rgb565();
        Color::new_rgb565(b, g, r)
    }

    /// Byte-swaps the word for controllers that expect big-endian pixels.
    #[inline]
    pub const fn swap_bytes(self) -> Color {
        Color(self.0.swap_bytes())
    }

    /// Expands to 8 bits per channel, replicating the high bits into the low ones.
    pub const fn to_rgb888(&self) -> (u8, u8, u8) {
        let (r, g, b) = self.rgb565();
        ((r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2))
    }
}

/// Channel order expected by the panel controller.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum ColorOrder {
    #[default]
    Rgb,
    Bgr,
}

impl ColorOrder {
    #[inline]
    pub const fn apply(self, color: Color) -> Color {
        match self {
            ColorOrder::Rgb => color,
            ColorOrder::Bgr => color.to_bgr(),
        }
    }
}
