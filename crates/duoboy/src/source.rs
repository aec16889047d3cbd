use duoboy_card::CartridgeHeader;
use duoboy_common::PixelLine;

/// Produces the raw pixel codes of each scanline, the way the PPU does.
///
/// Codes carry the palette selector in bits 4-5 and the shade in bits 0-1.
pub trait ScanlineSource {
    fn render_line(&mut self, line: u8, pixels: &mut PixelLine);

    /// Called once all 144 lines of a frame have been handed over.
    fn end_frame(&mut self) {}
}

/// Diagonal background stripes seeded from a cartridge header, scrolling one
/// pixel per frame. Stands in for the CPU core when exercising the display
/// pipeline.
#[derive(Clone, Debug)]
pub struct TestPattern {
    seed: u8,
    scroll: u8,
}

impl TestPattern {
    const BG: u8 = 0x20;

    pub fn new(header: &CartridgeHeader) -> Self {
        Self {
            seed: header.checksum,
            scroll: 0,
        }
    }
}

impl ScanlineSource for TestPattern {
    fn render_line(&mut self, line: u8, pixels: &mut PixelLine) {
        for (x, pixel) in pixels.iter_mut().enumerate() {
            let band = (x as u8)
                .wrapping_add(line)
                .wrapping_add(self.scroll)
                .wrapping_add(self.seed)
                / 8;
            *pixel = Self::BG | (band & 0x03);
        }
    }

    fn end_frame(&mut self) {
        self.scroll = self.scroll.wrapping_add(1);
    }
}

/// Every pixel of every line carries the same code.
#[derive(Copy, Clone, Debug)]
pub struct Solid(pub u8);

impl ScanlineSource for Solid {
    fn render_line(&mut self, _line: u8, pixels: &mut PixelLine) {
        pixels.fill(self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(checksum: u8) -> TestPattern {
        TestPattern {
            seed: checksum,
            scroll: 0,
        }
    }

    #[test]
    fn pattern_uses_background_codes_only() {
        let mut source = pattern(0x9C);
        let mut pixels = [0xFF; 160];
        for line in 0..144 {
            source.render_line(line, &mut pixels);
            assert!(pixels.iter().all(|&p| p & 0xFC == 0x20));
        }
    }

    #[test]
    fn pattern_scrolls_each_frame() {
        let mut source = pattern(0);
        let mut first = [0; 160];
        let mut second = [0; 160];
        source.render_line(0, &mut first);
        for _ in 0..8 {
            source.end_frame();
        }
        source.render_line(0, &mut second);
        assert_ne!(first, second);
        assert_eq!(first[8..], second[..152]);
    }

    #[test]
    fn solid_source_fills_the_line() {
        let mut pixels = [0; 160];
        Solid(0x13).render_line(7, &mut pixels);
        assert!(pixels.iter().all(|&p| p == 0x13));
    }
}
