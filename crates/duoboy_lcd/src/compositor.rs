use duoboy_common::{ColorOrder, PixelLine, LCD_HEIGHT, LCD_WIDTH};

use crate::palette::ColorSource;

/// How the 160x144 image is placed on the panel.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum ScalingMode {
    /// 1:1, centered.
    Normal = 0,
    /// Fills the panel: 2x horizontally, 5:3 vertically.
    #[default]
    Stretch = 1,
    /// Same vertical scale with matching column repeats, centered.
    StretchKeepAspect = 2,
}

impl ScalingMode {
    pub const COUNT: u8 = 3;

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(ScalingMode::Normal),
            1 => Some(ScalingMode::Stretch),
            2 => Some(ScalingMode::StretchKeepAspect),
            _ => None,
        }
    }

    /// The next mode in the user-facing cycle.
    pub const fn cycled(self) -> Self {
        match ScalingMode::from_u8((self as u8 + 1) % Self::COUNT) {
            Some(mode) => mode,
            None => ScalingMode::Normal,
        }
    }
}

/// Whether a native line (or column) is emitted twice when stretching.
///
/// Odd indices and multiples of six repeat, so 144 lines become 240 and
/// 160 columns become 267.
#[inline]
pub const fn is_repeated(index: usize) -> bool {
    index % 2 != 0 || index % 6 == 0
}

/// Placement tables for one scaling mode, computed when the mode is set.
#[derive(Clone, Debug)]
pub struct Layout {
    mode: ScalingMode,
    /// Panel column of the first scaled pixel.
    x: u16,
    /// Panel row of native line 0.
    y: u16,
    /// Destination row of each native line, relative to `y`.
    row_offsets: [u16; LCD_HEIGHT],
    /// Source column of each output column.
    columns: Vec<u8>,
}

impl Layout {
    pub fn new(mode: ScalingMode, display_width: u16, display_height: u16) -> Self {
        let stretch_rows = mode != ScalingMode::Normal;

        let mut row_offsets = [0u16; LCD_HEIGHT];
        let mut offset = 0u16;
        for (line, row) in row_offsets.iter_mut().enumerate() {
            *row = offset;
            offset += 1 + u16::from(stretch_rows && is_repeated(line));
        }
        let height = offset;

        let mut columns = Vec::with_capacity(LCD_WIDTH * 2);
        for x in 0..LCD_WIDTH {
            let copies = match mode {
                ScalingMode::Normal => 1,
                ScalingMode::Stretch => 2,
                ScalingMode::StretchKeepAspect => 1 + usize::from(is_repeated(x)),
            };
            columns.extend(std::iter::repeat(x as u8).take(copies));
        }
        let width = columns.len() as u16;

        debug_assert!(width <= display_width && height <= display_height);
        Self {
            mode,
            x: display_width.saturating_sub(width) / 2,
            y: display_height.saturating_sub(height) / 2,
            row_offsets,
            columns,
        }
    }

    pub fn mode(&self) -> ScalingMode {
        self.mode
    }

    /// Scaled image width in pixels.
    pub fn width(&self) -> u16 {
        self.columns.len() as u16
    }

    /// Scaled image height in pixels.
    pub fn height(&self) -> u16 {
        self.row_offsets[LCD_HEIGHT - 1] + u16::from(self.rows(LCD_HEIGHT - 1))
    }

    /// Left padding applied to center the image.
    pub fn x(&self) -> u16 {
        self.x
    }

    pub fn y(&self) -> u16 {
        self.y
    }

    /// Panel row of native `line`.
    pub fn row(&self, line: usize) -> u16 {
        self.y + self.row_offsets[line]
    }

    /// Number of panel rows native `line` occupies.
    pub fn rows(&self, line: usize) -> u8 {
        if self.mode != ScalingMode::Normal && is_repeated(line) {
            2
        } else {
            1
        }
    }

    pub fn columns(&self) -> &[u8] {
        &self.columns
    }
}

/// A resolved and scaled scanline ready for the display driver.
#[derive(Debug)]
pub struct ScaledLine<'a> {
    /// Native line index.
    pub line: u8,
    pub x: u16,
    pub y: u16,
    /// Identical panel rows to write, starting at `y`.
    pub rows: u8,
    /// Panel words, already in the controller's channel and byte order.
    pub pixels: &'a [u16],
}

/// Resolves raw pixel codes to panel colours and scales each line.
pub struct Compositor {
    layout: Layout,
    display_width: u16,
    display_height: u16,
    order: ColorOrder,
    swap_bytes: bool,
    resolved: [u16; LCD_WIDTH],
    scaled: Vec<u16>,
}

impl Compositor {
    pub fn new(
        mode: ScalingMode,
        display_width: u16,
        display_height: u16,
        order: ColorOrder,
        swap_bytes: bool,
    ) -> Self {
        Self {
            layout: Layout::new(mode, display_width, display_height),
            display_width,
            display_height,
            order,
            swap_bytes,
            resolved: [0; LCD_WIDTH],
            scaled: Vec::with_capacity(LCD_WIDTH * 2),
        }
    }

    pub fn mode(&self) -> ScalingMode {
        self.layout.mode()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Switches scaling mode and recomputes the placement tables.
    pub fn set_mode(&mut self, mode: ScalingMode) {
        if mode != self.layout.mode() {
            self.layout = Layout::new(mode, self.display_width, self.display_height);
        }
    }

    pub fn compose(&mut self, line: u8, pixels: &PixelLine, colors: &ColorSource) -> ScaledLine<'_> {
        let index = usize::from(line).min(LCD_HEIGHT - 1);
        for (dst, &code) in self.resolved.iter_mut().zip(pixels.iter()) {
            let color = self.order.apply(colors.resolve(code));
            *dst = if self.swap_bytes {
                color.swap_bytes().raw()
            } else {
                color.raw()
            };
        }

        self.scaled.clear();
        self.scaled.extend(
            self.layout
                .columns
                .iter()
                .map(|&src| self.resolved[usize::from(src)]),
        );

        ScaledLine {
            line,
            x: self.layout.x(),
            y: self.layout.row(index),
            rows: self.layout.rows(index),
            pixels: &self.scaled,
        }
    }
}
