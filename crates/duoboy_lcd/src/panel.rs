/// A TFT controller with an address window and an optional DMA engine.
///
/// Pixels are raw 16-bit words; channel order and byte order are the
/// caller's concern.
pub trait Panel {
    fn width(&self) -> u16;
    fn height(&self) -> u16;

    /// Sets the rectangle that subsequent pushes fill, row-major.
    fn set_window(&mut self, x: u16, y: u16, w: u16, h: u16);

    /// Streams `pixels` into the window, returning once they are sent.
    fn push_pixels(&mut self, pixels: &[u16]);

    /// Starts streaming `pixels` into the window in the background.
    ///
    /// `pixels` must stay untouched until [`Panel::dma_busy`] reports false.
    fn start_dma(&mut self, pixels: &[u16]) {
        self.push_pixels(pixels);
    }

    fn dma_busy(&self) -> bool {
        false
    }

    /// Blocks until any in-flight DMA transfer has finished.
    fn wait_dma(&mut self) {}

    fn fill(&mut self, pixel: u16) {
        let (w, h) = (self.width(), self.height());
        self.set_window(0, 0, w, h);
        let row = vec![pixel; usize::from(w)];
        for _ in 0..h {
            self.push_pixels(&row);
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
struct Window {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Panel memory simulated on the host.
///
/// DMA transfers complete immediately unless [`MemoryPanel::hold_dma`] is
/// set, in which case they stay in flight until waited on or completed.
pub struct MemoryPanel {
    width: u16,
    height: u16,
    memory: Vec<u16>,
    window: Window,
    cursor: usize,
    hold_dma: bool,
    in_flight: Option<(Window, Vec<u16>)>,
    dma_transfers: usize,
    dma_overlaps: usize,
    pushes: usize,
}

impl MemoryPanel {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            memory: vec![0; usize::from(width) * usize::from(height)],
            window: Window::default(),
            cursor: 0,
            hold_dma: false,
            in_flight: None,
            dma_transfers: 0,
            dma_overlaps: 0,
            pushes: 0,
        }
    }

    pub fn hold_dma(&mut self, hold: bool) {
        self.hold_dma = hold;
    }

    /// Lands the in-flight DMA transfer, if any.
    pub fn complete_dma(&mut self) {
        if let Some((window, pixels)) = self.in_flight.take() {
            let current = (self.window, self.cursor);
            self.window = window;
            self.cursor = 0;
            self.write(&pixels);
            (self.window, self.cursor) = current;
        }
    }

    pub fn pixel(&self, x: u16, y: u16) -> u16 {
        self.memory[usize::from(y) * usize::from(self.width) + usize::from(x)]
    }

    pub fn row(&self, y: u16) -> &[u16] {
        let start = usize::from(y) * usize::from(self.width);
        &self.memory[start..start + usize::from(self.width)]
    }

    /// Transfers started through DMA.
    pub fn dma_transfers(&self) -> usize {
        self.dma_transfers
    }

    /// DMA transfers started while another was still in flight.
    pub fn dma_overlaps(&self) -> usize {
        self.dma_overlaps
    }

    /// Blocking pushes, not counting fills.
    pub fn pushes(&self) -> usize {
        self.pushes
    }

    /// Dumps the panel as 8-bit RGB triples.
    pub fn to_rgb24(&self, swapped: bool) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.memory.len() * 3);
        for &word in &self.memory {
            let word = if swapped { word.swap_bytes() } else { word };
            let (r, g, b) = duoboy_common::Color(word).to_rgb888();
            out.extend_from_slice(&[r, g, b]);
        }
        out
    }

    fn write(&mut self, pixels: &[u16]) {
        let Window { x, y, w, h } = self.window;
        for &pixel in pixels {
            if w == 0 || self.cursor >= usize::from(w) * usize::from(h) {
                break;
            }
            let px = usize::from(x) + self.cursor % usize::from(w);
            let py = usize::from(y) + self.cursor / usize::from(w);
            if px < usize::from(self.width) && py < usize::from(self.height) {
                self.memory[py * usize::from(self.width) + px] = pixel;
            }
            self.cursor += 1;
        }
    }
}

impl Panel for MemoryPanel {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn set_window(&mut self, x: u16, y: u16, w: u16, h: u16) {
        self.window = Window { x, y, w, h };
        self.cursor = 0;
    }

    fn push_pixels(&mut self, pixels: &[u16]) {
        self.pushes += 1;
        self.write(pixels);
    }

    fn start_dma(&mut self, pixels: &[u16]) {
        self.dma_transfers += 1;
        if self.in_flight.is_some() {
            self.dma_overlaps += 1;
            self.complete_dma();
        }
        if self.hold_dma {
            self.in_flight = Some((self.window, pixels.to_vec()));
        } else {
            self.write(pixels);
        }
    }

    fn dma_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    fn wait_dma(&mut self) {
        self.complete_dma();
    }

    fn fill(&mut self, pixel: u16) {
        self.memory.fill(pixel);
    }
}
