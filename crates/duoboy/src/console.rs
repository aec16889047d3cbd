use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use anyhow::{anyhow, bail, Context, Result};
use duoboy_card::header::HEADER_END;
use duoboy_card::{
    load_cart_ram, save_cart_ram, CardStorage, CartridgeFile, CartridgeHeader, EmulatorState,
    FileBrowser, FlashConfig, FlashRegion, GameSystem, HostInterrupts, LoaderKind, MemoryFlash,
    MemoryPsram, RomLoader, SaveStateLayout, SaveStateManager,
};
use duoboy_common::{PixelLine, DISPLAY_HEIGHT, DISPLAY_WIDTH, LCD_HEIGHT, LCD_WIDTH};
use duoboy_lcd::palette::PaletteChoice;
use duoboy_lcd::{
    line_channel, ColorSource, DisplayConfig, DisplayCore, LineSender, MemoryPanel,
    PaletteSelector, ScalingMode,
};
use typed_builder::TypedBuilder;

use crate::source::ScanlineSource;

#[derive(TypedBuilder, Clone, Debug)]
pub struct ConsoleConfig {
    #[builder(setter(into))]
    pub card_root: PathBuf,
    #[builder(default)]
    pub loader: LoaderKind,
    #[builder(default)]
    pub layout: SaveStateLayout,
    #[builder(default)]
    pub display: DisplayConfig,
    #[builder(default)]
    pub flash: FlashConfig,
    #[builder(default)]
    pub system: GameSystem,
}

struct LoadedCartridge {
    header: CartridgeHeader,
    saves: SaveStateManager,
    ram: Vec<u8>,
}

/// One power-on session: the card, the ROM loader and the display core
/// running on its own thread.
pub struct Console {
    storage: CardStorage,
    browser: FileBrowser,
    loader: RomLoader,
    layout: SaveStateLayout,
    sender: LineSender,
    display: JoinHandle<MemoryPanel>,
    palette: PaletteSelector,
    scaling: ScalingMode,
    cartridge: Option<LoadedCartridge>,
    state: EmulatorState,
    frames: u64,
}

impl Console {
    /// Mounts the card, prepares the loader and starts the display core.
    pub fn start(config: ConsoleConfig) -> Result<Self> {
        let storage = CardStorage::mount(&config.card_root)?;
        let browser = FileBrowser::open(&storage, config.system)?;

        let flash = MemoryFlash::new(config.flash.flash_size as usize);
        let region = FlashRegion::new(
            Box::new(flash),
            Box::new(HostInterrupts::default()),
            config.flash.clone(),
        )?;
        let loader = RomLoader::new(config.loader, region, Box::new(MemoryPsram::default()))?;

        let (sender, receiver) = line_channel(ColorSource::default());
        let panel = MemoryPanel::new(DISPLAY_WIDTH as u16, DISPLAY_HEIGHT as u16);
        let core = DisplayCore::new(receiver, panel, &config.display);
        let display = thread::Builder::new()
            .name("display".to_string())
            .spawn(move || core.run())
            .context("Failed to start the display core")?;

        log::info!(
            "Console started: {:?} loader, {} byte ROM capacity",
            loader.kind(),
            loader.capacity()
        );
        Ok(Self {
            storage,
            browser,
            loader,
            layout: config.layout,
            sender,
            display,
            palette: PaletteSelector::default(),
            scaling: config.display.scaling,
            cartridge: None,
            state: EmulatorState::default(),
            frames: 0,
        })
    }

    pub fn storage(&self) -> &CardStorage {
        &self.storage
    }

    pub fn system(&self) -> GameSystem {
        self.browser.system()
    }

    pub fn page(&self) -> usize {
        self.browser.page()
    }

    pub fn files(&self) -> &[CartridgeFile] {
        self.browser.files()
    }

    pub fn next_page(&mut self) -> Result<bool> {
        self.browser.next_page(&self.storage)
    }

    pub fn prev_page(&mut self) -> Result<bool> {
        self.browser.prev_page(&self.storage)
    }

    pub fn toggle_system(&mut self) -> Result<()> {
        self.browser.toggle_system(&self.storage)
    }

    /// Every cartridge of the current system, page by page. Leaves the
    /// browser on the first page.
    pub fn list_all(&mut self) -> Result<Vec<CartridgeFile>> {
        while self.browser.prev_page(&self.storage)? {}
        let mut files = self.browser.files().to_vec();
        while self.browser.next_page(&self.storage)? {
            files.extend_from_slice(self.browser.files());
        }
        while self.browser.prev_page(&self.storage)? {}
        Ok(files)
    }

    /// Finds `name` in the current system's directory, paging forward from
    /// the first page.
    pub fn select_by_name(&mut self, name: &str) -> Result<String> {
        while self.browser.prev_page(&self.storage)? {}
        loop {
            if let Some(index) = self.browser.files().iter().position(|f| f.name == name) {
                return self.browser.selected_path(index);
            }
            if !self.browser.next_page(&self.storage)? {
                bail!("No cartridge named '{name}' for {:?}", self.system());
            }
        }
    }

    /// Streams a ROM from the card into the loader and prepares its saves.
    pub fn load_rom(&mut self, path: &str) -> Result<&CartridgeHeader> {
        let mut file = self.storage.open_rom(path)?;
        self.loader.load(&mut file)?;

        let mut head = [0u8; HEADER_END];
        self.loader.read(0, &mut head)?;
        let header = CartridgeHeader::parse(&head)?;
        log::info!(
            "Cartridge '{}': type 0x{:02X} {:?}, {} bytes of RAM",
            header.title,
            header.cart_type,
            header.features(),
            header.save_size()
        );

        self.apply_palette(&header);
        let mut ram = vec![0u8; header.save_size()];
        load_cart_ram(&self.storage, &header, &mut ram)?;
        self.state = EmulatorState::default();
        let saves = SaveStateManager::new(header.title.clone(), self.layout);
        let cartridge = self.cartridge.insert(LoadedCartridge { header, saves, ram });
        Ok(&cartridge.header)
    }

    pub fn header(&self) -> Option<&CartridgeHeader> {
        self.cartridge.as_ref().map(|c| &c.header)
    }

    pub fn palette_choice(&self) -> PaletteChoice {
        self.palette.choice()
    }

    /// Moves to the next palette and applies it to the loaded cartridge.
    pub fn cycle_palette(&mut self) -> PaletteChoice {
        let choice = self.palette.select_next();
        if let Some(cartridge) = &self.cartridge {
            let palette = self
                .palette
                .palette(cartridge.header.checksum, cartridge.header.title_bytes());
            self.sender.set_colors(ColorSource::Dmg(palette));
        }
        log::info!("Palette: {choice:?}");
        choice
    }

    pub fn scaling_mode(&self) -> ScalingMode {
        self.scaling
    }

    pub fn cycle_scaling(&mut self) -> Result<ScalingMode> {
        self.set_scaling(self.scaling.cycled())?;
        Ok(self.scaling)
    }

    pub fn set_scaling(&mut self, mode: ScalingMode) -> Result<()> {
        self.sender.set_scaling_mode(mode)?;
        self.scaling = mode;
        Ok(())
    }

    /// Installs a colour table from a colour-enhanced title.
    pub fn set_color_table(&mut self, table: [u16; 64]) {
        self.sender.set_colors(ColorSource::Cgb(Box::new(table)));
    }

    /// Hands all 144 lines of one frame to the display core.
    pub fn run_frame(&mut self, source: &mut dyn ScanlineSource) -> Result<()> {
        let mut pixels: PixelLine = [0; LCD_WIDTH];
        for line in 0..LCD_HEIGHT as u8 {
            source.render_line(line, &mut pixels);
            self.sender.enqueue_line(line, &pixels)?;
        }
        source.end_frame();
        self.frames += 1;
        Ok(())
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn state(&self) -> &EmulatorState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut EmulatorState {
        &mut self.state
    }

    pub fn cart_ram(&self) -> &[u8] {
        match &self.cartridge {
            Some(cartridge) => &cartridge.ram,
            None => &[],
        }
    }

    pub fn cart_ram_mut(&mut self) -> &mut [u8] {
        match &mut self.cartridge {
            Some(cartridge) => &mut cartridge.ram,
            None => &mut [],
        }
    }

    pub fn has_quick_resume(&self) -> bool {
        self.cartridge
            .as_ref()
            .is_some_and(|c| c.saves.has_quick_resume())
    }

    pub fn save_state(&mut self) -> Result<()> {
        let Some(cartridge) = self.cartridge.as_mut() else {
            bail!("No cartridge loaded");
        };
        cartridge.saves.save(&self.storage, &self.state);
        Ok(())
    }

    /// Returns false when no state has been saved for this cartridge.
    pub fn load_state(&mut self) -> Result<bool> {
        let Some(cartridge) = self.cartridge.as_mut() else {
            bail!("No cartridge loaded");
        };
        cartridge.saves.load(&self.storage, &mut self.state)
    }

    pub fn save_cart_ram(&self) -> Result<bool> {
        let Some(cartridge) = &self.cartridge else {
            bail!("No cartridge loaded");
        };
        save_cart_ram(&self.storage, &cartridge.header, &cartridge.ram)
    }

    /// Stops the display core and returns its panel.
    pub fn shutdown(self) -> Result<MemoryPanel> {
        let Self {
            sender, display, ..
        } = self;
        drop(sender);
        display
            .join()
            .map_err(|_| anyhow!("Display core panicked"))
    }

    fn apply_palette(&self, header: &CartridgeHeader) {
        let palette = self.palette.palette(header.checksum, header.title_bytes());
        self.sender.set_colors(ColorSource::Dmg(palette));
    }
}
