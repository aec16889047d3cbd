use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use duoboy_common::Fatal;

/// Entries shown on one page of the ROM browser.
pub const FILES_PER_PAGE: usize = 22;
/// Longest card path accepted for a selected ROM.
pub const MAX_PATH_LENGTH: usize = 256;

/// File name used for per-cartridge saves when the title gives none.
pub const UNTITLED: &str = "UNTITLED";

/// Turns a cartridge title into a single file name inside a save directory.
///
/// Path separators become `_`. Empty titles and titles made only of dots
/// map to [`UNTITLED`].
pub fn title_file_name(title: &str) -> String {
    let name: String = title
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    if name.trim_matches('.').is_empty() {
        return UNTITLED.to_string();
    }
    name
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum GameSystem {
    #[default]
    Gb,
    Nes,
}

impl GameSystem {
    pub fn config(self) -> &'static SystemConfig {
        match self {
            GameSystem::Gb => &SystemConfig::GB,
            GameSystem::Nes => &SystemConfig::NES,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            GameSystem::Gb => GameSystem::Nes,
            GameSystem::Nes => GameSystem::Gb,
        }
    }
}

/// Where a system keeps its cartridges on the card.
#[derive(Debug, Eq, PartialEq)]
pub struct SystemConfig {
    pub system: GameSystem,
    /// Directory relative to the card root, with a trailing slash.
    pub dir: &'static str,
    /// Lowercase extensions including the dot.
    pub extensions: &'static [&'static str],
}

impl SystemConfig {
    pub const GB: SystemConfig = SystemConfig {
        system: GameSystem::Gb,
        dir: "gb/",
        extensions: &[".gb", ".gbc"],
    };

    pub const NES: SystemConfig = SystemConfig {
        system: GameSystem::Nes,
        dir: "nes/",
        extensions: &[".nes"],
    };

    /// Returns the matching extension, without its dot.
    fn match_extension(&self, name: &str) -> Option<&'static str> {
        let lower = name.to_ascii_lowercase();
        self.extensions
            .iter()
            .find(|ext| lower.ends_with(*ext))
            .map(|ext| &ext[1..])
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CartridgeFile {
    pub name: String,
    pub extension: String,
    pub page: usize,
}

/// The mounted storage card.
#[derive(Debug)]
pub struct CardStorage {
    root: PathBuf,
}

impl CardStorage {
    pub fn mount(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(Fatal::StorageMount { root }.into());
        }
        log::info!("Storage card mounted at '{}'", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Lists one page of cartridges, ordered by name.
    ///
    /// A page past the end yields no entries.
    pub fn list_page(&self, config: &SystemConfig, page: usize) -> Result<Vec<CartridgeFile>> {
        let dir = self.path(config.dir);
        let entries = fs::read_dir(&dir).map_err(|err| {
            anyhow::Error::new(err).context(Fatal::DirectoryOpen { dir: dir.clone() })
        })?;

        let mut matches = Vec::new();
        for entry in entries {
            let entry = entry.with_context(|| format!("Failed to read '{}'", dir.display()))?;
            if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if let Some(extension) = config.match_extension(&name) {
                matches.push((name, extension));
            }
        }
        matches.sort();

        let files: Vec<CartridgeFile> = matches
            .into_iter()
            .skip(page * FILES_PER_PAGE)
            .take(FILES_PER_PAGE)
            .map(|(name, extension)| CartridgeFile {
                name,
                extension: extension.to_string(),
                page,
            })
            .collect();
        log::debug!("{}: page {page} holds {} files", config.dir, files.len());
        Ok(files)
    }

    pub fn open_rom(&self, relative: &str) -> Result<File> {
        let path = self.path(relative);
        let file = File::open(&path).map_err(|err| {
            anyhow::Error::new(err).context(Fatal::RomOpen { path: path.clone() })
        })?;
        log::info!("Opened ROM '{}'", path.display());
        Ok(file)
    }

    /// Reads a whole file, or `None` when it does not exist.
    pub fn read_file(&self, relative: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path(relative);
        match fs::read(&path) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(anyhow::Error::new(err).context(format!("Failed to read '{}'", path.display())))
            }
        }
    }

    pub fn write_file(&self, relative: &str, data: &[u8]) -> Result<()> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create '{}'", parent.display()))?;
        }
        let mut file = File::create(&path)
            .with_context(|| format!("Failed to create '{}'", path.display()))?;
        file.write_all(data)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        if let Err(err) = file.sync_all() {
            log::error!("Failed to sync '{}': {err}", path.display());
        }
        Ok(())
    }
}

/// Paged view of one system's cartridge directory.
#[derive(Debug)]
pub struct FileBrowser {
    config: &'static SystemConfig,
    page: usize,
    files: Vec<CartridgeFile>,
}

impl FileBrowser {
    pub fn open(storage: &CardStorage, system: GameSystem) -> Result<Self> {
        let config = system.config();
        let files = storage.list_page(config, 0)?;
        Ok(Self {
            config,
            page: 0,
            files,
        })
    }

    pub fn system(&self) -> GameSystem {
        self.config.system
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn files(&self) -> &[CartridgeFile] {
        &self.files
    }

    /// Advances one page. Returns false when already on the last page.
    pub fn next_page(&mut self, storage: &CardStorage) -> Result<bool> {
        if self.files.len() < FILES_PER_PAGE {
            return Ok(false);
        }
        self.page += 1;
        self.files = storage.list_page(self.config, self.page)?;
        if self.files.is_empty() {
            self.page -= 1;
            self.files = storage.list_page(self.config, self.page)?;
            return Ok(false);
        }
        Ok(true)
    }

    pub fn prev_page(&mut self, storage: &CardStorage) -> Result<bool> {
        if self.page == 0 {
            return Ok(false);
        }
        self.page -= 1;
        self.files = storage.list_page(self.config, self.page)?;
        Ok(true)
    }

    pub fn toggle_system(&mut self, storage: &CardStorage) -> Result<()> {
        self.config = self.config.system.toggled().config();
        self.page = 0;
        self.files = storage.list_page(self.config, 0)?;
        log::info!("Browsing {:?} cartridges", self.config.system);
        Ok(())
    }

    /// Card-relative path of the file at `index` on the current page.
    pub fn selected_path(&self, index: usize) -> Result<String> {
        let Some(file) = self.files.get(index) else {
            bail!("No file at index {index} on page {}", self.page);
        };
        let path = format!("{}{}", self.config.dir, file.name);
        if path.len() > MAX_PATH_LENGTH {
            bail!("Path too long ({} bytes): {path}", path.len());
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests;
