use std::io::{self, Read};

use anyhow::{ensure, Result};
use duoboy_common::Fatal;

use crate::flash::{FlashRegion, FLASH_SECTOR_SIZE};
use crate::psram::AuxMemory;

/// Where a cartridge image is placed, fixed at start-up.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum LoaderKind {
    #[default]
    Flash,
    Aux,
    /// The first `flash_limit` bytes go to flash, the rest to aux memory.
    Split { flash_limit: usize },
}

pub enum RomLoader {
    Flash(FlashRegion),
    Aux(Box<dyn AuxMemory>),
    Split {
        flash: FlashRegion,
        aux: Box<dyn AuxMemory>,
        flash_limit: usize,
    },
}

impl RomLoader {
    pub fn new(kind: LoaderKind, flash: FlashRegion, aux: Box<dyn AuxMemory>) -> Result<Self> {
        match kind {
            LoaderKind::Flash => Ok(RomLoader::Flash(flash)),
            LoaderKind::Aux => Ok(RomLoader::Aux(aux)),
            LoaderKind::Split { flash_limit } => Self::split(flash, aux, flash_limit),
        }
    }

    pub fn split(flash: FlashRegion, aux: Box<dyn AuxMemory>, flash_limit: usize) -> Result<Self> {
        ensure!(
            flash_limit > 0 && flash_limit % flash.sector_size() == 0,
            "Split point 0x{flash_limit:X} is not a non-zero multiple of the sector size"
        );
        ensure!(
            flash_limit <= flash.capacity(),
            "Split point 0x{flash_limit:X} exceeds the flash region (0x{:X})",
            flash.capacity()
        );
        Ok(RomLoader::Split {
            flash,
            aux,
            flash_limit,
        })
    }

    pub fn kind(&self) -> LoaderKind {
        match self {
            RomLoader::Flash(_) => LoaderKind::Flash,
            RomLoader::Aux(_) => LoaderKind::Aux,
            RomLoader::Split { flash_limit, .. } => LoaderKind::Split {
                flash_limit: *flash_limit,
            },
        }
    }

    /// Largest image this loader can place.
    pub fn capacity(&self) -> usize {
        match self {
            RomLoader::Flash(flash) => flash.capacity(),
            RomLoader::Aux(aux) => aux.size(),
            RomLoader::Split {
                aux, flash_limit, ..
            } => flash_limit + aux.size(),
        }
    }

    fn sector_size(&self) -> usize {
        match self {
            RomLoader::Flash(flash) | RomLoader::Split { flash, .. } => flash.sector_size(),
            RomLoader::Aux(_) => FLASH_SECTOR_SIZE,
        }
    }

    /// Streams a cartridge image into place a sector at a time.
    ///
    /// Stops at end of input or when the loader is full. Returns the number
    /// of bytes placed.
    pub fn load(&mut self, reader: &mut dyn Read) -> Result<usize> {
        let sector_size = self.sector_size();
        let capacity = self.capacity();
        let mut buffer = vec![0u8; sector_size];
        let mut hasher = crc32fast::Hasher::new();
        let mut offset = 0;
        let mut loaded = 0;
        let mut aux_ready = false;

        if let RomLoader::Aux(aux) = self {
            init_aux(aux.as_mut())?;
            aux_ready = true;
        }

        log::info!("Loading ROM via {:?}, up to {capacity} bytes", self.kind());
        while offset < capacity {
            let nread = read_sector(reader, &mut buffer, offset)?;
            if nread == 0 {
                break;
            }
            let chunk = &buffer[..nread];
            match self {
                RomLoader::Flash(flash) => flash.write_sector(offset, chunk)?,
                RomLoader::Aux(aux) => write_aux(aux.as_mut(), offset, chunk)?,
                RomLoader::Split {
                    flash,
                    aux,
                    flash_limit,
                } => {
                    if offset < *flash_limit {
                        flash.write_sector(offset, chunk)?;
                    } else {
                        if !aux_ready {
                            log::info!("Switching to PSRAM at 0x{offset:07X}");
                            init_aux(aux.as_mut())?;
                            aux_ready = true;
                        }
                        write_aux(aux.as_mut(), offset - *flash_limit, chunk)?;
                    }
                }
            }
            hasher.update(chunk);
            loaded += nread;
            offset += sector_size;
        }

        if offset >= capacity {
            log::info!("Reached maximum ROM size (0x{capacity:X})");
        }
        log::info!("Loaded {loaded} bytes, crc32 {:08X}", hasher.finalize());
        Ok(loaded)
    }

    /// Reads back `buf.len()` bytes of the loaded image from `addr`.
    pub fn read(&self, addr: usize, buf: &mut [u8]) -> Result<()> {
        ensure!(
            addr.checked_add(buf.len()).is_some_and(|end| end <= self.capacity()),
            "ROM read 0x{addr:X}+0x{:X} past capacity",
            buf.len()
        );
        match self {
            RomLoader::Flash(flash) => {
                buf.copy_from_slice(&flash.image()[addr..addr + buf.len()]);
                Ok(())
            }
            RomLoader::Aux(aux) => aux.read(addr, buf),
            RomLoader::Split {
                flash,
                aux,
                flash_limit,
            } => {
                let in_flash = flash_limit.saturating_sub(addr).min(buf.len());
                let (head, tail) = buf.split_at_mut(in_flash);
                head.copy_from_slice(&flash.image()[addr..addr + in_flash]);
                if !tail.is_empty() {
                    aux.read(addr + in_flash - flash_limit, tail)?;
                }
                Ok(())
            }
        }
    }
}

fn init_aux(aux: &mut dyn AuxMemory) -> Result<()> {
    aux.init().map_err(|err| err.context(Fatal::AuxMemoryInit))
}

fn write_aux(aux: &mut dyn AuxMemory, addr: usize, data: &[u8]) -> Result<()> {
    aux.write(addr, data).map_err(|err| {
        err.context(Fatal::AuxMemoryWrite {
            addr: addr as u32,
        })
    })
}

/// Fills `buf` from `reader`, short only at end of input.
fn read_sector(reader: &mut dyn Read, buf: &mut [u8], offset: usize) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => {
                return Err(anyhow::Error::new(err).context(Fatal::RomRead {
                    offset: (offset + filled) as u32,
                }))
            }
        }
    }
    Ok(filled)
}
