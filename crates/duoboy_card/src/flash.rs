use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{bail, ensure, Result};
use duoboy_common::Fatal;
use typed_builder::TypedBuilder;

/// Erase granularity of the on-board flash.
pub const FLASH_SECTOR_SIZE: usize = 4096;

const ERASED: u8 = 0xFF;

/// Placement of the cartridge region inside the board's flash.
#[derive(TypedBuilder, Clone, Debug, Eq, PartialEq)]
pub struct FlashConfig {
    #[builder(default = 16 * 1024 * 1024)]
    pub flash_size: u32,
    /// First byte after the firmware image.
    #[builder(default = 0x10_0000)]
    pub region_start: u32,
    #[builder(default = FLASH_SECTOR_SIZE as u32)]
    pub sector_size: u32,
    /// Sectors kept free at the end of flash for settings.
    #[builder(default = 1)]
    pub reserved_tail_sectors: u32,
}

impl Default for FlashConfig {
    fn default() -> Self {
        FlashConfig::builder().build()
    }
}

impl FlashConfig {
    pub fn region_end(&self) -> u32 {
        self.flash_size
            .saturating_sub(self.reserved_tail_sectors.saturating_mul(self.sector_size))
    }

    /// Largest image the region can hold.
    pub fn max_rom_size(&self) -> usize {
        self.region_end().saturating_sub(self.region_start) as usize
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.sector_size.is_power_of_two(),
            "Flash sector size {} is not a power of two",
            self.sector_size
        );
        ensure!(
            self.region_start % self.sector_size == 0,
            "Flash region start 0x{:X} is not sector aligned",
            self.region_start
        );
        ensure!(
            self.region_start < self.region_end(),
            "Flash region 0x{:X}..0x{:X} is empty",
            self.region_start,
            self.region_end()
        );
        Ok(())
    }
}

/// NOR flash with sector erase, program and a memory-mapped read view.
pub trait FlashDevice {
    fn size(&self) -> usize;
    fn erase(&mut self, offset: u32, len: usize) -> Result<()>;
    /// Programs `data` at `offset`. Programming can only clear bits.
    fn program(&mut self, offset: u32, data: &[u8]) -> Result<()>;
    /// The execute-in-place view of the whole device.
    fn xip(&self) -> &[u8];
}

/// Host model of a NOR flash chip.
#[derive(Debug, Clone)]
pub struct MemoryFlash {
    data: Vec<u8>,
    sector_size: usize,
    stuck_low: Vec<(usize, u8)>,
    erases: usize,
    programs: usize,
}

impl MemoryFlash {
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![ERASED; size],
            sector_size: FLASH_SECTOR_SIZE,
            stuck_low: Vec::new(),
            erases: 0,
            programs: 0,
        }
    }

    /// Marks bits at `addr` that read back as zero whatever is programmed.
    pub fn stick_bits_low(&mut self, addr: usize, mask: u8) {
        self.stuck_low.push((addr, mask));
        self.data[addr] &= !mask;
    }

    /// Sector erases performed.
    pub fn erases(&self) -> usize {
        self.erases
    }

    /// Program operations performed.
    pub fn programs(&self) -> usize {
        self.programs
    }

    fn apply_stuck_bits(&mut self) {
        for &(addr, mask) in &self.stuck_low {
            self.data[addr] &= !mask;
        }
    }

    fn check_range(&self, offset: u32, len: usize) -> Result<usize> {
        let start = offset as usize;
        match start.checked_add(len) {
            Some(end) if end <= self.data.len() => Ok(start),
            _ => bail!("Flash access 0x{offset:X}+0x{len:X} out of range"),
        }
    }
}

impl FlashDevice for MemoryFlash {
    fn size(&self) -> usize {
        self.data.len()
    }

    fn erase(&mut self, offset: u32, len: usize) -> Result<()> {
        let start = self.check_range(offset, len)?;
        ensure!(
            start % self.sector_size == 0 && len % self.sector_size == 0,
            "Unaligned erase 0x{offset:X}+0x{len:X}"
        );
        self.data[start..start + len].fill(ERASED);
        self.apply_stuck_bits();
        self.erases += 1;
        Ok(())
    }

    fn program(&mut self, offset: u32, data: &[u8]) -> Result<()> {
        let start = self.check_range(offset, data.len())?;
        for (cell, &byte) in self.data[start..start + data.len()].iter_mut().zip(data) {
            *cell &= byte;
        }
        self.programs += 1;
        Ok(())
    }

    fn xip(&self) -> &[u8] {
        &self.data
    }
}

/// Masks interrupts on the core doing flash work.
pub trait InterruptControl {
    /// Disables interrupts and returns the state to restore.
    fn save_and_disable(&mut self) -> u32;
    fn restore(&mut self, saved: u32);
}

/// Interrupts stay disabled for the guard's lifetime.
pub struct InterruptsDisabled<'a> {
    control: &'a mut dyn InterruptControl,
    saved: u32,
}

impl<'a> InterruptsDisabled<'a> {
    pub fn new(control: &'a mut dyn InterruptControl) -> Self {
        let saved = control.save_and_disable();
        Self { control, saved }
    }
}

impl Drop for InterruptsDisabled<'_> {
    fn drop(&mut self) {
        self.control.restore(self.saved);
    }
}

/// Interrupt mask of the host process. Clones share the same mask.
#[derive(Clone, Debug, Default)]
pub struct HostInterrupts {
    masked: Arc<AtomicBool>,
}

impl HostInterrupts {
    pub fn is_masked(&self) -> bool {
        self.masked.load(Ordering::SeqCst)
    }
}

impl InterruptControl for HostInterrupts {
    fn save_and_disable(&mut self) -> u32 {
        u32::from(self.masked.swap(true, Ordering::SeqCst))
    }

    fn restore(&mut self, saved: u32) {
        self.masked.store(saved != 0, Ordering::SeqCst);
    }
}

/// The cartridge area of flash, written a sector at a time.
pub struct FlashRegion {
    device: Box<dyn FlashDevice>,
    interrupts: Box<dyn InterruptControl>,
    config: FlashConfig,
    sector: Vec<u8>,
}

impl FlashRegion {
    pub fn new(
        device: Box<dyn FlashDevice>,
        interrupts: Box<dyn InterruptControl>,
        config: FlashConfig,
    ) -> Result<Self> {
        config.validate()?;
        ensure!(
            device.size() >= config.flash_size as usize,
            "Flash device holds {} bytes, config expects {}",
            device.size(),
            config.flash_size
        );
        let sector = vec![ERASED; config.sector_size as usize];
        Ok(Self {
            device,
            interrupts,
            config,
            sector,
        })
    }

    pub fn config(&self) -> &FlashConfig {
        &self.config
    }

    pub fn sector_size(&self) -> usize {
        self.config.sector_size as usize
    }

    pub fn capacity(&self) -> usize {
        self.config.max_rom_size()
    }

    /// Erases, programs and verifies the sector at `offset` in the region.
    ///
    /// `data` shorter than a sector is padded with erased bytes. A read-back
    /// mismatch is fatal.
    pub fn write_sector(&mut self, offset: usize, data: &[u8]) -> Result<()> {
        let sector_size = self.sector_size();
        ensure!(
            data.len() <= sector_size,
            "Sector data too long ({} bytes)",
            data.len()
        );
        ensure!(
            offset % sector_size == 0 && offset + sector_size <= self.capacity(),
            "Sector offset 0x{offset:X} outside the cartridge region"
        );

        self.sector[..data.len()].copy_from_slice(data);
        self.sector[data.len()..].fill(ERASED);
        let addr = self.config.region_start + offset as u32;
        {
            let _masked = InterruptsDisabled::new(self.interrupts.as_mut());
            self.device.erase(addr, sector_size)?;
            self.device.program(addr, &self.sector)?;
        }

        let start = addr as usize;
        let written = &self.device.xip()[start..start + sector_size];
        if written != self.sector.as_slice() {
            log::error!("Flash verify failed at 0x{addr:07X}");
            return Err(Fatal::FlashMismatch { offset: addr }.into());
        }
        Ok(())
    }

    /// The loaded cartridge as seen through execute-in-place.
    pub fn image(&self) -> &[u8] {
        let start = self.config.region_start as usize;
        let end = self.config.region_end() as usize;
        &self.device.xip()[start..end]
    }
}

#[cfg(test)]
pub(crate) mod tests;
