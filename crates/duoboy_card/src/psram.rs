use anyhow::{bail, ensure, Result};

/// Capacity of the external PSRAM part.
pub const PSRAM_SIZE: usize = 8 * 1024 * 1024;
/// Bytes moved per bus transaction.
pub const PSRAM_CHUNK: usize = 4096;

/// Byte-addressable memory outside the flash, for images too large for it.
pub trait AuxMemory {
    /// Brings the memory up. Must succeed before any read or write.
    fn init(&mut self) -> Result<()>;
    fn size(&self) -> usize;
    fn write(&mut self, addr: usize, data: &[u8]) -> Result<()>;
    fn read(&self, addr: usize, buf: &mut [u8]) -> Result<()>;
}

/// Host model of an SPI PSRAM chip.
#[derive(Debug)]
pub struct MemoryPsram {
    size: usize,
    data: Option<Vec<u8>>,
    present: bool,
    transactions: usize,
}

impl Default for MemoryPsram {
    fn default() -> Self {
        Self::new(PSRAM_SIZE)
    }
}

impl MemoryPsram {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            data: None,
            present: true,
            transactions: 0,
        }
    }

    /// A board without the part fitted: `init` fails.
    pub fn unavailable() -> Self {
        Self {
            present: false,
            ..Self::default()
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.data.is_some()
    }

    /// Chunked bus transactions performed so far.
    pub fn transactions(&self) -> usize {
        self.transactions
    }

    fn check_range(&self, addr: usize, len: usize) -> Result<()> {
        ensure!(
            addr.checked_add(len).is_some_and(|end| end <= self.size),
            "PSRAM access 0x{addr:X}+0x{len:X} past end 0x{:X}",
            self.size
        );
        Ok(())
    }
}

impl AuxMemory for MemoryPsram {
    fn init(&mut self) -> Result<()> {
        if !self.present {
            bail!("No PSRAM detected");
        }
        if self.data.is_none() {
            self.data = Some(vec![0; self.size]);
            log::info!("PSRAM ready, {} KiB", self.size / 1024);
        }
        Ok(())
    }

    fn size(&self) -> usize {
        self.size
    }

    fn write(&mut self, addr: usize, data: &[u8]) -> Result<()> {
        self.check_range(addr, data.len())?;
        let Some(memory) = self.data.as_mut() else {
            bail!("PSRAM written before init");
        };
        for (i, chunk) in data.chunks(PSRAM_CHUNK).enumerate() {
            let start = addr + i * PSRAM_CHUNK;
            memory[start..start + chunk.len()].copy_from_slice(chunk);
            self.transactions += 1;
        }
        Ok(())
    }

    fn read(&self, addr: usize, buf: &mut [u8]) -> Result<()> {
        self.check_range(addr, buf.len())?;
        let Some(memory) = self.data.as_ref() else {
            bail!("PSRAM read before init");
        };
        for (i, chunk) in buf.chunks_mut(PSRAM_CHUNK).enumerate() {
            let start = addr + i * PSRAM_CHUNK;
            chunk.copy_from_slice(&memory[start..start + chunk.len()]);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_requires_init() {
        let mut psram = MemoryPsram::new(0x4000);
        assert!(psram.write(0, &[1]).is_err());
        psram.init().unwrap();
        psram.write(0x10, &[1, 2, 3]).unwrap();

        let mut buf = [0u8; 3];
        psram.read(0x10, &mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3]);
    }

    #[test]
    fn writes_are_split_into_chunks() {
        let mut psram = MemoryPsram::default();
        psram.init().unwrap();
        let data = vec![0xA5; PSRAM_CHUNK * 2 + 1];
        psram.write(PSRAM_SIZE - data.len(), &data).unwrap();
        assert_eq!(psram.transactions(), 3);

        let mut tail = [0u8; 1];
        psram.read(PSRAM_SIZE - 1, &mut tail).unwrap();
        assert_eq!(tail, [0xA5]);
    }

    #[test]
    fn access_past_end_fails() {
        let mut psram = MemoryPsram::new(0x1000);
        psram.init().unwrap();
        assert!(psram.write(0xFFF, &[0, 0]).is_err());
        assert!(psram.read(0x1000, &mut [0]).is_err());
        assert!(psram.write(usize::MAX, &[0]).is_err());
    }

    #[test]
    fn missing_part_fails_init() {
        let mut psram = MemoryPsram::unavailable();
        assert!(psram.init().is_err());
        assert!(!psram.is_initialized());
    }
}
