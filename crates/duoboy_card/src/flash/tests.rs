use std::sync::{Arc, Mutex};

use duoboy_common::{fatal_cause, Fatal};

use super::*;

pub(crate) const TEST_FLASH_SIZE: u32 = 64 * 1024;

pub(crate) fn test_config() -> FlashConfig {
    FlashConfig::builder()
        .flash_size(TEST_FLASH_SIZE)
        .region_start(0x4000)
        .build()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    Erase { addr: u32, masked: bool },
    Program { addr: u32, masked: bool },
}

/// Records every device operation and whether interrupts were masked.
pub(crate) struct ProbeFlash {
    pub(crate) inner: MemoryFlash,
    pub(crate) interrupts: HostInterrupts,
    pub(crate) ops: Arc<Mutex<Vec<Op>>>,
}

impl FlashDevice for ProbeFlash {
    fn size(&self) -> usize {
        self.inner.size()
    }

    fn erase(&mut self, offset: u32, len: usize) -> Result<()> {
        let masked = self.interrupts.is_masked();
        self.ops.lock().unwrap().push(Op::Erase {
            addr: offset,
            masked,
        });
        self.inner.erase(offset, len)
    }

    fn program(&mut self, offset: u32, data: &[u8]) -> Result<()> {
        let masked = self.interrupts.is_masked();
        self.ops.lock().unwrap().push(Op::Program {
            addr: offset,
            masked,
        });
        self.inner.program(offset, data)
    }

    fn xip(&self) -> &[u8] {
        self.inner.xip()
    }
}

/// A region over a probed device, plus the shared op log and interrupt mask.
pub(crate) fn probed_region(
    inner: MemoryFlash,
) -> (FlashRegion, Arc<Mutex<Vec<Op>>>, HostInterrupts) {
    let interrupts = HostInterrupts::default();
    let ops = Arc::new(Mutex::new(Vec::new()));
    let device = ProbeFlash {
        inner,
        interrupts: interrupts.clone(),
        ops: ops.clone(),
    };
    let region = FlashRegion::new(
        Box::new(device),
        Box::new(interrupts.clone()),
        test_config(),
    )
    .unwrap();
    (region, ops, interrupts)
}

#[test]
fn config_defaults_leave_last_sector_free() {
    let config = FlashConfig::default();
    assert_eq!(config.region_end(), 16 * 1024 * 1024 - 4096);
    assert_eq!(config.max_rom_size(), 15 * 1024 * 1024 - 4096);
    config.validate().unwrap();
}

#[test]
fn config_rejects_unaligned_or_empty_region() {
    let unaligned = FlashConfig::builder().region_start(0x1001).build();
    assert!(unaligned.validate().is_err());
    let empty = FlashConfig::builder()
        .flash_size(0x2000)
        .region_start(0x1000)
        .build();
    assert!(empty.validate().is_err());
}

#[test]
fn nor_program_only_clears_bits() {
    let mut flash = MemoryFlash::new(0x2000);
    flash.program(0, &[0x0F]).unwrap();
    flash.program(0, &[0xF3]).unwrap();
    assert_eq!(flash.xip()[0], 0x03);

    flash.erase(0, FLASH_SECTOR_SIZE).unwrap();
    assert_eq!(flash.xip()[0], 0xFF);
    assert!(flash.erase(1, FLASH_SECTOR_SIZE).is_err());
    assert!(flash.program(0x1FFF, &[0, 0]).is_err());
}

#[test]
fn write_sector_pads_and_verifies() {
    let (mut region, ops, interrupts) = probed_region(MemoryFlash::new(TEST_FLASH_SIZE as usize));
    region.write_sector(0x1000, &[1, 2, 3]).unwrap();

    let image = region.image();
    assert_eq!(&image[0x1000..0x1003], &[1, 2, 3]);
    assert!(image[0x1003..0x2000].iter().all(|&b| b == 0xFF));
    assert_eq!(
        *ops.lock().unwrap(),
        [
            Op::Erase { addr: 0x5000, masked: true },
            Op::Program { addr: 0x5000, masked: true },
        ]
    );
    assert!(!interrupts.is_masked());
}

#[test]
fn stuck_cell_is_a_fatal_mismatch() {
    let mut flash = MemoryFlash::new(TEST_FLASH_SIZE as usize);
    flash.stick_bits_low(0x4000 + 7, 0x80);
    let (mut region, _ops, interrupts) = probed_region(flash);

    let err = region.write_sector(0, &[0xFF; 16]).unwrap_err();
    assert_eq!(
        fatal_cause(&err),
        Some(&Fatal::FlashMismatch { offset: 0x4000 })
    );
    assert!(!interrupts.is_masked());
    // Data that leaves the stuck bit clear programs fine.
    region.write_sector(0, &[0x00; 16]).unwrap();
}

#[test]
fn write_sector_rejects_out_of_region_offsets() {
    let (mut region, ops, _) = probed_region(MemoryFlash::new(TEST_FLASH_SIZE as usize));
    let capacity = region.capacity();
    assert!(region.write_sector(capacity, &[0]).is_err());
    assert!(region.write_sector(0x10, &[0]).is_err());
    assert!(region.write_sector(0, &vec![0; FLASH_SECTOR_SIZE + 1]).is_err());
    assert!(ops.lock().unwrap().is_empty());
}

#[test]
fn interrupt_guard_restores_previous_state() {
    let mut interrupts = HostInterrupts::default();
    let probe = interrupts.clone();
    {
        let _outer = InterruptsDisabled::new(&mut interrupts);
        assert!(probe.is_masked());
    }
    assert!(!probe.is_masked());

    probe.masked.store(true, Ordering::SeqCst);
    {
        let _inner = InterruptsDisabled::new(&mut interrupts);
    }
    assert!(probe.is_masked());
}
