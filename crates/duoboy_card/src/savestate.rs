//! Real-time save states.
//!
//! A save state is a flat little-endian record of the emulator: cartridge
//! controller, CPU registers, timing counters and memories, optionally
//! followed by the enhanced-colour block. There is no header or version;
//! the layout is fixed per build.

use anyhow::{bail, Context, Result};

use crate::storage::{title_file_name, CardStorage};

pub const WRAM_SIZE: usize = 0x8000;
pub const VRAM_SIZE: usize = 0x4000;
pub const OAM_SIZE: usize = 0xA0;
pub const HRAM_IO_SIZE: usize = 0x100;
const PALETTE_LEN: usize = 64;

/// Save states live here, one file per cartridge title.
pub const QUICK_SAVE_DIR: &str = "rtsav/";

/// Memory bank controller registers and the real-time clock.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartState {
    pub mbc: i8,
    pub cart_ram: u8,
    pub num_rom_banks_mask: u16,
    pub num_ram_banks: u8,
    pub selected_rom_bank: u16,
    pub cart_ram_bank: u8,
    pub enable_cart_ram: u8,
    pub cart_mode_select: u8,
    pub rtc_latched: [u8; 5],
    pub rtc_real: [u8; 5],
}

/// CPU register file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    pub lcd_count: u32,
    pub div_count: u32,
    pub tima_count: u32,
    pub serial_count: u32,
}

/// Banking, speed, palette RAM and HDMA state of the colour model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CgbState {
    pub cgb_mode: u8,
    pub double_speed: u8,
    pub double_speed_prep: u8,
    pub wram_bank: u8,
    pub wram_bank_offset: u16,
    pub vram_bank: u8,
    pub vram_bank_offset: u16,
    /// Palette RAM converted to RGB565, as handed to the compositor.
    pub fix_palette: [u16; PALETTE_LEN],
    pub oam_palette: [u8; PALETTE_LEN],
    pub bg_palette: [u8; PALETTE_LEN],
    pub oam_palette_id: u8,
    pub bg_palette_id: u8,
    pub oam_palette_inc: u8,
    pub bg_palette_inc: u8,
    pub dma_active: u8,
    pub dma_mode: u8,
    pub dma_size: u8,
    pub dma_source: u16,
    pub dma_dest: u16,
}

impl Default for CgbState {
    fn default() -> Self {
        Self {
            cgb_mode: 0,
            double_speed: 0,
            double_speed_prep: 0,
            wram_bank: 1,
            wram_bank_offset: 0,
            vram_bank: 0,
            vram_bank_offset: 0,
            fix_palette: [0; PALETTE_LEN],
            oam_palette: [0; PALETTE_LEN],
            bg_palette: [0; PALETTE_LEN],
            oam_palette_id: 0,
            bg_palette_id: 0,
            oam_palette_inc: 0,
            bg_palette_inc: 0,
            dma_active: 0,
            dma_mode: 0,
            dma_size: 0,
            dma_source: 0,
            dma_dest: 0,
        }
    }
}

/// Everything a save state captures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmulatorState {
    pub cart: CartState,
    pub regs: Registers,
    pub counters: Counters,
    pub wram: Box<[u8; WRAM_SIZE]>,
    pub vram: Box<[u8; VRAM_SIZE]>,
    pub oam: Box<[u8; OAM_SIZE]>,
    pub hram_io: Box<[u8; HRAM_IO_SIZE]>,
    pub cgb: CgbState,
}

impl Default for EmulatorState {
    fn default() -> Self {
        Self {
            cart: CartState::default(),
            regs: Registers::default(),
            counters: Counters::default(),
            wram: Box::new([0; WRAM_SIZE]),
            vram: Box::new([0; VRAM_SIZE]),
            oam: Box::new([0; OAM_SIZE]),
            hram_io: Box::new([0; HRAM_IO_SIZE]),
            cgb: CgbState::default(),
        }
    }
}

/// Which optional blocks a save state carries.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SaveStateLayout {
    pub cgb: bool,
}

impl Default for SaveStateLayout {
    fn default() -> Self {
        Self {
            cgb: cfg!(feature = "cgb"),
        }
    }
}

impl SaveStateLayout {
    const CART_LEN: usize = 1 + 1 + 2 + 1 + 2 + 1 + 1 + 1 + 5 + 5;
    const REGS_LEN: usize = 8 + 2 + 2;
    const COUNTERS_LEN: usize = 4 * 4;
    const MEMORY_LEN: usize = WRAM_SIZE + VRAM_SIZE + OAM_SIZE + HRAM_IO_SIZE;
    const CGB_LEN: usize = 4 + 2 + 1 + 2 + PALETTE_LEN * 4 + 7 + 2 + 2;

    /// Exact size of an encoded state.
    pub fn encoded_len(&self) -> usize {
        let base = Self::CART_LEN + Self::REGS_LEN + Self::COUNTERS_LEN + Self::MEMORY_LEN;
        if self.cgb {
            base + Self::CGB_LEN
        } else {
            base
        }
    }

    pub fn encode(&self, state: &EmulatorState) -> Vec<u8> {
        let mut w = StateWriter::with_capacity(self.encoded_len());

        let cart = &state.cart;
        w.write_i8(cart.mbc);
        w.write_u8(cart.cart_ram);
        w.write_u16(cart.num_rom_banks_mask);
        w.write_u8(cart.num_ram_banks);
        w.write_u16(cart.selected_rom_bank);
        w.write_u8(cart.cart_ram_bank);
        w.write_u8(cart.enable_cart_ram);
        w.write_u8(cart.cart_mode_select);
        w.write_bytes(&cart.rtc_latched);
        w.write_bytes(&cart.rtc_real);

        let r = &state.regs;
        w.write_bytes(&[r.a, r.f, r.b, r.c, r.d, r.e, r.h, r.l]);
        w.write_u16(r.sp);
        w.write_u16(r.pc);

        let c = &state.counters;
        w.write_u32(c.lcd_count);
        w.write_u32(c.div_count);
        w.write_u32(c.tima_count);
        w.write_u32(c.serial_count);

        w.write_bytes(&state.wram[..]);
        w.write_bytes(&state.vram[..]);
        w.write_bytes(&state.oam[..]);
        w.write_bytes(&state.hram_io[..]);

        if self.cgb {
            let g = &state.cgb;
            w.write_bytes(&[g.cgb_mode, g.double_speed, g.double_speed_prep, g.wram_bank]);
            w.write_u16(g.wram_bank_offset);
            w.write_u8(g.vram_bank);
            w.write_u16(g.vram_bank_offset);
            for &color in &g.fix_palette {
                w.write_u16(color);
            }
            w.write_bytes(&g.oam_palette);
            w.write_bytes(&g.bg_palette);
            w.write_bytes(&[
                g.oam_palette_id,
                g.bg_palette_id,
                g.oam_palette_inc,
                g.bg_palette_inc,
                g.dma_active,
                g.dma_mode,
                g.dma_size,
            ]);
            w.write_u16(g.dma_source);
            w.write_u16(g.dma_dest);
        }

        w.into_bytes()
    }

    /// Decodes a whole state. The colour block keeps its defaults when the
    /// layout has none.
    pub fn decode(&self, bytes: &[u8]) -> Result<EmulatorState> {
        let mut r = StateReader::new(bytes);
        let mut state = EmulatorState {
            cart: CartState {
                mbc: r.read_i8()?,
                cart_ram: r.read_u8()?,
                num_rom_banks_mask: r.read_u16()?,
                num_ram_banks: r.read_u8()?,
                selected_rom_bank: r.read_u16()?,
                cart_ram_bank: r.read_u8()?,
                enable_cart_ram: r.read_u8()?,
                cart_mode_select: r.read_u8()?,
                rtc_latched: r.read_array()?,
                rtc_real: r.read_array()?,
            },
            regs: Registers {
                a: r.read_u8()?,
                f: r.read_u8()?,
                b: r.read_u8()?,
                c: r.read_u8()?,
                d: r.read_u8()?,
                e: r.read_u8()?,
                h: r.read_u8()?,
                l: r.read_u8()?,
                sp: r.read_u16()?,
                pc: r.read_u16()?,
            },
            counters: Counters {
                lcd_count: r.read_u32()?,
                div_count: r.read_u32()?,
                tima_count: r.read_u32()?,
                serial_count: r.read_u32()?,
            },
            ..EmulatorState::default()
        };
        r.read_into(&mut state.wram[..])?;
        r.read_into(&mut state.vram[..])?;
        r.read_into(&mut state.oam[..])?;
        r.read_into(&mut state.hram_io[..])?;

        if self.cgb {
            state.cgb = CgbState {
                cgb_mode: r.read_u8()?,
                double_speed: r.read_u8()?,
                double_speed_prep: r.read_u8()?,
                wram_bank: r.read_u8()?,
                wram_bank_offset: r.read_u16()?,
                vram_bank: r.read_u8()?,
                vram_bank_offset: r.read_u16()?,
                fix_palette: r.read_u16_array()?,
                oam_palette: r.read_array()?,
                bg_palette: r.read_array()?,
                oam_palette_id: r.read_u8()?,
                bg_palette_id: r.read_u8()?,
                oam_palette_inc: r.read_u8()?,
                bg_palette_inc: r.read_u8()?,
                dma_active: r.read_u8()?,
                dma_mode: r.read_u8()?,
                dma_size: r.read_u8()?,
                dma_source: r.read_u16()?,
                dma_dest: r.read_u16()?,
            };
        }

        r.finish()?;
        Ok(state)
    }

    /// Overwrites `state` from an encoded blob, or leaves it untouched on
    /// error. Colour fields survive when the layout has no colour block.
    pub fn restore(&self, bytes: &[u8], state: &mut EmulatorState) -> Result<()> {
        let mut decoded = self.decode(bytes)?;
        if !self.cgb {
            std::mem::swap(&mut decoded.cgb, &mut state.cgb);
        }
        *state = decoded;
        Ok(())
    }
}

/// Saves and restores states for one cartridge, keeping the latest one in
/// memory for quick resume.
#[derive(Debug)]
pub struct SaveStateManager {
    title: String,
    layout: SaveStateLayout,
    quick_resume: Option<Vec<u8>>,
}

impl SaveStateManager {
    pub fn new(title: impl Into<String>, layout: SaveStateLayout) -> Self {
        Self {
            title: title.into(),
            layout,
            quick_resume: None,
        }
    }

    pub fn layout(&self) -> SaveStateLayout {
        self.layout
    }

    pub fn path(&self) -> String {
        format!("{QUICK_SAVE_DIR}{}", title_file_name(&self.title))
    }

    pub fn has_quick_resume(&self) -> bool {
        self.quick_resume.is_some()
    }

    /// Captures `state` into memory and onto the card. A card write failure
    /// only loses the on-card copy.
    pub fn save(&mut self, storage: &CardStorage, state: &EmulatorState) {
        let blob = self.layout.encode(state);
        let path = self.path();
        if let Err(err) = storage.write_file(&path, &blob) {
            log::error!("Failed to write save state '{path}': {err:#}");
        } else {
            log::info!("Save state written to '{path}' ({} bytes)", blob.len());
        }
        self.quick_resume = Some(blob);
    }

    /// Restores the quick-resume state, falling back to the card.
    ///
    /// Returns false when neither exists.
    pub fn load(&mut self, storage: &CardStorage, state: &mut EmulatorState) -> Result<bool> {
        if let Some(blob) = &self.quick_resume {
            self.layout.restore(blob, state)?;
            log::info!("Save state restored from memory");
            return Ok(true);
        }

        let path = self.path();
        let Some(blob) = storage.read_file(&path)? else {
            log::info!("No save state at '{path}'");
            return Ok(false);
        };
        self.layout
            .restore(&blob, state)
            .with_context(|| format!("Invalid save state '{path}'"))?;
        log::info!("Save state restored from '{path}'");
        self.quick_resume = Some(blob);
        Ok(true)
    }
}

struct StateWriter {
    buf: Vec<u8>,
}

impl StateWriter {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_i8(&mut self, v: i8) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u16(&mut self, v: u16) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_bytes(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

struct StateReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> StateReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let Some(bytes) = self.data.get(self.pos..self.pos + len) else {
            bail!(
                "Save state truncated at byte {} (needed {len} more)",
                self.pos
            );
        };
        self.pos += len;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    fn read_i8(&mut self) -> Result<i8> {
        Ok(i8::from_le_bytes(self.read_array()?))
    }

    fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    fn read_u16_array<const N: usize>(&mut self) -> Result<[u16; N]> {
        let mut out = [0u16; N];
        for v in &mut out {
            *v = self.read_u16()?;
        }
        Ok(out)
    }

    fn read_into(&mut self, out: &mut [u8]) -> Result<()> {
        out.copy_from_slice(self.take(out.len())?);
        Ok(())
    }

    fn finish(self) -> Result<()> {
        let extra = self.data.len() - self.pos;
        if extra != 0 {
            bail!("Save state has {extra} unexpected trailing bytes");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
