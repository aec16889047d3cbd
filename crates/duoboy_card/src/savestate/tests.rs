use std::fs;

use tempfile::TempDir;

use super::*;

const CGB: SaveStateLayout = SaveStateLayout { cgb: true };
const DMG: SaveStateLayout = SaveStateLayout { cgb: false };

fn card() -> (TempDir, CardStorage) {
    let dir = tempfile::tempdir().unwrap();
    let storage = CardStorage::mount(dir.path()).unwrap();
    (dir, storage)
}

fn busy_state() -> EmulatorState {
    let mut state = EmulatorState::default();
    state.cart = CartState {
        mbc: 3,
        cart_ram: 1,
        num_rom_banks_mask: 0x7F,
        num_ram_banks: 4,
        selected_rom_bank: 0x11,
        cart_ram_bank: 2,
        enable_cart_ram: 1,
        cart_mode_select: 0,
        rtc_latched: [1, 2, 3, 4, 5],
        rtc_real: [6, 7, 8, 9, 10],
    };
    state.regs.a = 0x12;
    state.regs.f = 0xF0;
    state.regs.b = 0x34;
    state.regs.h = 0xC0;
    state.regs.l = 0xDE;
    state.regs.sp = 0xFFFE;
    state.regs.pc = 0x0150;
    state.counters = Counters {
        lcd_count: 456,
        div_count: 0x1_0000,
        tima_count: 7,
        serial_count: 0xDEAD_BEEF,
    };
    for (i, b) in state.wram.iter_mut().enumerate() {
        *b = (i % 253) as u8;
    }
    state.vram[0x1FFF] = 0x42;
    state.oam[0x9F] = 0x9F;
    state.hram_io[0xFF] = 0x01;
    state.cgb.cgb_mode = 1;
    state.cgb.double_speed = 1;
    state.cgb.wram_bank = 5;
    state.cgb.wram_bank_offset = 0x4000;
    state.cgb.fix_palette[63] = 0xF800;
    state.cgb.bg_palette[1] = 0x7F;
    state.cgb.dma_source = 0x8000;
    state.cgb.dma_dest = 0x9FF0;
    state
}

#[test]
fn encoding_is_little_endian_and_packed() {
    let blob = DMG.encode(&busy_state());
    assert_eq!(blob.len(), DMG.encoded_len());
    assert_eq!(blob.len(), 20 + 12 + 16 + 0x8000 + 0x4000 + 0xA0 + 0x100);
    assert_eq!(blob[0], 3);
    assert_eq!(&blob[2..4], &[0x7F, 0x00]);
    // a, f, b
    assert_eq!(&blob[20..23], &[0x12, 0xF0, 0x34]);
    // sp, pc
    assert_eq!(&blob[28..32], &[0xFE, 0xFF, 0x50, 0x01]);
    assert_eq!(&blob[44..48], &[0xEF, 0xBE, 0xAD, 0xDE]);

    let cgb = CGB.encode(&busy_state());
    assert_eq!(cgb.len(), CGB.encoded_len());
    assert_eq!(cgb.len() - blob.len(), 276);
    assert_eq!(&cgb[blob.len()..blob.len() + 4], &[1, 1, 0, 5]);
    assert_eq!(&cgb[cgb.len() - 4..], &[0x00, 0x80, 0xF0, 0x9F]);
}

#[test]
fn decode_reproduces_every_field() {
    let state = busy_state();
    assert_eq!(CGB.decode(&CGB.encode(&state)).unwrap(), state);

    let mono = DMG.decode(&DMG.encode(&state)).unwrap();
    assert_eq!(mono.cart, state.cart);
    assert_eq!(mono.wram, state.wram);
    assert_eq!(mono.cgb, CgbState::default());
}

#[test]
fn truncated_or_oversized_blob_is_rejected() {
    let blob = CGB.encode(&busy_state());
    assert!(CGB.decode(&blob[..blob.len() - 1]).is_err());
    assert!(CGB.decode(&[]).is_err());

    let mut long = blob.clone();
    long.push(0);
    assert!(CGB.decode(&long).is_err());
    // A monochrome blob is too short for a colour layout and vice versa.
    assert!(CGB.decode(&DMG.encode(&busy_state())).is_err());
    assert!(DMG.decode(&blob).is_err());
}

#[test]
fn restore_keeps_colour_state_without_colour_block() {
    let saved = busy_state();
    let mut live = EmulatorState::default();
    live.cgb.vram_bank = 1;
    DMG.restore(&DMG.encode(&saved), &mut live).unwrap();
    assert_eq!(live.regs, saved.regs);
    assert_eq!(live.cgb.vram_bank, 1);

    let before = live.clone();
    assert!(DMG.restore(&[0; 10], &mut live).is_err());
    assert_eq!(live, before);
}

#[test]
fn save_then_load_into_fresh_state() {
    let (dir, storage) = card();
    let state = busy_state();
    let mut manager = SaveStateManager::new("TETRIS", CGB);
    manager.save(&storage, &state);
    assert_eq!(
        fs::read(dir.path().join("rtsav/TETRIS")).unwrap(),
        CGB.encode(&state)
    );

    // A new session has no quick-resume copy and reads the card.
    let mut fresh_manager = SaveStateManager::new("TETRIS", CGB);
    let mut fresh = EmulatorState::default();
    assert!(fresh_manager.load(&storage, &mut fresh).unwrap());
    assert_eq!(fresh, state);
    assert!(fresh_manager.has_quick_resume());
}

#[test]
fn quick_resume_takes_precedence_over_the_card() {
    let (dir, storage) = card();
    let mut manager = SaveStateManager::new("ZELDA", CGB);
    let state = busy_state();
    manager.save(&storage, &state);
    fs::remove_file(dir.path().join("rtsav/ZELDA")).unwrap();

    let mut live = EmulatorState::default();
    assert!(manager.load(&storage, &mut live).unwrap());
    assert_eq!(live, state);
}

#[test]
fn missing_save_file_is_not_an_error() {
    let (_dir, storage) = card();
    let mut manager = SaveStateManager::new("MARIO", CGB);
    let mut live = busy_state();
    assert!(!manager.load(&storage, &mut live).unwrap());
    assert_eq!(live, busy_state());
}

#[test]
fn unwritable_card_keeps_quick_resume() {
    let (dir, storage) = card();
    // A file where the directory should be makes the write fail.
    fs::write(dir.path().join("rtsav"), b"").unwrap();
    let mut manager = SaveStateManager::new("KIRBY", DMG);
    manager.save(&storage, &busy_state());
    assert!(manager.has_quick_resume());

    let mut live = EmulatorState::default();
    assert!(manager.load(&storage, &mut live).unwrap());
    assert_eq!(live.counters, busy_state().counters);
}

#[test]
fn corrupt_save_file_is_reported() {
    let (dir, storage) = card();
    fs::create_dir(dir.path().join("rtsav")).unwrap();
    fs::write(dir.path().join("rtsav/WARIO"), [1, 2, 3]).unwrap();
    let mut manager = SaveStateManager::new("WARIO", CGB);
    assert!(manager.load(&storage, &mut EmulatorState::default()).is_err());
    assert!(!manager.has_quick_resume());
}

#[test]
fn default_layout_follows_cgb_feature() {
    assert_eq!(SaveStateLayout::default().cgb, cfg!(feature = "cgb"));
}

#[test]
fn empty_title_misses_cleanly_beside_other_saves() {
    let (dir, storage) = card();
    SaveStateManager::new("TETRIS", CGB).save(&storage, &busy_state());

    let mut untitled = SaveStateManager::new("", CGB);
    assert_eq!(untitled.path(), "rtsav/UNTITLED");
    let mut live = EmulatorState::default();
    assert!(!untitled.load(&storage, &mut live).unwrap());
    assert_eq!(live, EmulatorState::default());

    untitled.save(&storage, &busy_state());
    assert!(dir.path().join("rtsav/UNTITLED").is_file());
    let mut fresh = SaveStateManager::new("", CGB);
    assert!(fresh.load(&storage, &mut live).unwrap());
    assert_eq!(live, busy_state());
}

#[test]
fn title_with_separators_stays_in_save_dir() {
    let dir = tempfile::tempdir().unwrap();
    let card_root = dir.path().join("card");
    fs::create_dir(&card_root).unwrap();
    let storage = CardStorage::mount(&card_root).unwrap();

    let mut manager = SaveStateManager::new("../../X", DMG);
    manager.save(&storage, &busy_state());
    assert!(card_root.join("rtsav/.._.._X").is_file());
    assert!(!dir.path().join("X").exists());
}
