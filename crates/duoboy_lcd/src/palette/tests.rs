use duoboy_common::Color;

use super::table::ENTRIES;
use super::*;

fn in_table(key: PaletteKey) -> bool {
    ENTRIES.iter().any(|e| e.key == (key.entry, key.flags))
}

#[test]
fn checksum_0x14_resolves_to_entry_0x10_flags_0x01() {
    assert_eq!(auto_assign_key(0x14, b"POKEMON RED"), PaletteKey::new(0x10, 0x01));
    let palette = auto_assign(0x14, b"POKEMON RED");
    assert_ne!(palette, Palette::DMG);
    assert_eq!(palette.obj0[1], Color::new_rgb565(0x0F, 0x3F, 0x06));
    assert_eq!(palette.obj1[2], Color::new_rgb565(0x12, 0x0E, 0x07));
    assert_eq!(palette.bg[3], Color::BLACK);
}

#[test]
fn fourth_title_character_disambiguates() {
    assert_eq!(auto_assign_key(0x0D, b"POCEMAN"), PaletteKey::new(0x0C, 0x03));
    assert_eq!(auto_assign_key(0x0D, b"TETRIS2"), PaletteKey::new(0x07, 0x04));
    assert_eq!(auto_assign_key(0xB3, b"XXXU"), PaletteKey::new(0x00, 0x03));
    assert_eq!(auto_assign_key(0xB3, b"SUPR"), PaletteKey::new(0x05, 0x04));
    assert_eq!(auto_assign_key(0xB3, b"ZZZZ"), PaletteKey::new(0x08, 0x05));
    assert_eq!(auto_assign_key(0xF4, b"ABC DEF"), PaletteKey::new(0x04, 0x03));
}

#[test]
fn short_title_uses_fallback_arm() {
    assert_eq!(auto_assign_key(0x0D, b"AB"), PaletteKey::new(0x07, 0x04));
}

#[test]
fn unknown_checksum_uses_default() {
    assert_eq!(auto_assign_key(0x02, b"HOMEBREW"), PaletteKey::DEFAULT);
    assert_eq!(auto_assign(0x02, b"HOMEBREW"), Palette::DMG);
}

#[test]
fn unknown_pair_falls_back_to_dmg() {
    assert_eq!(color_palette(PaletteKey::new(0x1D, 0x07)), Palette::DMG);
    assert_eq!(color_palette(PaletteKey::new(0x00, 0x00)), Palette::DMG);
    assert_eq!(color_palette(PaletteKey::DEFAULT), Palette::DMG);
}

#[test]
fn every_auto_assignment_exists_in_table() {
    let titles: [&[u8]; 9] = [
        b"", b"XXXA", b"XXXB", b"XXXE", b"XXXI", b"XXXK", b"XXXM", b"XXXR", b"XXX ",
    ];
    for checksum in 0..=u8::MAX {
        for title in titles {
            let key = auto_assign_key(checksum, title);
            assert!(
                key == PaletteKey::DEFAULT || in_table(key),
                "checksum 0x{checksum:02X} -> {key:?}"
            );
        }
    }
}

#[test]
fn manual_selections_exist_in_table() {
    for selection in 0..12 {
        assert!(in_table(manual_assign_key(selection)), "selection {selection}");
    }
    assert_eq!(manual_assign(12), Palette::DMG);
    assert_eq!(manual_assign(200), Palette::DMG);
}

#[test]
fn table_keys_are_unique() {
    for (i, a) in ENTRIES.iter().enumerate() {
        for b in &ENTRIES[i + 1..] {
            assert_ne!(a.key, b.key);
        }
    }
}

#[test]
fn raw_codes_pick_sub_palette_and_shade() {
    let palette = color_palette(PaletteKey::new(0x1C, 0x03));
    assert_eq!(palette.resolve(0x02), palette.obj0[2]);
    assert_eq!(palette.resolve(0x11), palette.obj1[1]);
    assert_eq!(palette.resolve(0x23), palette.bg[3]);
    assert_eq!(palette.resolve(0x30), palette.bg[0]);
    // Bits above the selector are ignored.
    assert_eq!(palette.resolve(0xC1), palette.obj0[1]);
}

#[test]
fn enhanced_colour_source_indexes_low_six_bits() {
    let mut table = Box::new([0u16; FIX_PALETTE_LEN]);
    for (i, v) in table.iter_mut().enumerate() {
        *v = i as u16 * 3;
    }
    let source = ColorSource::Cgb(table);
    assert_eq!(source.resolve(0x05), Color(15));
    assert_eq!(source.resolve(0x45), Color(15));
    assert_eq!(ColorSource::default().resolve(0x20), Palette::DMG.bg[0]);
}

#[test]
fn selector_cycles_through_auto_and_manual() {
    let mut selector = PaletteSelector::default();
    assert_eq!(selector.choice(), PaletteChoice::Auto);
    assert_eq!(selector.select_next(), PaletteChoice::Manual(0));
    assert_eq!(selector.select_prev(), PaletteChoice::Auto);
    assert_eq!(selector.select_prev(), PaletteChoice::Manual(MANUAL_PALETTE_COUNT - 1));
    assert_eq!(selector.select_next(), PaletteChoice::Auto);

    for _ in 0..MANUAL_PALETTE_COUNT + 1 {
        selector.select_next();
    }
    assert_eq!(selector.choice(), PaletteChoice::Auto);
}

#[test]
fn selector_resolves_manual_choice() {
    let mut selector = PaletteSelector::default();
    selector.select_next();
    assert_eq!(selector.palette(0x14, b"ANY"), manual_assign(0));
    selector.select_prev();
    assert_eq!(selector.palette(0x14, b"ANY"), auto_assign(0x14, b"ANY"));
}
