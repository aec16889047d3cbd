use std::fs;

use duoboy_common::{fatal_cause, Fatal};
use tempfile::TempDir;

use super::*;

fn card_with(gb_files: usize) -> (TempDir, CardStorage) {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("gb")).unwrap();
    fs::create_dir(dir.path().join("nes")).unwrap();
    for i in 0..gb_files {
        let ext = if i % 2 == 0 { "gb" } else { "GBC" };
        fs::write(dir.path().join(format!("gb/game{i:02}.{ext}")), [0u8]).unwrap();
    }
    let storage = CardStorage::mount(dir.path()).unwrap();
    (dir, storage)
}

#[test]
fn mount_rejects_missing_root() {
    let dir = tempfile::tempdir().unwrap();
    let err = CardStorage::mount(dir.path().join("nope")).unwrap_err();
    assert!(matches!(fatal_cause(&err), Some(Fatal::StorageMount { .. })));
}

#[test]
fn list_page_filters_by_extension_case_insensitively() {
    let (dir, storage) = card_with(3);
    fs::write(dir.path().join("gb/readme.txt"), b"hi").unwrap();
    fs::create_dir(dir.path().join("gb/folder.gb")).unwrap();

    let files = storage.list_page(&SystemConfig::GB, 0).unwrap();
    let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["game00.gb", "game01.GBC", "game02.gb"]);
    assert_eq!(files[1].extension, "gbc");
    assert!(storage.list_page(&SystemConfig::NES, 0).unwrap().is_empty());
}

#[test]
fn missing_directory_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let storage = CardStorage::mount(dir.path()).unwrap();
    let err = storage.list_page(&SystemConfig::GB, 0).unwrap_err();
    assert!(matches!(fatal_cause(&err), Some(Fatal::DirectoryOpen { .. })));
}

#[test]
fn pages_hold_twenty_two_entries() {
    let (_dir, storage) = card_with(30);
    let first = storage.list_page(&SystemConfig::GB, 0).unwrap();
    let second = storage.list_page(&SystemConfig::GB, 1).unwrap();
    assert_eq!(first.len(), FILES_PER_PAGE);
    assert_eq!(second.len(), 8);
    assert_eq!(second[0].name, "game22.gb");
    assert_eq!(second[0].page, 1);
}

#[test]
fn short_page_is_last_and_rereads_identically() {
    let (_dir, storage) = card_with(30);
    let page1 = storage.list_page(&SystemConfig::GB, 1).unwrap();
    assert!(storage.list_page(&SystemConfig::GB, 2).unwrap().is_empty());
    assert_eq!(storage.list_page(&SystemConfig::GB, 1).unwrap(), page1);
}

#[test]
fn browser_clamps_when_next_page_is_empty() {
    let (_dir, storage) = card_with(FILES_PER_PAGE);
    let mut browser = FileBrowser::open(&storage, GameSystem::Gb).unwrap();
    assert_eq!(browser.files().len(), FILES_PER_PAGE);

    assert!(!browser.next_page(&storage).unwrap());
    assert_eq!(browser.page(), 0);
    assert_eq!(browser.files().len(), FILES_PER_PAGE);
    assert!(!browser.prev_page(&storage).unwrap());
}

#[test]
fn browser_pages_forward_and_back() {
    let (_dir, storage) = card_with(25);
    let mut browser = FileBrowser::open(&storage, GameSystem::Gb).unwrap();
    assert!(browser.next_page(&storage).unwrap());
    assert_eq!(browser.page(), 1);
    assert_eq!(browser.files().len(), 3);
    assert!(!browser.next_page(&storage).unwrap());

    assert!(browser.prev_page(&storage).unwrap());
    assert_eq!(browser.page(), 0);
    assert_eq!(browser.selected_path(0).unwrap(), "gb/game00.gb");
}

#[test]
fn toggle_system_resets_page() {
    let (dir, storage) = card_with(25);
    fs::write(dir.path().join("nes/zelda.NES"), [0u8]).unwrap();
    let mut browser = FileBrowser::open(&storage, GameSystem::Gb).unwrap();
    browser.next_page(&storage).unwrap();

    browser.toggle_system(&storage).unwrap();
    assert_eq!(browser.system(), GameSystem::Nes);
    assert_eq!(browser.page(), 0);
    assert_eq!(browser.selected_path(0).unwrap(), "nes/zelda.NES");
    assert!(browser.selected_path(1).is_err());
}

#[test]
fn selected_path_length_is_bounded() {
    let (dir, storage) = card_with(0);
    // 255-byte name, the usual filesystem limit; "gb/" pushes it past 256.
    let long = format!("{}.gb", "a".repeat(252));
    fs::write(dir.path().join("gb").join(&long), [0u8]).unwrap();
    let browser = FileBrowser::open(&storage, GameSystem::Gb).unwrap();
    assert!(browser.selected_path(0).is_err());
}

#[test]
fn file_helpers_round_trip() {
    let (_dir, storage) = card_with(1);
    assert_eq!(storage.read_file("SAVES/TETRIS").unwrap(), None);

    storage.write_file("SAVES/TETRIS", b"ram").unwrap();
    assert_eq!(storage.read_file("SAVES/TETRIS").unwrap().unwrap(), b"ram");

    let err = storage.open_rom("gb/missing.gb").unwrap_err();
    assert!(matches!(fatal_cause(&err), Some(Fatal::RomOpen { .. })));
    assert!(storage.open_rom("gb/game00.gb").is_ok());
}

#[test]
fn title_file_names_never_leave_their_directory() {
    assert_eq!(title_file_name("TETRIS"), "TETRIS");
    assert_eq!(title_file_name("../../X"), ".._.._X");
    assert_eq!(title_file_name("A\\B"), "A_B");
    assert_eq!(title_file_name(""), UNTITLED);
    assert_eq!(title_file_name("."), UNTITLED);
    assert_eq!(title_file_name(".."), UNTITLED);
    assert_eq!(title_file_name("..."), UNTITLED);
}
