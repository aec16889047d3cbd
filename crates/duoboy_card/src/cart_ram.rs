use anyhow::{ensure, Result};

use crate::header::CartridgeHeader;
use crate::storage::{title_file_name, CardStorage};

/// Battery-backed cartridge RAM dumps, one file per title.
pub const SAVES_DIR: &str = "SAVES/";

fn ram_path(header: &CartridgeHeader) -> String {
    format!("{SAVES_DIR}{}", title_file_name(&header.title))
}

/// Fills `ram` from the cartridge's save file.
///
/// Returns false when the cartridge has no RAM or no file exists yet.
pub fn load_cart_ram(
    storage: &CardStorage,
    header: &CartridgeHeader,
    ram: &mut [u8],
) -> Result<bool> {
    let size = header.save_size();
    if size == 0 {
        return Ok(false);
    }
    let path = ram_path(header);
    let Some(data) = storage.read_file(&path)? else {
        log::info!("No cartridge RAM at '{path}'");
        return Ok(false);
    };
    let len = data.len().min(ram.len());
    ram[..len].copy_from_slice(&data[..len]);
    log::info!("Read cartridge RAM '{path}' ({len} of {size} bytes)");
    Ok(true)
}

/// Writes the declared RAM size of `ram` to the cartridge's save file.
///
/// A card error is logged and reported as false.
pub fn save_cart_ram(
    storage: &CardStorage,
    header: &CartridgeHeader,
    ram: &[u8],
) -> Result<bool> {
    let size = header.save_size();
    if size == 0 {
        return Ok(false);
    }
    ensure!(
        ram.len() >= size,
        "Cartridge RAM buffer holds {} bytes, header declares {size}",
        ram.len()
    );
    let path = ram_path(header);
    match storage.write_file(&path, &ram[..size]) {
        Ok(()) => {
            log::info!("Wrote cartridge RAM '{path}' ({size} bytes)");
            Ok(true)
        }
        Err(err) => {
            log::error!("Failed to write cartridge RAM '{path}': {err:#}");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::header::test_rom;

    fn header(cart_type: u8, ram_code: u8) -> CartridgeHeader {
        CartridgeHeader::parse(&test_rom(b"POKEMON", cart_type, ram_code)).unwrap()
    }

    #[test]
    fn round_trip_through_saves_dir() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CardStorage::mount(dir.path()).unwrap();
        let header = header(0x03, 2);
        let ram: Vec<u8> = (0..0x2000).map(|i| i as u8).collect();

        assert!(save_cart_ram(&storage, &header, &ram).unwrap());
        assert_eq!(fs::read(dir.path().join("SAVES/POKEMON")).unwrap(), ram);

        let mut restored = vec![0u8; 0x2000];
        assert!(load_cart_ram(&storage, &header, &mut restored).unwrap());
        assert_eq!(restored, ram);
    }

    #[test]
    fn zero_size_ram_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CardStorage::mount(dir.path()).unwrap();
        let header = header(0x00, 0);

        assert!(!save_cart_ram(&storage, &header, &[1, 2, 3]).unwrap());
        assert!(!dir.path().join("SAVES").exists());
        assert!(!load_cart_ram(&storage, &header, &mut [0; 4]).unwrap());
    }

    #[test]
    fn missing_file_leaves_ram_alone() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CardStorage::mount(dir.path()).unwrap();
        let mut ram = vec![0xAA; 0x200];
        assert!(!load_cart_ram(&storage, &header(0x06, 0), &mut ram).unwrap());
        assert!(ram.iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn crafted_title_stays_under_the_card_root() {
        let dir = tempfile::tempdir().unwrap();
        let card_root = dir.path().join("card");
        fs::create_dir(&card_root).unwrap();
        let storage = CardStorage::mount(&card_root).unwrap();
        let header = header_titled(b"../../ESCAPED");
        assert_eq!(header.title, "../../ESCAPED");

        let ram = vec![0x42; 0x2000];
        assert!(save_cart_ram(&storage, &header, &ram).unwrap());
        assert!(card_root.join("SAVES/.._.._ESCAPED").is_file());
        assert!(!dir.path().join("ESCAPED").exists());

        let mut restored = vec![0; 0x2000];
        assert!(load_cart_ram(&storage, &header, &mut restored).unwrap());
        assert_eq!(restored, ram);
    }

    #[test]
    fn empty_title_uses_fallback_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CardStorage::mount(dir.path()).unwrap();
        fs::create_dir_all(dir.path().join("SAVES")).unwrap();
        let header = header_titled(b"");
        let mut ram = vec![0; 0x2000];
        assert!(!load_cart_ram(&storage, &header, &mut ram).unwrap());
        assert!(save_cart_ram(&storage, &header, &ram).unwrap());
        assert!(dir.path().join("SAVES/UNTITLED").is_file());
    }

    fn header_titled(title: &[u8]) -> CartridgeHeader {
        CartridgeHeader::parse(&test_rom(title, 0x03, 2)).unwrap()
    }

    #[test]
    fn undersized_buffer_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CardStorage::mount(dir.path()).unwrap();
        assert!(save_cart_ram(&storage, &header(0x03, 3), &[0; 16]).is_err());
    }
}
