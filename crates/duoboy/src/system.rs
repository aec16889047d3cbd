use std::thread;
use std::time::Duration;

use duoboy_common::SystemControl;

/// Board services for a desktop host: messages go to stderr and a reset
/// ends the process.
#[derive(Debug, Default)]
pub struct HostSystem;

impl SystemControl for HostSystem {
    fn show_message(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn sleep_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }

    fn reset(&mut self) {
        log::warn!("Resetting");
        std::process::exit(1);
    }
}
