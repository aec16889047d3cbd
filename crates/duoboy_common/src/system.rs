use crate::fatal::is_fatal;

/// Board-level services needed by the fatal-error policy.
pub trait SystemControl {
    /// Shows a short message to the user, typically on the panel.
    fn show_message(&mut self, message: &str);
    fn sleep_ms(&mut self, ms: u32);
    /// Reboots the device. On hardware this never returns.
    fn reset(&mut self);
}

/// Delay between reporting a fatal error and rebooting.
pub const FATAL_RESET_DELAY_MS: u32 = 5000;

/// Reports `err`, flushes the logger and resets the device after a delay.
pub fn halt(system: &mut dyn SystemControl, err: &anyhow::Error) {
    log::error!("Fatal: {err:#}");
    system.show_message(&format!("{err}"));
    log::logger().flush();
    system.sleep_ms(FATAL_RESET_DELAY_MS);
    system.reset();
}

/// Routes a top-level error: fatal causes go through [`halt`], anything else
/// is only reported.
///
/// Returns true when the error was fatal.
pub fn handle_error(system: &mut dyn SystemControl, err: &anyhow::Error) -> bool {
    if is_fatal(err) {
        halt(system, err);
        return true;
    }
    log::error!("{err:#}");
    system.show_message(&format!("{err}"));
    false
}
