use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::stdout;

/// Runs its restore step when dropped, including on early `?` returns
pub struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreGuard<F> {
    pub fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    // Best effort: the process is already leaving the editor
    if let Err(e) = disable_raw_mode() {
        log::warn!("Failed to disable raw mode: {e}");
    }
    if let Err(e) = execute!(stdout(), LeaveAlternateScreen) {
        log::warn!("Failed to leave alternate screen: {e}");
    }
}

/// Enter raw mode and the alternate screen, returning a guard that undoes both
pub fn enter() -> Result<RestoreGuard<fn()>> {
    enable_raw_mode()?;
    let guard = RestoreGuard::new(restore_terminal as fn());
    execute!(stdout(), EnterAlternateScreen)?;
    Ok(guard)
}
