//! Terminal backend abstraction and crossterm implementation.
//!
//! The editor core never touches the terminal mode itself: it reads raw bytes
//! and writes escape sequences. This crate owns entering and leaving raw mode
//! plus the alternate screen, and reports the screen size used to build the
//! layout.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode, size,
    },
};
use std::io::stdout;

/// Fallback used when the size query fails (e.g. output is not a tty).
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
    /// `(columns, rows)` of the terminal.
    fn size(&self) -> Result<(u16, u16)>;
}

pub struct CrosstermBackend {
    entered: bool,
}

/// RAII guard restoring the terminal even if the caller early-returns or panics.
pub struct TerminalGuard<'a> {
    backend: &'a mut CrosstermBackend,
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self { entered: false }
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Enter and return a guard that will leave on drop.
    pub fn enter_guard(&mut self) -> Result<TerminalGuard<'_>> {
        self.enter()?;
        Ok(TerminalGuard { backend: self })
    }

    /// Size with a fixed fallback instead of an error.
    pub fn size_or_fallback(&self) -> (u16, u16) {
        match self.size() {
            Ok(dims) => dims,
            Err(e) => {
                tracing::warn!(target: "runtime", error = %e, "terminal_size_unavailable");
                FALLBACK_SIZE
            }
        }
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        if !self.entered {
            enable_raw_mode().context("enabling raw mode")?;
            execute!(stdout(), EnterAlternateScreen)?;
            self.entered = true;
            tracing::debug!(target: "runtime", "terminal_entered");
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if self.entered {
            execute!(stdout(), LeaveAlternateScreen, Show)?;
            disable_raw_mode().context("disabling raw mode")?;
            self.entered = false;
            tracing::debug!(target: "runtime", "terminal_left");
        }
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        let (columns, rows) = size().context("querying terminal size")?;
        if columns == 0 || rows == 0 {
            anyhow::bail!("terminal reported an empty screen ({columns}x{rows})");
        }
        Ok((columns, rows))
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

impl Drop for TerminalGuard<'_> {
    fn drop(&mut self) {
        let _ = self.backend.leave();
    }
}
