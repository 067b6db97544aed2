//! Terminal management for TUI

use crate::{DashError, DashResult};
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, IsTerminal, Stdout};
use std::panic;

/// Terminal wrapper that handles setup/teardown properly
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Terminal reports modified keys unambiguously (kitty protocol)
    keyboard_enhanced: bool,
    restored: bool,
}

impl Tui {
    /// Initialize terminal - enters alternate screen and raw mode immediately
    pub fn init() -> DashResult<Self> {
        // Check for real terminal first
        if !io::stdout().is_terminal() {
            return Err(DashError::Terminal(
                "the terminal dashboard needs an interactive terminal; run without --tui for the desktop window".into(),
            ));
        }

        // Enter raw mode and alternate screen FIRST
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        // Without this, Ctrl+digit arrives as control bytes that collide
        // with Esc, Backspace and friends
        let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if keyboard_enhanced {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )?;
        }
        tracing::debug!(keyboard_enhanced, "terminal ready");

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        // Set panic hook to restore terminal on crash
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            if let Err(e) = Self::restore_terminal(keyboard_enhanced) {
                eprintln!("Failed to restore terminal: {}", e);
            }
            original_hook(panic_info);
        }));

        Ok(Self {
            terminal,
            keyboard_enhanced,
            restored: false,
        })
    }

    /// Get mutable reference to terminal for drawing
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Whether Ctrl+digit combinations can be told apart from control keys
    pub fn keyboard_enhanced(&self) -> bool {
        self.keyboard_enhanced
    }

    /// Restore terminal to normal state
    fn restore_terminal(keyboard_enhanced: bool) -> DashResult<()> {
        if keyboard_enhanced {
            execute!(io::stdout(), PopKeyboardEnhancementFlags)?;
        }
        terminal::disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Clean exit - restore terminal and show cursor
    pub fn exit(&mut self) -> DashResult<()> {
        self.restored = true;
        Self::restore_terminal(self.keyboard_enhanced)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        if let Err(e) = Self::restore_terminal(self.keyboard_enhanced) {
            tracing::warn!("failed to restore terminal on drop: {}", e);
        }
    }
}
