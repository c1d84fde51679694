//! Raw-mode terminal for the job board screen
//!
//! Setup and teardown are symmetric; the panic hook runs the same teardown
//! so a crash never leaves the shell in raw mode on the alternate screen.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::error::Result;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

pub fn restore_terminal(mut terminal: Tui) -> Result<()> {
    leave(terminal.backend_mut())?;
    Ok(())
}

/// Undo [`setup_terminal`] on `out`; raw mode is dropped even if writing fails
fn leave<W: Write>(out: &mut W) -> io::Result<()> {
    let screen = execute!(out, LeaveAlternateScreen, Show);
    disable_raw_mode()?;
    screen
}

/// Chain a teardown in front of the current panic hook
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = leave(&mut io::stdout());
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_writes_screen_restore_sequence() {
        let mut out = Vec::new();
        // raw mode may be unavailable without a tty; the bytes are written first
        let _ = leave(&mut out);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("\x1b[?1049l"), "leaves alternate screen: {:?}", text);
        assert!(text.contains("\x1b[?25h"), "shows cursor: {:?}", text);
    }

    #[test]
    fn test_panic_hook_installs() {
        install_panic_hook();
    }
}
