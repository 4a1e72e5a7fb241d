use crate::domain::ports::{KeyPress, Terminal};
use crate::utils::error::{ConvertError, Result};
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self as term, Clear, ClearType};
use std::io::{stdout, Write};

/// raw mode 只在讀取單一按鍵期間開啟，drop 時還原
struct RawModeGuard;

impl RawModeGuard {
    fn new() -> std::io::Result<Self> {
        term::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = term::disable_raw_mode();
    }
}

#[derive(Debug, Default)]
pub struct CrosstermTerminal;

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self
    }
}

impl Terminal for CrosstermTerminal {
    fn clear(&mut self) -> Result<()> {
        execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<()> {
        let mut out = stdout();
        writeln!(out, "{}", text)?;
        out.flush()?;
        Ok(())
    }

    fn read_key(&mut self) -> Result<KeyPress> {
        let _guard = RawModeGuard::new()?;
        loop {
            // Windows 會同時送出 Press 與 Release
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    return Err(ConvertError::Interrupted);
                }
                return Ok(match key.code {
                    KeyCode::Enter => KeyPress::Enter,
                    _ => KeyPress::Other,
                });
            }
        }
    }
}
