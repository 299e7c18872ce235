mod handler;
mod ui;

pub use handler::{handle_key_event, AppAction};
pub use ui::draw;

use std::io::Write;

use base64::Engine;

use crate::error::Result;

/// Copy text to the system clipboard through the OSC 52 escape sequence.
/// Works across SSH sessions, which a desktop clipboard API would not.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let payload = base64::engine::general_purpose::STANDARD.encode(text);
    let mut stdout = std::io::stdout();
    write!(stdout, "\x1b]52;c;{}\x07", payload)?;
    stdout.flush()?;
    Ok(())
}
