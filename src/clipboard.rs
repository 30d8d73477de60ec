//! Clipboard integration

use crate::{PetsError, Result};
use arboard::Clipboard;
use log::debug;

/// Copy a transcript (or any text) to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    debug!("Copying {} chars to clipboard", text.len());

    let mut clipboard = Clipboard::new()
        .map_err(|e| PetsError::Clipboard(format!("Failed to open clipboard: {}", e)))?;

    clipboard
        .set_text(text)
        .map_err(|e| PetsError::Clipboard(format!("Failed to copy to clipboard: {}", e)))?;

    Ok(())
}
