//! Clipboard operations

/// Result of a clipboard operation
pub enum ClipboardResult {
    /// Number of bytes copied
    Success(usize),
    Error(String),
}

/// Copy `text` to the system clipboard
pub fn copy_text(text: &str) -> ClipboardResult {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text) {
                ClipboardResult::Error(format!("Clipboard error: {}", e))
            } else {
                ClipboardResult::Success(text.len())
            }
        }
        Err(e) => ClipboardResult::Error(format!("Clipboard error: {}", e)),
    }
}
