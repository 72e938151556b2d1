//! LinkHarvest - Clipboard access
//!
//! `ClipboardSource` is the seam between the watcher and the clipboard.
//! `SystemClipboard` talks to the OS through arboard; `MemoryClipboard` keeps
//! the contents in memory for headless runs and tests.

use std::sync::Arc;

use arboard::Clipboard;
use parking_lot::Mutex;

use super::models::ClipboardSnapshot;
use crate::error::AppError;

/// Clipboard read/write access
pub trait ClipboardSource {
    /// Read the current content, HTML preferred over plain text.
    ///
    /// Returns `None` when neither representation is available.
    fn read(&mut self) -> Option<ClipboardSnapshot>;

    /// Replace the whole clipboard with plain text
    fn write_text(&mut self, text: &str) -> Result<(), AppError>;
}

/// OS clipboard backed by arboard
pub struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    /// Open the system clipboard
    pub fn new() -> Result<Self, AppError> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }

    /// Reopen the clipboard after an unexpected read failure
    fn reconnect(&mut self) {
        match Clipboard::new() {
            Ok(cb) => self.clipboard = cb,
            Err(e) => log::warn!("[Clipboard] Failed to reopen clipboard: {}", e),
        }
    }
}

impl ClipboardSource for SystemClipboard {
    fn read(&mut self) -> Option<ClipboardSnapshot> {
        // 1. HTML first, even when plain text is also present
        match self.clipboard.get().html() {
            Ok(html) => return Some(ClipboardSnapshot::html(html)),
            Err(arboard::Error::ContentNotAvailable) => {}
            Err(e) => {
                log::debug!("[Clipboard] HTML read failed: {}", e);
            }
        }

        // 2. Plain text
        match self.clipboard.get_text() {
            Ok(text) => Some(ClipboardSnapshot::plain_text(text)),
            Err(arboard::Error::ContentNotAvailable) => {
                log::trace!("[Clipboard] No HTML or text content");
                None
            }
            Err(e) => {
                log::debug!("[Clipboard] Text read failed: {}", e);
                self.reconnect();
                None
            }
        }
    }

    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.clipboard.set_text(text)?;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    html: Option<String>,
    text: Option<String>,
    writes: Vec<String>,
}

/// In-memory clipboard
///
/// Clones share the same contents, so a caller can keep a handle and change
/// the clipboard while a watcher owns another clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with HTML only
    pub fn set_html(&self, html: impl Into<String>) {
        let mut state = self.state.lock();
        state.html = Some(html.into());
        state.text = None;
    }

    /// Replace the contents with plain text only
    pub fn set_text(&self, text: impl Into<String>) {
        let mut state = self.state.lock();
        state.html = None;
        state.text = Some(text.into());
    }

    /// Replace the contents with both representations, as browsers do
    pub fn set_html_and_text(&self, html: impl Into<String>, text: impl Into<String>) {
        let mut state = self.state.lock();
        state.html = Some(html.into());
        state.text = Some(text.into());
    }

    /// Remove all content, as an image-only clipboard would look
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.html = None;
        state.text = None;
    }

    /// Current plain text representation
    pub fn text(&self) -> Option<String> {
        self.state.lock().text.clone()
    }

    /// Every string written through `write_text`, oldest first
    pub fn writes(&self) -> Vec<String> {
        self.state.lock().writes.clone()
    }
}

impl ClipboardSource for MemoryClipboard {
    fn read(&mut self) -> Option<ClipboardSnapshot> {
        let state = self.state.lock();
        if let Some(html) = &state.html {
            return Some(ClipboardSnapshot::html(html.clone()));
        }
        state.text.clone().map(ClipboardSnapshot::plain_text)
    }

    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        let mut state = self.state.lock();
        state.html = None;
        state.text = Some(text.to_string());
        state.writes.push(text.to_string());
        Ok(())
    }
}
