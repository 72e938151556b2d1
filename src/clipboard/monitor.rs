//! LinkHarvest - Clipboard watcher module
//!
//! Detects clipboard changes between polls and accumulates the links found
//! in new content.

use super::events::{LinkListener, LinksChanged};
use super::models::ClipboardSnapshot;
use super::source::ClipboardSource;
use crate::error::AppError;
use crate::links::{self, LinkStore};

/// Clipboard watcher
///
/// Owns the accumulated links and the last seen snapshot. Every method runs
/// on the caller's thread; nothing here is shared.
pub struct ClipboardWatcher<C, L> {
    /// Clipboard to read from and copy into
    clipboard: C,
    /// Receiver of change and reset notifications
    listener: L,
    /// Links collected this session
    links: LinkStore,
    /// Last observed payload
    last_snapshot: Option<ClipboardSnapshot>,
    /// Skip whatever is on the clipboard at startup
    ignore_preexisting: bool,
}

impl<C: ClipboardSource, L: LinkListener> ClipboardWatcher<C, L> {
    /// Create a new watcher
    pub fn new(clipboard: C, listener: L, ignore_preexisting: bool) -> Self {
        Self {
            clipboard,
            listener,
            links: LinkStore::new(),
            last_snapshot: None,
            ignore_preexisting,
        }
    }

    /// Record the current clipboard without extracting from it.
    ///
    /// Does nothing when pre-existing content should be processed, in which
    /// case the first `poll` picks it up.
    pub fn initialize(&mut self) {
        if !self.ignore_preexisting {
            log::debug!("[Watcher] Pre-existing clipboard content will be processed");
            return;
        }
        self.last_snapshot = self.clipboard.read();
        log::debug!(
            "[Watcher] Ignoring pre-existing clipboard content: {:?}",
            self.last_snapshot.as_ref().map(|s| s.format)
        );
    }

    /// Check the clipboard once and merge links from new content.
    ///
    /// Returns the change when at least one link was added.
    pub fn poll(&mut self) -> Option<LinksChanged> {
        let snapshot = self.clipboard.read()?;

        if let Some(last) = &self.last_snapshot {
            if last.same_payload(&snapshot) {
                log::trace!("[Watcher] Clipboard unchanged");
                return None;
            }
        }

        log::debug!(
            "[Watcher] New {} content detected ({} bytes)",
            snapshot.format.as_str(),
            snapshot.content.len()
        );

        let found = links::extract(&snapshot.content, snapshot.format);
        self.last_snapshot = Some(snapshot);

        let newly_added = self.links.extend_new(&found);
        log::debug!("[Watcher] {} links found, {} new", found.len(), newly_added);
        if newly_added == 0 {
            return None;
        }

        let change = LinksChanged {
            total: self.links.len(),
            newly_added,
        };
        self.listener.on_links_changed(change, self.links.as_slice());
        Some(change)
    }

    /// Write all links to the clipboard, one per line.
    ///
    /// Leaves the clipboard untouched when there are no links. Returns the
    /// number of links written.
    pub fn copy_all(&mut self) -> Result<usize, AppError> {
        if self.links.is_empty() {
            log::debug!("[Watcher] Nothing to copy");
            return Ok(0);
        }
        self.clipboard.write_text(&self.links.to_text())?;
        log::info!("Copied {} links to clipboard", self.links.len());
        Ok(self.links.len())
    }

    /// Forget all links. The last snapshot is kept, so content already seen
    /// is not extracted again until the clipboard changes.
    pub fn reset(&mut self) {
        self.links.clear();
        log::info!("Links reset");
        self.listener.on_reset();
    }

    /// Accumulated links in first-seen order
    pub fn links(&self) -> &[String] {
        self.links.as_slice()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn last_snapshot(&self) -> Option<&ClipboardSnapshot> {
        self.last_snapshot.as_ref()
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }
}
