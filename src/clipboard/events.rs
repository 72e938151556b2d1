//! LinkHarvest - Watcher events
//!
//! Notifications the watcher sends to the presentation layer

use serde::Serialize;

/// Result of a poll that added at least one link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinksChanged {
    /// Links accumulated so far
    pub total: usize,
    /// Links added by this poll
    pub newly_added: usize,
}

/// Receiver of watcher notifications
pub trait LinkListener {
    /// New links were appended. `links` is the full accumulated list.
    fn on_links_changed(&mut self, change: LinksChanged, links: &[String]);

    /// The accumulated list was cleared
    fn on_reset(&mut self);
}

/// Listener that records every notification, for headless use
#[derive(Debug, Default, Clone)]
pub struct RecordingListener {
    /// Received changes, oldest first
    pub changes: Vec<LinksChanged>,
    /// Full list as of the last change
    pub last_links: Vec<String>,
    /// Number of reset notifications
    pub resets: usize,
}

impl LinkListener for RecordingListener {
    fn on_links_changed(&mut self, change: LinksChanged, links: &[String]) {
        self.changes.push(change);
        self.last_links = links.to_vec();
    }

    fn on_reset(&mut self) {
        self.resets += 1;
        self.last_links.clear();
    }
}
