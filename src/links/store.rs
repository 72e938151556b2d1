//! LinkHarvest - Accumulated link store
//!
//! Ordered, duplicate-free collection of links seen during the session.

use std::collections::HashSet;

use serde::Serialize;

/// Links in first-seen order, compared by exact string equality
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct LinkStore {
    /// Links in insertion order
    links: Vec<String>,
    /// Membership index over `links`
    #[serde(skip)]
    seen: HashSet<String>,
}

impl LinkStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `link` if it is not already present.
    ///
    /// Returns `true` when the link was added.
    pub fn insert(&mut self, link: &str) -> bool {
        if self.seen.contains(link) {
            return false;
        }
        self.seen.insert(link.to_string());
        self.links.push(link.to_string());
        true
    }

    /// Append every absent link, returning how many were added
    pub fn extend_new<I, S>(&mut self, links: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        links
            .into_iter()
            .filter(|link| self.insert(link.as_ref()))
            .count()
    }

    pub fn contains(&self, link: &str) -> bool {
        self.seen.contains(link)
    }

    /// Remove every link
    pub fn clear(&mut self) {
        self.links.clear();
        self.seen.clear();
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// All links in first-seen order
    pub fn as_slice(&self) -> &[String] {
        &self.links
    }

    /// Links joined by `\n`, without a trailing newline
    pub fn to_text(&self) -> String {
        self.links.join("\n")
    }
}
