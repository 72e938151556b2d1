//! LinkHarvest - Clipboard content data models
//!
//! Defines the clipboard payload captured on each poll

use serde::{Deserialize, Serialize};

/// Clipboard representation the payload was captured from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentFormat {
    /// HTML markup
    Html,
    /// Plain text
    PlainText,
}

impl ContentFormat {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentFormat::Html => "html",
            ContentFormat::PlainText => "plain_text",
        }
    }
}

/// Clipboard content snapshot
///
/// Only used to detect changes between polls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardSnapshot {
    /// Representation the payload came from
    pub format: ContentFormat,
    /// Raw payload
    pub content: String,
}

impl ClipboardSnapshot {
    pub fn html(content: impl Into<String>) -> Self {
        Self {
            format: ContentFormat::Html,
            content: content.into(),
        }
    }

    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            format: ContentFormat::PlainText,
            content: content.into(),
        }
    }

    /// Whether `other` carries the same raw payload.
    ///
    /// The format is not compared: HTML and plain text with identical bytes
    /// count as unchanged.
    pub fn same_payload(&self, other: &ClipboardSnapshot) -> bool {
        self.content == other.content
    }
}
