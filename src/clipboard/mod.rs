//! LinkHarvest - Clipboard module
//!
//! Provides clipboard access, change detection and link accumulation

pub mod events;
pub mod models;
pub mod monitor;
pub mod source;

pub use events::{LinkListener, LinksChanged, RecordingListener};
pub use models::{ClipboardSnapshot, ContentFormat};
pub use monitor::ClipboardWatcher;
pub use source::{ClipboardSource, MemoryClipboard, SystemClipboard};
