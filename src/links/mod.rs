//! LinkHarvest - Links module
//!
//! Link extraction from clipboard payloads and the accumulated link store

pub mod extractor;
pub mod store;

pub use extractor::{extract, extract_html, extract_plain_text};
pub use store::LinkStore;
