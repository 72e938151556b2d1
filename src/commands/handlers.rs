//! LinkHarvest - Command handlers
//!
//! Operations the user can trigger on a running watcher

use serde::Serialize;

use crate::clipboard::{ClipboardSource, ClipboardWatcher, LinkListener};

/// Command execution result
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Copy all links to the clipboard ("Copy All")
///
/// `data` is the number of links written; 0 means the clipboard was not touched.
pub fn copy_all_links<C, L>(watcher: &mut ClipboardWatcher<C, L>) -> CommandResult<usize>
where
    C: ClipboardSource,
    L: LinkListener,
{
    match watcher.copy_all() {
        Ok(count) => CommandResult::ok(count),
        Err(e) => {
            log::warn!("Failed to copy links: {}", e);
            CommandResult::err(format!("Failed to copy links: {}", e))
        }
    }
}

/// Clear accumulated links ("Reset")
pub fn reset_links<C, L>(watcher: &mut ClipboardWatcher<C, L>) -> CommandResult<bool>
where
    C: ClipboardSource,
    L: LinkListener,
{
    watcher.reset();
    CommandResult::ok(true)
}

/// Get accumulated links in first-seen order
pub fn get_links<C, L>(watcher: &ClipboardWatcher<C, L>) -> CommandResult<Vec<String>>
where
    C: ClipboardSource,
    L: LinkListener,
{
    CommandResult::ok(watcher.links().to_vec())
}

/// Get number of accumulated links
pub fn get_link_count<C, L>(watcher: &ClipboardWatcher<C, L>) -> CommandResult<usize>
where
    C: ClipboardSource,
    L: LinkListener,
{
    CommandResult::ok(watcher.link_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{ClipboardSnapshot, MemoryClipboard, RecordingListener};
    use crate::error::AppError;

    struct ReadOnlyClipboard;

    impl ClipboardSource for ReadOnlyClipboard {
        fn read(&mut self) -> Option<ClipboardSnapshot> {
            Some(ClipboardSnapshot::plain_text("http://a.com http://b.com"))
        }

        fn write_text(&mut self, _text: &str) -> Result<(), AppError> {
            Err(AppError::Clipboard(arboard::Error::ClipboardOccupied))
        }
    }

    #[test]
    fn copy_reports_written_count() {
        let cb = MemoryClipboard::new();
        let mut w = ClipboardWatcher::new(cb.clone(), RecordingListener::default(), true);
        w.initialize();
        cb.set_text("u1 http://u1 http://u2");
        w.poll();

        assert_eq!(copy_all_links(&mut w), CommandResult::ok(2));
        assert_eq!(cb.text().as_deref(), Some("http://u1\nhttp://u2"));
    }

    #[test]
    fn copy_with_no_links_reports_zero() {
        let cb = MemoryClipboard::new();
        let mut w = ClipboardWatcher::new(cb.clone(), RecordingListener::default(), true);
        assert_eq!(copy_all_links(&mut w), CommandResult::ok(0));
        assert!(cb.writes().is_empty());
    }

    #[test]
    fn copy_failure_is_reported_not_raised() {
        let mut w = ClipboardWatcher::new(ReadOnlyClipboard, RecordingListener::default(), false);
        w.poll();

        let result = copy_all_links(&mut w);
        assert!(!result.success);
        assert!(result.data.is_none());
        assert!(result.error.unwrap().starts_with("Failed to copy links"));
        assert_eq!(w.link_count(), 2);
    }

    #[test]
    fn reset_list_and_count() {
        let cb = MemoryClipboard::new();
        let mut w = ClipboardWatcher::new(cb.clone(), RecordingListener::default(), true);
        w.initialize();
        cb.set_text("http://a.com");
        w.poll();

        assert_eq!(get_links(&w), CommandResult::ok(vec!["http://a.com".to_string()]));
        assert_eq!(get_link_count(&w), CommandResult::ok(1));
        assert_eq!(reset_links(&mut w), CommandResult::ok(true));
        assert_eq!(get_link_count(&w), CommandResult::ok(0));
        assert_eq!(w.listener().resets, 1);
    }

    #[test]
    fn result_serializes_with_all_fields() {
        let json = serde_json::to_string(&CommandResult::ok(3usize)).unwrap();
        assert_eq!(json, r#"{"success":true,"data":3,"error":null}"#);
    }
}
