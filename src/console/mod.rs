//! LinkHarvest - Console presentation
//!
//! Renders watcher events and command results as text or JSON lines, and
//! reads user commands from stdin.

use std::io::{self, BufRead, Write};
use std::sync::mpsc::Sender;
use std::thread;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::clipboard::{ClipboardSource, ClipboardWatcher, LinkListener, LinksChanged};
use crate::commands::{self, Command, CommandResult, Input};
use crate::config::OutputFormat;
use crate::scheduler::Flow;

pub const BANNER: &str = "Automatically capturing hyperlinks from your clipboard...";

const HELP: &str = "Commands: copy (c), reset (r), list (l), count (n), help (h), quit (q)";

/// Console event payload for JSON output
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum ConsoleEvent<'a> {
    Started { message: &'static str },
    LinksChanged {
        total: usize,
        newly_added: usize,
        new_links: &'a [String],
    },
    Reset { total: usize },
    Copied { result: &'a CommandResult<usize> },
    Links { result: &'a CommandResult<Vec<String>> },
    Count { result: &'a CommandResult<usize> },
    Help { message: &'static str },
    Unknown { input: &'a str },
}

#[derive(Serialize)]
struct Envelope<'a> {
    at: DateTime<Utc>,
    #[serde(flatten)]
    event: ConsoleEvent<'a>,
}

/// Presentation layer writing to a terminal (or any writer)
pub struct ConsolePresenter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl ConsolePresenter<io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn show_banner(&mut self) {
        let lines = [BANNER.to_string(), HELP.to_string()];
        self.emit(ConsoleEvent::Started { message: BANNER }, &lines);
    }

    pub fn show_copied(&mut self, result: &CommandResult<usize>) {
        let line = match (&result.data, &result.error) {
            (Some(0), _) => "No links to copy.".to_string(),
            (Some(n), _) => format!("Copied {} link{} to clipboard.", n, plural(*n)),
            (None, Some(e)) => e.clone(),
            (None, None) => "Copy failed.".to_string(),
        };
        self.emit(ConsoleEvent::Copied { result }, &[line]);
    }

    pub fn show_links(&mut self, result: &CommandResult<Vec<String>>) {
        let links = result.data.as_deref().unwrap_or_default();
        let mut lines = vec!["Detected Hyperlinks:".to_string()];
        lines.extend(links.iter().map(|link| format!("  {}", link)));
        lines.push(total_line(links.len()));
        self.emit(ConsoleEvent::Links { result }, &lines);
    }

    pub fn show_count(&mut self, result: &CommandResult<usize>) {
        let lines = [total_line(result.data.unwrap_or_default())];
        self.emit(ConsoleEvent::Count { result }, &lines);
    }

    pub fn show_help(&mut self) {
        self.emit(ConsoleEvent::Help { message: HELP }, &[HELP.to_string()]);
    }

    pub fn show_unknown(&mut self, input: &str) {
        let lines = [format!("Unknown command {:?}. {}", input, HELP)];
        self.emit(ConsoleEvent::Unknown { input }, &lines);
    }

    /// Write either the JSON form of `event` or the text `lines`
    fn emit(&mut self, event: ConsoleEvent<'_>, lines: &[String]) {
        let result = match self.format {
            OutputFormat::Json => {
                let envelope = Envelope { at: Utc::now(), event };
                serde_json::to_writer(&mut self.out, &envelope)
                    .map_err(io::Error::from)
                    .and_then(|()| writeln!(self.out))
            }
            OutputFormat::Text => lines.iter().try_for_each(|line| writeln!(self.out, "{}", line)),
        };

        if let Err(e) = result.and_then(|()| self.out.flush()) {
            log::warn!("Failed to write console output: {}", e);
        }
    }
}

impl<W: Write> LinkListener for ConsolePresenter<W> {
    fn on_links_changed(&mut self, change: LinksChanged, links: &[String]) {
        let new_links = &links[links.len().saturating_sub(change.newly_added)..];
        let mut lines = vec![format!(
            "Added {} new link{}.",
            change.newly_added,
            plural(change.newly_added)
        )];
        lines.extend(new_links.iter().map(|link| format!("  + {}", link)));
        lines.push(total_line(change.total));

        self.emit(
            ConsoleEvent::LinksChanged {
                total: change.total,
                newly_added: change.newly_added,
                new_links,
            },
            &lines,
        );
    }

    fn on_reset(&mut self) {
        let lines = ["Links reset.".to_string(), total_line(0)];
        self.emit(ConsoleEvent::Reset { total: 0 }, &lines);
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

fn total_line(total: usize) -> String {
    format!("Total Links: {}", total)
}

/// Apply one line of user input to the watcher
pub fn handle_input<C, W>(watcher: &mut ClipboardWatcher<C, ConsolePresenter<W>>, input: Input) -> Flow
where
    C: ClipboardSource,
    W: Write,
{
    match input {
        Input::Command(Command::CopyAll) => {
            let result = commands::copy_all_links(watcher);
            watcher.listener_mut().show_copied(&result);
        }
        Input::Command(Command::Reset) => {
            // The presenter prints the reset through `on_reset`
            commands::reset_links(watcher);
        }
        Input::Command(Command::List) => {
            let result = commands::get_links(watcher);
            watcher.listener_mut().show_links(&result);
        }
        Input::Command(Command::Count) => {
            let result = commands::get_link_count(watcher);
            watcher.listener_mut().show_count(&result);
        }
        Input::Command(Command::Help) => watcher.listener_mut().show_help(),
        Input::Command(Command::Quit) => {
            log::info!("Quit requested");
            return Flow::Stop;
        }
        Input::Unknown(text) => watcher.listener_mut().show_unknown(&text),
    }
    Flow::Continue
}

/// Forward stdin lines to `tx` on a background thread.
///
/// The thread ends at end of input or once the receiver is gone.
pub fn spawn_stdin_reader(tx: Sender<Input>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::warn!("Failed to read stdin: {}", e);
                    break;
                }
            };
            if let Some(input) = Input::from_line(&line) {
                if tx.send(input).is_err() {
                    break;
                }
            }
        }
        log::debug!("Stdin closed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;

    type TestWatcher = ClipboardWatcher<MemoryClipboard, ConsolePresenter<Vec<u8>>>;

    fn watcher(cb: &MemoryClipboard, format: OutputFormat) -> TestWatcher {
        let mut w = ClipboardWatcher::new(cb.clone(), ConsolePresenter::new(Vec::new(), format), true);
        w.initialize();
        w
    }

    fn output(w: &TestWatcher) -> String {
        String::from_utf8(w.listener().out.clone()).unwrap()
    }

    #[test]
    fn text_output_for_new_links() {
        let cb = MemoryClipboard::new();
        let mut w = watcher(&cb, OutputFormat::Text);

        cb.set_text("http://a.com");
        w.poll();
        cb.set_text("http://a.com http://b.com http://c.com");
        w.poll();

        assert_eq!(
            output(&w),
            "Added 1 new link.\n  + http://a.com\nTotal Links: 1\n\
             Added 2 new links.\n  + http://b.com\n  + http://c.com\nTotal Links: 3\n"
        );
    }

    #[test]
    fn text_output_for_reset_and_copy() {
        let cb = MemoryClipboard::new();
        let mut w = watcher(&cb, OutputFormat::Text);

        assert_eq!(handle_input(&mut w, Input::Command(Command::CopyAll)), Flow::Continue);
        cb.set_text("http://a.com");
        w.poll();
        handle_input(&mut w, Input::Command(Command::CopyAll));
        handle_input(&mut w, Input::Command(Command::Reset));

        let out = output(&w);
        assert!(out.starts_with("No links to copy.\n"));
        assert!(out.contains("Copied 1 link to clipboard.\n"));
        assert!(out.ends_with("Links reset.\nTotal Links: 0\n"));
        assert_eq!(cb.writes(), vec!["http://a.com"]);
    }

    #[test]
    fn list_count_help_and_unknown() {
        let cb = MemoryClipboard::new();
        let mut w = watcher(&cb, OutputFormat::Text);
        cb.set_text("http://a.com http://b.com");
        w.poll();
        w.listener_mut().out.clear();

        handle_input(&mut w, Input::Command(Command::List));
        handle_input(&mut w, Input::Command(Command::Count));
        handle_input(&mut w, Input::Command(Command::Help));
        handle_input(&mut w, Input::Unknown("paste".to_string()));

        let out = output(&w);
        assert!(out.starts_with(
            "Detected Hyperlinks:\n  http://a.com\n  http://b.com\nTotal Links: 2\nTotal Links: 2\n"
        ));
        assert!(out.contains(HELP));
        assert!(out.contains("Unknown command \"paste\"."));
    }

    #[test]
    fn quit_stops_the_loop() {
        let cb = MemoryClipboard::new();
        let mut w = watcher(&cb, OutputFormat::Text);
        assert_eq!(handle_input(&mut w, Input::Command(Command::Quit)), Flow::Stop);
        assert!(output(&w).is_empty());
    }

    #[test]
    fn json_output_is_one_object_per_line() {
        let cb = MemoryClipboard::new();
        let mut w = watcher(&cb, OutputFormat::Json);

        cb.set_html(r#"<a href="http://a.com">x</a><a href='http://b.com'>y</a>"#);
        w.poll();
        handle_input(&mut w, Input::Command(Command::CopyAll));

        let out = output(&w);
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);

        assert_eq!(lines[0]["event"], "links_changed");
        assert_eq!(lines[0]["total"], 2);
        assert_eq!(lines[0]["newly_added"], 2);
        assert_eq!(lines[0]["new_links"], serde_json::json!(["http://a.com", "http://b.com"]));
        assert!(lines[0]["at"].is_string());

        assert_eq!(lines[1]["event"], "copied");
        assert_eq!(lines[1]["result"]["data"], 2);
        assert_eq!(lines[1]["result"]["success"], true);
    }

    #[test]
    fn banner_mentions_capture() {
        let mut presenter = ConsolePresenter::new(Vec::new(), OutputFormat::Text);
        presenter.show_banner();
        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(out.starts_with(BANNER));
    }
}
