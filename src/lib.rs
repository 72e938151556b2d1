//! LinkHarvest - Collects hyperlinks from the clipboard
//!
//! Polls the system clipboard, extracts links from newly copied HTML or
//! plain text, and keeps them in first-seen order until the user copies them
//! back to the clipboard or resets the list.

pub mod clipboard;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod links;
pub mod scheduler;

use std::sync::mpsc;

use clipboard::{ClipboardWatcher, SystemClipboard};
use config::Settings;
use console::ConsolePresenter;
use error::AppError;
use scheduler::{Flow, RepeatingTask, Wake};

/// Application main entry point
pub fn run() -> Result<(), AppError> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("LinkHarvest starting...");

    let settings = Settings::load()?;
    log::debug!("Settings: {:?}", settings);

    let clipboard = SystemClipboard::new()?;
    let mut presenter = ConsolePresenter::stdout(settings.output);
    presenter.show_banner();

    let mut watcher = ClipboardWatcher::new(
        clipboard,
        presenter,
        settings.ignore_preexisting_clipboard,
    );
    watcher.initialize();

    let (tx, rx) = mpsc::channel();
    console::spawn_stdin_reader(tx);

    let task = RepeatingTask::new(settings.poll_interval());
    task.run(&rx, |wake| match wake {
        Wake::Tick => {
            watcher.poll();
            Flow::Continue
        }
        Wake::Message(input) => console::handle_input(&mut watcher, input),
    });

    log::info!("LinkHarvest stopped with {} links collected", watcher.link_count());
    Ok(())
}
