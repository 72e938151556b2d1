//! LinkHarvest - Repeating task
//!
//! Runs a task body at a fixed interval on the calling thread. Messages
//! arriving on an inbox are handled between ticks, never during one.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Why the task body was woken
#[derive(Debug, PartialEq, Eq)]
pub enum Wake<M> {
    /// The interval elapsed
    Tick,
    /// A message arrived on the inbox
    Message(M),
}

/// Whether the task should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Handle that stops a running task from another thread
#[derive(Debug, Clone)]
pub struct StopHandle {
    running: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

/// Fixed-interval task runner
pub struct RepeatingTask {
    /// Time between ticks
    interval: Duration,
    /// Cleared to end the loop
    running: Arc<AtomicBool>,
}

impl RepeatingTask {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            running: Arc::clone(&self.running),
        }
    }

    /// Run until `on_wake` returns `Flow::Stop` or a `StopHandle` fires.
    ///
    /// The first tick fires immediately. Once every sender of `inbox` is
    /// dropped the task keeps ticking without messages.
    pub fn run<M, F>(&self, inbox: &Receiver<M>, mut on_wake: F)
    where
        F: FnMut(Wake<M>) -> Flow,
    {
        log::info!("Repeating task started with {}ms interval", self.interval.as_millis());

        let mut next_tick = Instant::now();
        let mut inbox_open = true;

        while self.running.load(Ordering::SeqCst) {
            let now = Instant::now();
            if now >= next_tick {
                if on_wake(Wake::Tick) == Flow::Stop {
                    break;
                }
                // Skip missed ticks instead of bursting to catch up
                next_tick = Instant::now() + self.interval;
                continue;
            }

            let wait = next_tick - now;
            if !inbox_open {
                thread::sleep(wait);
                continue;
            }

            match inbox.recv_timeout(wait) {
                Ok(message) => {
                    if on_wake(Wake::Message(message)) == Flow::Stop {
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    log::debug!("Task inbox closed, continuing with ticks only");
                    inbox_open = false;
                }
            }
        }

        log::info!("Repeating task stopped");
    }
}
