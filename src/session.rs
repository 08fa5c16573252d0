//! Interactive lookup session.
//!
//! The chart loads on a background thread. Until it arrives every query is
//! answered with the loading message; a failed load stays failed for the
//! rest of the session. Typed lines are debounced so a burst of input
//! produces a single search.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;

use colored::Colorize;
use tracing::{debug, error, info};

use crate::chart::StrategyIndex;
use crate::config::Config;
use crate::display::{render_results, LOADING_MESSAGE, PROMPT_MESSAGE};
use crate::error::ChartResult;
use crate::search::search;

// ---------------------------------------------------------------------------
// Load state
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum LoadState {
    Loading,
    Ready(StrategyIndex),
    Failed(String),
}

pub struct Session {
    state: LoadState,
    loader: Option<Receiver<ChartResult<StrategyIndex>>>,
}

impl Session {
    /// Start loading the chart at `path` in the background.
    pub fn start(path: PathBuf) -> Session {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // The session may be gone by the time loading finishes.
            let _ = tx.send(StrategyIndex::load(&path));
        });
        Session::with_loader(rx)
    }

    /// Session fed by an arbitrary loader channel.
    pub fn with_loader(rx: Receiver<ChartResult<StrategyIndex>>) -> Session {
        Session {
            state: LoadState::Loading,
            loader: Some(rx),
        }
    }

    /// Pick up a finished load without blocking.
    pub fn poll(&mut self) -> &LoadState {
        let received = match &self.loader {
            Some(rx) => rx.try_recv(),
            None => return &self.state,
        };
        match received {
            Ok(result) => self.finish(result),
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.finish_failed("loader stopped before delivering data".to_string())
            }
        }
        &self.state
    }

    /// Block until the load has finished one way or the other.
    pub fn wait(&mut self) -> &LoadState {
        let received = match &self.loader {
            Some(rx) => rx.recv(),
            None => return &self.state,
        };
        match received {
            Ok(result) => self.finish(result),
            Err(_) => self.finish_failed("loader stopped before delivering data".to_string()),
        }
        &self.state
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    fn finish(&mut self, result: ChartResult<StrategyIndex>) {
        match result {
            Ok(chart) => {
                info!(hands = chart.num_hands(), "chart ready");
                self.loader = None;
                self.state = LoadState::Ready(chart);
            }
            Err(e) => self.finish_failed(e.to_string()),
        }
    }

    fn finish_failed(&mut self, detail: String) {
        error!(detail = detail.as_str(), "chart load failed");
        self.loader = None;
        self.state = LoadState::Failed(detail);
    }

    /// Text shown for a query in the current state.
    pub fn respond(&mut self, query: &str) -> String {
        let query = query.trim();
        if query.is_empty() {
            return PROMPT_MESSAGE.to_string();
        }
        match self.poll() {
            LoadState::Loading => LOADING_MESSAGE.to_string(),
            LoadState::Failed(detail) => load_failure_message(detail),
            LoadState::Ready(chart) => render_results(&search(query, chart), chart),
        }
    }
}

pub fn load_failure_message(detail: &str) -> String {
    format!(
        "{}\nTechnical details: {}",
        "Error loading data. Please check that the chart file exists and is correctly formatted."
            .red(),
        detail
    )
}

// ---------------------------------------------------------------------------
// Debounce
// ---------------------------------------------------------------------------

/// Collapses bursts from a channel into their latest value.
pub struct Debouncer<T> {
    rx: Receiver<T>,
    wait: Duration,
}

impl<T> Debouncer<T> {
    pub fn new(rx: Receiver<T>, wait: Duration) -> Self {
        Debouncer { rx, wait }
    }

    /// Block for a value, then keep replacing it with newer ones until
    /// `wait` passes quietly. `None` once the sender is gone and drained.
    pub fn next(&self) -> Option<T> {
        let mut latest = self.rx.recv().ok()?;
        loop {
            match self.rx.recv_timeout(self.wait) {
                Ok(value) => latest = value,
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return Some(latest)
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Terminal loop
// ---------------------------------------------------------------------------

fn is_quit(line: &str) -> bool {
    matches!(line.trim(), ":q" | "quit" | "exit")
}

pub fn run_interactive(config: &Config) -> io::Result<()> {
    let mut session = Session::start(config.data_path.clone());

    let (tx, rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    debug!(error = %e, "stdin closed");
                    break;
                }
            }
        }
    });
    let input = Debouncer::new(rx, config.debounce);

    let mut stdout = io::stdout();
    writeln!(stdout, "{}", PROMPT_MESSAGE.dimmed())?;
    while let Some(line) = input.next() {
        if is_quit(&line) {
            break;
        }
        let text = if line.trim() == "clear" {
            PROMPT_MESSAGE.dimmed().to_string()
        } else {
            session.respond(&line)
        };
        writeln!(stdout, "{}\n", text)?;
        stdout.flush()?;
    }
    Ok(())
}
