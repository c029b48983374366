use std::io::IsTerminal;
use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK_INTERVAL: Duration = Duration::from_millis(100);
const SPINNER_TEMPLATE: &str = "{spinner:.green} {msg} [{elapsed}]";

/// Spinner shown while a build step runs.
///
/// Hidden in quiet mode, when stderr is not a TTY, and during parallel builds
/// where concurrent steps would fight over one line.
pub struct BuildProgress {
    visible: bool,
    current: Mutex<Option<ProgressBar>>,
}

impl BuildProgress {
    /// Creates a spinner that draws to stderr to keep stdout clean.
    #[must_use]
    pub fn new(quiet: bool, parallel: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(quiet || parallel, is_tty)
    }

    /// Internal constructor so tests can exercise the visible path off a TTY.
    fn new_with_visibility(hidden: bool, is_tty: bool) -> Self {
        Self {
            visible: !hidden && is_tty,
            current: Mutex::new(None),
        }
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    fn create_spinner(message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template(SPINNER_TEMPLATE) {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    /// Starts a spinner for `message`, clearing any spinner still running.
    pub fn start(&self, message: &str) {
        let spinner = if self.visible {
            Self::create_spinner(message)
        } else {
            ProgressBar::hidden()
        };
        if let Ok(mut current) = self.current.lock()
            && let Some(previous) = current.replace(spinner)
        {
            previous.finish_and_clear();
        }
    }

    /// Whether a spinner is currently running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.lock().is_ok_and(|current| current.is_some())
    }

    /// Stops the current spinner and clears it from the terminal.
    pub fn finish(&self) {
        if let Ok(mut current) = self.current.lock()
            && let Some(spinner) = current.take()
        {
            spinner.finish_and_clear();
        }
    }
}

impl Drop for BuildProgress {
    fn drop(&mut self) {
        self.finish();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
