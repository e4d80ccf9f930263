//! Progress spinner shared by the commands.
//!
//! The logger prints through [`suspend`] so warnings raised while a spinner
//! is ticking land on their own line instead of inside the spinner's.

use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

static ACTIVE: Mutex<Option<ProgressBar>> = Mutex::new(None);

/// A ticking spinner, or a hidden one in quiet mode.
pub(crate) fn new_spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    activate(&pb);
    pb
}

/// Clear the spinner and stop routing log output through it.
pub(crate) fn finish(pb: &ProgressBar) {
    pb.finish_and_clear();
    if let Ok(mut active) = ACTIVE.lock() {
        active.take();
    }
}

/// Run `f` with the active spinner (if any) hidden.
pub(crate) fn suspend<R>(f: impl FnOnce() -> R) -> R {
    let active = ACTIVE.lock().ok().and_then(|a| a.clone());
    match active {
        Some(pb) => pb.suspend(f),
        None => f(),
    }
}

fn activate(pb: &ProgressBar) {
    if let Ok(mut active) = ACTIVE.lock() {
        *active = Some(pb.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suspend_with_and_without_spinner() {
        assert_eq!(suspend(|| 1), 1);

        let pb = ProgressBar::hidden();
        activate(&pb);
        assert!(ACTIVE.lock().unwrap().is_some());
        assert_eq!(suspend(|| "logged"), "logged");

        finish(&pb);
        assert!(ACTIVE.lock().unwrap().is_none());
        assert!(pb.is_finished());
    }
}
