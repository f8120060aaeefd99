//! Debounced search input. Rapid keystrokes collapse into one downstream
//! call carrying only the final value: every new input aborts the pending
//! timer, and only a timer that survives the quiet window fires.
//!
//! Used by the client-side search box; server pages do not debounce.
#![allow(dead_code)]

use std::time::Duration;

use tokio::task::JoinHandle;

pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Debouncer::new(DEBOUNCE_DELAY)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Debouncer {
        Debouncer {
            delay,
            pending: None,
        }
    }

    /// Schedules `emit(value)` after the quiet window, cancelling any
    /// still-pending emission (last write wins).
    pub fn input<F>(&mut self, value: String, emit: F)
    where
        F: FnOnce(String) + Send + 'static,
    {
        if let Some(previous) = self.pending.take() {
            previous.abort();
        }
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            emit(value);
        }));
    }

    /// Drops a pending emission without firing it, e.g. when the search
    /// box unmounts.
    pub fn cancel(&mut self) {
        if let Some(previous) = self.pending.take() {
            previous.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn sink() -> (Arc<Mutex<Vec<String>>>, impl Fn(String) + Clone) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let writer = Arc::clone(&seen);
        (seen, move |value: String| {
            writer.lock().unwrap().push(value);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_the_quiet_window() {
        let (seen, emit) = sink();
        let mut debouncer = Debouncer::default();
        debouncer.input("hair".to_string(), emit);

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(seen.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(*seen.lock().unwrap(), vec!["hair".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_inputs_coalesce_to_the_final_value() {
        let (seen, emit) = sink();
        let mut debouncer = Debouncer::default();
        for query in ["h", "ha", "hai", "hair"] {
            debouncer.input(query.to_string(), emit.clone());
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(*seen.lock().unwrap(), vec!["hair".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_the_pending_emission() {
        let (seen, emit) = sink();
        let mut debouncer = Debouncer::default();
        debouncer.input("hair".to_string(), emit);
        debouncer.cancel();

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(seen.lock().unwrap().is_empty());
    }
}
