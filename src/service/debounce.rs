use std::time::{Duration, Instant};

pub const DEBOUNCE_MS: u64 = 300;

/// Coalesces bursts of change notifications.
///
/// The host calls [`Debouncer::schedule_at`] on every edit and polls
/// [`Debouncer::should_execute_at`] from its own loop or timer. A refresh is due
/// once the quiescence window has elapsed since the most recent edit. There is
/// no cancellation: a newer edit simply pushes the deadline out.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    /// Timestamp of the last input that triggered a debounce
    last_input_time: Option<Instant>,
    /// Whether a refresh is waiting for the window to expire
    pending_execution: bool,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Debouncer {
    pub fn new() -> Self {
        Self::with_window(Duration::from_millis(DEBOUNCE_MS))
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            last_input_time: None,
            pending_execution: false,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn schedule_at(&mut self, now: Instant) {
        self.last_input_time = Some(now);
        self.pending_execution = true;
    }

    pub fn should_execute_at(&self, now: Instant) -> bool {
        if !self.pending_execution {
            return false;
        }

        match self.last_input_time {
            Some(last_time) => now.saturating_duration_since(last_time) >= self.window,
            None => false,
        }
    }

    pub fn mark_executed(&mut self) {
        self.pending_execution = false;
        self.last_input_time = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending_execution
    }
}
