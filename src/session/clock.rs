use std::time::{Duration, Instant};

/// Elapsed-time display for a running match.
///
/// The clock freezes when [`MatchClock::stop`] is called so the result
/// screen keeps showing the final time.
#[derive(Clone, Copy, Debug)]
pub struct MatchClock {
    started: Instant,
    frozen: Option<Duration>,
}

impl MatchClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            frozen: None,
        }
    }

    pub fn stop(&mut self) {
        if self.frozen.is_none() {
            self.frozen = Some(self.started.elapsed());
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.frozen.unwrap_or_else(|| self.started.elapsed())
    }

    /// Renders the elapsed time as `Time: mm:ss`.
    pub fn display(&self) -> String {
        format_duration(self.elapsed())
    }
}

fn format_duration(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("Time: {:02}:{:02}", secs / 60, secs % 60)
}
