use web_time::{Duration, Instant};

/// Wall-clock timer for one game: runs from the first move until the game ends.
#[derive(Clone, Debug, Default)]
pub(crate) struct Timer {
    started_at: Option<Instant>,
    stopped_after: Option<Duration>,
}

impl Timer {
    pub fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    pub fn stop(&mut self) {
        if self.stopped_after.is_none() {
            self.stopped_after = Some(self.elapsed());
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn elapsed(&self) -> Duration {
        match (self.started_at, self.stopped_after) {
            (_, Some(stopped_after)) => stopped_after,
            (Some(started_at), None) => started_at.elapsed(),
            (None, None) => Duration::ZERO,
        }
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }
}

/// Formats a duration as `MM:SS`; minutes keep growing past 99.
pub(crate) fn format_seconds(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
