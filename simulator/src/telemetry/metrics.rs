use serde::Serialize;

/// Frame counters for one replay or synthetic run.
#[derive(Debug, Default)]
pub struct MetricsRecorder {
    counts: MetricsSnapshot,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub decoded: usize,
    pub valid: usize,
    pub errors: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_frame(&mut self, valid: bool) {
        self.counts.decoded += 1;
        if valid {
            self.counts.valid += 1;
        }
    }

    pub fn record_error(&mut self) {
        self.counts.errors += 1;
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.counts
    }
}
