use hubtarget::{FrameMetrics, TargetDataListener, TargetRecord};
use log::{debug, log_enabled, Level};

/// Listener that periodically dumps the rectangles of a frame at debug level.
pub struct FrameLogger {
    interval: usize,
    frames: usize,
    dumps: usize,
}

impl FrameLogger {
    /// Dump every `interval` frames; zero disables dumping.
    pub fn new(interval: usize) -> Self {
        Self {
            interval,
            frames: 0,
            dumps: 0,
        }
    }

    #[cfg(test)]
    pub fn dumps(&self) -> usize {
        self.dumps
    }
}

impl TargetDataListener for FrameLogger {
    fn on_target_data(&mut self, record: &TargetRecord, metrics: &FrameMetrics) {
        self.frames += 1;
        if self.interval == 0 || self.frames % self.interval != 0 {
            return;
        }
        self.dumps += 1;
        if log_enabled!(Level::Debug) {
            for line in dump_lines(record, metrics) {
                debug!("{}", line);
            }
        }
    }
}

fn dump_lines(record: &TargetRecord, metrics: &FrameMetrics) -> Vec<String> {
    let heading = match metrics.error_rotation() {
        Some(rotation) => format!(
            "{} error={} ground={:.2}",
            record, rotation, metrics.ground_distance
        ),
        None => format!("{} ground={:.2}", record, metrics.ground_distance),
    };
    std::iter::once(heading)
        .chain(
            record
                .targets
                .iter()
                .enumerate()
                .map(|(index, rect)| format!("{} = {} cx={:.1}", index, rect, rect.center_x())),
        )
        .collect()
}
