use crate::telemetry::{FrameLogger, MetricsRecorder, MetricsSnapshot};
use crate::workflow::config::VisionConfig;
use hubtarget::{FrameMetrics, FramePipeline, TargetGeometry};
use log::warn;

pub struct WorkflowResult {
    pub metrics: Vec<FrameMetrics>,
    pub counts: MetricsSnapshot,
}

impl WorkflowResult {
    /// Mean ground distance over valid frames.
    pub fn mean_ground_distance(&self) -> Option<f64> {
        let valid: Vec<f64> = self
            .metrics
            .iter()
            .filter(|m| m.valid)
            .map(|m| m.ground_distance)
            .collect();
        if valid.is_empty() {
            return None;
        }
        Some(valid.iter().sum::<f64>() / valid.len() as f64)
    }

    pub fn summary(&self) -> String {
        let mean = self
            .mean_ground_distance()
            .map(|d| format!("{:.2}", d))
            .unwrap_or_else(|| "n/a".to_string());
        format!(
            "Run -> frames {}, valid {}, errors {}, mean ground distance {}",
            self.counts.decoded, self.counts.valid, self.counts.errors, mean
        )
    }
}

/// Feeds payloads through the targeting pipeline and collects per-frame metrics.
pub struct Runner {
    pipeline: FramePipeline,
    logger: FrameLogger,
    recorder: MetricsRecorder,
}

impl Runner {
    pub fn new(config: &VisionConfig, geometry: TargetGeometry) -> Self {
        Self {
            pipeline: FramePipeline::new(geometry),
            logger: FrameLogger::new(config.log_interval),
            recorder: MetricsRecorder::new(),
        }
    }

    /// Malformed payloads are logged, counted and skipped.
    pub fn execute<I>(&mut self, frames: I) -> WorkflowResult
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut metrics = Vec::new();
        for (index, payload) in frames.into_iter().enumerate() {
            match self.pipeline.dispatch(payload.as_ref(), &mut self.logger) {
                Ok(frame) => {
                    self.recorder.record_frame(frame.valid);
                    metrics.push(frame);
                }
                Err(err) => {
                    warn!("dropping frame {}: {}", index, err);
                    self.recorder.record_error();
                }
            }
        }

        WorkflowResult {
            metrics,
            counts: self.recorder.snapshot(),
        }
    }
}
