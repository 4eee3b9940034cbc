pub mod log;
pub mod metrics;

pub use self::log::FrameLogger;
pub use self::metrics::{MetricsRecorder, MetricsSnapshot};
