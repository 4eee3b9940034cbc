use crate::pipeline::FrameMetrics;
use crate::target::TargetRecord;

/// Failure to turn a wire payload into a [`TargetRecord`].
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("payload is not a JSON object")]
    NotAnObject,
    #[error("malformed target payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("target {index} has negative extent {width}x{height}")]
    NegativeExtent { index: usize, width: i32, height: i32 },
    #[error("target {index} corner overflows pixel range")]
    Overflow { index: usize },
}

/// A geometry call was made on a target list that cannot satisfy it.
///
/// Callers are expected to check `is_valid` first; seeing this is a contract
/// violation rather than bad sensor data.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GeometryError {
    #[error("target list has {len} entries, need at least {required}")]
    NotEnoughTargets { len: usize, required: usize },
}

impl GeometryError {
    pub(crate) fn not_enough(record: &TargetRecord, required: usize) -> Self {
        GeometryError::NotEnoughTargets {
            len: record.targets.len(),
            required,
        }
    }
}

/// Problems establishing the frame-center configuration.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("frame center has not been configured")]
    Unconfigured,
    #[error("invalid horizontal resolution {0}")]
    InvalidResolution(u32),
    #[error("invalid frame center {0}")]
    InvalidCenter(i32),
    #[error("frame center already set to {current}, refusing {requested}")]
    AlreadyConfigured { current: i32, requested: i32 },
}

pub type GeometryResult<T> = Result<T, GeometryError>;

/// Receives every decoded frame together with its derived metrics.
pub trait TargetDataListener {
    fn on_target_data(&mut self, record: &TargetRecord, metrics: &FrameMetrics);
}
