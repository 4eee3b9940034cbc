pub mod config;
pub mod engine;

pub use config::{configure_frame_center, frame_center, is_configured, FrameCenter, GeometryParams};
pub use engine::{TargetGeometry, MIN_VALID_TARGETS, NO_DISTANCE};
