//! Hub target decoding and targeting geometry.
//!
//! Payloads from the vision sensor are decoded into [`TargetRecord`]s by the
//! [`target`] codec, and [`TargetGeometry`] derives the pixel offset, angular
//! offset and distance estimate for the detected target group.

pub mod geometry;
pub mod math;
pub mod pipeline;
pub mod prelude;
pub mod target;

pub use geometry::{FrameCenter, GeometryParams, TargetGeometry};
pub use pipeline::{FrameMetrics, FramePipeline};
pub use prelude::{ConfigError, DecodeError, GeometryError, TargetDataListener};
pub use target::{Point, Rect, TargetRecord};
