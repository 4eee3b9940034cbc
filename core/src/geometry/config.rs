//! Frame-center configuration and geometry constants.
//!
//! The frame center is half the sensor's horizontal resolution. It can be
//! handed to [`TargetGeometry`](crate::geometry::TargetGeometry) directly, or
//! established once for the whole process with [`configure_frame_center`]
//! and read back with [`frame_center`].

use crate::math::fit::GroundDistanceFit;
use crate::prelude::ConfigError;
use log::info;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Half the horizontal pixel resolution; the x-coordinate of "straight ahead".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct FrameCenter(i32);

impl FrameCenter {
    /// Value held before any sensor resolution is known.
    pub const UNCONFIGURED: FrameCenter = FrameCenter(i32::MAX);

    pub fn from_resolution(width: u32) -> Result<Self, ConfigError> {
        if width < 2 {
            return Err(ConfigError::InvalidResolution(width));
        }
        let center = i32::try_from(width / 2).map_err(|_| ConfigError::InvalidResolution(width))?;
        Self::from_pixels(center).map_err(|_| ConfigError::InvalidResolution(width))
    }

    pub fn from_pixels(center: i32) -> Result<Self, ConfigError> {
        if center <= 0 || center == i32::MAX {
            return Err(ConfigError::InvalidCenter(center));
        }
        Ok(Self(center))
    }

    pub fn pixels(&self) -> i32 {
        self.0
    }

    pub fn is_configured(&self) -> bool {
        *self != Self::UNCONFIGURED
    }
}

impl TryFrom<i32> for FrameCenter {
    type Error = ConfigError;

    fn try_from(center: i32) -> Result<Self, Self::Error> {
        Self::from_pixels(center)
    }
}

impl From<FrameCenter> for i32 {
    fn from(center: FrameCenter) -> Self {
        center.0
    }
}

static FRAME_CENTER: OnceLock<FrameCenter> = OnceLock::new();

/// Establish the process-wide frame center. Repeating the same value is a no-op.
pub fn configure_frame_center(center: FrameCenter) -> Result<(), ConfigError> {
    let current = *FRAME_CENTER.get_or_init(|| {
        info!("frame center set to {} px", center.pixels());
        center
    });
    if current != center {
        return Err(ConfigError::AlreadyConfigured {
            current: current.pixels(),
            requested: center.pixels(),
        });
    }
    Ok(())
}

/// The process-wide frame center, or `Unconfigured` until it has been set.
pub fn frame_center() -> Result<FrameCenter, ConfigError> {
    FRAME_CENTER.get().copied().ok_or(ConfigError::Unconfigured)
}

pub fn is_configured() -> bool {
    FRAME_CENTER.get().is_some()
}

/// Camera and calibration constants used by the geometry engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryParams {
    /// Horizontal field of view in radians.
    pub horizon_fov: f64,
    /// Physical span bracketed when an odd number of targets is seen.
    pub odd_group_width: f64,
    /// Physical span bracketed when an even number of targets is seen.
    pub even_group_width: f64,
    pub ground_fit: GroundDistanceFit,
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self {
            horizon_fov: 1.0,
            odd_group_width: 25.25,
            even_group_width: 25.625,
            ground_fit: GroundDistanceFit::default(),
        }
    }
}
