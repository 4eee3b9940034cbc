use crate::geometry::config::{frame_center, FrameCenter, GeometryParams};
use crate::math::rotation::Rotation2d;
use crate::prelude::{ConfigError, GeometryError, GeometryResult};
use crate::target::{Rect, TargetRecord};

/// Returned by [`TargetGeometry::ground_distance`] when the frame is not valid.
///
/// Deliberately implausible; check [`TargetGeometry::is_valid`] instead of
/// trusting the number.
pub const NO_DISTANCE: f64 = 2767.0;

/// Fewest targets for which the data counts as valid.
pub const MIN_VALID_TARGETS: usize = 3;

/// Targeting metrics for a hub target group, relative to the camera frame.
///
/// Every method is a pure function of the record plus the frame center and
/// calibration constants fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetGeometry {
    center: FrameCenter,
    params: GeometryParams,
}

impl TargetGeometry {
    pub fn new(center: FrameCenter, params: GeometryParams) -> Result<Self, ConfigError> {
        if !center.is_configured() {
            return Err(ConfigError::Unconfigured);
        }
        if center.pixels() <= 0 {
            return Err(ConfigError::InvalidCenter(center.pixels()));
        }
        Ok(Self { center, params })
    }

    pub fn with_defaults(center: FrameCenter) -> Result<Self, ConfigError> {
        Self::new(center, GeometryParams::default())
    }

    /// Build from the process-wide frame center; fails until it is configured.
    pub fn from_global(params: GeometryParams) -> Result<Self, ConfigError> {
        Self::new(frame_center()?, params)
    }

    pub fn frame_center(&self) -> FrameCenter {
        self.center
    }

    pub fn params(&self) -> &GeometryParams {
        &self.params
    }

    fn center_px(&self) -> f64 {
        self.center.pixels() as f64
    }

    /// The sensor must flag the frame valid and report more than two targets.
    pub fn is_valid(&self, record: &TargetRecord) -> bool {
        record.valid && record.targets.len() >= MIN_VALID_TARGETS
    }

    /// Offset of the target group's center from the frame center, in pixels.
    ///
    /// Positive when the group sits right of center.
    pub fn error_pixels(&self, record: &TargetRecord) -> GeometryResult<f64> {
        let (first, last) = match (record.targets.first(), record.targets.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(GeometryError::not_enough(record, 1)),
        };
        let left = first.top_left.x as f64;
        let right = last.bottom_right.x as f64;
        Ok((right + left) / 2.0 - self.center_px())
    }

    /// Angular offset in radians, counter-clockwise positive.
    pub fn error_radians(&self, record: &TargetRecord) -> GeometryResult<f64> {
        let pixels = self.error_pixels(record)?;
        Ok(-self.params.horizon_fov * pixels / (2.0 * self.center_px()))
    }

    pub fn error_rotation(&self, record: &TargetRecord) -> GeometryResult<Rotation2d> {
        self.error_radians(record).map(Rotation2d::from_radians)
    }

    /// 1.0 when centered, falling toward 0 at the frame edge. Not clamped.
    pub fn interpolate_factor(&self, record: &TargetRecord) -> GeometryResult<f64> {
        let pixels = self.error_pixels(record)?;
        Ok((self.center_px() - pixels.abs()) / self.center_px())
    }

    /// Pixel span between the two rectangles bracketing the middle of the group.
    ///
    /// Odd counts measure outer edge to outer edge of the neighbours of the
    /// middle target. Even counts measure inner edge to inner edge of the
    /// rectangles two left and one right of the midpoint.
    pub fn pixel_width_of_target_group(&self, record: &TargetRecord) -> GeometryResult<f64> {
        let (left, right) = bracketing_pair(record)?;
        let width = if record.targets.len() % 2 == 1 {
            right.bottom_right.x - left.top_left.x
        } else {
            right.top_left.x - left.bottom_right.x
        };
        Ok(width as f64)
    }

    /// Trigonometric distance to the target group, in the units of the known group widths.
    pub fn estimated_distance(&self, record: &TargetRecord) -> GeometryResult<f64> {
        let pixel_width = self.pixel_width_of_target_group(record)?;
        let known_width = if record.targets.len() % 2 == 1 {
            self.params.odd_group_width
        } else {
            self.params.even_group_width
        };
        let subtended_deg =
            self.params.horizon_fov.to_degrees() * pixel_width / (2.0 * self.center_px());
        Ok(known_width / 2.0 / (subtended_deg / 2.0).to_radians().tan())
    }

    /// Calibrated ground distance, or [`NO_DISTANCE`] when the frame is not valid.
    pub fn ground_distance(&self, record: &TargetRecord) -> f64 {
        if !self.is_valid(record) {
            return NO_DISTANCE;
        }
        self.estimated_distance(record)
            .map(|estimate| self.params.ground_fit.evaluate(estimate))
            .unwrap_or(NO_DISTANCE)
    }
}

fn bracketing_pair(record: &TargetRecord) -> GeometryResult<(&Rect, &Rect)> {
    let targets = &record.targets;
    let n = targets.len();
    let (left, right) = if n % 2 == 1 {
        let middle = (n - 1) / 2;
        (middle.checked_sub(1), middle + 1)
    } else {
        (n.checked_sub(4).map(|_| n / 2 - 2), n / 2 + 1)
    };
    match (left.and_then(|i| targets.get(i)), targets.get(right)) {
        (Some(left), Some(right)) => Ok((left, right)),
        _ => Err(GeometryError::not_enough(record, if n % 2 == 1 { 3 } else { 4 })),
    }
}
