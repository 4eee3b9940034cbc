use serde::Serialize;
use std::fmt;

/// Planar rotation with no translation, counter-clockwise positive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rotation2d {
    radians: f64,
}

impl Rotation2d {
    pub fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    pub fn radians(&self) -> f64 {
        self.radians
    }

    pub fn degrees(&self) -> f64 {
        self.radians.to_degrees()
    }
}

impl fmt::Display for Rotation2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rotation2d({:.4} rad, {:.2} deg)", self.radians, self.degrees())
    }
}
