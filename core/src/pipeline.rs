use crate::geometry::TargetGeometry;
use crate::math::rotation::Rotation2d;
use crate::prelude::{DecodeError, TargetDataListener};
use crate::target::{decode, TargetRecord};
use log::debug;
use serde::Serialize;

/// Per-frame targeting output handed to downstream consumers.
///
/// The offset fields are only present for valid frames; `ground_distance`
/// carries the no-distance sentinel otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameMetrics {
    pub id: String,
    pub serial: i32,
    pub valid: bool,
    pub target_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_pixels: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_radians: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpolate: Option<f64>,
    pub ground_distance: f64,
}

impl FrameMetrics {
    pub fn error_rotation(&self) -> Option<Rotation2d> {
        self.error_radians.map(Rotation2d::from_radians)
    }
}

/// Decodes payloads and derives metrics with a fixed geometry.
#[derive(Debug, Clone)]
pub struct FramePipeline {
    geometry: TargetGeometry,
}

impl FramePipeline {
    pub fn new(geometry: TargetGeometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> &TargetGeometry {
        &self.geometry
    }

    pub fn measure(&self, record: &TargetRecord) -> FrameMetrics {
        let geometry = &self.geometry;
        let valid = geometry.is_valid(record);
        let (error_pixels, error_radians, interpolate) = if valid {
            (
                geometry.error_pixels(record).ok(),
                geometry.error_radians(record).ok(),
                geometry.interpolate_factor(record).ok(),
            )
        } else {
            (None, None, None)
        };

        FrameMetrics {
            id: record.id.clone(),
            serial: record.serial,
            valid,
            target_count: record.targets.len(),
            error_pixels,
            error_radians,
            interpolate,
            ground_distance: geometry.ground_distance(record),
        }
    }

    pub fn process(&self, payload: &[u8]) -> Result<(TargetRecord, FrameMetrics), DecodeError> {
        let record = decode(payload)?;
        let metrics = self.measure(&record);
        debug!(
            "frame {} sn {}: valid={} targets={} ground={:.2}",
            metrics.id, metrics.serial, metrics.valid, metrics.target_count, metrics.ground_distance
        );
        Ok((record, metrics))
    }

    /// Like [`process`](Self::process), then hands the frame to `listener`.
    pub fn dispatch<L: TargetDataListener + ?Sized>(
        &self,
        payload: &[u8],
        listener: &mut L,
    ) -> Result<FrameMetrics, DecodeError> {
        let (record, metrics) = self.process(payload)?;
        listener.on_target_data(&record, &metrics);
        Ok(metrics)
    }
}
