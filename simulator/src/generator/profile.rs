use anyhow::Context;
use hubtarget::target::{encode, Point, Rect, TargetRecord};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for synthesising hub target frames.
///
/// Each frame is a horizontal strip of evenly spaced tape targets whose
/// center wanders around the frame center.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub frames: usize,
    pub targets: usize,
    pub target_width: i32,
    pub target_height: i32,
    pub spacing: i32,
    /// Largest horizontal offset of the group center, in pixels.
    pub max_offset: i32,
    /// Vertical jitter applied to each target, in pixels.
    pub jitter: i32,
    /// Chance that a frame is reported invalid by the sensor.
    pub dropout: f64,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            frames: 100,
            targets: 4,
            target_width: 14,
            target_height: 8,
            spacing: 24,
            max_offset: 80,
            jitter: 3,
            dropout: 0.1,
            seed: 0,
        }
    }
}

fn build_record(
    config: &GeneratorConfig,
    camera: &str,
    serial: i32,
    frame_center: i32,
    rng: &mut StdRng,
) -> anyhow::Result<TargetRecord> {
    if config.target_width < 0 || config.target_height < 0 {
        anyhow::bail!(
            "target size {}x{} must not be negative",
            config.target_width,
            config.target_height
        );
    }
    let overflow = || {
        format!(
            "synthetic strip of {} targets overflows pixel range",
            config.targets
        )
    };

    let count = i32::try_from(config.targets).context("target count out of range")?;
    let pitch = config
        .target_width
        .checked_add(config.spacing)
        .with_context(overflow)?;
    let span = count
        .checked_mul(pitch)
        .and_then(|v| v.checked_sub(config.spacing))
        .with_context(overflow)?;
    let offset = if config.max_offset > 0 {
        rng.gen_range(-config.max_offset..=config.max_offset)
    } else {
        0
    };
    let left = frame_center
        .checked_add(offset)
        .and_then(|v| v.checked_sub(span / 2))
        .with_context(overflow)?;
    let baseline = config.jitter.max(0).checked_mul(2).with_context(overflow)?;
    let area = config
        .target_width
        .checked_mul(config.target_height)
        .with_context(overflow)?;

    let mut targets = Vec::new();
    for i in 0..count {
        let x = i
            .checked_mul(pitch)
            .and_then(|v| v.checked_add(left))
            .with_context(overflow)?;
        let y = if config.jitter > 0 {
            baseline
                .checked_add(rng.gen_range(-config.jitter..=config.jitter))
                .with_context(overflow)?
        } else {
            baseline
        };
        let right = x.checked_add(config.target_width).with_context(overflow)?;
        let bottom = y.checked_add(config.target_height).with_context(overflow)?;
        targets.push(Rect::new(Point::new(x, y), Point::new(right, bottom), area));
    }
    let valid = !rng.gen_bool(config.dropout.clamp(0.0, 1.0));

    Ok(TargetRecord::new(camera, serial, valid, targets))
}

/// Build encoded frame payloads for a sensor whose frame center is `frame_center`.
pub fn build_frames(
    config: &GeneratorConfig,
    camera: &str,
    frame_center: i32,
) -> anyhow::Result<Vec<Vec<u8>>> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut frames = Vec::with_capacity(config.frames);
    for index in 0..config.frames {
        let serial = i32::try_from(index).context("frame serial out of range")?;
        let record = build_record(config, camera, serial, frame_center, &mut rng)?;
        let payload =
            encode(&record).with_context(|| format!("encoding synthetic frame {}", index))?;
        frames.push(payload);
    }
    Ok(frames)
}
