use crate::generator::profile::GeneratorConfig;
use anyhow::Context;
use hubtarget::{FrameCenter, GeometryParams};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_camera() -> String {
    "A0".to_string()
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VisionConfig {
    #[serde(default = "default_camera")]
    pub camera: String,
    /// Horizontal sensor resolution in pixels.
    #[serde(default = "VisionConfig::default_resolution")]
    pub resolution_width: u32,
    /// Frames between debug dumps of the detected rectangles.
    #[serde(default = "VisionConfig::default_log_interval")]
    pub log_interval: usize,
    #[serde(default)]
    pub geometry: GeometryParams,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            camera: default_camera(),
            resolution_width: Self::default_resolution(),
            log_interval: Self::default_log_interval(),
            geometry: GeometryParams::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl VisionConfig {
    fn default_resolution() -> u32 {
        640
    }

    fn default_log_interval() -> usize {
        50
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading vision config {}", path_ref.display()))?;
        let config: VisionConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing vision config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn frame_center(&self) -> anyhow::Result<FrameCenter> {
        FrameCenter::from_resolution(self.resolution_width)
            .with_context(|| format!("configuring camera {}", self.camera))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_centers_on_half_resolution() {
        let cfg = VisionConfig::default();
        assert_eq!(cfg.frame_center().unwrap().pixels(), 320);
        assert_eq!(cfg.geometry, GeometryParams::default());
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"camera: W0\nresolution_width: 1280\ngeometry:\n  horizon_fov: 1.2\ngenerator:\n  frames: 7\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = VisionConfig::load(&path).unwrap();
        assert_eq!(cfg.camera, "W0");
        assert_eq!(cfg.frame_center().unwrap().pixels(), 640);
        assert_eq!(cfg.geometry.horizon_fov, 1.2);
        assert_eq!(cfg.geometry.odd_group_width, 25.25);
        assert_eq!(cfg.generator.frames, 7);
        assert_eq!(cfg.log_interval, 50);
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let cfg = VisionConfig {
            resolution_width: 0,
            ..Default::default()
        };
        assert!(cfg.frame_center().is_err());
    }
}
