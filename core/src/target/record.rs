use crate::target::rect::Rect;
use serde::Serialize;
use std::fmt;

/// One decoded frame of target detections.
///
/// Targets keep the order they arrived in on the wire. The geometry helpers
/// expect that order to be left-to-right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetRecord {
    pub id: String,
    pub serial: i32,
    pub valid: bool,
    pub targets: Vec<Rect>,
}

impl TargetRecord {
    pub fn new(id: impl Into<String>, serial: i32, valid: bool, targets: Vec<Rect>) -> Self {
        Self {
            id: id.into(),
            serial,
            valid,
            targets,
        }
    }
}

impl Default for TargetRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            serial: -1,
            valid: false,
            targets: Vec::new(),
        }
    }
}

impl fmt::Display for TargetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TargetRecord[id={}, sn={}, valid={}, targets={}]",
            self.id,
            self.serial,
            self.valid,
            self.targets.len()
        )
    }
}
