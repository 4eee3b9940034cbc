//! Compact JSON wire format for target lists.
//!
//! Frames arrive as `{"id", "sn", "v", "ep", "r", "d"}` objects where `d` is a
//! list of `[x, y, width, height, area]` arrays. `ep` and `r` are legacy
//! fields: they are accepted on decode and dropped, and never written back.

use crate::prelude::DecodeError;
use crate::target::rect::{Point, Rect};
use crate::target::record::TargetRecord;
use log::trace;
use serde::{Deserialize, Serialize};

/// Number of integers describing one target on the wire.
pub const DATA_LENGTH: usize = 5;

type WireRect = [i32; DATA_LENGTH];

fn default_serial() -> i32 {
    -1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WireFrameIn {
    #[serde(default)]
    id: String,
    #[serde(default = "default_serial")]
    sn: i32,
    #[serde(default)]
    v: bool,
    #[serde(default, rename = "ep")]
    _error_pixels: f64,
    #[serde(default, rename = "r")]
    _range: f64,
    #[serde(default)]
    d: Vec<WireRect>,
}

#[derive(Debug, Serialize)]
struct WireFrameOut<'a> {
    id: &'a str,
    sn: i32,
    v: bool,
    d: Vec<WireRect>,
}

fn rect_from_wire(index: usize, data: WireRect) -> Result<Rect, DecodeError> {
    // bb.x, bb.y, bb.width, bb.height, area
    let [x, y, width, height, area] = data;
    if width < 0 || height < 0 {
        return Err(DecodeError::NegativeExtent {
            index,
            width,
            height,
        });
    }
    let right = x
        .checked_add(width)
        .ok_or(DecodeError::Overflow { index })?;
    let bottom = y
        .checked_add(height)
        .ok_or(DecodeError::Overflow { index })?;
    Ok(Rect::new(Point::new(x, y), Point::new(right, bottom), area))
}

fn rect_to_wire(rect: &Rect) -> WireRect {
    [
        rect.top_left.x,
        rect.top_left.y,
        rect.width(),
        rect.height(),
        rect.contour_area,
    ]
}

/// Decode one frame payload. Nothing is returned unless the whole payload is well formed.
pub fn decode(bytes: &[u8]) -> Result<TargetRecord, DecodeError> {
    if bytes.iter().find(|b| !b.is_ascii_whitespace()) != Some(&b'{') {
        return Err(DecodeError::NotAnObject);
    }
    let frame: WireFrameIn = serde_json::from_slice(bytes)?;
    let targets = frame
        .d
        .into_iter()
        .enumerate()
        .map(|(index, data)| rect_from_wire(index, data))
        .collect::<Result<Vec<_>, _>>()?;
    trace!(
        "decoded frame {} sn {} with {} targets",
        frame.id,
        frame.sn,
        targets.len()
    );
    Ok(TargetRecord::new(frame.id, frame.sn, frame.v, targets))
}

/// Encode a record as `{"id","sn","v","d"}`; widths and heights are re-derived from the corners.
pub fn encode(record: &TargetRecord) -> serde_json::Result<Vec<u8>> {
    encode_to_string(record).map(String::into_bytes)
}

pub fn encode_to_string(record: &TargetRecord) -> serde_json::Result<String> {
    let frame = WireFrameOut {
        id: &record.id,
        sn: record.serial,
        v: record.valid,
        d: record.targets.iter().map(rect_to_wire).collect(),
    };
    serde_json::to_string(&frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"{"id":"a","sn":1,"v":true,"d":[[0,0,10,10,100],[20,0,10,10,100],[40,0,10,10,100]]}"#;

    #[test]
    fn decode_builds_corners_from_extents() {
        let record = decode(SCENARIO.as_bytes()).unwrap();
        assert_eq!(record.id, "a");
        assert_eq!(record.serial, 1);
        assert!(record.valid);
        let corners: Vec<_> = record
            .targets
            .iter()
            .map(|r| (r.top_left, r.bottom_right))
            .collect();
        assert_eq!(
            corners,
            vec![
                (Point::new(0, 0), Point::new(10, 10)),
                (Point::new(20, 0), Point::new(30, 10)),
                (Point::new(40, 0), Point::new(50, 10)),
            ]
        );
        assert!(record.targets.iter().all(|r| r.contour_area == 100));
    }

    #[test]
    fn decode_accepts_keys_in_any_order_and_drops_legacy_fields() {
        let payload = r#"{"d":[[5,6,7,8,9]],"r":12.5,"ep":-3.25,"v":false,"sn":42,"id":"W0"}"#;
        let record = decode(payload.as_bytes()).unwrap();
        assert_eq!(record.id, "W0");
        assert_eq!(record.serial, 42);
        assert!(!record.valid);
        assert_eq!(
            record.targets,
            vec![Rect::new(Point::new(5, 6), Point::new(12, 14), 9)]
        );
    }

    #[test]
    fn decode_fills_defaults_for_missing_keys() {
        let record = decode(b"{}").unwrap();
        assert_eq!(record, TargetRecord::default());
    }

    #[test]
    fn decode_preserves_source_order() {
        let payload = r#"{"d":[[40,0,1,1,1],[0,0,1,1,1],[20,0,1,1,1]]}"#;
        let record = decode(payload.as_bytes()).unwrap();
        let xs: Vec<_> = record.targets.iter().map(|r| r.top_left.x).collect();
        assert_eq!(xs, vec![40, 0, 20]);
    }

    #[test]
    fn decode_rejects_unknown_key() {
        let err = decode(br#"{"id":"a","range":3.0}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn decode_is_case_sensitive() {
        assert!(decode(br#"{"ID":"a"}"#).is_err());
    }

    #[test]
    fn decode_rejects_wrong_arity() {
        assert!(decode(br#"{"d":[[0,0,10,10]]}"#).is_err());
        assert!(decode(br#"{"d":[[0,0,10,10,100,7]]}"#).is_err());
    }

    #[test]
    fn decode_rejects_wrong_types() {
        assert!(decode(br#"{"sn":"one"}"#).is_err());
        assert!(decode(br#"{"v":1}"#).is_err());
        assert!(decode(br#"{"d":[[0,0,1.5,10,100]]}"#).is_err());
        assert!(decode(br#"{"id":null}"#).is_err());
        assert!(matches!(
            decode(br#"["a",1,true,0.0,0.0,[]]"#),
            Err(DecodeError::NotAnObject)
        ));
    }

    #[test]
    fn decode_rejects_duplicate_key() {
        assert!(decode(br#"{"id":"a","id":"b"}"#).is_err());
    }

    #[test]
    fn decode_rejects_truncated_payload() {
        assert!(decode(br#"{"id":"a","d":[[0,0,10,10,100],[20,0"#).is_err());
    }

    #[test]
    fn decode_rejects_negative_extent() {
        let err = decode(br#"{"d":[[0,0,1,1,1],[0,0,-4,2,1]]}"#).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::NegativeExtent {
                index: 1,
                width: -4,
                height: 2
            }
        ));
    }

    #[test]
    fn decode_rejects_overflowing_corner() {
        let payload = format!(r#"{{"d":[[{},0,1,1,1]]}}"#, i32::MAX);
        let err = decode(payload.as_bytes()).unwrap_err();
        assert!(matches!(err, DecodeError::Overflow { index: 0 }));
    }

    #[test]
    fn encode_emits_fixed_key_order_without_legacy_fields() {
        let record = decode(
            br#"{"ep":1.0,"r":2.0,"v":true,"sn":7,"id":"A0","d":[[1,2,3,4,5]]}"#,
        )
        .unwrap();
        assert_eq!(
            encode_to_string(&record).unwrap(),
            r#"{"id":"A0","sn":7,"v":true,"d":[[1,2,3,4,5]]}"#
        );
    }

    #[test]
    fn encoded_records_decode_unchanged() {
        let records = vec![
            TargetRecord::default(),
            TargetRecord::new("", -1, true, Vec::new()),
            TargetRecord::new(
                "kamera-ä-視",
                i32::MAX,
                false,
                vec![Rect::new(Point::new(7, 9), Point::new(7, 9), 0)],
            ),
            TargetRecord::new(
                "A0",
                -1,
                true,
                vec![
                    Rect::new(Point::new(-40, -3), Point::new(-30, 5), 80),
                    Rect::new(Point::new(-5, 0), Point::new(5, 0), 0),
                    Rect::new(Point::new(12, -8), Point::new(12, 20), 0),
                ],
            ),
        ];
        for record in records {
            let payload = encode(&record).unwrap();
            assert_eq!(decode(&payload).unwrap(), record, "{}", record);
        }
    }

    #[test]
    fn decode_after_encode_yields_same_record() {
        let record = decode(SCENARIO.as_bytes()).unwrap();
        let again = decode(&encode(&record).unwrap()).unwrap();
        assert_eq!(again, record);
        assert_eq!(encode_to_string(&again).unwrap(), SCENARIO);
    }
}
