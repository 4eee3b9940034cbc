use serde::{Deserialize, Serialize};
use std::fmt;

/// Pixel coordinate reported by the vision sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned bounding rectangle of a single detected target.
///
/// `bottom_right` is never left of or above `top_left`; the codec only builds
/// rectangles from non-negative extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub top_left: Point,
    pub bottom_right: Point,
    pub contour_area: i32,
}

impl Rect {
    pub fn new(top_left: Point, bottom_right: Point, contour_area: i32) -> Self {
        Self {
            top_left,
            bottom_right,
            contour_area,
        }
    }

    pub fn width(&self) -> i32 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> i32 {
        self.bottom_right.y - self.top_left.y
    }

    /// Horizontal midpoint in pixels.
    pub fn center_x(&self) -> f64 {
        (self.top_left.x as f64 + self.bottom_right.x as f64) / 2.0
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect[{} -> {}, {}x{}, area {}]",
            self.top_left,
            self.bottom_right,
            self.width(),
            self.height(),
            self.contour_area
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_reports_extents_from_corners() {
        let rect = Rect::new(Point::new(20, 5), Point::new(30, 17), 96);
        assert_eq!(rect.width(), 10);
        assert_eq!(rect.height(), 12);
        assert_eq!(rect.center_x(), 25.0);
    }

    #[test]
    fn rect_display_is_compact() {
        let rect = Rect::new(Point::new(0, 0), Point::new(10, 10), 100);
        assert_eq!(rect.to_string(), "Rect[(0, 0) -> (10, 10), 10x10, area 100]");
    }
}
