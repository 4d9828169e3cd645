//! Frame layout
//!
//! Places the two eyes and the mouth inside the drawable bounds.

use crate::config::DisplayShape;
use crate::geometry::Point;

/// Eye size as a percentage of the bounds width
const EYE_WIDTH_PERCENT: i32 = 33;

/// Mouth centre height as a percentage of the bounds height
const MOUTH_HEIGHT_PERCENT: i32 = 75;

/// Drawable area size in display units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bounds {
    width: i32,
    height: i32,
}

impl Bounds {
    /// Create bounds; negative dimensions are clamped to zero
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

/// Computed positions and sizes for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceLayout {
    /// Diameter of each eye
    pub eye_size: u32,
    /// Centre of the hour eye
    pub left_eye: Point,
    /// Centre of the minute eye
    pub right_eye: Point,
    /// Centre of the mouth
    pub mouth: Point,
    /// Drawn width of the mouth template
    pub mouth_size: u32,
}

impl FaceLayout {
    /// Lay out a face inside `bounds`
    ///
    /// Eyes take a third of the width each, with the leftover width split
    /// into three equal margins.
    pub fn compute(bounds: Bounds, display: DisplayShape) -> Self {
        let w = bounds.width();
        let h = bounds.height();

        let eye_size = w * EYE_WIDTH_PERCENT / 100;
        let eye_y = h * display.eye_height_percent() / 100;
        let left_x = (w - 2 * eye_size) / 3 + eye_size / 2;
        let right_x = w - left_x;

        let (num, den) = display.mouth_width_ratio();
        let mouth_size = w * num / den;

        Self {
            eye_size: eye_size as u32,
            left_eye: Point::new(left_x, eye_y),
            right_eye: Point::new(right_x, eye_y),
            mouth: Point::new(w / 2, h * MOUTH_HEIGHT_PERCENT / 100),
            mouth_size: mouth_size as u32,
        }
    }
}
