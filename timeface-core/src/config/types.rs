//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default line thickness in display units
pub const DEFAULT_STROKE_WIDTH: u32 = 5;

/// Default mouth change period in minutes
pub const DEFAULT_MOUTH_CHANGE_MINUTES: u8 = 5;

/// Physical shape of the display
///
/// Round displays lose their corners, so the face sits slightly lower and
/// the mouth is drawn smaller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DisplayShape {
    #[default]
    Rect,
    Round,
}

impl DisplayShape {
    /// Eye centre height as a percentage of the bounds height
    pub const fn eye_height_percent(self) -> i32 {
        match self {
            DisplayShape::Rect => 40,
            DisplayShape::Round => 45,
        }
    }

    /// Mouth size as a fraction of the bounds width (numerator, denominator)
    pub const fn mouth_width_ratio(self) -> (i32, i32) {
        match self {
            DisplayShape::Rect => (1, 2),
            // width / 2.5
            DisplayShape::Round => (2, 5),
        }
    }
}

/// Face configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceConfig {
    /// Display shape
    pub display: DisplayShape,
    /// Stroke width for every outline
    pub stroke_width: u32,
    /// Mouth is re-rolled on draws where `minute % mouth_change_minutes == 0`
    ///
    /// 0 keeps the initial mouth forever.
    pub mouth_change_minutes: u8,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            display: DisplayShape::Rect,
            stroke_width: DEFAULT_STROKE_WIDTH,
            mouth_change_minutes: DEFAULT_MOUTH_CHANGE_MINUTES,
        }
    }
}

impl FaceConfig {
    /// Default configuration for a given display shape
    pub fn for_display(display: DisplayShape) -> Self {
        Self {
            display,
            ..Self::default()
        }
    }
}
