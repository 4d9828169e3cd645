//! Mouth selection and rendering

use heapless::Vec;
use rand_core::RngCore;

use crate::geometry::{draw_polyline, scale_points, Point};
use crate::shapes::{MouthKind, Shape, MAX_SHAPE_POINTS, MOUTHS, PATH_SCALE};
use crate::traits::Canvas;

/// Holds the current mouth and re-rolls it from an injected random source
pub struct MouthSelector<R> {
    rng: R,
    kind: MouthKind,
    /// Re-roll period in minutes (0 = never)
    change_every: u8,
}

impl<R: RngCore> MouthSelector<R> {
    /// Create a selector and pick the initial mouth
    pub fn new(mut rng: R, change_every: u8) -> Self {
        let kind = Self::roll(&mut rng);
        Self {
            rng,
            kind,
            change_every,
        }
    }

    fn roll(rng: &mut R) -> MouthKind {
        let index = rng.next_u32() as usize % MOUTHS.len();
        // index is always in range
        MouthKind::from_index(index).unwrap_or(MouthKind::Smile)
    }

    /// Currently selected mouth
    pub fn kind(&self) -> MouthKind {
        self.kind
    }

    /// Shape of the currently selected mouth
    pub fn shape(&self) -> Shape {
        self.kind.shape()
    }

    /// Pick a new random mouth (may repeat the current one)
    pub fn reroll(&mut self) -> MouthKind {
        self.kind = Self::roll(&mut self.rng);
        self.kind
    }

    /// Re-roll if `minute` falls on the change period
    ///
    /// This is level-triggered: every call during a qualifying minute
    /// re-rolls, so several redraws within that minute can each change the
    /// mouth. Returns true if a re-roll happened.
    pub fn reselect_if_due(&mut self, minute: u8) -> bool {
        if self.change_every == 0 || minute % self.change_every != 0 {
            return false;
        }

        let _kind = self.reroll();
        #[cfg(feature = "defmt")]
        defmt::debug!("Mouth re-rolled at minute {}: {}", minute, _kind);
        true
    }
}

/// Draw a mouth template scaled to `size` and centred on `center`
pub fn draw_mouth<C: Canvas>(
    canvas: &mut C,
    shape: Shape,
    center: Point,
    size: u32,
) -> Result<(), C::Error> {
    let mut points: Vec<Point, MAX_SHAPE_POINTS> = Vec::new();
    let count = shape.len().min(MAX_SHAPE_POINTS);
    // Cannot fail: count is capped at capacity
    let _ = points.extend_from_slice(&shape.points[..count]);

    scale_points(&mut points, size as f32 / PATH_SCALE as f32);
    draw_polyline(canvas, &points, center, true)
}
