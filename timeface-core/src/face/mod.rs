//! The clock face
//!
//! `TimeFace` is the per-surface render state. The host creates it once,
//! feeds it the time on every minute tick, and asks it to draw whenever the
//! surface needs repainting:
//!
//! ```text
//! TimeFace::new ──► set_time (tick) ──► is_dirty? ──► draw(canvas)
//!                        ▲                               │
//!                        └───────────────────────────────┘
//! ```
//!
//! The left eye follows the hour hand, the right eye follows the minute
//! hand, and the mouth changes every few minutes.

pub mod eye;
pub mod layout;
pub mod mouth;
pub mod time;

pub use eye::{draw_eye, EyeGeometry};
pub use layout::{Bounds, FaceLayout};
pub use mouth::{draw_mouth, MouthSelector};
pub use time::ClockTime;

use rand_core::RngCore;

use crate::config::FaceConfig;
use crate::shapes::MouthKind;
use crate::traits::{Canvas, Ink};

/// Render state for one face surface
pub struct TimeFace<R> {
    config: FaceConfig,
    bounds: Bounds,
    time: ClockTime,
    mouth: MouthSelector<R>,
    /// Whether the surface needs to be redrawn
    dirty: bool,
}

impl<R: RngCore> TimeFace<R> {
    /// Create a face showing `time`
    ///
    /// The initial mouth is picked from `rng` immediately. The face starts
    /// dirty so the first frame is drawn right away.
    pub fn new(config: FaceConfig, bounds: Bounds, time: ClockTime, rng: R) -> Self {
        Self {
            config,
            bounds,
            time,
            mouth: MouthSelector::new(rng, config.mouth_change_minutes),
            dirty: true,
        }
    }

    /// Store a new time and mark the face for redraw
    pub fn set_time(&mut self, time: ClockTime) {
        self.time = time;
        self.dirty = true;
    }

    /// Resize the drawable area
    pub fn set_bounds(&mut self, bounds: Bounds) {
        if bounds != self.bounds {
            self.bounds = bounds;
            self.dirty = true;
        }
    }

    /// Current time
    pub fn time(&self) -> ClockTime {
        self.time
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    /// Currently selected mouth
    pub fn mouth(&self) -> MouthKind {
        self.mouth.kind()
    }

    /// Check if the face needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the face as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Layout for the current bounds
    pub fn layout(&self) -> FaceLayout {
        FaceLayout::compute(self.bounds, self.config.display)
    }

    /// Gaze angles for (hour eye, minute eye)
    pub fn gaze_angles(&self) -> (i32, i32) {
        (self.time.hour_angle(), self.time.minute_angle())
    }

    /// Draw one frame
    ///
    /// Draws both eyes, re-rolls the mouth if the current minute is on the
    /// change period, then draws the mouth. The background is not cleared;
    /// that belongs to the host. Marks the face clean on success.
    pub fn draw<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), C::Error> {
        let layout = self.layout();
        let (hour_angle, minute_angle) = self.gaze_angles();

        #[cfg(feature = "defmt")]
        defmt::trace!("Drawing face at {}", self.time);

        canvas.set_stroke_color(Ink::Black);
        canvas.set_stroke_width(self.config.stroke_width);

        draw_eye(canvas, layout.left_eye, layout.eye_size, hour_angle)?;
        draw_eye(canvas, layout.right_eye, layout.eye_size, minute_angle)?;

        self.mouth.reselect_if_due(self.time.minute());
        draw_mouth(canvas, self.mouth.shape(), layout.mouth, layout.mouth_size)?;

        self.dirty = false;
        Ok(())
    }
}
