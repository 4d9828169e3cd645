//! Eye renderer
//!
//! An eye looks along its gaze angle: the pupil slides toward the rim, the
//! whole eye leans a little the same way, and the lid morphs between
//! squinting (looking sideways) and wide open (looking up or down).

use crate::geometry::{
    cos_lookup, draw_polyline, scale_points, sin_lookup, tween_points, Point, TRIG_MAX_RATIO,
};
use crate::shapes::{
    BROW_DOWN, BROW_POLYGON_POINTS, BROW_UP, EYE_POLYGON_POINTS, OPEN, PATH_SCALE, SQUINT,
};
use crate::traits::{Canvas, Ink};

/// Everything needed to draw one eye, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EyeGeometry {
    /// Centre of the outline and brow (leaning into the gaze)
    pub eye_center: Point,
    /// Outline radius
    pub eye_radius: i32,
    /// Absolute pupil position
    pub pupil_center: Point,
    pub pupil_radius: i32,
    /// Squint (0) to open (100) blend
    pub tween_percent: i32,
    /// Outline points, relative to `eye_center`
    pub outline: [Point; EYE_POLYGON_POINTS],
    /// Brow points, relative to `eye_center`
    pub brow: [Point; BROW_POLYGON_POINTS],
}

impl EyeGeometry {
    /// Compute an eye
    ///
    /// # Arguments
    /// - `center`: Resting centre of the eye
    /// - `size`: Eye diameter in display units
    /// - `angle`: Gaze angle (0 = up, clockwise, full turn = `TRIG_MAX_ANGLE`)
    pub fn compute(center: Point, size: u32, angle: i32) -> Self {
        let size = size as i32;
        let eye_radius = size / 2;
        let pupil_radius = size / 5;
        let travel = eye_radius - pupil_radius;

        // Display y grows downward, so "up" is negative cosine
        let dx = sin_lookup(angle);
        let dy = -cos_lookup(angle);

        // Lean the whole eye into the gaze, more vertically than sideways
        let lean = Point::new(
            dx * (size / 20) / TRIG_MAX_RATIO,
            dy * (size / 10) / TRIG_MAX_RATIO,
        );
        let eye_center = center + lean;

        let pupil_offset = Point::new(
            dx * travel / TRIG_MAX_RATIO,
            dy * travel / TRIG_MAX_RATIO,
        );

        let tween_percent = (dy * 100 / TRIG_MAX_RATIO).abs();
        let scale = size as f32 / PATH_SCALE as f32;

        let mut outline = [Point::ZERO; EYE_POLYGON_POINTS];
        tween_points(&SQUINT, &OPEN, &mut outline, tween_percent);
        scale_points(&mut outline, scale);

        let mut brow = [Point::ZERO; BROW_POLYGON_POINTS];
        tween_points(&BROW_DOWN, &BROW_UP, &mut brow, tween_percent);
        scale_points(&mut brow, scale);

        Self {
            eye_center,
            eye_radius,
            pupil_center: eye_center + pupil_offset,
            pupil_radius,
            tween_percent,
            outline,
            brow,
        }
    }

    /// Draw the eye: outline, then brow, then the filled pupil
    ///
    /// Uses the canvas's current stroke settings for the lines.
    pub fn draw<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        draw_polyline(canvas, &self.outline, self.eye_center, true)?;
        draw_polyline(canvas, &self.brow, self.eye_center, false)?;

        canvas.set_fill_color(Ink::Black);
        canvas.fill_circle(self.pupil_center, self.pupil_radius.max(0) as u32)
    }
}

/// Compute and draw one eye looking along `angle`
pub fn draw_eye<C: Canvas>(
    canvas: &mut C,
    center: Point,
    size: u32,
    angle: i32,
) -> Result<(), C::Error> {
    EyeGeometry::compute(center, size, angle).draw(canvas)
}
