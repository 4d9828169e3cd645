//! Point-set transforms and polyline drawing
//!
//! All operations work on caller-supplied buffers and never allocate.

use super::Point;
use crate::traits::Canvas;

/// Linearly interpolate between two aligned point sets
///
/// `out[i] = src[i] + (dst[i] - src[i]) * percent / 100`, truncated toward
/// zero. Only `out.len()` points are written; `src` and `dst` must be at
/// least that long.
///
/// `percent` is normally 0-100. Values outside that range extrapolate past
/// the end shapes rather than being rejected.
pub fn tween_points(src: &[Point], dst: &[Point], out: &mut [Point], percent: i32) {
    debug_assert!(src.len() >= out.len() && dst.len() >= out.len());

    for ((o, s), d) in out.iter_mut().zip(src).zip(dst) {
        o.x = s.x + (d.x - s.x) * percent / 100;
        o.y = s.y + (d.y - s.y) * percent / 100;
    }
}

/// Scale a point set in place
///
/// Each coordinate becomes `c * factor + 0.5`, truncated toward zero. For
/// non-negative results this rounds to nearest; negative results are biased
/// by half a unit toward positive.
pub fn scale_points(points: &mut [Point], factor: f32) {
    for p in points.iter_mut() {
        p.x = (p.x as f32 * factor + 0.5) as i32;
        p.y = (p.y as f32 * factor + 0.5) as i32;
    }
}

/// Draw connected line segments through a point set
///
/// Every point is translated by `offset`. With `closed` the last point is
/// joined back to the first. An empty set draws nothing.
pub fn draw_polyline<C: Canvas>(
    canvas: &mut C,
    points: &[Point],
    offset: Point,
    closed: bool,
) -> Result<(), C::Error> {
    for pair in points.windows(2) {
        canvas.draw_line(pair[0] + offset, pair[1] + offset)?;
    }

    if closed {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            canvas.draw_line(last + offset, first + offset)?;
        }
    }

    Ok(())
}
