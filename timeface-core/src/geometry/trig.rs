//! Fixed-point trigonometry
//!
//! Angles use a full-circle scale of `TRIG_MAX_ANGLE` units, 0 at 12 o'clock
//! and increasing clockwise. Results are scaled so that `TRIG_MAX_RATIO`
//! represents 1.0. Integer-only: a quarter-wave table with linear
//! interpolation between entries.

/// One full turn
pub const TRIG_MAX_ANGLE: i32 = 0x10000;

/// Fixed-point value of 1.0
pub const TRIG_MAX_RATIO: i32 = 0xFFFF;

/// A quarter turn (90 degrees)
pub const QUARTER_TURN: i32 = TRIG_MAX_ANGLE / 4;

/// Number of table segments across a quarter turn
const SEGMENTS: i32 = 64;

/// Angle units per table segment
const SEGMENT_SPAN: i32 = QUARTER_TURN / SEGMENTS;

/// Quarter-wave sine table
///
/// Entry i is `round(sin(i * 90° / 64) * TRIG_MAX_RATIO)`.
const SINE_TABLE: [i32; SEGMENTS as usize + 1] = [
    0, 1608, 3216, 4821, 6424, 8022, 9616, 11204, //
    12785, 14359, 15924, 17479, 19024, 20557, 22078, 23586, //
    25079, 26557, 28020, 29465, 30893, 32302, 33692, 35061, //
    36409, 37736, 39039, 40319, 41575, 42806, 44011, 45189, //
    46340, 47464, 48558, 49624, 50659, 51664, 52638, 53580, //
    54490, 55367, 56211, 57021, 57797, 58537, 59243, 59913, //
    60546, 61144, 61704, 62227, 62713, 63161, 63571, 63943, //
    64276, 64570, 64826, 65042, 65219, 65357, 65456, 65515, //
    65535,
];

/// Sine of an angle within the first quadrant (0..=QUARTER_TURN)
fn quarter_sine(angle: i32) -> i32 {
    let index = angle / SEGMENT_SPAN;
    if index >= SEGMENTS {
        return SINE_TABLE[SEGMENTS as usize];
    }

    // Linear interpolation between the two surrounding entries
    let low = SINE_TABLE[index as usize];
    let high = SINE_TABLE[index as usize + 1];
    let offset = angle - index * SEGMENT_SPAN;

    low + (high - low) * offset / SEGMENT_SPAN
}

/// Fixed-point sine
///
/// Any angle is accepted; it wraps modulo `TRIG_MAX_ANGLE`.
pub fn sin_lookup(angle: i32) -> i32 {
    let angle = angle.rem_euclid(TRIG_MAX_ANGLE);
    let quadrant = angle / QUARTER_TURN;
    let offset = angle % QUARTER_TURN;

    match quadrant {
        0 => quarter_sine(offset),
        1 => quarter_sine(QUARTER_TURN - offset),
        2 => -quarter_sine(offset),
        _ => -quarter_sine(QUARTER_TURN - offset),
    }
}

/// Fixed-point cosine
pub fn cos_lookup(angle: i32) -> i32 {
    sin_lookup(angle.wrapping_add(QUARTER_TURN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cardinal_points() {
        assert_eq!(sin_lookup(0), 0);
        assert_eq!(sin_lookup(QUARTER_TURN), TRIG_MAX_RATIO);
        assert_eq!(sin_lookup(2 * QUARTER_TURN), 0);
        assert_eq!(sin_lookup(3 * QUARTER_TURN), -TRIG_MAX_RATIO);

        assert_eq!(cos_lookup(0), TRIG_MAX_RATIO);
        assert_eq!(cos_lookup(QUARTER_TURN), 0);
        assert_eq!(cos_lookup(2 * QUARTER_TURN), -TRIG_MAX_RATIO);
        assert_eq!(cos_lookup(3 * QUARTER_TURN), 0);
    }

    #[test]
    fn test_thirty_degrees() {
        // sin(30°) = 0.5
        let s = sin_lookup(TRIG_MAX_ANGLE / 12);
        assert!((s - TRIG_MAX_RATIO / 2).abs() <= 8);
    }

    #[test]
    fn test_wraps_negative_and_large_angles() {
        assert_eq!(sin_lookup(-QUARTER_TURN), -TRIG_MAX_RATIO);
        assert_eq!(sin_lookup(TRIG_MAX_ANGLE + 1234), sin_lookup(1234));
        assert_eq!(cos_lookup(i32::MAX), cos_lookup(i32::MAX.rem_euclid(TRIG_MAX_ANGLE)));
    }

    #[test]
    fn test_monotonic_first_quadrant() {
        let mut previous = sin_lookup(0);
        for angle in 1..=QUARTER_TURN {
            let s = sin_lookup(angle);
            assert!(s >= previous, "sine dropped at {}", angle);
            previous = s;
        }
    }

    proptest! {
        #[test]
        fn prop_magnitude_bounded(angle in any::<i32>()) {
            prop_assert!(sin_lookup(angle).abs() <= TRIG_MAX_RATIO);
            prop_assert!(cos_lookup(angle).abs() <= TRIG_MAX_RATIO);
        }

        #[test]
        fn prop_unit_circle(angle in 0..TRIG_MAX_ANGLE) {
            let s = sin_lookup(angle) as i64;
            let c = cos_lookup(angle) as i64;
            let one = (TRIG_MAX_RATIO as i64) * (TRIG_MAX_RATIO as i64);
            let norm = s * s + c * c;
            // Interpolation error stays well under 0.1%
            prop_assert!((norm - one).abs() < one / 1000);
        }

        #[test]
        fn prop_odd_symmetry(angle in 0..TRIG_MAX_ANGLE) {
            prop_assert_eq!(sin_lookup(-angle), -sin_lookup(angle));
        }
    }
}
