//! Polygon templates
//!
//! All shapes live in a normalized space centred on the origin where
//! `PATH_SCALE` units correspond to the full drawn size. Shapes that are
//! tweened together (the two eye outlines, the two brows) have equal point
//! counts.

use crate::geometry::Point;

/// Template units that map to the full drawn size
pub const PATH_SCALE: u32 = 100;

/// Points in each eye outline
pub const EYE_POLYGON_POINTS: usize = 8;

/// Points in each brow
pub const BROW_POLYGON_POINTS: usize = 4;

/// Largest point count of any template
pub const MAX_SHAPE_POINTS: usize = 8;

const fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// Narrow eye, used when looking sideways
pub const SQUINT: [Point; EYE_POLYGON_POINTS] = [
    p(-45, 10), p(-27, 20), p(35, 20), p(45, 10),
    p(45, -10), p(27, -20), p(-35, -20), p(-45, -10),
];

/// Wide eye, used when looking straight up or down
pub const OPEN: [Point; EYE_POLYGON_POINTS] = [
    p(-35, 22), p(-17, 42), p(17, 42), p(35, 22),
    p(32, -22), p(17, -42), p(-17, -42), p(-32, -22),
];

pub const BROW_DOWN: [Point; BROW_POLYGON_POINTS] =
    [p(-45, -43), p(-15, -43), p(15, -43), p(45, -43)];

pub const BROW_UP: [Point; BROW_POLYGON_POINTS] =
    [p(-35, -60), p(-15, -70), p(15, -70), p(35, -60)];

pub const MOUTH_SMILE: [Point; 8] = [
    p(-55, -10), p(-25, -5), p(25, -5), p(55, -10),
    p(35, 2), p(20, 15), p(-20, 15), p(-35, 2),
];

pub const MOUTH_SERIOUS: [Point; 2] = [p(-30, 5), p(30, 5)];

pub const MOUTH_LEFT: [Point; 2] = [p(-40, -5), p(-10, 0)];

pub const MOUTH_RIGHT: [Point; 2] = [p(40, -5), p(10, 0)];

pub const MOUTH_O: [Point; 8] = [
    p(-12, 6), p(-6, 12), p(7, 12), p(12, 6),
    p(12, -6), p(6, -12), p(-7, -12), p(-12, -6),
];

/// A polygon template
///
/// The slice carries both the points and their count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub points: &'static [Point],
}

impl Shape {
    pub const fn new(points: &'static [Point]) -> Self {
        Self { points }
    }

    /// Number of points in the template
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Mouth expressions, in `MOUTHS` order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MouthKind {
    Smile,
    Serious,
    Left,
    Right,
    O,
}

impl MouthKind {
    /// All mouths in table order
    pub const ALL: [MouthKind; 5] = [
        MouthKind::Smile,
        MouthKind::Serious,
        MouthKind::Left,
        MouthKind::Right,
        MouthKind::O,
    ];

    /// Look up a mouth by table index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position in `MOUTHS`
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn shape(self) -> Shape {
        MOUTHS[self.index()]
    }
}

/// Mouth templates, indexable by `MouthKind::index`
pub static MOUTHS: [Shape; 5] = [
    Shape::new(&MOUTH_SMILE),
    Shape::new(&MOUTH_SERIOUS),
    Shape::new(&MOUTH_LEFT),
    Shape::new(&MOUTH_RIGHT),
    Shape::new(&MOUTH_O),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouth_point_counts() {
        let counts: [usize; 5] = core::array::from_fn(|i| MOUTHS[i].len());
        assert_eq!(counts, [8, 2, 2, 2, 8]);
        assert!(MOUTHS.iter().all(|m| m.len() <= MAX_SHAPE_POINTS));
    }

    #[test]
    fn test_mouth_kind_order() {
        for (i, kind) in MouthKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(MouthKind::from_index(i), Some(*kind));
        }
        assert_eq!(MouthKind::from_index(MOUTHS.len()), None);
        assert_eq!(MouthKind::Serious.shape().points, &MOUTH_SERIOUS);
    }

    #[test]
    fn test_templates_fit_reference_scale() {
        let all = SQUINT
            .iter()
            .chain(OPEN.iter())
            .chain(BROW_DOWN.iter())
            .chain(BROW_UP.iter())
            .chain(MOUTHS.iter().flat_map(|m| m.points.iter()));

        let limit = PATH_SCALE as i32;
        for point in all {
            assert!(point.x.abs() <= limit && point.y.abs() <= limit);
        }
    }
}
