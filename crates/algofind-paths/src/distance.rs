use std::f64::consts::SQRT_2;

use algofind_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Octile distance: the exact cost of an unobstructed 8-way walk where
/// orthogonal steps cost 1 and diagonal steps cost `sqrt(2)`.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let (dx, dy) = a.abs_delta(b);
    let (dx, dy) = (f64::from(dx), f64::from(dy));
    dx + dy + (SQRT_2 - 2.0) * dx.min(dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(1, 4);
        let b = Point::new(3, 0);
        assert_eq!(manhattan(a, b), 6);
        assert_eq!(manhattan(b, a), 6);
    }

    #[test]
    fn octile_mixes_diagonal_and_straight() {
        assert_eq!(octile(Point::ZERO, Point::new(3, 0)), 3.0);
        assert!((octile(Point::ZERO, Point::new(2, 2)) - 2.0 * SQRT_2).abs() < 1e-12);
        assert!((octile(Point::ZERO, Point::new(4, 1)) - (3.0 + SQRT_2)).abs() < 1e-12);
    }

    #[test]
    fn octile_never_exceeds_manhattan() {
        for x in 0..6 {
            for y in 0..6 {
                let p = Point::new(x, y);
                assert!(octile(Point::ZERO, p) <= f64::from(manhattan(Point::ZERO, p)));
            }
        }
    }
}
