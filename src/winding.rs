use glam::DVec2;

/// Twice the signed area of the closed polygon, computed with the trapezoid
/// form of the shoelace formula, `sum((u2 - u1) * (v2 + v1))`.
///
/// The result is negative for counter-clockwise loops in uv space.
pub fn trapezoid_area(polygon: &[DVec2]) -> f64 {
    let n = polygon.len();
    (0..n).fold(0.0, |area, i| {
        let p1 = polygon[i];
        let p2 = polygon[(i + 1) % n];
        area + (p2.x - p1.x) * (p2.y + p1.y)
    })
}

/// Check if the polygon is front facing in uv space.
///
/// A polygon is front facing if its trapezoid area is strictly negative,
/// i.e. its vertices wind counter-clockwise with `v` pointing up. Degenerate
/// polygons with zero area are back facing.
pub fn is_front_facing(polygon: &[DVec2]) -> bool {
    trapezoid_area(polygon) < 0.0
}

#[cfg(test)]
mod test {
    use glam::{DVec2, dvec2};

    use super::{is_front_facing, trapezoid_area};
    use crate::macros::assert_float_eq;

    #[test]
    fn t_unit_square() {
        let ccw = [
            dvec2(0.0, 0.0),
            dvec2(1.0, 0.0),
            dvec2(1.0, 1.0),
            dvec2(0.0, 1.0),
        ];
        assert_float_eq!(trapezoid_area(&ccw), -2.0);
        assert!(is_front_facing(&ccw));
        let cw: Vec<_> = ccw.iter().rev().copied().collect();
        assert_float_eq!(trapezoid_area(&cw), 2.0);
        assert!(!is_front_facing(&cw));
    }

    #[test]
    fn t_reversal_flips() {
        let polygons: [&[DVec2]; 3] = [
            &[dvec2(0.1, 0.1), dvec2(0.9, 0.2), dvec2(0.4, 0.8)],
            &[
                dvec2(2.0, 3.0),
                dvec2(2.5, 3.1),
                dvec2(2.7, 3.6),
                dvec2(2.2, 3.9),
                dvec2(1.9, 3.4),
            ],
            // Concave "L".
            &[
                dvec2(0.0, 0.0),
                dvec2(2.0, 0.0),
                dvec2(2.0, 1.0),
                dvec2(1.0, 1.0),
                dvec2(1.0, 2.0),
                dvec2(0.0, 2.0),
            ],
        ];
        for poly in polygons {
            let rev: Vec<_> = poly.iter().rev().copied().collect();
            assert_ne!(is_front_facing(poly), is_front_facing(&rev));
            assert!(is_front_facing(poly));
        }
    }

    #[test]
    fn t_degenerate_is_back_facing() {
        assert!(!is_front_facing(&[]));
        assert!(!is_front_facing(&[dvec2(0.3, 0.3)]));
        let collinear = [dvec2(0.0, 0.0), dvec2(0.5, 0.5), dvec2(1.0, 1.0)];
        assert_float_eq!(trapezoid_area(&collinear), 0.0);
        assert!(!is_front_facing(&collinear));
    }
}
