//! Planar geometry primitives for landmark pairs.

use gaitkin_model::{Point2D, Vector2D};

/// Vector from `from` to `to`.
pub fn position_vector(from: Point2D, to: Point2D) -> Vector2D {
    Vector2D::new(to.x - from.x, to.y - from.y)
}

/// Orientation of the distal-to-proximal vector, in degrees within (-180, 180].
///
/// Coincident points give 0 (the `atan2(0, 0)` convention).
pub fn segment_angle(distal: Point2D, proximal: Point2D) -> f64 {
    (proximal.y - distal.y)
        .atan2(proximal.x - distal.x)
        .to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_position_vector_trunk() {
        let il_crest = Point2D::new(-1063.0, 955.7);
        let grt_troc = Point2D::new(-1113.0, 823.9);
        let v = position_vector(il_crest, grt_troc);
        assert!((v.x + 50.0).abs() < 1e-9);
        assert!((v.y + 131.8).abs() < 1e-9);
    }

    #[test]
    fn test_segment_angle_trunk() {
        let il_crest = Point2D::new(-1063.0, 955.7);
        let grt_troc = Point2D::new(-1113.0, 823.9);
        let angle = segment_angle(grt_troc, il_crest);
        assert!((angle - 69.225124).abs() < 1e-5);
    }

    #[test]
    fn test_segment_angle_axes() {
        let origin = Point2D::new(0.0, 0.0);
        assert!((segment_angle(origin, Point2D::new(1.0, 0.0))).abs() < 1e-12);
        assert!((segment_angle(origin, Point2D::new(0.0, 1.0)) - 90.0).abs() < 1e-12);
        assert!((segment_angle(origin, Point2D::new(-1.0, 0.0)) - 180.0).abs() < 1e-12);
        assert!((segment_angle(origin, Point2D::new(0.0, -1.0)) + 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_coincident_points_are_zero() {
        let p = Point2D::new(0.31, 0.92);
        assert_eq!(segment_angle(p, p), 0.0);
    }

    proptest! {
        #[test]
        fn segment_angle_is_translation_invariant(
            x1 in -2.0f64..2.0, y1 in -2.0f64..2.0,
            x2 in -2.0f64..2.0, y2 in -2.0f64..2.0,
            dx in -5.0f64..5.0, dy in -5.0f64..5.0,
        ) {
            let distal = Point2D::new(x1, y1);
            let proximal = Point2D::new(x2, y2);
            prop_assume!((x2 - x1).hypot(y2 - y1) > 1e-3);

            let moved = segment_angle(distal.translate(dx, dy), proximal.translate(dx, dy));
            let original = segment_angle(distal, proximal);
            // Compare on the circle so a ±180° wrap does not count as a difference.
            let diff = (moved - original + 540.0).rem_euclid(360.0) - 180.0;
            prop_assert!(diff.abs() < 1e-6);
        }

        #[test]
        fn segment_angle_stays_in_range(
            x1 in -2.0f64..2.0, y1 in -2.0f64..2.0,
            x2 in -2.0f64..2.0, y2 in -2.0f64..2.0,
        ) {
            let angle = segment_angle(Point2D::new(x1, y1), Point2D::new(x2, y2));
            prop_assert!(angle > -180.0 - 1e-9 && angle <= 180.0);
        }
    }
}
