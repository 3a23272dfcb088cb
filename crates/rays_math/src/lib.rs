//! Geometry kernel for the rays renderer.
//!
//! Everything is double precision: positions, directions and accumulated
//! colors all share the same `Vec3`.

pub use glam::DVec3;

mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;

/// Three-component vector used for points, directions and colors.
pub type Vec3 = DVec3;

/// Scale a vector to unit length.
///
/// # Panics
///
/// Panics if `v` has zero or non-finite length. A degenerate direction is a
/// programming error and must not leak into the image as NaN.
#[inline]
pub fn unit(v: Vec3) -> Vec3 {
    let len_sq = v.length_squared();
    assert!(
        len_sq > 0.0 && len_sq.is_finite(),
        "cannot normalize degenerate vector {v:?}"
    );
    v / len_sq.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_unit_has_length_one() {
        let vectors = [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-3.1, -16.0, 1.9),
            Vec3::new(1e-3, 2e-3, -5e-4),
            Vec3::new(250.0, -1000.0, 77.0),
        ];

        for v in vectors {
            let n = unit(v);
            assert!(
                (n.dot(n) - 1.0).abs() < 1e-5,
                "unit({v:?}) has squared length {}",
                n.dot(n)
            );
        }
    }

    #[test]
    fn test_unit_keeps_direction() {
        let n = unit(Vec3::new(0.0, 0.0, 7.5));
        assert_eq!(n, Vec3::Z);
    }

    #[test]
    #[should_panic(expected = "degenerate")]
    fn test_unit_zero_vector_panics() {
        unit(Vec3::ZERO);
    }
}
