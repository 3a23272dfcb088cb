//! Camera and thin-lens model.
//!
//! The camera is fixed: it sits at [`EYE`] looking along [`LOOK_DIRECTION`]
//! with +Z as world up. Only the output resolution changes the projection.

use crate::{gen_f64, RenderError, RenderResult};
use rays_math::{unit, Ray, Vec3};
use rand::RngCore;

/// Focal point of the camera.
pub const EYE: Vec3 = Vec3::new(-5.0, 16.0, 8.0);

/// Viewing direction (not normalized).
pub const LOOK_DIRECTION: Vec3 = Vec3::new(-3.1, -16.0, 1.9);

/// Length of the `right`/`up` basis vectors in world units per pixel step.
const BASIS_SCALE: f64 = 0.002;

/// Width of the lens jitter, in basis steps.
const APERTURE: f64 = 99.0;

/// Distance from the lens to the plane of perfect focus.
const FOCUS_DISTANCE: f64 = 16.0;

/// Resolution the basis vectors were tuned for.
const REFERENCE_SIZE: f64 = 512.0;

/// Side length of the square image closest to `megapixels` million pixels.
pub fn image_size(megapixels: f64) -> u32 {
    (megapixels * 1_000_000.0).sqrt() as u32
}

/// Camera for generating primary rays.
#[derive(Debug, Clone)]
pub struct Camera {
    size: u32,
    right: Vec3,
    up: Vec3,
    focal_offset: Vec3,
    pixel_scale: f64,
}

impl Camera {
    /// Camera for a `size` x `size` image.
    pub fn new(size: u32) -> RenderResult<Self> {
        if size == 0 {
            return Err(RenderError::InvalidSize(size));
        }

        let forward = unit(LOOK_DIRECTION);
        let right = unit(Vec3::Z.cross(forward)) * BASIS_SCALE;
        let up = unit(forward.cross(right)) * BASIS_SCALE;
        let focal_offset = (right + up) * -(REFERENCE_SIZE / 2.0) + forward;

        Ok(Self {
            size,
            right,
            up,
            focal_offset,
            pixel_scale: REFERENCE_SIZE / size as f64,
        })
    }

    /// Image width and height in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Generate a jittered ray for pixel (x, y), y = 0 being the bottom row.
    ///
    /// The origin is moved across the lens for depth of field and the target
    /// is moved inside the pixel for anti-aliasing.
    pub fn get_ray(&self, x: u32, y: u32, rng: &mut dyn RngCore) -> Ray {
        let lens = self.right * ((gen_f64(rng) - 0.5) * APERTURE)
            + self.up * ((gen_f64(rng) - 0.5) * APERTURE);

        let target = self.right * (gen_f64(rng) + x as f64 * self.pixel_scale)
            + self.up * (gen_f64(rng) + y as f64 * self.pixel_scale)
            + self.focal_offset;

        Ray::new(EYE + lens, unit(-lens + target * FOCUS_DISTANCE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::half_rng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_image_size() {
        assert_eq!(image_size(1.0), 1000);
        assert_eq!(image_size(0.5), 707);
        assert_eq!(image_size(0.0001), 10);
        assert_eq!(image_size(0.0), 0);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(matches!(Camera::new(0), Err(RenderError::InvalidSize(0))));
    }

    #[test]
    fn test_basis_is_orthogonal() {
        let camera = Camera::new(64).unwrap();
        let forward = unit(LOOK_DIRECTION);

        assert!((camera.right.length() - BASIS_SCALE).abs() < 1e-12);
        assert!((camera.up.length() - BASIS_SCALE).abs() < 1e-12);
        assert!(forward.dot(camera.right).abs() < 1e-12);
        assert!(forward.dot(camera.up).abs() < 1e-12);
        assert!(camera.right.dot(camera.up).abs() < 1e-12);
        // Right stays horizontal, up leans toward +Z
        assert_eq!(camera.right.z, 0.0);
        assert!(camera.up.z > 0.0);
    }

    #[test]
    fn test_center_ray_follows_forward() {
        let camera = Camera::new(100).unwrap();
        let mut rng = half_rng();

        // With every jitter at 0.5 the lens offset vanishes.
        let ray = camera.get_ray(50, 50, &mut rng);
        assert_eq!(ray.origin, EYE);
        assert!(ray.direction.dot(unit(LOOK_DIRECTION)) > 0.99);
    }

    #[test]
    fn test_rays_are_normalized() {
        let camera = Camera::new(32).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for (x, y) in [(0, 0), (31, 0), (0, 31), (31, 31), (16, 9)] {
            let ray = camera.get_ray(x, y, &mut rng);
            assert!((ray.direction.length() - 1.0).abs() < 1e-9);
            // Lens jitter stays within half an aperture along each axis
            assert!((ray.origin - EYE).length() < APERTURE * BASIS_SCALE);
        }
    }

    #[test]
    fn test_bottom_row_looks_lower() {
        let camera = Camera::new(100).unwrap();
        let bottom = camera.get_ray(50, 0, &mut half_rng());
        let top = camera.get_ray(50, 99, &mut half_rng());
        assert!(bottom.direction.z < top.direction.z);
    }
}
