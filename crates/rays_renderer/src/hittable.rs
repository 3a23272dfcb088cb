//! Ray-scene intersection.

use rays_core::{Scene, SCENE_BIAS};
use rays_math::{unit, Interval, Ray, Vec3};

/// Valid hit distances. The lower bound keeps secondary rays from hitting
/// the surface they start on; the upper bound is the "no hit" distance.
pub const HIT_RANGE: Interval = Interval::new(0.01, 1e9);

/// What a ray ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitClass {
    /// Nothing was hit, the ray escapes upward.
    Sky,
    /// The ground plane at z = 0.
    Floor,
    /// One of the unit spheres.
    Sphere,
}

/// Nearest intersection along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Distance along the ray, `HIT_RANGE.max` for a sky hit
    pub distance: f64,
    /// Surface normal, zero for a sky hit
    pub normal: Vec3,
    pub class: HitClass,
}

impl Hit {
    /// A ray that escaped the scene.
    pub const SKY: Hit = Hit {
        distance: HIT_RANGE.max,
        normal: Vec3::ZERO,
        class: HitClass::Sky,
    };

    /// A hit on the ground plane.
    pub fn floor(distance: f64) -> Self {
        Self {
            distance,
            normal: Vec3::Z,
            class: HitClass::Floor,
        }
    }

    /// A hit on a sphere with the given outward normal.
    pub fn sphere(distance: f64, normal: Vec3) -> Self {
        Self {
            distance,
            normal,
            class: HitClass::Sphere,
        }
    }

    pub fn is_sky(&self) -> bool {
        self.class == HitClass::Sky
    }
}

/// Trait for worlds that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Find the nearest hit along `ray`. The direction must be normalized.
    fn hit(&self, ray: &Ray) -> Hit;
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray) -> Hit {
        let d = ray.direction;
        let mut nearest = Hit::SKY;

        // Ground plane
        let p = -ray.origin.z / d.z;
        if p > HIT_RANGE.min && p.is_finite() {
            nearest = Hit::floor(p);
        }

        // Spheres, in the frame shifted by the scene bias. The normal is only
        // worked out for the winner.
        let origin = ray.origin + SCENE_BIAS;
        let mut winner: Option<Vec3> = None;

        for offset in self.objects() {
            let q = origin + *offset;
            let b = q.dot(d);
            let c = q.dot(q) - 1.0;
            let b2 = b * b;

            if b2 > c {
                let s = -b - (b2 - c).sqrt();
                if HIT_RANGE.with_max(nearest.distance).surrounds(s) {
                    nearest.distance = s;
                    winner = Some(q);
                }
            }
        }

        if let Some(q) = winner {
            nearest = Hit::sphere(nearest.distance, unit(q + d * nearest.distance));
        }

        nearest
    }
}
