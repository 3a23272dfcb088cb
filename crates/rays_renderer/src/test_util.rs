//! Test doubles shared by the unit tests.

use crate::{Hit, Hittable, Ray};
use rand::rngs::mock::StepRng;

/// A random source that always yields 0.5.
pub(crate) fn half_rng() -> StepRng {
    StepRng::new(1 << 63, 0)
}

/// A world whose intersection answer is computed by a closure.
pub(crate) struct FnWorld<F>(pub F);

impl<F> Hittable for FnWorld<F>
where
    F: Fn(&Ray) -> Hit + Send + Sync,
{
    fn hit(&self, ray: &Ray) -> Hit {
        (self.0)(ray)
    }
}
