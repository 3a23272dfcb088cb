//! rays renderer - CPU path tracing of the sphere-field scene.
//!
//! A Monte Carlo path tracer with soft shadows, depth of field and one
//! mirror bounce per sphere hit. Image rows are striped across a fixed set
//! of worker threads that write disjoint rows of one shared frame buffer.

mod camera;
mod error;
mod framebuffer;
mod hittable;
mod renderer;
mod stripe;

#[cfg(test)]
mod test_util;

pub use camera::{image_size, Camera};
pub use error::{RenderError, RenderResult};
pub use framebuffer::FrameBuffer;
pub use hittable::{Hit, HitClass, Hittable, HIT_RANGE};
pub use renderer::{
    color_to_rgb, radiance, render, render_on, render_pixel, worker_pool, RenderConfig,
};
pub use stripe::{stripe_rows, worker_for_row};

/// Re-export math and scene types
pub use rays_core::{Art, Scene};
pub use rays_math::{Ray, Vec3};

/// RGB color, unclamped until it is narrowed to bytes.
pub type Color = Vec3;

/// Uniform sample in [0, 1).
#[inline]
pub(crate) fn gen_f64(rng: &mut dyn rand::RngCore) -> f64 {
    use rand::Rng;
    rng.gen::<f64>()
}
