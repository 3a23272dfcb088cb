//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Sky, checkerboard floor and mirror-like spheres
//! - Soft shadows from a jittered point light
//! - A single 50% attenuated reflection bounce per sphere hit
//! - Rows striped across a fixed pool of worker threads

use crate::stripe::worker_for_row;
use crate::{gen_f64, Camera, Color, FrameBuffer, HitClass, Hittable, RenderError, RenderResult};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use rayon::ThreadPool;
use rays_math::{unit, Interval, Ray, Vec3};
use std::time::Instant;

/// Light position before jitter; x and y each get up to one unit added.
const LIGHT_POSITION: Vec3 = Vec3::new(9.0, 9.0, 16.0);

const SKY_COLOR: Color = Color::ONE;
const FLOOR_RED: Color = Color::new(3.0, 1.0, 1.0);
const FLOOR_WHITE: Color = Color::new(3.0, 3.0, 3.0);

/// Floor points are scaled by this before picking a checker tile.
const CHECKER_SCALE: f64 = 0.2;

/// Share of light carried by the reflected ray.
const REFLECTION: f64 = 0.5;

/// Every pixel starts from this value before samples are added.
const PIXEL_BASE: f64 = 13.0;

const CHANNEL_RANGE: Interval = Interval::new(0.0, 255.0);

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Samples per pixel
    pub samples_per_pixel: u32,
    /// Maximum number of sphere bounces before a path is cut to black
    pub max_depth: u32,
    /// Weight of each sample in the pixel sum
    pub exposure: f64,
    /// Number of worker threads
    pub threads: usize,
    /// Base seed for reproducible renders, `None` draws seeds from the OS
    pub seed: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 64,
            max_depth: 64,
            exposure: 3.5,
            threads: std::thread::available_parallelism().map_or(1, |n| n.get()),
            seed: None,
        }
    }
}

impl RenderConfig {
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seed for worker `index`.
    fn worker_seed(&self, index: usize) -> u64 {
        match self.seed {
            Some(seed) => seed.wrapping_add(index as u64),
            None => rand::random(),
        }
    }
}

/// Compute the color seen along a ray.
///
/// Sphere hits recurse along the mirror direction. Paths normally end by
/// escaping to the sky or landing on the floor; `depth` only cuts off rays
/// trapped between spheres, returning black once it reaches zero.
pub fn radiance(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let hit = world.hit(ray);
    if hit.is_sky() {
        return SKY_COLOR * (1.0 - ray.direction.z);
    }

    let point = ray.at(hit.distance);
    let jitter = Vec3::new(gen_f64(rng), gen_f64(rng), 0.0);
    let light = unit(LIGHT_POSITION + jitter - point);

    // Lambertian factor, zero when facing away or shadowed
    let mut lambert = light.dot(hit.normal);
    let lit = lambert >= 0.0 && world.hit(&Ray::new(point, light)).is_sky();
    if !lit {
        lambert = 0.0;
    }

    if hit.class == HitClass::Floor {
        return floor_color(point) * (lambert * 0.2 + 0.1);
    }

    let reflected = ray.direction - hit.normal * (2.0 * hit.normal.dot(ray.direction));
    let highlight = if lit { specular(light.dot(reflected)) } else { 0.0 };

    Color::splat(highlight)
        + radiance(&Ray::new(point, reflected), world, depth - 1, rng) * REFLECTION
}

/// Checkerboard tile color under a floor point.
fn floor_color(point: Vec3) -> Color {
    let p = point * CHECKER_SCALE;
    if (p.x.ceil() + p.y.ceil()) as i64 & 1 == 1 {
        FLOOR_RED
    } else {
        FLOOR_WHITE
    }
}

/// `max(0, alignment)` raised to the 64th power by six squarings.
fn specular(alignment: f64) -> f64 {
    let mut p = alignment.max(0.0);
    for _ in 0..6 {
        p *= p;
    }
    p
}

/// Narrow an accumulated color to bytes, saturating at 0 and 255.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    // NaN survives clamp and then casts to 0.
    [
        CHANNEL_RANGE.clamp(color.x) as u8,
        CHANNEL_RANGE.clamp(color.y) as u8,
        CHANNEL_RANGE.clamp(color.z) as u8,
    ]
}

/// Accumulate all samples of pixel (x, y).
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::splat(PIXEL_BASE);

    for _ in 0..config.samples_per_pixel {
        let ray = camera.get_ray(x, y, rng);
        pixel_color += radiance(&ray, world, config.max_depth, rng) * config.exposure;
    }

    pixel_color
}

/// Build the pool of `threads` render workers.
pub fn worker_pool(threads: usize) -> RenderResult<ThreadPool> {
    if threads == 0 {
        return Err(RenderError::InvalidThreads);
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("rays-worker-{i}"))
        .build()?;
    Ok(pool)
}

/// Render the scene into `image` on a fresh pool of `config.threads` workers.
///
/// Returns once every worker has finished, so the buffer is complete when
/// this returns `Ok`.
pub fn render(
    world: &dyn Hittable,
    camera: &Camera,
    config: &RenderConfig,
    image: &mut FrameBuffer,
) -> RenderResult<()> {
    let pool = worker_pool(config.threads)?;
    render_on(&pool, world, camera, config, image)
}

/// Render on an existing pool, which must have exactly `config.threads`
/// threads. Lets repeated passes reuse one pool.
pub fn render_on(
    pool: &ThreadPool,
    world: &dyn Hittable,
    camera: &Camera,
    config: &RenderConfig,
    image: &mut FrameBuffer,
) -> RenderResult<()> {
    let threads = config.threads;
    if threads == 0 {
        return Err(RenderError::InvalidThreads);
    }
    if pool.current_num_threads() != threads {
        return Err(RenderError::PoolMismatch {
            pool: pool.current_num_threads(),
            threads,
        });
    }
    let size = camera.size();
    if image.width() != size || image.height() != size {
        return Err(RenderError::SizeMismatch {
            width: image.width(),
            height: image.height(),
            size,
        });
    }

    let start = Instant::now();
    let column_offsets: Vec<(u32, usize)> =
        (0..size).rev().map(|x| (x, image.column_offset(x))).collect();

    // Hand each worker the rows of its stripe.
    let mut stripes: Vec<Vec<(u32, &mut [u8])>> = (0..threads).map(|_| Vec::new()).collect();
    for (y, row) in image.rows_mut() {
        stripes[worker_for_row(y, threads)].push((y, row));
    }

    let column_offsets = &column_offsets;
    pool.scope(|s| {
        for (index, rows) in stripes.into_iter().enumerate() {
            let seed = config.worker_seed(index);
            s.spawn(move |_| {
                log::debug!("Worker {index}: {} row(s), seed {seed:#018x}", rows.len());
                let mut rng = SmallRng::seed_from_u64(seed);

                for (y, row) in rows {
                    for &(x, k) in column_offsets {
                        let color = render_pixel(camera, world, x, y, config, &mut rng);
                        row[k..k + 3].copy_from_slice(&color_to_rgb(color));
                    }
                }
            });
        }
    });

    log::debug!(
        "Rendered {size}x{size} with {threads} worker(s) in {:?}",
        start.elapsed()
    );
    Ok(())
}
