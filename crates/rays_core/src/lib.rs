//! rays core - scene description for the sphere-field benchmark.
//!
//! This crate provides:
//!
//! - **Art masks**: `Art`, the ASCII grid a scene is laid out from
//! - **Scene**: `Scene`, the immutable list of unit-sphere offsets
//! - **Benchmark results**: `BenchResult`, per-pass timings and their JSON form
//!
//! # Example
//!
//! ```
//! use rays_core::{Art, Scene};
//!
//! let art = Art::parse("1 1\n 1 ")?;
//! let scene = Scene::from_art(&art);
//! assert_eq!(scene.len(), 3);
//! # Ok::<(), rays_core::SceneError>(())
//! ```

pub mod art;
pub mod bench;
pub mod scene;

// Re-export commonly used types
pub use art::{Art, SceneError, SceneResult};
pub use bench::{BenchError, BenchResult};
pub use scene::{Scene, SCENE_BIAS};
