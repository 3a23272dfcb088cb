//! The sphere-field scene.
//!
//! A scene is a flat list of unit spheres plus an implicit ground plane at
//! `z = 0`. Each sphere is stored as the offset that is added to a ray origin
//! (already shifted by [`SCENE_BIAS`]) to move it into the sphere's frame, so
//! the sphere centre in world space is `-(SCENE_BIAS + offset)`.

use rays_math::Vec3;

use crate::art::Art;

/// World-space shift applied once to every ray origin before the sphere
/// tests. It places the whole mask below the camera at a fixed standoff.
pub const SCENE_BIAS: Vec3 = Vec3::new(0.0, 6.5, -1.0);

/// An immutable list of unit spheres.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    objects: Vec<Vec3>,
}

impl Scene {
    /// Create a scene from raw sphere offsets.
    pub fn new(objects: Vec<Vec3>) -> Self {
        Self { objects }
    }

    /// A scene with only the ground plane.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Lay out one sphere per marker cell.
    ///
    /// Column `k` maps to one unit along x, row `j` of an `R`-row mask maps to
    /// one unit along z, with the top row furthest up.
    pub fn from_art(art: &Art) -> Self {
        let rows = art.height() as f64;
        let objects: Vec<Vec3> = art
            .markers()
            .map(|(row, col)| Vec3::new(col as f64, 0.0, -(rows - row as f64)))
            .collect();

        log::debug!(
            "Built scene with {} sphere(s) from {}x{} art",
            objects.len(),
            art.width(),
            art.height()
        );
        if objects.is_empty() {
            log::warn!("Art mask has no markers, only the floor will be rendered");
        }

        Self { objects }
    }

    /// Sphere offsets in build order.
    pub fn objects(&self) -> &[Vec3] {
        &self.objects
    }

    /// Number of spheres.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene has no spheres.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
