//! Pointer picking against an orthographic camera.
//!
//! Buttons are picked with plain analytic volumes (spheres and boxes)
//! rather than mesh raycasts; the installation's clickable geometry is
//! coarse enough that a bounding volume per button is exact in practice.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Convert a pointer position in pixels to normalized device coordinates,
/// x and y in `[-1, 1]` with y up.
pub fn pointer_to_ndc(px: f32, py: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new((px / width) * 2.0 - 1.0, -(py / height) * 2.0 + 1.0)
}

#[derive(Debug, Copy, Clone)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Orthographic camera. `view_size` is half the vertical extent of the view
/// volume in world units.
#[derive(Debug, Copy, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub view_size: f32,
    pub aspect: f32,
}

impl Camera {
    /// Build a world-space ray for a pointer in NDC. Orthographic rays are
    /// all parallel to the view direction; the pointer only offsets the
    /// origin across the view plane.
    pub fn ray_from_pointer(&self, ndc: Vec2) -> Ray {
        let forward = (self.target - self.position).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        let origin = self.position
            + right * (ndc.x * self.view_size * self.aspect)
            + up * (ndc.y * self.view_size);
        Ray {
            origin,
            dir: forward,
        }
    }
}

/// Analytic pick volume for one button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickVolume {
    Sphere { center: [f32; 3], radius: f32 },
    Aabb { min: [f32; 3], max: [f32; 3] },
}

impl PickVolume {
    /// Distance along `ray` to the nearest hit, if any. Hits behind the
    /// origin are discarded; an origin inside the volume hits at zero.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match *self {
            PickVolume::Sphere { center, radius } => {
                let center = Vec3::from(center);
                let oc = ray.origin - center;
                let b = oc.dot(ray.dir);
                let c = oc.length_squared() - radius * radius;
                let disc = b * b - c;
                if disc < 0.0 {
                    return None;
                }
                let sqrt = disc.sqrt();
                let near = -b - sqrt;
                if near >= 0.0 {
                    Some(near)
                } else if -b + sqrt >= 0.0 {
                    Some(0.0)
                } else {
                    None
                }
            }
            PickVolume::Aabb { min, max } => {
                let min = Vec3::from(min);
                let max = Vec3::from(max);
                let inv = ray.dir.recip();
                let t0 = (min - ray.origin) * inv;
                let t1 = (max - ray.origin) * inv;
                let enter = t0.min(t1).max_element();
                let exit = t0.max(t1).min_element();
                if enter > exit || exit < 0.0 {
                    None
                } else {
                    Some(enter.max(0.0))
                }
            }
        }
    }
}
