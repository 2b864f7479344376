//! 3D-surface mapping via barycentric UV lookup
//!
//! Resolves a world-space contact point (from an external ray or physics
//! hit) to the UV of the triangle containing it, then scales UV to
//! canvas pixels.

use glam::{Affine3A, Vec2, Vec3};
use serde::{Deserialize, Serialize};

const DEGENERATE_EPSILON: f32 = 1e-6;

/// A textured mesh the brush can touch.
///
/// `positions` and `uvs` are parallel per-vertex arrays; `triangles`
/// indexes into both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceMesh {
    pub positions: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub triangles: Vec<[u32; 3]>,
}

/// Maps world-space contact points on a mesh to canvas pixel coordinates
#[derive(Debug, Clone)]
pub struct SurfaceMapper {
    pub mesh: SurfaceMesh,
    pub world_to_local: Affine3A,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl SurfaceMapper {
    /// Map a world-space contact point, or `None` when no triangle
    /// contains it.
    pub fn map(&self, world_point: Vec3) -> Option<Vec2> {
        let local = self.world_to_local.transform_point3(world_point);

        for tri in &self.mesh.triangles {
            let [i0, i1, i2] = *tri;
            let v0 = *self.mesh.positions.get(i0 as usize)?;
            let v1 = *self.mesh.positions.get(i1 as usize)?;
            let v2 = *self.mesh.positions.get(i2 as usize)?;

            let Some(bary) = barycentric(local, v0, v1, v2) else {
                continue;
            };
            if bary.x >= 0.0 && bary.y >= 0.0 && bary.z >= 0.0 {
                let uv0 = *self.mesh.uvs.get(i0 as usize)?;
                let uv1 = *self.mesh.uvs.get(i1 as usize)?;
                let uv2 = *self.mesh.uvs.get(i2 as usize)?;
                let uv = uv0 * bary.x + uv1 * bary.y + uv2 * bary.z;
                return Some(Vec2::new(
                    uv.x * self.canvas_width as f32,
                    uv.y * self.canvas_height as f32,
                ));
            }
        }
        None
    }
}

/// Barycentric weights (u, v, w) of `p` with respect to triangle `abc`,
/// or `None` for a degenerate triangle.
pub fn barycentric(p: Vec3, a: Vec3, b: Vec3, c: Vec3) -> Option<Vec3> {
    let v0 = b - a;
    let v1 = c - a;
    let v2 = p - a;

    let d00 = v0.dot(v0);
    let d01 = v0.dot(v1);
    let d11 = v1.dot(v1);
    let d20 = v2.dot(v0);
    let d21 = v2.dot(v1);

    let denom = d00 * d11 - d01 * d01;
    if denom.abs() < DEGENERATE_EPSILON {
        return None;
    }

    let v = (d11 * d20 - d01 * d21) / denom;
    let w = (d00 * d21 - d01 * d20) / denom;
    let u = 1.0 - v - w;
    Some(Vec3::new(u, v, w))
}
