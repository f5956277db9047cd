//! Tessellated sphere geometry shared by every sphere in a scene.
//!
//! Only the camera-facing hemisphere is ever visible, so the geometry is a
//! disc of concentric rings. Each vertex carries its offset on the unit disc
//! (what the painter scales to screen pixels) and the matching hemisphere
//! normal (what lighting and texture lookup use).

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::fast_math::Vec3;

/// Segments around the silhouette.
pub const WIDTH_SEGMENTS: u32 = 32;
/// Rings from the center of the disc out to the silhouette.
pub const RING_SEGMENTS: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeomVertex {
    /// Position on the unit disc, +y up
    pub offset: [f32; 2],
    /// View-space normal, +z toward the camera
    pub normal: Vec3,
}

#[derive(Debug, Clone)]
pub struct SphereGeometry {
    pub vertices: Vec<GeomVertex>,
    pub indices: Vec<u32>,
}

impl SphereGeometry {
    pub fn new(width_segments: u32, ring_segments: u32) -> Self {
        let width = width_segments.max(3);
        let rings = ring_segments.max(1);

        let mut vertices = Vec::with_capacity((1 + rings * width) as usize);
        vertices.push(GeomVertex {
            offset: [0.0, 0.0],
            normal: Vec3::new(0.0, 0.0, 1.0),
        });

        for ring in 1..=rings {
            let theta = ring as f32 / rings as f32 * FRAC_PI_2;
            let (sin_t, cos_t) = theta.sin_cos();
            for seg in 0..width {
                let phi = seg as f32 / width as f32 * TAU;
                let (sin_p, cos_p) = phi.sin_cos();
                vertices.push(GeomVertex {
                    offset: [sin_t * cos_p, sin_t * sin_p],
                    normal: Vec3::new(sin_t * cos_p, sin_t * sin_p, cos_t),
                });
            }
        }

        let ring_start = |ring: u32| 1 + (ring - 1) * width;
        let mut indices = Vec::with_capacity((width * 3 * (2 * rings - 1)) as usize);

        // Center fan
        for seg in 0..width {
            let next = (seg + 1) % width;
            indices.extend_from_slice(&[0, ring_start(1) + seg, ring_start(1) + next]);
        }
        // Quads between consecutive rings
        for ring in 1..rings {
            let inner = ring_start(ring);
            let outer = ring_start(ring + 1);
            for seg in 0..width {
                let next = (seg + 1) % width;
                indices.extend_from_slice(&[inner + seg, outer + seg, outer + next]);
                indices.extend_from_slice(&[inner + seg, outer + next, inner + next]);
            }
        }

        Self { vertices, indices }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl Default for SphereGeometry {
    fn default() -> Self {
        Self::new(WIDTH_SEGMENTS, RING_SEGMENTS)
    }
}

/// Equirectangular texture coordinate for an object-space unit normal.
///
/// `u` runs once around the equator, `v` from the north pole (0) to the
/// south pole (1).
pub fn sphere_uv(n: Vec3) -> [f32; 2] {
    let u = n.z.atan2(-n.x) / TAU;
    let u = if u < 0.0 { u + 1.0 } else { u };
    let v = n.y.clamp(-1.0, 1.0).acos() / PI;
    [u, v]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry_counts() {
        let g = SphereGeometry::default();
        assert_eq!(g.vertices.len(), 1 + 16 * 32);
        assert_eq!(g.triangle_count(), 32 * (2 * 16 - 1));
        let max = *g.indices.iter().max().unwrap() as usize;
        assert!(max < g.vertices.len());
    }

    #[test]
    fn normals_are_unit_and_face_camera() {
        for v in SphereGeometry::default().vertices {
            assert!((v.normal.length() - 1.0).abs() < 1e-5);
            assert!(v.normal.z >= -1e-6);
        }
    }

    #[test]
    fn poles_map_to_top_and_bottom_rows() {
        assert!(sphere_uv(Vec3::new(0.0, 1.0, 0.0))[1].abs() < 1e-6);
        assert!((sphere_uv(Vec3::new(0.0, -1.0, 0.0))[1] - 1.0).abs() < 1e-6);
    }
}
