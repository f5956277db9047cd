use egui::{Pos2, Rect};

use crate::fast_math::{deg_to_rad, Vec3};

/// Perspective camera on the +z axis looking toward the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

/// A world point mapped into a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub center: Pos2,
    /// Screen pixels per world unit at this depth
    pub scale: f32,
    /// Distance in front of the camera
    pub depth: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_y: 70.0,
            near: 0.1,
            far: 100.0,
            position: Vec3::new(0.0, 0.0, 20.0),
        }
    }
}

impl Camera {
    /// Project `point` into `viewport`. Aspect ratio follows the viewport.
    /// Points outside the near/far range yield `None`.
    pub fn project(&self, point: Vec3, viewport: Rect) -> Option<Projected> {
        let depth = self.position.z - point.z;
        if depth <= self.near || depth >= self.far || viewport.height() <= 0.0 {
            return None;
        }

        let focal = 1.0 / (deg_to_rad(self.fov_y) * 0.5).tan();
        let half_h = viewport.height() * 0.5;
        // Pixels per world unit; the same factor on both axes keeps pixels square
        let scale = focal / depth * half_h;

        let rel = point - self.position;
        let center = viewport.center();
        Some(Projected {
            center: Pos2::new(center.x + rel.x * scale, center.y - rel.y * scale),
            scale,
            depth,
        })
    }
}
