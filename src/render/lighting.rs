//! Ambient + directional light rig and a Blinn-Phong style shade function.
//!
//! Light positions follow the scene layout: a key light from (10, 10, 10),
//! a fill light from the opposite corner, and a dim white light from the
//! camera. The palette from the score bucket tints the first three.

use crate::fast_math::{lerp, Vec3};
use crate::render::color::Rgb;
use crate::score::LightPalette;

const LIGHT_INTENSITY: f32 = 0.8;
const CAMERA_LIGHT_INTENSITY: f32 = 0.3;

/// Surface parameters shared by every sphere of one texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub metalness: f32,
    pub roughness: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            metalness: 0.1,
            roughness: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Unit vector pointing from the surface toward the light
    pub direction: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
}

impl DirectionalLight {
    fn from_position(position: Vec3, color: Rgb, intensity: f32) -> Self {
        Self {
            direction: position.normalized(),
            color: color.to_f32(),
            intensity,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LightRig {
    pub ambient: [f32; 3],
    pub ambient_intensity: f32,
    pub lights: [DirectionalLight; 3],
}

impl LightRig {
    pub fn from_palette(palette: &LightPalette) -> Self {
        Self {
            ambient: palette.ambient.to_f32(),
            ambient_intensity: LIGHT_INTENSITY,
            lights: [
                DirectionalLight::from_position(Vec3::new(10.0, 10.0, 10.0), palette.key, LIGHT_INTENSITY),
                DirectionalLight::from_position(Vec3::new(-10.0, -10.0, -10.0), palette.fill, LIGHT_INTENSITY),
                DirectionalLight::from_position(Vec3::new(0.0, 0.0, 20.0), Rgb::WHITE, CAMERA_LIGHT_INTENSITY),
            ],
        }
    }

    /// Light arriving at a surface with view-space `normal`; the texture
    /// color is multiplied in by the GPU afterwards.
    pub fn shade(&self, normal: Vec3, material: &Material) -> Rgb {
        let view = Vec3::new(0.0, 0.0, 1.0);
        let shininess = lerp(128.0, 2.0, material.roughness);
        let spec_weight = lerp(0.04, 1.0, material.metalness);
        let diffuse_weight = 1.0 - material.metalness;

        let mut out = self
            .ambient
            .map(|a| a * self.ambient_intensity * diffuse_weight);

        for light in &self.lights {
            let n_dot_l = normal.dot(light.direction);
            if n_dot_l <= 0.0 {
                continue;
            }
            let half = (light.direction + view).normalized();
            let spec = normal.dot(half).max(0.0).powf(shininess) * spec_weight;
            let strength = light.intensity * (n_dot_l * diffuse_weight + spec);
            for (channel, color) in out.iter_mut().zip(light.color) {
                *channel += color * strength;
            }
        }

        Rgb::from_f32(out)
    }
}
