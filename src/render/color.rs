//! Packed RGB colors for the scene palette.
//!
//! Palette entries are written as `0xRRGGBB` literals, the same form the
//! lighting tables and gradient stops use, and unpacked at compile time.

/// RGB color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::from_hex(0xffffff);

    /// Unpack a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Convert to normalized f32 (for lighting math)
    #[inline(always)]
    pub fn to_f32(self) -> [f32; 3] {
        const INV_255: f32 = 1.0 / 255.0;
        [
            self.r as f32 * INV_255,
            self.g as f32 * INV_255,
            self.b as f32 * INV_255,
        ]
    }

    /// Build from normalized channels, saturating outside [0, 1].
    #[inline]
    pub fn from_f32(c: [f32; 3]) -> Self {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        Self {
            r: q(c[0]),
            g: q(c[1]),
            b: q(c[2]),
        }
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgb(self.r, self.g, self.b)
    }
}
