//! Fast Math — small vector kit for the sphere simulation and projection.
//!
//! ## FMA (Fused Multiply-Add)
//! a * b + c in 1 instruction instead of 2 (also reduces rounding error).
//!
//! ## Sqrt Elimination
//! length() requires sqrt. length_squared() doesn't.
//! For comparisons: |a| < |b|  ↔  a² < b²  (no sqrt needed)

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Fused Multiply-Add: a * b + c
#[inline(always)]
pub fn fma(a: f32, b: f32, c: f32) -> f32 {
    a.mul_add(b, c)
}

/// Linear interpolation using FMA for precision.
/// lerp(a, b, t) = a + t * (b - a) = fma(t, b-a, a)
#[inline(always)]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    fma(t, b - a, a)
}

/// Convert degrees to radians.
#[inline(always)]
pub fn deg_to_rad(deg: f32) -> f32 {
    const INV_180: f32 = 1.0 / 180.0;
    deg * std::f32::consts::PI * INV_180
}

/// Three-component vector in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[inline(always)]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline(always)]
    pub fn dot(self, o: Self) -> f32 {
        fma(self.x, o.x, fma(self.y, o.y, self.z * o.z))
    }

    /// Squared length (no sqrt)
    #[inline(always)]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline(always)]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector, or zero for a zero-length input.
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            self * (1.0 / len)
        } else {
            Self::ZERO
        }
    }

    /// Rotate about the x axis by `angle` radians.
    #[inline]
    pub fn rotate_x(self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x, fma(self.y, c, -self.z * s), fma(self.y, s, self.z * c))
    }

    /// Rotate about the y axis by `angle` radians.
    #[inline]
    pub fn rotate_y(self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(fma(self.x, c, self.z * s), self.y, fma(-self.x, s, self.z * c))
    }
}

impl Add for Vec3 {
    type Output = Self;
    #[inline(always)]
    fn add(self, o: Self) -> Self {
        Self::new(self.x + o.x, self.y + o.y, self.z + o.z)
    }
}

impl AddAssign for Vec3 {
    #[inline(always)]
    fn add_assign(&mut self, o: Self) {
        *self = *self + o;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, o: Self) -> Self {
        Self::new(self.x - o.x, self.y - o.y, self.z - o.z)
    }
}

impl SubAssign for Vec3 {
    #[inline(always)]
    fn sub_assign(&mut self, o: Self) {
        *self = *self - o;
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl MulAssign<f32> for Vec3 {
    #[inline(always)]
    fn mul_assign(&mut self, s: f32) {
        *self = *self * s;
    }
}

impl Neg for Vec3 {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}
