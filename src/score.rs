//! Score normalization and the bucket → presentation tables.
//!
//! A [`Score`] is the service's raw `[0, 1]` answer scaled to a percentage and
//! clamped into `[0, 100]`. Every visual decision (rating label, background
//! gradient, light colors, sphere textures) is keyed off the single
//! [`Bucket`] the score falls into, so the panel and the scene can never
//! disagree about which theme is active.

use std::fmt;

use crate::render::color::Rgb;
use crate::render::texture::TextureKind;

/// A normalized score in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Score(f64);

impl Score {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    /// Scale a raw service score (nominally `[0, 1]`) to a clamped percentage.
    ///
    /// Out-of-range raw values are clamped (`1.5` → `100.0`). Non-finite
    /// values have no meaningful clamp and yield `None`.
    pub fn from_raw(raw: f64) -> Option<Self> {
        if !raw.is_finite() {
            return None;
        }
        Some(Self::from_percent(raw * 100.0))
    }

    /// Clamp a percentage into range.
    pub fn from_percent(percent: f64) -> Self {
        Self(percent.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn bucket(self) -> Bucket {
        Bucket::of(self)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// One of five ranges over `[0, 100]`; all but the last are half-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// `[0, 20)`
    NotCringe,
    /// `[20, 40)`
    LookingGood,
    /// `[40, 60)`
    SomewhatCringe,
    /// `[60, 80)`
    PrettyCringe,
    /// `[80, 100]`
    ExtremelyCringe,
}

impl Bucket {
    pub const ALL: [Bucket; 5] = [
        Bucket::NotCringe,
        Bucket::LookingGood,
        Bucket::SomewhatCringe,
        Bucket::PrettyCringe,
        Bucket::ExtremelyCringe,
    ];

    pub fn of(score: Score) -> Self {
        let v = score.value();
        if v < 20.0 {
            Bucket::NotCringe
        } else if v < 40.0 {
            Bucket::LookingGood
        } else if v < 60.0 {
            Bucket::SomewhatCringe
        } else if v < 80.0 {
            Bucket::PrettyCringe
        } else {
            Bucket::ExtremelyCringe
        }
    }

    /// Rating text shown under the submit button.
    pub fn label(self) -> &'static str {
        match self {
            Bucket::NotCringe => "Not Cringe!",
            Bucket::LookingGood => "Looking Good!",
            Bucket::SomewhatCringe => "Somewhat Cringe",
            Bucket::PrettyCringe => "Pretty Cringe",
            Bucket::ExtremelyCringe => "Extremely Cringe!",
        }
    }

    pub fn gradient(self) -> Gradient {
        match self {
            Bucket::NotCringe => Gradient::new(palette::RED_500, palette::PINK_500),
            Bucket::LookingGood => Gradient::new(palette::ORANGE_500, palette::YELLOW_500),
            Bucket::SomewhatCringe => Gradient::new(palette::BLUE_500, palette::PURPLE_500),
            Bucket::PrettyCringe => Gradient::new(palette::RED_500, palette::YELLOW_500),
            Bucket::ExtremelyCringe => Gradient::new(palette::RED_500, palette::ORANGE_500),
        }
    }

    pub fn lights(self) -> LightPalette {
        match self {
            Bucket::NotCringe => LightPalette::from_hex(0xf45c2c, 0xf97217, 0xee4445),
            Bucket::LookingGood => LightPalette::from_hex(0xedb543, 0xf87318, 0xeab309),
            Bucket::SomewhatCringe => LightPalette::from_hex(0x7268f5, 0x3b81f6, 0xa754f7),
            Bucket::PrettyCringe => LightPalette::from_hex(0xedb543, 0xee4542, 0xeab309),
            Bucket::ExtremelyCringe => LightPalette::from_hex(0xf76c1a, 0xee4442, 0xf87216),
        }
    }

    pub fn texture(self) -> TextureKind {
        match self {
            Bucket::NotCringe => TextureKind::Love,
            Bucket::LookingGood => TextureKind::Surprise,
            Bucket::SomewhatCringe => TextureKind::Like,
            Bucket::PrettyCringe => TextureKind::Laugh,
            Bucket::ExtremelyCringe => TextureKind::Angry,
        }
    }
}

/// Tailwind 500-weight stops used by the background gradients.
mod palette {
    use crate::render::color::Rgb;

    pub const RED_500: Rgb = Rgb::from_hex(0xef4444);
    pub const PINK_500: Rgb = Rgb::from_hex(0xec4899);
    pub const ORANGE_500: Rgb = Rgb::from_hex(0xf97316);
    pub const YELLOW_500: Rgb = Rgb::from_hex(0xeab308);
    pub const BLUE_500: Rgb = Rgb::from_hex(0x3b82f6);
    pub const PURPLE_500: Rgb = Rgb::from_hex(0xa855f7);
}

/// Left-to-right background gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: Rgb,
    pub to: Rgb,
}

impl Gradient {
    pub const fn new(from: Rgb, to: Rgb) -> Self {
        Self { from, to }
    }
}

/// Colors of the ambient light and the two opposing directional lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightPalette {
    pub ambient: Rgb,
    pub key: Rgb,
    pub fill: Rgb,
}

impl LightPalette {
    pub const fn from_hex(ambient: u32, key: u32, fill: u32) -> Self {
        Self {
            ambient: Rgb::from_hex(ambient),
            key: Rgb::from_hex(key),
            fill: Rgb::from_hex(fill),
        }
    }
}

/// Everything the UI derives from the current score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub bucket: Option<Bucket>,
    pub gradient: Gradient,
    pub lights: LightPalette,
    textures: &'static [TextureKind],
}

/// Texture cycle used before any score exists.
const IDLE_TEXTURES: [TextureKind; 5] = [
    TextureKind::Love,
    TextureKind::Like,
    TextureKind::Laugh,
    TextureKind::Surprise,
    TextureKind::Angry,
];

impl Theme {
    pub fn for_score(score: Option<Score>) -> Self {
        match score.map(Score::bucket) {
            Some(bucket) => Self {
                bucket: Some(bucket),
                gradient: bucket.gradient(),
                lights: bucket.lights(),
                textures: single_texture(bucket),
            },
            None => Self {
                bucket: None,
                gradient: Gradient::new(palette::BLUE_500, palette::PURPLE_500),
                lights: LightPalette::from_hex(0xedb543, 0xffffff, 0xa655f6),
                textures: &IDLE_TEXTURES,
            },
        }
    }

    /// Textures in use, in the order spheres cycle through them.
    pub fn textures(&self) -> &'static [TextureKind] {
        self.textures
    }

    /// Texture for the sphere at `index`.
    pub fn texture_for(&self, index: usize) -> TextureKind {
        self.textures[index % self.textures.len()]
    }

    pub fn label(&self) -> Option<&'static str> {
        self.bucket.map(Bucket::label)
    }
}

fn single_texture(bucket: Bucket) -> &'static [TextureKind] {
    match bucket {
        Bucket::NotCringe => &[TextureKind::Love],
        Bucket::LookingGood => &[TextureKind::Surprise],
        Bucket::SomewhatCringe => &[TextureKind::Like],
        Bucket::PrettyCringe => &[TextureKind::Laugh],
        Bucket::ExtremelyCringe => &[TextureKind::Angry],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_scores_scale_and_clamp() {
        assert_eq!(Score::from_raw(0.0).unwrap().value(), 0.0);
        assert_eq!(Score::from_raw(1.0).unwrap().value(), 100.0);
        assert_eq!(Score::from_raw(1.5).unwrap().value(), 100.0);
        assert_eq!(Score::from_raw(-0.2).unwrap().value(), 0.0);
        assert!(Score::from_raw(f64::NAN).is_none());
        assert!(Score::from_raw(f64::INFINITY).is_none());
    }

    #[test]
    fn display_has_one_decimal() {
        assert_eq!(Score::from_raw(0.4567).unwrap().to_string(), "45.7");
    }

    #[test]
    fn single_texture_matches_bucket_texture() {
        for bucket in Bucket::ALL {
            assert_eq!(single_texture(bucket), &[bucket.texture()]);
        }
    }

    #[test]
    fn zero_is_a_real_score() {
        let theme = Theme::for_score(Score::from_raw(0.0));
        assert_eq!(theme.bucket, Some(Bucket::NotCringe));
        assert_eq!(theme.textures(), &[TextureKind::Love]);
    }

    #[test]
    fn idle_theme_cycles_all_textures() {
        let theme = Theme::for_score(None);
        assert_eq!(theme.label(), None);
        assert_eq!(theme.texture_for(0), TextureKind::Love);
        assert_eq!(theme.texture_for(3), TextureKind::Surprise);
        assert_eq!(theme.texture_for(5), TextureKind::Love);
    }
}
