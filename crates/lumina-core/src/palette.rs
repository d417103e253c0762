//! Named base colors and the default categorical color range.
//!
//! Each base color resolves to its mid-tone (the "500" shade of the usual
//! utility-CSS scale), which is what charts paint series with.

use crate::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseColor {
    Slate,
    Gray,
    Zinc,
    Neutral,
    Stone,
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Sky,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
}

/// Default categorical order: cool hues first, then neutrals, then warm.
pub const THEME_COLOR_RANGE: [BaseColor; 22] = [
    BaseColor::Blue,
    BaseColor::Cyan,
    BaseColor::Sky,
    BaseColor::Indigo,
    BaseColor::Violet,
    BaseColor::Purple,
    BaseColor::Fuchsia,
    BaseColor::Slate,
    BaseColor::Gray,
    BaseColor::Zinc,
    BaseColor::Neutral,
    BaseColor::Stone,
    BaseColor::Red,
    BaseColor::Orange,
    BaseColor::Amber,
    BaseColor::Yellow,
    BaseColor::Lime,
    BaseColor::Green,
    BaseColor::Emerald,
    BaseColor::Teal,
    BaseColor::Pink,
    BaseColor::Rose,
];

impl BaseColor {
    /// All base colors in declaration order.
    pub const ALL: [Self; 22] = [
        Self::Slate,
        Self::Gray,
        Self::Zinc,
        Self::Neutral,
        Self::Stone,
        Self::Red,
        Self::Orange,
        Self::Amber,
        Self::Yellow,
        Self::Lime,
        Self::Green,
        Self::Emerald,
        Self::Teal,
        Self::Cyan,
        Self::Sky,
        Self::Blue,
        Self::Indigo,
        Self::Violet,
        Self::Purple,
        Self::Fuchsia,
        Self::Pink,
        Self::Rose,
    ];

    /// Lowercase name, as used in configuration files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Slate => "slate",
            Self::Gray => "gray",
            Self::Zinc => "zinc",
            Self::Neutral => "neutral",
            Self::Stone => "stone",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Amber => "amber",
            Self::Yellow => "yellow",
            Self::Lime => "lime",
            Self::Green => "green",
            Self::Emerald => "emerald",
            Self::Teal => "teal",
            Self::Cyan => "cyan",
            Self::Sky => "sky",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Violet => "violet",
            Self::Purple => "purple",
            Self::Fuchsia => "fuchsia",
            Self::Pink => "pink",
            Self::Rose => "rose",
        }
    }

    /// Mid-tone RGB value.
    #[must_use]
    pub fn to_color(self) -> Color {
        let (r, g, b) = match self {
            Self::Slate => (0x64, 0x74, 0x8b),
            Self::Gray => (0x6b, 0x72, 0x80),
            Self::Zinc => (0x71, 0x71, 0x7a),
            Self::Neutral => (0x73, 0x73, 0x73),
            Self::Stone => (0x78, 0x71, 0x6c),
            Self::Red => (0xef, 0x44, 0x44),
            Self::Orange => (0xf9, 0x73, 0x16),
            Self::Amber => (0xf5, 0x9e, 0x0b),
            Self::Yellow => (0xea, 0xb3, 0x08),
            Self::Lime => (0x84, 0xcc, 0x16),
            Self::Green => (0x22, 0xc5, 0x5e),
            Self::Emerald => (0x10, 0xb9, 0x81),
            Self::Teal => (0x14, 0xb8, 0xa6),
            Self::Cyan => (0x06, 0xb6, 0xd4),
            Self::Sky => (0x0e, 0xa5, 0xe9),
            Self::Blue => (0x3b, 0x82, 0xf6),
            Self::Indigo => (0x63, 0x66, 0xf1),
            Self::Violet => (0x8b, 0x5c, 0xf6),
            Self::Purple => (0xa8, 0x55, 0xf7),
            Self::Fuchsia => (0xd9, 0x46, 0xef),
            Self::Pink => (0xec, 0x48, 0x99),
            Self::Rose => (0xf4, 0x3f, 0x5e),
        };
        Color::from_rgba8(r, g, b, 255)
    }
}

impl From<BaseColor> for Color {
    fn from(base: BaseColor) -> Self {
        base.to_color()
    }
}

impl fmt::Display for BaseColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no base color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown base color '{0}'")]
pub struct UnknownBaseColor(pub String);

impl FromStr for BaseColor {
    type Err = UnknownBaseColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == lowered)
            .ok_or_else(|| UnknownBaseColor(s.to_string()))
    }
}

/// The default categorical palette as concrete colors.
#[must_use]
pub fn theme_colors() -> Vec<Color> {
    THEME_COLOR_RANGE.iter().map(|c| c.to_color()).collect()
}
