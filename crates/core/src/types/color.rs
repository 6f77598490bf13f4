//! Product colour variants.
//!
//! The LUMINA ONE ships in a fixed set of four colours. Every colour has a
//! kebab-case identifier (stored on basket rows), a human label (used on the
//! product page swatches), an upper-case display name (shown in the basket)
//! and an accent colour applied to the page chrome when it is selected.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string names no known colour variant.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown colour: {0}")]
pub struct UnknownColor(pub String);

/// One of the fixed product colour options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ColorVariant {
    #[default]
    SageGreen,
    DustyRose,
    LavenderMist,
    MoonlightWhite,
}

impl ColorVariant {
    /// All variants in swatch order.
    pub const ALL: [Self; 4] = [
        Self::SageGreen,
        Self::DustyRose,
        Self::LavenderMist,
        Self::MoonlightWhite,
    ];

    /// Kebab-case identifier, e.g. `sage-green`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::SageGreen => "sage-green",
            Self::DustyRose => "dusty-rose",
            Self::LavenderMist => "lavender-mist",
            Self::MoonlightWhite => "moonlight-white",
        }
    }

    /// Swatch label, e.g. `Sage Green`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SageGreen => "Sage Green",
            Self::DustyRose => "Dusty Rose",
            Self::LavenderMist => "Lavender Mist",
            Self::MoonlightWhite => "Moonlight White",
        }
    }

    /// Basket display name, e.g. `SAGE GREEN`.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SageGreen => "SAGE GREEN",
            Self::DustyRose => "DUSTY ROSE",
            Self::LavenderMist => "LAVENDER MIST",
            Self::MoonlightWhite => "MOONLIGHT WHITE",
        }
    }

    /// Accent colour (CSS hex) for navigation text and logo.
    #[must_use]
    pub const fn accent(self) -> &'static str {
        match self {
            Self::SageGreen => "#8b9c8d",
            Self::DustyRose => "#b18778",
            Self::LavenderMist => "#7f6c70",
            Self::MoonlightWhite => "#b7ac9a",
        }
    }

    /// File-name stem used by the product image set, e.g. `SageGreen`.
    #[must_use]
    pub const fn image_stem(self) -> &'static str {
        match self {
            Self::SageGreen => "SageGreen",
            Self::DustyRose => "DustyRose",
            Self::LavenderMist => "LavenderMist",
            Self::MoonlightWhite => "MoonlightWhite",
        }
    }
}

impl fmt::Display for ColorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Parses either the identifier (`sage-green`) or the label (`Sage Green`).
impl FromStr for ColorVariant {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|variant| {
                variant.id() == trimmed || variant.label().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| UnknownColor(s.to_owned()))
    }
}

/// Colour identifier as stored on a basket row.
///
/// Usually the id of a [`ColorVariant`], but documents written by older
/// builds may carry anything, so the raw string is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ColorId(String);

impl ColorId {
    /// Wrap a raw identifier.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The known variant this id names, if any.
    #[must_use]
    pub fn variant(&self) -> Option<ColorVariant> {
        self.0.parse().ok()
    }

    /// Display name from the static mapping, falling back to the raw id.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.variant()
            .map_or_else(|| self.0.clone(), |v| v.display_name().to_owned())
    }
}

impl From<ColorVariant> for ColorId {
    fn from(variant: ColorVariant) -> Self {
        Self(variant.id().to_owned())
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ColorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_and_label() {
        assert_eq!("sage-green".parse::<ColorVariant>().unwrap(), ColorVariant::SageGreen);
        assert_eq!("Dusty Rose".parse::<ColorVariant>().unwrap(), ColorVariant::DustyRose);
        assert_eq!(
            "moonlight white".parse::<ColorVariant>().unwrap(),
            ColorVariant::MoonlightWhite
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "neon-orange".parse::<ColorVariant>().unwrap_err();
        assert_eq!(err, UnknownColor("neon-orange".to_string()));
    }

    #[test]
    fn test_display_names_match_ids() {
        for variant in ColorVariant::ALL {
            let id = ColorId::from(variant);
            assert_eq!(id.as_str(), variant.id());
            assert_eq!(id.display_name(), variant.display_name());
        }
    }

    #[test]
    fn test_unmapped_id_falls_back_to_raw() {
        let id = ColorId::new("unknown");
        assert_eq!(id.variant(), None);
        assert_eq!(id.display_name(), "unknown");
    }

    #[test]
    fn test_serde_ids() {
        let json = serde_json::to_string(&ColorVariant::LavenderMist).unwrap();
        assert_eq!(json, "\"lavender-mist\"");

        let id: ColorId = serde_json::from_str("\"dusty-rose\"").unwrap();
        assert_eq!(id.variant(), Some(ColorVariant::DustyRose));
    }
}
