use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Classification of an element by its position and behavior in the periodic table.
///
/// The set is closed: every entry of the built-in table maps to exactly one category,
/// with [`ElementCategory::Unknown`] reserved for the superheavy elements whose chemistry
/// has not been characterized.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ElementCategory {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
    #[default]
    Unknown,
}

impl ElementCategory {
    pub const ALL: [ElementCategory; 11] = [
        ElementCategory::AlkaliMetal,
        ElementCategory::AlkalineEarthMetal,
        ElementCategory::TransitionMetal,
        ElementCategory::PostTransitionMetal,
        ElementCategory::Metalloid,
        ElementCategory::Nonmetal,
        ElementCategory::Halogen,
        ElementCategory::NobleGas,
        ElementCategory::Lanthanide,
        ElementCategory::Actinide,
        ElementCategory::Unknown,
    ];

    /// Returns the kebab-case name used in catalogs and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementCategory::AlkaliMetal => "alkali-metal",
            ElementCategory::AlkalineEarthMetal => "alkaline-earth-metal",
            ElementCategory::TransitionMetal => "transition-metal",
            ElementCategory::PostTransitionMetal => "post-transition-metal",
            ElementCategory::Metalloid => "metalloid",
            ElementCategory::Nonmetal => "nonmetal",
            ElementCategory::Halogen => "halogen",
            ElementCategory::NobleGas => "noble-gas",
            ElementCategory::Lanthanide => "lanthanide",
            ElementCategory::Actinide => "actinide",
            ElementCategory::Unknown => "unknown",
        }
    }

    pub fn is_metal(&self) -> bool {
        matches!(
            self,
            ElementCategory::AlkaliMetal
                | ElementCategory::AlkalineEarthMetal
                | ElementCategory::TransitionMetal
                | ElementCategory::PostTransitionMetal
                | ElementCategory::Lanthanide
                | ElementCategory::Actinide
        )
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Unknown element category '{0}'")]
pub struct ParseCategoryError(pub String);

impl FromStr for ElementCategory {
    type Err = ParseCategoryError;

    /// Parses a category name.
    ///
    /// Matching is case-insensitive, and underscores or spaces are accepted in place of
    /// hyphens, so `"Noble Gas"`, `"noble_gas"` and `"noble-gas"` are all equivalent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                other => other.to_ascii_lowercase(),
            })
            .collect();
        ElementCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// An immutable periodic table entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    /// The chemical symbol (e.g. "Na"), unique across the table.
    pub symbol: &'static str,
    /// The English element name (e.g. "Sodium").
    pub name: &'static str,
    /// The atomic number, unique and starting at 1.
    pub atomic_number: u8,
    pub category: ElementCategory,
    /// Standard atomic mass in g/mol.
    pub atomic_mass: f64,
}

impl Element {
    pub const fn new(
        atomic_number: u8,
        symbol: &'static str,
        name: &'static str,
        atomic_mass: f64,
        category: ElementCategory,
    ) -> Self {
        Self {
            symbol,
            name,
            atomic_number,
            category,
            atomic_mass,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, Z={})", self.name, self.symbol, self.atomic_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_parses_every_canonical_name() {
        for category in ElementCategory::ALL {
            assert_eq!(ElementCategory::from_str(category.as_str()), Ok(category));
        }
    }

    #[test]
    fn from_str_is_case_insensitive_and_accepts_separators() {
        assert_eq!(
            ElementCategory::from_str("Noble Gas"),
            Ok(ElementCategory::NobleGas)
        );
        assert_eq!(
            ElementCategory::from_str("ALKALI_METAL"),
            Ok(ElementCategory::AlkaliMetal)
        );
        assert_eq!(
            ElementCategory::from_str(" post-transition-metal "),
            Ok(ElementCategory::PostTransitionMetal)
        );
    }

    #[test]
    fn from_str_returns_err_for_invalid_category() {
        assert_eq!(
            ElementCategory::from_str("gas"),
            Err(ParseCategoryError("gas".to_string()))
        );
        assert!(ElementCategory::from_str("").is_err());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(ElementCategory::AlkalineEarthMetal.to_string(), "alkaline-earth-metal");
        assert_eq!(ElementCategory::default().to_string(), "unknown");
    }

    #[test]
    fn is_metal_covers_metal_families_only() {
        assert!(ElementCategory::AlkaliMetal.is_metal());
        assert!(ElementCategory::Lanthanide.is_metal());
        assert!(!ElementCategory::Metalloid.is_metal());
        assert!(!ElementCategory::Halogen.is_metal());
        assert!(!ElementCategory::Unknown.is_metal());
    }

    #[test]
    fn element_display_shows_name_symbol_and_number() {
        let sodium = Element::new(11, "Na", "Sodium", 22.990, ElementCategory::AlkaliMetal);
        assert_eq!(sodium.to_string(), "Sodium (Na, Z=11)");
    }
}
