use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Whether a substance contributes acidity or basicity to a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubstanceKind {
    Acid,
    Base,
}

impl SubstanceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubstanceKind::Acid => "acid",
            SubstanceKind::Base => "base",
        }
    }
}

impl fmt::Display for SubstanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubstanceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "acid" | "acids" => Ok(SubstanceKind::Acid),
            "base" | "bases" => Ok(SubstanceKind::Base),
            other => Err(format!("unknown substance kind '{}'", other)),
        }
    }
}

/// Qualitative dissociation strength.
///
/// This is a proxy multiplier rather than an equilibrium constant: strong substances count
/// at full concentration, weak ones at a tenth of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Strong,
    Weak,
}

impl Strength {
    #[inline]
    pub fn factor(&self) -> f64 {
        match self {
            Strength::Strong => 1.0,
            Strength::Weak => 0.1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Strong => "strong",
            Strength::Weak => "weak",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An acid or base catalog entry.
///
/// Catalog entries are immutable once loaded; a solution holds its own copies so that a
/// per-solution concentration can be applied with [`AcidBaseSubstance::with_concentration`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AcidBaseSubstance {
    pub id: String,
    pub name: String,
    pub formula: String,
    pub kind: SubstanceKind,
    pub strength: Strength,
    /// Molarity-like concentration. Not validated here.
    pub concentration: f64,
    /// Display color, usually a CSS hex string.
    pub color: String,
}

impl AcidBaseSubstance {
    pub fn new(
        id: &str,
        name: &str,
        formula: &str,
        kind: SubstanceKind,
        strength: Strength,
        concentration: f64,
        color: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            formula: formula.to_string(),
            kind,
            strength,
            concentration,
            color: color.to_string(),
        }
    }

    pub fn with_concentration(&self, concentration: f64) -> Self {
        Self {
            concentration,
            ..self.clone()
        }
    }

    /// Concentration scaled by the strength factor.
    #[inline]
    pub fn weighted_concentration(&self) -> f64 {
        self.concentration * self.strength.factor()
    }
}
