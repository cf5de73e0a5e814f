use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

pub const NO_REACTION: &str = "No Reaction";

/// Presentation-only tag selecting the visual effect for a reaction.
///
/// It carries no chemical meaning beyond a rough grading of visual intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationCategory {
    Explosion,
    Fade,
    Bubble,
    Gas,
    Crystallization,
    Precipitation,
    Combustion,
    Neutralization,
}

impl AnimationCategory {
    pub const ALL: [AnimationCategory; 8] = [
        AnimationCategory::Explosion,
        AnimationCategory::Fade,
        AnimationCategory::Bubble,
        AnimationCategory::Gas,
        AnimationCategory::Crystallization,
        AnimationCategory::Precipitation,
        AnimationCategory::Combustion,
        AnimationCategory::Neutralization,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationCategory::Explosion => "explosion",
            AnimationCategory::Fade => "fade",
            AnimationCategory::Bubble => "bubble",
            AnimationCategory::Gas => "gas",
            AnimationCategory::Crystallization => "crystallization",
            AnimationCategory::Precipitation => "precipitation",
            AnimationCategory::Combustion => "combustion",
            AnimationCategory::Neutralization => "neutralization",
        }
    }
}

impl fmt::Display for AnimationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimationCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        AnimationCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == lowered)
            .ok_or_else(|| format!("unknown animation category '{}'", s))
    }
}

/// The value stored in a reaction table for one ordered pair key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReactionCombination {
    /// Short headline, e.g. "NaCl (Table Salt)".
    pub result: String,
    /// Explanation shown below the headline.
    pub description: String,
    pub animation: AnimationCategory,
}

impl ReactionCombination {
    pub fn new(result: &str, description: &str, animation: AnimationCategory) -> Self {
        Self {
            result: result.to_string(),
            description: description.to_string(),
            animation,
        }
    }
}

/// The answer handed back to callers of the pair resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionResult {
    pub result: String,
    pub description: String,
    pub animation: AnimationCategory,
}

impl ReactionResult {
    /// The fall-through result for pairs absent from the table.
    pub fn no_reaction(a: &str, b: &str) -> Self {
        Self {
            result: NO_REACTION.to_string(),
            description: format!("{} and {} do not react under normal conditions.", a, b),
            animation: AnimationCategory::Fade,
        }
    }

    pub fn is_no_reaction(&self) -> bool {
        self.result == NO_REACTION
    }
}

impl From<&ReactionCombination> for ReactionResult {
    fn from(combo: &ReactionCombination) -> Self {
        Self {
            result: combo.result.clone(),
            description: combo.description.clone(),
            animation: combo.animation,
        }
    }
}

/// Builds the ordered lookup key `"A-B"` for two element symbols.
pub fn pair_key(a: &str, b: &str) -> String {
    format!("{}-{}", a, b)
}

/// Splits an `"A-B"` key back into its two symbols.
///
/// Returns `None` unless the key holds exactly two non-empty symbols.
pub fn split_pair_key(key: &str) -> Option<(&str, &str)> {
    let (a, b) = key.split_once('-')?;
    if a.is_empty() || b.is_empty() || b.contains('-') {
        return None;
    }
    Some((a, b))
}
