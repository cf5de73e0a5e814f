use crate::core::chemistry::reaction::CombinationSource;
use crate::core::models::reaction::{
    AnimationCategory, ReactionCombination, ReactionResult, split_pair_key,
};
use phf::{Map, phf_map};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use AnimationCategory::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticCombination {
    pub result: &'static str,
    pub description: &'static str,
    pub animation: AnimationCategory,
}

impl From<&StaticCombination> for ReactionCombination {
    fn from(combo: &StaticCombination) -> Self {
        ReactionCombination::new(combo.result, combo.description, combo.animation)
    }
}

/// Curated element pairs, keyed by the literal `"A-B"` string they were authored under.
///
/// Each unordered pair appears under exactly one orientation.
static BUILTIN_REACTIONS: Map<&'static str, StaticCombination> = phf_map! {
    "Na-Cl" => StaticCombination {
        result: "NaCl (Table Salt)",
        description: "Sodium gives its outer electron to chlorine, forming an ionic crystal lattice of sodium chloride.",
        animation: Crystallization,
    },
    "H-O" => StaticCombination {
        result: "H2O (Water)",
        description: "Hydrogen burns in oxygen with a sharp pop, releasing energy and forming water vapor.",
        animation: Explosion,
    },
    "Na-O" => StaticCombination {
        result: "Na2O (Sodium Oxide)",
        description: "Sodium tarnishes rapidly in air and burns with a yellow flame to form sodium oxide.",
        animation: Combustion,
    },
    "K-Cl" => StaticCombination {
        result: "KCl (Potassium Chloride)",
        description: "Potassium reacts vigorously with chlorine to form colorless potassium chloride crystals.",
        animation: Crystallization,
    },
    "K-O" => StaticCombination {
        result: "K2O (Potassium Oxide)",
        description: "Potassium ignites in oxygen with a lilac flame, producing potassium oxide.",
        animation: Combustion,
    },
    "Li-O" => StaticCombination {
        result: "Li2O (Lithium Oxide)",
        description: "Lithium burns with a crimson flame to form white lithium oxide.",
        animation: Combustion,
    },
    "Mg-O" => StaticCombination {
        result: "MgO (Magnesium Oxide)",
        description: "Magnesium burns with a blinding white light, leaving a white ash of magnesium oxide.",
        animation: Combustion,
    },
    "Ca-O" => StaticCombination {
        result: "CaO (Quicklime)",
        description: "Calcium burns with an orange-red flame to produce calcium oxide, known as quicklime.",
        animation: Combustion,
    },
    "Ba-O" => StaticCombination {
        result: "BaO (Barium Oxide)",
        description: "Barium burns with a pale green flame and forms barium oxide.",
        animation: Combustion,
    },
    "Al-O" => StaticCombination {
        result: "Al2O3 (Aluminum Oxide)",
        description: "Powdered aluminum burns intensely in oxygen, forming a hard aluminum oxide layer.",
        animation: Combustion,
    },
    "P-O" => StaticCombination {
        result: "P4O10 (Phosphorus Pentoxide)",
        description: "White phosphorus ignites spontaneously in air, producing dense white clouds of phosphorus pentoxide.",
        animation: Combustion,
    },
    "Fe-O" => StaticCombination {
        result: "Fe2O3 (Rust)",
        description: "Iron slowly oxidizes to reddish-brown iron(III) oxide, better known as rust.",
        animation: Crystallization,
    },
    "Cu-O" => StaticCombination {
        result: "CuO (Copper(II) Oxide)",
        description: "Heated copper develops a black coating of copper(II) oxide.",
        animation: Crystallization,
    },
    "Zn-O" => StaticCombination {
        result: "ZnO (Zinc Oxide)",
        description: "Zinc burns with a blue-green flame, forming white zinc oxide powder.",
        animation: Crystallization,
    },
    "Si-O" => StaticCombination {
        result: "SiO2 (Silicon Dioxide)",
        description: "Silicon combines with oxygen to form silicon dioxide, the main component of sand and quartz.",
        animation: Crystallization,
    },
    "C-O" => StaticCombination {
        result: "CO2 (Carbon Dioxide)",
        description: "Carbon burns in oxygen to release carbon dioxide gas.",
        animation: Gas,
    },
    "S-O" => StaticCombination {
        result: "SO2 (Sulfur Dioxide)",
        description: "Sulfur burns with a blue flame, giving off choking sulfur dioxide gas.",
        animation: Gas,
    },
    "N-O" => StaticCombination {
        result: "NO2 (Nitrogen Dioxide)",
        description: "At high temperature nitrogen and oxygen combine, eventually forming brown nitrogen dioxide gas.",
        animation: Gas,
    },
    "N-H" => StaticCombination {
        result: "NH3 (Ammonia)",
        description: "Nitrogen and hydrogen combine under pressure over a catalyst to form ammonia gas.",
        animation: Gas,
    },
    "C-H" => StaticCombination {
        result: "CH4 (Methane)",
        description: "Carbon and hydrogen form methane, the simplest hydrocarbon.",
        animation: Gas,
    },
    "H-Cl" => StaticCombination {
        result: "HCl (Hydrogen Chloride)",
        description: "Hydrogen and chlorine react explosively in sunlight to form hydrogen chloride gas.",
        animation: Explosion,
    },
    "H-F" => StaticCombination {
        result: "HF (Hydrogen Fluoride)",
        description: "Hydrogen and fluorine react violently even in the dark, forming hydrogen fluoride.",
        animation: Explosion,
    },
    "H-Br" => StaticCombination {
        result: "HBr (Hydrogen Bromide)",
        description: "Hydrogen and bromine vapor combine when heated to form hydrogen bromide gas.",
        animation: Gas,
    },
    "H-S" => StaticCombination {
        result: "H2S (Hydrogen Sulfide)",
        description: "Hydrogen passed over hot sulfur forms hydrogen sulfide, a gas with a rotten egg smell.",
        animation: Bubble,
    },
    "Li-F" => StaticCombination {
        result: "LiF (Lithium Fluoride)",
        description: "Lithium and fluorine form lithium fluoride, one of the most stable ionic compounds.",
        animation: Crystallization,
    },
    "Na-F" => StaticCombination {
        result: "NaF (Sodium Fluoride)",
        description: "Sodium and fluorine react to form sodium fluoride, used in toothpaste.",
        animation: Crystallization,
    },
    "Na-Br" => StaticCombination {
        result: "NaBr (Sodium Bromide)",
        description: "Sodium reacts with bromine to form white sodium bromide crystals.",
        animation: Crystallization,
    },
    "K-Br" => StaticCombination {
        result: "KBr (Potassium Bromide)",
        description: "Potassium and bromine react to form potassium bromide crystals.",
        animation: Crystallization,
    },
    "K-I" => StaticCombination {
        result: "KI (Potassium Iodide)",
        description: "Potassium and iodine combine to form potassium iodide, a white crystalline salt.",
        animation: Crystallization,
    },
    "Rb-Cl" => StaticCombination {
        result: "RbCl (Rubidium Chloride)",
        description: "Rubidium reacts very vigorously with chlorine to form rubidium chloride.",
        animation: Crystallization,
    },
    "Cs-F" => StaticCombination {
        result: "CsF (Cesium Fluoride)",
        description: "Cesium and fluorine, the most reactive metal and nonmetal, combine explosively.",
        animation: Explosion,
    },
    "Mg-Cl" => StaticCombination {
        result: "MgCl2 (Magnesium Chloride)",
        description: "Magnesium burns in chlorine to form magnesium chloride.",
        animation: Crystallization,
    },
    "Ca-Cl" => StaticCombination {
        result: "CaCl2 (Calcium Chloride)",
        description: "Calcium reacts with chlorine to form calcium chloride, used for de-icing roads.",
        animation: Crystallization,
    },
    "Al-Cl" => StaticCombination {
        result: "AlCl3 (Aluminum Chloride)",
        description: "Aluminum reacts with chlorine, producing aluminum chloride that sublimes as white fumes.",
        animation: Crystallization,
    },
    "Fe-Cl" => StaticCombination {
        result: "FeCl3 (Iron(III) Chloride)",
        description: "Hot iron wool glows in chlorine and forms brown iron(III) chloride.",
        animation: Combustion,
    },
    "Ag-Cl" => StaticCombination {
        result: "AgCl (Silver Chloride)",
        description: "Silver and chloride ions form an insoluble white precipitate of silver chloride.",
        animation: Precipitation,
    },
    "Pb-I" => StaticCombination {
        result: "PbI2 (Lead(II) Iodide)",
        description: "Lead and iodide ions form a bright yellow precipitate of lead(II) iodide.",
        animation: Precipitation,
    },
    "Fe-S" => StaticCombination {
        result: "FeS (Iron(II) Sulfide)",
        description: "Heated iron filings and sulfur glow red and form black iron(II) sulfide.",
        animation: Precipitation,
    },
    "Zn-S" => StaticCombination {
        result: "ZnS (Zinc Sulfide)",
        description: "Zinc and sulfur react in a bright flash to form zinc sulfide.",
        animation: Explosion,
    },
    "Cu-S" => StaticCombination {
        result: "CuS (Copper(II) Sulfide)",
        description: "Copper and sulfur form black copper sulfide.",
        animation: Precipitation,
    },
};

/// The built-in reaction table as a [`CombinationSource`], backed by the static map.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinReactions;

impl CombinationSource for BuiltinReactions {
    fn lookup(&self, key: &str) -> Option<ReactionResult> {
        BUILTIN_REACTIONS
            .get(key)
            .map(|combo| ReactionResult::from(&ReactionCombination::from(combo)))
    }
}

pub fn builtin_len() -> usize {
    BUILTIN_REACTIONS.len()
}

#[derive(Debug, Error)]
pub enum ReactionTableError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid reaction key '{key}': expected two symbols joined by '-', e.g. 'Na-Cl'")]
    InvalidKey { key: String },
}

/// An owned, extendable reaction table.
///
/// Keys are stored exactly as authored (`"A-B"`); orientation is resolved at lookup time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReactionTable {
    entries: BTreeMap<String, ReactionCombination>,
}

impl ReactionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let entries = BUILTIN_REACTIONS
            .entries()
            .map(|(key, combo)| (key.to_string(), ReactionCombination::from(combo)))
            .collect();
        Self { entries }
    }

    /// Loads a table from a TOML file of the form
    ///
    /// ```toml
    /// ["Na-Cl"]
    /// result = "NaCl (Table Salt)"
    /// description = "..."
    /// animation = "crystallization"
    /// ```
    pub fn load(path: &Path) -> Result<Self, ReactionTableError> {
        debug!("Loading reaction table from {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| ReactionTableError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ReactionTableError::Toml { source, .. } => ReactionTableError::Toml {
                path: path.to_string_lossy().to_string(),
                source,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ReactionTableError> {
        let raw: BTreeMap<String, ReactionCombination> =
            toml::from_str(content).map_err(|e| ReactionTableError::Toml {
                path: String::from("<string>"),
                source: e,
            })?;
        let mut table = Self::new();
        for (key, combo) in raw {
            table.insert(&key, combo)?;
        }
        let asymmetric = table.asymmetric_pairs();
        if !asymmetric.is_empty() {
            warn!(
                "Reaction table defines {} pair(s) under both orderings with different content; forward keys win.",
                asymmetric.len()
            );
        }
        Ok(table)
    }

    pub fn insert(
        &mut self,
        key: &str,
        combination: ReactionCombination,
    ) -> Result<Option<ReactionCombination>, ReactionTableError> {
        if split_pair_key(key).is_none() {
            return Err(ReactionTableError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.entries.insert(key.to_string(), combination))
    }

    /// Merges `other` into this table; keys of `other` replace identical keys here.
    pub fn extend(&mut self, other: ReactionTable) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, key: &str) -> Option<&ReactionCombination> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReactionCombination)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs defined under both orientations whose content differs.
    ///
    /// Each offending pair is reported once, as `(forward_key, reversed_key)` with the
    /// lexicographically smaller key first.
    pub fn asymmetric_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter_map(|(key, combo)| {
                let (a, b) = split_pair_key(key)?;
                let reversed = format!("{}-{}", b, a);
                if *key >= reversed {
                    return None;
                }
                match self.entries.get(&reversed) {
                    Some(other) if other != combo => Some((key.clone(), reversed)),
                    _ => None,
                }
            })
            .collect()
    }
}

impl CombinationSource for ReactionTable {
    fn lookup(&self, key: &str) -> Option<ReactionResult> {
        self.entries.get(key).map(ReactionResult::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::elements;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn builtin_keys_are_valid_element_pairs() {
        for key in BUILTIN_REACTIONS.keys() {
            let (a, b) = split_pair_key(key).expect("malformed builtin key");
            assert!(elements::is_known_symbol(a), "unknown symbol {} in {}", a, key);
            assert!(elements::is_known_symbol(b), "unknown symbol {} in {}", b, key);
        }
    }

    #[test]
    fn builtin_table_has_each_pair_under_one_orientation_only() {
        for key in BUILTIN_REACTIONS.keys() {
            let (a, b) = split_pair_key(key).unwrap();
            let reversed = format!("{}-{}", b, a);
            assert!(
                !BUILTIN_REACTIONS.contains_key(reversed.as_str()),
                "{} is also defined as {}",
                key,
                reversed
            );
        }
        assert!(ReactionTable::builtin().asymmetric_pairs().is_empty());
    }

    #[test]
    fn owned_builtin_matches_static_table() {
        let table = ReactionTable::builtin();
        assert_eq!(table.len(), builtin_len());
        assert_eq!(
            table.lookup("Na-Cl"),
            BuiltinReactions.lookup("Na-Cl")
        );
    }

    #[test]
    fn insert_rejects_malformed_keys() {
        let mut table = ReactionTable::new();
        let combo = ReactionCombination::new("X", "Y", AnimationCategory::Fade);
        assert!(matches!(
            table.insert("NaCl", combo.clone()),
            Err(ReactionTableError::InvalidKey { .. })
        ));
        assert!(table.insert("Na-Cl", combo).unwrap().is_none());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn asymmetric_pairs_reports_conflicting_orientations_once() {
        let mut table = ReactionTable::new();
        table
            .insert("H-O", ReactionCombination::new("H2O", "Water.", Explosion))
            .unwrap();
        table
            .insert("O-H", ReactionCombination::new("OH", "Hydroxyl.", Gas))
            .unwrap();
        table
            .insert("Na-Cl", ReactionCombination::new("NaCl", "Salt.", Crystallization))
            .unwrap();
        table
            .insert("Cl-Na", ReactionCombination::new("NaCl", "Salt.", Crystallization))
            .unwrap();
        assert_eq!(
            table.asymmetric_pairs(),
            vec![("H-O".to_string(), "O-H".to_string())]
        );
    }

    #[test]
    fn load_succeeds_with_valid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reactions.toml");
        fs::write(
            &path,
            r#"
            ["Zn-H"]
            result = "ZnH2"
            description = "Zinc hydride, unstable."
            animation = "bubble"

            ["Na-OH"]
            result = "NaOH"
            description = "Caustic soda."
            animation = "neutralization"
            "#,
        )
        .unwrap();

        let table = ReactionTable::load(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("Zn-H").unwrap().animation, Bubble);
        assert_eq!(table.get("Na-OH").unwrap().animation, Neutralization);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = ReactionTable::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ReactionTableError::Io { .. })));
    }

    #[test]
    fn load_fails_for_unknown_animation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(
            &path,
            "[\"Na-Cl\"]\nresult = \"NaCl\"\ndescription = \"d\"\nanimation = \"sparkle\"\n",
        )
        .unwrap();
        let result = ReactionTable::load(&path);
        assert!(
            matches!(result, Err(ReactionTableError::Toml { path: p, .. }) if p.ends_with("bad.toml"))
        );
    }

    #[test]
    fn load_fails_for_malformed_key() {
        let result = ReactionTable::from_toml_str(
            "[NaCl]\nresult = \"NaCl\"\ndescription = \"d\"\nanimation = \"fade\"\n",
        );
        assert!(matches!(result, Err(ReactionTableError::InvalidKey { key }) if key == "NaCl"));
    }

    #[test]
    fn extend_overrides_existing_keys() {
        let mut table = ReactionTable::builtin();
        let mut custom = ReactionTable::new();
        custom
            .insert("Na-Cl", ReactionCombination::new("Salt", "Custom.", Fade))
            .unwrap();
        table.extend(custom);
        assert_eq!(table.len(), builtin_len());
        assert_eq!(table.get("Na-Cl").unwrap().result, "Salt");
    }
}
