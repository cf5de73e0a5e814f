use crate::core::models::substance::{AcidBaseSubstance, Strength, SubstanceKind};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use Strength::{Strong, Weak};
use SubstanceKind::{Acid, Base};

/// (id, name, formula, kind, strength, default concentration, display color)
type BuiltinEntry = (
    &'static str,
    &'static str,
    &'static str,
    SubstanceKind,
    Strength,
    f64,
    &'static str,
);

static BUILTIN_SUBSTANCES: &[BuiltinEntry] = &[
    // --- Strong acids ---
    ("hcl", "Hydrochloric Acid", "HCl", Acid, Strong, 1.0, "#ef4444"),
    ("hno3", "Nitric Acid", "HNO3", Acid, Strong, 1.0, "#f97316"),
    ("h2so4", "Sulfuric Acid", "H2SO4", Acid, Strong, 1.0, "#dc2626"),
    ("hbr", "Hydrobromic Acid", "HBr", Acid, Strong, 1.0, "#b91c1c"),
    ("hi", "Hydroiodic Acid", "HI", Acid, Strong, 1.0, "#991b1b"),
    ("hclo4", "Perchloric Acid", "HClO4", Acid, Strong, 1.0, "#7f1d1d"),
    // --- Weak acids ---
    ("ch3cooh", "Acetic Acid", "CH3COOH", Acid, Weak, 1.0, "#fbbf24"),
    ("hf", "Hydrofluoric Acid", "HF", Acid, Weak, 1.0, "#f59e0b"),
    ("h2co3", "Carbonic Acid", "H2CO3", Acid, Weak, 0.5, "#fcd34d"),
    ("h3po4", "Phosphoric Acid", "H3PO4", Acid, Weak, 1.0, "#fb923c"),
    ("hcooh", "Formic Acid", "HCOOH", Acid, Weak, 1.0, "#fdba74"),
    ("citric", "Citric Acid", "C6H8O7", Acid, Weak, 0.5, "#fde047"),
    // --- Strong bases ---
    ("naoh", "Sodium Hydroxide", "NaOH", Base, Strong, 1.0, "#3b82f6"),
    ("koh", "Potassium Hydroxide", "KOH", Base, Strong, 1.0, "#2563eb"),
    ("lioh", "Lithium Hydroxide", "LiOH", Base, Strong, 1.0, "#1d4ed8"),
    ("caoh2", "Calcium Hydroxide", "Ca(OH)2", Base, Strong, 0.5, "#1e40af"),
    ("baoh2", "Barium Hydroxide", "Ba(OH)2", Base, Strong, 0.5, "#1e3a8a"),
    // --- Weak bases ---
    ("nh3", "Ammonia", "NH3", Base, Weak, 1.0, "#60a5fa"),
    ("nahco3", "Sodium Bicarbonate", "NaHCO3", Base, Weak, 1.0, "#93c5fd"),
    ("mgoh2", "Magnesium Hydroxide", "Mg(OH)2", Base, Weak, 0.5, "#bfdbfe"),
    ("aloh3", "Aluminum Hydroxide", "Al(OH)3", Base, Weak, 0.5, "#a5b4fc"),
    ("ch3nh2", "Methylamine", "CH3NH2", Base, Weak, 1.0, "#818cf8"),
];

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Duplicate substance id '{id}' in '{path}'")]
    DuplicateId { path: String, id: String },
}

/// An ordered acid/base catalog with lookup by id.
///
/// Iteration follows insertion order. Inserting an id that already exists replaces the
/// entry in place, keeping its original position.
#[derive(Debug, Clone, Default)]
pub struct SubstanceCatalog {
    entries: Vec<AcidBaseSubstance>,
    index: HashMap<String, usize>,
}

impl SubstanceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog shipped with the library.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for &(id, name, formula, kind, strength, concentration, color) in BUILTIN_SUBSTANCES {
            catalog.insert(AcidBaseSubstance::new(
                id,
                name,
                formula,
                kind,
                strength,
                concentration,
                color,
            ));
        }
        catalog
    }

    /// Reads a catalog from a CSV file with the header
    /// `id,name,formula,kind,strength,concentration,color`.
    pub fn load_csv(path: &Path) -> Result<Self, CatalogLoadError> {
        debug!("Loading substance catalog from {:?}", path);
        let path_str = path.to_string_lossy().to_string();
        let file = std::fs::File::open(path).map_err(|e| CatalogLoadError::Io {
            path: path_str.clone(),
            source: e,
        })?;
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

        let mut catalog = Self::new();
        for result in reader.deserialize::<AcidBaseSubstance>() {
            let record = result.map_err(|e| CatalogLoadError::Csv {
                path: path_str.clone(),
                source: e,
            })?;
            if catalog.contains(&record.id) {
                return Err(CatalogLoadError::DuplicateId {
                    path: path_str,
                    id: record.id,
                });
            }
            catalog.insert(record);
        }
        debug!("Loaded {} substance(s) from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    pub fn insert(&mut self, substance: AcidBaseSubstance) {
        match self.index.get(&substance.id) {
            Some(&position) => self.entries[position] = substance,
            None => {
                self.index.insert(substance.id.clone(), self.entries.len());
                self.entries.push(substance);
            }
        }
    }

    /// Merges `other` into this catalog; entries of `other` win on id collisions.
    pub fn extend(&mut self, other: SubstanceCatalog) {
        for substance in other.entries {
            self.insert(substance);
        }
    }

    pub fn get(&self, id: &str) -> Option<&AcidBaseSubstance> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AcidBaseSubstance> {
        self.entries.iter()
    }

    pub fn of_kind(&self, kind: SubstanceKind) -> impl Iterator<Item = &AcidBaseSubstance> {
        self.entries.iter().filter(move |s| s.kind == kind)
    }

    pub fn acids(&self) -> impl Iterator<Item = &AcidBaseSubstance> {
        self.of_kind(SubstanceKind::Acid)
    }

    pub fn bases(&self) -> impl Iterator<Item = &AcidBaseSubstance> {
        self.of_kind(SubstanceKind::Base)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const HEADER: &str = "id,name,formula,kind,strength,concentration,color";

    #[test]
    fn builtin_catalog_has_unique_ids_and_positive_concentrations() {
        let catalog = SubstanceCatalog::builtin();
        assert_eq!(catalog.len(), BUILTIN_SUBSTANCES.len());
        assert!(catalog.iter().all(|s| s.concentration > 0.0));
    }

    #[test]
    fn builtin_catalog_contains_both_strengths_of_each_kind() {
        let catalog = SubstanceCatalog::builtin();
        for kind in [SubstanceKind::Acid, SubstanceKind::Base] {
            assert!(catalog.of_kind(kind).any(|s| s.strength == Strength::Strong));
            assert!(catalog.of_kind(kind).any(|s| s.strength == Strength::Weak));
        }
        assert_eq!(catalog.get("hcl").map(|s| s.formula.as_str()), Some("HCl"));
        assert_eq!(catalog.get("naoh").map(|s| s.kind), Some(SubstanceKind::Base));
        assert!(catalog.get("HCL").is_none());
    }

    #[test]
    fn insert_replaces_existing_id_in_place() {
        let mut catalog = SubstanceCatalog::builtin();
        let first_id = catalog.iter().next().unwrap().id.clone();
        let replacement = catalog.get(&first_id).unwrap().with_concentration(3.0);
        catalog.insert(replacement);
        assert_eq!(catalog.len(), BUILTIN_SUBSTANCES.len());
        assert_eq!(catalog.iter().next().unwrap().concentration, 3.0);
    }

    #[test]
    fn load_csv_succeeds_with_valid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.csv");
        fs::write(
            &path,
            format!(
                "{}\nvinegar, Vinegar, CH3COOH, acid, weak, 0.8, #fef3c7\nlye,Lye,NaOH,base,strong,2.0,#1d4ed8\n",
                HEADER
            ),
        )
        .unwrap();

        let catalog = SubstanceCatalog::load_csv(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        let vinegar = catalog.get("vinegar").unwrap();
        assert_eq!(vinegar.kind, SubstanceKind::Acid);
        assert_eq!(vinegar.strength, Strength::Weak);
        assert_eq!(vinegar.concentration, 0.8);
        assert_eq!(catalog.bases().count(), 1);
    }

    #[test]
    fn load_csv_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = SubstanceCatalog::load_csv(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(CatalogLoadError::Io { .. })));
    }

    #[test]
    fn load_csv_fails_for_unknown_strength() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, format!("{}\nx,X,X,acid,medium,1.0,#000000\n", HEADER)).unwrap();
        let result = SubstanceCatalog::load_csv(&path);
        assert!(matches!(result, Err(CatalogLoadError::Csv { .. })));
    }

    #[test]
    fn load_csv_rejects_duplicate_ids() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dup.csv");
        fs::write(
            &path,
            format!(
                "{}\nx,X,X,acid,weak,1.0,#000000\nx,X2,X,base,weak,1.0,#000000\n",
                HEADER
            ),
        )
        .unwrap();
        let result = SubstanceCatalog::load_csv(&path);
        assert!(matches!(result, Err(CatalogLoadError::DuplicateId { id, .. }) if id == "x"));
    }

    #[test]
    fn extend_overrides_matching_ids_and_appends_new_ones() {
        let mut catalog = SubstanceCatalog::builtin();
        let mut extra = SubstanceCatalog::new();
        extra.insert(catalog.get("hcl").unwrap().with_concentration(0.01));
        extra.insert(AcidBaseSubstance::new(
            "lemon",
            "Lemon Juice",
            "C6H8O7",
            SubstanceKind::Acid,
            Strength::Weak,
            0.3,
            "#fef08a",
        ));
        catalog.extend(extra);
        assert_eq!(catalog.len(), BUILTIN_SUBSTANCES.len() + 1);
        assert_eq!(catalog.get("hcl").unwrap().concentration, 0.01);
        assert!(catalog.contains("lemon"));
    }
}
