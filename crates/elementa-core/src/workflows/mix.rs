use crate::core::data::substances::SubstanceCatalog;
use crate::core::models::substance::{AcidBaseSubstance, SubstanceKind};
use crate::engine::config::MixConfig;
use crate::engine::error::EngineError;
use crate::engine::solution::Solution;
use tracing::{debug, info, instrument};

/// A catalog id with an optional concentration override.
#[derive(Debug, Clone, PartialEq)]
pub struct Portion {
    pub id: String,
    pub concentration: Option<f64>,
}

impl Portion {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            concentration: None,
        }
    }

    pub fn with_concentration(id: &str, concentration: f64) -> Self {
        Self {
            id: id.to_string(),
            concentration: Some(concentration),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MixRequest {
    pub name: Option<String>,
    pub acids: Vec<Portion>,
    pub bases: Vec<Portion>,
}

/// Builds a solution from catalog ids.
///
/// Concentration precedence: the portion's own value, then the config default, then the
/// catalog entry. Substances are added in request order, acids first.
#[instrument(skip_all, name = "mix_workflow")]
pub fn run(
    catalog: &SubstanceCatalog,
    request: &MixRequest,
    config: &MixConfig,
) -> Result<Solution, EngineError> {
    let mut solution = match &request.name {
        Some(name) => Solution::new(name),
        None => Solution::default(),
    };

    for (portions, kind) in [
        (&request.acids, SubstanceKind::Acid),
        (&request.bases, SubstanceKind::Base),
    ] {
        for portion in portions {
            let substance = prepare(catalog, portion, kind, config)?;
            debug!(
                "Adding {} '{}' at {}",
                kind, substance.id, substance.concentration
            );
            solution.add(substance);
        }
    }

    info!(
        "Mixed '{}': pH {:.2} ({})",
        solution.name(),
        solution.ph(),
        solution.color_bucket()
    );
    Ok(solution)
}

fn prepare(
    catalog: &SubstanceCatalog,
    portion: &Portion,
    kind: SubstanceKind,
    config: &MixConfig,
) -> Result<AcidBaseSubstance, EngineError> {
    let entry = catalog
        .get(&portion.id)
        .ok_or_else(|| EngineError::UnknownSubstance(portion.id.clone()))?;
    if entry.kind != kind {
        return Err(EngineError::KindMismatch {
            id: portion.id.clone(),
            expected: kind,
        });
    }

    let concentration = portion
        .concentration
        .or(config.default_concentration)
        .unwrap_or(entry.concentration);
    if config.reject_non_positive && !(concentration.is_finite() && concentration > 0.0) {
        return Err(EngineError::InvalidConcentration {
            id: portion.id.clone(),
            value: concentration,
        });
    }
    Ok(entry.with_concentration(concentration))
}
