use crate::core::chemistry::reaction::{CombinationSource, resolve_with};
use crate::core::models::reaction::ReactionResult;
use crate::engine::error::EngineError;
use tracing::{debug, instrument, warn};

/// The zone accepts up to this many elements; only the first two react.
pub const ZONE_CAPACITY: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneOutcome {
    pub reactants: (String, String),
    /// Elements placed after the first two, in placement order.
    pub ignored: Vec<String>,
    pub result: ReactionResult,
}

/// Resolves the reaction for the elements placed in a reaction zone.
///
/// The first two symbols react; the rest are reported back as ignored. Placing more than
/// [`ZONE_CAPACITY`] elements is allowed but logged.
#[instrument(skip(source), name = "reaction_zone")]
pub fn run<S>(source: &S, symbols: &[&str]) -> Result<ZoneOutcome, EngineError>
where
    S: CombinationSource + ?Sized,
{
    let (a, b) = match symbols {
        [a, b, ..] => (*a, *b),
        _ => {
            return Err(EngineError::NotEnoughReactants {
                given: symbols.len(),
            });
        }
    };
    if symbols.len() > ZONE_CAPACITY {
        warn!(
            "Reaction zone holds {} elements, more than its capacity of {}.",
            symbols.len(),
            ZONE_CAPACITY
        );
    }

    let result = resolve_with(source, a, b);
    debug!(
        "Resolved {} + {} -> '{}' ({})",
        a, b, result.result, result.animation
    );

    Ok(ZoneOutcome {
        reactants: (a.to_string(), b.to_string()),
        ignored: symbols[2..].iter().map(|s| s.to_string()).collect(),
        result,
    })
}
