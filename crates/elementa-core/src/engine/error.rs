use crate::core::models::substance::SubstanceKind;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("Unknown substance id '{0}'")]
    UnknownSubstance(String),

    #[error("Substance '{id}' cannot be added to the {expected} list")]
    KindMismatch { id: String, expected: SubstanceKind },

    #[error("No {kind} at index {index} (solution holds {len})")]
    IndexOutOfRange {
        kind: SubstanceKind,
        index: usize,
        len: usize,
    },

    #[error("A reaction needs at least two elements, got {given}")]
    NotEnoughReactants { given: usize },

    #[error("Invalid concentration {value} for substance '{id}': must be positive")]
    InvalidConcentration { id: String, value: f64 },
}
