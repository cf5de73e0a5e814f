//! # Chemistry Module
//!
//! The pure computations of Elementa. None of these functions fail on catalog-sourced
//! input, and none of them keep state between calls.
//!
//! - [`reaction`] - Pair reaction resolution with forward-then-reversed key lookup
//! - [`ph`] - Net-acidity pH heuristic and color bucket classification
//! - [`molar_mass`] - Formula parsing and molar mass from the periodic table

pub mod molar_mass;
pub mod ph;
pub mod reaction;
