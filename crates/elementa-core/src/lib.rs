//! # Elementa Core Library
//!
//! Static chemistry catalogs and the small deterministic models built on top of them:
//! a pair reaction resolver for "reaction zone" style experiments and a simplified
//! pH estimator for acid-base mixing.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture.
//!
//! - **[`core`]: The Foundation.** Immutable data models (`Element`, `AcidBaseSubstance`,
//!   `ReactionCombination`), the built-in catalogs, catalog file loaders, and the pure
//!   functions (`resolve`, `estimate`, `molar_mass`).
//!
//! - **[`engine`]: The Session State.** The mutable [`engine::solution::Solution`] record whose
//!   derived pH is recomputed on every mutation, plus the engine error and configuration types.
//!
//! - **[`workflows`]: The Public API.** Entry points used by front ends: placing elements
//!   into a reaction zone and mixing catalog substances into a solution.

pub mod core;
pub mod engine;
pub mod workflows;
