//! # Core Module
//!
//! Stateless building blocks of Elementa.
//!
//! - **Data Models** ([`models`]) - Elements, acid/base substances and reaction combinations
//! - **Catalogs** ([`data`]) - Built-in periodic table, acid/base catalog, reaction table and
//!   the known-equation dictionary, plus loaders for user-supplied catalogs
//! - **Chemistry** ([`chemistry`]) - Pair reaction resolution, pH estimation and molar mass
//!
//! Every function in this module is pure: the same inputs always give the same output and
//! nothing here holds mutable state between calls.

pub mod chemistry;
pub mod data;
pub mod models;
