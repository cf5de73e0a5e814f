//! # Catalogs Module
//!
//! Built-in reference data and the loaders that let callers extend it.
//!
//! - [`elements`] - The periodic table, with symbol and atomic-number lookup
//! - [`substances`] - The acid/base catalog used by the mixing workflow, loadable from CSV
//! - [`reactions`] - The element-pair reaction table, loadable from TOML
//! - [`equations`] - The fixed dictionary of balanced textbook equations
//!
//! ```ignore
//! use elementa::core::data::{elements, reactions::ReactionTable};
//!
//! let sodium = elements::by_symbol("Na").unwrap();
//! let mut table = ReactionTable::builtin();
//! table.extend(ReactionTable::load("my-reactions.toml".as_ref())?);
//! ```

pub mod elements;
pub mod equations;
pub mod reactions;
pub mod substances;
