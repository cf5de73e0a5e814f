//! # Core Models Module
//!
//! Plain data records shared by the catalogs and the chemistry functions.
//!
//! - [`element`] - Periodic table entries and their category
//! - [`substance`] - Acids and bases with strength and concentration
//! - [`reaction`] - Reaction combinations, results and animation categories

pub mod element;
pub mod reaction;
pub mod substance;
