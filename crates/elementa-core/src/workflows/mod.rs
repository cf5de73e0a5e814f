//! # Workflows Module
//!
//! Top-level entry points for front ends. Each workflow validates caller input, calls into
//! the pure [`crate::core`] functions, and returns a ready-to-render result.
//!
//! - **Reaction Zone** ([`react`]) - Resolves the first two elements placed in the zone
//! - **Mixing** ([`mix`]) - Builds a [`crate::engine::solution::Solution`] from catalog ids

pub mod mix;
pub mod react;
