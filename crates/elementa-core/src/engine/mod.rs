//! # Engine Module
//!
//! Session state built on the pure core functions.
//!
//! - **Solution** ([`solution`]) - A named, mutable acid/base mixture whose pH and color
//!   bucket are recomputed on every mutation
//! - **Configuration** ([`config`]) - Mixing options and their builder
//! - **Error Handling** ([`error`]) - Engine error type shared with the workflows

pub mod config;
pub mod error;
pub mod solution;
