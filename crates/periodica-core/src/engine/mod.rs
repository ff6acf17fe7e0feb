//! # Engine Module
//!
//! The pure transformation layer between a loaded [`crate::core::models::table::ElementTable`]
//! and a drawable model.
//!
//! - [`layout`] positions records on the grid and assembles per-cell labels and hover fields.
//! - [`color`] turns a coefficient into a neutral gray and a contrasting label color.
//! - [`hover`] owns the ordered hover field list shared by every cell.
//! - [`config`] holds the fixed presentation constants and their validation.
//!
//! Nothing in this layer performs I/O or keeps state between calls.

pub mod color;
pub mod config;
pub mod error;
pub mod hover;
pub mod layout;
