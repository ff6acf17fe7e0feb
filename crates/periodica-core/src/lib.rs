//! # Periodica Core Library
//!
//! Layout and color encoding for periodic tables shaded by neutron or X-ray
//! attenuation coefficients.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Immutable data models (`ElementRecord`, `ElementTable`,
//!   `Selection`) and the readers that load a table from CSV or Excel files.
//!
//! - **[`engine`]: The Logic Core.** Pure functions that place records on the grid
//!   (`TableLayoutEngine`), map coefficients to gray levels (`ColorEncoder`), and build the
//!   shared hover template.
//!
//! - **[`workflows`]: The Public API.** `PeriodicTableRenderer` orchestrates the engine over
//!   a whole table and returns a `RenderModel` ready for any drawing surface.

pub mod core;
pub mod engine;
pub mod workflows;
