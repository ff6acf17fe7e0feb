//! # Core Module
//!
//! The foundation layer: stateless data models for the element table and the
//! per-render selection, plus the readers that load a table from disk.
//!
//! - **Data models** ([`models`]) - `ElementRecord`, `FieldValue`, `ElementTable`, `Selection`
//! - **File I/O** ([`io`]) - CSV and Excel readers behind a common trait
//!
//! Nothing here depends on a modality or a color range; those are applied by the
//! [`crate::engine`] layer on top of an already-loaded table.

pub mod io;
pub mod models;
