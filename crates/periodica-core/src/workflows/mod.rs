//! # Workflows Module
//!
//! The public entry point of the library. A workflow ties a loaded table, a
//! validated [`crate::engine::config::RenderConfig`] and a user
//! [`crate::core::models::selection::Selection`] together and returns a
//! complete, drawable model.
//!
//! - **Render Workflow** ([`render`]) - Lays out and shades every element, builds the
//!   shared hover template, and adds axis labels and the lanthanide/actinide annotations.

pub mod render;
