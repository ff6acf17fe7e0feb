//! Stateless data models for the element table and the per-render selection.

pub mod element;
pub mod selection;
pub mod table;
