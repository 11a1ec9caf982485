//! # Polyline Editor Core
//!
//! Core types shared by every crate of the editor:
//! geometry primitives, editor-wide constants and error types.

pub mod constants;
pub mod error;
pub mod geometry;

pub use error::ConfigValueError;
pub use geometry::{fuzzy_compare, Bounds, Point};
