//! Structural view of AsciiDoc trees
//!
//! Typed accessors over section nodes for outline and navigation.

pub mod section;

pub use section::{generate_id, Section};
