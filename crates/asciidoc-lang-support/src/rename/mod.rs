//! Rename support for AsciiDoc documents
//!
//! Validates new names for the elements a rename may target:
//! - Block IDs: `[[id]]`, `[#id]`
//! - Attribute declarations: `:name:`
//! - Tag declarations: `tag::name[]`
//! - Tags in include macros: `include::file.adoc[tag=name]`

pub mod validator;


pub use validator::{RenameInputValidator, RenameTarget};
