//! Domain primitives shared by the dunning workspace crates.
//!
//! Holds the error taxonomy, identifier and date helpers, and the glue that
//! turns `validator` failures into [`error::CoreError::Validation`].

pub mod error;
pub mod types;
pub mod validation;
