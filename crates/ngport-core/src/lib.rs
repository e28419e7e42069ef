//! Core types for ngport.
//!
//! This crate provides the data shared by the extractor and the generators:
//! the extracted initial state, generated file artifacts, and error types.

pub mod errors;
pub mod model;

pub use errors::ExtractError;
pub use model::{ComponentArtifacts, GeneratedFile, StateList};
