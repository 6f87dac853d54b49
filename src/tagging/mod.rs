//! Filename vocabulary: dimensions, descriptive terms, and their numeric scores.

pub mod decoder;
pub mod dimension;
pub mod levels;
pub mod terms;
