//! Shared foundation types: source positions and dimension sets.

pub mod dimension;
pub mod span;

pub use dimension::DimensionSet;
pub use span::LineIndex;
