//! State transitions and derived values
//!
//! The pure core of the tracker. Transitions take the current document by
//! reference and return a new one; nothing here performs I/O or mutates
//! shared state.

pub mod orders;
pub mod pricing;
pub mod selection;
pub mod templates;

pub use selection::Selection;
pub use templates::ItemKind;
