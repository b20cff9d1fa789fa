// ============================================================================
// Archive Module
// Serialization hook between FixedArray and external frameworks
// ============================================================================
//
// This module provides:
// - ElementWriter / ElementReader: capabilities a framework injects
// - Archive + Saving/Loading: one bidirectional call site for both directions
// - Stock adapters: Vec, SmallVec, ArrayVec writers and IterReader
// - serde Serialize/Deserialize (feature "serde")
//
// The array always transfers exactly N elements in index order. Errors from
// framework implementations pass through unchanged.

mod adapters;
mod hook;
mod traits;

#[cfg(feature = "serde")]
mod serde_impl;

pub use adapters::IterReader;
pub use traits::{Archive, ElementReader, ElementWriter, Loading, Saving};
