// ============================================================================
// Array Module
// Compile-time sized, allocation-free value container
// ============================================================================
//
// This module provides:
// - FixedArray<T, N>: N slots of T stored inline, value semantics
// - ArrayError: Errors for the checked access tier and archive transfer
// - Vector3d/Vector3f/Vector3i aliases for the common coordinate shapes
//
// Design principles:
// - No heap allocation, no indirection, layout identical to [T; N]
// - Checked access returns Result; unchecked access is debug-asserted only
// - Compile-time length via const generics, including N == 0
// - no_std compatible so the same code builds for device targets

mod errors;
mod fixed_array;
mod iter;

pub use errors::{ArrayError, ArrayResult};
pub use fixed_array::{FixedArray, Vector3d, Vector3f, Vector3i};
