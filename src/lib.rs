// ============================================================================
// Fixed Array Library
// Compile-time sized, allocation-free container for host and device code
// ============================================================================

//! # Fixed Array
//!
//! A fixed-capacity homogeneous container whose length is part of its type.
//! It stands in for heap-allocated sequences wherever the element count is
//! known at compile time: coordinate 3-vectors, per-particle records, small
//! lookup tables.
//!
//! ## Features
//!
//! - **Zero allocation**: layout identical to `[T; N]`, including `N == 0`
//! - **Value semantics**: copies are element-wise and independent
//! - **Two access tiers**: checked `at()` returning `Result`, and unchecked
//!   indexing asserted only in debug builds
//! - **Dual target**: `no_std` without the default `std` feature, so the same
//!   source builds for accelerator targets
//! - **Serialization hook**: exactly N elements in index order through an
//!   injected reader/writer, plus optional `serde` support
//!
//! ## Example
//!
//! ```rust
//! use fixed_array::prelude::*;
//!
//! let mut velocity = Vector3d::default();
//! velocity.fill(0.5);
//! velocity[2] = -1.0;
//!
//! assert_eq!(velocity.at(2), Ok(&-1.0));
//! assert_eq!(
//!     velocity.at(3),
//!     Err(ArrayError::OutOfRange { index: 3, len: 3 })
//! );
//!
//! // Save and restore through any ElementWriter / ElementReader
//! let mut buffer: Vec<f64> = Vec::new();
//! velocity.save(&mut buffer).unwrap();
//! let restored = Vector3d::load(&mut IterReader::new(buffer)).unwrap();
//! assert_eq!(restored, velocity);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod archive;
pub mod array;
pub mod platform;
pub mod utils;

pub use array::{ArrayError, ArrayResult, FixedArray, Vector3d, Vector3f, Vector3i};

// Re-exports for convenience
pub mod prelude {
    pub use crate::archive::{Archive, ElementReader, ElementWriter, IterReader, Loading, Saving};
    pub use crate::array::{ArrayError, ArrayResult, FixedArray, Vector3d, Vector3f, Vector3i};
    pub use crate::platform::{ExecutionContext, TargetCapabilities};
}
