// ============================================================================
// Platform Module
// Host/device target detection
//
// FixedArray itself compiles unchanged for both contexts; this module lets
// consuming code (and logging) report which one a build targets.
// ============================================================================

mod context;

pub use context::{ExecutionContext, TargetCapabilities};
