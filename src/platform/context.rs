// ============================================================================
// Execution Context Detection
// Compile-time detection of host vs. device targets and checking tiers
// ============================================================================

use core::fmt;

/// Where the current build runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionContext {
    /// General-purpose CPU target
    Host,
    /// Restricted accelerator target (NVPTX, AMDGPU): no unwinding, no heap
    Device,
}

impl ExecutionContext {
    /// Detect the context the crate was compiled for.
    #[inline]
    pub const fn detect() -> Self {
        #[cfg(any(target_arch = "nvptx64", target_arch = "amdgpu"))]
        {
            ExecutionContext::Device
        }
        #[cfg(not(any(target_arch = "nvptx64", target_arch = "amdgpu")))]
        {
            ExecutionContext::Host
        }
    }

    #[inline]
    pub const fn is_device(self) -> bool {
        matches!(self, ExecutionContext::Device)
    }

    /// Whether a panic can be caught and reported.
    ///
    /// On device targets a panic traps the kernel, so callers there should
    /// stick to the checked `at` accessor and handle its `Result`.
    #[inline]
    pub const fn supports_unwinding(self) -> bool {
        matches!(self, ExecutionContext::Host)
    }
}

impl fmt::Display for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionContext::Host => write!(f, "host"),
            ExecutionContext::Device => write!(f, "device"),
        }
    }
}

/// Build properties that affect array access behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetCapabilities {
    /// Host or device
    pub context: ExecutionContext,
    /// Whether the `std` feature is enabled
    pub std_available: bool,
    /// Whether unchecked accessors carry debug assertions
    pub debug_assertions: bool,
}

impl TargetCapabilities {
    pub const fn detect() -> Self {
        Self {
            context: ExecutionContext::detect(),
            std_available: cfg!(feature = "std"),
            debug_assertions: cfg!(debug_assertions),
        }
    }
}

impl fmt::Display for TargetCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, debug index checks {})",
            self.context,
            if self.std_available { "std" } else { "no_std" },
            if self.debug_assertions { "on" } else { "off" }
        )
    }
}
