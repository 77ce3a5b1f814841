//! Shape/stride geometry primitives for strided array assignment.
//!
//! Before an n-dimensional array engine runs any element-wise copy or
//! arithmetic, it has to answer three purely geometric questions about the
//! operands' layout descriptors:
//!
//! - [`broadcast_strides`]: rewrite a source stride vector so it is valid
//!   for a larger target shape (NumPy-style broadcasting, trailing
//!   dimensions aligned, extent-1 axes replayed with stride 0)
//! - [`strides_are_aligned`]: does a base address plus a set of strides
//!   guarantee that every reachable element lands on an address divisible
//!   by a given power-of-two alignment?
//! - [`may_overlap`]: can two described memory regions possibly share a
//!   byte? Conservative: `false` only when the regions are provably
//!   disjoint, so a safe in-place operation can trust a `false` answer.
//!
//! All three are pure functions over caller-owned descriptors. The crate
//! never owns, allocates, or dereferences element storage; a [`MemRegion`]
//! carries its base address as a plain integer.
//!
//! # Example
//!
//! ```rust
//! use strided_assign::{broadcast_strides, OperandRole};
//!
//! // Broadcast a row vector of shape (3,), byte strides (4,), into (2, 3).
//! let strides = broadcast_strides(&[2, 3], &[3], &[4], OperandRole::Input).unwrap();
//! assert_eq!(strides, vec![0, 4]);
//! ```

mod align;
mod broadcast;
mod overlap;
mod region;

// ============================================================================
// Broadcasting
// ============================================================================
pub use broadcast::{
    broadcast_strides, broadcast_strides_in_place, broadcast_strides_into, OperandRole,
};

// ============================================================================
// Alignment
// ============================================================================
pub use align::{strides_are_aligned, uint_alignment};

// ============================================================================
// Overlap detection
// ============================================================================
pub use overlap::{
    may_overlap, may_overlap_with, BoundsSolver, OverlapSolver, Precision, ShareVerdict,
};

// ============================================================================
// Region descriptors
// ============================================================================
pub use region::{contiguous_strides, MemRegion};

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur while reasoning about strided layouts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A source shape cannot be broadcast onto the target shape.
    ///
    /// Carries both shapes and the role of the offending operand so the
    /// caller can render a message naming it; the value is only built on
    /// the failing path.
    #[error("could not broadcast {role} from shape {src:?} into shape {dst:?}")]
    IncompatibleBroadcast {
        role: OperandRole,
        src: Vec<usize>,
        dst: Vec<usize>,
    },

    /// Shape and stride descriptors of a region differ in length.
    #[error("shape and strides length mismatch: {dims} vs {strides}")]
    StrideLengthMismatch { dims: usize, strides: usize },
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
