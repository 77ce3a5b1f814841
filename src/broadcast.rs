//! NumPy-style stride broadcasting onto a larger target shape.
//!
//! Broadcasting aligns the source shape with the target shape at their
//! trailing dimensions. An extent-1 source axis is replayed across the
//! whole target extent by giving it stride 0; target axes with no source
//! counterpart also get stride 0; every other axis must match the target
//! extent exactly and keeps its stride.
//!
//! All three entry points validate compatibility before writing a single
//! output slot, so a failing call leaves the output buffer untouched.

use std::fmt;

use crate::{LayoutError, Result};

/// Which operand of an assignment a shape describes.
///
/// Only used to label a broadcast failure so the caller can render a
/// message naming the offending operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandRole {
    Input,
    Output,
}

impl fmt::Display for OperandRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandRole::Input => f.write_str("input"),
            OperandRole::Output => f.write_str("output"),
        }
    }
}

/// Check that `src_dims` can be broadcast onto `dst_dims` and return the
/// number of leading target axes with no source counterpart.
fn check_compatible(dst_dims: &[usize], src_dims: &[usize], role: OperandRole) -> Result<usize> {
    let incompatible = || LayoutError::IncompatibleBroadcast {
        role,
        src: src_dims.to_vec(),
        dst: dst_dims.to_vec(),
    };

    // Can't broadcast to fewer dimensions.
    if src_dims.len() > dst_dims.len() {
        return Err(incompatible());
    }
    let lead = dst_dims.len() - src_dims.len();
    for (&src, &dst) in src_dims.iter().zip(dst_dims[lead..].iter()) {
        // If it doesn't have extent one, it must match.
        if src != 1 && src != dst {
            return Err(incompatible());
        }
    }
    Ok(lead)
}

/// Broadcast `src_strides` (paired with `src_dims`) onto `dst_dims`,
/// returning a freshly allocated stride vector of the target's length.
///
/// # Errors
/// Returns [`LayoutError::IncompatibleBroadcast`] naming `role` if the
/// source has more dimensions than the target, or a non-1 source extent
/// disagrees with the corresponding target extent.
///
/// # Example
/// ```rust
/// use strided_assign::{broadcast_strides, OperandRole};
///
/// let strides = broadcast_strides(&[2, 3], &[3], &[4], OperandRole::Input).unwrap();
/// assert_eq!(strides, vec![0, 4]);
/// ```
pub fn broadcast_strides(
    dst_dims: &[usize],
    src_dims: &[usize],
    src_strides: &[isize],
    role: OperandRole,
) -> Result<Vec<isize>> {
    let mut out = vec![0isize; dst_dims.len()];
    broadcast_strides_into(dst_dims, src_dims, src_strides, role, &mut out)?;
    Ok(out)
}

/// Broadcast `src_strides` onto `dst_dims`, writing into a caller-provided
/// buffer of length `dst_dims.len()`.
///
/// On failure `out` is left untouched.
///
/// # Panics
/// Panics if `out.len() != dst_dims.len()`.
pub fn broadcast_strides_into(
    dst_dims: &[usize],
    src_dims: &[usize],
    src_strides: &[isize],
    role: OperandRole,
    out: &mut [isize],
) -> Result<()> {
    debug_assert_eq!(src_dims.len(), src_strides.len());
    assert_eq!(
        out.len(),
        dst_dims.len(),
        "output stride buffer length must match target rank"
    );
    let lead = check_compatible(dst_dims, src_dims, role)?;

    for i in (lead..dst_dims.len()).rev() {
        out[i] = if src_dims[i - lead] == 1 {
            0
        } else {
            src_strides[i - lead]
        };
    }
    // Target axes with no source counterpart get a zero stride.
    for s in &mut out[..lead] {
        *s = 0;
    }
    Ok(())
}

/// Broadcast in place over a single aliased buffer.
///
/// `strides` has length `dst_dims.len()`; on entry its leading
/// `src_dims.len()` entries hold the source strides, on success the whole
/// buffer holds the broadcast strides. This is the form an assignment
/// layer uses when it has already sized the stride buffer for the target
/// and wants to rewrite it without a second allocation.
///
/// Axes are processed from the last to the first: the slot written at
/// axis `i` is only ever read, as the source stride of a higher axis, by
/// an iteration that already ran, so no source value is clobbered before
/// it is consumed.
///
/// On failure the buffer, including the source strides in it, is left
/// untouched.
///
/// # Panics
/// Panics if `strides.len() != dst_dims.len()`.
pub fn broadcast_strides_in_place(
    dst_dims: &[usize],
    src_dims: &[usize],
    role: OperandRole,
    strides: &mut [isize],
) -> Result<()> {
    assert_eq!(
        strides.len(),
        dst_dims.len(),
        "stride buffer length must match target rank"
    );
    let lead = check_compatible(dst_dims, src_dims, role)?;

    for i in (lead..dst_dims.len()).rev() {
        strides[i] = if src_dims[i - lead] == 1 {
            0
        } else {
            strides[i - lead]
        };
    }
    for s in &mut strides[..lead] {
        *s = 0;
    }
    Ok(())
}
