//! Compile-time selection between checked and unchecked input handling.
//!
//! Decoding trusts its input. The only contract it can check is that a
//! point's duration is non-negative, and whether it does so is decided by
//! the policy type parameter, never by a runtime flag.

use crate::error::{Result, SplineError};

/// Strategy for validating control-point data.
pub trait ValidationPolicy {
    /// Validate the duration of the point about to be appended at `index`.
    fn check_duration(index: usize, duration: f32) -> Result<()>;
}

/// Reports contract violations as errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checked;

/// Accepts everything; checks compile to nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unchecked;

impl ValidationPolicy for Checked {
    #[inline]
    fn check_duration(index: usize, duration: f32) -> Result<()> {
        if duration.is_nan() || duration < 0.0 {
            return Err(SplineError::InvalidDuration { index, duration });
        }
        Ok(())
    }
}

impl ValidationPolicy for Unchecked {
    #[inline(always)]
    fn check_duration(_index: usize, _duration: f32) -> Result<()> {
        Ok(())
    }
}

/// Policy used when none is named: checked in debug builds or with the
/// `validate` feature, unchecked otherwise.
#[cfg(any(debug_assertions, feature = "validate"))]
pub type DefaultPolicy = Checked;

#[cfg(not(any(debug_assertions, feature = "validate")))]
pub type DefaultPolicy = Unchecked;
