//! Timed spline core: errors, validation policies, and shared traits.

pub mod error;
pub mod policy;
pub mod traits;

pub use error::{Result, SplineError};
pub use policy::{Checked, DefaultPolicy, Unchecked, ValidationPolicy};
pub use traits::Trajectory;
