//! Timed spline curves.
//!
//! A curve is decoded from a dense `i16` stream of `(x, y, z, ticks)` groups,
//! frozen after its tangent handles are computed, and then queried for a
//! position at any timestamp.

mod builder;
mod mode;
mod point;
mod sampling;
mod spline;
mod stamp;
pub mod stream;

pub use builder::{Decoded, SplineBuilder};
pub use mode::SplineMode;
pub use point::ControlPoint;
pub use spline::Spline;
pub use stamp::Timestamp;
pub use stream::{decode_ne_bytes, is_segment_end, SegmentReader, GROUP_LEN};

pub use spline_core::{
    Checked, DefaultPolicy, Result, SplineError, Trajectory, Unchecked, ValidationPolicy,
};
pub use spline_math::{vec3, Vec3};
