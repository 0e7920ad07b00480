use serde::{Deserialize, Serialize};
use spline_math::{Point3, Vec3};

/// A single authored point of a spline.
///
/// The tangent handles are zero until the owning spline is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    anchor: Point3,
    duration_to_next: f32,
    prev_tangent: Point3,
    next_tangent: Point3,
}

impl ControlPoint {
    pub fn new(anchor: Point3, duration_to_next: f32) -> Self {
        Self {
            anchor,
            duration_to_next,
            prev_tangent: Vec3::ZERO,
            next_tangent: Vec3::ZERO,
        }
    }

    pub fn anchor(&self) -> Point3 {
        self.anchor
    }

    /// Time from this point to the next one.
    pub fn duration_to_next(&self) -> f32 {
        self.duration_to_next
    }

    /// Bezier handle on the incoming side.
    pub fn prev_tangent(&self) -> Point3 {
        self.prev_tangent
    }

    /// Bezier handle on the outgoing side.
    pub fn next_tangent(&self) -> Point3 {
        self.next_tangent
    }

    pub(crate) fn set_tangents(&mut self, prev: Point3, next: Point3) {
        self.prev_tangent = prev;
        self.next_tangent = next;
    }
}
