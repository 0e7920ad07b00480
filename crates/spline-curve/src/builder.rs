//! Decoding and the one-shot freeze into a queryable [`Spline`].

use std::marker::PhantomData;

use log::{debug, trace};
use spline_core::{DefaultPolicy, Result, SplineError, ValidationPolicy};
use spline_math::{clamp_index, normalize, sqrt_length, vec3, Point3};

use crate::mode::SplineMode;
use crate::point::ControlPoint;
use crate::spline::Spline;
use crate::stream::{is_segment_end, GROUP_LEN};

/// Outcome of decoding one stream segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// Control points appended by this segment.
    pub points: usize,
    /// `i16` units consumed, terminator included.
    pub consumed: usize,
}

/// Mutable first phase of a spline. Collects points, then [`build`](Self::build)
/// computes tangent handles and freezes the result.
#[derive(Debug, Clone)]
pub struct SplineBuilder<P: ValidationPolicy = DefaultPolicy> {
    mode: SplineMode,
    points: Vec<ControlPoint>,
    _policy: PhantomData<P>,
}

impl SplineBuilder<DefaultPolicy> {
    pub fn new(mode: SplineMode) -> Self {
        Self::with_policy(mode)
    }
}

impl<P: ValidationPolicy> SplineBuilder<P> {
    pub fn with_policy(mode: SplineMode) -> Self {
        Self {
            mode,
            points: Vec::new(),
            _policy: PhantomData,
        }
    }

    pub fn mode(&self) -> SplineMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point, validating its duration per `P`.
    pub fn push(&mut self, anchor: Point3, duration_to_next: f32) -> Result<&mut Self> {
        P::check_duration(self.points.len(), duration_to_next)?;
        self.points.push(ControlPoint::new(anchor, duration_to_next));
        Ok(self)
    }

    /// Append a point from raw stream units.
    pub fn push_raw(&mut self, x: i16, y: i16, z: i16, ticks: i16) -> Result<&mut Self> {
        let anchor = vec3(f32::from(x), f32::from(y), f32::from(z));
        trace!("point {}: {anchor} for {ticks} ticks", self.points.len());
        self.push(anchor, f32::from(ticks))
    }

    /// Append points from `data` up to and including the first all-zero group.
    ///
    /// Decoding does not resume past the terminator; chain further calls on
    /// `&data[decoded.consumed..]`. On error, points appended by this call are
    /// discarded and the builder is left as it was.
    pub fn decode(&mut self, data: &[i16]) -> Result<Decoded> {
        let start = self.points.len();
        let decoded = self.decode_segment(data, start);
        if decoded.is_err() {
            self.points.truncate(start);
        }
        decoded
    }

    fn decode_segment(&mut self, data: &[i16], start: usize) -> Result<Decoded> {
        let mut consumed = 0;

        for group in data.chunks_exact(GROUP_LEN) {
            let &[x, y, z, ticks] = group else {
                break;
            };
            consumed += GROUP_LEN;
            if is_segment_end([x, y, z, ticks]) {
                let points = self.points.len() - start;
                debug!("decoded segment: {points} points, {consumed} units");
                return Ok(Decoded { points, consumed });
            }
            self.push_raw(x, y, z, ticks)?;
        }

        match data.len() % GROUP_LEN {
            0 => Err(SplineError::UnterminatedSegment { consumed }),
            len => Err(SplineError::TruncatedGroup { len }),
        }
    }

    /// Compute tangent handles and freeze.
    pub fn build(self) -> Result<Spline> {
        if self.points.is_empty() {
            return Err(SplineError::EmptyCurve);
        }
        let mut points = self.points;
        precompute(&mut points);
        let spline = Spline::from_parts(self.mode, points);
        debug!(
            "built {} spline: {} points, duration {}",
            spline.mode(),
            spline.len(),
            spline.total_duration()
        );
        Ok(spline)
    }
}

/// Fill in both tangent handles of every point from its clamped neighbours.
///
/// Handles lie along the `prev -> next` chord, at a distance of the square
/// root of the gap to the respective neighbour.
pub(crate) fn precompute(points: &mut [ControlPoint]) {
    let len = points.len();
    for i in 0..len {
        let idx = i as isize;
        let prev = points[clamp_index(idx - 1, len)].anchor();
        let next = points[clamp_index(idx + 1, len)].anchor();
        let curr = points[i].anchor();

        points[i].set_tangents(
            normalize(prev - next) * sqrt_length(prev - curr) + curr,
            normalize(next - prev) * sqrt_length(next - curr) + curr,
        );
    }
}
