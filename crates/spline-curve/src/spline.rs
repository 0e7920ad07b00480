use serde::Serialize;
use spline_core::{DefaultPolicy, Result, Trajectory, ValidationPolicy};
use spline_math::{clamp_index, mix, Point3};

use crate::builder::SplineBuilder;
use crate::mode::SplineMode;
use crate::point::ControlPoint;
use crate::stamp::Timestamp;

/// An immutable, non-empty spline ready for position queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spline {
    mode: SplineMode,
    points: Vec<ControlPoint>,
}

impl Spline {
    /// Callers guarantee `points` is non-empty and precomputed.
    pub(crate) fn from_parts(mode: SplineMode, points: Vec<ControlPoint>) -> Self {
        Self { mode, points }
    }

    /// Decode one segment from `data` and return the spline with the rest of
    /// the stream.
    pub fn decode(mode: SplineMode, data: &[i16]) -> Result<(Self, &[i16])> {
        Self::decode_with::<DefaultPolicy>(mode, data)
    }

    pub fn decode_with<P: ValidationPolicy>(
        mode: SplineMode,
        data: &[i16],
    ) -> Result<(Self, &[i16])> {
        let mut builder = SplineBuilder::<P>::with_policy(mode);
        let decoded = builder.decode(data)?;
        Ok((builder.build()?, &data[decoded.consumed..]))
    }

    pub fn mode(&self) -> SplineMode {
        self.mode
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a spline cannot be built without points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index`, saturated to the first or last point.
    pub fn clamped_point(&self, index: isize) -> &ControlPoint {
        &self.points[clamp_index(index, self.points.len())]
    }

    fn last(&self) -> &ControlPoint {
        self.clamped_point(isize::MAX)
    }

    /// Sum of all outgoing segment durations. The last point has no outgoing
    /// segment, so its own duration is not counted.
    pub fn total_duration(&self) -> f32 {
        let segments = self.points.len() - 1;
        self.points[..segments]
            .iter()
            .map(ControlPoint::duration_to_next)
            .sum()
    }

    /// Cubic Bezier between point `base` and its successor, evaluated with
    /// De Casteljau's construction.
    pub fn interpolate_bezier(&self, base: usize, t: f32) -> Point3 {
        let idx = isize::try_from(base).unwrap_or(isize::MAX);
        let curr = self.clamped_point(idx);
        let next = self.clamped_point(idx.saturating_add(1));

        let aa = curr.anchor();
        let bb = curr.next_tangent();
        let cc = next.prev_tangent();
        let dd = next.anchor();

        let ee = mix(aa, bb, t);
        let ff = mix(bb, cc, t);
        let gg = mix(cc, dd, t);
        let hh = mix(ee, ff, t);
        let ii = mix(ff, gg, t);
        mix(hh, ii, t)
    }

    /// Mean of three linear blends over the anchors at `base - 1 ..= base + 2`.
    ///
    /// Not a polynomial spline and not interpolating: at `t == 0` it yields
    /// the mean of the three leading anchors, not the anchor at `base`.
    pub fn interpolate_weighted(&self, base: usize, t: f32) -> Point3 {
        let idx = isize::try_from(base).unwrap_or(isize::MAX);
        let aa = self.clamped_point(idx - 1).anchor();
        let bb = self.clamped_point(idx).anchor();
        let cc = self.clamped_point(idx.saturating_add(1)).anchor();
        let dd = self.clamped_point(idx.saturating_add(2)).anchor();

        let ee = mix(aa, bb, t);
        let ff = mix(bb, cc, t);
        let gg = mix(cc, dd, t);
        (ee + ff + gg) * (1.0 / 3.0)
    }

    /// Position at `stamp`.
    ///
    /// Stamps at or past [`total_duration`](Self::total_duration) return the
    /// last anchor. Negative stamps extrapolate the first segment's blend.
    /// The last point's `duration_to_next` is never walked: it has no
    /// outgoing segment.
    pub fn resolve(&self, stamp: impl Timestamp) -> Point3 {
        let stamp = stamp.as_f32();
        let segments = self.points.len() - 1;
        let mut current = 0.0_f32;

        for (i, point) in self.points[..segments].iter().enumerate() {
            let span = point.duration_to_next();
            if current + span > stamp {
                // Only reachable with a zero span when querying before the start.
                let local_t = if span > 0.0 {
                    (stamp - current) / span
                } else {
                    0.0
                };
                return match self.mode {
                    SplineMode::Bezier => self.interpolate_bezier(i, local_t),
                    SplineMode::Weighted => self.interpolate_weighted(i, local_t),
                };
            }
            current += span;
        }

        self.last().anchor()
    }
}

impl Trajectory for Spline {
    type Point = Point3;

    fn position_at(&self, stamp: f32) -> Point3 {
        self.resolve(stamp)
    }

    fn duration(&self) -> f32 {
        self.total_duration()
    }
}
