//! Bulk position queries, evaluated in parallel.

use rayon::prelude::*;
use spline_math::Point3;

use crate::spline::Spline;

impl Spline {
    /// Resolve every stamp, preserving input order.
    pub fn resolve_many(&self, stamps: &[f32]) -> Vec<Point3> {
        stamps.par_iter().map(|&stamp| self.resolve(stamp)).collect()
    }

    /// `count` evenly spaced positions from the start to the end of the
    /// spline, both ends included.
    pub fn sample_uniform(&self, count: usize) -> Vec<Point3> {
        match count {
            0 => Vec::new(),
            1 => vec![self.resolve(0.0_f32)],
            _ => {
                let total = self.total_duration();
                let last = count - 1;
                let step = total / last as f32;
                (0..count)
                    .into_par_iter()
                    .map(|i| {
                        let stamp = if i == last { total } else { i as f32 * step };
                        self.resolve(stamp)
                    })
                    .collect()
            }
        }
    }
}
