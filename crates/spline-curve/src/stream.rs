//! Compact control-point streams.
//!
//! A stream is a flat run of native-endian `i16` units in groups of
//! [`GROUP_LEN`]: `x, y, z, ticks`. Each spline's points are closed by an
//! all-zero group, and several splines may follow each other in one stream.

use std::marker::PhantomData;

use spline_core::{DefaultPolicy, Result, SplineError, ValidationPolicy};

use crate::builder::SplineBuilder;
use crate::mode::SplineMode;
use crate::spline::Spline;

/// Units per encoded control point.
pub const GROUP_LEN: usize = 4;

/// Whether `group` is the terminator that closes a segment.
#[inline]
pub fn is_segment_end(group: [i16; GROUP_LEN]) -> bool {
    group == [0; GROUP_LEN]
}

/// Reinterpret a native-endian byte blob as stream units.
pub fn decode_ne_bytes(bytes: &[u8]) -> Result<Vec<i16>> {
    if bytes.len() % 2 != 0 {
        return Err(SplineError::OddByteLength { len: bytes.len() });
    }
    Ok(bytes
        .chunks_exact(2)
        .map(|pair| i16::from_ne_bytes([pair[0], pair[1]]))
        .collect())
}

/// Iterator over consecutive splines packed into one stream.
///
/// Yields one spline per terminated segment. A segment holding no points
/// yields [`SplineError::EmptyCurve`] and reading continues after it; any
/// other error ends the iteration.
#[derive(Debug, Clone)]
pub struct SegmentReader<'a, P: ValidationPolicy = DefaultPolicy> {
    data: &'a [i16],
    position: usize,
    mode: SplineMode,
    _policy: PhantomData<P>,
}

impl<'a> SegmentReader<'a, DefaultPolicy> {
    pub fn new(data: &'a [i16], mode: SplineMode) -> Self {
        Self::with_policy(data, mode)
    }
}

impl<'a, P: ValidationPolicy> SegmentReader<'a, P> {
    pub fn with_policy(data: &'a [i16], mode: SplineMode) -> Self {
        Self {
            data,
            position: 0,
            mode,
            _policy: PhantomData,
        }
    }

    /// Units consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> &'a [i16] {
        &self.data[self.position..]
    }

    /// Mode applied to segments read from now on.
    pub fn set_mode(&mut self, mode: SplineMode) {
        self.mode = mode;
    }

    /// Read the next segment with an explicit mode.
    pub fn next_with_mode(&mut self, mode: SplineMode) -> Option<Result<Spline>> {
        let rest = self.remaining();
        if rest.is_empty() {
            return None;
        }

        let mut builder = SplineBuilder::<P>::with_policy(mode);
        match builder.decode(rest) {
            Ok(decoded) => {
                self.position += decoded.consumed;
                Some(builder.build())
            }
            Err(err) => {
                self.position = self.data.len();
                Some(Err(err))
            }
        }
    }
}

impl<P: ValidationPolicy> Iterator for SegmentReader<'_, P> {
    type Item = Result<Spline>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_with_mode(self.mode)
    }
}
