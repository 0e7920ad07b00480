/// Query timestamp, in the same units as control-point durations.
pub trait Timestamp: Copy {
    fn as_f32(self) -> f32;
}

impl Timestamp for f32 {
    #[inline]
    fn as_f32(self) -> f32 {
        self
    }
}

impl Timestamp for u32 {
    #[inline]
    fn as_f32(self) -> f32 {
        self as f32
    }
}

impl Timestamp for u16 {
    #[inline]
    fn as_f32(self) -> f32 {
        f32::from(self)
    }
}
