/// Something that maps a timestamp to a position.
pub trait Trajectory: Send + Sync {
    type Point;

    /// Position at `stamp`, in the same time units as the control data.
    fn position_at(&self, stamp: f32) -> Self::Point;

    /// Time span covered before the position settles on its final value.
    fn duration(&self) -> f32;
}
