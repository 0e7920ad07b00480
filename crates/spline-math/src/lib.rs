pub mod blend;
pub mod index;

pub use glam::{vec3, Vec3};
pub use blend::{mix, normalize, sqrt_length};
pub use index::clamp_index;

pub type Point3 = Vec3;
