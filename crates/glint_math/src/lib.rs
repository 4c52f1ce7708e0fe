// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod approx;
mod interval;
mod ray;
pub mod sampling;

pub use approx::{scalar_multiple, NearZero, EPSILON};
pub use interval::Interval;
pub use ray::Ray;

/// A position in world space.
pub type Point3 = Vec3;
