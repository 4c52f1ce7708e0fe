//! Glint tracer - CPU path tracing core.
//!
//! A recursive Monte Carlo path tracer over a flat list of primitives
//! (spheres, planes, triangles and line segments) with diffuse, metal,
//! glass and Phong-shaded materials.

mod camera;
mod error;
mod hittable;
mod image_buffer;
mod line;
mod material;
mod plane;
mod renderer;
mod sphere;
mod triangle;

pub use camera::Camera;
pub use error::{GeometryError, GeometryResult, ImageBufferError, ImageResult};
pub use hittable::{face_normal, HitRecord, Hittable, HittableList};
pub use image_buffer::ImageBuffer;
pub use line::Line;
pub use material::{
    reflect, refract, Color, Dielectric, Lambertian, Material, Metal, Phong, ScatterResult,
};
pub use plane::Plane;
pub use renderer::{
    encode_color, linear_to_gamma, normal_color, ray_color, render, render_normals, render_pixel,
    RenderConfig, SHADOW_ACNE_EPSILON,
};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Interval, Point3, Ray, Vec3};
