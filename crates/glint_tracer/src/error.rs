//! Error types for scene construction and image output.

use thiserror::Error;

/// A primitive was asked to represent a shape with no geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Sphere radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    #[error("Plane normal cannot be the zero vector")]
    ZeroNormal,

    #[error("Triangle vertices are colinear")]
    ColinearVertices,

    #[error("Segment endpoints coincide")]
    DegenerateSegment,
}

pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors from the pixel buffer.
#[derive(Error, Debug)]
pub enum ImageBufferError {
    #[error("Image dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Image encoding error: {0}")]
    Encode(#[from] image::ImageError),
}

pub type ImageResult<T> = Result<T, ImageBufferError>;
