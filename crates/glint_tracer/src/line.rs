//! Finite line segment primitive.
//!
//! A segment has no surface, so a ray only hits it when the two are
//! coplanar and actually cross (or overlap). The normal is a fixed shading
//! convention, not a geometric property.

use std::sync::Arc;

use crate::{
    error::{GeometryError, GeometryResult},
    hittable::{HitRecord, Hittable},
    Material, Point3, Ray,
};
use glint_math::{scalar_multiple, Interval, NearZero, Vec3};

/// A segment from `a` to `b`.
#[derive(Debug, Clone)]
pub struct Line {
    a: Point3,
    b: Point3,
    /// Unit shading normal
    normal: Vec3,
    material: Arc<Material>,
}

impl Line {
    /// Create a new segment. The endpoints must be distinct.
    pub fn new(a: Point3, b: Point3, material: Arc<Material>) -> GeometryResult<Self> {
        if (b - a).near_zero() {
            return Err(GeometryError::DegenerateSegment);
        }

        Ok(Self {
            a,
            b,
            normal: shading_normal(b - a),
            material,
        })
    }

    pub fn endpoints(&self) -> (Point3, Point3) {
        (self.a, self.b)
    }

    /// The shading normal before front-face orientation.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Ray parameter of the first point the ray shares with the segment.
    ///
    /// Returns `Some(0.0)` when the ray starts on the segment.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let ab = self.b - self.a;
        let ao = ray.origin() - self.a;
        // Normal of the plane through the ray origin and the segment
        let n = ao.cross(ab);

        // Unless the origin is on the segment's line, a second ray point
        // has to lie in that plane too or the two are skew.
        if !n.near_zero() {
            let ahead = ray.at(1.0);
            if !(self.a - ahead).dot(n).near_zero() {
                return None;
            }
        }

        let c1 = ab.cross(ray.direction());

        if c1.near_zero() {
            if !n.near_zero() {
                // Parallel to the segment but on a different line
                return None;
            }
            return self.intersect_colinear(ray, ao, ab);
        }

        let c2 = ao.cross(ray.direction());
        let u = scalar_multiple(c2, c1);
        let t = scalar_multiple(n, c1);

        if t < 0.0 || !Interval::UNIT.contains(u) {
            return None;
        }
        Some(t)
    }

    /// The ray runs along the segment's own line.
    fn intersect_colinear(&self, ray: &Ray, ao: Vec3, ab: Vec3) -> Option<f32> {
        if Interval::UNIT.contains(scalar_multiple(ao, ab)) {
            return Some(0.0);
        }

        // Otherwise the first endpoint ahead of the origin is the entry point
        let t0 = scalar_multiple(self.a - ray.origin(), ray.direction());
        let t1 = scalar_multiple(self.b - ray.origin(), ray.direction());

        match (t0 >= 0.0, t1 >= 0.0) {
            (true, true) => Some(t0.min(t1)),
            (true, false) => Some(t0),
            (false, true) => Some(t1),
            (false, false) => None,
        }
    }
}

impl Hittable for Line {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let t = self.intersect(ray)?;
        if !ray_t.admits(t) {
            return None;
        }
        Some(HitRecord::new(ray, t, self.normal, &self.material))
    }
}

/// Shading normal for a segment along `dir`.
///
/// The cross product with world-up, turned to face -x (or +z when it has no
/// x component). Vertical segments fall back to -x.
fn shading_normal(dir: Vec3) -> Vec3 {
    let n = Vec3::Y.cross(dir);
    if n.near_zero() {
        return Vec3::NEG_X;
    }

    let n = n.normalize();
    if n.x > 0.0 || (n.x.near_zero() && n.z < 0.0) {
        -n
    } else {
        n
    }
}
