//! Triangle primitive for ray tracing.
//!
//! Intersects the supporting plane first, then checks containment with the
//! signs of three edge cross products. A ray that starts in the plane cannot
//! cross it, so that case is settled by the triangle's edges instead.

use std::sync::Arc;

use crate::{
    error::{GeometryError, GeometryResult},
    hittable::{HitRecord, Hittable},
    line::Line,
    plane::{canonical_normal, Plane},
    Material, Point3, Ray,
};
use glint_math::{Interval, NearZero, Vec3, EPSILON};

/// A triangle primitive.
#[derive(Debug, Clone)]
pub struct Triangle {
    /// Vertices
    a: Point3,
    b: Point3,
    c: Point3,
    /// Right-hand-rule unit normal of (b - a) x (c - a), used for containment
    winding_normal: Vec3,
    /// Canonically oriented unit normal, used for shading
    normal: Vec3,
    plane: Plane,
    edges: [Line; 3],
    material: Arc<Material>,
}

impl Triangle {
    /// Create a new triangle from three vertices. They must not be colinear.
    pub fn new(a: Point3, b: Point3, c: Point3, material: Arc<Material>) -> GeometryResult<Self> {
        let cross = (b - a).cross(c - a);
        if cross.near_zero() {
            return Err(GeometryError::ColinearVertices);
        }

        let winding_normal = cross.normalize();
        let plane = Plane::new(a, winding_normal, material.clone())?;
        let edges = [
            Line::new(a, b, material.clone())?,
            Line::new(b, c, material.clone())?,
            Line::new(a, c, material.clone())?,
        ];

        Ok(Self {
            a,
            b,
            c,
            winding_normal,
            normal: canonical_normal(winding_normal),
            plane,
            edges,
            material,
        })
    }

    pub fn vertices(&self) -> [Point3; 3] {
        [self.a, self.b, self.c]
    }

    /// The canonical unit face normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Whether a point in the supporting plane lies inside the triangle.
    ///
    /// Points on an edge count as inside.
    pub fn contains(&self, q: Point3) -> bool {
        let n = self.winding_normal;
        let u = (self.b - self.a).cross(q - self.a).dot(n);
        let v = (self.c - self.b).cross(q - self.b).dot(n);
        let w = (self.a - self.c).cross(q - self.c).dot(n);

        u >= -EPSILON && v >= -EPSILON && w >= -EPSILON
    }

    /// Ray parameter of the first point the ray shares with the triangle.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let t = self.plane.intersect(ray)?;

        if !t.near_zero() {
            // A generic ray crosses the plane at exactly one point
            return self.contains(ray.at(t)).then_some(t);
        }

        // The origin is in the supporting plane
        if self.contains(ray.origin()) {
            return Some(0.0);
        }

        // Outside the triangle a coplanar ray can still run into an edge
        self.edges
            .iter()
            .filter_map(|edge| edge.intersect(ray))
            .min_by(|x, y| x.total_cmp(y))
    }
}

impl Hittable for Triangle {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let t = self.intersect(ray)?;
        if !ray_t.admits(t) {
            return None;
        }
        Some(HitRecord::new(ray, t, self.normal, &self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;

    const EPS: f32 = 1e-4;

    fn material() -> Arc<Material> {
        Arc::new(Lambertian::new(Vec3::splat(0.5)).into())
    }

    /// Triangle in the x = 0 plane.
    fn upright() -> Triangle {
        Triangle::new(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, -1.0),
            material(),
        )
        .unwrap()
    }

    /// Triangle in the z = -1 plane.
    fn facing() -> Triangle {
        Triangle::new(
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
            material(),
        )
        .unwrap()
    }

    #[test]
    fn test_triangle_hit_on_edge() {
        let ray = Ray::new(Vec3::new(6.0, 0.5, 0.5), Vec3::new(-1.0, 0.0, 0.0));
        let tri = upright();
        let rec = tri.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();

        assert!((rec.t - 6.0).abs() < EPS);
        assert!((rec.p - Vec3::new(0.0, 0.5, 0.5)).length() < EPS);
        assert!((ray.at(rec.t) - rec.p).length() < EPS);
    }

    #[test]
    fn test_triangle_hit_center() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let tri = facing();
        let rec = tri.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();

        assert!((rec.t - 1.0).abs() < EPS);
        assert!(rec.front_face);
        assert!((rec.normal - Vec3::Z).length() < EPS);
    }

    #[test]
    fn test_triangle_miss_pointing_away() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert!(facing().hit(&ray, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_triangle_back_face() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::new(0.0, 0.0, 1.0));
        let tri = facing();
        let rec = tri.hit(&ray, Interval::FORWARD).unwrap();

        assert!((rec.t - 2.0).abs() < EPS);
        assert!(!rec.front_face);
        assert!((rec.normal - Vec3::NEG_Z).length() < EPS);
    }

    #[test]
    fn test_triangle_containment_is_watertight() {
        let tri = facing();
        let [a, b, c] = tri.vertices();
        let origin = Vec3::new(0.3, -0.2, 4.0);

        // Strictly inside: all barycentric weights positive
        for (wa, wb) in [(0.2_f32, 0.3_f32), (0.9, 0.05), (0.05, 0.9), (0.33, 0.33), (0.01, 0.01)] {
            let target = wa * a + wb * b + (1.0 - wa - wb) * c;
            let ray = Ray::new(origin, target - origin);
            let rec = tri.hit(&ray, Interval::FORWARD);
            assert!(rec.is_some(), "missed interior point {target:?}");
            assert!((rec.unwrap().p - target).length() < EPS);
        }

        // Strictly outside: some weight negative
        for (wa, wb) in [(-0.05_f32, 0.5_f32), (0.5, -0.05), (0.6, 0.6), (1.2, 0.1)] {
            let target = wa * a + wb * b + (1.0 - wa - wb) * c;
            let ray = Ray::new(origin, target - origin);
            assert!(tri.hit(&ray, Interval::FORWARD).is_none(), "hit exterior point {target:?}");
        }
    }

    #[test]
    fn test_triangle_coplanar_origin_inside() {
        let ray = Ray::new(Vec3::new(0.0, 0.2, 0.0), Vec3::new(0.0, 1.0, 0.0));
        let tri = upright();
        let rec = tri.hit(&ray, Interval::FORWARD).unwrap();

        assert_eq!(rec.t, 0.0);
        assert!((rec.p - Vec3::new(0.0, 0.2, 0.0)).length() < EPS);
    }

    #[test]
    fn test_triangle_coplanar_ray_enters_through_edge() {
        // Starts below the bottom edge (z from -1 to 1 at y = 0), aims up
        let ray = Ray::new(Vec3::new(0.0, -2.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        let tri = upright();
        let rec = tri.hit(&ray, Interval::FORWARD).unwrap();

        assert!((rec.t - 2.0).abs() < EPS);
        assert!((rec.p - Vec3::new(0.0, 0.0, 0.0)).length() < EPS);
    }

    #[test]
    fn test_triangle_coplanar_ray_misses() {
        // In the plane, outside the triangle, pointing away from it
        let away = Ray::new(Vec3::new(0.0, -2.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(upright().hit(&away, Interval::FORWARD).is_none());

        // In the plane, passing beside it
        let beside = Ray::new(Vec3::new(0.0, -2.0, 3.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(upright().hit(&beside, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_triangle_origin_in_plane_not_coplanar() {
        // Leaves the plane immediately from outside the triangle
        let ray = Ray::new(Vec3::new(0.0, -2.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
        assert!(upright().hit(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_triangle_coplanar_edge_hit_respects_interval() {
        let ray = Ray::new(Vec3::new(0.0, -2.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(upright().hit(&ray, Interval::new(0.001, f32::INFINITY)).is_some());
        assert!(upright().hit(&ray, Interval::new(0.001, 1.0)).is_none());
    }

    #[test]
    fn test_triangle_hit_is_idempotent() {
        let tri = upright();
        let ray = Ray::new(Vec3::new(-3.0, 0.3, 0.1), Vec3::new(1.0, 0.0, 0.0));

        let first = tri.hit(&ray, Interval::FORWARD).unwrap();
        let second = tri.hit(&ray, Interval::FORWARD).unwrap();
        assert_eq!(first.t, second.t);
        assert_eq!(first.p, second.p);
        assert_eq!(first.normal, second.normal);
    }

    #[test]
    fn test_triangle_rejects_colinear() {
        let err = Triangle::new(
            Vec3::ZERO,
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(2.0, 2.0, 2.0),
            material(),
        )
        .unwrap_err();
        assert_eq!(err, GeometryError::ColinearVertices);
    }
}
