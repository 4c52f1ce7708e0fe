//! Infinite plane primitive.

use std::sync::Arc;

use crate::{
    error::{GeometryError, GeometryResult},
    hittable::{HitRecord, Hittable},
    Material, Point3, Ray,
};
use glint_math::{Interval, NearZero, Vec3};

/// An infinite plane through `point`.
#[derive(Debug, Clone)]
pub struct Plane {
    point: Point3,
    /// Unit normal in canonical orientation
    normal: Vec3,
    material: Arc<Material>,
}

impl Plane {
    /// Create a new plane. The normal may have any length or sign, but not zero.
    pub fn new(point: Point3, normal: Vec3, material: Arc<Material>) -> GeometryResult<Self> {
        if normal.near_zero() {
            return Err(GeometryError::ZeroNormal);
        }

        Ok(Self {
            point,
            normal: canonical_normal(normal.normalize()),
            material,
        })
    }

    pub fn point(&self) -> Point3 {
        self.point
    }

    /// The canonical unit normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Ray parameter where the ray meets the plane, ignoring any interval.
    ///
    /// A ray lying in the plane meets it at its origin, t = 0. Parallel rays
    /// off the plane and rays pointing away return `None`.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let d = ray.direction().dot(self.normal);
        let q = (self.point - ray.origin()).dot(self.normal);

        if d.near_zero() {
            return if q.near_zero() { Some(0.0) } else { None };
        }

        let t = q / d;
        if t < 0.0 {
            return None;
        }
        Some(t)
    }
}

impl Hittable for Plane {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let t = self.intersect(ray)?;
        if !ray_t.admits(t) {
            return None;
        }
        Some(HitRecord::new(ray, t, self.normal, &self.material))
    }
}

/// Pick one of the two opposite normals by a fixed global rule.
///
/// The result never points toward +x; with no x component it never points
/// toward -y; and lying on the z axis it never points toward -z. Shading then
/// depends only on the plane's geometry, not on the sign a caller passed in.
pub(crate) fn canonical_normal(n: Vec3) -> Vec3 {
    let flip = if !n.x.near_zero() {
        n.x > 0.0
    } else if !n.y.near_zero() {
        n.y < 0.0
    } else {
        n.z < 0.0
    };

    if flip {
        -n
    } else {
        n
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

    fn ground() -> Plane {
        Plane::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0), material()).unwrap()
    }

    fn assert_hit(plane: &Plane, ray: Ray, p: Vec3, normal: Vec3, t: f32, front_face: bool) {
        let rec = plane.hit(&ray, Interval::FORWARD).unwrap();
        assert!((rec.p - p).length() < EPS, "p = {:?}", rec.p);
        assert!((rec.normal - normal).length() < EPS, "normal = {:?}", rec.normal);
        assert!((rec.t - t).abs() < EPS, "t = {}", rec.t);
        assert_eq!(rec.front_face, front_face);
    }

    #[test]
    fn test_canonical_normal() {
        assert_eq!(canonical_normal(Vec3::X), Vec3::NEG_X);
        assert_eq!(canonical_normal(Vec3::NEG_Y), Vec3::Y);
        assert_eq!(canonical_normal(Vec3::NEG_Z), Vec3::Z);
        assert_eq!(canonical_normal(Vec3::Z), Vec3::Z);
        assert_eq!(
            canonical_normal(Vec3::new(0.6, -0.8, 0.0)),
            Vec3::new(-0.6, 0.8, 0.0)
        );
    }

    #[test]
    fn test_plane_hit_from_above() {
        assert_hit(
            &ground(),
            Ray::new(Vec3::new(0.0, 2.0, 3.0), Vec3::new(0.0, -2.0, 0.0)),
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(0.0, 1.0, 0.0),
            1.0,
            true,
        );
    }

    #[test]
    fn test_plane_origin_on_plane() {
        assert_hit(
            &ground(),
            Ray::new(Vec3::new(2.0, 0.0, 3.0), Vec3::new(0.0, 6.0, 0.0)),
            Vec3::new(2.0, 0.0, 3.0),
            Vec3::new(0.0, -1.0, 0.0),
            0.0,
            false,
        );
    }

    #[test]
    fn test_plane_hit_from_below() {
        assert_hit(
            &ground(),
            Ray::new(Vec3::new(6.0, -8.0, 4.0), Vec3::new(0.0, 2.0, 0.0)),
            Vec3::new(6.0, 0.0, 4.0),
            Vec3::new(0.0, -1.0, 0.0),
            4.0,
            false,
        );
    }

    #[test]
    fn test_plane_ray_inside_plane() {
        assert_hit(
            &ground(),
            Ray::new(Vec3::new(6.0, 0.0, 6.0), Vec3::new(2.0, 0.0, 9.0)),
            Vec3::new(6.0, 0.0, 6.0),
            Vec3::new(0.0, -1.0, 0.0),
            0.0,
            false,
        );
    }

    #[test]
    fn test_plane_parallel_miss() {
        let plane = ground();
        let above = Ray::new(Vec3::new(0.0, 2.0, 3.0), Vec3::new(2.0, 0.0, 3.0));
        let just_below = Ray::new(Vec3::new(1.0, -0.0001, 4.0), Vec3::new(1.0, 0.0, 1.0));

        assert!(plane.hit(&above, Interval::FORWARD).is_none());
        assert!(plane.hit(&just_below, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_plane_pointing_away_misses() {
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(ground().hit(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_plane_origin_hit_excluded_by_min() {
        // t = 0 is self-intersection territory for a bounced ray
        let ray = Ray::new(Vec3::new(2.0, 0.0, 3.0), Vec3::new(0.0, 6.0, 0.0));
        assert!(ground().hit(&ray, Interval::new(0.001, f32::INFINITY)).is_none());
        assert_eq!(ground().intersect(&ray), Some(0.0));
    }

    #[test]
    fn test_plane_normal_sign_is_irrelevant() {
        let up = ground();
        let down = Plane::new(Vec3::ZERO, Vec3::new(0.0, -0.5, 0.0), material()).unwrap();
        assert_eq!(up.normal(), down.normal());

        let rays = [
            Ray::new(Vec3::new(1.0, 5.0, -2.0), Vec3::new(0.3, -1.0, 0.2)),
            Ray::new(Vec3::new(-4.0, -3.0, 1.0), Vec3::new(0.0, 1.0, -0.5)),
            Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)),
        ];
        for ray in rays {
            let a = up.hit(&ray, Interval::FORWARD).unwrap();
            let b = down.hit(&ray, Interval::FORWARD).unwrap();
            assert_eq!(a.t, b.t);
            assert_eq!(a.p, b.p);
            assert_eq!(a.normal, b.normal);
            assert_eq!(a.front_face, b.front_face);
            assert!((ray.at(a.t) - a.p).length() < EPS);
        }
    }

    #[test]
    fn test_plane_rejects_zero_normal() {
        assert_eq!(
            Plane::new(Vec3::ZERO, Vec3::ZERO, material()).unwrap_err(),
            GeometryError::ZeroNormal
        );
    }
}
