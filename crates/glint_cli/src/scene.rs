//! Demo scenes and the composite shapes they are built from.

use std::f32::consts::PI;
use std::sync::Arc;

use clap::ValueEnum;
use glint_math::{EulerRot, Quat};
use glint_tracer::{
    Color, Dielectric, GeometryResult, HittableList, Lambertian, Material, Phong, Plane, Point3,
    Sphere, Triangle, Vec3,
};

/// Number of triangle slices in a circle.
const CIRCLE_SLICES: u32 = 10;

/// Which built-in scene to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Ringed planet, moons and a tetrahedron inside a lit room behind glass
    Planets,
    /// A single gray ringed planet under the default sky
    Planet,
    /// A Phong-shaded tetrahedron up close
    Tetrahedron,
}

/// A world plus where to look at it from.
pub struct Scene {
    pub world: HittableList,
    pub look_from: Point3,
    pub look_at: Point3,
    pub vfov: f32,
    /// Background gradient (bottom, top) used unless a config overrides it
    pub sky: (Color, Color),
}

impl Scene {
    pub fn build(kind: SceneKind) -> GeometryResult<Self> {
        match kind {
            SceneKind::Planets => planets(),
            SceneKind::Planet => single_planet(),
            SceneKind::Tetrahedron => close_tetrahedron(),
        }
    }
}

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::new(r as f32, g as f32, b as f32) / 255.0
}

fn lambertian(color: Color) -> Arc<Material> {
    Arc::new(Lambertian::new(color).into())
}

/// A wall lit from far away, seen from the origin.
fn wall(diffuse: Color, light: Point3) -> Arc<Material> {
    let phong = Phong::new(Point3::ZERO)
        .with_colors(diffuse, Color::ONE, Color::splat(0.01))
        .with_light(light)
        .with_coefficients(0.45, 0.45, 0.1, 20.0);
    Arc::new(phong.into())
}

/// Rotation by Euler angles applied about x first, then y, then z.
fn euler_rotation(angles: Vec3) -> Quat {
    Quat::from_euler(EulerRot::ZYX, angles.z, angles.y, angles.x)
}

/// Flat disk of radius `r` around `c` as a fan of triangles.
///
/// The disk starts in the xy plane and is turned by the Euler angles in
/// `angles` (x, then y, then z) before being moved to `c`.
pub fn circle(
    c: Point3,
    r: f32,
    material: Arc<Material>,
    angles: Vec3,
    world: &mut HittableList,
) -> GeometryResult<()> {
    let rotation = euler_rotation(angles);
    let dtheta = 2.0 * PI / CIRCLE_SLICES as f32;
    let rim = |i: u32| {
        let theta = i as f32 * dtheta;
        let p = Vec3::new(r * theta.cos(), r * theta.sin(), 0.0);
        rotation * p + c
    };

    for i in 0..CIRCLE_SLICES {
        world.push(Triangle::new(c, rim(i), rim(i + 1), material.clone())?);
    }
    Ok(())
}

/// Four triangular faces spanning the given corners.
pub fn tetrahedron(
    corners: [Point3; 4],
    material: Arc<Material>,
    world: &mut HittableList,
) -> GeometryResult<()> {
    let [p1, p2, p3, p4] = corners;
    for (a, b, c) in [(p1, p2, p3), (p1, p2, p4), (p1, p3, p4), (p4, p2, p3)] {
        world.push(Triangle::new(a, b, c, material.clone())?);
    }
    Ok(())
}

/// A sphere of radius `r` with a ring reaching `d` beyond its surface.
pub fn planet(
    c: Point3,
    r: f32,
    d: f32,
    body: Arc<Material>,
    ring: Arc<Material>,
    angles: Vec3,
    world: &mut HittableList,
) -> GeometryResult<()> {
    world.push(Sphere::new(c, r, body)?);
    circle(c, r + d, ring, angles, world)
}

fn ring_tilt() -> Vec3 {
    Vec3::new(-0.45 * PI, 0.0, 0.1 * PI)
}

fn planets() -> GeometryResult<Scene> {
    let far_light = Point3::new(0.0, 100.0, -1000.0);
    let low_light = Point3::new(0.0, 3.0, -10000.0);
    let violet = rgb(49, 38, 96);

    let mut world = HittableList::new();

    // Room
    world.push(Plane::new(
        Point3::new(0.0, -4.0, 0.0),
        Vec3::new(0.0, 1.0, -0.6),
        wall(rgb(88, 98, 100), low_light),
    )?);
    world.push(Plane::new(
        Point3::new(6.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.7),
        wall(violet, far_light),
    )?);
    world.push(Plane::new(
        Point3::new(-6.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, -0.7),
        wall(violet, far_light),
    )?);
    world.push(Plane::new(
        Point3::new(0.0, 4.0, 0.0),
        Vec3::new(0.0, 1.0, 0.6),
        wall(Color::ZERO, low_light),
    )?);

    // Window
    world.push(Plane::new(
        Point3::new(0.0, 0.0, -100.0),
        Vec3::Z,
        Arc::new(Dielectric::new(1.5).into()),
    )?);

    planet(
        Point3::new(0.0, 0.0, -120.0),
        20.0,
        20.0,
        lambertian(rgb(237, 219, 173)),
        lambertian(rgb(252, 238, 173)),
        ring_tilt(),
        &mut world,
    )?;
    world.push(Sphere::new(Point3::new(-30.0, 30.0, -200.0), 3.0, lambertian(rgb(246, 255, 104)))?);
    world.push(Sphere::new(Point3::new(25.0, 18.0, -120.0), 5.0, lambertian(rgb(140, 140, 148)))?);
    world.push(Sphere::new(Point3::new(30.0, -30.0, -160.0), 10.0, lambertian(rgb(98, 174, 231)))?);

    tetrahedron(
        [
            Point3::new(13.0, -16.0, -20.0),
            Point3::new(8.0, -28.0, -40.0),
            Point3::new(30.0, -28.0, -40.0),
            Point3::new(13.0, -10.0, -30.0),
        ],
        lambertian(rgb(211, 236, 230)),
        &mut world,
    )?;

    let night = rgb(1, 5, 14);
    Ok(Scene {
        world,
        look_from: Point3::ZERO,
        look_at: Point3::new(0.0, 0.0, -120.0),
        vfov: 90.0,
        sky: (night, night),
    })
}

fn single_planet() -> GeometryResult<Scene> {
    let mut world = HittableList::new();
    planet(
        Point3::new(0.0, 0.0, -3.0),
        1.0,
        0.8,
        lambertian(Color::splat(0.5)),
        lambertian(rgb(252, 238, 173)),
        ring_tilt(),
        &mut world,
    )?;

    Ok(Scene {
        world,
        look_from: Point3::ZERO,
        look_at: Point3::new(0.0, 0.0, -3.0),
        vfov: 90.0,
        sky: (Color::ONE, Color::new(0.5, 0.7, 1.0)),
    })
}

fn close_tetrahedron() -> GeometryResult<Scene> {
    let mut world = HittableList::new();
    tetrahedron(
        [
            Point3::new(0.0, -0.8, -1.0),
            Point3::new(2.0, -1.0, -2.0),
            Point3::new(-2.0, -1.0, -2.0),
            Point3::new(0.0, 1.0, -1.5),
        ],
        wall(rgb(49, 38, 96), Point3::new(1.0, 0.0, 0.0)),
        &mut world,
    )?;

    Ok(Scene {
        world,
        look_from: Point3::ZERO,
        look_at: Point3::new(0.0, 0.0, -1.0),
        vfov: 90.0,
        sky: (Color::ONE, Color::new(0.5, 0.7, 1.0)),
    })
}
