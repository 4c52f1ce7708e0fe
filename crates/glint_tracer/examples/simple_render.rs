//! Simple path tracer example.
//!
//! Renders three spheres on a ground plane and saves a PNG.

use std::sync::Arc;

use glint_tracer::{
    render, Camera, Color, Dielectric, HittableList, ImageBuffer, Lambertian, Material, Metal,
    Plane, RenderConfig, Sphere, Vec3,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Glint Path Tracer - Simple Example");
    println!("==================================");

    let world = build_scene()?;

    let (width, height) = (400, 225);
    let mut camera = Camera::new()
        .with_position(
            Vec3::new(0.0, 1.0, 3.0),  // look_from
            Vec3::new(0.0, 0.0, -1.0), // look_at
            Vec3::new(0.0, 1.0, 0.0),  // vup
        )
        .with_lens(50.0, 0.1, 4.0)
        .with_aspect_ratio(width as f32 / height as f32);
    camera.initialize();

    let config = RenderConfig {
        samples_per_pixel: 50,
        max_depth: 20,
        seed: Some(7),
        ..RenderConfig::default()
    };

    let start = std::time::Instant::now();
    let mut image = ImageBuffer::new(width, height)?;
    render(&camera, &world, &config, &mut image);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "simple_render.png";
    image.save(filename)?;
    println!("Saved to {}", filename);

    Ok(())
}

fn build_scene() -> Result<HittableList, glint_tracer::GeometryError> {
    let ground = Arc::new(Material::from(Lambertian::new(Color::new(0.8, 0.8, 0.0))));
    let center = Arc::new(Material::from(Lambertian::new(Color::new(0.1, 0.2, 0.5))));
    let left = Arc::new(Material::from(Dielectric::new(1.5)));
    let right = Arc::new(Material::from(Metal::new(Color::new(0.8, 0.6, 0.2), 0.1)));

    let mut world = HittableList::new();
    world.push(Plane::new(Vec3::new(0.0, -0.5, 0.0), Vec3::Y, ground)?);
    world.push(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, center)?);
    world.push(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.5, left)?);
    world.push(Sphere::new(Vec3::new(1.0, 0.0, -1.0), 0.5, right)?);

    println!("Created {} objects", world.len());
    Ok(world)
}
