//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with a hard depth cutoff
//! - Anti-aliasing via jittered multi-sampling
//! - Clamping and gamma correction for display

use std::time::Instant;

use glint_math::sampling::gen_f32;
use glint_math::Interval;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{Camera, Color, Hittable, ImageBuffer, Ray};

/// Nearest hit distance a bounced ray will accept, to avoid shadow acne.
pub const SHADOW_ACNE_EPSILON: f32 = 0.001;

/// Channel range after averaging, kept just below 1 for 8-bit encoding.
const DISPLAY_RANGE: Interval = Interval { min: 0.0, max: 0.999 };

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Background color for rays pointing straight down
    pub sky_bottom: Color,
    /// Background color for rays pointing straight up
    pub sky_top: Color,
    /// Seed for the sample generator; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 10,
            max_depth: 10,
            sky_bottom: Color::ONE,
            sky_top: Color::new(0.5, 0.7, 1.0),
            seed: None,
        }
    }
}

/// Compute the color seen by a ray.
///
/// Follows the ray through the scene, multiplying in each surface's
/// attenuation, until it escapes to the sky, ends on a non-scattering
/// surface, or runs out of depth.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    // If we've exceeded max depth, return black (no light)
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = world.hit(ray, Interval::new(SHADOW_ACNE_EPSILON, f32::INFINITY)) else {
        return sky_gradient(ray, config);
    };

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => match result.scattered {
            Some(scattered) => {
                result.attenuation * ray_color(&scattered, world, depth - 1, config, rng)
            }
            // Path ends here and contributes the surface color directly
            None => result.attenuation,
        },
        None => Color::ZERO,
    }
}

/// Vertical background gradient.
fn sky_gradient(ray: &Ray, config: &RenderConfig) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * config.sky_bottom + a * config.sky_top
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Average accumulated samples, clamp, and gamma-encode for display.
pub fn encode_color(sum: Color, samples: u32) -> Color {
    let scale = 1.0 / samples.max(1) as f32;
    let encode = |c: f32| linear_to_gamma(DISPLAY_RANGE.clamp(c * scale));
    Color::new(encode(sum.x), encode(sum.y), encode(sum.z))
}

/// Render a single pixel with multi-sampling and return its display color.
///
/// Row 0 is the top of the image; each sample is jittered uniformly within
/// the pixel footprint.
#[allow(clippy::too_many_arguments)]
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    row: u32,
    col: u32,
    width: u32,
    height: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let s_span = width.saturating_sub(1).max(1) as f32;
    let t_span = height.saturating_sub(1).max(1) as f32;
    let flipped_row = height.saturating_sub(row + 1) as f32;

    let mut pixel_color = Color::ZERO;
    for _ in 0..config.samples_per_pixel {
        let s = (col as f32 + gen_f32(rng)) / s_span;
        let t = (flipped_row - gen_f32(rng)) / t_span;

        let ray = camera.get_ray(s, t, rng);
        pixel_color += ray_color(&ray, world, config.max_depth, config, rng);
    }

    encode_color(pixel_color, config.samples_per_pixel)
}

/// Render the entire scene into `image`.
///
/// Single-threaded, row by row from the top.
pub fn render(camera: &Camera, world: &dyn Hittable, config: &RenderConfig, image: &mut ImageBuffer) {
    let config = sanitized(config);
    let (width, height) = (image.width(), image.height());

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        width,
        height,
        config.samples_per_pixel,
        config.max_depth
    );
    let start = Instant::now();

    for row in 0..height {
        for col in 0..width {
            let color = render_pixel(camera, world, row, col, width, height, &config, &mut rng);
            image.set_pixel(row, col, color);
        }
        log::debug!("Row {}/{} done", row + 1, height);
    }

    log::info!("Rendered in {:?}", start.elapsed());
}

/// Color a ray by the first surface normal it meets, mapped from [-1, 1] to [0, 1].
///
/// The normal is the one stored in the hit record, so it faces the ray.
/// Misses show the background gradient.
pub fn normal_color(ray: &Ray, world: &dyn Hittable, config: &RenderConfig) -> Color {
    match world.hit(ray, Interval::new(SHADOW_ACNE_EPSILON, f32::INFINITY)) {
        Some(rec) => 0.5 * (rec.normal.normalize() + Color::ONE),
        None => sky_gradient(ray, config),
    }
}

/// Render a normal map of the scene into `image`.
///
/// One ray per pixel through the pixel corner, no gamma. Useful for checking
/// geometry and orientation without waiting for a full render.
pub fn render_normals(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    image: &mut ImageBuffer,
) {
    let (width, height) = (image.width(), image.height());
    let s_span = width.saturating_sub(1).max(1) as f32;
    let t_span = height.saturating_sub(1).max(1) as f32;

    // Only a lens camera draws from this
    let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_default());

    log::info!("Rendering {}x{} normal map", width, height);
    for row in 0..height {
        let t = height.saturating_sub(row + 1) as f32 / t_span;
        for col in 0..width {
            let ray = camera.get_ray(col as f32 / s_span, t, &mut rng);
            image.set_pixel(row, col, normal_color(&ray, world, config));
        }
    }
}

fn sanitized(config: &RenderConfig) -> RenderConfig {
    let mut config = config.clone();
    if config.samples_per_pixel == 0 {
        log::warn!("samples_per_pixel is 0, using 1");
        config.samples_per_pixel = 1;
    }
    config
}
