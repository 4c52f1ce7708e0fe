//! Surface scattering models.
//!
//! The set of materials is closed, so they live in one enum and dispatch by
//! `match`. Primitives share them through `Arc<Material>`.

use glint_math::sampling::{gen_f32, random_unit_vector};
use glint_math::{NearZero, Point3, Vec3};
use rand::RngCore;

use crate::{hittable::HitRecord, Ray};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Outcome of a ray striking a surface.
#[derive(Debug, Clone, Copy)]
pub struct ScatterResult {
    /// Per-channel factor applied to whatever the path gathers next.
    pub attenuation: Color,
    /// The continuing ray, or `None` when the path ends here and
    /// `attenuation` is the final contribution.
    pub scattered: Option<Ray>,
}

impl ScatterResult {
    fn bounce(attenuation: Color, scattered: Ray) -> Self {
        Self {
            attenuation,
            scattered: Some(scattered),
        }
    }

    fn terminal(attenuation: Color) -> Self {
        Self {
            attenuation,
            scattered: None,
        }
    }
}

/// Every surface model the tracer knows.
#[derive(Debug, Clone)]
pub enum Material {
    Lambertian(Lambertian),
    Metal(Metal),
    Dielectric(Dielectric),
    Phong(Phong),
}

impl Material {
    /// Scatter an incoming ray.
    ///
    /// Returns `None` only when there is nothing to contribute at all; every
    /// built-in material produces a result.
    pub fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        match self {
            Material::Lambertian(m) => m.scatter(rec, rng),
            Material::Metal(m) => m.scatter(ray_in, rec, rng),
            Material::Dielectric(m) => m.scatter(ray_in, rec, rng),
            Material::Phong(m) => m.scatter(rec),
        }
    }
}

impl From<Lambertian> for Material {
    fn from(m: Lambertian) -> Self {
        Material::Lambertian(m)
    }
}

impl From<Metal> for Material {
    fn from(m: Metal) -> Self {
        Material::Metal(m)
    }
}

impl From<Dielectric> for Material {
    fn from(m: Dielectric) -> Self {
        Material::Dielectric(m)
    }
}

impl From<Phong> for Material {
    fn from(m: Phong) -> Self {
        Material::Phong(m)
    }
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }

    fn scatter(&self, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        let unit_normal = rec.normal.normalize();
        let mut scatter_direction = unit_normal + random_unit_vector(rng);

        // Catch degenerate scatter direction
        if scatter_direction.near_zero() {
            scatter_direction = unit_normal;
        }

        Some(ScatterResult::bounce(
            self.albedo,
            Ray::new(rec.p, scatter_direction),
        ))
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone)]
pub struct Metal {
    albedo: Color,
    fuzz: f32,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough
    pub fn new(albedo: Color, fuzz: f32) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    /// Roughness after clamping.
    pub fn fuzz(&self) -> f32 {
        self.fuzz
    }

    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let unit_normal = rec.normal.normalize();
        let reflected = reflect(ray_in.direction().normalize(), unit_normal);
        let direction = reflected + self.fuzz * random_unit_vector(rng);

        // Fuzz can push the ray below the surface; it is absorbed there
        if direction.dot(unit_normal) > 0.0 {
            Some(ScatterResult::bounce(self.albedo, Ray::new(rec.p, direction)))
        } else {
            Some(ScatterResult::terminal(self.albedo))
        }
    }
}

/// Dielectric (glass) material.
#[derive(Debug, Clone)]
pub struct Dielectric {
    /// Index of refraction
    ir: f32,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// - `ir`: Index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
    pub fn new(ir: f32) -> Self {
        Self { ir }
    }

    /// Schlick's approximation for reflectance
    fn reflectance(cosine: f32, ref_idx: f32) -> f32 {
        let r0 = ((1.0 - ref_idx) / (1.0 + ref_idx)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }

    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let refraction_ratio = if rec.front_face {
            1.0 / self.ir
        } else {
            self.ir
        };

        let unit_direction = ray_in.direction().normalize();
        let unit_normal = rec.normal.normalize();
        let cos_theta = (-unit_direction).dot(unit_normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        // Check for total internal reflection
        let cannot_refract = refraction_ratio * sin_theta > 1.0;

        let direction = if cannot_refract
            || Self::reflectance(cos_theta, refraction_ratio) > gen_f32(rng)
        {
            reflect(unit_direction, unit_normal)
        } else {
            refract(unit_direction, unit_normal, refraction_ratio)
        };

        Some(ScatterResult::bounce(Color::ONE, Ray::new(rec.p, direction)))
    }
}

/// Direct local illumination from a single point light.
///
/// Shades with ambient + diffuse + specular terms and never bounces, for
/// surfaces that should only show direct lighting.
#[derive(Debug, Clone)]
pub struct Phong {
    diffuse_color: Color,
    specular_color: Color,
    ambient_color: Color,
    light_pos: Point3,
    view_pos: Point3,
    kd: f32,
    ks: f32,
    ka: f32,
    shininess: f32,
}

impl Phong {
    /// A blue plastic look lit from `(5, 5, 0)`, seen from `view_pos`.
    pub fn new(view_pos: Point3) -> Self {
        Self {
            diffuse_color: Color::new(0.0, 0.0, 1.0),
            specular_color: Color::ONE,
            ambient_color: Color::splat(0.01),
            light_pos: Point3::new(5.0, 5.0, 0.0),
            view_pos,
            kd: 0.45,
            ks: 0.45,
            ka: 0.1,
            shininess: 10.0,
        }
    }

    /// Set the diffuse, specular and ambient colors.
    pub fn with_colors(mut self, diffuse: Color, specular: Color, ambient: Color) -> Self {
        self.diffuse_color = diffuse;
        self.specular_color = specular;
        self.ambient_color = ambient;
        self
    }

    /// Set the point light position.
    pub fn with_light(mut self, light_pos: Point3) -> Self {
        self.light_pos = light_pos;
        self
    }

    /// Set the diffuse, specular and ambient weights and the specular exponent.
    pub fn with_coefficients(mut self, kd: f32, ks: f32, ka: f32, shininess: f32) -> Self {
        self.kd = kd;
        self.ks = ks;
        self.ka = ka;
        self.shininess = shininess;
        self
    }

    /// Local illumination at the hit point.
    pub fn shade(&self, rec: &HitRecord) -> Color {
        let ambient = self.ka * self.ambient_color;

        let unit_normal = rec.normal.normalize();
        let light_dir = (self.light_pos - rec.p).normalize();
        let diffuse = self.kd * unit_normal.dot(light_dir).max(0.0) * self.diffuse_color;

        let reflection = (-reflect(light_dir, unit_normal)).normalize();
        let view_dir = (self.view_pos - rec.p).normalize();
        let highlight = view_dir.dot(reflection).max(0.0).powf(self.shininess);
        let specular = self.ks * highlight * self.specular_color;

        ambient + diffuse + specular
    }

    fn scatter(&self, rec: &HitRecord) -> Option<ScatterResult> {
        Some(ScatterResult::terminal(self.shade(rec)))
    }
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface with unit normal `n`.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f32) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}
