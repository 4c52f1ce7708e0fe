//! Glint - command line path tracer
//!
//! Renders one of the built-in scenes to a PNG file.

mod scene;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glint_tracer::{render, render_normals, Camera, ImageBuffer, RenderConfig, Vec3};

use crate::scene::{Scene, SceneKind};

#[derive(Parser, Debug)]
#[command(name = "glint", version, about = "Render a scene with the Glint path tracer")]
struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 400)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 225)]
    height: u32,

    /// Samples per pixel (overrides the config file)
    #[arg(long)]
    samples: Option<u32>,

    /// Maximum bounce depth (overrides the config file)
    #[arg(long)]
    depth: Option<u32>,

    /// Seed for a reproducible render
    #[arg(long)]
    seed: Option<u64>,

    /// JSON render configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scene to render
    #[arg(long, value_enum, default_value_t = SceneKind::Planets)]
    scene: SceneKind,

    /// Render surface normals as colors instead of path tracing
    #[arg(long)]
    normals: bool,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,
}

fn load_config(path: &Path) -> Result<RenderConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
}

/// Config file (or scene sky) first, then command line overrides.
fn resolve_config(args: &Args, scene: &Scene) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => RenderConfig {
            sky_bottom: scene.sky.0,
            sky_top: scene.sky.1,
            ..RenderConfig::default()
        },
    };

    if let Some(samples) = args.samples {
        config.samples_per_pixel = samples;
    }
    if let Some(depth) = args.depth {
        config.max_depth = depth;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

fn build_camera(scene: &Scene, width: u32, height: u32) -> Camera {
    let focus_dist = (scene.look_from - scene.look_at).length();
    let mut camera = Camera::new()
        .with_position(scene.look_from, scene.look_at, Vec3::Y)
        .with_lens(scene.vfov, 0.0, focus_dist)
        .with_aspect_ratio(width as f32 / height as f32);
    camera.initialize();
    camera
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let scene = Scene::build(args.scene)
        .with_context(|| format!("Failed to assemble scene {:?}", args.scene))?;
    log::info!("Scene {:?}: {} objects", args.scene, scene.world.len());

    let config = resolve_config(&args, &scene)?;
    let camera = build_camera(&scene, args.width, args.height);

    let mut image = ImageBuffer::new(args.width, args.height)
        .context("Failed to allocate image")?;

    let start = Instant::now();
    if args.normals {
        render_normals(&camera, &scene.world, &config, &mut image);
    } else {
        render(&camera, &scene.world, &config, &mut image);
    }
    log::info!("Rendered in {:.2?}", start.elapsed());

    image
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}
