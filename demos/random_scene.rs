use std::path::PathBuf;

use anyhow::Result;
use polyring_rs::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Rolls a random scene from a seed, saves its config as a .ring.ron scene
/// file, and renders the first frame to random_scene.svg. Rerun with the
/// same RING_SEED to get the same drawing.
fn main() -> Result<()> {
    env_logger::init();

    let seed = std::env::var("RING_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(1);
    let mut rng = SmallRng::seed_from_u64(seed);

    let config = SceneConfig::random(&mut rng, 2, 3);
    config.to_file(&PathBuf::from("random_scene"))?;

    let mut scene = Scene::new(&config)?;
    let renderer = FrameRenderer::new(600.0, 600.0);
    let mut surface = SvgSurface::new(600.0, 600.0);
    renderer.render_scene(&mut scene, &mut surface)?;
    svg::save("random_scene.svg", &surface.to_svg())?;
    println!("Seed {}: wrote random_scene.ring.ron and random_scene.svg", seed);
    Ok(())
}
