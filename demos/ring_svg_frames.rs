use anyhow::Result;
use polyring_rs::config::{
    DotsConfig, GroupConfig, RingConfig, RingPosition, RotationConfig, ScaleConfig, ScaleRange,
    SceneConfig, SidesConfig,
};
use polyring_rs::prelude::*;

/// Renders the first few ticks of a hand-built two-ring scene to
/// frame_NNN.svg files in the current directory. Stack the frames in an
/// external GIF encoder if you want them to move.
fn main() -> Result<()> {
    env_logger::init();

    let size = 400.0;
    let frames = 24;

    let outer = RingConfig {
        active: true,
        position: RingPosition { x: 0.0, y: 0.0 },
        rotation: RotationConfig {
            enabled: true,
            clockwise: true,
            speed: 3.0,
            starting_rotation: 0.0,
        },
        scale: ScaleConfig {
            enabled: true,
            speed: 2.0,
            starting_size: 120.0,
            range: ScaleRange { min: 80.0, max: 160.0 },
        },
        sides: SidesConfig {
            enabled: true,
            amount: 6,
            stroke_width: 2.0,
            colours: vec!["#277da1".to_string(), "#43aa8b".to_string()],
        },
        dots: DotsConfig {
            enabled: true,
            size: 10.0,
            stroke_width: 1.0,
            fill_colours: vec!["#f9c74f".to_string()],
            stroke_colours: vec!["black".to_string()],
        },
    };
    let mut inner = outer.clone();
    inner.rotation.clockwise = false;
    inner.sides.amount = 3;
    inner.scale.starting_size = 60.0;
    inner.scale.range = ScaleRange { min: 30.0, max: 90.0 };
    inner.sides.colours = vec!["#f94144".to_string()];

    let config = SceneConfig {
        groups: vec![GroupConfig { rings: vec![outer, inner] }],
    };
    let mut scene = Scene::new(&config)?;
    let renderer = FrameRenderer::new(size, size);

    for tick in 0..frames {
        let mut surface = SvgSurface::new(size, size);
        renderer.render_scene(&mut scene, &mut surface)?;
        svg::save(format!("frame_{:03}.svg", tick), &surface.to_svg())?;
    }
    println!("Wrote {} frames.", frames);
    Ok(())
}
