//! Random config generation. This is the "surprise me" button: it lives on
//! the config side of the fence, so the animator core stays deterministic.
use rand::Rng;

use super::{
    DotsConfig, GroupConfig, RingConfig, RingPosition, RotationConfig, ScaleConfig, ScaleRange,
    SceneConfig, SidesConfig,
};

/// A pleasant-enough pool to pull palettes from. Anything csscolorparser
/// can read would do.
const PALETTE_POOL: &[&str] = &[
    "#f94144", "#f3722c", "#f8961e", "#f9c74f", "#90be6d", "#43aa8b", "#577590", "#277da1",
    "#9b5de5", "#00bbf9", "black", "white",
];

fn random_palette<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let count = rng.gen_range(1..=3);
    (0..count)
        .map(|_| PALETTE_POOL[rng.gen_range(0..PALETTE_POOL.len())].to_string())
        .collect()
}

impl RingConfig {
    /// Generates a random ring which always passes [`RingConfig::validate`].
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> RingConfig {
        let min = rng.gen_range(20.0..80.0f64).round();
        let max = min + rng.gen_range(40.0..200.0f64).round();
        RingConfig {
            active: true,
            position: RingPosition {
                x: rng.gen_range(-25.0..25.0f64).round(),
                y: rng.gen_range(-25.0..25.0f64).round(),
            },
            rotation: RotationConfig {
                enabled: rng.gen_bool(0.9),
                clockwise: rng.gen_bool(0.5),
                speed: rng.gen_range(0.25..4.0),
                starting_rotation: rng.gen_range(0.0..360.0),
            },
            scale: ScaleConfig {
                enabled: rng.gen_bool(0.9),
                speed: rng.gen_range(0.25..3.0),
                starting_size: rng.gen_range(min..=max).round(),
                range: ScaleRange { min, max },
            },
            sides: SidesConfig {
                enabled: rng.gen_bool(0.8),
                amount: rng.gen_range(3..=12),
                stroke_width: rng.gen_range(1.0..4.0f64).round(),
                colours: random_palette(rng),
            },
            dots: DotsConfig {
                enabled: rng.gen_bool(0.8),
                size: rng.gen_range(4.0..16.0f64).round(),
                stroke_width: rng.gen_range(1.0..3.0f64).round(),
                fill_colours: random_palette(rng),
                stroke_colours: random_palette(rng),
            },
        }
    }
}

impl GroupConfig {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, rings: usize) -> GroupConfig {
        GroupConfig {
            rings: (0..rings).map(|_| RingConfig::random(rng)).collect(),
        }
    }
}

impl SceneConfig {
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        groups: usize,
        rings_per_group: usize,
    ) -> SceneConfig {
        SceneConfig {
            groups: (0..groups)
                .map(|_| GroupConfig::random(rng, rings_per_group))
                .collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_rings_validate() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let config = RingConfig::random(&mut rng);
            config.validate().expect("Random configs must always be valid");
        }
    }

    #[test]
    fn test_random_scene_shape() {
        let mut rng = SmallRng::seed_from_u64(42);
        let scene = SceneConfig::random(&mut rng, 3, 4);
        assert_eq!(scene.groups.len(), 3);
        assert!(scene.groups.iter().all(|g| g.rings.len() == 4));
        scene.validate().expect("Random scenes must always be valid");
    }

    #[test]
    fn test_seeded_rng_reproduces() {
        let a = SceneConfig::random(&mut SmallRng::seed_from_u64(99), 2, 2);
        let b = SceneConfig::random(&mut SmallRng::seed_from_u64(99), 2, 2);
        assert_eq!(a, b);
    }
}
