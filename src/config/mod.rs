//! Declarative ring configuration. These records are what the editing UI
//! (or a scene file, or the randomizer) hands to the animation engine; the
//! engine takes a snapshot at construction and never looks back. Editing a
//! config means building a replacement animator, never patching a live one.
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub mod file;
pub mod random;

/// Offset from the centre of the drawing surface, as a percentage of the
/// surface dimensions in each axis. -100..100, where 0,0 is dead centre.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RingPosition {
    pub x: f64,
    pub y: f64,
}

impl Default for RingPosition {
    fn default() -> Self {
        RingPosition { x: 0.0, y: 0.0 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RotationConfig {
    pub enabled: bool,
    pub clockwise: bool,
    /// Degrees per tick. Valid range [0, 360).
    pub speed: f64,
    /// Initial rotation in degrees, [0, 360).
    pub starting_rotation: f64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        RotationConfig {
            enabled: true,
            clockwise: true,
            speed: 1.0,
            starting_rotation: 0.0,
        }
    }
}

/// Inclusive circumradius bounds for the scale oscillation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ScaleRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ScaleConfig {
    pub enabled: bool,
    /// Circumradius units per tick.
    pub speed: f64,
    /// Initial circumradius.
    pub starting_size: f64,
    pub range: ScaleRange,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        ScaleConfig {
            enabled: true,
            speed: 1.0,
            starting_size: 100.0,
            range: ScaleRange { min: 50.0, max: 250.0 },
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SidesConfig {
    pub enabled: bool,
    /// Vertex count of the regular polygon, 1..=20.
    pub amount: u32,
    pub stroke_width: f64,
    /// Edge stroke palette, cycled round-robin by edge index.
    pub colours: Vec<String>,
}

impl Default for SidesConfig {
    fn default() -> Self {
        SidesConfig {
            enabled: true,
            amount: 6,
            stroke_width: 2.0,
            colours: vec!["black".to_string()],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DotsConfig {
    pub enabled: bool,
    /// Dot diameter in pixels.
    pub size: f64,
    pub stroke_width: f64,
    /// Fill palette, cycled round-robin by vertex index.
    pub fill_colours: Vec<String>,
    /// Stroke palette, cycled round-robin by vertex index.
    pub stroke_colours: Vec<String>,
}

impl Default for DotsConfig {
    fn default() -> Self {
        DotsConfig {
            enabled: true,
            size: 10.0,
            stroke_width: 1.0,
            fill_colours: vec!["black".to_string()],
            stroke_colours: vec!["black".to_string()],
        }
    }
}

/// Full description of one animated ring. See [`crate::animator::RingAnimator`]
/// for the lifecycle: an animator is built from a snapshot of this, and a
/// structurally changed config means a brand new animator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RingConfig {
    /// Inactive rings still draw, they just never advance.
    pub active: bool,
    pub position: RingPosition,
    pub rotation: RotationConfig,
    pub scale: ScaleConfig,
    pub sides: SidesConfig,
    pub dots: DotsConfig,
}

impl Default for RingConfig {
    fn default() -> Self {
        RingConfig {
            active: true,
            position: Default::default(),
            rotation: Default::default(),
            scale: Default::default(),
            sides: Default::default(),
            dots: Default::default(),
        }
    }
}

impl RingConfig {
    /// Checks the config for the handful of ways it can be nonsense:
    /// side count outside 1..=20, an inverted scale range, a rotation
    /// speed the wraparound rule can't contain, or a palette that is
    /// empty or contains a colour string csscolorparser rejects.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sides.amount < 1 || self.sides.amount > 20 {
            return Err(ConfigError::InvalidSideCount(self.sides.amount));
        }
        if self.scale.range.min > self.scale.range.max {
            return Err(ConfigError::InvertedScaleRange(
                self.scale.range.min,
                self.scale.range.max,
            ));
        }
        if !(0.0..360.0).contains(&self.rotation.speed) {
            return Err(ConfigError::RotationSpeedOutOfRange(self.rotation.speed));
        }
        Self::validate_palette("sides", &self.sides.colours)?;
        Self::validate_palette("dot fill", &self.dots.fill_colours)?;
        Self::validate_palette("dot stroke", &self.dots.stroke_colours)?;
        Ok(())
    }

    fn validate_palette(which: &'static str, colours: &[String]) -> Result<(), ConfigError> {
        if colours.is_empty() {
            return Err(ConfigError::EmptyPalette(which));
        }
        for colour in colours {
            if csscolorparser::parse(colour).is_err() {
                return Err(ConfigError::BadColour(colour.clone()));
            }
        }
        Ok(())
    }
}

/// An ordered set of rings animated together.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GroupConfig {
    pub rings: Vec<RingConfig>,
}

impl GroupConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for ring in &self.rings {
            ring.validate()?;
        }
        Ok(())
    }
}

/// The whole drawing: an ordered set of groups.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SceneConfig {
    pub groups: Vec<GroupConfig>,
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for group in &self.groups {
            group.validate()?;
        }
        Ok(())
    }
}
