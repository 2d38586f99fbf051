use std::{
    error::Error,
    fmt::{self, Display},
};

/// Configuration that cannot produce sane geometry. Raised at animator
/// construction (or explicit validation) time; once a ring is built, the
/// per-tick updates are total and have no failure modes of their own.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Side count outside [1, 20]. A zero-gon is not a thing.
    InvalidSideCount(u32),
    /// Scale range with min > max.
    InvertedScaleRange(f64, f64),
    /// Rotation speed outside [0, 360) degrees per tick. The wraparound
    /// rule only keeps rotation inside (-360, 360) below that.
    RotationSpeedOutOfRange(f64),
    /// A colour palette with nothing in it. Cycling needs at least one entry.
    EmptyPalette(&'static str),
    /// A colour string csscolorparser refused to parse.
    BadColour(String),
    /// Renderer scale factor outside (0, 1].
    InvalidScaleFactor(f64),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::InvalidSideCount(n) => {
                write!(f, "Side count {} outside the valid range 1..=20", n)
            }
            ConfigError::InvertedScaleRange(min, max) => {
                write!(f, "Scale range min {} is greater than max {}", min, max)
            }
            ConfigError::RotationSpeedOutOfRange(speed) => {
                write!(f, "Rotation speed {} outside the valid range [0, 360)", speed)
            }
            ConfigError::EmptyPalette(which) => {
                write!(f, "Empty {} palette; at least one colour required", which)
            }
            ConfigError::BadColour(colour) => write!(f, "Unparseable colour: {}", colour),
            ConfigError::InvalidScaleFactor(scale) => {
                write!(f, "Scale factor {} outside the valid range (0, 1]", scale)
            }
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug)]
pub enum SurfaceError {
    PoppedEmptyStack,
}

impl Error for SurfaceError {}

impl Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SurfaceError::PoppedEmptyStack => write!(f, "Popping from an empty surface stack."),
        }
    }
}
