use geo_types::{Coord, Line};

use crate::config::RingPosition;

/// Dot geometry and styling for one tick. One entry in `position` per
/// vertex, in vertex order.
#[derive(Debug, Clone, PartialEq)]
pub struct DotsFrame {
    pub enabled: bool,
    /// Dot diameter.
    pub size: f64,
    pub stroke_width: f64,
    pub fill_colours: Vec<String>,
    pub stroke_colours: Vec<String>,
    pub position: Vec<Coord<f64>>,
}

/// Edge geometry and styling for one tick. Segment `i` runs from vertex `i`
/// to vertex `(i + 1) mod N`; the last one closes the loop.
#[derive(Debug, Clone, PartialEq)]
pub struct SidesFrame {
    pub enabled: bool,
    pub stroke_width: f64,
    pub stroke_colours: Vec<String>,
    pub positions: Vec<Line<f64>>,
}

/// The renderable snapshot of one ring at a single tick. Everything a
/// drawing surface needs, nothing it has to reach back into the animator
/// for.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Percentage offset from the surface centre, passed through untouched
    /// from the config.
    pub position: RingPosition,
    /// Accumulated rotation in degrees, (-360, 360).
    pub current_rotation: f64,
    pub dots: DotsFrame,
    pub sides: SidesFrame,
}
