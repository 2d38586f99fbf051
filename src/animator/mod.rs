//! The per-tick animation engine. A [`RingAnimator`] owns one ring's config
//! snapshot plus its mutable motion state, and turns "advance one tick"
//! into new renderable geometry, deterministically: same config in, same
//! frame sequence out, every run.
use geo_types::{coord, Line};
use std::f64::consts::PI;

use crate::config::RingConfig;
use crate::errors::ConfigError;

pub mod frame;

pub use frame::{DotsFrame, Frame, SidesFrame};

/// One vertex of the ring. The unit-circle trig values are computed once at
/// construction and never again; every scale step just multiplies them by
/// the new circumradius. Keeps the per-tick work down to one mul and one
/// round per axis, and keeps the float behaviour identical frame to frame.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Vertex {
    cos: f64,
    sin: f64,
    x: f64,
    y: f64,
}

/// Animates a single regular polygon ring.
///
/// Two independent little machines run inside: a rotation accumulator that
/// wraps at +/-360 degrees, and a scale value that bounces between the
/// configured min and max, flipping direction on each (inclusive) boundary
/// touch. Neither ever terminates; they just stop moving when their
/// `enabled` flags (or the ring's `active` flag) are off.
///
/// There is deliberately no reset or reconfigure API. A changed config
/// means the UI builds a replacement animator, which also means the vertex
/// array, the size and the rotation can never be caught mid-update in an
/// inconsistent mix of old and new config.
///
/// # Example
///
/// ```rust
/// use polyring_rs::config::RingConfig;
/// use polyring_rs::animator::RingAnimator;
///
/// let mut ring = RingAnimator::new(RingConfig::default()).unwrap();
/// let frame = ring.frame_and_advance();
/// assert_eq!(frame.dots.position.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct RingAnimator {
    config: RingConfig,
    current_rotation: f64,
    current_size: f64,
    expanding: bool,
    points: Vec<Vertex>,
}

/// Nearest integer, halves away from zero. This is the one rounding rule
/// used for all vertex coordinates, at construction and on every scale
/// step. `round(2.5) == 3`, `round(-2.5) == -3`.
fn round_px(v: f64) -> f64 {
    v.round()
}

impl RingAnimator {
    /// Builds an animator from a config snapshot. Fails fast on a config
    /// that can't produce sane geometry (see [`RingConfig::validate`]).
    ///
    /// Vertex `i` of an N-gon sits at angle `(i + 1) * 2π/N`: the first
    /// vertex is one step into the circle rather than at angle zero.
    pub fn new(config: RingConfig) -> Result<RingAnimator, ConfigError> {
        config.validate()?;
        let n = config.sides.amount as usize;
        let starting_size = config.scale.starting_size;
        let angle_step = (2.0 * PI) / n as f64;
        let points = (0..n)
            .map(|i| {
                let angle = (i + 1) as f64 * angle_step;
                let (sin, cos) = angle.sin_cos();
                Vertex {
                    cos,
                    sin,
                    x: round_px(cos * starting_size),
                    y: round_px(sin * starting_size),
                }
            })
            .collect();
        let range = config.scale.range;
        Ok(RingAnimator {
            current_rotation: config.rotation.starting_rotation,
            current_size: starting_size,
            expanding: starting_size <= (range.max - range.min) / 2.0,
            points,
            config,
        })
    }

    /// The config snapshot this animator was built from.
    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    /// Current accumulated rotation, degrees, (-360, 360).
    pub fn current_rotation(&self) -> f64 {
        self.current_rotation
    }

    /// Current circumradius, always within the configured range inclusive.
    pub fn current_size(&self) -> f64 {
        self.current_size
    }

    /// True while the scale oscillation is growing.
    pub fn expanding(&self) -> bool {
        self.expanding
    }

    /// Snapshot of the current geometry and styling. Pure read; calling it
    /// twice without an advance in between gives bit-identical frames.
    pub fn frame(&self) -> Frame {
        let n = self.points.len();
        Frame {
            position: self.config.position,
            current_rotation: self.current_rotation,
            dots: DotsFrame {
                enabled: self.config.dots.enabled,
                size: self.config.dots.size,
                stroke_width: self.config.dots.stroke_width,
                fill_colours: self.config.dots.fill_colours.clone(),
                stroke_colours: self.config.dots.stroke_colours.clone(),
                position: self
                    .points
                    .iter()
                    .map(|p| coord! {x: p.x, y: p.y})
                    .collect(),
            },
            sides: SidesFrame {
                enabled: self.config.sides.enabled,
                stroke_width: self.config.sides.stroke_width,
                stroke_colours: self.config.sides.colours.clone(),
                positions: (0..n)
                    .map(|i| {
                        let a = &self.points[i];
                        let b = &self.points[(i + 1) % n];
                        Line::new(coord! {x: a.x, y: a.y}, coord! {x: b.x, y: b.y})
                    })
                    .collect(),
            },
        }
    }

    /// Advances one tick. Does nothing at all unless the ring is `active`;
    /// otherwise the rotation and scale machines each step independently
    /// when their own `enabled` flag is set.
    ///
    /// Rotation wraps from the *pre-update* value, not the overshoot: an
    /// update landing at or past +360 wraps to `old - 360`, and past -360
    /// to `-(old + 360)`. With speed limited to [0, 360) both land
    /// strictly inside (-360, 360).
    pub fn advance(&mut self) {
        if !self.config.active {
            return;
        }
        if self.config.rotation.enabled {
            let old = self.current_rotation;
            let new = if self.config.rotation.clockwise {
                old + self.config.rotation.speed
            } else {
                old - self.config.rotation.speed
            };
            self.current_rotation = if new >= 360.0 {
                old - 360.0
            } else if new <= -360.0 {
                -(old + 360.0)
            } else {
                new
            };
        }
        if self.config.scale.enabled {
            let range = self.config.scale.range;
            let new = if self.expanding {
                self.current_size + self.config.scale.speed
            } else {
                self.current_size - self.config.scale.speed
            };
            if new >= range.max {
                self.current_size = range.max;
                self.expanding = false;
            } else if new <= range.min {
                self.current_size = range.min;
                self.expanding = true;
            } else {
                self.current_size = new;
            }
            for p in self.points.iter_mut() {
                p.x = round_px(p.cos * self.current_size);
                p.y = round_px(p.sin * self.current_size);
            }
        }
    }

    /// The per-tick entry point for renderers: returns the frame as it is
    /// *before* advancing, then advances. Exactly equivalent to
    /// [`RingAnimator::frame`] followed by [`RingAnimator::advance`].
    pub fn frame_and_advance(&mut self) -> Frame {
        let frame = self.frame();
        self.advance();
        frame
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::{RingConfig, ScaleRange};

    fn hexagon() -> RingConfig {
        let mut config = RingConfig::default();
        config.sides.amount = 6;
        config.scale.starting_size = 5.0;
        config.scale.speed = 3.0;
        config.scale.range = ScaleRange { min: 0.0, max: 10.0 };
        config
    }

    #[test]
    fn test_hexagon_initial_frame() {
        let ring = RingAnimator::new(hexagon()).expect("Hexagon should build");
        let frame = ring.frame();
        // Vertex 0 sits one step into the circle, at 60 degrees:
        // x = round(cos(60) * 5) = round(2.5) = 3 (half away from zero),
        // y = round(sin(60) * 5) = round(4.33) = 4.
        assert_eq!(frame.dots.position[0].x, 3.0);
        assert_eq!(frame.dots.position[0].y, 4.0);
        assert_eq!(frame.dots.position.len(), 6);
        assert_eq!(frame.sides.positions.len(), 6);
        // The last edge closes the loop back to vertex 0.
        assert_eq!(frame.sides.positions[5].end, frame.sides.positions[0].start);
        for i in 0..6 {
            assert_eq!(
                frame.sides.positions[i].end,
                frame.sides.positions[(i + 1) % 6].start
            );
        }
    }

    #[test]
    fn test_rejects_zero_sides() {
        let mut config = hexagon();
        config.sides.amount = 0;
        assert!(matches!(
            RingAnimator::new(config),
            Err(ConfigError::InvalidSideCount(0))
        ));
    }

    #[test]
    fn test_expanding_initialization() {
        // Half the span of 0..10 is 5: at exactly 5 we grow, above we shrink.
        let mut config = hexagon();
        config.scale.starting_size = 5.0;
        assert!(RingAnimator::new(config.clone()).unwrap().expanding());
        config.scale.starting_size = 5.1;
        assert!(!RingAnimator::new(config.clone()).unwrap().expanding());
        config.scale.starting_size = 10.0;
        assert!(!RingAnimator::new(config).unwrap().expanding());
    }

    #[test]
    fn test_scale_bounce() {
        let mut config = hexagon();
        config.scale.starting_size = 10.0;
        let mut ring = RingAnimator::new(config).unwrap();
        assert!(!ring.expanding());
        let mut sizes = vec![];
        for _ in 0..8 {
            ring.advance();
            sizes.push(ring.current_size());
        }
        // Down from 10 in steps of 3, clamp at 0, bounce back up, clamp at 10.
        assert_eq!(sizes, vec![7.0, 4.0, 1.0, 0.0, 3.0, 6.0, 9.0, 10.0]);
        assert!(!ring.expanding());
    }

    #[test]
    fn test_scale_bounds_hold() {
        let mut config = hexagon();
        config.scale.starting_size = 7.0;
        config.scale.speed = 2.7;
        let mut ring = RingAnimator::new(config).unwrap();
        for _ in 0..1000 {
            ring.advance();
            assert!(ring.current_size() >= 0.0);
            assert!(ring.current_size() <= 10.0);
        }
    }

    #[test]
    fn test_rotation_wraparound_quirk() {
        let mut config = hexagon();
        config.rotation.starting_rotation = 358.0;
        config.rotation.speed = 5.0;
        config.rotation.clockwise = true;
        let mut ring = RingAnimator::new(config).unwrap();
        ring.advance();
        // 358 + 5 = 363 >= 360 wraps to old - 360 = -2, not to 3.
        assert_eq!(ring.current_rotation(), -2.0);
    }

    #[test]
    fn test_rotation_wraparound_counter_clockwise() {
        let mut config = hexagon();
        config.rotation.starting_rotation = 1.0;
        config.rotation.speed = 5.0;
        config.rotation.clockwise = false;
        let mut ring = RingAnimator::new(config).unwrap();
        // 1, -4, -9, ... -359, then -364 <= -360 wraps to -(-359 + 360) = -1.
        for _ in 0..72 {
            ring.advance();
        }
        assert_eq!(ring.current_rotation(), -359.0);
        ring.advance();
        assert_eq!(ring.current_rotation(), -1.0);
    }

    #[test]
    fn test_rotation_bounds_hold() {
        for clockwise in [true, false] {
            let mut config = hexagon();
            config.rotation.starting_rotation = 271.3;
            config.rotation.speed = 17.9;
            config.rotation.clockwise = clockwise;
            let mut ring = RingAnimator::new(config).unwrap();
            for _ in 0..2000 {
                ring.advance();
                assert!(ring.current_rotation() > -360.0);
                assert!(ring.current_rotation() < 360.0);
            }
        }
    }

    #[test]
    fn test_frame_is_idempotent() {
        let mut ring = RingAnimator::new(hexagon()).unwrap();
        for _ in 0..10 {
            assert_eq!(ring.frame(), ring.frame());
            ring.advance();
        }
    }

    #[test]
    fn test_frame_and_advance_equivalence() {
        let config = hexagon();
        let mut combined = RingAnimator::new(config.clone()).unwrap();
        let mut split = RingAnimator::new(config).unwrap();
        for _ in 0..50 {
            let a = combined.frame_and_advance();
            let b = split.frame();
            split.advance();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_determinism() {
        let config = hexagon();
        let mut a = RingAnimator::new(config.clone()).unwrap();
        let mut b = RingAnimator::new(config).unwrap();
        for _ in 0..200 {
            assert_eq!(a.frame_and_advance(), b.frame_and_advance());
        }
    }

    #[test]
    fn test_vertex_count_invariant() {
        for n in [1u32, 2, 3, 7, 20] {
            let mut config = hexagon();
            config.sides.amount = n;
            let mut ring = RingAnimator::new(config).unwrap();
            for _ in 0..25 {
                let frame = ring.frame_and_advance();
                assert_eq!(frame.dots.position.len(), n as usize);
                assert_eq!(frame.sides.positions.len(), n as usize);
            }
        }
    }

    #[test]
    fn test_disabled_rotation_is_noop() {
        let mut config = hexagon();
        config.rotation.enabled = false;
        config.rotation.starting_rotation = 123.0;
        let mut ring = RingAnimator::new(config).unwrap();
        for _ in 0..20 {
            ring.advance();
        }
        assert_eq!(ring.current_rotation(), 123.0);
    }

    #[test]
    fn test_disabled_scale_is_noop() {
        let mut config = hexagon();
        config.scale.enabled = false;
        let mut ring = RingAnimator::new(config).unwrap();
        let before = ring.frame();
        for _ in 0..20 {
            ring.advance();
        }
        let after = ring.frame();
        assert_eq!(ring.current_size(), 5.0);
        assert_eq!(before.dots.position, after.dots.position);
        assert_eq!(before.sides.positions, after.sides.positions);
    }

    #[test]
    fn test_inactive_ring_never_moves() {
        let mut config = hexagon();
        config.active = false;
        config.rotation.enabled = true;
        config.scale.enabled = true;
        let mut ring = RingAnimator::new(config).unwrap();
        let before = ring.frame();
        for _ in 0..20 {
            ring.advance();
        }
        assert_eq!(before, ring.frame());
    }

    #[test]
    fn test_position_passes_through() {
        let mut config = hexagon();
        config.position.x = -33.0;
        config.position.y = 12.0;
        let ring = RingAnimator::new(config).unwrap();
        let frame = ring.frame();
        assert_eq!(frame.position.x, -33.0);
        assert_eq!(frame.position.y, 12.0);
    }
}
