//! The frame-to-surface adapter: takes the geometry snapshots the animator
//! computes and turns them into draw calls. This is the only place that
//! knows about pixel dimensions and colour cycling; the animator stays in
//! ring-local coordinates and the surface stays dumb.
use log::trace;

use crate::animator::Frame;
use crate::config::RingPosition;
use crate::errors::{ConfigError, SurfaceError};
use crate::scene::{RingGroup, Scene};
use crate::surface::Surface;

/// Draws [`Frame`]s onto any [`Surface`], sized to a target pixel canvas.
#[derive(Debug, Clone, Copy)]
pub struct FrameRenderer {
    width: f64,
    height: f64,
}

impl FrameRenderer {
    /// A renderer for a canvas of the given pixel dimensions.
    pub fn new(width: f64, height: f64) -> FrameRenderer {
        FrameRenderer { width, height }
    }

    /// Same, but with a uniform preview scale factor in (0, 1] baked into
    /// the dimensions, the way an embedding UI shrinks the canvas to fit.
    pub fn scaled(width: f64, height: f64, scale: f64) -> Result<FrameRenderer, ConfigError> {
        if !(scale > 0.0 && scale <= 1.0) {
            return Err(ConfigError::InvalidScaleFactor(scale));
        }
        Ok(FrameRenderer::new(width * scale, height * scale))
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Percentage position offset to pixels, truncated toward negative
    /// infinity.
    fn offset_px(&self, position: &RingPosition) -> (f64, f64) {
        (
            (self.width * position.x / 100.0).floor(),
            (self.height * position.y / 100.0).floor(),
        )
    }

    /// Draws one frame: push, translate to the ring's offset, rotate, then
    /// edges (stroke colour cycled round-robin by edge index) and dots
    /// (fill and stroke cycled by vertex index), then pop. Palettes are
    /// cycled with modulo, so a one-colour palette just paints everything
    /// that colour.
    ///
    /// Frames produced by [`crate::animator::RingAnimator`] always carry
    /// non-empty palettes; hand-built frames must do the same.
    pub fn render<S: Surface>(&self, frame: &Frame, surface: &mut S) -> Result<(), SurfaceError> {
        let (dx, dy) = self.offset_px(&frame.position);
        trace!(
            "Rendering frame at offset ({}, {}), rotation {}",
            dx,
            dy,
            frame.current_rotation
        );
        surface.push();
        surface.translate(dx, dy);
        surface.rotate(frame.current_rotation);
        if frame.sides.enabled {
            surface.pen(frame.sides.stroke_width);
            let palette = &frame.sides.stroke_colours;
            for (i, segment) in frame.sides.positions.iter().enumerate() {
                surface.stroke(&palette[i % palette.len()]);
                surface.line(segment.start.x, segment.start.y, segment.end.x, segment.end.y);
            }
        }
        if frame.dots.enabled {
            surface.pen(frame.dots.stroke_width);
            let fills = &frame.dots.fill_colours;
            let strokes = &frame.dots.stroke_colours;
            for (i, point) in frame.dots.position.iter().enumerate() {
                surface.fill(&fills[i % fills.len()]);
                surface.stroke(&strokes[i % strokes.len()]);
                surface.circle(point.x, point.y, frame.dots.size / 2.0);
            }
        }
        surface.pop()
    }

    /// One tick of a whole group: frame-and-advance each ring in order,
    /// drawing as it goes.
    pub fn render_group<S: Surface>(
        &self,
        group: &mut RingGroup,
        surface: &mut S,
    ) -> Result<(), SurfaceError> {
        for frame in group.frames_and_advance() {
            self.render(&frame, surface)?;
        }
        Ok(())
    }

    /// One tick of a whole scene, nested one level deeper.
    pub fn render_scene<S: Surface>(
        &self,
        scene: &mut Scene,
        surface: &mut S,
    ) -> Result<(), SurfaceError> {
        for group in scene.frames_and_advance() {
            for frame in group {
                self.render(&frame, surface)?;
            }
        }
        Ok(())
    }
}
