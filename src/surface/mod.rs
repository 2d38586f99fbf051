//! The 2D drawing surface abstraction the renderer draws against. Anything
//! immediate-mode that can stroke lines and circles under an affine
//! transform can implement this; an SVG backend ships here, and a nannou
//! backend behind the `nannou` feature.
use crate::errors::SurfaceError;

#[cfg(feature = "nannou")]
pub mod nannou;
pub mod svg;

/// Minimal immediate-mode drawing contract. Style setters are sticky until
/// changed; `push`/`pop` save and restore the full style plus the current
/// transform, like a canvas context.
pub trait Surface {
    /// Saves the current transform and style state.
    fn push(&mut self);
    /// Restores the most recently pushed state.
    fn pop(&mut self) -> Result<(), SurfaceError>;
    /// Appends a translation to the current transform.
    fn translate(&mut self, dx: f64, dy: f64);
    /// Appends a rotation (degrees) to the current transform.
    fn rotate(&mut self, degrees: f64);
    /// Sets the stroke colour (any CSS colour string).
    fn stroke(&mut self, colour: &str);
    /// Sets the fill colour (any CSS colour string).
    fn fill(&mut self, colour: &str);
    /// Sets the stroke width.
    fn pen(&mut self, width: f64);
    /// Strokes a line segment between two points in local coordinates.
    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64);
    /// Draws a circle, filled with the fill colour and stroked with the
    /// stroke colour, centred at local x,y.
    fn circle(&mut self, x: f64, y: f64, radius: f64);
}
