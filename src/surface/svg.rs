//! SVG-backed drawing surface. Operations are recorded with the current
//! affine transform already applied to their coordinates, then serialized
//! into a [`svg::Document`] on demand. Consecutive lines drawn with the
//! same stroke and pen width are merged into a single path.
use geo_types::{coord, Coord};
use nalgebra::{Affine2, Matrix3, Point2 as NPoint2};
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};
use svg::Document;

use crate::errors::SurfaceError;
use crate::geometry::degrees;
use crate::surface::Surface;

#[derive(Debug, Clone)]
enum SvgOp {
    Line {
        start: Coord<f64>,
        end: Coord<f64>,
        stroke: String,
        pen_width: f64,
    },
    Dot {
        center: Coord<f64>,
        radius: f64,
        fill: String,
        stroke: String,
        pen_width: f64,
    },
}

#[derive(Debug, Clone)]
struct SavedState {
    transformation: Affine2<f64>,
    stroke_color: String,
    fill_color: String,
    pen_width: f64,
}

/// A [`Surface`] that accumulates draw calls and turns them into an SVG
/// document sized in pixels. The origin starts at the centre of the
/// surface, which is where ring position offsets are measured from.
///
/// # Example
///
/// ```rust
/// use polyring_rs::surface::Surface;
/// use polyring_rs::surface::svg::SvgSurface;
///
/// let mut surface = SvgSurface::new(100.0, 100.0);
/// surface.stroke("red");
/// surface.line(-50.0, 0.0, 50.0, 0.0);
/// let doc = surface.to_svg();
/// assert!(doc.to_string().contains("stroke=\"red\""));
/// ```
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    transformation: Affine2<f64>,
    stroke_color: String,
    fill_color: String,
    pen_width: f64,
    stack: Vec<SavedState>,
    operations: Vec<SvgOp>,
}

impl SvgSurface {
    /// Helper to create a translation matrix
    pub fn translate_matrix(tx: f64, ty: f64) -> Affine2<f64> {
        Affine2::from_matrix_unchecked(Matrix3::new(1.0, 0.0, tx, 0.0, 1.0, ty, 0.0, 0.0, 1.0))
    }

    /// Helper to create a rotation matrix. Degrees, because the animator
    /// speaks degrees.
    pub fn rotate_matrix(deg: f64) -> Affine2<f64> {
        let angle = degrees(deg);
        Affine2::from_matrix_unchecked(Matrix3::new(
            angle.cos(),
            -angle.sin(),
            0.0,
            angle.sin(),
            angle.cos(),
            0.0,
            0.0,
            0.0,
            1.0,
        ))
    }

    /// A fresh surface of the given pixel dimensions, origin at the centre,
    /// black 1px stroke, black fill.
    pub fn new(width: f64, height: f64) -> SvgSurface {
        SvgSurface {
            width,
            height,
            transformation: Self::translate_matrix(width / 2.0, height / 2.0),
            stroke_color: "black".to_string(),
            fill_color: "black".to_string(),
            pen_width: 1.0,
            stack: vec![],
            operations: vec![],
        }
    }

    fn xform(&self, x: f64, y: f64) -> Coord<f64> {
        let out = self.transformation * NPoint2::new(x, y);
        coord! {x: out.x, y: out.y}
    }

    /// Serializes everything drawn so far. The surface can keep drawing
    /// afterwards; for animation, build one surface per frame instead.
    pub fn to_svg(&self) -> Document {
        let mut doc = Document::new()
            .set("viewBox", (0.0, 0.0, self.width, self.height))
            .set("width", format!("{}px", self.width))
            .set("height", format!("{}px", self.height));

        let mut id = 0;
        let mut pending: Option<(Data, String, f64)> = None;
        for op in &self.operations {
            match op {
                SvgOp::Line { start, end, stroke, pen_width } => {
                    // Merge into the open path when the style is consistent
                    // with it, otherwise flush and start a new one.
                    let data = match pending.take() {
                        Some((data, pstroke, pwidth))
                            if &pstroke == stroke && pwidth == *pen_width =>
                        {
                            data
                        }
                        Some((data, pstroke, pwidth)) => {
                            doc = doc.add(Self::line_path(data, &pstroke, pwidth, id));
                            id += 1;
                            Data::new()
                        }
                        None => Data::new(),
                    };
                    let data = data.move_to((start.x, start.y)).line_to((end.x, end.y));
                    pending = Some((data, stroke.clone(), *pen_width));
                }
                SvgOp::Dot { center, radius, fill, stroke, pen_width } => {
                    if let Some((data, pstroke, pwidth)) = pending.take() {
                        doc = doc.add(Self::line_path(data, &pstroke, pwidth, id));
                        id += 1;
                    }
                    doc = doc.add(
                        Circle::new()
                            .set("cx", center.x)
                            .set("cy", center.y)
                            .set("r", *radius)
                            .set("fill", fill.clone())
                            .set("stroke", stroke.clone())
                            .set("stroke-width", *pen_width),
                    );
                }
            }
        }
        if let Some((data, pstroke, pwidth)) = pending.take() {
            doc = doc.add(Self::line_path(data, &pstroke, pwidth, id));
        }
        doc
    }

    fn line_path(data: Data, stroke: &str, pen_width: f64, id: usize) -> Path {
        Path::new()
            .set("d", data)
            .set("id", format!("lines-{}", id))
            .set("fill", "none")
            .set("stroke", stroke)
            .set("stroke-width", pen_width)
            .set("stroke-linejoin", "round")
            .set("stroke-linecap", "round")
    }
}

impl Surface for SvgSurface {
    fn push(&mut self) {
        self.stack.push(SavedState {
            transformation: self.transformation,
            stroke_color: self.stroke_color.clone(),
            fill_color: self.fill_color.clone(),
            pen_width: self.pen_width,
        });
    }

    fn pop(&mut self) -> Result<(), SurfaceError> {
        let state = self.stack.pop().ok_or(SurfaceError::PoppedEmptyStack)?;
        self.transformation = state.transformation;
        self.stroke_color = state.stroke_color;
        self.fill_color = state.fill_color;
        self.pen_width = state.pen_width;
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transformation = self.transformation * Self::translate_matrix(dx, dy);
    }

    fn rotate(&mut self, deg: f64) {
        self.transformation = self.transformation * Self::rotate_matrix(deg);
    }

    fn stroke(&mut self, colour: &str) {
        self.stroke_color = colour.to_string();
    }

    fn fill(&mut self, colour: &str) {
        self.fill_color = colour.to_string();
    }

    fn pen(&mut self, width: f64) {
        self.pen_width = width;
    }

    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        self.operations.push(SvgOp::Line {
            start: self.xform(x0, y0),
            end: self.xform(x1, y1),
            stroke: self.stroke_color.clone(),
            pen_width: self.pen_width,
        });
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64) {
        // Rotation and translation are rigid, so the radius passes through
        // untouched; only the centre needs transforming.
        self.operations.push(SvgOp::Dot {
            center: self.xform(x, y),
            radius,
            fill: self.fill_color.clone(),
            stroke: self.stroke_color.clone(),
            pen_width: self.pen_width,
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_minimal_line_document() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        surface.line(0.0, 0.0, 10.0, 0.0);
        let svg = surface.to_svg();
        assert_eq!(
            svg.to_string(),
            concat!(
                "<svg height=\"100px\" viewBox=\"0 0 100 100\" width=\"100px\" xmlns=\"http://www.w3.org/2000/svg\">\n",
                "<path d=\"M50,50 L60,50\" fill=\"none\" id=\"lines-0\" stroke=\"black\" ",
                "stroke-linecap=\"round\" stroke-linejoin=\"round\" stroke-width=\"1\"/>\n</svg>"
            )
        );
    }

    #[test]
    fn test_consistent_lines_merge_into_one_path() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        surface.line(0.0, 0.0, 10.0, 0.0);
        surface.line(10.0, 0.0, 10.0, 10.0);
        surface.stroke("red");
        surface.line(10.0, 10.0, 0.0, 10.0);
        let rendered = surface.to_svg().to_string();
        // Two black segments share one path; the red one gets its own.
        assert_eq!(rendered.matches("<path").count(), 2);
        assert!(rendered.contains("M50,50 L60,50 M60,50 L60,60"));
        assert!(rendered.contains("stroke=\"red\""));
    }

    #[test]
    fn test_dot_element() {
        let mut surface = SvgSurface::new(200.0, 100.0);
        surface.fill("#ff0080");
        surface.stroke("blue");
        surface.pen(2.0);
        surface.circle(0.0, 0.0, 5.0);
        let rendered = surface.to_svg().to_string();
        assert!(rendered.contains("<circle"));
        assert!(rendered.contains("cx=\"100\""));
        assert!(rendered.contains("cy=\"50\""));
        assert!(rendered.contains("r=\"5\""));
        assert!(rendered.contains("fill=\"#ff0080\""));
        assert!(rendered.contains("stroke=\"blue\""));
        assert!(rendered.contains("stroke-width=\"2\""));
    }

    #[test]
    fn test_translate_then_rotate_composes_locally() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        surface.translate(10.0, 0.0);
        surface.rotate(90.0);
        // Local (10, 0) should land at centre + (10, 10): the translation
        // happens first, then the rotation spins the local frame.
        let out = surface.xform(10.0, 0.0);
        assert!((out.x - 60.0).abs() < 1e-9);
        assert!((out.y - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_push_pop_restores_state() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        surface.stroke("green");
        surface.pen(3.0);
        surface.push();
        surface.stroke("red");
        surface.translate(25.0, 25.0);
        surface.pop().expect("Stack should not be empty");
        surface.line(0.0, 0.0, 1.0, 0.0);
        let rendered = surface.to_svg().to_string();
        assert!(rendered.contains("stroke=\"green\""));
        assert!(rendered.contains("stroke-width=\"3\""));
        assert!(rendered.contains("M50,50"));
    }

    #[test]
    fn test_pop_empty_stack_errors() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        assert!(surface.pop().is_err());
    }
}
