//! Nannou-backed drawing surface, for watching rings animate live instead
//! of rasterizing SVG frames. Gated behind the `nannou` feature.
use log::warn;
use nannou::color::Srgba;
use nannou::draw::Draw;
use nannou::geom::pt2;
use nannou::glam::vec3;

use crate::errors::SurfaceError;
use crate::geometry::degrees;
use crate::surface::Surface;

fn parse_colour(colour: &str) -> Option<Srgba<u8>> {
    match csscolorparser::parse(colour) {
        Ok(c) => {
            let [r, g, b, a] = c.to_rgba8();
            Some(Srgba::new(r, g, b, a))
        }
        Err(_) => {
            warn!("Ignoring unparseable colour {:?}", colour);
            None
        }
    }
}

/// Adapts the [`Surface`] contract onto a [`nannou::Draw`] handle. Nannou's
/// transform combinators return derived `Draw`s, so push/pop is a stack of
/// handles rather than a matrix stack. Note nannou's y axis points up, so
/// scenes render mirrored relative to the SVG surface; for generative ring
/// art that is usually exactly what you want anyway.
pub struct NannouSurface {
    draw: Draw,
    stroke_color: Srgba<u8>,
    fill_color: Srgba<u8>,
    pen_width: f64,
    stack: Vec<(Draw, Srgba<u8>, Srgba<u8>, f64)>,
}

impl NannouSurface {
    /// Wraps a `Draw`. Nannou already puts the origin at the window centre,
    /// which matches where ring offsets are measured from.
    pub fn new(draw: Draw) -> NannouSurface {
        NannouSurface {
            draw,
            stroke_color: Srgba::new(0, 0, 0, 255),
            fill_color: Srgba::new(0, 0, 0, 255),
            pen_width: 1.0,
            stack: vec![],
        }
    }
}

impl Surface for NannouSurface {
    fn push(&mut self) {
        self.stack.push((
            self.draw.clone(),
            self.stroke_color,
            self.fill_color,
            self.pen_width,
        ));
    }

    fn pop(&mut self) -> Result<(), SurfaceError> {
        let (draw, stroke, fill, pen) = self.stack.pop().ok_or(SurfaceError::PoppedEmptyStack)?;
        self.draw = draw;
        self.stroke_color = stroke;
        self.fill_color = fill;
        self.pen_width = pen;
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.draw = self.draw.translate(vec3(dx as f32, dy as f32, 0.0));
    }

    fn rotate(&mut self, deg: f64) {
        self.draw = self.draw.rotate(degrees(deg) as f32);
    }

    fn stroke(&mut self, colour: &str) {
        if let Some(c) = parse_colour(colour) {
            self.stroke_color = c;
        }
    }

    fn fill(&mut self, colour: &str) {
        if let Some(c) = parse_colour(colour) {
            self.fill_color = c;
        }
    }

    fn pen(&mut self, width: f64) {
        self.pen_width = width;
    }

    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        self.draw
            .line()
            .start(pt2(x0 as f32, y0 as f32))
            .end(pt2(x1 as f32, y1 as f32))
            .weight(self.pen_width as f32)
            .color(self.stroke_color);
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64) {
        self.draw
            .ellipse()
            .x_y(x as f32, y as f32)
            .w_h((radius * 2.0) as f32, (radius * 2.0) as f32)
            .color(self.fill_color)
            .stroke(self.stroke_color)
            .stroke_weight(self.pen_width as f32);
    }
}
