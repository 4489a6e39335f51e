use super::MIRROR_AXIS_DEG;
use super::angle;
use super::geometry::{Point, Rect};
use super::model::{RangeSliderWidget, Thumb, ThumbStyle};
use crate::config::LineCap;
use palette::Srgba;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    Stroke,
    Fill,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub color: Srgba<f64>,
    pub style: PaintStyle,
    pub stroke_width: f64,
    pub cap: LineCap,
    pub anti_alias: bool,
}

impl Paint {
    pub fn stroke(color: Srgba<f64>, width: f64, cap: LineCap) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke,
            stroke_width: width,
            cap,
            anti_alias: true,
        }
    }

    pub fn fill(color: Srgba<f64>) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
            stroke_width: 0.0,
            cap: LineCap::Butt,
            anti_alias: true,
        }
    }
}

/// Drawing surface supplied by the host toolkit.
///
/// Arc angles are drawing degrees: 0 at 3 o'clock, growing clockwise on
/// screen. `oval` is the bounding box of the circle the arc lies on.
pub trait Canvas {
    type Image;
    type Error;

    fn draw_arc(
        &mut self,
        oval: Rect,
        start_angle: f64,
        sweep_angle: f64,
        paint: &Paint,
    ) -> Result<(), Self::Error>;

    fn draw_circle(&mut self, center: Point, radius: f64, paint: &Paint)
    -> Result<(), Self::Error>;

    /// Scales `image` to fill `bounds`.
    fn draw_image(&mut self, image: &Self::Image, bounds: Rect) -> Result<(), Self::Error>;
}

struct ThumbRenderer<'a, I> {
    style: &'a ThumbStyle<I>,
    position: Point,
}

impl<'a, I> ThumbRenderer<'a, I> {
    fn new(style: &'a ThumbStyle<I>, position: Point) -> Self {
        Self { style, position }
    }

    fn draw<C: Canvas<Image = I>>(&self, canvas: &mut C) -> Result<(), C::Error> {
        match &self.style.image {
            Some(image) => {
                canvas.draw_image(image, Rect::centered_square(self.position, self.style.size))
            }
            None => canvas.draw_circle(
                self.position,
                self.style.size / 2.0,
                &Paint::fill(self.style.color.to_srgba()),
            ),
        }
    }
}

/// Draws the ring arcs followed by both thumbs, start thumb first.
/// Thumb positions are taken as cached on `slider`.
pub fn draw<C: Canvas>(canvas: &mut C, slider: &RangeSliderWidget<C::Image>) -> Result<(), C::Error> {
    let oval = slider.geometry().bounds();
    let draw_start = slider.start_angle();
    let draw_end = slider.end_angle();
    let mirror_start = MIRROR_AXIS_DEG - draw_start;

    canvas.draw_arc(
        oval,
        draw_start,
        angle::sweep(draw_start, mirror_start),
        &slider.border_paint(),
    )?;
    canvas.draw_arc(
        oval,
        draw_start,
        angle::sweep(draw_start, draw_end),
        &slider.arc_paint(),
    )?;

    for thumb in Thumb::iter() {
        ThumbRenderer::new(slider.thumb(thumb), slider.thumb_position(thumb)).draw(canvas)?;
    }
    Ok(())
}
