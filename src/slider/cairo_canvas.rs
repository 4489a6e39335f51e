use super::geometry::{Point, Rect};
use super::model::RangeSliderWidget;
use super::view::{Canvas, Paint, PaintStyle};
use crate::config::{ConfigError, LineCap, SliderConfig};
use cairo::Context;
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;

pub type CairoRangeSlider = RangeSliderWidget<Pixbuf>;

impl From<LineCap> for cairo::LineCap {
    fn from(cap: LineCap) -> Self {
        match cap {
            LineCap::Butt => cairo::LineCap::Butt,
            LineCap::Round => cairo::LineCap::Round,
            LineCap::Square => cairo::LineCap::Square,
        }
    }
}

/// Loads the optional start and end thumb images named in `config`.
pub fn load_thumb_images(
    config: &SliderConfig,
) -> Result<(Option<Pixbuf>, Option<Pixbuf>), ConfigError> {
    let load = |path: &Option<std::path::PathBuf>| -> Result<Option<Pixbuf>, ConfigError> {
        path.as_ref()
            .map(Pixbuf::from_file)
            .transpose()
            .map_err(ConfigError::from)
    };
    Ok((
        load(&config.start_thumb_image)?,
        load(&config.end_thumb_image)?,
    ))
}

fn apply_paint(cr: &Context, paint: &Paint) {
    let (r, g, b, a) = paint.color.into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.set_line_width(paint.stroke_width);
    cr.set_line_cap(paint.cap.into());
    cr.set_antialias(if paint.anti_alias {
        cairo::Antialias::Default
    } else {
        cairo::Antialias::None
    });
}

fn finish(cr: &Context, paint: &Paint) -> Result<(), cairo::Error> {
    match paint.style {
        PaintStyle::Stroke => cr.stroke(),
        PaintStyle::Fill => cr.fill(),
    }
}

impl Canvas for Context {
    type Image = Pixbuf;
    type Error = cairo::Error;

    fn draw_arc(
        &mut self,
        oval: Rect,
        start_angle: f64,
        sweep_angle: f64,
        paint: &Paint,
    ) -> Result<(), cairo::Error> {
        let oval = oval.sorted();
        if oval.width() <= 0.0 || oval.height() <= 0.0 {
            return Ok(());
        }
        let center = oval.center();

        self.save()?;
        apply_paint(self, paint);
        self.new_path();

        // build the path on a unit circle, then restore before stroking so the
        // line width is not scaled with it
        self.save()?;
        self.translate(center.x, center.y);
        self.scale(oval.width() / 2.0, oval.height() / 2.0);
        self.arc(
            0.0,
            0.0,
            1.0,
            start_angle.to_radians(),
            (start_angle + sweep_angle).to_radians(),
        );
        self.restore()?;

        finish(self, paint)?;
        self.restore()
    }

    fn draw_circle(
        &mut self,
        center: Point,
        radius: f64,
        paint: &Paint,
    ) -> Result<(), cairo::Error> {
        if radius <= 0.0 {
            return Ok(());
        }
        self.save()?;
        apply_paint(self, paint);
        self.new_path();
        self.arc(center.x, center.y, radius, 0.0, 2.0 * std::f64::consts::PI);
        finish(self, paint)?;
        self.restore()
    }

    fn draw_image(&mut self, image: &Pixbuf, bounds: Rect) -> Result<(), cairo::Error> {
        let (iw, ih) = (image.width() as f64, image.height() as f64);
        if iw <= 0.0 || ih <= 0.0 || bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return Ok(());
        }

        self.save()?;
        self.translate(bounds.left, bounds.top);
        self.scale(bounds.width() / iw, bounds.height() / ih);
        self.set_source_pixbuf(image, 0.0, 0.0);
        self.paint()?;
        self.restore()
    }
}
