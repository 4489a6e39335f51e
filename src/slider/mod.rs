pub mod angle;
pub mod cairo_canvas;
pub mod geometry;
pub mod listener;
pub mod model;
pub mod view;

pub use cairo_canvas::{CairoRangeSlider, load_thumb_images};
pub use geometry::{Padding, Point, Rect, RingGeometry};
pub use listener::{LoggingListener, SliderRangeListener};
pub use model::{DragState, RangeSliderWidget, Thumb, ThumbStyle, TouchResponse};
pub use view::{Canvas, Paint, PaintStyle, draw};

/// Tolerance added to the vertical-displacement guard when dragging.
pub const TOUCH_EPSILON: f64 = 1e-3;
/// The background arc runs from the start thumb to its reflection across
/// the vertical axis.
pub const MIRROR_AXIS_DEG: f64 = 180.0;
