use super::TOUCH_EPSILON;
use super::angle::{from_drawing_angle, normalize_radians, to_drawing_angle};
use super::geometry::{Point, RingGeometry};
use super::listener::SliderRangeListener;
use super::view::{self, Canvas, Paint};
use crate::config::{Color, LineCap, SliderConfig};
use crate::events::{ThumbEvent, TouchAction, TouchEvent};
use strum::{Display as StrumDisplay, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter)]
pub enum Thumb {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingStart,
    DraggingEnd,
}

impl DragState {
    pub fn dragging(thumb: Thumb) -> Self {
        match thumb {
            Thumb::Start => Self::DraggingStart,
            Thumb::End => Self::DraggingEnd,
        }
    }

    pub fn thumb(&self) -> Option<Thumb> {
        match self {
            Self::Idle => None,
            Self::DraggingStart => Some(Thumb::Start),
            Self::DraggingEnd => Some(Thumb::End),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThumbStyle<I> {
    /// Diameter in pixels.
    pub size: f64,
    pub color: Color,
    pub image: Option<I>,
}

impl<I> ThumbStyle<I> {
    pub fn new(size: f64, color: Color) -> Self {
        Self {
            size,
            color,
            image: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchResponse {
    pub consumed: bool,
    pub should_redraw: bool,
}

impl TouchResponse {
    pub fn new(consumed: bool, should_redraw: bool) -> Self {
        Self {
            consumed,
            should_redraw,
        }
    }
}

/// Circular slider with a start and an end thumb.
///
/// The host forwards its lifecycle hooks to [`on_size_changed`],
/// [`on_draw`] and [`on_touch_event`]. `I` is the host's image handle type.
///
/// Angles are kept in internal radians (counter-clockwise from 3 o'clock,
/// within `(-PI, PI]`); getters and setters speak drawing degrees.
///
/// [`on_size_changed`]: RangeSliderWidget::on_size_changed
/// [`on_draw`]: RangeSliderWidget::on_draw
/// [`on_touch_event`]: RangeSliderWidget::on_touch_event
pub struct RangeSliderWidget<I> {
    geometry: RingGeometry,
    start_angle: f64,
    end_angle: f64,
    start_thumb: ThumbStyle<I>,
    end_thumb: ThumbStyle<I>,
    start_position: Point,
    end_position: Point,
    border_thickness: f64,
    border_color: Color,
    arc_dash_size: f64,
    arc_color: Color,
    line_cap: LineCap,
    padding: f64,
    drag: DragState,
    listener: Option<Box<dyn SliderRangeListener>>,
}

impl<I> RangeSliderWidget<I> {
    pub fn from_config(config: &SliderConfig) -> Self {
        let mut slider = Self {
            geometry: RingGeometry::default(),
            start_angle: 0.0,
            end_angle: 0.0,
            start_thumb: ThumbStyle::new(
                config.resolved_start_thumb_size(),
                config.start_thumb_color,
            ),
            end_thumb: ThumbStyle::new(config.resolved_end_thumb_size(), config.end_thumb_color),
            start_position: Point::default(),
            end_position: Point::default(),
            border_thickness: config.border_thickness,
            border_color: config.border_color,
            arc_dash_size: config.arc_dash_size,
            arc_color: config.arc_color,
            line_cap: config.line_cap,
            padding: config.padding.uniform(),
            drag: DragState::Idle,
            listener: None,
        };
        slider.set_start_angle(config.start_angle);
        slider.set_end_angle(config.end_angle);
        slider
    }

    pub fn with_images(mut self, start: Option<I>, end: Option<I>) -> Self {
        self.start_thumb.image = start;
        self.end_thumb.image = end;
        self
    }

    /// Installs or, with `None`, removes the listener.
    pub fn set_on_slider_range_moved_listener(
        &mut self,
        listener: Option<Box<dyn SliderRangeListener>>,
    ) {
        self.listener = listener;
    }

    pub fn set_start_angle(&mut self, degrees: f64) {
        self.start_angle = normalize_radians(from_drawing_angle(degrees));
    }

    pub fn set_end_angle(&mut self, degrees: f64) {
        self.end_angle = normalize_radians(from_drawing_angle(degrees));
    }

    /// Start angle in drawing degrees.
    pub fn start_angle(&self) -> f64 {
        to_drawing_angle(self.start_angle)
    }

    /// End angle in drawing degrees.
    pub fn end_angle(&self) -> f64 {
        to_drawing_angle(self.end_angle)
    }

    pub fn set_thumb_size(&mut self, size: f64) {
        self.set_start_thumb_size(size);
        self.set_end_thumb_size(size);
    }

    pub fn set_start_thumb_size(&mut self, size: f64) {
        self.start_thumb.size = size;
    }

    pub fn set_end_thumb_size(&mut self, size: f64) {
        self.end_thumb.size = size;
    }

    pub fn start_thumb_size(&self) -> f64 {
        self.start_thumb.size
    }

    pub fn end_thumb_size(&self) -> f64 {
        self.end_thumb.size
    }

    pub fn set_start_thumb_color(&mut self, color: Color) {
        self.start_thumb.color = color;
    }

    pub fn set_end_thumb_color(&mut self, color: Color) {
        self.end_thumb.color = color;
    }

    pub fn set_start_thumb_image(&mut self, image: Option<I>) {
        self.start_thumb.image = image;
    }

    pub fn set_end_thumb_image(&mut self, image: Option<I>) {
        self.end_thumb.image = image;
    }

    pub fn set_border_thickness(&mut self, thickness: f64) {
        self.border_thickness = thickness;
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.border_color = color;
    }

    pub fn set_arc_color(&mut self, color: Color) {
        self.arc_color = color;
    }

    pub fn set_arc_dash_size(&mut self, width: f64) {
        self.arc_dash_size = width;
    }

    pub fn set_line_cap(&mut self, cap: LineCap) {
        self.line_cap = cap;
    }

    pub fn set_padding(&mut self, padding: f64) {
        self.padding = padding;
    }

    pub fn geometry(&self) -> RingGeometry {
        self.geometry
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn thumb(&self, thumb: Thumb) -> &ThumbStyle<I> {
        match thumb {
            Thumb::Start => &self.start_thumb,
            Thumb::End => &self.end_thumb,
        }
    }

    /// Pixel position cached by the last draw or press.
    pub fn thumb_position(&self, thumb: Thumb) -> Point {
        match thumb {
            Thumb::Start => self.start_position,
            Thumb::End => self.end_position,
        }
    }

    pub fn border_paint(&self) -> Paint {
        Paint::stroke(
            self.border_color.to_srgba(),
            self.border_thickness,
            self.line_cap,
        )
    }

    pub fn arc_paint(&self) -> Paint {
        let color = if self.arc_color.is_unset() {
            Color::RED
        } else {
            self.arc_color
        };
        Paint::stroke(color.to_srgba(), self.arc_dash_size, self.line_cap)
    }

    pub fn on_size_changed(&mut self, width: f64, height: f64) {
        self.geometry =
            RingGeometry::calculate(width, height, self.border_thickness, self.padding);
        self.refresh_thumb_positions();
        log::debug!(
            "Slider resized to {width}x{height}: center=({:.1}, {:.1}) radius={:.1}",
            self.geometry.center.x,
            self.geometry.center.y,
            self.geometry.radius
        );
    }

    pub fn on_draw<C: Canvas<Image = I>>(&mut self, canvas: &mut C) -> Result<(), C::Error> {
        self.refresh_thumb_positions();
        view::draw(canvas, self)
    }

    pub fn on_touch_event(&mut self, event: TouchEvent) -> TouchResponse {
        let drag_before = self.drag;
        let angles_before = (self.start_angle, self.end_angle);

        match event.action {
            TouchAction::Down => self.press(event.point),
            TouchAction::Move => {
                if let Some(thumb) = self.drag.thumb() {
                    self.update_slider_state(event.point, thumb);
                }
            }
            TouchAction::Up | TouchAction::Cancel => self.release(),
        }

        let changed =
            drag_before != self.drag || angles_before != (self.start_angle, self.end_angle);
        TouchResponse::new(true, changed)
    }

    fn press(&mut self, point: Point) {
        // a press without a preceding release still closes the old drag
        self.release();
        self.refresh_thumb_positions();

        let Some(thumb) = self.hit_test(point) else {
            return;
        };
        self.drag = DragState::dragging(thumb);
        self.update_slider_state(point, thumb);
        self.notify_event(thumb, ThumbEvent::Pressed);
    }

    fn release(&mut self) {
        if let Some(thumb) = self.drag.thumb() {
            self.notify_event(thumb, ThumbEvent::Released);
        }
        self.drag = DragState::Idle;
    }

    /// Start thumb wins when both boxes contain the point.
    pub fn hit_test(&self, point: Point) -> Option<Thumb> {
        [Thumb::Start, Thumb::End]
            .into_iter()
            .find(|&thumb| self.thumb_contains(thumb, point))
    }

    /// The box reaches one full thumb size from the center, twice the diameter.
    fn thumb_contains(&self, thumb: Thumb, point: Point) -> bool {
        let center = self.thumb_position(thumb);
        let reach = self.thumb(thumb).size;
        point.x < center.x + reach
            && point.x > center.x - reach
            && point.y < center.y + reach
            && point.y > center.y - reach
    }

    fn refresh_thumb_positions(&mut self) {
        self.start_position = self.geometry.point_at(self.start_angle);
        self.end_position = self.geometry.point_at(self.end_angle);
    }

    /// Moves `thumb` towards `point`. Returns whether the angle was accepted.
    fn update_slider_state(&mut self, point: Point, thumb: Thumb) -> bool {
        let center = self.geometry.center;
        let distance_x = point.x - center.x;
        let distance_y = center.y - point.y;
        let c = distance_x.hypot(distance_y);
        if c == 0.0 || !c.is_finite() {
            log::trace!("Ignoring touch at the ring center");
            return false;
        }

        let mut angle = (distance_x / c).clamp(-1.0, 1.0).acos();
        if distance_y < 0.0 {
            angle = -angle;
        }
        // acos can reach PI exactly, and -PI is outside the stored range
        let angle = normalize_radians(angle);

        // projected height of the start thumb, also applied to the end thumb
        let start_y = (c * self.start_angle.sin()).round();
        if distance_y < start_y + TOUCH_EPSILON {
            log::trace!(
                "Rejected {thumb} move: distance_y={distance_y:.1} start_y={start_y:.1} angle={:.1}",
                angle.to_degrees()
            );
            return false;
        }

        match thumb {
            Thumb::Start => {
                self.start_angle = angle;
                self.start_position = self.geometry.point_at(angle);
            }
            Thumb::End => {
                self.end_angle = angle;
                self.end_position = self.geometry.point_at(angle);
            }
        }

        if let Some(listener) = self.listener.as_mut() {
            let pos = to_drawing_angle(angle);
            match thumb {
                Thumb::Start => listener.on_start_slider_moved(pos),
                Thumb::End => listener.on_end_slider_moved(pos),
            }
        }
        true
    }

    fn notify_event(&mut self, thumb: Thumb, event: ThumbEvent) {
        log::debug!("{thumb} thumb {event}");
        if let Some(listener) = self.listener.as_mut() {
            match thumb {
                Thumb::Start => listener.on_start_slider_event(event),
                Thumb::End => listener.on_end_slider_event(event),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::f64::consts::PI;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Heard {
        StartMoved(f64),
        EndMoved(f64),
        StartEvent(ThumbEvent),
        EndEvent(ThumbEvent),
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Heard>>>);

    impl Recorder {
        fn take(&self) -> Vec<Heard> {
            self.0.borrow_mut().drain(..).collect()
        }
    }

    impl SliderRangeListener for Recorder {
        fn on_start_slider_moved(&mut self, pos: f64) {
            self.0.borrow_mut().push(Heard::StartMoved(pos));
        }
        fn on_end_slider_moved(&mut self, pos: f64) {
            self.0.borrow_mut().push(Heard::EndMoved(pos));
        }
        fn on_start_slider_event(&mut self, event: ThumbEvent) {
            self.0.borrow_mut().push(Heard::StartEvent(event));
        }
        fn on_end_slider_event(&mut self, event: ThumbEvent) {
            self.0.borrow_mut().push(Heard::EndEvent(event));
        }
    }

    fn slider_with(config: &SliderConfig) -> (RangeSliderWidget<()>, Recorder) {
        let recorder = Recorder::default();
        let mut slider = RangeSliderWidget::from_config(config);
        slider.set_on_slider_range_moved_listener(Some(Box::new(recorder.clone())));
        slider.on_size_changed(400.0, 400.0);
        (slider, recorder)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_angles_are_stored_normalized() {
        let (mut slider, _) = slider_with(&SliderConfig::default());
        for d in [0.0, 90.0, 180.0, 250.0, 359.0] {
            slider.set_start_angle(d);
            assert!(slider.start_angle > -PI && slider.start_angle <= PI);
            assert!(approx(slider.start_angle(), d), "{d}");
        }
        slider.set_end_angle(-30.0);
        assert!(approx(slider.end_angle(), 330.0));
    }

    #[test]
    fn test_thumb_positions_follow_angles() {
        let (slider, _) = slider_with(&SliderConfig::default());
        let start = slider.thumb_position(Thumb::Start);
        assert!(approx(start.x, 200.0));
        assert!(approx(start.y, 390.0));
        let end = slider.thumb_position(Thumb::End);
        assert!(approx(end.x, 295.0));
        assert!(approx(end.y, 200.0 + 190.0 * (PI / 3.0).sin()));
    }

    #[test]
    fn test_press_on_thumb_position_hits_it() {
        let (mut slider, recorder) = slider_with(&SliderConfig::default());
        let end = slider.thumb_position(Thumb::End);
        let response = slider.on_touch_event(TouchEvent::down(end.x, end.y));
        assert!(response.consumed);
        assert!(response.should_redraw);
        assert_eq!(slider.drag_state(), DragState::DraggingEnd);
        assert!(recorder.take().contains(&Heard::EndEvent(ThumbEvent::Pressed)));

        slider.on_touch_event(TouchEvent::up(end.x, end.y));
        let start = slider.thumb_position(Thumb::Start);
        slider.on_touch_event(TouchEvent::down(start.x, start.y));
        assert_eq!(slider.drag_state(), DragState::DraggingStart);
        let heard = recorder.take();
        assert_eq!(heard.first(), Some(&Heard::EndEvent(ThumbEvent::Released)));
        assert!(heard.contains(&Heard::StartEvent(ThumbEvent::Pressed)));
    }

    #[test]
    fn test_press_outside_thumbs_stays_idle() {
        let (mut slider, recorder) = slider_with(&SliderConfig::default());
        let response = slider.on_touch_event(TouchEvent::down(20.0, 20.0));
        assert!(response.consumed);
        assert!(!response.should_redraw);
        assert_eq!(slider.drag_state(), DragState::Idle);

        slider.on_touch_event(TouchEvent::moved(30.0, 30.0));
        slider.on_touch_event(TouchEvent::up(30.0, 30.0));
        assert!(recorder.take().is_empty());
    }

    #[test]
    fn test_start_thumb_wins_overlap() {
        let config = SliderConfig {
            start_angle: 60.0,
            end_angle: 60.0,
            ..SliderConfig::default()
        };
        let (mut slider, recorder) = slider_with(&config);
        let p = slider.thumb_position(Thumb::Start);
        assert_eq!(slider.hit_test(p), Some(Thumb::Start));

        slider.on_touch_event(TouchEvent::down(p.x, p.y));
        assert_eq!(slider.drag_state(), DragState::DraggingStart);
        let heard = recorder.take();
        assert!(heard.contains(&Heard::StartEvent(ThumbEvent::Pressed)));
        assert!(!heard.iter().any(|h| matches!(h, Heard::EndEvent(_) | Heard::EndMoved(_))));
    }

    #[test]
    fn test_hit_box_reaches_one_thumb_size() {
        let (slider, _) = slider_with(&SliderConfig::default());
        let end = slider.thumb_position(Thumb::End);
        assert_eq!(slider.hit_test(Point::new(end.x + 49.0, end.y)), Some(Thumb::End));
        assert_eq!(slider.hit_test(Point::new(end.x + 50.0, end.y)), None);
    }

    #[test]
    fn test_touch_at_center_is_ignored() {
        let (mut slider, recorder) = slider_with(&SliderConfig::default());
        let end = slider.thumb_position(Thumb::End);
        slider.on_touch_event(TouchEvent::down(end.x, end.y));
        recorder.take();
        let before = slider.end_angle;

        let response = slider.on_touch_event(TouchEvent::moved(200.0, 200.0));
        assert!(!response.should_redraw);
        assert_eq!(slider.end_angle, before);
        assert!(slider.end_angle.is_finite());
        assert!(recorder.take().is_empty());
    }

    #[test]
    fn test_move_updates_only_active_thumb() {
        let (mut slider, recorder) = slider_with(&SliderConfig::default());
        let end = slider.thumb_position(Thumb::End);
        slider.on_touch_event(TouchEvent::down(end.x, end.y));
        recorder.take();

        let target = slider.geometry().point_at(-PI / 6.0);
        let response = slider.on_touch_event(TouchEvent::moved(target.x, target.y));
        assert!(response.should_redraw);
        assert!(approx(slider.start_angle(), 90.0));
        assert!(approx(slider.end_angle(), 30.0));

        let heard = recorder.take();
        assert_eq!(heard.len(), 1);
        let Heard::EndMoved(pos) = heard[0] else {
            panic!("expected end move, got {heard:?}");
        };
        assert!(approx(pos, 30.0));
    }

    #[test]
    fn test_drag_to_nine_oclock_stays_in_range() {
        let (mut slider, recorder) = slider_with(&SliderConfig::default());
        let end = slider.thumb_position(Thumb::End);
        slider.on_touch_event(TouchEvent::down(end.x, end.y));
        recorder.take();

        // a hair below 9 o'clock: dx / c rounds to -1 and the angle flips sign
        slider.on_touch_event(TouchEvent::moved(0.0, 200.0000001));
        assert!(
            slider.end_angle > -PI && slider.end_angle <= PI,
            "stored {}",
            slider.end_angle
        );
        assert!(approx(slider.end_angle(), 180.0));
        let heard = recorder.take();
        let [Heard::EndMoved(pos)] = heard.as_slice() else {
            panic!("expected one end move, got {heard:?}");
        };
        assert!(approx(*pos, 180.0));
    }

    #[test]
    fn test_guard_uses_start_angle_for_end_thumb() {
        // start thumb at the top projects above every touch, so nothing moves
        let config = SliderConfig {
            start_angle: 270.0,
            end_angle: 60.0,
            ..SliderConfig::default()
        };
        let (mut slider, recorder) = slider_with(&config);
        let end = slider.thumb_position(Thumb::End);
        slider.on_touch_event(TouchEvent::down(end.x, end.y));
        assert_eq!(slider.drag_state(), DragState::DraggingEnd);

        let target = slider.geometry().point_at(-PI / 6.0);
        slider.on_touch_event(TouchEvent::moved(target.x, target.y));
        assert!(approx(slider.end_angle(), 60.0));
        assert_eq!(
            recorder.take(),
            vec![Heard::EndEvent(ThumbEvent::Pressed)]
        );
    }

    #[test]
    fn test_cancel_releases_active_thumb() {
        let (mut slider, recorder) = slider_with(&SliderConfig::default());
        let end = slider.thumb_position(Thumb::End);
        slider.on_touch_event(TouchEvent::down(end.x, end.y));
        recorder.take();

        let response = slider.on_touch_event(TouchEvent::cancel());
        assert!(response.should_redraw);
        assert_eq!(slider.drag_state(), DragState::Idle);
        assert_eq!(recorder.take(), vec![Heard::EndEvent(ThumbEvent::Released)]);
    }

    #[test]
    fn test_removing_listener_silences_callbacks() {
        let (mut slider, recorder) = slider_with(&SliderConfig::default());
        slider.set_on_slider_range_moved_listener(None);
        let end = slider.thumb_position(Thumb::End);
        slider.on_touch_event(TouchEvent::down(end.x, end.y));
        slider.on_touch_event(TouchEvent::up(end.x, end.y));
        assert!(recorder.take().is_empty());
    }

    #[test]
    fn test_setters_and_sizes() {
        let config = SliderConfig {
            thumb_size: 30.0,
            start_thumb_size: Some(44.0),
            ..SliderConfig::default()
        };
        let (mut slider, _) = slider_with(&config);
        assert_eq!(slider.start_thumb_size(), 44.0);
        assert_eq!(slider.end_thumb_size(), 30.0);

        slider.set_thumb_size(12.0);
        assert_eq!(slider.start_thumb_size(), 12.0);
        assert_eq!(slider.end_thumb_size(), 12.0);

        slider.set_line_cap(LineCap::Square);
        slider.set_arc_dash_size(8.0);
        let paint = slider.arc_paint();
        assert_eq!(paint.cap, LineCap::Square);
        assert_eq!(paint.stroke_width, 8.0);
        assert_eq!(slider.border_paint().cap, LineCap::Square);
    }

    #[test]
    fn test_padding_and_border_shrink_radius() {
        let mut slider: RangeSliderWidget<()> = RangeSliderWidget::from_config(&SliderConfig::default());
        slider.set_border_thickness(40.0);
        slider.set_padding(15.0);
        slider.on_size_changed(500.0, 300.0);
        let g = slider.geometry();
        assert!(approx(g.radius, 150.0 - 20.0 - 15.0));
        assert!(approx(g.center.x, 250.0));
        assert!(approx(g.center.y, 150.0));
    }
}
