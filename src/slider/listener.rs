use crate::events::ThumbEvent;

/// Callbacks the host application installs to follow the slider.
///
/// Positions are drawing angles in degrees, `[0, 360)`, clockwise from
/// 3 o'clock.
pub trait SliderRangeListener {
    fn on_start_slider_moved(&mut self, _pos: f64) {}

    fn on_end_slider_moved(&mut self, _pos: f64) {}

    /// The start thumb was pressed or released.
    fn on_start_slider_event(&mut self, _event: ThumbEvent) {}

    /// The end thumb was pressed or released.
    fn on_end_slider_event(&mut self, _event: ThumbEvent) {}
}

/// Reports slider activity through `log`.
#[derive(Debug, Default)]
pub struct LoggingListener;

impl SliderRangeListener for LoggingListener {
    fn on_start_slider_moved(&mut self, pos: f64) {
        log::info!("Start thumb moved to {pos:.1}°");
    }

    fn on_end_slider_moved(&mut self, pos: f64) {
        log::info!("End thumb moved to {pos:.1}°");
    }

    fn on_start_slider_event(&mut self, event: ThumbEvent) {
        log::debug!("Start thumb {event}");
    }

    fn on_end_slider_event(&mut self, event: ThumbEvent) {
        log::debug!("End thumb {event}");
    }
}
