use crate::slider::geometry::Point;
use strum::Display as StrumDisplay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum TouchAction {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub action: TouchAction,
    pub point: Point,
}

impl TouchEvent {
    pub fn new(action: TouchAction, point: Point) -> Self {
        Self { action, point }
    }

    pub fn down(x: f64, y: f64) -> Self {
        Self::new(TouchAction::Down, Point::new(x, y))
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(TouchAction::Move, Point::new(x, y))
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self::new(TouchAction::Up, Point::new(x, y))
    }

    pub fn cancel() -> Self {
        Self::new(TouchAction::Cancel, Point::default())
    }
}

/// Press state change reported for a single thumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum ThumbEvent {
    Pressed,
    Released,
}
