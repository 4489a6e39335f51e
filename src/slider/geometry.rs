use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point on a circle around `self` at `angle` internal radians.
    /// Screen Y grows downward, hence the minus on the sine term.
    pub fn on_circle(&self, radius: f64, angle: f64) -> Self {
        Self::new(self.x + radius * angle.cos(), self.y - radius * angle.sin())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Square of side `size` centered on `center`.
    pub fn centered_square(center: Point, size: f64) -> Self {
        let half = size / 2.0;
        Self::new(
            center.x - half,
            center.y - half,
            center.x + half,
            center.y + half,
        )
    }

    /// Swaps edges so that `left <= right` and `top <= bottom`.
    pub fn sorted(self) -> Self {
        Self::new(
            self.left.min(self.right),
            self.top.min(self.bottom),
            self.left.max(self.right),
            self.top.max(self.bottom),
        )
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

/// Padding as reported by the host layout. `start`/`end` are the
/// direction-relative sides used by right-to-left layouts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub start: f64,
    pub end: f64,
}

impl Padding {
    pub fn all(value: f64) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
            start: value,
            end: value,
        }
    }

    /// The ring is inset evenly, so the six sides collapse into their average.
    pub fn uniform(&self) -> f64 {
        (self.left + self.top + self.right + self.bottom + self.start + self.end) / 6.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RingGeometry {
    pub center: Point,
    pub radius: f64,
}

impl RingGeometry {
    /// Fits the ring into the largest square centered in `width` x `height`,
    /// inset by half the border stroke plus the padding.
    pub fn calculate(width: f64, height: f64, border_thickness: f64, padding: f64) -> Self {
        let smaller = width.min(height);

        let square_left = (width - smaller) / 2.0;
        let square_top = (height - smaller) / 2.0;
        let square_right = square_left + smaller;
        let square_bottom = square_top + smaller;

        let center = Point::new(
            square_right / 2.0 + (width - square_right) / 2.0,
            square_bottom / 2.0 + (height - square_bottom) / 2.0,
        );
        let radius = smaller / 2.0 - border_thickness / 2.0 - padding;

        Self { center, radius }
    }

    /// Bounding square of the circle, used as the oval for arc drawing.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y + self.radius,
            self.center.x + self.radius,
            self.center.y - self.radius,
        )
        .sorted()
    }

    pub fn point_at(&self, angle: f64) -> Point {
        self.center.on_circle(self.radius, angle)
    }
}
