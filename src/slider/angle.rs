//! Conversions between the internal angle (radians, counter-clockwise from
//! 3 o'clock) and the drawing angle (degrees in `[0, 360)`, clockwise).

use std::f64::consts::PI;

pub const FULL_TURN_DEG: f64 = 360.0;

/// Internal radians to drawing degrees in `[0, 360)`.
pub fn to_drawing_angle(radians: f64) -> f64 {
    let degrees = radians.to_degrees();
    let fixed = if radians > 0.0 {
        FULL_TURN_DEG - degrees
    } else {
        -degrees
    };
    wrap_degrees(fixed)
}

/// Folds degrees into `[0, 360)`.
pub fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(FULL_TURN_DEG);
    // tiny negative inputs round up to exactly a full turn
    if wrapped >= FULL_TURN_DEG { 0.0 } else { wrapped }
}

/// Drawing degrees to internal radians. Exact inverse of [`to_drawing_angle`]
/// modulo a full turn.
pub fn from_drawing_angle(degrees: f64) -> f64 {
    -degrees.to_radians()
}

/// Folds any angle into `(-PI, PI]`.
pub fn normalize_radians(radians: f64) -> f64 {
    let folded = (radians + PI).rem_euclid(2.0 * PI) - PI;
    // rem_euclid maps +PI onto -PI; keep the closed end of the interval
    if folded <= -PI { PI } else { folded }
}

/// Non-negative clockwise distance from `from` to `to`, both in drawing degrees.
pub fn sweep(from: f64, to: f64) -> f64 {
    wrap_degrees(FULL_TURN_DEG + to - from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_to_drawing_angle_quadrants() {
        assert!(approx(to_drawing_angle(0.0), 0.0));
        assert!(approx(to_drawing_angle(-PI / 2.0), 90.0));
        assert!(approx(to_drawing_angle(PI / 2.0), 270.0));
        assert!(approx(to_drawing_angle(PI), 180.0));
        assert!(approx(to_drawing_angle(-PI / 3.0), 60.0));
    }

    #[test]
    fn test_from_drawing_angle_negates() {
        assert!(approx(from_drawing_angle(90.0), -PI / 2.0));
        assert!(approx(from_drawing_angle(0.0), 0.0));
        assert!(approx(from_drawing_angle(270.0), -3.0 * PI / 2.0));
    }

    #[test]
    fn test_round_trip_whole_degrees() {
        for d in 0..360 {
            let d = d as f64;
            assert!(
                approx(to_drawing_angle(from_drawing_angle(d)), d),
                "round trip failed for {d}"
            );
        }
    }

    #[test]
    fn test_normalize_keeps_drawing_angle() {
        for d in [0.0, 45.0, 179.5, 180.0, 181.0, 270.0, 359.0] {
            let raw = from_drawing_angle(d);
            let normalized = normalize_radians(raw);
            assert!(normalized > -PI && normalized <= PI);
            assert!(approx(to_drawing_angle(normalized), d), "{d}");
        }
    }

    #[test]
    fn test_normalize_boundaries() {
        assert!(approx(normalize_radians(PI), PI));
        assert!(approx(normalize_radians(-PI), PI));
        assert!(approx(normalize_radians(5.0 * PI / 2.0), PI / 2.0));
        assert!(approx(normalize_radians(0.0), 0.0));
    }

    #[test]
    fn test_wrap_degrees_excludes_full_turn() {
        assert_eq!(wrap_degrees(-1e-20), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert!(approx(wrap_degrees(-90.0), 270.0));
        assert!(approx(wrap_degrees(725.0), 5.0));
    }

    #[test]
    fn test_sweep_is_never_negative() {
        assert!(approx(sweep(90.0, 60.0), 330.0));
        assert!(approx(sweep(60.0, 90.0), 30.0));
        assert!(approx(sweep(90.0, 90.0), 0.0));
        // mirror of 300 is -120, which a truncating remainder would leave negative
        assert!(approx(sweep(300.0, 180.0 - 300.0), 300.0));
    }
}
