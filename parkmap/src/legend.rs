//! Legend classing: three reference circles for the value range.

use crate::symbol::radius;

/// Title above the reference circles.
pub const TITLE: &str = "How old is my park?";

/// Smallest value the legend will represent; smaller minima clamp up.
pub const MIN_CLASS_VALUE: f64 = 10.0;

/// Gap in pixels between stacked legend circles.
const CIRCLE_GAP: f64 = 2.0;

/// `round(x / 10) * 4` — a linear rescale of the class value, not a
/// round-to-nearest-ten. Kept exactly as the map has always classed.
#[must_use]
pub fn rescale(value: f64) -> f64 {
    (value / 10.0).round() * 4.0
}

/// Class breakpoints for a value range: clamped min, half the span, max,
/// each passed through [`rescale`].
#[must_use]
pub fn classes(min: f64, max: f64) -> [f64; 3] {
    let min = if min < MIN_CLASS_VALUE {
        MIN_CLASS_VALUE
    } else {
        min
    };
    [rescale(min), rescale((max - min) / 2.0), rescale(max)]
}

/// Geometry of one rendered legend circle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LegendCircle {
    pub value: f64,
    pub diameter: f64,
    /// Negative left margin that stacks this circle onto the previous one,
    /// baseline-bottom aligned.
    pub margin_left: f64,
}

/// The three legend circles for a value range, sized by the marker radius
/// formula and stacked with negative margins.
#[must_use]
pub fn circles(min: f64, max: f64) -> Vec<LegendCircle> {
    let mut last_radius = 0.0;
    classes(min, max)
        .iter()
        .map(|&value| {
            let current = radius(value).val();
            let margin_left = -current - last_radius - CIRCLE_GAP;
            last_radius = current;
            LegendCircle {
                value,
                diameter: current * 2.0,
                margin_left,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{circles, classes, rescale};
    use crate::symbol::radius;

    #[test]
    fn test_rescale() {
        assert_eq!(rescale(10.0), 4.0);
        assert_eq!(rescale(30.0), 12.0);
        // not a round-to-ten: 128 -> 13 * 4
        assert_eq!(rescale(128.0), 52.0);
    }

    #[test]
    fn test_classes_clamp_min() {
        // min below 10 clamps up before classing
        let [low, mid, high] = classes(5.0, 130.0);
        assert_eq!(low, rescale(10.0));
        assert_eq!(mid, rescale((130.0 - 10.0) / 2.0));
        assert_eq!(high, rescale(130.0));
    }

    #[test]
    fn test_classes_unclamped() {
        let [low, mid, high] = classes(40.0, 120.0);
        assert_eq!(low, 16.0);
        assert_eq!(mid, 16.0);
        assert_eq!(high, 48.0);
    }

    #[test]
    fn test_circle_stacking() {
        let circles = circles(5.0, 130.0);
        assert_eq!(circles.len(), 3);

        let r0 = radius(circles[0].value).val();
        assert_eq!(circles[0].diameter, r0 * 2.0);
        // first circle stacks against nothing but the gap
        assert_eq!(circles[0].margin_left, -r0 - 2.0);

        let r1 = radius(circles[1].value).val();
        assert_eq!(circles[1].margin_left, -r1 - r0 - 2.0);

        let r2 = radius(circles[2].value).val();
        assert_eq!(circles[2].margin_left, -r2 - r1 - 2.0);
    }
}
