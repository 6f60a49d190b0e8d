//! Proportional-symbol scaling.
//!
//! Circle *area* scales linearly with the attribute value: each unit of
//! value buys `SCALE_FACTOR` square pixels, and the radius follows from
//! `area = π·r²`. Rendering must not tweak this mapping; the legend and the
//! markers both size through [`radius`].

use std::f64::consts::PI;

/// Square pixels of circle area per unit of attribute value.
pub const SCALE_FACTOR: f64 = 10.0;

pub const FILL_COLOR: &str = "#708598";
pub const STROKE_COLOR: &str = "#00008B";
pub const HOVER_STROKE_COLOR: &str = "#00BFFF";
pub const STROKE_WEIGHT: f64 = 4.0;
pub const FILL_OPACITY: f64 = 0.4;

/// Screen-space length.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pixels(f64);

impl Pixels {
    #[must_use]
    pub const fn new(val: f64) -> Self {
        Self(val)
    }

    #[must_use]
    pub const fn val(&self) -> f64 {
        self.0
    }
}

/// Marker radius for an attribute value: `sqrt(value·SCALE_FACTOR / π)`.
#[must_use]
pub fn radius(value: f64) -> Pixels {
    let area = value * SCALE_FACTOR;
    Pixels::new((area / PI).sqrt())
}

/// Popup markup for one marker at one timestamp. The stray closing `</i>`
/// is long-standing; keep the string byte-for-byte for visual parity.
#[must_use]
pub fn popup_content(value: f64, name: &str, timestamp: &str) -> String {
    format!("<b>{value} Years old</b><br><i>{name}</i> in </i>{timestamp}</i>")
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::{popup_content, radius, SCALE_FACTOR};

    #[test]
    fn test_radius_formula() {
        assert_eq!(radius(0.0).val(), 0.0);
        assert_eq!(radius(118.0).val(), (118.0 * SCALE_FACTOR / PI).sqrt());
        // area, not radius, is linear in the value
        let single = radius(25.0).val();
        let quadrupled = radius(100.0).val();
        assert!((quadrupled - 2.0 * single).abs() < 1e-12);
    }

    #[test]
    fn test_radius_strictly_increasing() {
        let mut last = radius(0.0);
        for value in 1..200 {
            let next = radius(f64::from(value));
            assert!(next > last);
            last = next;
        }
    }

    #[test]
    fn test_popup_content() {
        assert_eq!(
            popup_content(118.0, "Yellowstone", "1990"),
            "<b>118 Years old</b><br><i>Yellowstone</i> in </i>1990</i>"
        );
        assert_eq!(
            popup_content(46.5, "Big Bend", "2001"),
            "<b>46.5 Years old</b><br><i>Big Bend</i> in </i>2001</i>"
        );
    }
}
