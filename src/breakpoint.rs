//! Value–color anchor points.

use crate::color::Color;

/// A value together with the color it is mapped to.
///
/// Nothing orders breakpoints by themselves; gradients expect their
/// breakpoints sorted by ascending `value`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorBreakpoint {
    pub value: f64,
    pub color: Color,
}

impl ColorBreakpoint {
    #[inline]
    pub const fn new(value: f64, color: Color) -> Self {
        ColorBreakpoint { value, color }
    }

    /// Same color, new value.
    #[must_use]
    #[inline]
    pub fn with_value(&self, value: f64) -> Self {
        ColorBreakpoint { value, color: self.color }
    }

    /// Same value, new color.
    #[must_use]
    #[inline]
    pub fn with_color(&self, color: Color) -> Self {
        ColorBreakpoint { value: self.value, color }
    }
}

impl From<(f64, Color)> for ColorBreakpoint {
    #[inline]
    fn from((value, color): (f64, Color)) -> Self { ColorBreakpoint::new(value, color) }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_one_field() {
        let b = ColorBreakpoint::new(1., Color::BLACK);
        let v = b.with_value(2.);
        let c = b.with_color(Color::WHITE);
        assert_eq!(v, ColorBreakpoint::new(2., Color::BLACK));
        assert_eq!(c, ColorBreakpoint::new(1., Color::WHITE));
        assert_eq!(b, ColorBreakpoint::from((1., Color::BLACK)));
    }

    #[test]
    fn equality_needs_both_fields() {
        let b = ColorBreakpoint::new(1., Color::BLACK);
        assert_ne!(b, b.with_value(1.5));
        assert_ne!(b, b.with_color(Color::TRANSPARENT));
    }
}
