use crate::color::Color;

/// A reference ramp with certain characteristics.
pub(crate) struct RampData {
    pub(crate) colors: Vec<Color>, // Invariant: length ≥ 2
    pub(crate) typ: RampType,
}

impl RampData {
    /// Ramp from RGB fractions in \[0, 1\], as published for the
    /// Matplotlib colormaps.
    pub(crate) fn from_fractions(typ: RampType, rgb: &[[f64; 3]]) -> Self {
        let colors = rgb.iter()
            .map(|&[r, g, b]| Color::from_fractions(r, g, b))
            .collect();
        RampData { colors, typ }
    }
}

/// Type of ramp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RampType {
    /// Sequential ramp, suited to ordered data that progress from low
    /// to high.  Lightness steps dominate the look of these ramps.
    Seq,
    /// Divergent ramp.  It puts equal emphasis on mid-range critical
    /// values and extremes at both ends of the data range, the middle
    /// being light and both ends dark with contrasting hues.
    Div,
}
