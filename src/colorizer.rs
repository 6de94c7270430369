//! Colorizers: mappings from numeric values to colors.
//!
//! - [`Colorizer::LinearGradient`] and [`Colorizer::LogarithmicGradient`]
//!   interpolate between sorted [`ColorBreakpoint`]s.
//! - [`Colorizer::Palette`] maps exact values to colors.
//! - [`Colorizer::Rgba`] reads the value as packed RGBA bytes.
//!
//! Colorizers are immutable values.  Updates go through
//! [`Colorizer::clone_with`], which returns a new colorizer.

use std::borrow::Cow;
use std::collections::HashMap;
use crate::breakpoint::ColorBreakpoint;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::ramp::{Bounds, Scale};

/// Breakpoints and fallback colors shared by both gradient variants.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    /// Sorted by ascending value.
    pub breakpoints: Vec<ColorBreakpoint>,
    pub no_data_color: Color,
    /// Color for values above the last breakpoint.
    pub over_color: Color,
    /// Color for values below the first breakpoint (and for gradients
    /// without breakpoints).
    pub under_color: Color,
}

/// An insertion-ordered map from values to colors.
///
/// Equality compares the key–color pairs regardless of their order,
/// positional queries ([`PaletteColors::get_index`]) follow insertion
/// order.
#[derive(Clone, Debug, Default)]
pub struct PaletteColors {
    entries: Vec<(f64, Color)>,
    index: HashMap<u64, usize>, // key bits → position in `entries`
}

/// A discrete value → color table.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub colors: PaletteColors,
    pub no_data_color: Color,
    /// Color for values that are not a key of `colors`.
    pub default_color: Color,
}

/// A mapping from numeric values to colors.
///
/// Colorizers are built from sampled breakpoints (see [`ramp::sample`])
/// or decoded from their dict form (see [`Colorizer::from_dict`]).
///
/// [`ramp::sample`]: crate::ramp::sample
#[derive(Clone, Debug, PartialEq)]
pub enum Colorizer {
    /// Interpolates between breakpoints; duplicate values resolve to
    /// the last one.
    LinearGradient(Gradient),
    /// Same lookup as [`Colorizer::LinearGradient`] but duplicate values
    /// resolve to the first one.  Its breakpoints are usually sampled
    /// in log space.
    LogarithmicGradient(Gradient),
    /// Exact value lookup.
    Palette(Palette),
    /// The integer part of the value read as `0xRRGGBBAA`.
    Rgba,
}

/// Partial update of a gradient; `None` fields are kept.
#[derive(Clone, Debug, Default)]
pub struct GradientUpdate {
    pub breakpoints: Option<Vec<ColorBreakpoint>>,
    pub no_data_color: Option<Color>,
    pub over_color: Option<Color>,
    pub under_color: Option<Color>,
}

/// Partial update of a palette; `None` fields are kept.
#[derive(Clone, Debug, Default)]
pub struct PaletteUpdate {
    pub colors: Option<PaletteColors>,
    pub no_data_color: Option<Color>,
    pub default_color: Option<Color>,
}

/// An update for [`Colorizer::clone_with`].  Gradient updates apply to
/// both gradient variants.
#[derive(Clone, Debug)]
pub enum ColorizerUpdate {
    Gradient(GradientUpdate),
    Palette(PaletteUpdate),
}

impl From<GradientUpdate> for ColorizerUpdate {
    fn from(u: GradientUpdate) -> Self { ColorizerUpdate::Gradient(u) }
}

impl From<PaletteUpdate> for ColorizerUpdate {
    fn from(u: PaletteUpdate) -> Self { ColorizerUpdate::Palette(u) }
}

/// Which lower breakpoint brackets a value when several qualify.
#[derive(Clone, Copy)]
enum Search {
    /// Last breakpoint with `value <= v`.
    Rightmost,
    /// First breakpoint `i` with `b[i].value <= v <= b[i + 1].value`.
    Leftmost,
}

impl Gradient {
    pub fn new(breakpoints: Vec<ColorBreakpoint>, no_data_color: Color,
               over_color: Color, under_color: Color) -> Self {
        Gradient { breakpoints, no_data_color, over_color, under_color }
    }

    /// A copy with the fields set in `update` replaced.
    #[must_use]
    pub fn clone_with(&self, update: GradientUpdate) -> Self {
        Gradient {
            breakpoints: update.breakpoints.unwrap_or_else(|| self.breakpoints.clone()),
            no_data_color: update.no_data_color.unwrap_or(self.no_data_color),
            over_color: update.over_color.unwrap_or(self.over_color),
            under_color: update.under_color.unwrap_or(self.under_color),
        }
    }

    fn color(&self, value: f64, search: Search) -> Color {
        let bps = &self.breakpoints;
        let (Some(first), Some(last)) = (bps.first(), bps.last()) else {
            return self.under_color
        };
        if value < first.value {
            return self.under_color
        }
        if value > last.value {
            return self.over_color
        }
        let last_index = bps.len() - 1;
        let index = match search {
            Search::Rightmost => bps.iter().rposition(|b| value >= b.value),
            Search::Leftmost => (0 ..= last_index).position(|i| {
                bps[i].value <= value && value <= bps[(i + 1).min(last_index)].value
            }),
        }.unwrap_or(0);
        let next = (index + 1).min(last_index);
        let (lo, hi) = (&bps[index], &bps[next]);
        if next == index || hi.value == lo.value {
            return lo.color
        }
        let frac = (value - lo.value) / (hi.value - lo.value);
        Color::interpolate(&lo.color, &hi.color, frac)
    }
}

/// `-0.` and `0.` are the same key.
#[inline]
fn key_bits(key: f64) -> u64 {
    if key == 0. { 0_f64.to_bits() } else { key.to_bits() }
}

impl PaletteColors {
    pub fn new() -> Self { PaletteColors::default() }

    /// Insert `color` for `key`.  An existing key keeps its position
    /// and gets the new color.
    pub fn insert(&mut self, key: f64, color: Color) {
        let bits = key_bits(key);
        match self.index.get(&bits) {
            Some(&i) => self.entries[i].1 = color,
            None => {
                self.index.insert(bits, self.entries.len());
                self.entries.push((key, color));
            }
        }
    }

    pub fn get(&self, key: f64) -> Option<&Color> {
        self.index.get(&key_bits(key)).map(|&i| &self.entries[i].1)
    }

    /// The `index`-th entry in insertion order.
    pub fn get_index(&self, index: usize) -> Option<(f64, &Color)> {
        self.entries.get(index).map(|(k, c)| (*k, c))
    }

    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (f64, &Color)> + '_ {
        self.entries.iter().map(|(k, c)| (*k, c))
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = f64> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }
}

impl PartialEq for PaletteColors {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(k, c)| other.get(k) == Some(c))
    }
}

impl FromIterator<(f64, Color)> for PaletteColors {
    fn from_iter<I: IntoIterator<Item = (f64, Color)>>(iter: I) -> Self {
        let mut colors = PaletteColors::new();
        for (k, c) in iter {
            colors.insert(k, c);
        }
        colors
    }
}

impl Palette {
    pub fn new(colors: PaletteColors, no_data_color: Color, default_color: Color) -> Self {
        Palette { colors, no_data_color, default_color }
    }

    #[must_use]
    pub fn clone_with(&self, update: PaletteUpdate) -> Self {
        Palette {
            colors: update.colors.unwrap_or_else(|| self.colors.clone()),
            no_data_color: update.no_data_color.unwrap_or(self.no_data_color),
            default_color: update.default_color.unwrap_or(self.default_color),
        }
    }
}

/// Convert like an unsigned 32-bit truncation: the integer part taken
/// modulo 2³², non-finite values give 0.
fn to_u32(value: f64) -> u32 {
    if value.is_finite() { value.trunc().rem_euclid(4_294_967_296.) as u32 } else { 0 }
}

impl Colorizer {
    pub const LINEAR_GRADIENT: &'static str = "linearGradient";
    pub const LOGARITHMIC_GRADIENT: &'static str = "logarithmicGradient";
    pub const PALETTE: &'static str = "palette";
    pub const RGBA: &'static str = "rgba";

    pub fn linear_gradient(breakpoints: Vec<ColorBreakpoint>, no_data_color: Color,
                           over_color: Color, under_color: Color) -> Self {
        Colorizer::LinearGradient(
            Gradient::new(breakpoints, no_data_color, over_color, under_color))
    }

    pub fn logarithmic_gradient(breakpoints: Vec<ColorBreakpoint>, no_data_color: Color,
                                over_color: Color, under_color: Color) -> Self {
        Colorizer::LogarithmicGradient(
            Gradient::new(breakpoints, no_data_color, over_color, under_color))
    }

    /// The gradient variant matching the scale `breakpoints` were
    /// sampled with.
    ///
    /// # Example
    ///
    /// ```
    /// use raster_colorizer::{ramp, Bounds, Color, Colorizer, Scale};
    /// let ramp = [Color::BLACK, Color::WHITE];
    /// let bps = ramp::sample(&ramp, 3, Bounds::new(1., 100.), Scale::Logarithmic, false)?;
    /// let c = Colorizer::gradient(Scale::Logarithmic, bps, Color::TRANSPARENT,
    ///                             Color::WHITE, Color::BLACK);
    /// assert!(matches!(c, Colorizer::LogarithmicGradient(_)));
    /// assert_eq!(c.get_color(100.), Color::WHITE);
    /// # Ok::<(), raster_colorizer::Error>(())
    /// ```
    pub fn gradient(scale: Scale, breakpoints: Vec<ColorBreakpoint>, no_data_color: Color,
                    over_color: Color, under_color: Color) -> Self {
        let g = Gradient::new(breakpoints, no_data_color, over_color, under_color);
        match scale {
            Scale::Linear => Colorizer::LinearGradient(g),
            Scale::Logarithmic => Colorizer::LogarithmicGradient(g),
        }
    }

    pub fn palette(colors: PaletteColors, no_data_color: Color, default_color: Color) -> Self {
        Colorizer::Palette(Palette::new(colors, no_data_color, default_color))
    }

    /// Black at `bounds.min`, mid gray at the center and white at
    /// `bounds.max`; every fallback color is transparent.
    pub fn gray_scale(bounds: Bounds) -> Self {
        let center = (bounds.min + bounds.max) / 2.;
        Colorizer::linear_gradient(
            vec![ColorBreakpoint::new(bounds.min, Color::BLACK),
                 ColorBreakpoint::new(center, Color::new(128., 128., 128., 1.)),
                 ColorBreakpoint::new(bounds.max, Color::WHITE)],
            Color::TRANSPARENT, Color::TRANSPARENT, Color::TRANSPARENT)
    }

    /// The tag used in the dict form.
    pub fn type_name(&self) -> &'static str {
        match self {
            Colorizer::LinearGradient(_) => Self::LINEAR_GRADIENT,
            Colorizer::LogarithmicGradient(_) => Self::LOGARITHMIC_GRADIENT,
            Colorizer::Palette(_) => Self::PALETTE,
            Colorizer::Rgba => Self::RGBA,
        }
    }

    pub fn no_data_color(&self) -> Color {
        match self {
            Colorizer::LinearGradient(g) | Colorizer::LogarithmicGradient(g) => g.no_data_color,
            Colorizer::Palette(p) => p.no_data_color,
            Colorizer::Rgba => Color::TRANSPARENT,
        }
    }

    /// Map `value` to a color.  `None` and NaN are no-data.
    ///
    /// # Example
    ///
    /// ```
    /// use raster_colorizer::{Color, ColorBreakpoint, Colorizer};
    /// let c = Colorizer::linear_gradient(
    ///     vec![ColorBreakpoint::new(0., Color::BLACK),
    ///          ColorBreakpoint::new(10., Color::new(100., 100., 100., 1.))],
    ///     Color::TRANSPARENT, Color::WHITE, Color::BLACK);
    /// assert_eq!(c.get_color(5.), Color::new(50., 50., 50., 1.));
    /// assert_eq!(c.get_color(None), Color::TRANSPARENT);
    /// ```
    pub fn get_color(&self, value: impl Into<Option<f64>>) -> Color {
        let value = match value.into() {
            Some(v) if !v.is_nan() => v,
            _ => return self.no_data_color(),
        };
        match self {
            Colorizer::LinearGradient(g) => g.color(value, Search::Rightmost),
            Colorizer::LogarithmicGradient(g) => g.color(value, Search::Leftmost),
            Colorizer::Palette(p) => p.colors.get(value).copied().unwrap_or(p.default_color),
            Colorizer::Rgba => {
                let [r, g, b, a] = to_u32(value).to_be_bytes();
                Color::new(f64::from(r), f64::from(g), f64::from(b), f64::from(a) / 255.)
            }
        }
    }

    /// Gradients return their breakpoints; palettes list their entries
    /// in insertion order (not sorted by value).
    pub fn breakpoints(&self) -> Cow<'_, [ColorBreakpoint]> {
        match self {
            Colorizer::LinearGradient(g) | Colorizer::LogarithmicGradient(g) => {
                Cow::Borrowed(&g.breakpoints)
            }
            Colorizer::Palette(p) => Cow::Owned(
                p.colors.iter().map(|(k, c)| ColorBreakpoint::new(k, *c)).collect()),
            Colorizer::Rgba => Cow::Borrowed(&[]),
        }
    }

    pub fn number_of_colors(&self) -> usize {
        match self {
            Colorizer::LinearGradient(g) | Colorizer::LogarithmicGradient(g) => {
                g.breakpoints.len()
            }
            Colorizer::Palette(p) => p.colors.len(),
            Colorizer::Rgba => 0,
        }
    }

    /// The color of the `index`-th breakpoint or palette entry.
    pub fn color_at_index(&self, index: usize) -> Result<Color> {
        let color = match self {
            Colorizer::LinearGradient(g) | Colorizer::LogarithmicGradient(g) => {
                g.breakpoints.get(index).map(|b| b.color)
            }
            Colorizer::Palette(p) => p.colors.get_index(index).map(|(_, c)| *c),
            Colorizer::Rgba => None,
        };
        color.ok_or(Error::IndexOutOfRange { index, len: self.number_of_colors() })
    }

    pub fn is_gradient(&self) -> bool {
        matches!(self, Colorizer::LinearGradient(_) | Colorizer::LogarithmicGradient(_))
    }

    pub fn is_discrete(&self) -> bool { matches!(self, Colorizer::Palette(_)) }

    #[inline]
    pub fn is_continuous(&self) -> bool { !self.is_discrete() }

    /// A new colorizer of the same variant with the fields set in
    /// `update` replaced.  Fails if `update` is meant for another
    /// variant.
    pub fn clone_with(&self, update: impl Into<ColorizerUpdate>) -> Result<Self> {
        match (self, update.into()) {
            (Colorizer::LinearGradient(g), ColorizerUpdate::Gradient(u)) => {
                Ok(Colorizer::LinearGradient(g.clone_with(u)))
            }
            (Colorizer::LogarithmicGradient(g), ColorizerUpdate::Gradient(u)) => {
                Ok(Colorizer::LogarithmicGradient(g.clone_with(u)))
            }
            (Colorizer::Palette(p), ColorizerUpdate::Palette(u)) => {
                Ok(Colorizer::Palette(p.clone_with(u)))
            }
            (_, ColorizerUpdate::Gradient(_)) => {
                Err(Error::IncompatibleUpdate { kind: "gradient" })
            }
            (_, ColorizerUpdate::Palette(_)) => {
                Err(Error::IncompatibleUpdate { kind: "palette" })
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn gray(v: f64) -> Color { Color::new(v, v, v, 1.) }

    const UNDER: Color = Color::new(0., 0., 255., 1.);
    const OVER: Color = Color::new(255., 0., 0., 1.);
    const NO_DATA: Color = Color::TRANSPARENT;

    fn ten_to_twenty() -> Vec<ColorBreakpoint> {
        vec![ColorBreakpoint::new(10., gray(0.)),
             ColorBreakpoint::new(15., gray(100.)),
             ColorBreakpoint::new(20., gray(200.))]
    }

    fn gradients(bps: Vec<ColorBreakpoint>) -> [Colorizer; 2] {
        [Colorizer::linear_gradient(bps.clone(), NO_DATA, OVER, UNDER),
         Colorizer::logarithmic_gradient(bps, NO_DATA, OVER, UNDER)]
    }

    fn palette() -> Colorizer {
        let colors = [(3., gray(30.)), (1., gray(10.)), (2., gray(20.))]
            .into_iter().collect();
        Colorizer::palette(colors, NO_DATA, UNDER)
    }

    #[test]
    fn gradient_boundaries() {
        for c in gradients(ten_to_twenty()) {
            assert_eq!(c.get_color(5.), UNDER);
            assert_eq!(c.get_color(25.), OVER);
            assert_eq!(c.get_color(None), NO_DATA);
            assert_eq!(c.get_color(f64::NAN), NO_DATA);
            assert_eq!(c.get_color(f64::NEG_INFINITY), UNDER);
            assert_eq!(c.get_color(f64::INFINITY), OVER);
        }
    }

    #[test]
    fn gradient_exact_at_breakpoints() {
        for c in gradients(ten_to_twenty()) {
            for b in c.breakpoints().iter() {
                assert_eq!(c.get_color(b.value), b.color, "{} at {}", c.type_name(), b.value);
            }
        }
    }

    #[test]
    fn gradient_interpolates() {
        for c in gradients(ten_to_twenty()) {
            assert_eq!(c.get_color(12.5), gray(50.));
            assert_eq!(c.get_color(17.5), gray(150.));
        }
    }

    #[test]
    fn empty_gradient_is_under() {
        for c in gradients(vec![]) {
            assert_eq!(c.get_color(0.), UNDER);
            assert_eq!(c.number_of_colors(), 0);
        }
    }

    #[test]
    fn single_breakpoint() {
        for c in gradients(vec![ColorBreakpoint::new(1., gray(7.))]) {
            assert_eq!(c.get_color(1.), gray(7.));
            assert_eq!(c.get_color(0.), UNDER);
            assert_eq!(c.get_color(2.), OVER);
        }
    }

    #[test]
    fn duplicate_values_pick_different_sides() {
        let bps = vec![ColorBreakpoint::new(5., gray(10.)),
                       ColorBreakpoint::new(5., gray(20.)),
                       ColorBreakpoint::new(10., gray(30.))];
        let [linear, log] = gradients(bps);
        assert_eq!(linear.get_color(5.), gray(20.));
        assert_eq!(log.get_color(5.), gray(10.));
        assert_eq!(linear.get_color(7.5), gray(25.));
        assert_eq!(log.get_color(7.5), gray(25.));
    }

    #[test]
    fn palette_lookup() {
        let c = palette();
        assert_eq!(c.get_color(2.), gray(20.));
        assert_eq!(c.get_color(2.5), UNDER);
        assert_eq!(c.get_color(-1.), UNDER);
        assert_eq!(c.get_color(None), NO_DATA);
        assert_eq!(c.get_color(f64::NAN), NO_DATA);
    }

    #[test]
    fn palette_keeps_insertion_order() {
        let c = palette();
        let values: Vec<f64> = c.breakpoints().iter().map(|b| b.value).collect();
        assert_eq!(values, [3., 1., 2.]);
        assert_eq!(c.number_of_colors(), 3);
        assert_eq!(c.color_at_index(0).unwrap(), gray(30.));
        assert_eq!(c.color_at_index(2).unwrap(), gray(20.));
        assert!(matches!(c.color_at_index(3),
                         Err(Error::IndexOutOfRange { index: 3, len: 3 })));
    }

    #[test]
    fn palette_insert_replaces_in_place() {
        let mut colors: PaletteColors = [(1., gray(1.)), (2., gray(2.))].into_iter().collect();
        colors.insert(1., gray(9.));
        assert_eq!(colors.len(), 2);
        assert_eq!(colors.get_index(0), Some((1., &gray(9.))));
        assert_eq!(colors.keys().collect::<Vec<_>>(), [1., 2.]);
    }

    #[test]
    fn palette_reinserted_key_keeps_its_slot() {
        let mut colors: PaletteColors = (0 .. 1000).map(|i| (f64::from(i), gray(1.))).collect();
        colors.insert(500., gray(2.));
        colors.insert(-0., gray(3.));
        assert_eq!(colors.len(), 1000);
        assert_eq!(colors.get_index(500), Some((500., &gray(2.))));
        assert_eq!(colors.get_index(0), Some((0., &gray(3.))));
        assert_eq!(colors.get(0.), Some(&gray(3.)));
        assert_eq!(colors.get(999.), Some(&gray(1.)));
        assert_eq!(colors.get(1000.), None);
        colors.insert(1000., gray(4.));
        assert_eq!(colors.get_index(1000), Some((1000., &gray(4.))));
    }

    #[test]
    fn palette_equality_ignores_order() {
        let a: PaletteColors = [(1., gray(1.)), (2., gray(2.))].into_iter().collect();
        let b: PaletteColors = [(2., gray(2.)), (1., gray(1.))].into_iter().collect();
        let c: PaletteColors = [(2., gray(2.)), (1., gray(3.))].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn gradient_index_queries() {
        let [c, _] = gradients(ten_to_twenty());
        assert_eq!(c.number_of_colors(), 3);
        assert_eq!(c.color_at_index(1).unwrap(), gray(100.));
        assert!(matches!(c.color_at_index(3), Err(Error::IndexOutOfRange { .. })));
    }

    #[test]
    fn classification() {
        let [linear, log] = gradients(ten_to_twenty());
        for c in [&linear, &log] {
            assert!(c.is_gradient() && c.is_continuous() && !c.is_discrete());
        }
        let p = palette();
        assert!(!p.is_gradient() && p.is_discrete() && !p.is_continuous());
        let rgba = Colorizer::Rgba;
        assert!(!rgba.is_gradient() && !rgba.is_discrete() && rgba.is_continuous());
    }

    // Gradients are equal exactly when all breakpoints and fallback
    // colors are equal.
    #[test]
    fn gradient_equality_compares_breakpoints() {
        let [a, _] = gradients(ten_to_twenty());
        let [b, log] = gradients(ten_to_twenty());
        assert_eq!(a, b);
        assert_ne!(a, log);
        let mut bps = ten_to_twenty();
        bps[1] = bps[1].with_color(gray(101.));
        let [c, _] = gradients(bps);
        assert_ne!(a, c);
        let d = a.clone_with(GradientUpdate { over_color: Some(UNDER), ..Default::default() })
            .unwrap();
        assert_ne!(a, d);
    }

    #[test]
    fn clone_with_replaces_only_given_fields() {
        let [c, _] = gradients(ten_to_twenty());
        let updated = c.clone_with(GradientUpdate {
            under_color: Some(gray(1.)),
            ..Default::default()
        }).unwrap();
        let Colorizer::LinearGradient(g) = &updated else { panic!("variant changed") };
        assert_eq!(g.under_color, gray(1.));
        assert_eq!(g.over_color, OVER);
        assert_eq!(g.breakpoints, ten_to_twenty());
        assert_eq!(c.get_color(0.), UNDER);

        let p = palette().clone_with(PaletteUpdate {
            default_color: Some(gray(5.)),
            ..Default::default()
        }).unwrap();
        assert_eq!(p.get_color(42.), gray(5.));
        assert_eq!(p.get_color(1.), gray(10.));
    }

    #[test]
    fn clone_with_rejects_other_variant() {
        assert!(matches!(palette().clone_with(GradientUpdate::default()),
                         Err(Error::IncompatibleUpdate { kind: "gradient" })));
        let [c, _] = gradients(ten_to_twenty());
        assert!(c.clone_with(PaletteUpdate::default()).is_err());
        assert!(Colorizer::Rgba.clone_with(GradientUpdate::default()).is_err());
    }

    #[test]
    fn rgba_unpacks_bytes() {
        let c = Colorizer::Rgba;
        assert_eq!(c.get_color(f64::from(0x11_22_33_ffu32)),
                   Color::new(17., 34., 51., 1.));
        assert_eq!(c.get_color(-1.), Color::new(255., 255., 255., 1.));
        assert_eq!(c.get_color(None), Color::TRANSPARENT);
        assert_eq!(c.number_of_colors(), 0);
        assert!(c.breakpoints().is_empty());
        assert!(c.color_at_index(0).is_err());
    }

    #[test]
    fn gray_scale_spans_bounds() {
        let c = Colorizer::gray_scale(Bounds::new(0., 100.));
        assert_eq!(c.get_color(0.), Color::BLACK);
        assert_eq!(c.get_color(50.), gray(128.));
        assert_eq!(c.get_color(100.), Color::WHITE);
        assert_eq!(c.get_color(101.), Color::TRANSPARENT);
    }
}
