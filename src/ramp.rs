//! Breakpoint tables sampled from reference color ramps.
//!
//! A [`Ramp`] is an ordered list of reference colors.  [`sample`]
//! spreads a number of steps evenly over a domain (linearly or in log
//! space) and picks, for each step, the ramp color at the same
//! fraction.  Colors between two reference colors are interpolated and
//! truncated to integer channels.  [`sample_values`] does the same for
//! an explicit list of values, e.g. percentiles.

use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::breakpoint::ColorBreakpoint;
use crate::color::Color;
use crate::config::SamplerConfig;
use crate::error::{Error, Result};
use crate::ramps::{self, RampType};
use crate::ColorRange;

/// How step values are spread over a domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    #[default]
    Linear,
    /// Evenly spaced in log space; requires a positive minimum.
    Logarithmic,
}

/// A numeric domain `min ..= max`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

/// An ordered list of reference colors (at least two), possibly read
/// backwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Ramp {
    colors: Vec<Color>,
    reverse: bool,
}

impl Scale {
    /// The domain value at `frac` ∈ \[0, 1\] of `bounds`.
    pub fn value_at(self, bounds: Bounds, frac: f64) -> f64 {
        match self {
            Scale::Linear => bounds.min + frac * (bounds.max - bounds.min),
            Scale::Logarithmic => {
                let (lmin, lmax) = (bounds.min.ln(), bounds.max.ln());
                (lmin + frac * (lmax - lmin)).exp()
            }
        }
    }
}

impl Bounds {
    #[inline]
    pub const fn new(min: f64, max: f64) -> Self { Bounds { min, max } }

    /// Check that the bounds form a non-empty domain usable with
    /// `scale`.
    pub fn check(&self, scale: Scale) -> Result<()> {
        if scale == Scale::Logarithmic && !(self.min > 0.) {
            return Err(Error::NonPositiveLogDomain { min: self.min })
        }
        if !(self.min < self.max) {
            return Err(Error::EmptyDomain { min: self.min, max: self.max })
        }
        Ok(())
    }
}

impl Ramp {
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.len() < 2 {
            return Err(Error::InvalidRamp { len: colors.len() })
        }
        Ok(Ramp { colors, reverse: false })
    }

    /// One of the built-in ramps, see [`Ramp::names`].
    ///
    /// # Example
    ///
    /// ```
    /// use raster_colorizer::{Color, Ramp};
    /// let viridis = Ramp::named("viridis").unwrap();
    /// assert_eq!(viridis.colors()[0], Color::new(68., 1., 84., 1.));
    /// assert!(Ramp::named("jet").is_err());
    /// ```
    pub fn named(name: &str) -> Result<Self> {
        let data = ramps::lookup(name).ok_or_else(|| Error::UnknownRamp(name.to_string()))?;
        Ok(Ramp { colors: data.colors.clone(), reverse: false })
    }

    /// Names of the built-in ramps.
    pub fn names() -> impl Iterator<Item = &'static str> {
        ramps::ALL_RAMPS.iter().map(|(name, _)| *name)
    }

    /// Names of the built-in ramps of type `typ`.
    pub fn names_of(typ: RampType) -> impl Iterator<Item = &'static str> {
        ramps::ALL_RAMPS.iter().filter(move |(_, d)| d.typ == typ).map(|(name, _)| *name)
    }

    /// Read the ramp backwards if `reverse` is true.
    #[must_use]
    pub fn reversed(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    #[inline]
    pub fn is_reversed(&self) -> bool { self.reverse }

    #[inline]
    pub fn colors(&self) -> &[Color] { &self.colors }

    #[inline]
    pub fn len(&self) -> usize { self.colors.len() }

    /// Always false: a ramp has at least two colors.
    #[inline]
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }
}

impl ColorRange for Ramp {
    /// The color at `t` ∈ \[0, 1\] along the ramp.  Positions falling
    /// on a reference color return it unchanged; others blend the
    /// neighboring reference colors and truncate every channel.
    ///
    /// A reversed ramp mirrors the reference index and blends towards
    /// the preceding color.
    fn color(&self, t: f64) -> Color {
        let n = self.colors.len();
        let pos = t.clamp(0., 1.) * (n - 1) as f64;
        let mut idx = (pos.floor() as usize).min(n - 1);
        let rem = pos - idx as f64;
        let mut next = (idx + 1).min(n - 1);
        if self.reverse {
            idx = n - 1 - idx;
            next = idx.saturating_sub(1);
        }
        if rem < f64::EPSILON {
            return self.colors[idx]
        }
        let (c0, c1) = (&self.colors[idx], &self.colors[next]);
        let lerp = |x: f64, y: f64| (x + rem * (y - x)).trunc();
        Color::new(lerp(c0.r, c1.r), lerp(c0.g, c1.g), lerp(c0.b, c1.b), lerp(c0.a, c1.a))
    }
}

/// Sample `steps` breakpoints from `ramp` spread over `bounds`.
///
/// Step `i` sits at fraction `i / (steps - 1)` of both the domain and
/// the ramp.  The last breakpoint gets exactly `bounds.max`.
///
/// # Example
///
/// ```
/// use raster_colorizer::{ramp, Bounds, Color, ColorBreakpoint, Scale};
/// let bps = ramp::sample(&[Color::BLACK, Color::WHITE], 3,
///                        Bounds::new(0., 10.), Scale::Linear, false)?;
/// assert_eq!(bps, [ColorBreakpoint::new(0., Color::BLACK),
///                  ColorBreakpoint::new(5., Color::new(127., 127., 127., 1.)),
///                  ColorBreakpoint::new(10., Color::WHITE)]);
/// # Ok::<(), raster_colorizer::Error>(())
/// ```
pub fn sample(ramp: &[Color], steps: usize, bounds: Bounds, scale: Scale,
              reverse: bool) -> Result<Vec<ColorBreakpoint>> {
    let ramp = Ramp::new(ramp.to_vec())?.reversed(reverse);
    debug!(steps, ?scale, reverse, min = bounds.min, max = bounds.max,
           "sampling breakpoints");
    Ok(ramp.range(bounds, steps, scale)?.collect())
}

/// Sample one breakpoint per entry of `values` (sorted ascending,
/// typically the domain minimum, some percentiles and the maximum).
///
/// Entry `i` takes the ramp color at fraction `i / values.len()`, so
/// the last reference color is never reached.  Fails if `values` is
/// empty.
pub fn sample_values(ramp: &[Color], values: &[f64],
                     reverse: bool) -> Result<Vec<ColorBreakpoint>> {
    let ramp = Ramp::new(ramp.to_vec())?.reversed(reverse);
    if values.is_empty() {
        return Err(Error::InvalidStepCount { steps: 0, min: 1, max: usize::MAX })
    }
    Ok(values_breakpoints(&ramp, values))
}

fn values_breakpoints(ramp: &Ramp, values: &[f64]) -> Vec<ColorBreakpoint> {
    debug!(values = values.len(), reverse = ramp.reverse, "sampling breakpoints at values");
    let len = values.len() as f64;
    values.iter().enumerate()
        .map(|(i, &v)| ColorBreakpoint::new(v, ramp.color(i as f64 / len)))
        .collect()
}

/// Samples breakpoint tables within the limits of a [`SamplerConfig`].
#[derive(Clone, Debug, Default)]
pub struct RampSampler {
    config: SamplerConfig,
}

impl RampSampler {
    pub fn new(config: SamplerConfig) -> Self { RampSampler { config } }

    #[inline]
    pub fn config(&self) -> &SamplerConfig { &self.config }

    /// Like [`sample`] with a prepared ramp.  Fails if `steps` is
    /// outside `2 ..= max_steps`.
    pub fn sample(&self, ramp: &Ramp, steps: usize, bounds: Bounds,
                  scale: Scale) -> Result<Vec<ColorBreakpoint>> {
        let max = self.config.max_steps;
        if !(2 ..= max).contains(&steps) {
            return Err(Error::InvalidStepCount { steps, min: 2, max })
        }
        debug!(steps, ?scale, reverse = ramp.reverse, min = bounds.min, max = bounds.max,
               "sampling breakpoints");
        Ok(ramp.range(bounds, steps, scale)?.collect())
    }

    /// [`RampSampler::sample`] with the configured default number of
    /// steps.
    pub fn sample_default(&self, ramp: &Ramp, bounds: Bounds,
                          scale: Scale) -> Result<Vec<ColorBreakpoint>> {
        self.sample(ramp, self.config.default_steps, bounds, scale)
    }

    /// Like [`sample_values`] with a prepared ramp.  `values` holds
    /// the domain minimum, at most `max_percentiles` percentiles and
    /// the domain maximum.
    pub fn sample_values(&self, ramp: &Ramp, values: &[f64]) -> Result<Vec<ColorBreakpoint>> {
        let max = self.config.max_percentiles + 2;
        if !(1 ..= max).contains(&values.len()) {
            return Err(Error::InvalidStepCount { steps: values.len(), min: 1, max })
        }
        Ok(values_breakpoints(ramp, values))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn gray(v: f64) -> Color { Color::new(v, v, v, 1.) }

    fn bw() -> [Color; 2] { [Color::BLACK, Color::WHITE] }

    #[test]
    fn three_linear_steps_truncate() {
        let bps = sample(&bw(), 3, Bounds::new(0., 10.), Scale::Linear, false).unwrap();
        assert_eq!(bps, [ColorBreakpoint::new(0., gray(0.)),
                         ColorBreakpoint::new(5., gray(127.)),
                         ColorBreakpoint::new(10., gray(255.))]);
    }

    #[test]
    fn last_value_is_exact_max() {
        let bps = sample(&bw(), 5, Bounds::new(0., 10.), Scale::Linear, false).unwrap();
        assert_eq!(bps.len(), 5);
        assert_eq!(bps[0].value, 0.);
        assert_eq!(bps[4].value, 10.);
        let bps = sample(&bw(), 7, Bounds::new(0.1, 0.7), Scale::Linear, false).unwrap();
        assert_eq!(bps[6].value, 0.7);
        let bps = sample(&bw(), 4, Bounds::new(1., 1000.), Scale::Logarithmic, false).unwrap();
        assert_eq!(bps[3].value, 1000.);
    }

    #[test]
    fn logarithmic_values() {
        let bps = sample(&bw(), 4, Bounds::new(1., 1000.), Scale::Logarithmic, false).unwrap();
        for (b, expected) in bps.iter().zip([1., 10., 100., 1000.]) {
            assert_relative_eq!(b.value, expected, max_relative = 1e-12);
        }
        // colors do not depend on the scale
        let lin = sample(&bw(), 4, Bounds::new(1., 1000.), Scale::Linear, false).unwrap();
        for (l, g) in lin.iter().zip(&bps) {
            assert_eq!(l.color, g.color);
        }
    }

    #[test]
    fn logarithmic_needs_positive_min() {
        for min in [0., -1.] {
            assert!(matches!(
                sample(&bw(), 5, Bounds::new(min, 10.), Scale::Logarithmic, false),
                Err(Error::NonPositiveLogDomain { .. })));
        }
        assert!(sample(&bw(), 5, Bounds::new(0., 10.), Scale::Linear, false).is_ok());
    }

    #[test]
    fn invalid_inputs() {
        assert!(matches!(sample(&bw(), 5, Bounds::new(1., 1.), Scale::Linear, false),
                         Err(Error::EmptyDomain { .. })));
        assert!(matches!(sample(&bw(), 1, Bounds::new(0., 1.), Scale::Linear, false),
                         Err(Error::InvalidStepCount { .. })));
        assert!(matches!(sample(&[Color::BLACK], 3, Bounds::new(0., 1.), Scale::Linear, false),
                         Err(Error::InvalidRamp { len: 1 })));
    }

    #[test]
    fn ramp_positions_hit_reference_colors() {
        let ramp = [gray(0.), gray(100.), gray(200.)];
        let bps = sample(&ramp, 5, Bounds::new(0., 4.), Scale::Linear, false).unwrap();
        let colors: Vec<Color> = bps.iter().map(|b| b.color).collect();
        assert_eq!(colors, [gray(0.), gray(50.), gray(100.), gray(150.), gray(200.)]);
    }

    #[test]
    fn reversed_ramp() {
        let ramp = [gray(0.), gray(100.), gray(200.)];
        let bps = sample(&ramp, 5, Bounds::new(0., 4.), Scale::Linear, true).unwrap();
        let colors: Vec<Color> = bps.iter().map(|b| b.color).collect();
        assert_eq!(colors, [gray(200.), gray(150.), gray(100.), gray(50.), gray(0.)]);
        let values: Vec<f64> = bps.iter().map(|b| b.value).collect();
        assert_eq!(values, [0., 1., 2., 3., 4.]);
    }

    #[test]
    fn alpha_is_truncated_too() {
        let ramp = [Color::new(0., 0., 0., 0.), Color::new(0., 0., 0., 1.)];
        let bps = sample(&ramp, 3, Bounds::new(0., 2.), Scale::Linear, false).unwrap();
        assert_eq!(bps[1].color.a, 0.);
        assert_eq!(bps[2].color.a, 1.);
    }

    #[test]
    fn values_divide_by_length() {
        let ramp = [gray(0.), gray(100.)];
        let bps = sample_values(&ramp, &[0., 1., 5., 10.], false).unwrap();
        let values: Vec<f64> = bps.iter().map(|b| b.value).collect();
        assert_eq!(values, [0., 1., 5., 10.]);
        let colors: Vec<Color> = bps.iter().map(|b| b.color).collect();
        assert_eq!(colors, [gray(0.), gray(25.), gray(50.), gray(75.)]);

        let rev = sample_values(&ramp, &[0., 1., 5., 10.], true).unwrap();
        assert_eq!(rev[0].color, gray(100.));
        assert_eq!(rev[1].color, gray(75.));
        assert!(matches!(sample_values(&ramp, &[], false),
                         Err(Error::InvalidStepCount { steps: 0, min: 1, .. })));
        assert_eq!(sample_values(&ramp, &[3.], false).unwrap(),
                   [ColorBreakpoint::new(3., gray(0.))]);
    }

    #[test]
    fn sampler_limits() {
        let sampler = RampSampler::default();
        let ramp = Ramp::new(bw().to_vec()).unwrap();
        let bounds = Bounds::new(0., 1.);
        assert_eq!(sampler.sample_default(&ramp, bounds, Scale::Linear).unwrap().len(), 16);
        assert!(matches!(sampler.sample(&ramp, 17, bounds, Scale::Linear),
                         Err(Error::InvalidStepCount { steps: 17, min: 2, max: 16 })));
        assert!(sampler.sample_values(&ramp, &[0.; 10]).is_ok());
        assert!(sampler.sample_values(&ramp, &[0.; 11]).is_err());
        assert!(sampler.sample_values(&ramp, &[]).is_err());
    }

    #[test]
    fn sampler_matches_free_function() {
        let sampler = RampSampler::new(SamplerConfig { max_steps: 64, ..Default::default() });
        let ramp = Ramp::named("magma").unwrap().reversed(true);
        let bounds = Bounds::new(-3., 7.);
        assert_eq!(sampler.sample(&ramp, 33, bounds, Scale::Linear).unwrap(),
                   sample(ramp.colors(), 33, bounds, Scale::Linear, true).unwrap());
    }

    #[test]
    fn named_ramps() {
        assert!(Ramp::names().count() >= 6);
        for name in Ramp::names() {
            let ramp = Ramp::named(name).unwrap();
            assert!(ramp.len() >= 2, "{name}");
        }
        assert!(Ramp::names_of(RampType::Div).any(|n| n == "coolwarm"));
        assert!(matches!(Ramp::named("nope"), Err(Error::UnknownRamp(_))));
    }
}
