//! Colorizers mapping raster and attribute values to colors.
//!
//! - [`Color`] and [`ColorBreakpoint`]
//! - [`Colorizer`]: linear and logarithmic gradients, palettes and
//!   packed RGBA values
//! - [`ramp::sample`]: breakpoint tables sampled from a reference
//!   [`Ramp`] over a numeric domain
//!
//! A few reference ramps are provided: Matplotlib viridis, magma,
//! inferno and plasma, Moreland's coolwarm and a gray ramp, see
//! [`Ramp::named`].
//!
//! # Example
//!
//! ```
//! use raster_colorizer::{ramp, Bounds, Color, Colorizer, Scale};
//! let bps = ramp::sample(&[Color::BLACK, Color::WHITE], 3,
//!                        Bounds::new(0., 10.), Scale::Linear, false)?;
//! assert_eq!(bps[1].color, Color::new(127., 127., 127., 1.));
//! let colorizer = Colorizer::linear_gradient(
//!     bps, Color::TRANSPARENT, Color::WHITE, Color::BLACK);
//! assert_eq!(colorizer.get_color(10.), Color::WHITE);
//! # Ok::<(), raster_colorizer::Error>(())
//! ```

mod breakpoint;
mod color;
mod colorizer;
mod config;
mod dict;
mod error;
pub mod ramp;
mod ramps;

pub use breakpoint::ColorBreakpoint;
pub use color::{Color, ColorLike};
pub use colorizer::{
    Colorizer, ColorizerUpdate, Gradient, GradientUpdate, Palette, PaletteColors,
    PaletteUpdate,
};
pub use config::SamplerConfig;
pub use dict::{BreakpointDict, ColorizerDict, PaletteDict, RgbaColorDict};
pub use error::{Error, Result};
pub use ramp::{Bounds, Ramp, RampSampler, Scale};
pub use ramps::RampType;

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn color(&self, t: f64) -> Color;

    /// Return an iterator yielding `n` breakpoints evenly spaced (for
    /// `scale`) over `bounds` together with the colors at the same
    /// fractions of the range.  The last breakpoint has exactly the
    /// value `bounds.max`.
    fn range(self, bounds: Bounds, n: usize, scale: Scale) -> Result<Range<Self>>
    where Self: Sized {
        bounds.check(scale)?;
        if n < 2 {
            return Err(Error::InvalidStepCount { steps: n, min: 2, max: usize::MAX })
        }
        Ok(Range { range: self, bounds, scale,
                   flast: (n - 1) as f64, last: n - 1, i: 0, j: n - 1 })
    }
}

impl<R: ColorRange + ?Sized> ColorRange for &R {
    #[inline]
    fn color(&self, t: f64) -> Color { (**self).color(t) }
}

/// An iterator yielding [`ColorBreakpoint`]s over a domain.
///
/// Created by [`ColorRange::range`].
pub struct Range<R> {
    range: R,
    bounds: Bounds,
    scale: Scale,
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R> Range<R> where R: ColorRange {
    /// Return the breakpoint at position `k` (assuming it is in the
    /// range `0 ..= self.last`).
    fn breakpoint(&self, k: usize) -> ColorBreakpoint {
        let frac = k as f64 / self.flast;
        // The last value is pinned to the bound to avoid drift.
        let value = if k == self.last { self.bounds.max }
                    else { self.scale.value_at(self.bounds, frac) };
        ColorBreakpoint::new(value, self.range.color(frac))
    }
}

impl<R> Iterator for Range<R>
where R: ColorRange {
    type Item = ColorBreakpoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.breakpoint(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<R> ExactSizeIterator for Range<R>
where R: ColorRange {
    fn len(&self) -> usize { (self.j + 1).saturating_sub(self.i) }
}

impl<R> DoubleEndedIterator for Range<R>
where R: ColorRange {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.breakpoint(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_endpoints() {
        let ramp = Ramp::new(vec![Color::BLACK, Color::WHITE]).unwrap();
        let bps: Vec<_> = (&ramp).range(Bounds::new(0., 1.), 11, Scale::Linear)
            .unwrap().collect();
        assert_eq!(bps.len(), 11);
        for (i, b) in bps.iter().enumerate() {
            assert!((b.value - 0.1 * i as f64).abs() <= 1e-15,
                    "{} ≉ {}", b.value, 0.1 * i as f64);
            assert_eq!(ramp.color(b.value), b.color);
        }
        assert_eq!(bps[10].value, 1.);
    }

    #[test]
    fn range_both_ends() {
        let ramp = Ramp::new(vec![Color::BLACK, Color::WHITE]).unwrap();
        let mut r = ramp.range(Bounds::new(0., 4.), 5, Scale::Linear).unwrap();
        assert_eq!(r.len(), 5);
        assert_eq!(r.next_back().map(|b| b.value), Some(4.));
        assert_eq!(r.next().map(|b| b.value), Some(0.));
        assert_eq!(r.len(), 3);
        let rest: Vec<f64> = r.rev().map(|b| b.value).collect();
        assert_eq!(rest, [3., 2., 1.]);
    }

    #[test]
    fn range_rejects_single_step() {
        let ramp = Ramp::new(vec![Color::BLACK, Color::WHITE]).unwrap();
        assert!(matches!(ramp.range(Bounds::new(0., 1.), 1, Scale::Linear),
                         Err(Error::InvalidStepCount { steps: 1, .. })));
    }
}
