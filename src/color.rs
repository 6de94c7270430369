//! RGBA colors with CSS parsing and linear interpolation.
//!
//! The red, green and blue channels are in \[0, 255\] and the alpha
//! channel in \[0, 1\].  No channel is rounded or clamped at this
//! layer: interpolated colors may carry fractional channels.

use std::fmt;
use std::str::FromStr;
use rgb::{RGBA, RGBA8};
use crate::error::{Error, Result};

/// A color with red, green, blue (in \[0, 255\]) and alpha (in \[0, 1\])
/// channels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// Anything a [`Color`] can be built from with [`Color::from_like`].
#[derive(Clone, Copy, Debug)]
pub enum ColorLike<'a> {
    /// `[r, g, b]` or `[r, g, b, a]`.
    Tuple(&'a [f64]),
    /// Named channels; the alpha defaults to 1.
    Struct { r: f64, g: f64, b: f64, a: Option<f64> },
    /// A CSS color string, see [`Color::parse_css_string`].
    Css(&'a str),
    Color(Color),
}

impl<'a> From<&'a [f64]> for ColorLike<'a> {
    fn from(t: &'a [f64]) -> Self { ColorLike::Tuple(t) }
}

impl<'a, const N: usize> From<&'a [f64; N]> for ColorLike<'a> {
    fn from(t: &'a [f64; N]) -> Self { ColorLike::Tuple(t) }
}

impl<'a> From<&'a str> for ColorLike<'a> {
    fn from(s: &'a str) -> Self { ColorLike::Css(s) }
}

impl From<Color> for ColorLike<'_> {
    fn from(c: Color) -> Self { ColorLike::Color(c) }
}

impl Color {
    pub const BLACK: Color = Color::new(0., 0., 0., 1.);
    pub const WHITE: Color = Color::new(255., 255., 255., 1.);
    pub const TRANSPARENT: Color = Color::new(0., 0., 0., 0.);

    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Color { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub fn from_hex(rgb: u32) -> Self {
        Color::new(((rgb >> 16) & 0xff) as f64, ((rgb >> 8) & 0xff) as f64,
                   (rgb & 0xff) as f64, 1.)
    }

    /// Opaque color from channels given as fractions in \[0, 1\].
    /// Each fraction is scaled to \[0, 255\] and rounded.
    pub fn from_fractions(r: f64, g: f64, b: f64) -> Self {
        Color::new((r * 255.).round(), (g * 255.).round(), (b * 255.).round(), 1.)
    }

    /// Build a color from a tuple, a struct, a CSS string or another
    /// color.
    ///
    /// # Example
    ///
    /// ```
    /// use raster_colorizer::Color;
    /// let c = Color::from_like(&[255., 0., 0.]).unwrap();
    /// assert_eq!(c, Color::from_like("#f00").unwrap());
    /// ```
    pub fn from_like<'a>(input: impl Into<ColorLike<'a>>) -> Result<Self> {
        match input.into() {
            ColorLike::Tuple(&[r, g, b]) => Ok(Color::new(r, g, b, 1.)),
            ColorLike::Tuple(&[r, g, b, a]) => Ok(Color::new(r, g, b, a)),
            ColorLike::Tuple(t) => Err(Error::InvalidColorInput(format!(
                "RGB(A) tuple must have 3 or 4 entries, got {}", t.len()))),
            ColorLike::Struct { r, g, b, a } => Ok(Color::new(r, g, b, a.unwrap_or(1.))),
            ColorLike::Css(s) => Color::parse_css_string(s),
            ColorLike::Color(c) => Ok(c),
        }
    }

    /// Parse `rgba(r, g, b, a)`, `rgba(r, g, b)`, `rgb(r, g, b)`, `#rgb`
    /// or `#rrggbb`.  Function names and hex digits are
    /// case-insensitive; a missing alpha is 1.
    pub fn parse_css_string(s: &str) -> Result<Self> {
        let err = || Error::ColorParse(s.to_string());
        if s.is_empty() {
            return Err(err())
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(err)
        }
        let lower = s.to_ascii_lowercase();
        let (args, with_alpha) = if let Some(rest) = lower.strip_prefix("rgba") {
            (rest, true)
        } else if let Some(rest) = lower.strip_prefix("rgb") {
            (rest, false)
        } else {
            return Err(err())
        };
        let args = args.trim_start()
            .strip_prefix('(')
            .and_then(|a| a.strip_suffix(')'))
            .ok_or_else(err)?;
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let a = match (parts.len(), with_alpha) {
            (3, _) => 1.,
            (4, true) => parse_alpha(parts[3]).ok_or_else(err)?,
            _ => return Err(err()),
        };
        let r = parse_channel(parts[0]).ok_or_else(err)?;
        let g = parse_channel(parts[1]).ok_or_else(err)?;
        let b = parse_channel(parts[2]).ok_or_else(err)?;
        Ok(Color::new(r, g, b, a))
    }

    /// The CSS string `rgba(r, g, b, a)` with the channels as they are.
    pub fn to_css_string(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    #[inline]
    pub fn rgba_tuple(&self) -> [f64; 4] { [self.r, self.g, self.b, self.a] }

    #[inline]
    pub fn rgb_tuple(&self) -> [f64; 3] { [self.r, self.g, self.b] }

    /// Linear blend of `a` (at `fraction == 0`) and `b` (at
    /// `fraction == 1`).  The end points and blends of equal colors
    /// are returned untouched.
    pub fn interpolate(a: &Color, b: &Color, fraction: f64) -> Color {
        if fraction == 0. || a == b {
            return *a
        }
        if fraction == 1. {
            return *b
        }
        let mix = |x: f64, y: f64| x * (1. - fraction) + y * fraction;
        Color::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b), mix(a.a, b.a))
    }

    /// Sum of the squared differences of the red, green and blue
    /// channels.  Alpha does not count.
    pub fn squared_distance(a: &Color, b: &Color) -> f64 {
        a.rgb_tuple().iter().zip(b.rgb_tuple())
            .map(|(x, y)| (x - y) * (x - y))
            .sum()
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None
    }
    let channel = |i: usize, n: usize| u8::from_str_radix(&hex[i .. i + n], 16).ok();
    match hex.len() {
        // each nibble is scaled by 0x11 to cover 0x00 ..= 0xff
        3 => Some(Color::new(f64::from(channel(0, 1)? * 0x11),
                             f64::from(channel(1, 1)? * 0x11),
                             f64::from(channel(2, 1)? * 0x11), 1.)),
        6 => Some(Color::new(f64::from(channel(0, 2)?),
                             f64::from(channel(2, 2)?),
                             f64::from(channel(4, 2)?), 1.)),
        _ => None,
    }
}

/// A non-empty run of decimal digits.
fn parse_channel(s: &str) -> Option<f64> {
    if s.is_empty() || !s.bytes().all(|c| c.is_ascii_digit()) {
        return None
    }
    s.parse().ok()
}

/// A decimal number starting with a digit, e.g. `1`, `0.5`.
fn parse_alpha(s: &str) -> Option<f64> {
    if !s.starts_with(|c: char| c.is_ascii_digit()) {
        return None
    }
    s.parse().ok()
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_string())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> { Color::parse_css_string(s) }
}

impl TryFrom<&[f64]> for Color {
    type Error = Error;

    fn try_from(t: &[f64]) -> Result<Self> { Color::from_like(t) }
}

impl From<RGBA8> for Color {
    #[inline]
    fn from(c: RGBA8) -> Self {
        Color::new(f64::from(c.r), f64::from(c.g), f64::from(c.b),
                   f64::from(c.a) / 255.)
    }
}

impl From<Color> for RGBA8 {
    /// Rounds and saturates the channels; alpha is scaled to \[0, 255\].
    #[inline]
    fn from(c: Color) -> Self {
        RGBA8 { r: c.r.round() as u8, g: c.g.round() as u8,
                b: c.b.round() as u8, a: (c.a * 255.).round() as u8 }
    }
}

impl From<RGBA<f64>> for Color {
    /// All four channels of `c` are taken to be in \[0, 255\].
    #[inline]
    fn from(c: RGBA<f64>) -> Self { Color::new(c.r, c.g, c.b, c.a / 255.) }
}

impl From<Color> for RGBA<f64> {
    #[inline]
    fn from(c: Color) -> Self { RGBA { r: c.r, g: c.g, b: c.b, a: c.a * 255. } }
}
