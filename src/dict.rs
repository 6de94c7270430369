//! The JSON-compatible dict form of colorizers.
//!
//! ```text
//! { "type": "linearGradient" | "logarithmicGradient",
//!   "breakpoints": [{ "value": 0.0, "color": [r, g, b, a] }, ...],
//!   "noDataColor": [r, g, b, a], "overColor": [...], "underColor": [...] }
//! { "type": "palette",
//!   "colors": { "1": [r, g, b, a], ... },
//!   "noDataColor": [...], "defaultColor": [...] }
//! { "type": "rgba" }
//! ```
//!
//! Dict colors are bytes, alpha included; in memory alpha is in
//! \[0, 1\].

use std::fmt;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::{debug, warn};
use crate::breakpoint::ColorBreakpoint;
use crate::color::Color;
use crate::colorizer::{Colorizer, Gradient, Palette, PaletteColors};
use crate::error::{Error, Result};

/// `[r, g, b, a]` with every channel in \[0, 255\].
pub type RgbaColorDict = [u8; 4];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BreakpointDict {
    pub value: f64,
    pub color: RgbaColorDict,
}

/// Palette entries keyed by the decimal rendering of their value, in
/// insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaletteDict(pub Vec<(String, RgbaColorDict)>);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ColorizerDict {
    #[serde(rename_all = "camelCase")]
    LinearGradient {
        breakpoints: Vec<BreakpointDict>,
        no_data_color: RgbaColorDict,
        over_color: RgbaColorDict,
        under_color: RgbaColorDict,
    },
    #[serde(rename_all = "camelCase")]
    LogarithmicGradient {
        breakpoints: Vec<BreakpointDict>,
        no_data_color: RgbaColorDict,
        over_color: RgbaColorDict,
        under_color: RgbaColorDict,
    },
    #[serde(rename_all = "camelCase")]
    Palette {
        colors: PaletteDict,
        no_data_color: RgbaColorDict,
        default_color: RgbaColorDict,
    },
    Rgba,
}

impl Serialize for PaletteDict {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, c) in &self.0 {
            map.serialize_entry(k, c)?;
        }
        map.end()
    }
}

struct PaletteDictVisitor;

impl<'de> Visitor<'de> for PaletteDictVisitor {
    type Value = PaletteDict;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from numeric keys to RGBA byte arrays")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<PaletteDict, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_entry::<String, RgbaColorDict>()? {
            entries.push(entry);
        }
        Ok(PaletteDict(entries))
    }
}

impl<'de> Deserialize<'de> for PaletteDict {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(PaletteDictVisitor)
    }
}

/// Round and clamp the channels to bytes, scaling alpha by 255.
pub(crate) fn color_to_dict(c: &Color) -> RgbaColorDict {
    let rounded = [c.r, c.g, c.b, c.a * 255.].map(f64::round);
    if rounded.iter().any(|v| !(0. ..= 255.).contains(v)) {
        warn!(color = %c, "color channel outside 0..=255, clamped");
    }
    rounded.map(|v| v.clamp(0., 255.) as u8)
}

pub(crate) fn color_from_dict(d: &RgbaColorDict) -> Color {
    let [r, g, b, a] = *d;
    Color::new(f64::from(r), f64::from(g), f64::from(b), f64::from(a) / 255.)
}

impl ColorBreakpoint {
    pub fn to_dict(&self) -> BreakpointDict {
        BreakpointDict { value: self.value, color: color_to_dict(&self.color) }
    }

    pub fn from_dict(dict: &BreakpointDict) -> Self {
        ColorBreakpoint::new(dict.value, color_from_dict(&dict.color))
    }
}

fn gradient_to_dict(g: &Gradient) -> (Vec<BreakpointDict>, [RgbaColorDict; 3]) {
    (g.breakpoints.iter().map(ColorBreakpoint::to_dict).collect(),
     [color_to_dict(&g.no_data_color), color_to_dict(&g.over_color),
      color_to_dict(&g.under_color)])
}

fn gradient_from_dict(breakpoints: &[BreakpointDict], no_data_color: &RgbaColorDict,
                      over_color: &RgbaColorDict, under_color: &RgbaColorDict) -> Gradient {
    Gradient::new(breakpoints.iter().map(ColorBreakpoint::from_dict).collect(),
                  color_from_dict(no_data_color),
                  color_from_dict(over_color),
                  color_from_dict(under_color))
}

impl From<&Colorizer> for ColorizerDict {
    fn from(c: &Colorizer) -> Self {
        match c {
            Colorizer::LinearGradient(g) => {
                let (breakpoints, [no_data_color, over_color, under_color]) = gradient_to_dict(g);
                ColorizerDict::LinearGradient { breakpoints, no_data_color, over_color, under_color }
            }
            Colorizer::LogarithmicGradient(g) => {
                let (breakpoints, [no_data_color, over_color, under_color]) = gradient_to_dict(g);
                ColorizerDict::LogarithmicGradient {
                    breakpoints, no_data_color, over_color, under_color }
            }
            Colorizer::Palette(p) => ColorizerDict::Palette {
                colors: PaletteDict(p.colors.iter()
                    .map(|(k, c)| (k.to_string(), color_to_dict(c)))
                    .collect()),
                no_data_color: color_to_dict(&p.no_data_color),
                default_color: color_to_dict(&p.default_color),
            },
            Colorizer::Rgba => ColorizerDict::Rgba,
        }
    }
}

impl TryFrom<&ColorizerDict> for Colorizer {
    type Error = Error;

    fn try_from(dict: &ColorizerDict) -> Result<Self> {
        Ok(match dict {
            ColorizerDict::LinearGradient { breakpoints, no_data_color, over_color,
                                            under_color } => {
                Colorizer::LinearGradient(
                    gradient_from_dict(breakpoints, no_data_color, over_color, under_color))
            }
            ColorizerDict::LogarithmicGradient { breakpoints, no_data_color, over_color,
                                                 under_color } => {
                Colorizer::LogarithmicGradient(
                    gradient_from_dict(breakpoints, no_data_color, over_color, under_color))
            }
            ColorizerDict::Palette { colors, no_data_color, default_color } => {
                let mut palette = PaletteColors::new();
                for (key, color) in &colors.0 {
                    let value: f64 = key.trim().parse().map_err(|_| Error::InvalidColorInput(
                        format!("palette key {key:?} is not a number")))?;
                    palette.insert(value, color_from_dict(color));
                }
                Colorizer::Palette(Palette::new(palette, color_from_dict(no_data_color),
                                                color_from_dict(default_color)))
            }
            ColorizerDict::Rgba => Colorizer::Rgba,
        })
    }
}

impl Colorizer {
    pub fn to_dict(&self) -> ColorizerDict { ColorizerDict::from(self) }

    /// Decode the dict form.  Fails with
    /// [`Error::UnknownColorizerType`] if the `type` tag is not one of
    /// `linearGradient`, `logarithmicGradient`, `palette` or `rgba`.
    ///
    /// # Example
    ///
    /// ```
    /// use raster_colorizer::{Color, Colorizer};
    /// use serde_json::json;
    /// let c = Colorizer::from_dict(&json!({
    ///     "type": "palette",
    ///     "colors": { "1": [255, 0, 0, 255] },
    ///     "noDataColor": [0, 0, 0, 0],
    ///     "defaultColor": [0, 0, 0, 255],
    /// }))?;
    /// assert_eq!(c.get_color(1.), Color::new(255., 0., 0., 1.));
    /// assert!(Colorizer::from_dict(&json!({ "type": "hue" })).is_err());
    /// # Ok::<(), raster_colorizer::Error>(())
    /// ```
    pub fn from_dict(dict: &Value) -> Result<Self> {
        match dict.get("type").map(Value::as_str) {
            Some(Some(Self::LINEAR_GRADIENT | Self::LOGARITHMIC_GRADIENT | Self::PALETTE
                      | Self::RGBA))
            | None => {}
            Some(Some(other)) => return Err(Error::UnknownColorizerType(other.to_string())),
            Some(None) => {
                return Err(Error::UnknownColorizerType(dict["type"].to_string()))
            }
        }
        let dict = ColorizerDict::deserialize(dict)?;
        let colorizer = Colorizer::try_from(&dict)?;
        debug!(kind = colorizer.type_name(), colors = colorizer.number_of_colors(),
               "decoded colorizer");
        Ok(colorizer)
    }

    pub fn to_json(&self) -> Result<String> { Ok(serde_json::to_string(&self.to_dict())?) }

    pub fn from_json(json: &str) -> Result<Self> {
        Colorizer::from_dict(&serde_json::from_str::<Value>(json)?)
    }
}
