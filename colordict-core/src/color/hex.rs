use super::{check_component, count_error, transform, ColorSpace, Rgba};
use crate::error::Result;
use std::fmt;

/// Options of the [`HexColor`] representation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HexParams {
    /// Prepend the alpha byte, producing `#aarrggbb`.
    pub include_alpha: bool,
}

impl HexParams {
    pub fn with_alpha(mut self, include_alpha: bool) -> Self {
        self.include_alpha = include_alpha;
        self
    }
}

/// An sRGB color written as a hexadecimal string, as used on the web.
#[derive(Debug, Clone)]
pub struct HexColor {
    rgba: Rgba,
    text: String,
    params: HexParams,
}

impl HexColor {
    /// Parses `rrggbb` or `aarrggbb`, with or without a leading `#`.
    ///
    /// # Errors
    ///
    /// Returns `ComponentOutOfRange` when the string has the wrong length or
    /// contains non-hexadecimal digits.
    pub fn parse(text: &str, params: HexParams) -> Result<Self> {
        let bytes = transform::parse_hex(text)?;
        Ok(Self::from_bytes(bytes, &params))
    }

    fn from_bytes(bytes: [u8; 4], params: &HexParams) -> Self {
        let [r, g, b, a] = bytes.map(|v| f64::from(v) / 255.0);
        Self::from_rgba(Rgba::new(r, g, b, a), params)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn params(&self) -> &HexParams {
        &self.params
    }
}

impl ColorSpace for HexColor {
    type Params = HexParams;
    const NAME: &'static str = "hex";

    fn from_rgba(rgba: Rgba, params: &HexParams) -> Self {
        Self {
            rgba,
            text: transform::format_hex(rgba.r, rgba.g, rgba.b, rgba.a, params.include_alpha),
            params: *params,
        }
    }

    /// Accepts the byte values of the string, `[r, g, b]` or `[r, g, b, a]` on 0–255.
    fn from_components(values: &[f64], params: &HexParams) -> Result<Self> {
        let (rgb, a) = match *values {
            [r, g, b] => ([r, g, b], 255.0),
            [r, g, b, a] => ([r, g, b], a),
            _ => return Err(count_error(Self::NAME, "3 or 4", values.len())),
        };
        for (param, value) in [("r", rgb[0]), ("g", rgb[1]), ("b", rgb[2]), ("a", a)] {
            check_component(param, value, 255.0)?;
        }

        let [r, g, b] = rgb.map(|v| v / 255.0);
        Ok(Self::from_rgba(Rgba::new(r, g, b, a / 255.0), params))
    }

    fn rgba(&self) -> Rgba {
        self.rgba
    }

    fn components(&self) -> Vec<f64> {
        let [r, g, b, a] = self.rgba.to_array().map(|v| f64::from(transform::channel_to_byte(v)));
        if self.params.include_alpha {
            vec![r, g, b, a]
        } else {
            vec![r, g, b]
        }
    }
}

impl PartialEq for HexColor {
    fn eq(&self, other: &Self) -> bool {
        self.rgba == other.rgba
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
