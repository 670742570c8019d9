//! Color representations and conversions.
//!
//! Every color type wraps one canonical [`Rgba`] value with each channel in
//! `[0, 1]`. The color spaces below are views over that value: converting
//! between two of them always goes through the canonical value, so adding a
//! space only needs a `from_rgba` and a forward constructor.
//!
//! # Example
//!
//! ```rust
//! use colordict::color::{ColorSpace, Hsl, HslParams, Srgb, SrgbParams};
//!
//! # fn main() -> colordict::Result<()> {
//! let red = Hsl::new(0.0, 1.0, 0.5, None, HslParams::default())?;
//! let rgb: Srgb = red.convert(&SrgbParams::default().with_alpha(true));
//! assert_eq!(rgb.components(), vec![255.0, 0.0, 0.0, 255.0]);
//! assert_eq!(red.hex().as_str(), "#ff0000");
//! # Ok(())
//! # }
//! ```

mod cmyk;
mod encoding;
mod hex;
mod hsl;
mod rgb;
pub mod transform;

pub use cmyk::{Cmy, CmyParams, Cmyk, CmykParams};
pub use encoding::{Color, ColorLike, Encoding};
pub use hex::{HexColor, HexParams};
pub use hsl::{Hsl, HslParams, Hsv, HsvParams};
pub use rgb::{Srgb, SrgbParams};

use crate::error::{ColorError, Result};
use std::fmt;

/// Canonical color value: red, green, blue and alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from three unit channels.
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn from_array([r, g, b, a]: [f64; 4]) -> Self {
        Self::new(r, g, b, a)
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// True when red, green and blue are equal, which leaves hue undefined.
    pub fn is_achromatic(&self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Component-wise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &Rgba, tolerance: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    /// Linear interpolation of every channel, alpha included.
    #[must_use]
    pub fn lerp(&self, other: &Rgba, t: f64) -> Rgba {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Rgba::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    /// Luma-weighted gray with the same alpha. Useful for previewing how a
    /// palette prints in black and white.
    #[must_use]
    pub fn grayscale(&self) -> Rgba {
        let y = 0.3 * self.r + 0.59 * self.g + 0.11 * self.b;
        Rgba::new(y, y, y, self.a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// A color space whose values are views over a canonical [`Rgba`].
pub trait ColorSpace: Sized {
    /// Normalization bases and display options of the space.
    type Params: Clone + Default;

    /// Display name, e.g. `"HSL"`.
    const NAME: &'static str;

    /// Builds the space's representation of a canonical value. Total over
    /// unit-range input.
    fn from_rgba(rgba: Rgba, params: &Self::Params) -> Self;

    /// Builds a color from its native component tuple, validating every
    /// component against its normalization base.
    fn from_components(values: &[f64], params: &Self::Params) -> Result<Self>;

    /// The canonical value.
    fn rgba(&self) -> Rgba;

    /// Display components: alpha only when requested, rounded when a precision is set.
    fn components(&self) -> Vec<f64>;

    fn convert<T: ColorSpace>(&self, params: &T::Params) -> T {
        T::from_rgba(self.rgba(), params)
    }

    fn rgb(&self) -> Srgb {
        self.convert(&SrgbParams::default())
    }

    fn hsl(&self) -> Hsl {
        self.convert(&HslParams::default())
    }

    fn hsv(&self) -> Hsv {
        self.convert(&HsvParams::default())
    }

    fn cmyk(&self) -> Cmyk {
        self.convert(&CmykParams::default())
    }

    fn cmy(&self) -> Cmy {
        self.convert(&CmyParams::default())
    }

    fn hex(&self) -> HexColor {
        self.convert(&HexParams::default())
    }
}

/// Rescales a tuple from one normalization base to another.
pub fn renorm(values: &[f64], old: f64, new: f64) -> Vec<f64> {
    values.iter().map(|v| v * new / old).collect()
}

/// Rejects a component below zero or above its normalization base.
pub(crate) fn check_component(param: &str, value: f64, norm: f64) -> Result<()> {
    if value.is_nan() || value < 0.0 || value > norm {
        return Err(ColorError::out_of_range(param, value, norm));
    }
    Ok(())
}

/// Rejects a canonical value with a channel outside `[0, 1]` or NaN.
pub(crate) fn check_rgba(rgba: Rgba) -> Result<Rgba> {
    let [r, g, b, a] = rgba.to_array();
    for (param, value) in [("r", r), ("g", g), ("b", b), ("a", a)] {
        check_component(param, value, 1.0)?;
    }
    Ok(rgba)
}

pub(crate) fn check_norm(param: &str, norm: f64) -> Result<()> {
    if !(norm.is_finite() && norm > 0.0) {
        return Err(ColorError::ComponentOutOfRange {
            param: param.to_string(),
            reason: format!("normalization base must be positive, got {norm}"),
        });
    }
    Ok(())
}

pub(crate) fn count_error(encoding: &'static str, expected: &str, found: usize) -> ColorError {
    ColorError::ComponentCount {
        encoding,
        expected: expected.to_string(),
        found,
    }
}

/// Past this many decimals an f64 has nothing left to round.
const MAX_ROUNDING_PLACES: i32 = 15;

/// Drops the trailing alpha unless requested and applies the rounding precision.
pub(crate) fn display_components(
    values: &[f64],
    include_alpha: bool,
    round_to: Option<u32>,
) -> Vec<f64> {
    let shown = if include_alpha {
        values
    } else {
        &values[..values.len() - 1]
    };

    match round_to.and_then(|places| i32::try_from(places).ok()) {
        Some(places) if places <= MAX_ROUNDING_PLACES => {
            let factor = 10f64.powi(places);
            shown.iter().map(|v| (v * factor).round() / factor).collect()
        }
        _ => shown.to_vec(),
    }
}

pub(crate) fn write_tuple(f: &mut fmt::Formatter<'_>, name: &str, values: &[f64]) -> fmt::Result {
    write!(f, "{name}(")?;
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{v}")?;
    }
    f.write_str(")")
}
