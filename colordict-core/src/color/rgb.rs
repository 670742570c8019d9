use super::{
    check_component, check_norm, count_error, display_components, write_tuple, ColorSpace, Rgba,
};
use crate::error::Result;
use std::fmt;

/// Options of the [`Srgb`] representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SrgbParams {
    /// Highest value of every channel, commonly 255 or 1.
    pub norm: f64,
    /// Show the alpha channel in [`ColorSpace::components`].
    pub include_alpha: bool,
    /// Decimal places to round displayed components to.
    pub round_to: Option<u32>,
}

impl Default for SrgbParams {
    fn default() -> Self {
        Self {
            norm: 255.0,
            include_alpha: false,
            round_to: None,
        }
    }
}

impl SrgbParams {
    pub fn with_norm(mut self, norm: f64) -> Self {
        self.norm = norm;
        self
    }

    pub fn with_alpha(mut self, include_alpha: bool) -> Self {
        self.include_alpha = include_alpha;
        self
    }

    pub fn with_rounding(mut self, places: u32) -> Self {
        self.round_to = Some(places);
        self
    }
}

/// A color in the sRGB space.
#[derive(Debug, Clone)]
pub struct Srgb {
    rgba: Rgba,
    values: [f64; 4],
    params: SrgbParams,
}

impl Srgb {
    /// Creates a color from channels on the `params.norm` scale. Alpha
    /// defaults to fully opaque.
    ///
    /// # Errors
    ///
    /// Returns `ComponentOutOfRange` when a channel is negative or larger
    /// than the normalization base.
    pub fn new(r: f64, g: f64, b: f64, a: Option<f64>, params: SrgbParams) -> Result<Self> {
        let norm = params.norm;
        check_norm("norm", norm)?;
        let a = a.unwrap_or(norm);
        for (param, value) in [("r", r), ("g", g), ("b", b), ("a", a)] {
            check_component(param, value, norm)?;
        }

        Ok(Self {
            rgba: Rgba::new(r / norm, g / norm, b / norm, a / norm),
            values: [r, g, b, a],
            params,
        })
    }

    pub fn params(&self) -> &SrgbParams {
        &self.params
    }
}

impl ColorSpace for Srgb {
    type Params = SrgbParams;
    const NAME: &'static str = "sRGB";

    fn from_rgba(rgba: Rgba, params: &SrgbParams) -> Self {
        Self {
            rgba,
            values: rgba.to_array().map(|c| c * params.norm),
            params: *params,
        }
    }

    fn from_components(values: &[f64], params: &SrgbParams) -> Result<Self> {
        match *values {
            [r, g, b] => Self::new(r, g, b, None, *params),
            [r, g, b, a] => Self::new(r, g, b, Some(a), *params),
            _ => Err(count_error(Self::NAME, "3 or 4", values.len())),
        }
    }

    fn rgba(&self) -> Rgba {
        self.rgba
    }

    fn components(&self) -> Vec<f64> {
        display_components(&self.values, self.params.include_alpha, self.params.round_to)
    }
}

impl PartialEq for Srgb {
    fn eq(&self, other: &Self) -> bool {
        self.rgba == other.rgba
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, Self::NAME, &self.components())
    }
}
