//! Subtractive spaces: CMYK and CMY.

use super::{
    check_component, check_norm, count_error, display_components, transform, write_tuple,
    ColorSpace, Rgba,
};
use crate::error::Result;
use std::fmt;

/// Options of the [`Cmyk`] representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CmykParams {
    /// Highest value of every component, commonly 1 or 100.
    pub norm: f64,
    pub include_alpha: bool,
    pub round_to: Option<u32>,
}

impl Default for CmykParams {
    fn default() -> Self {
        Self {
            norm: 1.0,
            include_alpha: false,
            round_to: None,
        }
    }
}

impl CmykParams {
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

/// A color in the CMYK (cyan, magenta, yellow, key) space.
#[derive(Debug, Clone)]
pub struct Cmyk {
    rgba: Rgba,
    values: [f64; 5],
    params: CmykParams,
}

impl Cmyk {
    /// # Errors
    ///
    /// Returns `ComponentOutOfRange` when a component is negative or larger
    /// than `params.norm`.
    pub fn new(c: f64, m: f64, y: f64, k: f64, a: Option<f64>, params: CmykParams) -> Result<Self> {
        let norm = params.norm;
        check_norm("norm", norm)?;
        let a = a.unwrap_or(norm);
        for (param, value) in [("c", c), ("m", m), ("y", y), ("k", k), ("a", a)] {
            check_component(param, value, norm)?;
        }

        let (r, g, b) = transform::cmyk_to_rgb(c / norm, m / norm, y / norm, k / norm);
        Ok(Self {
            rgba: Rgba::new(r, g, b, a / norm),
            values: [c, m, y, k, a],
            params,
        })
    }

    pub fn params(&self) -> &CmykParams {
        &self.params
    }
}

impl ColorSpace for Cmyk {
    type Params = CmykParams;
    const NAME: &'static str = "CMYK";

    fn from_rgba(rgba: Rgba, params: &CmykParams) -> Self {
        let (c, m, y, k) = transform::rgb_to_cmyk(rgba.r, rgba.g, rgba.b);
        Self {
            rgba,
            values: [c, m, y, k, rgba.a].map(|v| v * params.norm),
            params: *params,
        }
    }

    fn from_components(values: &[f64], params: &CmykParams) -> Result<Self> {
        match *values {
            [c, m, y, k] => Self::new(c, m, y, k, None, *params),
            [c, m, y, k, a] => Self::new(c, m, y, k, Some(a), *params),
            _ => Err(count_error(Self::NAME, "4 or 5", values.len())),
        }
    }

    fn rgba(&self) -> Rgba {
        self.rgba
    }

    fn components(&self) -> Vec<f64> {
        display_components(&self.values, self.params.include_alpha, self.params.round_to)
    }
}

impl PartialEq for Cmyk {
    fn eq(&self, other: &Self) -> bool {
        self.rgba == other.rgba
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, Self::NAME, &self.components())
    }
}

/// Options of the [`Cmy`] representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CmyParams {
    /// Highest value of every component, commonly 1 or 100.
    pub norm: f64,
    pub include_alpha: bool,
    pub round_to: Option<u32>,
}

impl Default for CmyParams {
    fn default() -> Self {
        Self {
            norm: 1.0,
            include_alpha: false,
            round_to: None,
        }
    }
}

impl CmyParams {
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

/// A color in the CMY space, the plain complement of RGB.
#[derive(Debug, Clone)]
pub struct Cmy {
    rgba: Rgba,
    values: [f64; 4],
    params: CmyParams,
}

impl Cmy {
    /// # Errors
    ///
    /// Returns `ComponentOutOfRange` when a component is negative or larger
    /// than `params.norm`.
    pub fn new(c: f64, m: f64, y: f64, a: Option<f64>, params: CmyParams) -> Result<Self> {
        let norm = params.norm;
        check_norm("norm", norm)?;
        let a = a.unwrap_or(norm);
        for (param, value) in [("c", c), ("m", m), ("y", y), ("a", a)] {
            check_component(param, value, norm)?;
        }

        let (r, g, b) = transform::cmy_to_rgb(c / norm, m / norm, y / norm);
        Ok(Self {
            rgba: Rgba::new(r, g, b, a / norm),
            values: [c, m, y, a],
            params,
        })
    }

    pub fn params(&self) -> &CmyParams {
        &self.params
    }
}

impl ColorSpace for Cmy {
    type Params = CmyParams;
    const NAME: &'static str = "CMY";

    fn from_rgba(rgba: Rgba, params: &CmyParams) -> Self {
        let (c, m, y) = transform::rgb_to_cmy(rgba.r, rgba.g, rgba.b);
        Self {
            rgba,
            values: [c, m, y, rgba.a].map(|v| v * params.norm),
            params: *params,
        }
    }

    fn from_components(values: &[f64], params: &CmyParams) -> Result<Self> {
        match *values {
            [c, m, y] => Self::new(c, m, y, None, *params),
            [c, m, y, a] => Self::new(c, m, y, Some(a), *params),
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

impl PartialEq for Cmy {
    fn eq(&self, other: &Self) -> bool {
        self.rgba == other.rgba
    }
}

impl fmt::Display for Cmy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, Self::NAME, &self.components())
    }
}
