//! Cylindrical spaces: HSL and HSV.
//!
//! Hue is normalized on its own base (360 degrees by default) while the
//! remaining components share a second base (1 by default, 100 for percentages).

use super::{
    check_component, check_norm, count_error, display_components, transform, write_tuple,
    ColorSpace, Rgba,
};
use crate::error::Result;
use std::fmt;

/// Options of the [`Hsl`] representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslParams {
    /// Highest hue value, commonly 360 or 1.
    pub h_norm: f64,
    /// Highest saturation, lightness and alpha value, commonly 1 or 100.
    pub sla_norm: f64,
    pub include_alpha: bool,
    pub round_to: Option<u32>,
}

impl Default for HslParams {
    fn default() -> Self {
        Self {
            h_norm: 360.0,
            sla_norm: 1.0,
            include_alpha: false,
            round_to: None,
        }
    }
}

impl HslParams {
    pub fn with_norms(mut self, h_norm: f64, sla_norm: f64) -> Self {
        self.h_norm = h_norm;
        self.sla_norm = sla_norm;
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

/// A color in the HSL (hue, saturation, lightness) space.
#[derive(Debug, Clone)]
pub struct Hsl {
    rgba: Rgba,
    values: [f64; 4],
    params: HslParams,
}

impl Hsl {
    /// Creates a color from hue, saturation and lightness. Alpha defaults to
    /// `params.sla_norm`.
    ///
    /// # Errors
    ///
    /// Returns `ComponentOutOfRange` when hue exceeds `h_norm` or any other
    /// component exceeds `sla_norm`.
    pub fn new(h: f64, s: f64, l: f64, a: Option<f64>, params: HslParams) -> Result<Self> {
        let HslParams {
            h_norm, sla_norm, ..
        } = params;
        check_norm("h_norm", h_norm)?;
        check_norm("sla_norm", sla_norm)?;
        let a = a.unwrap_or(sla_norm);
        check_component("h", h, h_norm)?;
        for (param, value) in [("s", s), ("l", l), ("a", a)] {
            check_component(param, value, sla_norm)?;
        }

        let (r, g, b) = transform::hsl_to_rgb(h / h_norm, s / sla_norm, l / sla_norm);
        Ok(Self {
            rgba: Rgba::new(r, g, b, a / sla_norm),
            values: [h, s, l, a],
            params,
        })
    }

    pub fn params(&self) -> &HslParams {
        &self.params
    }
}

impl ColorSpace for Hsl {
    type Params = HslParams;
    const NAME: &'static str = "HSL";

    fn from_rgba(rgba: Rgba, params: &HslParams) -> Self {
        let (h, s, l) = transform::rgb_to_hsl(rgba.r, rgba.g, rgba.b);
        Self {
            rgba,
            values: [
                h * params.h_norm,
                s * params.sla_norm,
                l * params.sla_norm,
                rgba.a * params.sla_norm,
            ],
            params: *params,
        }
    }

    fn from_components(values: &[f64], params: &HslParams) -> Result<Self> {
        match *values {
            [h, s, l] => Self::new(h, s, l, None, *params),
            [h, s, l, a] => Self::new(h, s, l, Some(a), *params),
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

impl PartialEq for Hsl {
    fn eq(&self, other: &Self) -> bool {
        self.rgba == other.rgba
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, Self::NAME, &self.components())
    }
}

/// Options of the [`Hsv`] representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvParams {
    /// Highest hue value, commonly 360 or 1.
    pub h_norm: f64,
    /// Highest saturation, value and alpha value, commonly 1 or 100.
    pub sva_norm: f64,
    pub include_alpha: bool,
    pub round_to: Option<u32>,
}

impl Default for HsvParams {
    fn default() -> Self {
        Self {
            h_norm: 360.0,
            sva_norm: 1.0,
            include_alpha: false,
            round_to: None,
        }
    }
}

impl HsvParams {
    pub fn with_norms(mut self, h_norm: f64, sva_norm: f64) -> Self {
        self.h_norm = h_norm;
        self.sva_norm = sva_norm;
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

/// A color in the HSV (hue, saturation, value) space.
#[derive(Debug, Clone)]
pub struct Hsv {
    rgba: Rgba,
    values: [f64; 4],
    params: HsvParams,
}

impl Hsv {
    /// Creates a color from hue, saturation and value. Alpha defaults to
    /// `params.sva_norm`.
    ///
    /// # Errors
    ///
    /// Returns `ComponentOutOfRange` when hue exceeds `h_norm` or any other
    /// component exceeds `sva_norm`.
    pub fn new(h: f64, s: f64, v: f64, a: Option<f64>, params: HsvParams) -> Result<Self> {
        let HsvParams {
            h_norm, sva_norm, ..
        } = params;
        check_norm("h_norm", h_norm)?;
        check_norm("sva_norm", sva_norm)?;
        let a = a.unwrap_or(sva_norm);
        check_component("h", h, h_norm)?;
        for (param, value) in [("s", s), ("v", v), ("a", a)] {
            check_component(param, value, sva_norm)?;
        }

        let (r, g, b) = transform::hsv_to_rgb(h / h_norm, s / sva_norm, v / sva_norm);
        Ok(Self {
            rgba: Rgba::new(r, g, b, a / sva_norm),
            values: [h, s, v, a],
            params,
        })
    }

    pub fn params(&self) -> &HsvParams {
        &self.params
    }
}

impl ColorSpace for Hsv {
    type Params = HsvParams;
    const NAME: &'static str = "HSV";

    fn from_rgba(rgba: Rgba, params: &HsvParams) -> Self {
        let (h, s, v) = transform::rgb_to_hsv(rgba.r, rgba.g, rgba.b);
        Self {
            rgba,
            values: [
                h * params.h_norm,
                s * params.sva_norm,
                v * params.sva_norm,
                rgba.a * params.sva_norm,
            ],
            params: *params,
        }
    }

    fn from_components(values: &[f64], params: &HsvParams) -> Result<Self> {
        match *values {
            [h, s, v] => Self::new(h, s, v, None, *params),
            [h, s, v, a] => Self::new(h, s, v, Some(a), *params),
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

impl PartialEq for Hsv {
    fn eq(&self, other: &Self) -> bool {
        self.rgba == other.rgba
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, Self::NAME, &self.components())
    }
}
