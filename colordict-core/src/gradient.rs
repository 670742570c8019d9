//! Piecewise-linear gradients over canonical color values.

use crate::color::{ColorSpace, Rgba};
use crate::error::{ColorError, Result};

/// Evenly spaced color stops joined by straight lines in RGBA space.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    stops: Vec<Rgba>,
}

impl LinearGradient {
    /// # Errors
    ///
    /// Returns `EmptyGradient` when `stops` yields nothing.
    pub fn new(stops: impl IntoIterator<Item = Rgba>) -> Result<Self> {
        let stops: Vec<Rgba> = stops.into_iter().collect();
        if stops.is_empty() {
            return Err(ColorError::EmptyGradient);
        }
        Ok(Self { stops })
    }

    /// Gradient through the canonical values of any colors.
    ///
    /// # Errors
    ///
    /// Returns `EmptyGradient` when `colors` is empty.
    pub fn from_colors<'a, C, I>(colors: I) -> Result<Self>
    where
        C: ColorSpace + 'a,
        I: IntoIterator<Item = &'a C>,
    {
        Self::new(colors.into_iter().map(|c| c.rgba()))
    }

    pub fn stops(&self) -> &[Rgba] {
        &self.stops
    }

    /// Value at position `p`, where 0 is the first stop and 1 the last.
    /// Positions outside `[0, 1]` are clamped and NaN reads as 0.
    pub fn at(&self, p: f64) -> Rgba {
        let last = self.stops.len() - 1;
        if last == 0 {
            return self.stops[0];
        }

        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        let scaled = p * last as f64;
        let i = (scaled.floor() as usize).min(last - 1);
        self.stops[i].lerp(&self.stops[i + 1], scaled - i as f64)
    }

    /// `n` evenly spaced samples. With `stripped` the endpoints are left out,
    /// so three stripped samples land at 1/4, 1/2 and 3/4.
    pub fn n_colors(&self, n: usize, stripped: bool) -> Vec<Rgba> {
        (0..n)
            .map(|i| {
                let p = if stripped {
                    (i + 1) as f64 / (n + 1) as f64
                } else if n == 1 {
                    0.0
                } else {
                    i as f64 / (n - 1) as f64
                };
                self.at(p)
            })
            .collect()
    }
}
