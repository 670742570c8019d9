//! The closed set of color representations and the configuration that picks one.

use super::{
    check_rgba, Cmy, CmyParams, Cmyk, CmykParams, ColorSpace, HexColor, HexParams, Hsl, HslParams, Hsv,
    HsvParams, Rgba, Srgb, SrgbParams,
};
use crate::error::Result;
use std::fmt;

/// A color in any of the supported representations.
///
/// Two colors are equal when their canonical values are equal, whichever
/// representation produced them.
#[derive(Debug, Clone)]
pub enum Color {
    Srgb(Srgb),
    Hsl(Hsl),
    Hsv(Hsv),
    Cmyk(Cmyk),
    Cmy(Cmy),
    Hex(HexColor),
}

impl Color {
    /// Name of the representation, e.g. `"CMYK"`.
    pub fn space_name(&self) -> &'static str {
        match self {
            Color::Srgb(_) => Srgb::NAME,
            Color::Hsl(_) => Hsl::NAME,
            Color::Hsv(_) => Hsv::NAME,
            Color::Cmyk(_) => Cmyk::NAME,
            Color::Cmy(_) => Cmy::NAME,
            Color::Hex(_) => HexColor::NAME,
        }
    }
}

impl ColorSpace for Color {
    type Params = Encoding;
    const NAME: &'static str = "color";

    fn from_rgba(rgba: Rgba, encoding: &Encoding) -> Self {
        encoding.materialize(rgba)
    }

    fn from_components(values: &[f64], encoding: &Encoding) -> Result<Self> {
        Ok(match encoding {
            Encoding::Srgb(p) => Color::Srgb(Srgb::from_components(values, p)?),
            Encoding::Hsl(p) => Color::Hsl(Hsl::from_components(values, p)?),
            Encoding::Hsv(p) => Color::Hsv(Hsv::from_components(values, p)?),
            Encoding::Cmyk(p) => Color::Cmyk(Cmyk::from_components(values, p)?),
            Encoding::Cmy(p) => Color::Cmy(Cmy::from_components(values, p)?),
            Encoding::Hex(p) => Color::Hex(HexColor::from_components(values, p)?),
        })
    }

    fn rgba(&self) -> Rgba {
        match self {
            Color::Srgb(c) => c.rgba(),
            Color::Hsl(c) => c.rgba(),
            Color::Hsv(c) => c.rgba(),
            Color::Cmyk(c) => c.rgba(),
            Color::Cmy(c) => c.rgba(),
            Color::Hex(c) => c.rgba(),
        }
    }

    fn components(&self) -> Vec<f64> {
        match self {
            Color::Srgb(c) => c.components(),
            Color::Hsl(c) => c.components(),
            Color::Hsv(c) => c.components(),
            Color::Cmyk(c) => c.components(),
            Color::Cmy(c) => c.components(),
            Color::Hex(c) => c.components(),
        }
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.rgba() == other.rgba()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Srgb(c) => fmt::Display::fmt(c, f),
            Color::Hsl(c) => fmt::Display::fmt(c, f),
            Color::Hsv(c) => fmt::Display::fmt(c, f),
            Color::Cmyk(c) => fmt::Display::fmt(c, f),
            Color::Cmy(c) => fmt::Display::fmt(c, f),
            Color::Hex(c) => fmt::Display::fmt(c, f),
        }
    }
}

macro_rules! impl_from_space {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Color {
                fn from(color: $ty) -> Self {
                    Color::$variant(color)
                }
            }

            impl From<$ty> for ColorLike {
                fn from(color: $ty) -> Self {
                    ColorLike::Color(Color::$variant(color))
                }
            }
        )*
    };
}

impl_from_space!(
    Srgb => Srgb,
    Hsl => Hsl,
    Hsv => Hsv,
    Cmyk => Cmyk,
    Cmy => Cmy,
    HexColor => Hex,
);

/// Which representation a [`crate::ColorDict`] materializes its colors as,
/// with that representation's options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Encoding {
    Srgb(SrgbParams),
    Hsl(HslParams),
    Hsv(HsvParams),
    Cmyk(CmykParams),
    Cmy(CmyParams),
    Hex(HexParams),
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::Srgb(SrgbParams::default())
    }
}

impl Encoding {
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Srgb(_) => Srgb::NAME,
            Encoding::Hsl(_) => Hsl::NAME,
            Encoding::Hsv(_) => Hsv::NAME,
            Encoding::Cmyk(_) => Cmyk::NAME,
            Encoding::Cmy(_) => Cmy::NAME,
            Encoding::Hex(_) => HexColor::NAME,
        }
    }

    /// Builds this representation of a canonical value.
    pub fn materialize(&self, rgba: Rgba) -> Color {
        match self {
            Encoding::Srgb(p) => Color::Srgb(Srgb::from_rgba(rgba, p)),
            Encoding::Hsl(p) => Color::Hsl(Hsl::from_rgba(rgba, p)),
            Encoding::Hsv(p) => Color::Hsv(Hsv::from_rgba(rgba, p)),
            Encoding::Cmyk(p) => Color::Cmyk(Cmyk::from_rgba(rgba, p)),
            Encoding::Cmy(p) => Color::Cmy(Cmy::from_rgba(rgba, p)),
            Encoding::Hex(p) => Color::Hex(HexColor::from_rgba(rgba, p)),
        }
    }

    /// Turns user input into a color of this representation.
    ///
    /// Colors and canonical values are re-expressed, raw tuples are read as
    /// this representation's native components and hex strings are parsed.
    ///
    /// # Errors
    ///
    /// Returns `ComponentCount` or `ComponentOutOfRange` when a raw tuple or
    /// hex string is not valid input, and `ComponentOutOfRange` for a
    /// canonical value with a channel outside `[0, 1]`.
    pub fn interpret(&self, input: ColorLike) -> Result<Color> {
        match input {
            ColorLike::Color(color) => Ok(self.materialize(check_rgba(color.rgba())?)),
            ColorLike::Rgba(rgba) => Ok(self.materialize(check_rgba(rgba)?)),
            ColorLike::Components(values) => Color::from_components(&values, self),
            ColorLike::Hex(text) => {
                let parsed = HexColor::parse(&text, HexParams::default())?;
                Ok(self.materialize(parsed.rgba()))
            }
        }
    }
}

/// Anything a [`crate::ColorDict`] accepts where a color is expected.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorLike {
    Color(Color),
    Rgba(Rgba),
    /// Native components of the receiving encoding.
    Components(Vec<f64>),
    Hex(String),
}

impl From<Color> for ColorLike {
    fn from(color: Color) -> Self {
        ColorLike::Color(color)
    }
}

impl From<&Color> for ColorLike {
    fn from(color: &Color) -> Self {
        ColorLike::Color(color.clone())
    }
}

impl From<Rgba> for ColorLike {
    fn from(rgba: Rgba) -> Self {
        ColorLike::Rgba(rgba)
    }
}

impl<const N: usize> From<[f64; N]> for ColorLike {
    fn from(values: [f64; N]) -> Self {
        ColorLike::Components(values.to_vec())
    }
}

impl From<&[f64]> for ColorLike {
    fn from(values: &[f64]) -> Self {
        ColorLike::Components(values.to_vec())
    }
}

impl From<Vec<f64>> for ColorLike {
    fn from(values: Vec<f64>) -> Self {
        ColorLike::Components(values)
    }
}

impl From<&str> for ColorLike {
    fn from(text: &str) -> Self {
        ColorLike::Hex(text.to_string())
    }
}

impl From<String> for ColorLike {
    fn from(text: String) -> Self {
        ColorLike::Hex(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColorError;

    #[test]
    fn test_equality_across_spaces() {
        let rgb = Color::from(Srgb::new(255.0, 0.0, 0.0, None, SrgbParams::default()).unwrap());
        let hex = Color::from(HexColor::parse("#ff0000", HexParams::default()).unwrap());
        let cmy = Color::from(Cmy::new(0.0, 1.0, 1.0, None, CmyParams::default()).unwrap());
        assert_eq!(rgb, hex);
        assert_eq!(hex, cmy);
        assert_eq!(rgb.space_name(), "sRGB");
        assert_eq!(cmy.space_name(), "CMY");
    }

    #[test]
    fn test_interpret_components_per_encoding() {
        let hsl = Encoding::Hsl(HslParams::default());
        let color = hsl.interpret([0.0, 1.0, 0.5].into()).unwrap();
        assert!(matches!(color, Color::Hsl(_)));
        assert_eq!(color.rgba(), Rgba::opaque(1.0, 0.0, 0.0));

        let cmyk = Encoding::Cmyk(CmykParams::default());
        assert!(matches!(
            cmyk.interpret([0.0, 1.0, 1.0].into()),
            Err(ColorError::ComponentCount { encoding: "CMYK", found: 3, .. })
        ));
    }

    #[test]
    fn test_interpret_rejects_out_of_range_canonical_values() {
        let encoding = Encoding::default();
        assert!(matches!(
            encoding.interpret(Rgba::new(2.0, 0.0, 0.0, 1.0).into()),
            Err(ColorError::ComponentOutOfRange { ref param, .. }) if param == "r"
        ));
        assert!(matches!(
            encoding.interpret(Rgba::new(0.0, -1.0, 0.0, 1.0).into()),
            Err(ColorError::ComponentOutOfRange { ref param, .. }) if param == "g"
        ));
        assert!(matches!(
            encoding.interpret(Rgba::new(0.0, 0.0, f64::NAN, 1.0).into()),
            Err(ColorError::ComponentOutOfRange { ref param, .. }) if param == "b"
        ));

        let unchecked = Srgb::from_rgba(Rgba::new(0.0, 0.0, 0.0, 1.5), &SrgbParams::default());
        assert!(matches!(
            encoding.interpret(Color::from(unchecked).into()),
            Err(ColorError::ComponentOutOfRange { ref param, .. }) if param == "a"
        ));
    }

    #[test]
    fn test_interpret_reexpresses_colors() {
        let encoding = Encoding::Hex(HexParams::default());
        let red = Srgb::new(255.0, 0.0, 0.0, None, SrgbParams::default()).unwrap();
        let color = encoding.interpret(red.into()).unwrap();
        assert_eq!(color.to_string(), "#ff0000");

        let color = Encoding::default().interpret("#00ff00".into()).unwrap();
        assert_eq!(color.components(), vec![0.0, 255.0, 0.0]);
    }

    #[test]
    fn test_materialize_every_encoding() {
        let rgba = Rgba::opaque(0.2, 0.4, 0.6);
        let encodings = [
            Encoding::Srgb(SrgbParams::default()),
            Encoding::Hsl(HslParams::default()),
            Encoding::Hsv(HsvParams::default()),
            Encoding::Cmyk(CmykParams::default()),
            Encoding::Cmy(CmyParams::default()),
            Encoding::Hex(HexParams::default()),
        ];
        for encoding in encodings {
            let color = encoding.materialize(rgba);
            assert_eq!(color.space_name(), encoding.name());
            assert_eq!(color.rgba(), rgba);
        }
    }

    #[test]
    fn test_color_conversions() {
        let color = Encoding::default().interpret([0.0, 0.0, 255.0].into()).unwrap();
        assert_eq!(color.hex().as_str(), "#0000ff");
        assert_eq!(color.cmy().components(), vec![1.0, 1.0, 0.0]);
        assert_eq!(color.to_string(), "sRGB(0, 0, 255)");
    }
}
