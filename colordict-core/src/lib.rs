//! # colordict
//!
//! Named color palettes with lossless conversion between color spaces.
//!
//! ## Features
//!
//! - **Color spaces**: sRGB, HSL, HSV, CMYK, CMY and hex strings, each with its own normalization bases
//! - **Canonical values**: every conversion goes through one [`Rgba`] value, so round trips are exact up to float precision
//! - **Palettes**: names grouped into palettes, each name bound to a single color across all of them
//! - **Partial saves**: only palettes changed since the last save are rewritten
//! - **Backups**: the whole dictionary can be written to and restored from a single backup record
//! - **Gradients**: piecewise-linear interpolation over any colors
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use colordict::{ColorDict, ColorDictOptions, ColorSpace, Result};
//!
//! # fn main() -> Result<()> {
//! // Open the palettes directory and load every palette in it
//! let mut colors = ColorDict::open(ColorDictOptions::default().with_palettes_path("palettes"))?;
//!
//! // Bind a new color in the "brand" palette
//! colors.add_to("brand_orange", "#ff8800", "brand")?;
//!
//! // Look it up in another space
//! let orange = colors.get("brand_orange").unwrap();
//! println!("{}", orange.hsl());
//!
//! // Rewrite only brand.json
//! colors.save()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`color`] - Canonical values, the color spaces and their conversions
//! - [`dict`] - The [`ColorDict`] registry and its options
//! - [`store`] - Palette persistence behind the [`PaletteStore`] trait
//! - [`gradient`] - Linear gradients over colors
//! - [`error`] - The crate's error type

pub mod color;
pub mod dict;
pub mod error;
pub mod gradient;
pub mod store;

pub use color::{
    Cmy, CmyParams, Cmyk, CmykParams, Color, ColorLike, ColorSpace, Encoding, HexColor, HexParams,
    Hsl, HslParams, Hsv, HsvParams, Rgba, Srgb, SrgbParams,
};
pub use dict::{ColorDict, ColorDictOptions, Collision, LoadReport, DEFAULT_PALETTE};
pub use error::{ColorError, Result};
pub use gradient::LinearGradient;
pub use store::{JsonDirStore, MemoryStore, PaletteStore};

/// Current version of colordict
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
