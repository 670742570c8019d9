//! Pure conversions between canonical RGB channels and the native component
//! tuples of each color space.
//!
//! Every function here works on unit-range values: hue is a fraction of a full
//! turn, every other component lies in `[0, 1]`. Scaling to and from a
//! variant's normalization base happens in the variant types.

use crate::error::{ColorError, Result};

/// Chroma and the intermediate component placed by the hue sector.
fn sector(h: f64, c: f64) -> (f64, f64, f64) {
    let h6 = h.rem_euclid(1.0) * 6.0;
    let x = c * (1.0 - (h6 % 2.0 - 1.0).abs());

    match h6 as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    }
}

/// Hue as a fraction of a turn, 0 for achromatic input.
fn hue(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }

    let h6 = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    (h6 / 6.0).rem_euclid(1.0)
}

fn unit(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let (r, g, b) = sector(h, c);
    let m = l - c / 2.0;
    (unit(r + m), unit(g + m), unit(b + m))
}

pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    // Saturation is undefined at the achromatic extremes.
    let s = if delta == 0.0 || l <= 0.0 || l >= 1.0 {
        0.0
    } else {
        unit(delta / (1.0 - (2.0 * l - 1.0).abs()))
    };

    (hue(r, g, b, max, delta), s, l)
}

pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let c = v * s;
    let (r, g, b) = sector(h, c);
    let m = v - c;
    (unit(r + m), unit(g + m), unit(b + m))
}

pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let s = if max == 0.0 { 0.0 } else { delta / max };
    (hue(r, g, b, max, delta), s, max)
}

pub fn cmyk_to_rgb(c: f64, m: f64, y: f64, k: f64) -> (f64, f64, f64) {
    ((1.0 - c) * (1.0 - k), (1.0 - m) * (1.0 - k), (1.0 - y) * (1.0 - k))
}

pub fn rgb_to_cmyk(r: f64, g: f64, b: f64) -> (f64, f64, f64, f64) {
    // Pure black would divide by zero below.
    if r == 0.0 && g == 0.0 && b == 0.0 {
        return (0.0, 0.0, 0.0, 1.0);
    }

    let k = (1.0 - r).min(1.0 - g).min(1.0 - b);
    let scale = |x: f64| unit((1.0 - x - k) / (1.0 - k));
    (scale(r), scale(g), scale(b), k)
}

pub fn cmy_to_rgb(c: f64, m: f64, y: f64) -> (f64, f64, f64) {
    (1.0 - c, 1.0 - m, 1.0 - y)
}

pub fn rgb_to_cmy(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    (1.0 - r, 1.0 - g, 1.0 - b)
}

/// Parses `rrggbb` or `aarrggbb` (an optional leading `#` is ignored) into
/// `[r, g, b, a]` bytes. Alpha defaults to 255.
pub fn parse_hex(text: &str) -> Result<[u8; 4]> {
    let digits = text.strip_prefix('#').unwrap_or(text);

    if !digits.is_ascii() || !matches!(digits.len(), 6 | 8) {
        return Err(ColorError::ComponentOutOfRange {
            param: "hex".to_string(),
            reason: format!(
                "'{text}' should be 6 or 8 hex digits long (disregarding a leading '#')"
            ),
        });
    }

    let byte = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColorError::ComponentOutOfRange {
            param: "hex".to_string(),
            reason: format!("'{text}' contains non-hexadecimal digits"),
        })
    };

    let offset = digits.len() - 6;
    let a = if offset == 2 { byte(0)? } else { 255 };
    Ok([byte(offset)?, byte(offset + 2)?, byte(offset + 4)?, a])
}

/// Quantizes a unit channel to a byte by truncation.
///
/// The small bias keeps `k / 255.0` mapping back to `k` when the division
/// left the value one ulp short.
pub fn channel_to_byte(v: f64) -> u8 {
    (unit(v) * 255.0 + 1e-9).floor() as u8
}

/// Formats unit channels as `#rrggbb`, or `#aarrggbb` when `include_alpha` is set.
pub fn format_hex(r: f64, g: f64, b: f64, a: f64, include_alpha: bool) -> String {
    let [r, g, b, a] = [r, g, b, a].map(channel_to_byte);
    if include_alpha {
        format!("#{a:02x}{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn close(a: (f64, f64, f64), b: (f64, f64, f64)) -> bool {
        (a.0 - b.0).abs() < EPS && (a.1 - b.1).abs() < EPS && (a.2 - b.2).abs() < EPS
    }

    #[test]
    fn test_hsl_primaries() {
        assert!(close(hsl_to_rgb(0.0, 1.0, 0.5), (1.0, 0.0, 0.0)));
        assert!(close(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), (0.0, 1.0, 0.0)));
        assert!(close(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), (0.0, 0.0, 1.0)));
        // A full turn wraps back to red.
        assert!(close(hsl_to_rgb(1.0, 1.0, 0.5), (1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_rgb_to_hsl_achromatic_extremes() {
        assert_eq!(rgb_to_hsl(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
        assert_eq!(rgb_to_hsl(1.0, 1.0, 1.0), (0.0, 0.0, 1.0));
        assert_eq!(rgb_to_hsl(0.5, 0.5, 0.5), (0.0, 0.0, 0.5));
    }

    #[test]
    fn test_rgb_to_hsl_known_values() {
        let (h, s, l) = rgb_to_hsl(1.0, 0.0, 1.0);
        assert!((h - 5.0 / 6.0).abs() < EPS);
        assert!((s - 1.0).abs() < EPS);
        assert!((l - 0.5).abs() < EPS);

        let (h, s, l) = rgb_to_hsl(0.25, 0.5, 0.75);
        assert!((h - 210.0 / 360.0).abs() < EPS);
        assert!((s - 0.5).abs() < EPS);
        assert!((l - 0.5).abs() < EPS);
    }

    #[test]
    fn test_hsl_round_trip() {
        for &(r, g, b) in &[(0.2, 0.4, 0.6), (0.9, 0.1, 0.3), (0.05, 0.95, 0.5)] {
            let (h, s, l) = rgb_to_hsl(r, g, b);
            assert!(close(hsl_to_rgb(h, s, l), (r, g, b)));
        }
    }

    #[test]
    fn test_hsv_round_trip() {
        assert!(close(hsv_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)));
        for &(r, g, b) in &[(0.2, 0.4, 0.6), (1.0, 0.5, 0.0), (0.3, 0.3, 0.9)] {
            let (h, s, v) = rgb_to_hsv(r, g, b);
            assert!(close(hsv_to_rgb(h, s, v), (r, g, b)));
        }
        assert_eq!(rgb_to_hsv(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_cmyk_black_short_circuit() {
        assert_eq!(rgb_to_cmyk(0.0, 0.0, 0.0), (0.0, 0.0, 0.0, 1.0));
        assert!(close(cmyk_to_rgb(0.0, 0.0, 0.0, 1.0), (0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_cmyk_round_trip() {
        let (c, m, y, k) = rgb_to_cmyk(1.0, 0.0, 0.0);
        assert_eq!((c, m, y, k), (0.0, 1.0, 1.0, 0.0));

        let (c, m, y, k) = rgb_to_cmyk(0.2, 0.4, 0.6);
        assert!(close(cmyk_to_rgb(c, m, y, k), (0.2, 0.4, 0.6)));
    }

    #[test]
    fn test_cmy_complement() {
        assert_eq!(rgb_to_cmy(1.0, 0.0, 0.25), (0.0, 1.0, 0.75));
        assert_eq!(cmy_to_rgb(0.0, 1.0, 0.75), (1.0, 0.0, 0.25));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#ff0000").unwrap(), [255, 0, 0, 255]);
        assert_eq!(parse_hex("00FF7f").unwrap(), [0, 255, 127, 255]);
        assert_eq!(parse_hex("#80ff0000").unwrap(), [255, 0, 0, 128]);
    }

    #[test]
    fn test_parse_hex_rejects_bad_input() {
        assert!(matches!(
            parse_hex("#fff"),
            Err(ColorError::ComponentOutOfRange { .. })
        ));
        assert!(matches!(
            parse_hex("#gg0000"),
            Err(ColorError::ComponentOutOfRange { .. })
        ));
        assert!(parse_hex("#ff00é").is_err());
    }

    #[test]
    fn test_format_hex_truncates() {
        assert_eq!(format_hex(1.0, 0.0, 0.0, 1.0, false), "#ff0000");
        assert_eq!(format_hex(1.0, 0.0, 0.0, 0.5, true), "#7fff0000");
        for k in 0..=255u8 {
            assert_eq!(channel_to_byte(f64::from(k) / 255.0), k);
        }
    }
}
