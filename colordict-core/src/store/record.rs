//! On-disk shape of palettes and backups.

use crate::color::Rgba;
use crate::error::RecordError;
use indexmap::IndexMap;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

/// Scale stored channels are written on.
pub const STORAGE_NORM: f64 = 255.0;

/// Ordered `name -> color` entries of one palette.
pub type PaletteRecord = IndexMap<String, StoredColor>;

/// Ordered `palette -> record` entries covering a whole dictionary.
pub type BackupRecord = IndexMap<String, PaletteRecord>;

/// A color as written to a palette file: `[r, g, b]` or `[r, g, b, a]` on 0–255.
///
/// Integral channels are written as JSON integers, anything else as a float.
/// A value passed through [`quantize`] reads back exactly as it was written.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct StoredColor(Vec<f64>);

impl StoredColor {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn from_rgba(rgba: Rgba) -> Self {
        Self(rgba.to_array().into_iter().map(encode_channel).collect())
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Canonical value of the stored channels. A missing alpha means opaque.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Length` when the tuple does not hold 3 or 4
    /// values and `RecordError::Channel` for a channel outside 0–255.
    pub fn to_rgba(&self) -> Result<Rgba, RecordError> {
        let (r, g, b, a) = match *self.0.as_slice() {
            [r, g, b] => (r, g, b, STORAGE_NORM),
            [r, g, b, a] => (r, g, b, a),
            _ => return Err(RecordError::Length { found: self.0.len() }),
        };

        let channels = [r, g, b, a];
        if let Some(&value) = channels
            .iter()
            .find(|v| !(0.0..=STORAGE_NORM).contains(*v))
        {
            return Err(RecordError::Channel { value });
        }
        Ok(Rgba::from_array(channels.map(decode_channel)))
    }
}

/// The canonical value `rgba` takes after being stored and read back.
///
/// Some unit channels have no 0–255 float whose quotient by 255 lands
/// exactly on them. Those move to the nearest value that does, every other
/// channel is returned unchanged.
pub fn quantize(rgba: Rgba) -> Rgba {
    Rgba::from_array(rgba.to_array().map(|c| decode_channel(encode_channel(c))))
}

fn decode_channel(v: f64) -> f64 {
    v / STORAGE_NORM
}

/// Scales a unit channel to storage, preferring an exactly reversible value
/// among the few floats around `c * 255`.
fn encode_channel(c: f64) -> f64 {
    let v = snap(c * STORAGE_NORM);
    if v <= 0.0 || decode_channel(v) == c {
        return v;
    }

    let bits = v.to_bits();
    [1, -1, 2, -2, 3, -3]
        .into_iter()
        .map(|step: i64| f64::from_bits(bits.wrapping_add_signed(step)))
        .find(|w| (0.0..=STORAGE_NORM).contains(w) && decode_channel(*w) == c)
        .unwrap_or(v)
}

/// Removes float noise from values that belong on the integer grid.
fn snap(v: f64) -> f64 {
    let rounded = v.round();
    if (v - rounded).abs() < 1e-9 {
        rounded
    } else {
        v
    }
}

impl Serialize for StoredColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for &v in &self.0 {
            if v.fract() == 0.0 && (0.0..=STORAGE_NORM).contains(&v) {
                seq.serialize_element(&(v as u64))?;
            } else {
                seq.serialize_element(&v)?;
            }
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_writes_integers() {
        let stored = StoredColor::from_rgba(Rgba::new(1.0, 0.0, 51.0 / 255.0, 1.0));
        assert_eq!(stored.values(), &[255.0, 0.0, 51.0, 255.0]);
        assert_eq!(serde_json::to_string(&stored).unwrap(), "[255,0,51,255]");
    }

    #[test]
    fn test_off_grid_values_stay_floats() {
        let stored = StoredColor::from_rgba(Rgba::new(0.5, 0.0, 0.0, 1.0));
        assert_eq!(serde_json::to_string(&stored).unwrap(), "[127.5,0,0,255]");
    }

    #[test]
    fn test_to_rgba_defaults_alpha() {
        let stored: StoredColor = serde_json::from_str("[255, 0, 0]").unwrap();
        assert_eq!(stored.to_rgba().unwrap(), Rgba::opaque(1.0, 0.0, 0.0));

        let stored: StoredColor = serde_json::from_str("[0, 0, 0, 0]").unwrap();
        assert_eq!(stored.to_rgba().unwrap().a, 0.0);
    }

    #[test]
    fn test_to_rgba_rejects_bad_tuples() {
        assert_eq!(
            StoredColor::new(vec![1.0, 2.0]).to_rgba(),
            Err(RecordError::Length { found: 2 })
        );
        assert_eq!(
            StoredColor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]).to_rgba(),
            Err(RecordError::Length { found: 5 })
        );
        assert_eq!(
            StoredColor::new(vec![256.0, 0.0, 0.0]).to_rgba(),
            Err(RecordError::Channel { value: 256.0 })
        );
        assert_eq!(
            StoredColor::new(vec![0.0, -1.0, 0.0]).to_rgba(),
            Err(RecordError::Channel { value: -1.0 })
        );
        assert!(StoredColor::new(vec![f64::NAN, 0.0, 0.0]).to_rgba().is_err());
    }

    #[test]
    fn test_off_grid_values_survive_json() {
        let rgba = quantize(Rgba::new(
            0.5356951919910252,
            0.4643048080089748,
            0.2678475959955126,
            1.0,
        ));
        let json = serde_json::to_string(&StoredColor::from_rgba(rgba)).unwrap();
        let stored: StoredColor = serde_json::from_str(&json).unwrap();
        assert_eq!(stored.to_rgba().unwrap(), rgba);
    }

    #[test]
    fn test_quantize_is_stable() {
        for i in 0..10_000u32 {
            let c = f64::from(i) / 9_999.0 * 0.999_999_7;
            let once = quantize(Rgba::new(c, 1.0 - c, c / 3.0, 1.0));
            assert_eq!(quantize(once), once);
            assert_eq!(StoredColor::from_rgba(once).to_rgba().unwrap(), once);
        }
    }

    #[test]
    fn test_quantize_keeps_byte_grid() {
        for k in 0..=255u8 {
            let c = f64::from(k) / 255.0;
            let rgba = Rgba::new(c, c, c, c);
            assert_eq!(quantize(rgba), rgba);
            assert_eq!(StoredColor::from_rgba(rgba).values()[0], f64::from(k));
        }
    }

    #[test]
    fn test_record_preserves_order() {
        let json = r#"{"zebra": [0, 0, 0], "apple": [255, 255, 255]}"#;
        let record: PaletteRecord = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zebra", "apple"]);
    }
}
