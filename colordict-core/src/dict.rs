//! The named color registry.

use crate::color::{Color, ColorLike, ColorSpace, Encoding, Rgba};
use crate::error::{ColorError, Result};
use crate::store::{
    quantize, BackupRecord, JsonDirStore, PaletteRecord, PaletteStore, StoredColor,
};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Palette used by [`ColorDict::add`].
pub const DEFAULT_PALETTE: &str = "unassigned";

/// Names of the dictionary's own fields, refused as color names so palette
/// files stay readable by tools that expose colors as fields.
pub const RESERVED_NAMES: &[&str] = &["encoding", "palettes", "palettes_path", "colors"];

/// Directory of the palettes shipped with this crate.
pub fn default_palettes_path() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/palettes"))
}

/// Construction options of a [`ColorDict`].
#[derive(Debug, Clone)]
pub struct ColorDictOptions {
    /// Palettes to load, every palette of the store when `None`.
    pub palettes: Option<Vec<String>>,
    /// Directory scanned by [`ColorDict::open`].
    pub palettes_path: PathBuf,
    /// Backup file of [`ColorDict::open`], `backup.json` next to the palettes when `None`.
    pub backup_path: Option<PathBuf>,
    /// Representation colors are materialized as.
    pub encoding: Encoding,
}

impl Default for ColorDictOptions {
    fn default() -> Self {
        Self {
            palettes: None,
            palettes_path: default_palettes_path(),
            backup_path: None,
            encoding: Encoding::default(),
        }
    }
}

impl ColorDictOptions {
    pub fn with_palettes<I, S>(mut self, palettes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palettes = Some(palettes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_palettes_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.palettes_path = path.into();
        self
    }

    pub fn with_backup_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.backup_path = Some(path.into());
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// A name found bound to different values in two palettes while loading.
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
    pub name: String,
    /// Palette whose entry was ignored.
    pub palette: String,
    pub kept: Rgba,
    pub ignored: Rgba,
}

/// Outcome of [`ColorDict::load`] and [`ColorDict::restore_backup`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Palettes read, in load order.
    pub palettes: Vec<String>,
    /// Names newly bound.
    pub colors: usize,
    pub collisions: Vec<Collision>,
}

/// Named colors grouped into palettes and persisted through a [`PaletteStore`].
///
/// Every name is bound to exactly one color, but may be listed in several
/// palettes. Mutations mark the palettes they touch dirty and
/// [`save`](ColorDict::save) rewrites only those.
///
/// # Example
///
/// ```rust
/// use colordict::store::MemoryStore;
/// use colordict::{ColorDict, ColorDictOptions, ColorSpace};
///
/// # fn main() -> colordict::Result<()> {
/// let mut colors = ColorDict::with_store(MemoryStore::new(), ColorDictOptions::default())?;
/// colors.add("red", [255.0, 0.0, 0.0])?;
/// assert_eq!(colors.get("red").unwrap().hex().as_str(), "#ff0000");
/// assert_eq!(colors.names([255.0, 0.0, 0.0])?, vec!["red"]);
///
/// colors.save()?;
/// assert_eq!(colors.store().writes(), &["unassigned".to_string()]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ColorDict<S: PaletteStore = JsonDirStore> {
    store: S,
    encoding: Encoding,
    colors: IndexMap<String, Color>,
    palettes: IndexMap<String, Vec<String>>,
    dirty: HashSet<String>,
}

impl ColorDict<JsonDirStore> {
    /// Opens the palette directory named by `options` and loads its palettes.
    ///
    /// # Errors
    ///
    /// Returns I/O or JSON errors from reading palette files, and
    /// `InvalidRecord` for entries that are not 3 or 4 values on 0–255.
    pub fn open(options: ColorDictOptions) -> Result<Self> {
        let mut store = JsonDirStore::new(&options.palettes_path);
        if let Some(backup_path) = &options.backup_path {
            store = store.with_backup_path(backup_path);
        }
        Self::with_store(store, options)
    }
}

impl<S: PaletteStore> ColorDict<S> {
    /// An empty dictionary over `store`; nothing is read.
    pub fn new(store: S, encoding: Encoding) -> Self {
        Self {
            store,
            encoding,
            colors: IndexMap::new(),
            palettes: IndexMap::new(),
            dirty: HashSet::new(),
        }
    }

    /// Builds a dictionary over `store` and loads the palettes selected by `options`.
    ///
    /// # Errors
    ///
    /// See [`ColorDict::load`].
    pub fn with_store(store: S, options: ColorDictOptions) -> Result<Self> {
        let mut dict = Self::new(store, options.encoding);
        let selected: Option<Vec<&str>> = options
            .palettes
            .as_ref()
            .map(|names| names.iter().map(String::as_str).collect());
        dict.load(selected.as_deref())?;
        Ok(dict)
    }

    pub fn encoding(&self) -> &Encoding {
        &self.encoding
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    /// Every bound color in insertion order.
    pub fn colors(&self) -> impl Iterator<Item = (&str, &Color)> {
        self.colors.iter().map(|(name, color)| (name.as_str(), color))
    }

    /// Every palette with its member names, in insertion order.
    pub fn palettes(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.palettes
            .iter()
            .map(|(name, members)| (name.as_str(), members.as_slice()))
    }

    pub fn palette(&self, name: &str) -> Option<&[String]> {
        self.palettes.get(name).map(Vec::as_slice)
    }

    /// Palettes changed since the last save, in palette order.
    pub fn dirty_palettes(&self) -> Vec<&str> {
        self.palettes
            .keys()
            .filter(|name| self.dirty.contains(*name))
            .map(String::as_str)
            .collect()
    }

    pub fn is_dirty(&self, palette: &str) -> bool {
        self.dirty.contains(palette)
    }

    /// Reads palettes from the store, every palette when `palettes` is `None`.
    ///
    /// A name bound to a different value in an earlier palette keeps its first
    /// value. The later entry is skipped and reported as a [`Collision`]. Loading
    /// never marks palettes dirty.
    ///
    /// # Errors
    ///
    /// Propagates store errors and returns `InvalidRecord` for malformed
    /// entries. A palette is decoded in full before any of it is applied.
    pub fn load(&mut self, palettes: Option<&[&str]>) -> Result<LoadReport> {
        let available = self.store.palette_names()?;
        if let Some(wanted) = palettes {
            for name in wanted.iter().filter(|name| !available.iter().any(|a| a == *name)) {
                warn!(palette = %name, "requested palette not found in store");
            }
        }

        let mut report = LoadReport::default();
        for palette in available {
            if palettes.is_some_and(|wanted| !wanted.contains(&palette.as_str())) {
                continue;
            }

            let record = self.store.read_palette(&palette)?;
            let entries = decode_record(&palette, &record)?;
            if entries.is_empty() {
                debug!(palette = %palette, "skipping empty palette");
                continue;
            }

            debug!(palette = %palette, colors = entries.len(), "loaded palette");
            for (name, rgba) in entries {
                self.bind_loaded(&palette, name, rgba, &mut report);
            }
            report.palettes.push(palette);
        }

        info!(
            palettes = report.palettes.len(),
            colors = report.colors,
            collisions = report.collisions.len(),
            "palettes loaded"
        );
        Ok(report)
    }

    fn bind_loaded(&mut self, palette: &str, name: String, rgba: Rgba, report: &mut LoadReport) {
        match self.colors.get(&name) {
            Some(existing) if existing.rgba() != rgba => {
                let kept = existing.rgba();
                warn!(
                    name = %name,
                    palette,
                    kept = %kept,
                    ignored = %rgba,
                    "color name bound to different values across palettes, keeping the first"
                );
                report.collisions.push(Collision {
                    name,
                    palette: palette.to_string(),
                    kept,
                    ignored: rgba,
                });
                return;
            }
            Some(_) => {}
            None => {
                self.colors
                    .insert(name.clone(), self.encoding.materialize(rgba));
                report.colors += 1;
            }
        }

        let members = self.palettes.entry(palette.to_string()).or_default();
        if !members.contains(&name) {
            members.push(name);
        }
    }

    /// Interprets `input` under the dictionary's encoding, settled on a value
    /// that reads back unchanged from storage.
    fn bindable(&self, input: ColorLike) -> Result<Color> {
        let color = self.encoding.interpret(input)?;
        let rgba = quantize(color.rgba());
        if rgba == color.rgba() {
            Ok(color)
        } else {
            Ok(self.encoding.materialize(rgba))
        }
    }

    /// The color bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Color> {
        self.colors.get(name)
    }

    /// Names bound to exactly the canonical value of `color`.
    ///
    /// Raw tuples are read as components of the dictionary's encoding. The
    /// comparison is exact, so round consistently before looking colors up.
    ///
    /// # Errors
    ///
    /// Returns `ComponentCount` or `ComponentOutOfRange` for invalid input.
    pub fn names(&self, color: impl Into<ColorLike>) -> Result<Vec<&str>> {
        let target = self.bindable(color.into())?.rgba();
        Ok(self
            .colors
            .iter()
            .filter(|(_, c)| c.rgba() == target)
            .map(|(name, _)| name.as_str())
            .collect())
    }

    /// Binds `name` in the [`DEFAULT_PALETTE`].
    ///
    /// # Errors
    ///
    /// See [`ColorDict::add_to`].
    pub fn add(&mut self, name: &str, color: impl Into<ColorLike>) -> Result<()> {
        self.add_to(name, color, DEFAULT_PALETTE)
    }

    /// Binds `name` to `color` and appends it to `palette`, creating the
    /// palette when needed.
    ///
    /// Adding an already bound name with the same value only lists it in
    /// `palette` as well.
    ///
    /// # Errors
    ///
    /// - `ReservedName` for an empty or reserved name.
    /// - `InvalidPaletteName` when `palette` cannot be used as a file stem.
    /// - `NameConflict` when `name` is bound to a different value.
    /// - `ComponentCount` / `ComponentOutOfRange` for invalid color input.
    pub fn add_to(&mut self, name: &str, color: impl Into<ColorLike>, palette: &str) -> Result<()> {
        check_name(name)?;
        check_palette_name(palette)?;
        let color = self.bindable(color.into())?;

        match self.colors.get(name) {
            Some(existing) if existing.rgba() != color.rgba() => {
                return Err(ColorError::NameConflict {
                    name: name.to_string(),
                    rejected: color.rgba(),
                    existing: existing.rgba(),
                });
            }
            Some(_) => {}
            None => {
                self.colors.insert(name.to_string(), color);
            }
        }

        let members = self.palettes.entry(palette.to_string()).or_default();
        if !members.iter().any(|n| n == name) {
            members.push(name.to_string());
            self.dirty.insert(palette.to_string());
        }
        Ok(())
    }

    /// Rebinds an existing name and marks every palette listing it dirty.
    ///
    /// # Errors
    ///
    /// Returns `UnknownName` when `name` is not bound, or a construction error
    /// for invalid color input.
    pub fn update(&mut self, name: &str, color: impl Into<ColorLike>) -> Result<()> {
        if !self.colors.contains_key(name) {
            return Err(ColorError::UnknownName(name.to_string()));
        }
        let color = self.bindable(color.into())?;
        self.colors.insert(name.to_string(), color);

        for (palette, members) in &self.palettes {
            if members.iter().any(|n| n == name) {
                self.dirty.insert(palette.clone());
            }
        }
        Ok(())
    }

    /// Takes `name` out of one palette. The binding itself stays.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPalette` or `NotInPalette`.
    pub fn remove(&mut self, name: &str, palette: &str) -> Result<()> {
        let members = self
            .palettes
            .get_mut(palette)
            .ok_or_else(|| ColorError::UnknownPalette(palette.to_string()))?;
        let position = members
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| ColorError::NotInPalette {
                name: name.to_string(),
                palette: palette.to_string(),
            })?;

        members.remove(position);
        self.dirty.insert(palette.to_string());
        Ok(())
    }

    /// Takes `name` out of every palette and drops its binding.
    ///
    /// # Errors
    ///
    /// Returns `UnknownName` when `name` is not bound.
    pub fn remove_all(&mut self, name: &str) -> Result<Color> {
        let color = self
            .colors
            .shift_remove(name)
            .ok_or_else(|| ColorError::UnknownName(name.to_string()))?;

        for (palette, members) in &mut self.palettes {
            let before = members.len();
            members.retain(|n| n != name);
            if members.len() != before {
                self.dirty.insert(palette.clone());
            }
        }
        Ok(color)
    }

    fn palette_record(&self, members: &[String]) -> PaletteRecord {
        members
            .iter()
            .filter_map(|name| {
                self.colors
                    .get(name)
                    .map(|color| (name.clone(), StoredColor::from_rgba(color.rgba())))
            })
            .collect()
    }

    /// Writes every dirty palette to the store and returns how many were written.
    ///
    /// A palette stops being dirty as soon as its write succeeds, so after a
    /// failure the remaining palettes are still pending.
    ///
    /// # Errors
    ///
    /// Propagates the first store error.
    pub fn save(&mut self) -> Result<usize> {
        let pending: Vec<String> = self
            .palettes
            .keys()
            .filter(|name| self.dirty.contains(*name))
            .cloned()
            .collect();

        for palette in &pending {
            let record = self.palette_record(&self.palettes[palette]);
            self.store.write_palette(palette, &record)?;
            self.dirty.remove(palette);
        }
        self.dirty.clear();

        info!(palettes = pending.len(), "saved dirty palettes");
        Ok(pending.len())
    }

    /// Writes every palette, dirty or not, to the store's backup record.
    ///
    /// # Errors
    ///
    /// Propagates store errors.
    pub fn backup(&mut self) -> Result<()> {
        let record: BackupRecord = self
            .palettes
            .iter()
            .map(|(palette, members)| (palette.clone(), self.palette_record(members)))
            .collect();

        debug!(palettes = record.len(), "writing backup");
        self.store.write_backup(&record)
    }

    /// Replaces the whole in-memory state with the last backup.
    ///
    /// Every restored palette is marked dirty so a following
    /// [`save`](ColorDict::save) brings the palette files in line with it. The
    /// current state is left untouched when the backup cannot be read.
    ///
    /// # Errors
    ///
    /// Propagates store errors and returns `InvalidRecord` for malformed entries.
    pub fn restore_backup(&mut self) -> Result<LoadReport> {
        let backup = self.store.read_backup()?;
        let decoded = backup
            .iter()
            .map(|(palette, record)| {
                decode_record(palette, record).map(|entries| (palette.clone(), entries))
            })
            .collect::<Result<Vec<_>>>()?;

        self.colors.clear();
        self.palettes.clear();
        self.dirty.clear();

        let mut report = LoadReport::default();
        for (palette, entries) in decoded {
            self.palettes.entry(palette.clone()).or_default();
            for (name, rgba) in entries {
                self.bind_loaded(&palette, name, rgba, &mut report);
            }
            self.dirty.insert(palette.clone());
            report.palettes.push(palette);
        }

        info!(
            palettes = report.palettes.len(),
            colors = report.colors,
            "restored backup"
        );
        Ok(report)
    }
}

fn decode_record(palette: &str, record: &PaletteRecord) -> Result<Vec<(String, Rgba)>> {
    record
        .iter()
        .map(|(name, stored)| {
            stored
                .to_rgba()
                .map(|rgba| (name.clone(), rgba))
                .map_err(|reason| ColorError::InvalidRecord {
                    palette: palette.to_string(),
                    name: name.clone(),
                    reason,
                })
        })
        .collect()
}

fn check_name(name: &str) -> Result<()> {
    if name.is_empty() || RESERVED_NAMES.contains(&name) {
        return Err(ColorError::ReservedName(name.to_string()));
    }
    Ok(())
}

fn check_palette_name(name: &str) -> Result<()> {
    if name.is_empty() || name.starts_with('.') || name.contains(['/', '\\']) {
        return Err(ColorError::InvalidPaletteName(name.to_string()));
    }
    Ok(())
}
