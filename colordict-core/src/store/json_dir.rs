use super::{BackupRecord, PaletteRecord, PaletteStore};
use crate::error::Result;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

const EXTENSION: &str = "json";
const BACKUP_FILE: &str = "backup.json";

/// Palettes stored as `<dir>/<palette>.json`, the backup as a single JSON file
/// outside the palette scan.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    dir: PathBuf,
    backup_path: PathBuf,
}

impl JsonDirStore {
    /// Store rooted at `dir`. The backup defaults to `backup.json` next to the
    /// directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let backup_path = match dir.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join(BACKUP_FILE),
            _ => dir.join(BACKUP_FILE),
        };
        Self { dir, backup_path }
    }

    pub fn with_backup_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.backup_path = path.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    pub fn palette_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{EXTENSION}"))
    }

    fn is_backup(&self, path: &Path) -> bool {
        path == self.backup_path
            || matches!(
                (path.canonicalize(), self.backup_path.canonicalize()),
                (Ok(a), Ok(b)) if a == b
            )
    }
}

/// Writes pretty JSON with four-space indentation through a temporary file so
/// a failed write never leaves a truncated palette behind.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    buf.push(b'\n');

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, &buf)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

impl PaletteStore for JsonDirStore {
    fn palette_names(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(dir = %self.dir.display(), "palette directory does not exist yet");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if self.is_backup(&path) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn read_palette(&self, name: &str) -> Result<PaletteRecord> {
        let path = self.palette_path(name);
        debug!(palette = name, path = %path.display(), "reading palette");
        let text = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn write_palette(&mut self, name: &str, record: &PaletteRecord) -> Result<()> {
        let path = self.palette_path(name);
        debug!(palette = name, colors = record.len(), path = %path.display(), "writing palette");
        write_json(&path, record)
    }

    fn read_backup(&self) -> Result<BackupRecord> {
        debug!(path = %self.backup_path.display(), "reading backup");
        let text = fs::read_to_string(&self.backup_path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn write_backup(&mut self, record: &BackupRecord) -> Result<()> {
        debug!(palettes = record.len(), path = %self.backup_path.display(), "writing backup");
        write_json(&self.backup_path, record)
    }
}
