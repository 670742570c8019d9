use super::{BackupRecord, PaletteRecord, PaletteStore};
use crate::error::{ColorError, Result};
use indexmap::IndexMap;
use std::io;

/// Palettes kept in memory. Every write is logged so callers can see exactly
/// which palettes a save touched.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    palettes: IndexMap<String, PaletteRecord>,
    backup: Option<BackupRecord>,
    writes: Vec<String>,
    backup_writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palette(mut self, name: impl Into<String>, record: PaletteRecord) -> Self {
        self.palettes.insert(name.into(), record);
        self
    }

    pub fn palette(&self, name: &str) -> Option<&PaletteRecord> {
        self.palettes.get(name)
    }

    pub fn backup(&self) -> Option<&BackupRecord> {
        self.backup.as_ref()
    }

    /// Palette names passed to `write_palette`, oldest first.
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    pub fn backup_writes(&self) -> usize {
        self.backup_writes
    }

    pub fn clear_writes(&mut self) {
        self.writes.clear();
        self.backup_writes = 0;
    }
}

impl PaletteStore for MemoryStore {
    fn palette_names(&self) -> Result<Vec<String>> {
        Ok(self.palettes.keys().cloned().collect())
    }

    fn read_palette(&self, name: &str) -> Result<PaletteRecord> {
        self.palettes
            .get(name)
            .cloned()
            .ok_or_else(|| ColorError::UnknownPalette(name.to_string()))
    }

    fn write_palette(&mut self, name: &str, record: &PaletteRecord) -> Result<()> {
        self.palettes.insert(name.to_string(), record.clone());
        self.writes.push(name.to_string());
        Ok(())
    }

    fn read_backup(&self) -> Result<BackupRecord> {
        self.backup.clone().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no backup has been written").into()
        })
    }

    fn write_backup(&mut self, record: &BackupRecord) -> Result<()> {
        self.backup = Some(record.clone());
        self.backup_writes += 1;
        Ok(())
    }
}
