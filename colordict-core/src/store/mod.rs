//! Persistence of palettes and backups.
//!
//! A [`ColorDict`](crate::ColorDict) never touches files itself: it reads and
//! writes [`PaletteRecord`]s through a [`PaletteStore`]. [`JsonDirStore`] keeps
//! one JSON file per palette in a directory, [`MemoryStore`] keeps everything
//! in memory and records which palettes were written.

mod json_dir;
mod memory;
mod record;

pub use json_dir::JsonDirStore;
pub use memory::MemoryStore;
pub use record::{quantize, BackupRecord, PaletteRecord, StoredColor, STORAGE_NORM};

use crate::error::Result;

/// Source and sink of palette records.
pub trait PaletteStore {
    /// Names of every palette the store can read.
    fn palette_names(&self) -> Result<Vec<String>>;

    fn read_palette(&self, name: &str) -> Result<PaletteRecord>;

    /// Replaces the stored palette `name` with `record`.
    fn write_palette(&mut self, name: &str, record: &PaletteRecord) -> Result<()>;

    /// Reads the last full-state record written by [`PaletteStore::write_backup`].
    fn read_backup(&self) -> Result<BackupRecord>;

    fn write_backup(&mut self, record: &BackupRecord) -> Result<()>;
}
