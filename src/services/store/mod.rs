//! Per-week CSV persistence.
//!
//! Each named week is one UTF-8 CSV file under the data directory: a header
//! row with a blank corner cell followed by the day labels, then one row per
//! time slot (slot label first, cells in day order). Files are overwritten
//! unconditionally on save; last writer wins.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
#[cfg(not(debug_assertions))]
use directories::ProjectDirs;

use crate::models::grid::WeekGrid;

const WEEK_FILE_EXTENSION: &str = "csv";

pub struct WeekStore {
    data_dir: PathBuf,
}

impl WeekStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Store rooted at the standard data directory: `./data` in debug
    /// builds, the platform data dir in release builds.
    pub fn open_default() -> Self {
        #[cfg(debug_assertions)]
        let data_dir = PathBuf::from("data");

        #[cfg(not(debug_assertions))]
        let data_dir = match ProjectDirs::from("org", "Semainier", "Semainier") {
            Some(proj_dirs) => proj_dirs.data_dir().to_path_buf(),
            None => PathBuf::from("data"),
        };

        Self::new(data_dir)
    }

    /// File a week named `name` is stored under. Exact, case-sensitive stem.
    pub fn week_path(&self, name: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}", name, WEEK_FILE_EXTENSION))
    }

    /// Load the grid stored under `name`.
    ///
    /// A missing file is not an error: it yields a blank grid. A file that
    /// exists but cannot be parsed into a well-formed table is an error and
    /// is never downgraded to a blank grid, so data corruption stays
    /// visible.
    pub fn load(&self, name: &str) -> Result<WeekGrid> {
        let path = self.week_path(name);
        if !path.exists() {
            log::debug!("No stored week '{}', starting from a blank grid", name);
            return Ok(WeekGrid::blank());
        }
        parse_week_file(&path)
            .with_context(|| format!("Failed to load week '{}' from {}", name, path.display()))
    }

    /// Persist `grid` under `name`, overwriting any existing file and
    /// creating the data directory if absent.
    pub fn save(&self, name: &str, grid: &WeekGrid) -> Result<()> {
        fs::create_dir_all(&self.data_dir).with_context(|| {
            format!("Failed to create data directory {}", self.data_dir.display())
        })?;

        let path = self.week_path(name);
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("Failed to open {} for writing", path.display()))?;

        let mut header = vec![String::new()];
        header.extend(grid.day_labels().iter().cloned());
        writer.write_record(&header)?;

        for (slot, cells) in grid.rows() {
            let mut record = vec![slot.to_string()];
            record.extend(cells.iter().cloned());
            writer.write_record(&record)?;
        }

        writer
            .flush()
            .with_context(|| format!("Failed to flush week '{}' to disk", name))?;
        log::info!("Saved week '{}' to {}", name, path.display());
        Ok(())
    }
}

fn parse_week_file(path: &Path) -> Result<WeekGrid> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut records = reader.records();
    let header = match records.next() {
        Some(record) => record.context("Malformed header row")?,
        None => bail!("File is empty"),
    };

    // First header field is the corner cell above the slot labels.
    let days: Vec<String> = header.iter().skip(1).map(|d| d.to_string()).collect();
    if days.is_empty() {
        bail!("Header row has no day columns");
    }

    let mut slots = Vec::new();
    let mut cells = Vec::new();
    for record in records {
        // The csv reader rejects records whose field count differs from the
        // header, which covers truncated or corrupted rows.
        let record = record.context("Malformed data row")?;
        let mut fields = record.iter();
        let slot = fields
            .next()
            .context("Data row is missing its slot label")?
            .to_string();
        slots.push(slot);
        cells.push(fields.map(|f| f.to_string()).collect());
    }

    if slots.is_empty() {
        bail!("File contains a header but no slot rows");
    }

    Ok(WeekGrid::from_parts(slots, days, cells))
}
