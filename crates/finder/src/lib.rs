//! Font file discovery and name table extraction.
//!
//! Resolves an input path into a finite, single-pass sequence of
//! [`FontFile`] handles. Discovery only records paths; a font's data is
//! read and parsed when the report driver asks for its name entries,
//! and released again before the next font is requested.

use std::{
    fs::read,
    path::{Path, PathBuf},
};

use glob::glob;
use log::debug;
use read_fonts::{FontRef, TableProvider};
use typelens_name_report::{Error as ReportError, NameEntry, NameSource};

pub mod error;

pub use error::{FinderError, Result};

/// Extensions recognized as font files when scanning a directory.
pub const FONT_EXTENSIONS: [&str; 4] = ["otf", "ttf", "woff", "woff2"];

/// Finds font files under a path.
#[derive(Debug, Clone)]
pub struct FontFinder {
    input_path: PathBuf,
    recursive: bool,
}

impl FontFinder {
    /// Resolve `input_path` and prepare a finder.
    ///
    /// Fails if the path does not exist.
    pub fn new(input_path: impl AsRef<Path>) -> Result<Self> {
        let resolved = input_path
            .as_ref()
            .canonicalize()
            .map_err(|_| FinderError::InvalidPath(input_path.as_ref().to_path_buf()))?;
        Ok(Self { input_path: resolved, recursive: false })
    }

    /// Also scan subdirectories.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// Discover font files, in a stable order.
    ///
    /// A file path is handed through as-is; a directory is scanned for
    /// files with a known font extension. Paths are sorted so that two
    /// runs over the same input set produce identical reports.
    pub fn fonts(&self) -> Result<impl Iterator<Item = FontFile> + use<>> {
        let mut paths = if self.input_path.is_file() {
            vec![self.input_path.clone()]
        } else {
            let pattern = self.input_path.join(if self.recursive { "**/*" } else { "*" });
            let pattern = pattern
                .to_str()
                .ok_or_else(|| FinderError::InvalidPath(self.input_path.clone()))?
                .to_owned();
            glob(&pattern)
                .map_err(|e| FinderError::Scan {
                    path: self.input_path.clone(),
                    reason: e.to_string(),
                })?
                .filter_map(std::result::Result::ok)
                .filter(|path| path.is_file() && has_font_extension(path))
                .collect()
        };
        paths.sort();
        debug!("discovered {} font file(s) under {}", paths.len(), self.input_path.display());
        Ok(paths.into_iter().map(FontFile::new))
    }
}

fn has_font_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| FONT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// A discovered font file; data is read lazily.
#[derive(Debug, Clone)]
pub struct FontFile {
    path: PathBuf,
}

impl FontFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the raw font data.
    pub fn read(&self) -> typelens_name_report::Result<Vec<u8>> {
        read(&self.path)
            .map_err(|e| ReportError::FontLoad(format!("{}: {e}", self.path.display())))
    }
}

impl AsRef<Path> for FontFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl NameSource for FontFile {
    fn identifier(&self) -> String {
        self.path.display().to_string()
    }

    fn name_entries(&self) -> typelens_name_report::Result<Vec<NameEntry>> {
        let data = self.read()?;
        extract_name_entries(&data)
    }
}

/// Extract name records from raw font data.
pub fn extract_name_entries(data: &[u8]) -> typelens_name_report::Result<Vec<NameEntry>> {
    let font = FontRef::new(data).map_err(|e| ReportError::FontLoad(e.to_string()))?;
    let name = font.name().map_err(|_| ReportError::MissingTable)?;

    let mut entries = Vec::new();
    for record in name.name_record() {
        // undecodable strings are skipped rather than failing the font
        let value = match record.string(name.string_data()) {
            Ok(s) => s.chars().collect::<String>(),
            Err(_) => continue,
        };
        entries.push(NameEntry {
            name_id: record.name_id().to_u16(),
            platform_id: record.platform_id(),
            encoding_id: record.encoding_id(),
            language_id: record.language_id(),
            value,
        });
    }
    Ok(entries)
}
