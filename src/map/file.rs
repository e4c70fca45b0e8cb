use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::view::Candidate;

use super::{FuelMap, MapError, Series, SeriesKind, MAP_EXTENSION};

/// Which parts of a loaded file take part in plotting and point lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    /// The file as a whole
    pub file: bool,
    /// The gasoline series
    pub primary: bool,
    /// The gas series
    pub secondary: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            file: true,
            primary: true,
            secondary: true,
        }
    }
}

impl Visibility {
    /// Whether the given series is shown
    pub fn shows(&self, kind: SeriesKind) -> bool {
        self.file
            && match kind {
                SeriesKind::Primary => self.primary,
                SeriesKind::Secondary => self.secondary,
            }
    }

    /// Copy with the given series shown or hidden
    pub fn with_series(mut self, kind: SeriesKind, visible: bool) -> Self {
        match kind {
            SeriesKind::Primary => self.primary = visible,
            SeriesKind::Secondary => self.secondary = visible,
        }
        self
    }

    /// Copy with the whole file shown or hidden
    pub fn with_file(mut self, visible: bool) -> Self {
        self.file = visible;
        self
    }
}

/// A loaded map file: the parsed map plus its display state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapFile {
    /// Display name, normally the file name
    pub name: String,
    /// Where the file was loaded from, if anywhere
    pub path: Option<PathBuf>,
    /// The parsed series
    pub map: FuelMap,
    /// Display state
    pub visibility: Visibility,
}

impl MapFile {
    /// Wrap an already parsed map
    pub fn new(name: impl Into<String>, map: FuelMap) -> Self {
        Self {
            name: name.into(),
            path: None,
            map,
            visibility: Visibility::default(),
        }
    }

    /// Read and parse a map file, naming it after its file name
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MapError> {
        let path = path.as_ref();
        let map = FuelMap::from_file(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        info!("Loaded {} ({} records)", name, map.primary().len());
        Ok(Self {
            name,
            path: Some(path.to_path_buf()),
            map,
            visibility: Visibility::default(),
        })
    }

    /// Copy with different display state
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Visible series in primary-then-secondary order
    pub fn visible_series(&self) -> impl Iterator<Item = (SeriesKind, &Series)> + '_ {
        [SeriesKind::Primary, SeriesKind::Secondary]
            .into_iter()
            .filter(|kind| self.visibility.shows(*kind))
            .map(|kind| (kind, self.map.series(kind)))
    }
}

/// Identifies one series among a list of loaded files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesRef {
    /// Index of the file in the list
    pub file_index: usize,
    /// Column of the series within the file
    pub kind: SeriesKind,
}

/// Point lookup candidates for every visible series, in file order
pub fn visible_candidates(files: &[MapFile]) -> Vec<Candidate<'_, SeriesRef>> {
    files
        .iter()
        .enumerate()
        .flat_map(|(file_index, file)| {
            file.visible_series().map(move |(kind, series)| {
                Candidate::new(series, SeriesRef { file_index, kind })
            })
        })
        .collect()
}

/// Whether a path carries the `.map` extension (case-insensitive)
pub fn is_map_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case(MAP_EXTENSION))
        .unwrap_or(false)
}

/// Default name for a merged file built from the named gas source.
///
/// ```
/// use fuelmap::map::merged_file_name;
///
/// assert_eq!(merged_file_name("winter.map"), "winterM.map");
/// assert_eq!(merged_file_name("WINTER.MAP"), "WINTERM.map");
/// assert_eq!(merged_file_name("winter"), "winterM.map");
/// ```
pub fn merged_file_name(source_name: &str) -> String {
    let suffix_len = MAP_EXTENSION.len() + 1;
    let stem = match source_name.len().checked_sub(suffix_len) {
        Some(split)
            if source_name.is_char_boundary(split)
                && source_name[split..].eq_ignore_ascii_case(".map") =>
        {
            &source_name[..split]
        }
        _ => source_name,
    };
    format!("{}M.{}", stem, MAP_EXTENSION)
}

/// Write map text to disk
pub fn write_map<P: AsRef<Path>>(path: P, text: &str) -> Result<(), MapError> {
    let path = path.as_ref();
    std::fs::write(path, text)?;
    info!("Wrote {}", path.display());
    Ok(())
}
