//! ASCII-art masks.
//!
//! An art mask is a grid of characters, one row per line. A space is an empty
//! cell; any other character marks a sphere. Rows may have different lengths,
//! cells past the end of a row read as space.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while loading an art mask.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("art mask has no rows")]
    EmptyArt,

    #[error("art mask has {rows} row(s) but every row is empty")]
    ZeroWidth { rows: usize },

    #[error("failed to read art file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for scene loading.
pub type SceneResult<T> = Result<T, SceneError>;

/// The card art shipped with the benchmark.
pub const DEFAULT_ART: &str = "
    1111
   1    1
  1           11
  1          1  1
  1     11  1    1
  1      1  1    1
   1     1   1  1
    11111     11   ";

/// A validated art mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Art {
    rows: Vec<Vec<char>>,
}

impl Art {
    /// Parse an art mask from text.
    ///
    /// Fails if the text has no rows at all or if every row is empty. A grid
    /// made only of spaces is valid and describes an empty scene.
    pub fn parse(text: &str) -> SceneResult<Self> {
        Self::from_rows(text.lines())
    }

    /// Build an art mask from individual rows.
    pub fn from_rows<I, S>(rows: I) -> SceneResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<Vec<char>> = rows
            .into_iter()
            .map(|row| row.as_ref().trim_end_matches('\r').chars().collect())
            .collect();

        if rows.is_empty() {
            return Err(SceneError::EmptyArt);
        }
        if rows.iter().all(|row| row.is_empty()) {
            return Err(SceneError::ZeroWidth { rows: rows.len() });
        }

        Ok(Self { rows })
    }

    /// Read and parse an art file.
    pub fn from_file(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Read art file {} ({} bytes)", path.display(), text.len());
        Self::parse(&text)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Iterate `(row, col)` of every marker cell, rows top to bottom and
    /// columns left to right.
    pub fn markers(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &c)| c != ' ')
                .map(move |(col, _)| (row, col))
        })
    }
}

impl Default for Art {
    fn default() -> Self {
        // DEFAULT_ART always has rows and markers.
        Self {
            rows: DEFAULT_ART.lines().map(|row| row.chars().collect()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Character at (row, col), space when out of range.
    fn cell(art: &Art, row: usize, col: usize) -> char {
        art.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(' ')
    }

    #[test]
    fn test_parse_counts_markers() {
        let art = Art::parse("1 1\n 1 \n   ").unwrap();
        assert_eq!(art.height(), 3);
        assert_eq!(art.width(), 3);
        assert_eq!(art.markers().count(), 3);
    }

    #[test]
    fn test_any_non_space_is_a_marker() {
        let art = Art::parse("#.x\t").unwrap();
        assert_eq!(art.markers().collect::<Vec<_>>(), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn test_ragged_rows_read_as_space() {
        let art = Art::parse("1\n111\n11").unwrap();
        assert_eq!(art.width(), 3);
        assert_eq!(cell(&art, 0, 2), ' ');
        assert_eq!(cell(&art, 2, 1), '1');
        assert_eq!(cell(&art, 7, 0), ' ');
        assert_eq!(art.markers().count(), 6);
    }

    #[test]
    fn test_crlf_line_endings() {
        let art = Art::parse("1 \r\n 1\r\n").unwrap();
        assert_eq!(art.height(), 2);
        assert_eq!(cell(&art, 0, 1), ' ');
        assert_eq!(art.markers().count(), 2);
    }

    #[test]
    fn test_all_space_grid_is_valid() {
        let art = Art::parse("     \n     \n     ").unwrap();
        assert_eq!(art.markers().count(), 0);
    }

    #[test]
    fn test_empty_text_is_rejected() {
        assert!(matches!(Art::parse(""), Err(SceneError::EmptyArt)));
    }

    #[test]
    fn test_zero_width_rows_are_rejected() {
        assert!(matches!(
            Art::parse("\n\n\n"),
            Err(SceneError::ZeroWidth { rows: 3 })
        ));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("rays-core-no-such-art-file");
        let err = Art::from_file(&path).unwrap_err();
        assert!(matches!(err, SceneError::Io { .. }));
        assert!(err.to_string().contains("rays-core-no-such-art-file"));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("rays-core-art-{}", std::process::id()));
        fs::write(&path, "11\n 1\n").unwrap();

        let art = Art::from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(art.height(), 2);
        assert_eq!(art.markers().count(), 3);
    }

    #[test]
    fn test_default_art() {
        let art = Art::default();
        assert_eq!(art.height(), 9);
        assert_eq!(art.width(), 19);
        assert!(art.markers().count() > 0);
        assert_eq!(Art::parse(DEFAULT_ART).unwrap(), art);
    }
}
