use crate::numeric::NumericParseError;

/// Layout violations found while parsing map text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Wrong total number of lines
    #[error("expected {expected} lines, found {found}")]
    LineCount {
        /// Required line count
        expected: usize,
        /// Line count of the input
        found: usize,
    },

    /// A record contains a token that is not a decimal number
    #[error("invalid numeric data in lines {first_line}-{last_line}: {source}")]
    Record {
        /// First line of the failing record (1-based)
        first_line: usize,
        /// Last line of the failing record (1-based, inclusive)
        last_line: usize,
        /// The underlying decode failure
        #[source]
        source: NumericParseError,
    },
}

/// Errors that can occur while reading, parsing or merging map files
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// I/O error reading or writing a map file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The text does not follow the 480-line record layout
    #[error("Invalid map layout: {0}")]
    Layout(#[from] LayoutError),

    /// Merge inputs have series of different lengths
    #[error("Length mismatch: primary series has {primary} points, secondary series has {secondary}")]
    LengthMismatch {
        /// Length of the primary series taken from the first source
        primary: usize,
        /// Length of the secondary series taken from the second source
        secondary: usize,
    },
}

impl MapError {
    /// The layout error, if this is a layout failure
    pub fn as_layout(&self) -> Option<&LayoutError> {
        match self {
            MapError::Layout(err) => Some(err),
            _ => None,
        }
    }
}
