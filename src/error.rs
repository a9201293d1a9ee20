use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Broad class of a JSON decoding failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseCategory {
    /// Malformed JSON text (bad token, trailing characters, invalid UTF-8)
    Syntax,
    /// Well-formed text that could not become a value
    Data,
    /// Input ended in the middle of a value, including an empty file
    Eof,
    /// Failure from the underlying reader during decoding
    Io,
}

impl From<serde_json::error::Category> for ParseCategory {
    fn from(category: serde_json::error::Category) -> Self {
        match category {
            serde_json::error::Category::Syntax => Self::Syntax,
            serde_json::error::Category::Data => Self::Data,
            serde_json::error::Category::Eof => Self::Eof,
            serde_json::error::Category::Io => Self::Io,
        }
    }
}

/// Error from reading a JSON file.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The file could not be opened or its bytes could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file was read but its content is not valid JSON.
    #[error("invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ReadError {
    pub(crate) fn file_access(path: &Path, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn parse(path: &Path, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The path the failed read was given.
    pub fn path(&self) -> &Path {
        match self {
            Self::FileAccess { path, .. } | Self::Parse { path, .. } => path,
        }
    }

    pub fn is_file_access(&self) -> bool {
        matches!(self, Self::FileAccess { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// OS-level error kind for `FileAccess` errors.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::FileAccess { source, .. } => Some(source.kind()),
            Self::Parse { .. } => None,
        }
    }

    /// Decoding failure class for `Parse` errors.
    pub fn parse_category(&self) -> Option<ParseCategory> {
        match self {
            Self::Parse { source, .. } => Some(source.classify().into()),
            Self::FileAccess { .. } => None,
        }
    }

    /// 1-based line and column where decoding stopped, for `Parse` errors.
    ///
    /// serde_json reports column 0 when the failure sits before the first
    /// character of a line (e.g. an empty file).
    pub fn line_column(&self) -> Option<(usize, usize)> {
        match self {
            Self::Parse { source, .. } => Some((source.line(), source.column())),
            Self::FileAccess { .. } => None,
        }
    }
}
