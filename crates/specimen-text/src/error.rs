use owned_ttf_parser::FaceParsingError;
use specimen_assets::AssetError;

use crate::face::FontFormat;

/// Why a byte buffer could not become a [`FontFace`](crate::FontFace).
#[derive(Debug, thiserror::Error)]
pub enum FaceError {
    /// The container is recognised but cannot be parsed directly (WOFF, WOFF2) or is unknown.
    #[error("unsupported font format ({0:?})")]
    Unsupported(FontFormat),

    /// The sfnt tables are malformed.
    #[error("malformed font data: {0}")]
    Malformed(#[from] FaceParsingError),
}

/// Why a font load did not produce a face.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The background execution context is unavailable; no work was scheduled.
    #[error("font engine initialization failed: {message}")]
    EngineInit { message: String },

    /// The locator's bytes could not be read.
    #[error("failed to read font '{locator}': {source}")]
    Read {
        locator: String,
        #[source]
        source: AssetError,
    },

    /// The bytes were read but are not a usable font.
    #[error("failed to parse font '{locator}': {source}")]
    Parse {
        locator: String,
        #[source]
        source: FaceError,
    },
}

/// Plain discriminant of [`LoadError`] for hosts that only branch on the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadErrorKind {
    EngineInit,
    Read,
    Parse,
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::EngineInit { .. } => LoadErrorKind::EngineInit,
            LoadError::Read { .. } => LoadErrorKind::Read,
            LoadError::Parse { .. } => LoadErrorKind::Parse,
        }
    }
}

impl std::fmt::Display for LoadErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadErrorKind::EngineInit => write!(f, "engine initialization failure"),
            LoadErrorKind::Read => write!(f, "read failure"),
            LoadErrorKind::Parse => write!(f, "parse failure"),
        }
    }
}

/// Result type for font loading.
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_message() {
        let err = LoadError::Read {
            locator: "missing.ttf".to_string(),
            source: AssetError::NotFound {
                path: "missing.ttf".to_string(),
            },
        };
        assert_eq!(err.kind(), LoadErrorKind::Read);
        assert_eq!(
            err.to_string(),
            "failed to read font 'missing.ttf': resource not found: missing.ttf"
        );

        let err = LoadError::Parse {
            locator: "a.woff2".to_string(),
            source: FaceError::Unsupported(FontFormat::Woff2),
        };
        assert_eq!(err.kind(), LoadErrorKind::Parse);
        assert_eq!(
            err.to_string(),
            "failed to parse font 'a.woff2': unsupported font format (Woff2)"
        );
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(LoadErrorKind::Parse.to_string(), "parse failure");
    }
}
