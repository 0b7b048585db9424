//! Error types for asset resolution and component rendering.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// AssetError
// ============================================================================

/// Errors raised while configuring search directories or resolving assets.
///
/// None of these are retried: a failed resolution leaves the cache untouched
/// and the caller is expected to abort the current render.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error(
        "asset directories are frozen after the first resolution, cannot add `{}`",
        .0.display()
    )]
    Frozen(PathBuf),

    #[error("asset file `{}` is not readable", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("unsupported asset extension `{ext}` for `{}`", .path.display())]
    UnsupportedKind { path: PathBuf, ext: String },

    #[error("IO error when listing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid asset match pattern")]
    Pattern(#[from] glob::PatternError),
}

impl AssetError {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, source: Option<std::io::Error>) -> Self {
        Self::Unreadable {
            path: path.into(),
            source,
        }
    }
}

// ============================================================================
// ComponentError
// ============================================================================

/// Errors raised while constructing or rendering a component.
#[derive(Debug, Error)]
pub enum ComponentError {
    /// A component was given a value outside its accepted set.
    #[error("invalid {field} `{value}` for {component}")]
    InvalidValue {
        component: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("failed to render template `{}`", .path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: tera::Error,
    },

    #[error("IO error when reading template `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to serialize component")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Asset(#[from] AssetError),
}

impl ComponentError {
    pub(crate) fn invalid(
        component: &'static str,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            component,
            field,
            value: value.into(),
        }
    }
}
