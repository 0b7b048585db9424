//! Asset kind definitions.

use std::path::Path;

use serde::Serialize;

use crate::error::AssetError;

/// Kind of component asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// `.css` file.
    Stylesheet,
    /// `.js` file.
    Script,
}

impl AssetKind {
    /// Classify a file by extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, AssetError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "css" => Ok(Self::Stylesheet),
            "js" => Ok(Self::Script),
            _ => Err(AssetError::UnsupportedKind {
                path: path.to_path_buf(),
                ext,
            }),
        }
    }

    /// Canonical file extension.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Stylesheet => "css",
            Self::Script => "js",
        }
    }

    /// Element used when the asset is inlined.
    pub const fn inline_tag(self) -> &'static str {
        match self {
            Self::Stylesheet => "style",
            Self::Script => "script",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(
            AssetKind::from_path(Path::new("a/notification.css")).unwrap(),
            AssetKind::Stylesheet
        );
        assert_eq!(
            AssetKind::from_path(Path::new("a/notification.JS")).unwrap(),
            AssetKind::Script
        );
    }

    #[test]
    fn test_unsupported() {
        let err = AssetKind::from_path(Path::new("a/notification.latte")).unwrap_err();
        assert!(matches!(err, AssetError::UnsupportedKind { ref ext, .. } if ext == "latte"));

        let err = AssetKind::from_path(Path::new("a/README")).unwrap_err();
        assert!(matches!(err, AssetError::UnsupportedKind { ref ext, .. } if ext.is_empty()));
    }
}
