//! Typed asset records and their HTML tags.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{AssetKind, minify, version};
use crate::error::AssetError;
use crate::utils::hash;
use crate::utils::html::{escape_attr, guard_raw_text};

/// Settings shared by every asset created in one context.
#[derive(Debug, Clone)]
pub struct AssetOptions {
    /// Emit file contents instead of a link.
    pub inline: bool,
    /// Asset id prefix.
    pub prefix: String,
    /// Base URL for linked assets.
    pub public_url: String,
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            inline: true,
            prefix: "component".to_string(),
            public_url: "/assets".to_string(),
        }
    }
}

/// A discovered stylesheet or script.
///
/// The id has the form `{prefix}-{name}-{hash}` where `name` is the file
/// name up to its first `.` and `hash` is derived from the file contents,
/// so the same file always yields the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
    id: String,
    path: PathBuf,
    kind: AssetKind,
    inline: bool,
    prefix: String,
    #[serde(skip)]
    href: String,
    #[serde(skip)]
    source: String,
}

impl Asset {
    /// Read and classify `path`.
    ///
    /// Readability is checked before the extension, matching resolution order.
    pub fn new(path: impl AsRef<Path>, options: &AssetOptions) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|err| AssetError::unreadable(path, Some(err)))?;
        let kind = AssetKind::from_path(path)?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = file_name.split('.').next().unwrap_or_default();
        let digest = hash::content_fingerprint(&[kind.extension().as_bytes(), bytes.as_slice()]);
        let id = format!("{}-{}-{}", options.prefix, name, digest);

        let base = format!("{}/{}", options.public_url.trim_end_matches('/'), file_name);
        let href = version::versioned_url(&base, &bytes);

        Ok(Self {
            id,
            path: path.to_path_buf(),
            kind,
            inline: options.inline,
            prefix: options.prefix.clone(),
            href,
            source: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    pub fn is_inline(&self) -> bool {
        self.inline
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// URL used when the asset is linked rather than inlined.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Render the `<style>`, `<script>` or `<link>` tag for this asset.
    pub fn to_tag(&self) -> String {
        let id = escape_attr(&self.id);

        if self.inline {
            let body = minify::minify(self.kind, &self.path, &self.source)
                .unwrap_or_else(|| self.source.trim().to_string());
            let tag = self.kind.inline_tag();
            return format!(
                "<{tag} id=\"{id}\">{}</{tag}>",
                guard_raw_text(&body, tag)
            );
        }

        let href = escape_attr(&self.href);
        match self.kind {
            AssetKind::Stylesheet => format!("<link rel=\"stylesheet\" id=\"{id}\" href=\"{href}\">"),
            AssetKind::Script => format!("<script id=\"{id}\" src=\"{href}\" defer></script>"),
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_tag())
    }
}
