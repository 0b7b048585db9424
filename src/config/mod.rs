//! Configuration for component asset handling (`components.toml`).
//!
//! # Example
//!
//! ```toml
//! [assets]
//! directories = ["assets/components", "vendor/ui"]  # searched in order
//! native = "assets/native"                          # always searched last
//! core = "assets/styles"                            # core stylesheets
//! inline = true                                     # <style>/<script> vs <link>/src
//! prefix = "component"                              # asset id prefix
//! public_url = "/assets"                            # base URL for linked assets
//! match = "exact"                                   # "exact" | "prefix"
//! ignore = ["button"]
//! ```
//!
//! Relative paths are resolved against the directory holding the config file.

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::asset::MatchMode;
use crate::log;

/// Default config file name.
pub const CONFIG_FILE: &str = "components.toml";

/// Component assets shipped with this crate; searched after every user directory.
pub const BUNDLED_COMPONENTS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/components");

/// Core stylesheets shipped with this crate.
pub const BUNDLED_STYLES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/styles");

/// Templates of the bundled components.
pub const BUNDLED_TEMPLATES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates/components");

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing components.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentsConfig {
    /// Directory holding the config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub assets: AssetsConfig,
}

/// `[assets]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// User search directories, highest precedence first.
    pub directories: Vec<PathBuf>,

    /// Native component-asset directory, moved behind user directories on freeze.
    pub native: Option<PathBuf>,

    /// Directory of core stylesheets emitted by `core_assets`.
    pub core: Option<PathBuf>,

    /// Emit asset contents inline instead of linking to them.
    pub inline: bool,

    /// Prefix for generated asset ids (`{prefix}-{name}-{hash}`).
    pub prefix: String,

    /// Base URL linked assets are served from.
    pub public_url: String,

    /// How file names are matched against component identifiers.
    #[serde(rename = "match")]
    pub match_mode: MatchMode,

    /// Components whose assets are never emitted.
    pub ignore: Vec<String>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            directories: Vec::new(),
            native: Some(PathBuf::from(BUNDLED_COMPONENTS)),
            core: Some(PathBuf::from(BUNDLED_STYLES)),
            inline: true,
            prefix: "component".to_string(),
            public_url: "/assets".to_string(),
            match_mode: MatchMode::default(),
            ignore: Vec::new(),
        }
    }
}

impl AssetsConfig {
    /// Config with no native or core directory, only the given search roots.
    pub fn with_directories<I, P>(directories: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            directories: directories.into_iter().map(Into::into).collect(),
            native: None,
            core: None,
            ..Self::default()
        }
    }

    /// Resolve relative paths against `root`.
    pub fn normalize(&mut self, root: &Path) {
        for dir in &mut self.directories {
            *dir = join_relative(root, dir);
        }
        if let Some(native) = &mut self.native {
            *native = join_relative(root, native);
        }
        if let Some(core) = &mut self.core {
            *core = join_relative(root, core);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.trim().is_empty() {
            return Err(ConfigError::Validation(
                "assets.prefix must not be empty".to_string(),
            ));
        }
        if self.prefix.contains(char::is_whitespace) {
            return Err(ConfigError::Validation(format!(
                "assets.prefix `{}` must not contain whitespace",
                self.prefix
            )));
        }
        Ok(())
    }
}

fn join_relative(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

impl ComponentsConfig {
    /// Load configuration from `path`.
    ///
    /// A missing file yields the defaults rooted at the file's parent directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let root = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

        let mut config = if path.exists() {
            let content =
                fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
            let (config, ignored) = Self::parse_with_ignored(&content)?;
            if !ignored.is_empty() {
                Self::print_unknown_fields_warning(&ignored, path);
            }
            config
        } else {
            Self::default()
        };

        config.root = root;
        config.assets.normalize(&config.root);
        config.assets.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string (paths left as written).
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.assets.validate()?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AssetsConfig::default();
        assert!(config.inline);
        assert_eq!(config.prefix, "component");
        assert_eq!(config.match_mode, MatchMode::Exact);
        assert!(config.native.is_some());
    }

    #[test]
    fn test_from_str() {
        let config = ComponentsConfig::from_str(
            r#"
            [assets]
            directories = ["ui", "vendor"]
            inline = false
            match = "prefix"
            ignore = ["button"]
            "#,
        )
        .unwrap();

        assert_eq!(
            config.assets.directories,
            vec![PathBuf::from("ui"), PathBuf::from("vendor")]
        );
        assert!(!config.assets.inline);
        assert_eq!(config.assets.match_mode, MatchMode::Prefix);
        assert_eq!(config.assets.ignore, vec!["button".to_string()]);
        assert_eq!(config.assets.prefix, "component");
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let err = ComponentsConfig::from_str("[assets]\nprefix = \"  \"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_normalizes_relative_paths() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "[assets]\ndirectories = [\"ui\", \"/abs/ui\"]\ncore = \"styles\"\nunknown = 1\n",
        )
        .unwrap();

        let config = ComponentsConfig::load(&path).unwrap();
        assert_eq!(config.root, dir.path());
        assert_eq!(config.assets.directories[0], dir.path().join("ui"));
        assert_eq!(config.assets.directories[1], PathBuf::from("/abs/ui"));
        assert_eq!(config.assets.core, Some(dir.path().join("styles")));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ComponentsConfig::load(&dir.path().join(CONFIG_FILE)).unwrap();
        assert!(config.assets.directories.is_empty());
        assert_eq!(
            config.assets.native,
            Some(PathBuf::from(BUNDLED_COMPONENTS))
        );
    }
}
