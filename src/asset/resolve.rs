//! Component → asset resolution with a per-component cache.
//!
//! Resolution order for a component id:
//!
//! 1. cached result, if any
//! 2. the first search directory containing a matching file (later
//!    directories are never consulted once one matches)
//! 3. the component's declared fallback paths
//!
//! Every candidate must be readable and be a `.css` or `.js` file, otherwise
//! the whole resolution fails and nothing is cached.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use super::directory::DirectoryRegistry;
use super::matcher::{ComponentMatcher, MatchMode};
use super::{Asset, AssetOptions};
use crate::debug;
use crate::error::AssetError;
use crate::registry::{ComponentId, normalize_key};

/// Assets keyed by asset id, in discovery order.
pub type AssetSet = IndexMap<String, Asset>;

/// Resolves component ids to assets, memoizing each result for its lifetime.
#[derive(Debug)]
pub struct AssetResolver {
    directories: DirectoryRegistry,
    options: AssetOptions,
    match_mode: MatchMode,
    cache: FxHashMap<String, AssetSet>,
}

impl AssetResolver {
    pub fn new(directories: DirectoryRegistry, options: AssetOptions, match_mode: MatchMode) -> Self {
        Self {
            directories,
            options,
            match_mode,
            cache: FxHashMap::default(),
        }
    }

    pub fn directories(&self) -> &DirectoryRegistry {
        &self.directories
    }

    pub fn directories_mut(&mut self) -> &mut DirectoryRegistry {
        &mut self.directories
    }

    pub fn options(&self) -> &AssetOptions {
        &self.options
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    pub fn is_cached(&self, id: &str) -> bool {
        self.cache.contains_key(&normalize_key(id))
    }

    /// Resolve the assets of component `id`.
    ///
    /// Freezes the directory registry on first use.
    pub fn resolve(
        &mut self,
        id: &ComponentId,
        fallback: &[PathBuf],
    ) -> Result<&AssetSet, AssetError> {
        let id = id.as_str();
        if self.cache.contains_key(id) {
            debug!("resolve"; "cache hit: {}", id);
            return Ok(&self.cache[id]);
        }

        let matcher = ComponentMatcher::new(self.match_mode, id)?;
        let mut candidates = Vec::new();
        for dir in self.directories.freeze_and_list() {
            let found = matcher.find_in(dir.path());
            if !found.is_empty() {
                debug!("resolve"; "{}: {} file(s) in {}", id, found.len(), dir.path().display());
                candidates = found;
                break;
            }
        }

        if candidates.is_empty() && !fallback.is_empty() {
            debug!("resolve"; "{}: using {} declared asset(s)", id, fallback.len());
            candidates = fallback.to_vec();
        }

        let set = classify_all(&candidates, &self.options)?;
        Ok(self.cache.entry(id.to_string()).or_insert(set))
    }
}

/// Wrap each path in an [`Asset`], keeping the first asset for a repeated id.
pub fn classify_all<P: AsRef<Path>>(
    paths: &[P],
    options: &AssetOptions,
) -> Result<AssetSet, AssetError> {
    let mut set = AssetSet::with_capacity(paths.len());
    for path in paths {
        let asset = Asset::new(path, options)?;
        set.entry(asset.id().to_string()).or_insert(asset);
    }
    Ok(set)
}
