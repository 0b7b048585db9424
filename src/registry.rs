//! Components called during a render pass, and components whose assets are suppressed.

use std::borrow::Borrow;
use std::fmt;
use std::path::PathBuf;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::asset::VARIANT_DELIMITER;
use crate::component::Component;
use crate::error::ComponentError;

// ============================================================================
// ComponentId
// ============================================================================

/// Normalized component key: trimmed, lower-case, words joined with `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(raw: &str) -> Result<Self, ComponentError> {
        let key = normalize_key(raw);
        if key.is_empty() {
            return Err(ComponentError::invalid("component", "identifier", raw));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ComponentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ComponentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// `"  Toast_Message "` → `"toast-message"`.
pub fn normalize_key(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

// ============================================================================
// ComponentRef
// ============================================================================

/// Handle to a component type: its name and its declared asset fallback.
#[derive(Debug, Clone, Copy)]
pub struct ComponentRef {
    type_name: &'static str,
    declared_assets: fn() -> Vec<PathBuf>,
}

impl ComponentRef {
    pub fn of<T: Component>() -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            declared_assets: T::declared_assets,
        }
    }

    /// Build a reference for a type that only exists as assets.
    pub const fn new(type_name: &'static str, declared_assets: fn() -> Vec<PathBuf>) -> Self {
        Self {
            type_name,
            declared_assets,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn declared_assets(&self) -> Vec<PathBuf> {
        (self.declared_assets)()
    }
}

impl PartialEq for ComponentRef {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
    }
}

impl Eq for ComponentRef {}

// ============================================================================
// CalledComponents
// ============================================================================

/// Components rendered in the current pass, first registration wins.
#[derive(Debug, Clone, Default)]
pub struct CalledComponents {
    called: IndexMap<ComponentId, ComponentRef>,
}

impl CalledComponents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id` as called. Returns `false` if it was already recorded.
    pub fn register(&mut self, id: ComponentId, component: ComponentRef) -> bool {
        if self.called.contains_key(&id) {
            return false;
        }
        self.called.insert(id, component);
        true
    }

    /// Registered components in first-seen order.
    pub fn list_unique(&self) -> impl Iterator<Item = (&ComponentId, &ComponentRef)> {
        self.called.iter()
    }

    pub fn get(&self, id: &str) -> Option<&ComponentRef> {
        self.called.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.called.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.called.len()
    }

    pub fn is_empty(&self) -> bool {
        self.called.is_empty()
    }
}

// ============================================================================
// IgnoredComponents
// ============================================================================

/// Components excluded from asset emission even when called.
#[derive(Debug, Clone, Default)]
pub struct IgnoredComponents {
    ignored: IndexSet<String>,
}

impl IgnoredComponents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore(&mut self, component: &str) -> bool {
        let key = normalize_key(component);
        !key.is_empty() && self.ignored.insert(key)
    }

    /// Ignore the component an asset id (`{prefix}-{name}-{hash}`) belongs to.
    ///
    /// Variant names (`{component}--{variant}`) ignore the base component.
    /// Ids without the prefix are taken to be plain component names.
    pub fn ignore_asset(&mut self, asset_id: &str, prefix: &str) -> bool {
        let Some(rest) = asset_id
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('-'))
        else {
            return self.ignore(asset_id);
        };

        let name = rest.rsplit_once('-').map_or(rest, |(name, _hash)| name);
        // `button--dark` is a variant file of `button`
        let component = name.split(VARIANT_DELIMITER).next().unwrap_or(name);
        self.ignore(component)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ignored.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ignored.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ignored.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ignored.is_empty()
    }
}
