//! Template rendering for components.
//!
//! Components only depend on [`TemplateEngine`]; [`TeraEngine`] is the
//! bundled implementation. Template sources are read once per path.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use tera::{Context, Tera};

use crate::error::ComponentError;

/// Renders a template file with a set of variables.
pub trait TemplateEngine {
    fn render(&self, template: &Path, vars: &Context) -> Result<String, ComponentError>;
}

/// Tera-backed engine with HTML auto-escaping.
#[derive(Debug, Default)]
pub struct TeraEngine {
    sources: DashMap<PathBuf, Arc<str>>,
    raw: bool,
}

impl TeraEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable auto-escaping of interpolated values.
    pub fn without_autoescape(mut self) -> Self {
        self.raw = true;
        self
    }

    /// Render a template given as a string.
    pub fn render_str(&self, source: &str, vars: &Context) -> Result<String, tera::Error> {
        Tera::one_off(source, vars, !self.raw)
    }

    fn source(&self, template: &Path) -> Result<Arc<str>, ComponentError> {
        if let Some(source) = self.sources.get(template) {
            return Ok(Arc::clone(source.value()));
        }

        let source: Arc<str> = std::fs::read_to_string(template)
            .map_err(|err| ComponentError::Io(template.to_path_buf(), err))?
            .into();
        self.sources.insert(template.to_path_buf(), Arc::clone(&source));
        Ok(source)
    }
}

impl TemplateEngine for TeraEngine {
    fn render(&self, template: &Path, vars: &Context) -> Result<String, ComponentError> {
        let source = self.source(template)?;
        self.render_str(&source, vars)
            .map_err(|source| ComponentError::Template {
                path: template.to_path_buf(),
                source,
            })
    }
}
