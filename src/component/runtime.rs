//! Helpers exposed to templates.

use super::Notification;
use crate::error::ComponentError;

#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentRuntime;

impl ComponentRuntime {
    pub fn new() -> Self {
        Self
    }

    /// Build a toast notification of the given kind.
    pub fn toast(&self, kind: &str, title: &str) -> Result<Notification, ComponentError> {
        Notification::new(kind, title)
    }
}
