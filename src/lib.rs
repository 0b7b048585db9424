//! Component asset registration, resolution and `<head>` injection for
//! server-rendered templates.
//!
//! Components declare stylesheets and scripts next to their templates. A
//! [`RenderContext`] records which components a page rendered, resolves
//! their assets from the configured directories, and injects one tag per
//! asset into the document head.

pub mod asset;
pub mod component;
pub mod config;
pub mod context;
pub mod error;
pub mod inject;
pub mod logger;
pub mod registry;
pub mod template;
pub mod utils;

pub use asset::{Asset, AssetKind, AssetSet, MatchMode};
pub use component::{Component, Notification, NotificationKind};
pub use config::ComponentsConfig;
pub use context::RenderContext;
pub use error::{AssetError, ComponentError};
pub use registry::{ComponentId, ComponentRef};
pub use template::{TemplateEngine, TeraEngine};
