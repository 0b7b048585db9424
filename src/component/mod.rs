//! Renderable components.
//!
//! A component is a serializable value with a template. Rendering one
//! records it in the [`RenderContext`], so its stylesheets and scripts end
//! up in the page head when the context injects assets.
//!
//! ```ignore
//! let mut ctx = RenderContext::new(&config.assets)?;
//! let engine = TeraEngine::new();
//!
//! let body = Notification::new("success", "Saved")?.render(&mut ctx, &engine)?;
//! let page = ctx.inject(&layout.replace("{body}", &body))?;
//! ```

mod attributes;
mod button;
mod notification;
mod runtime;

pub use attributes::Attributes;
pub use button::Button;
pub use notification::{Notification, NotificationKind};
pub use runtime::ComponentRuntime;

use std::path::PathBuf;

use serde::Serialize;
use tera::Context;

use crate::context::RenderContext;
use crate::error::ComponentError;
use crate::registry::{ComponentId, ComponentRef};
use crate::template::TemplateEngine;
use crate::utils::hash;

/// A template-backed UI fragment that owns stylesheets and scripts.
pub trait Component: Serialize {
    /// Component identifier. Also the template variable holding the component.
    const TYPE: &'static str;

    /// Asset files used when no search directory has any for [`Self::TYPE`].
    fn declared_assets() -> Vec<PathBuf>;

    fn template_path(&self) -> PathBuf;

    /// Attributes of the component's root element.
    fn attributes(&self) -> &Attributes;

    /// Render the template and register the component with `ctx`.
    ///
    /// Template variables:
    /// - `{TYPE}`: the serialized component
    /// - `component_id`: unique to this render
    /// - `attributes`: root element attribute string
    fn render<E>(&self, ctx: &mut RenderContext, engine: &E) -> Result<String, ComponentError>
    where
        Self: Sized,
        E: TemplateEngine + ?Sized,
    {
        let id = ComponentId::new(Self::TYPE)?;
        let value = serde_json::to_value(self)?;
        let token = ctx.next_render_token();
        let component_id = format!(
            "{}-{}",
            id,
            hash::fingerprint(&format!("{value}#{token}"))
        );

        ctx.register(id.clone(), ComponentRef::of::<Self>());

        let mut vars = Context::new();
        vars.insert(id.as_str(), &value);
        vars.insert("component_id", &component_id);
        vars.insert("attributes", &self.attributes().to_html());
        engine.render(&self.template_path(), &vars)
    }
}

/// Reference to a bundled component type by identifier.
pub fn builtin(id: &str) -> Option<ComponentRef> {
    (id == Notification::TYPE).then(ComponentRef::of::<Notification>)
}
