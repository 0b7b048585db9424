//! `render` command.

use std::path::Path;

use anyhow::{Context, Result};
use latte_assets::config::ComponentsConfig;
use latte_assets::{Component, Notification, TeraEngine};

use super::{InjectArgs, RenderTarget, read_input, render_context, write_document};

/// Layout used when no `--layout` is given.
const DEFAULT_LAYOUT: &str = "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n</head>\n<body>\n{body}\n</body>\n</html>\n";

/// Placeholder replaced by the rendered component.
const BODY_PLACEHOLDER: &str = "{body}";

pub fn render(config: &ComponentsConfig, target: &RenderTarget) -> Result<()> {
    match target {
        RenderTarget::Notification {
            kind,
            message,
            description,
            timeout,
            layout,
            args,
        } => {
            let mut notification = Notification::new(kind, message)?.with_timeout(*timeout);
            if let Some(description) = description {
                notification = notification.with_description(description);
            }
            render_into_layout(config, &notification, layout.as_deref(), args)
        }
    }
}

fn render_into_layout<C: Component>(
    config: &ComponentsConfig,
    component: &C,
    layout: Option<&Path>,
    args: &InjectArgs,
) -> Result<()> {
    let layout = match layout {
        Some(path) => read_input(path)?,
        None => DEFAULT_LAYOUT.to_string(),
    };

    let mut ctx = render_context(config, args)?;
    let body = component
        .render(&mut ctx, &TeraEngine::new())
        .with_context(|| format!("Failed to render {}", C::TYPE))?;

    let html = if layout.contains(BODY_PLACEHOLDER) {
        layout.replacen(BODY_PLACEHOLDER, &body, 1)
    } else {
        layout + &body
    };
    write_document(&mut ctx, &html, args)
}
