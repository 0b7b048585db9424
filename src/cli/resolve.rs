//! `resolve` command.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use latte_assets::config::ComponentsConfig;
use latte_assets::registry::ComponentId;
use latte_assets::{RenderContext, component};
use owo_colors::OwoColorize;

pub fn resolve_component(
    config: &ComponentsConfig,
    raw: &str,
    fallback: &[PathBuf],
    json: bool,
) -> Result<()> {
    let id = ComponentId::new(raw)?;
    let mut ctx = RenderContext::new(&config.assets)?;

    // Explicit fallback paths win over a bundled component's declared files
    let fallback = if fallback.is_empty() {
        component::builtin(id.as_str())
            .map(|c| c.declared_assets())
            .unwrap_or_default()
    } else {
        fallback.to_vec()
    };

    let assets = ctx
        .component_assets(&id, &fallback)
        .with_context(|| format!("Failed to resolve assets for `{id}`"))?;

    let mut stdout = io::stdout().lock();
    if json {
        let list: Vec<_> = assets.values().collect();
        serde_json::to_writer_pretty(&mut stdout, &list)?;
        writeln!(stdout)?;
        return Ok(());
    }

    if assets.is_empty() {
        writeln!(stdout, "{} no assets for `{}`", "!".yellow(), id)?;
        return Ok(());
    }
    for asset in assets.values() {
        writeln!(
            stdout,
            "{}  {:<10}  {}",
            asset.id().bright_green(),
            asset.kind().extension(),
            asset.path().display()
        )?;
    }
    Ok(())
}
