//! Command-line interface module.

mod args;
pub mod inject;
pub mod render;
pub mod resolve;

pub use args::{Cli, Commands, InjectArgs, RenderTarget};

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use latte_assets::config::ComponentsConfig;
use latte_assets::registry::{ComponentId, ComponentRef};
use latte_assets::{RenderContext, component, inject as head, log};

/// Build a render context for `args` from the loaded configuration.
pub fn render_context(config: &ComponentsConfig, args: &InjectArgs) -> Result<RenderContext> {
    let mut assets = config.assets.clone();
    if args.link {
        assets.inline = false;
    }
    assets.ignore.extend(args.ignore.iter().cloned());

    let mut ctx = RenderContext::new(&assets).context("Failed to set up asset directories")?;
    for raw in &args.components {
        let id = ComponentId::new(raw)?;
        let component = component::builtin(id.as_str())
            .unwrap_or(ComponentRef::new("cli", no_declared_assets));
        ctx.register(id, component);
    }
    Ok(ctx)
}

fn no_declared_assets() -> Vec<std::path::PathBuf> {
    Vec::new()
}

/// Inject core and component assets into `html` and write the result.
pub fn write_document(ctx: &mut RenderContext, html: &str, args: &InjectArgs) -> Result<()> {
    let html = if args.core {
        let inline = ctx.options().inline;
        let core: Vec<String> = ctx
            .core_assets(inline)
            .context("Failed to load core assets")?
            .values()
            .map(|asset| asset.to_tag())
            .collect();
        if !core.is_empty() {
            log!("inject"; "{} core asset(s)", core.len());
        }
        head::inject(html, &core)
    } else {
        html.to_string()
    };

    let document = ctx.inject(&html).context("Failed to resolve component assets")?;

    match &args.output {
        Some(path) => {
            fs::write(path, &document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log!("inject"; "wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Read a file, or stdin for `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
