//! latte-assets - component asset resolution and head injection.

mod cli;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use latte_assets::config::ComponentsConfig;
use latte_assets::{debug, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = ComponentsConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    debug!("config"; "search directories: {:?}", config.assets.directories);

    match &cli.command {
        Commands::Inject { html, args } => cli::inject::inject_file(&config, html, args),
        Commands::Resolve {
            component,
            fallback,
            json,
        } => cli::resolve::resolve_component(&config, component, fallback, *json),
        Commands::Render { target } => cli::render::render(&config, target),
    }
}
