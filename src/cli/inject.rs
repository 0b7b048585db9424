//! `inject` command.

use std::path::Path;

use anyhow::Result;
use latte_assets::config::ComponentsConfig;
use latte_assets::debug;

use super::{InjectArgs, read_input, render_context, write_document};

pub fn inject_file(config: &ComponentsConfig, html: &Path, args: &InjectArgs) -> Result<()> {
    let source = read_input(html)?;
    let mut ctx = render_context(config, args)?;
    debug!("inject"; "{} component(s) requested", ctx.called().len());
    write_document(&mut ctx, &source, args)
}
