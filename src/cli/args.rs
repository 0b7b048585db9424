//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Resolve component assets and inject them into rendered pages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: components.toml)
    #[arg(short = 'C', long, global = true, default_value = "components.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Inject the assets of the given components into an HTML document
    #[command(visible_alias = "i")]
    Inject {
        /// HTML document to inject into. Use `-` to read stdin.
        #[arg(value_hint = clap::ValueHint::FilePath)]
        html: PathBuf,

        #[command(flatten)]
        args: InjectArgs,
    },

    /// Print the assets resolved for a component
    #[command(visible_alias = "r")]
    Resolve {
        /// Component identifier (e.g. `notification`)
        component: String,

        /// Use a declared asset file when no search directory matches
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        fallback: Vec<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a bundled component into a page
    Render {
        #[command(subcommand)]
        target: RenderTarget,
    },
}

/// Components `render` can build.
#[derive(Subcommand, Debug, Clone)]
pub enum RenderTarget {
    /// Render a notification
    Notification {
        /// info, success, warning, danger, error or notice
        kind: String,

        message: String,

        /// Additional details shown below the message
        #[arg(short, long)]
        description: Option<String>,

        /// Milliseconds before dismissal (0 = manual)
        #[arg(short, long)]
        timeout: Option<u32>,

        /// Page layout with a `{body}` placeholder
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        layout: Option<PathBuf>,

        #[command(flatten)]
        args: InjectArgs,
    },
}

/// Shared arguments for commands that write a document.
#[derive(clap::Args, Debug, Clone)]
pub struct InjectArgs {
    /// Components rendered by the document
    #[arg(short, long = "component", value_name = "ID")]
    pub components: Vec<String>,

    /// Components whose assets are suppressed
    #[arg(short, long, value_name = "ID")]
    pub ignore: Vec<String>,

    /// Include core stylesheets
    #[arg(long)]
    pub core: bool,

    /// Link assets instead of inlining them
    #[arg(long)]
    pub link: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
