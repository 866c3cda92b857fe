//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::config::RenderStyle;

/// Furniture and equipment price catalog: prints the demo catalog and its total price
#[derive(Parser, Debug)]
#[command(name = "pricetree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Settings file (TOML), applied over the global config
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Render style, overrides config
    #[arg(long, value_enum)]
    pub style: Option<RenderStyle>,

    /// Spaces per nesting level in the plain listing, overrides config
    #[arg(long)]
    pub indent: Option<usize>,

    /// Print effective settings as TOML and exit
    #[arg(long)]
    pub show_config: bool,
}
