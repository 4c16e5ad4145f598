//! CLI argument parsing for whittle.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::elements::SeedElement;

/// Whittle: LLM-assisted specification generator for interactive prototypes.
///
/// Prototype behavior is expressed as five JSON files in a specification
/// directory: interaction elements, states, transitions, visualization
/// elements and visualization arrays. Whittle sends a free-text description
/// together with reference documentation and the current files to a chat
/// completion service, then writes the returned files back atomically.
#[derive(Parser, Debug)]
#[command(name = "whittle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for whittle.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate updated specification files from a description.
    ///
    /// Loads reference documents and the current specification files, sends
    /// them with the description to the configured model, and writes the
    /// returned categories back. Prompts for a description when none is
    /// given on the command line.
    Generate(GenerateArgs),

    /// Print the seed JSON for named interaction elements.
    ///
    /// Renders the skeleton a prototype starts from without calling any
    /// service. Useful for wiring up elements before the first generation.
    Preview(PreviewArgs),

    /// Summarize the specification directory.
    ///
    /// Shows which category files exist, whether they hold valid JSON,
    /// and when they were last modified.
    Status(StatusArgs),
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Directory holding the five specification JSON files.
    #[arg(long, value_name = "DIR")]
    pub spec_dir: PathBuf,

    /// What the interaction should do. Prompted for when omitted.
    #[arg(short, long)]
    pub description: Option<String>,

    /// Directory holding reference documents (overrides config).
    #[arg(long, value_name = "DIR")]
    pub docs_dir: Option<PathBuf>,

    /// Model to use (overrides config).
    #[arg(long)]
    pub model: Option<String>,

    /// Path to a config file (default: ./whittle.yaml when present).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Prepare and describe the request without calling the service.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `preview` command.
#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Description of the interaction being prototyped.
    #[arg(short, long)]
    pub description: String,

    /// Element to seed, as NAME or NAME:KIND. May be repeated.
    ///
    /// Kinds: Button, ToggleButton, Slider, Rotatable, TouchArea, Movable.
    /// A bare NAME seeds a Button.
    #[arg(long = "element", value_name = "NAME[:KIND]")]
    pub elements: Vec<SeedElement>,

    /// Also summarize the current files in this specification directory.
    #[arg(long, value_name = "DIR")]
    pub spec_dir: Option<PathBuf>,
}

/// Arguments for the `status` command.
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Directory holding the five specification JSON files.
    #[arg(long, value_name = "DIR")]
    pub spec_dir: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
