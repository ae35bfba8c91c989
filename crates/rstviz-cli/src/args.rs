//! Command-line argument definitions for the rstviz CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the two input layers, the output paths,
//! the highlighted relation, the configuration file and logging verbosity.

use clap::Parser;

/// Command-line arguments for the rstviz converter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the base-layer XML file
    #[arg(help = "Path to the base-layer XML file")]
    pub base: String,

    /// Path to the RST-layer XML file
    #[arg(help = "Path to the RST-layer XML file")]
    pub rst: String,

    /// Path to the output DOT file
    #[arg(short, long, default_value = "out.dot")]
    pub output: String,

    /// Also render an image with Graphviz (png, svg, pdf or jpg by extension)
    #[arg(long)]
    pub image: Option<String>,

    /// Relation to highlight, overriding the configuration file
    #[arg(long)]
    pub highlight: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
