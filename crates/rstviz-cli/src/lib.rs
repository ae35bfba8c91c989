//! CLI logic for the rstviz converter.
//!
//! This module contains the core CLI logic: it reads the two XML layers,
//! converts them to DOT, and writes the artifacts.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use rstviz::{Converter, RstVizError, export};

/// Run the rstviz CLI application
///
/// This function reads both input layers, converts them through the rstviz
/// pipeline, and writes the resulting DOT text to the output file. With
/// `--image`, the graph is also rendered by Graphviz.
///
/// Nothing is written unless the whole conversion succeeds.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `RstVizError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing and reference errors in either layer
/// - A missing or failing Graphviz renderer
pub fn run(args: &Args) -> Result<(), RstVizError> {
    info!(
        base_path = args.base,
        rst_path = args.rst,
        output_path = args.output;
        "Converting document"
    );

    // Load configuration
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(relation) = &args.highlight {
        app_config = app_config.with_highlight(relation.as_str());
    }

    // Fail fast when an image is requested but cannot be produced
    if args.image.is_some() {
        image::ensure_available()?;
    }

    // Read input files
    let base = fs::read_to_string(&args.base)?;
    let rst = fs::read_to_string(&args.rst)?;

    let converter = Converter::new(app_config);
    let document = converter.parse(&base, &rst)?;
    let dot = converter.render_dot(&document)?;

    if let Some(image_path) = &args.image {
        image::render(&dot, image_path)?;
        info!(image_file = image_path; "Image rendered successfully");
    }

    export::write_atomic(&args.output, dot.as_bytes())?;

    info!(output_file = args.output; "DOT exported successfully");

    Ok(())
}

#[cfg(feature = "graphviz")]
mod image {
    use std::path::Path;

    use rstviz::{RstVizError, render};

    pub fn ensure_available() -> Result<(), RstVizError> {
        render::ensure_renderer_available()
    }

    pub fn render(dot: &str, path: &str) -> Result<(), RstVizError> {
        render::render(dot, Path::new(path))
    }
}

#[cfg(not(feature = "graphviz"))]
mod image {
    use rstviz::RstVizError;

    fn unsupported() -> RstVizError {
        RstVizError::Render("image output requires the `graphviz` feature".to_string())
    }

    pub fn ensure_available() -> Result<(), RstVizError> {
        Err(unsupported())
    }

    pub fn render(_dot: &str, _path: &str) -> Result<(), RstVizError> {
        Err(unsupported())
    }
}
