//! Image rendering through the Graphviz `dot` executable.
//!
//! The DOT text is parsed with `graphviz-rust`, handed to `dot`, and the
//! resulting bytes are written atomically to the requested path.

use std::{path::Path, process::Command};

use dot_structures::Graph;
use graphviz_rust::{
    cmd::{CommandArg, Format},
    exec, parse,
    printer::PrinterContext,
};
use log::{debug, info};

use crate::{RstVizError, export};

const DOT_COMMAND: &str = "dot";

/// Output formats selectable by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
    Pdf,
    Jpeg,
}

impl ImageFormat {
    /// Picks the format from the extension of `path`, case-insensitively.
    ///
    /// Unknown or missing extensions render as PNG.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("svg") => ImageFormat::Svg,
            Some("pdf") => ImageFormat::Pdf,
            Some("jpg" | "jpeg") => ImageFormat::Jpeg,
            _ => ImageFormat::Png,
        }
    }
}

impl From<ImageFormat> for CommandArg {
    fn from(format: ImageFormat) -> Self {
        let format = match format {
            ImageFormat::Png => Format::Png,
            ImageFormat::Svg => Format::Svg,
            ImageFormat::Pdf => Format::Pdf,
            ImageFormat::Jpeg => Format::Jpeg,
        };
        CommandArg::Format(format)
    }
}

/// Checks that the `dot` executable can be run.
///
/// # Errors
///
/// Returns [`RstVizError::RendererUnavailable`] if `dot -V` cannot be
/// spawned or exits unsuccessfully.
pub fn ensure_renderer_available() -> Result<(), RstVizError> {
    match Command::new(DOT_COMMAND).arg("-V").output() {
        Ok(output) if output.status.success() => {
            debug!(renderer = DOT_COMMAND; "Graphviz renderer found");
            Ok(())
        }
        Ok(output) => {
            debug!(
                renderer = DOT_COMMAND, status:% = output.status;
                "Graphviz renderer check failed"
            );
            Err(RstVizError::RendererUnavailable(DOT_COMMAND.to_string()))
        }
        Err(err) => {
            debug!(renderer = DOT_COMMAND, err:%; "Graphviz renderer could not be spawned");
            Err(RstVizError::RendererUnavailable(DOT_COMMAND.to_string()))
        }
    }
}

/// Renders `dot` to an image at `path`.
///
/// # Errors
///
/// Returns [`RstVizError::Render`] if the DOT text is not a digraph Graphviz
/// accepts or `dot` fails, and [`RstVizError::Io`] if the image cannot be
/// written.
pub fn render(dot: &str, path: &Path) -> Result<(), RstVizError> {
    let format = ImageFormat::from_path(path);
    info!(path = path.display().to_string(), format:?; "Rendering image");

    let graph = parse(dot).map_err(RstVizError::Render)?;
    if !matches!(graph, Graph::DiGraph { .. }) {
        return Err(RstVizError::Render("expected a directed graph".to_string()));
    }

    let bytes = exec(graph, &mut PrinterContext::default(), vec![format.into()])
        .map_err(|err| RstVizError::Render(err.to_string()))?;

    export::write_atomic(path, &bytes)?;

    info!(path = path.display().to_string(), bytes = bytes.len(); "Image rendered");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ImageFormat::from_path(Path::new("a.svg")), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_path(Path::new("a.PDF")), ImageFormat::Pdf);
        assert_eq!(ImageFormat::from_path(Path::new("a.jpg")), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_path(Path::new("a.jpeg")), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_path(Path::new("a.png")), ImageFormat::Png);
    }

    #[test]
    fn test_format_defaults_to_png() {
        assert_eq!(ImageFormat::from_path(Path::new("diagram")), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path(Path::new("a.tiff")), ImageFormat::Png);
    }

    #[test]
    fn test_undirected_graph_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let err = render("graph g { a -- b }", &path).unwrap_err();

        assert!(matches!(err, RstVizError::Render(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_invalid_dot_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = render("digraph {", &dir.path().join("out.png")).unwrap_err();

        assert!(matches!(err, RstVizError::Render(_)));
    }
}
