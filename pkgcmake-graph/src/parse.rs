//! Graph document parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{Error, Graph, Result};

/// Serialization format of a graph document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Pick the format from a file extension, defaulting to TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Toml,
        }
    }
}

impl FromStr for Graph {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_graph(s, "graph.toml", Format::Toml)
    }
}

impl Graph {
    /// Load a graph document from disk.
    ///
    /// Relative source and include paths are resolved against the
    /// directory containing the document.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let mut graph = parse_graph(&content, &filename, Format::from_path(path))?;

        let base = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let base = std::path::absolute(base).map_err(|e| {
            Box::new(Error::Io {
                path: base.to_path_buf(),
                source: e,
            })
        })?;
        graph.resolve_paths(&base);

        tracing::debug!(
            path = %path.display(),
            packages = graph.packages.len(),
            "loaded graph document"
        );
        Ok(graph)
    }

    /// Parse a JSON graph document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        parse_graph(content, "graph.json", Format::Json)
    }
}

fn parse_graph(content: &str, filename: &str, format: Format) -> Result<Graph> {
    match format {
        Format::Toml => toml::from_str(content).map_err(|e| Error::parse(e, content, filename)),
        Format::Json => {
            serde_json::from_str(content).map_err(|e| Error::json(e, content, filename))
        }
    }
}
