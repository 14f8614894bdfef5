pub mod dot;

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::graph::SiteGraph;

/// File name of the graph description artifact.
pub const DOT_FILE: &str = "site.dot";

/// File name of the rendered image artifact.
pub const PNG_FILE: &str = "site.png";

/// Locations of the two artifacts a run may produce.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub dot: PathBuf,
    pub png: PathBuf,
}

impl ArtifactPaths {
    /// Artifact paths inside `out_dir`.
    pub fn in_dir(out_dir: &Path) -> Self {
        Self {
            dot: out_dir.join(DOT_FILE),
            png: out_dir.join(PNG_FILE),
        }
    }
}

/// Render the graph as DOT and write it to `path`, replacing any existing file.
pub fn write_dot(graph: &SiteGraph, path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, dot::render_dot(graph))
        .with_context(|| format!("failed to write {}", path.display()))
}
