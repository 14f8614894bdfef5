use std::path::PathBuf;

use clap::Parser;

/// Map the internal link structure of a static HTML site.
///
/// site-map scans a directory tree for `.html` documents, collects every anchor
/// that points at another page of the site, and writes the result as a Graphviz
/// graph (`site.dot`). When Graphviz is installed the graph is also rendered to
/// `site.png`.
#[derive(Parser, Debug)]
#[command(name = "site-map", version, about, long_about = None)]
pub struct Cli {
    /// Site root to scan. Defaults to the parent of the directory holding this executable.
    pub root: Option<PathBuf>,

    /// Directory that receives `site.dot` and `site.png`.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Graphviz-compatible program used to render the image (overrides `site-map.toml`).
    #[arg(long, value_name = "PROGRAM")]
    pub renderer: Option<String>,

    /// Write `site.dot` only; do not attempt to render `site.png`.
    #[arg(long)]
    pub no_render: bool,

    /// Print the DOT text to stdout instead of writing any file.
    #[arg(long, conflicts_with_all = ["json", "no_render"])]
    pub stdout: bool,

    /// Warn about and skip documents that cannot be read instead of aborting.
    #[arg(long)]
    pub skip_unreadable: bool,

    /// Log each discovered page and list dangling link targets.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the run summary as JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,
}
