use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::error::RenderError;
use crate::graph::SiteGraph;
use crate::graph::edge::EdgeKind;
use crate::graph::node::PageNode;
use crate::scan::ScanOutcome;

/// What happened to the image artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStatus {
    Rendered,
    Failed,
    Skipped,
}

/// One recorded link, as listed in the JSON summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRecord {
    pub source: String,
    pub target: String,
    pub href: String,
    pub text: String,
}

/// Aggregate statistics produced by a mapping run.
#[derive(Debug, Serialize)]
pub struct MapStats {
    pub root: String,
    /// Documents discovered and read.
    pub pages: usize,
    /// Links recorded, duplicates included.
    pub links: usize,
    /// Distinct pages that some link points at.
    pub targets: usize,
    /// Link targets that match no discovered document.
    pub dangling: Vec<String>,
    /// Documents skipped because they could not be read.
    pub skipped: usize,
    /// Anchors pointing off-site; never mapped.
    pub external_links: usize,
    /// `mailto:` and `tel:` anchors; never mapped.
    pub data_links: usize,
    /// Every page in first-seen order, with its title.
    pub nodes: Vec<PageNode>,
    /// Every link in the order it appears in the graph file.
    pub edges: Vec<LinkRecord>,
    pub dot_path: String,
    pub png_path: Option<String>,
    pub render: RenderStatus,
    /// Wall-clock time for the run in seconds.
    pub elapsed_secs: f64,
}

impl MapStats {
    pub fn from_scan(outcome: &ScanOutcome, root: &Path, dot_path: &Path) -> Self {
        let graph = &outcome.graph;
        Self {
            root: root.display().to_string(),
            pages: graph.page_count(),
            links: graph.link_count(),
            targets: graph.target_count(),
            dangling: graph
                .dangling_targets()
                .into_iter()
                .map(str::to_owned)
                .collect(),
            skipped: outcome.skipped,
            external_links: outcome.external_links,
            data_links: outcome.data_links,
            nodes: graph.pages().cloned().collect(),
            edges: graph
                .link_edges()
                .map(|(source, target, edge)| {
                    let EdgeKind::LinksTo { href, text } = edge;
                    LinkRecord {
                        source: source.to_owned(),
                        target: target.to_owned(),
                        href: href.clone(),
                        text: text.clone(),
                    }
                })
                .collect(),
            dot_path: dot_path.display().to_string(),
            png_path: None,
            render: RenderStatus::Skipped,
            elapsed_secs: 0.0,
        }
    }
}

/// Announce the graph description file.
pub fn report_dot_written(path: &Path) {
    println!("{} Graph written to {}", "✓".green().bold(), path.display());
}

/// Announce the rendered image.
pub fn report_png_written(path: &Path) {
    println!("{} Image rendered to {}", "✓".green().bold(), path.display());
}

/// Warn that rendering failed. The run still counts as a success.
pub fn report_render_failed(err: &RenderError) {
    println!(
        "{} Graphviz is unavailable, skipped image rendering ({err})",
        "⚠".yellow().bold()
    );
}

/// Print a summary of the run.
///
/// - `json = true`: emit a pretty-printed JSON object to stdout.
/// - `json = false`: emit a short human-readable summary to stdout; with `verbose`,
///   every page is listed with its title and every dangling target with the
///   links that name it.
///
/// Skipped documents are reported on **stderr** so stdout stays clean for JSON
/// consumers.
pub fn print_summary(stats: &MapStats, graph: &SiteGraph, json: bool, verbose: bool) {
    if json {
        match serde_json::to_string_pretty(stats) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("error serialising stats: {}", e),
        }
        return;
    }

    println!(
        "Mapped {} pages and {} links in {:.2}s",
        stats.pages, stats.links, stats.elapsed_secs
    );
    println!(
        "  {} distinct targets, {} without a matching page",
        stats.targets,
        stats.dangling.len()
    );
    println!(
        "  {} external links and {} mailto/tel links left out",
        stats.external_links, stats.data_links
    );

    if verbose {
        for page in stats.nodes.iter().filter(|p| p.discovered) {
            match &page.title {
                Some(title) => println!("  {} {} \"{}\"", "page".cyan(), page.path, title),
                None => println!("  {} {} (untitled)", "page".cyan(), page.path),
            }
        }
        for target in &stats.dangling {
            println!("  {} {}", "dangling".yellow(), target);
            for (source, edge) in graph.incoming_links(target) {
                let EdgeKind::LinksTo { href, text } = edge;
                println!("      from {} (href=\"{}\", text=\"{}\")", source, href, text);
            }
        }
    }

    if stats.skipped > 0 {
        eprintln!("  {} pages skipped (read errors)", stats.skipped);
    }
}
