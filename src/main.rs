mod cli;
mod config;
mod error;
mod export;
mod graph;
mod output;
mod parser;
mod render;
mod resolver;
mod scan;
mod walker;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::{Level, info, warn};

use cli::Cli;
use config::SiteMapConfig;
use export::{ArtifactPaths, dot::render_dot, write_dot};
use output::{MapStats, RenderStatus};
use render::render_png;
use scan::scan_site;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let start = Instant::now();

    let root = match &cli.root {
        Some(root) => root.clone(),
        None => default_root()?,
    };
    let root = std::fs::canonicalize(&root)
        .with_context(|| format!("site root {} is not accessible", root.display()))?;

    let config = SiteMapConfig::load(&root);
    let skip_unreadable = cli.skip_unreadable || config.skip_unreadable;

    let outcome = scan_site(&root, &config, skip_unreadable)?;
    let graph = &outcome.graph;
    info!(
        pages = graph.page_count(),
        links = graph.link_count(),
        skipped = outcome.skipped,
        external = outcome.external_links,
        "scan complete"
    );

    if cli.stdout {
        print!("{}", render_dot(graph));
        return Ok(());
    }

    let paths = ArtifactPaths::in_dir(&cli.out_dir);
    write_dot(graph, &paths.dot)?;
    if !cli.json {
        output::report_dot_written(&paths.dot);
    }

    let mut stats = MapStats::from_scan(&outcome, &root, &paths.dot);

    if !cli.no_render {
        let renderer = cli.renderer.as_deref().unwrap_or(config.renderer());
        match render_png(renderer, &paths.dot, &paths.png) {
            Ok(()) => {
                stats.render = RenderStatus::Rendered;
                stats.png_path = Some(paths.png.display().to_string());
                if !cli.json {
                    output::report_png_written(&paths.png);
                }
            }
            Err(err) => {
                stats.render = RenderStatus::Failed;
                if cli.json {
                    warn!("image rendering skipped: {err}");
                } else {
                    output::report_render_failed(&err);
                }
            }
        }
    }

    stats.elapsed_secs = start.elapsed().as_secs_f64();
    output::print_summary(&stats, graph, cli.json, cli.verbose);

    Ok(())
}

/// Diagnostics go to stderr; stdout carries results only.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// The site root used when none is given: the parent of the directory holding
/// this executable.
fn default_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate the running executable")?;
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("executable {} has no parent directory", exe.display()))
}
