use std::path::Path;

use anyhow::Context;
use tracing::{debug, warn};

use crate::config::SiteMapConfig;
use crate::graph::SiteGraph;
use crate::parser::parse_page;
use crate::resolver::root_relative;
use crate::walker::walk_site;

/// The result of scanning a site.
pub struct ScanOutcome {
    pub graph: SiteGraph,
    /// Documents skipped because they could not be read.
    pub skipped: usize,
    /// Anchors pointing off-site (`http`/`https`), across all pages.
    pub external_links: usize,
    /// `mailto:` and `tel:` anchors, across all pages.
    pub data_links: usize,
}

/// Discover every page under `root`, extract its in-site links, and collect them
/// into a [`SiteGraph`].
///
/// Pages are processed in discovery order and their links in document order, so
/// the same tree always yields the same link sequence. A document that cannot be
/// read aborts the scan unless `skip_unreadable` is set, in which case it is
/// logged and counted.
pub fn scan_site(
    root: &Path,
    config: &SiteMapConfig,
    skip_unreadable: bool,
) -> anyhow::Result<ScanOutcome> {
    let files = walk_site(root, config)?;
    debug!(count = files.len(), root = %root.display(), "discovered pages");

    let mut outcome = ScanOutcome {
        graph: SiteGraph::new(),
        skipped: 0,
        external_links: 0,
        data_links: 0,
    };

    for file in &files {
        let html = match read_document(file) {
            Ok(html) => html,
            Err(err) if skip_unreadable => {
                warn!("skipping {}: {err:#}", file.display());
                outcome.skipped += 1;
                continue;
            }
            Err(err) => return Err(err),
        };

        let source = root_relative(file, root);
        let page = parse_page(&html, file, root);
        outcome.external_links += page.external_links;
        outcome.data_links += page.data_links;
        outcome.graph.add_page(&source, page.title);

        for link in &page.links {
            outcome
                .graph
                .add_link(&source, &link.target, &link.href, &link.text);
        }
    }

    Ok(outcome)
}

/// Read a document as text. Invalid UTF-8 is replaced rather than rejected.
fn read_document(path: &Path) -> anyhow::Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
