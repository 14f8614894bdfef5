pub mod edge;
pub mod node;

use std::collections::HashMap;

use petgraph::Directed;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use edge::EdgeKind;
use node::PageNode;

/// The in-memory link graph of a site.
///
/// Pages are interned by root-relative path. Edges are never removed, so
/// `StableGraph` hands out edge indices in insertion order and [`SiteGraph::links`]
/// yields links exactly in the order they were recorded. Parallel edges are kept.
pub struct SiteGraph {
    /// The underlying directed multigraph.
    pub graph: StableGraph<PageNode, EdgeKind, Directed>,
    /// Maps root-relative paths to their node indices.
    pub page_index: HashMap<String, NodeIndex>,
}

impl SiteGraph {
    /// Create an empty site graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            page_index: HashMap::new(),
        }
    }

    /// Record a document found on disk. Returns its node index.
    ///
    /// If the path was already seen as a link target, that node is reused and
    /// marked as discovered.
    pub fn add_page(&mut self, path: &str, title: Option<String>) -> NodeIndex {
        let idx = self.intern(path);
        let page = &mut self.graph[idx];
        page.discovered = true;
        page.title = title;
        idx
    }

    /// Append a link from `source` to `target`, creating either page if needed.
    pub fn add_link(&mut self, source: &str, target: &str, href: &str, text: &str) -> EdgeIndex {
        let src = self.intern(source);
        let tgt = self.intern(target);
        self.graph.add_edge(
            src,
            tgt,
            EdgeKind::LinksTo {
                href: href.to_owned(),
                text: text.to_owned(),
            },
        )
    }

    fn intern(&mut self, path: &str) -> NodeIndex {
        if let Some(&existing) = self.page_index.get(path) {
            return existing;
        }
        let idx = self.graph.add_node(PageNode {
            path: path.to_owned(),
            discovered: false,
            title: None,
        });
        self.page_index.insert(path.to_owned(), idx);
        idx
    }

    /// Iterate `(source, target)` path pairs in insertion order.
    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.graph.edge_references().map(move |e| {
            (
                self.graph[e.source()].path.as_str(),
                self.graph[e.target()].path.as_str(),
            )
        })
    }

    /// Every page, discovered or not, in the order it was first seen.
    pub fn pages(&self) -> impl Iterator<Item = &PageNode> + '_ {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// Every link as `(source, target, edge)`, in insertion order.
    pub fn link_edges(&self) -> impl Iterator<Item = (&str, &str, &EdgeKind)> + '_ {
        self.graph.edge_references().map(move |e| {
            (
                self.graph[e.source()].path.as_str(),
                self.graph[e.target()].path.as_str(),
                e.weight(),
            )
        })
    }

    /// Number of documents found on disk.
    pub fn page_count(&self) -> usize {
        self.graph
            .node_indices()
            .filter(|&idx| self.graph[idx].discovered)
            .count()
    }

    /// Number of links recorded, parallel links included.
    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of distinct pages that are the target of at least one link.
    pub fn target_count(&self) -> usize {
        self.graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .neighbors_directed(idx, petgraph::Direction::Incoming)
                    .next()
                    .is_some()
            })
            .count()
    }

    /// Links pointing at `path` as `(source, edge)` pairs, in insertion order.
    pub fn incoming_links(&self, path: &str) -> Vec<(&str, &EdgeKind)> {
        let Some(&idx) = self.page_index.get(path) else {
            return Vec::new();
        };
        let mut links: Vec<(usize, &str, &EdgeKind)> = self
            .graph
            .edges_directed(idx, petgraph::Direction::Incoming)
            .map(|e| (e.id().index(), self.graph[e.source()].path.as_str(), e.weight()))
            .collect();
        links.sort_by_key(|(order, _, _)| *order);
        links.into_iter().map(|(_, src, edge)| (src, edge)).collect()
    }

    /// Link targets that match no discovered document, in first-seen order.
    pub fn dangling_targets(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .map(|idx| &self.graph[idx])
            .filter(|page| !page.discovered)
            .map(|page| page.path.as_str())
            .collect()
    }
}

impl Default for SiteGraph {
    fn default() -> Self {
        Self::new()
    }
}
