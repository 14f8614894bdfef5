use std::fmt::Write;

use crate::graph::SiteGraph;

/// Name of the emitted graph.
pub const GRAPH_NAME: &str = "Website";

/// Render the site graph as Graphviz DOT.
///
/// One statement per link, in the order the links were recorded. Paths are
/// quoted verbatim: an embedded `"` yields malformed DOT, which is accepted since
/// site paths practically never contain one.
pub fn render_dot(graph: &SiteGraph) -> String {
    let mut out = String::new();
    writeln!(out, "digraph {GRAPH_NAME} {{").unwrap();
    writeln!(out, "    rankdir=LR;").unwrap();
    writeln!(out, "    node [shape=box, style=filled, fillcolor=lightgray];").unwrap();

    for (source, target) in graph.links() {
        writeln!(out, "    \"{}\" -> \"{}\";", source, target).unwrap();
    }

    writeln!(out, "}}").unwrap();
    out
}
