use serde::Serialize;

/// A page in the site graph, identified by its root-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageNode {
    /// Root-relative path with `/` separators (e.g. `"blog/post.html"`).
    pub path: String,
    /// Whether a document with this path was found on disk during discovery.
    /// `false` for pages only ever seen as link targets.
    pub discovered: bool,
    /// The document's `<title>`. Always `None` for undiscovered pages.
    pub title: Option<String>,
}
