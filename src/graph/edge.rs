/// The kind of directed edge between two pages in the site graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeKind {
    /// Page -> Page: the source page holds an anchor pointing at the target.
    /// `href` is the raw attribute value as written in the markup and `text`
    /// the anchor's visible text.
    LinksTo { href: String, text: String },
}
