use std::path::Path;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::trace;

use crate::resolver::resolve_href;
use crate::walker::HTML_SUFFIX;

/// Every anchor element that carries an `href` attribute.
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("`a[href]` is a valid selector"));

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("`title` is a valid selector"));

/// Hrefs starting with this prefix point off-site (covers `https` too).
const EXTERNAL_PREFIX: &str = "http";

/// Schemes of contact links: counted, never mapped.
const DATA_PREFIXES: [&str; 2] = ["mailto:", "tel:"];

/// Anchor text longer than this many characters is cut.
pub const MAX_LINK_TEXT: usize = 50;

/// An in-site link found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    /// The raw `href` attribute value.
    pub href: String,
    /// The href resolved to a root-relative path.
    pub target: String,
    /// Visible anchor text, whitespace collapsed and cut to [`MAX_LINK_TEXT`].
    pub text: String,
}

/// Everything the mapper keeps from one document.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedPage {
    /// Text of the first `<title>` element, if it has any.
    pub title: Option<String>,
    /// In-site links in document order.
    pub links: Vec<PageLink>,
    /// Anchors whose href starts with `http`.
    pub external_links: usize,
    /// `mailto:` and `tel:` anchors.
    pub data_links: usize,
}

/// Returns true if an `href` value names another page of the site.
///
/// The rule is deliberately literal: the value must be non-empty, must not start
/// with `http`, and must end with `.html`. Protocol-relative (`//`), `mailto:`,
/// `tel:` and fragment links are not special-cased; the suffix check alone decides
/// them. Query strings and fragments after `.html` fail the suffix check.
pub fn is_internal_page_link(href: &str) -> bool {
    !href.is_empty() && !href.starts_with(EXTERNAL_PREFIX) && href.ends_with(HTML_SUFFIX)
}

fn is_data_link(href: &str) -> bool {
    DATA_PREFIXES.iter().any(|prefix| href.starts_with(prefix))
}

/// Parse one document: its title, its in-site links in document order, and how
/// many anchors point off-site.
///
/// `source` is the document's absolute path and `root` the scan root; targets are
/// resolved relative to both (see [`resolve_href`]). Malformed markup never fails:
/// html5ever recovers the way browsers do.
pub fn parse_page(html: &str, source: &Path, root: &Path) -> ParsedPage {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(collapsed_text)
        .filter(|title| !title.is_empty());

    let mut page = ParsedPage {
        title,
        ..ParsedPage::default()
    };

    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if href.starts_with(EXTERNAL_PREFIX) {
            page.external_links += 1;
        } else if is_data_link(href) {
            page.data_links += 1;
        }

        if !is_internal_page_link(href) {
            trace!(href, "skipping link");
            continue;
        }

        let target = resolve_href(source, href, root);
        trace!(href, %target, "found page link");
        page.links.push(PageLink {
            href: href.to_owned(),
            target,
            text: collapsed_text(element).chars().take(MAX_LINK_TEXT).collect(),
        });
    }

    page
}

/// The element's text with runs of whitespace folded to single spaces.
fn collapsed_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn root() -> PathBuf {
        PathBuf::from("/srv/site")
    }

    fn targets(html: &str, source: &Path) -> Vec<String> {
        parse_page(html, source, &root())
            .links
            .into_iter()
            .map(|l| l.target)
            .collect()
    }

    #[test]
    fn test_filtering_law() {
        let cases = [
            ("http://x.html", false),
            ("https://example.com/page.html", false),
            ("httpdocs/page.html", false),
            ("page.html", true),
            ("../dir/page.html", true),
            ("//cdn.example.com/page.html", true),
            ("mailto:someone@example.com", false),
            ("tel:+15550100", false),
            ("image.png", false),
            ("#section", false),
            ("page.html#section", false),
            ("page.html?lang=en", false),
            ("docs/", false),
            ("PAGE.HTML", false),
            ("", false),
        ];
        for (href, expected) in cases {
            assert_eq!(
                is_internal_page_link(href),
                expected,
                "unexpected filter result for {href:?}"
            );
        }
    }

    #[test]
    fn test_extracts_links_in_document_order() {
        let html = r#"<html><body>
            <nav><a href="zeta.html">Z</a></nav>
            <a href="https://example.com/">External</a>
            <p>See <a href="docs/alpha.html">alpha</a> and <a href="logo.png">logo</a>.</p>
            <a>no href</a>
            <a href="">empty</a>
            <a href="zeta.html">again</a>
        </body></html>"#;

        let source = root().join("index.html");
        assert_eq!(
            targets(html, &source),
            vec!["zeta.html", "docs/alpha.html", "zeta.html"]
        );
    }

    #[test]
    fn test_resolves_relative_to_source_directory() {
        let html = r#"<a href="../c.html">up</a><a href="d.html">here</a>"#;
        let source = root().join("a").join("b.html");
        assert_eq!(targets(html, &source), vec!["c.html", "a/d.html"]);
    }

    #[test]
    fn test_keeps_raw_href() {
        let html = r#"<a href="./guide.html">guide</a>"#;
        let source = root().join("docs").join("index.html");
        let page = parse_page(html, &source, &root());
        assert_eq!(
            page.links,
            vec![PageLink {
                href: "./guide.html".to_string(),
                target: "docs/guide.html".to_string(),
                text: "guide".to_string(),
            }]
        );
    }

    #[test]
    fn test_malformed_markup_does_not_fail() {
        let html = r#"<ul><li><a href=one.html>one</a><li><a href='two.html'>two</a></ul>
            </table></span><a href="three.html">three</a><p>unclosed <b>bold"#;
        let source = root().join("index.html");
        assert_eq!(
            targets(html, &source),
            vec!["one.html", "two.html", "three.html"]
        );
    }

    #[test]
    fn test_document_without_anchors() {
        let source = root().join("index.html");
        assert!(targets("<html><head><title>x</title></head></html>", &source).is_empty());
        assert!(targets("", &source).is_empty());
    }

    #[test]
    fn test_uppercase_anchor_tags_are_found() {
        let html = r#"<A HREF="about.html">About</A>"#;
        let source = root().join("index.html");
        assert_eq!(targets(html, &source), vec!["about.html"]);
    }

    #[test]
    fn test_title_is_collapsed_and_optional() {
        let source = root().join("index.html");
        let page = parse_page(
            "<html><head><title>\n  Site   Home\n</title></head></html>",
            &source,
            &root(),
        );
        assert_eq!(page.title.as_deref(), Some("Site Home"));

        assert_eq!(parse_page("<p>untitled</p>", &source, &root()).title, None);
        assert_eq!(parse_page("<title>  </title>", &source, &root()).title, None);
    }

    #[test]
    fn test_anchor_text_is_collapsed_and_cut() {
        let long = "word ".repeat(20);
        let html = format!(
            r#"<a href="a.html">  Read <b>the</b>
                 guide </a><a href="b.html"><img src="x.png"></a><a href="c.html">{long}</a>"#
        );
        let source = root().join("index.html");
        let texts: Vec<String> = parse_page(&html, &source, &root())
            .links
            .into_iter()
            .map(|l| l.text)
            .collect();

        assert_eq!(texts[0], "Read the guide");
        assert_eq!(texts[1], "");
        assert_eq!(texts[2].chars().count(), MAX_LINK_TEXT);
        assert!(texts[2].starts_with("word word"));
    }

    #[test]
    fn test_off_site_anchors_are_counted() {
        let html = r##"
            <a href="https://example.com/a.html">a</a>
            <a href="http://example.com/">b</a>
            <a href="mailto:me@example.com">mail</a>
            <a href="tel:+15550100">call</a>
            <a href="about.html">about</a>
            <a href="#top">top</a>
        "##;
        let source = root().join("index.html");
        let page = parse_page(html, &source, &root());

        assert_eq!(page.external_links, 2);
        assert_eq!(page.data_links, 2);
        assert_eq!(page.links.len(), 1);
    }
}
