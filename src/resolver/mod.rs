//! Purely syntactic path resolution for in-site hyperlinks.
//!
//! Nothing here touches the filesystem: a link is resolved from the text of its
//! `href` alone, so the result may name a page that does not exist.

use std::path::{Component, Path, PathBuf};

/// Separator used in every root-relative path the graph stores, on every platform.
pub const PATH_SEPARATOR: &str = "/";

/// Resolve a raw `href` found in `source` to a root-relative path.
///
/// The href is joined onto the directory containing `source`, normalized
/// (`.`, `..` and repeated separators collapse), and expressed relative to `root`.
/// An href beginning with a single `/` is site-absolute and resolves against
/// `root` itself. A protocol-relative href (`//host/page.html`) gets no special
/// treatment: joining it replaces the base, so it climbs out of the root.
pub fn resolve_href(source: &Path, href: &str, root: &Path) -> String {
    let joined = match href.strip_prefix('/') {
        Some(site_absolute) if !site_absolute.starts_with('/') => root.join(site_absolute),
        _ => source.parent().unwrap_or(root).join(href),
    };

    root_relative(&joined, root)
}

/// Express `path` relative to `root` using forward slashes.
///
/// Both paths are normalized lexically first. When `path` lies outside `root`,
/// the result climbs out with leading `..` components. A path equal to `root`
/// yields `.`.
pub fn root_relative(path: &Path, root: &Path) -> String {
    let path = normalize(path);
    let root = normalize(root);

    let path_parts: Vec<Component<'_>> = path.components().collect();
    let root_parts: Vec<Component<'_>> = root.components().collect();

    let common = path_parts
        .iter()
        .zip(root_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<String> = Vec::new();
    for _ in common..root_parts.len() {
        segments.push("..".to_owned());
    }
    for part in &path_parts[common..] {
        segments.push(part.as_os_str().to_string_lossy().into_owned());
    }

    if segments.is_empty() {
        ".".to_owned()
    } else {
        segments.join(PATH_SEPARATOR)
    }
}

/// Collapse `.` and `..` components without consulting the filesystem.
///
/// `..` directly under a filesystem root is dropped; at the front of a relative
/// path it is kept.
fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last().copied() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    parts.iter().collect()
}
