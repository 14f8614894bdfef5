use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use tracing::debug;

use crate::config::SiteMapConfig;
use crate::resolver::root_relative;

/// File-name suffix that marks a document as an HTML page.
pub const HTML_SUFFIX: &str = ".html";

/// Walk a site directory and collect every HTML document beneath it.
///
/// Every directory is descended, including hidden and dependency directories,
/// unless `config.respect_gitignore` turns on the `ignore` crate's standard filters
/// or a `config.exclude` pattern matches. Entries are sorted by file name at each
/// level so repeated walks over an unchanged tree yield the same order.
///
/// Any error while enumerating the tree aborts the walk.
pub fn walk_site(root: &Path, config: &SiteMapConfig) -> anyhow::Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("site root {} is not a readable directory", root.display());
    }

    let walker = ignore::WalkBuilder::new(root)
        .standard_filters(config.respect_gitignore)
        // Read .gitignore files even when the site is not inside a git repository.
        .require_git(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for result in walker {
        let entry =
            result.with_context(|| format!("failed to enumerate {}", root.display()))?;
        let path = entry.path();

        if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
            continue;
        }

        if !is_html_file(path) {
            continue;
        }

        if is_excluded_by_config(path, root, config) {
            debug!(path = %path.display(), "excluded by config");
            continue;
        }

        debug!(path = %path.display(), "discovered page");
        files.push(path.to_path_buf());
    }

    Ok(files)
}

/// Returns true if the file name ends with the literal `.html` suffix.
fn is_html_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.ends_with(HTML_SUFFIX))
        .unwrap_or(false)
}

/// Returns true if `path` matches any exclusion pattern from config.
///
/// Patterns are tried against the root-relative path and against each of its
/// components, so `node_modules` excludes that directory at any depth.
fn is_excluded_by_config(path: &Path, root: &Path, config: &SiteMapConfig) -> bool {
    let patterns = match &config.exclude {
        Some(p) if !p.is_empty() => p,
        _ => return false,
    };

    let rel = root_relative(path, root);

    for pattern in patterns {
        let Ok(compiled) = glob::Pattern::new(pattern) else {
            continue;
        };
        if compiled.matches(&rel) {
            return true;
        }
        if rel.split('/').any(|component| compiled.matches(component)) {
            return true;
        }
    }

    false
}
