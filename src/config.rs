use std::path::Path;

use serde::Deserialize;
use tracing::warn;

/// Name of the optional configuration file looked up at the scan root.
pub const CONFIG_FILE: &str = "site-map.toml";

/// Rendering program used when neither the CLI nor the config names one.
pub const DEFAULT_RENDERER: &str = "dot";

/// Configuration loaded from `site-map.toml` at the scan root.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SiteMapConfig {
    /// Glob patterns excluded from discovery. Matched against the full path and
    /// against each individual path component.
    pub exclude: Option<Vec<String>>,
    /// Honor `.gitignore` files and skip hidden entries while walking.
    pub respect_gitignore: bool,
    /// Program invoked to turn `site.dot` into `site.png`.
    pub renderer: Option<String>,
    /// Warn and continue when a document cannot be read instead of aborting the run.
    pub skip_unreadable: bool,
}

impl SiteMapConfig {
    /// Load configuration from `site-map.toml` in the given root directory.
    ///
    /// Returns a default configuration if the file does not exist or cannot be parsed.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str::<Self>(&contents) {
                Ok(config) => config,
                Err(err) => {
                    warn!("failed to parse {CONFIG_FILE}: {err}. Using defaults.");
                    Self::default()
                }
            },
            Err(err) => {
                warn!("failed to read {CONFIG_FILE}: {err}. Using defaults.");
                Self::default()
            }
        }
    }

    /// The rendering program, falling back to Graphviz `dot`.
    pub fn renderer(&self) -> &str {
        self.renderer.as_deref().unwrap_or(DEFAULT_RENDERER)
    }
}
