//! Template loader
//!
//! Resolves template names to content, from an override file or the
//! embedded default. Content passes through byte-for-byte; the loader
//! never renders or rewrites it.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::embedded;
use crate::error::ScaffoldError;

/// Resolves template content
///
/// Checks in order:
/// 1. Project override: `<override_dir>/{name}.tpl`
/// 2. Embedded default
pub struct TemplateLoader {
    /// Directory holding `.tpl` override files, if one exists
    override_dir: Option<PathBuf>,
}

impl TemplateLoader {
    /// Create a loader rooted at a project directory
    ///
    /// Overrides are looked up in `<root>/templates/` when that directory
    /// exists.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let dir = root.as_ref().join(crate::OVERRIDE_DIR_NAME);

        Self {
            override_dir: if dir.exists() { Some(dir) } else { None },
        }
    }

    /// Create a loader with an explicit override directory
    pub fn with_override_dir(dir: Option<PathBuf>) -> Self {
        Self {
            override_dir: dir.filter(|d| d.exists()),
        }
    }

    /// Create a loader that only uses embedded content (for testing)
    pub fn embedded_only() -> Self {
        Self { override_dir: None }
    }

    /// Load a template's content by name
    pub fn load(&self, name: &str) -> Result<String, ScaffoldError> {
        // Try project override first
        if let Some(ref dir) = self.override_dir {
            let path = dir.join(format!("{}.{}", name, crate::OVERRIDE_EXT));
            if path.exists() {
                debug!("Loading template from override: {:?}", path);
                return std::fs::read_to_string(&path).map_err(|source| ScaffoldError::ReadOverride { path, source });
            }
        }

        // Fall back to embedded
        if let Some(content) = embedded::get_embedded(name) {
            debug!("Using embedded template: {}", name);
            return Ok(content.to_string());
        }

        Err(ScaffoldError::UnknownTemplate { name: name.to_string() })
    }
}
