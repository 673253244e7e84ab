//! File emission
//!
//! Writes template content to target paths. Each write is a single
//! synchronous operation; the file handle is scoped to the call and
//! released on every exit path.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ScaffoldError;
use crate::templates::{self, TemplateLoader};

/// Options for a single emission
#[derive(Debug, Clone, Default)]
pub struct EmitOptions {
    /// Create missing parent directories before writing
    pub create_parents: bool,
}

/// Report of one written file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitted {
    /// Destination path as written
    pub path: PathBuf,
    /// Bytes written
    pub bytes: usize,
}

/// Write `content` to `dest`, overwriting any existing file.
///
/// Without `create_parents`, a missing parent directory surfaces as the
/// underlying I/O error and no file is created.
pub fn emit(content: &str, dest: &Path, options: &EmitOptions) -> Result<Emitted, ScaffoldError> {
    if options.create_parents
        && let Some(parent) = dest.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| ScaffoldError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(dest, content).map_err(|source| ScaffoldError::Write {
        path: dest.to_path_buf(),
        source,
    })?;

    debug!(bytes = content.len(), "Wrote {}", dest.display());

    Ok(Emitted {
        path: dest.to_path_buf(),
        bytes: content.len(),
    })
}

/// Emit every catalog template into `root` at its default relative path.
///
/// Intermediate directories are created. Stops at the first failure; files
/// already written stay written.
pub fn scaffold(loader: &TemplateLoader, root: &Path) -> Result<Vec<Emitted>, ScaffoldError> {
    let options = EmitOptions { create_parents: true };
    let mut written = Vec::new();

    for template in templates::catalog() {
        let content = loader.load(template.name)?;
        let dest = root.join(template.relative_path);
        written.push(emit(&content, &dest, &options)?);
    }

    info!(files = written.len(), "Scaffold complete: {}", root.display());
    Ok(written)
}
