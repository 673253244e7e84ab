//! Built-in component templates
//!
//! The catalog of frontend source files the scaffolder knows how to emit.
//! Content lives in [`embedded`] and is compiled into the binary; a project
//! can shadow any entry with an override file (see [`TemplateLoader`]).

pub mod embedded;
mod loader;

pub use loader::TemplateLoader;

/// A named entry in the built-in catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Stable name used by the CLI and override files
    pub name: &'static str,
    /// Default path relative to a scaffold root
    pub relative_path: &'static str,
    /// One-line description for listings
    pub description: &'static str,
}

const CATALOG: &[Template] = &[
    Template {
        name: "folder-context-menu",
        relative_path: "components/folders/folder-context-menu.tsx",
        description: "Right-click menu for a watched folder",
    },
    Template {
        name: "folder-types",
        relative_path: "types/folders.ts",
        description: "WatchedFolder type shared by folder components",
    },
    Template {
        name: "cn-util",
        relative_path: "lib/utils.ts",
        description: "Class-name merge helper",
    },
];

/// The built-in template catalog
pub fn catalog() -> &'static [Template] {
    CATALOG
}

/// Look up a catalog entry by name
pub fn find(name: &str) -> Option<&'static Template> {
    CATALOG.iter().find(|t| t.name == name)
}
