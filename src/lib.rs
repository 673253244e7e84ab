//! Scaffolder - component source emitter for the folder manager frontend
//!
//! Holds the frontend source files the folder manager's UI is scaffolded
//! from and writes them verbatim to disk. Templates are opaque text: no
//! substitution variables, no rendering, content written equals content
//! embedded.
//!
//! # Architecture
//!
//! ```text
//! <scaffold root>/
//! ├── components/
//! │   └── folders/
//! │       └── folder-context-menu.tsx
//! ├── types/
//! │   └── folders.ts
//! └── lib/
//!     └── utils.ts
//! ```
//!
//! # Example
//!
//! ```ignore
//! use scaffolder::{TemplateLoader, emitter};
//!
//! let loader = TemplateLoader::embedded_only();
//! let written = emitter::scaffold(&loader, Path::new("frontend/src"))?;
//! ```

pub mod cli;
pub mod config;
pub mod emitter;
pub mod error;
pub mod templates;

// Re-export commonly used types
pub use emitter::{EmitOptions, Emitted, emit, scaffold};
pub use error::ScaffoldError;
pub use templates::{Template, TemplateLoader, catalog, find};

/// File extension for template override files
pub const OVERRIDE_EXT: &str = "tpl";

/// Name of the per-project override directory
pub const OVERRIDE_DIR_NAME: &str = "templates";
