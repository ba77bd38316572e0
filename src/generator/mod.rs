//! Generators turning collection requests into executable test files
//!
//! The building blocks (name sanitizing, template and header resolution,
//! script rewriting) are target-agnostic; an [`Emitter`] renders one
//! request into a test file and the [`walker`] lays those files out on
//! disk mirroring the collection's folders.

pub mod headers;
pub mod playwright;
pub mod sanitize;
pub mod script;
pub mod template;
pub mod walker;

pub use headers::resolve_headers;
pub use playwright::PlaywrightEmitter;
pub use sanitize::sanitize_name;
pub use script::{RewriteReport, RewriteRule, ScriptRewriter};
pub use template::resolve_template;
pub use walker::{TreeWalker, WalkOptions};

use crate::error::Result;
use crate::models::{RequestItem, VariableMapping};
use std::path::PathBuf;

/// One generated test file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTest {
    /// Destination path, mirroring the collection folders
    pub path: PathBuf,
    /// Display name of the source request
    pub title: String,
    /// Full source text of the file
    pub contents: String,
}

/// Trait for rendering a single request as a test file
pub trait Emitter: Sync {
    /// Suffix appended to the sanitized request name, e.g. `.spec.js`
    fn file_suffix(&self) -> &'static str;

    /// Render the complete source of one test file
    fn emit_request(&self, request: &RequestItem, vars: &VariableMapping) -> Result<String>;
}
