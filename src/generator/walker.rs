//! Collection tree walker
//!
//! Folders become directories and requests become files named after the
//! sanitized request name. The whole tree is planned first in declared
//! order; rendering and writing then fan out over the rayon pool, which is
//! safe because every leaf depends only on its own request and the shared
//! read-only variables.

use super::sanitize::sanitize_name;
use super::{Emitter, GeneratedTest};
use crate::error::Result;
use crate::models::{CollectionNode, RequestItem, VariableMapping};
use indexmap::IndexMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Token used when a name sanitizes to nothing
pub const UNNAMED: &str = "unnamed";

#[derive(Debug, Clone, Copy, Default)]
pub struct WalkOptions {
    /// Plan and render without touching the filesystem
    pub dry_run: bool,
}

pub struct TreeWalker<'a, E: Emitter> {
    emitter: &'a E,
    vars: &'a VariableMapping,
    options: WalkOptions,
}

impl<'a, E: Emitter> TreeWalker<'a, E> {
    pub fn new(emitter: &'a E, vars: &'a VariableMapping, options: WalkOptions) -> Self {
        Self {
            emitter,
            vars,
            options,
        }
    }

    /// Generate one file per request under `output_dir`.
    ///
    /// Returned tests are in traversal order. Existing files are replaced.
    pub fn walk(&self, nodes: &[CollectionNode], output_dir: &Path) -> Result<Vec<GeneratedTest>> {
        use rayon::prelude::*;

        let mut plan = IndexMap::new();
        self.plan_nodes(nodes, output_dir, &mut plan)?;

        tracing::info!(
            output = %output_dir.display(),
            files = plan.len(),
            dry_run = self.options.dry_run,
            "collection planned"
        );

        let plan: Vec<(PathBuf, &RequestItem)> = plan.into_iter().collect();

        plan.par_iter()
            .map(|(path, request)| self.generate(path, request))
            .collect()
    }

    fn plan_nodes<'c>(
        &self,
        nodes: &'c [CollectionNode],
        dir: &Path,
        plan: &mut IndexMap<PathBuf, &'c RequestItem>,
    ) -> Result<()> {
        self.ensure_dir(dir)?;

        for node in nodes {
            match node {
                CollectionNode::Folder(folder) => {
                    let subdir = dir.join(path_token(&folder.name));
                    self.plan_nodes(&folder.children, &subdir, plan)?;
                }
                CollectionNode::Request(request) => {
                    let file_name = format!("{}{}", path_token(&request.name), self.emitter.file_suffix());
                    let path = dir.join(file_name);

                    if let Some(previous) = plan.insert(path.clone(), request) {
                        tracing::warn!(
                            path = %path.display(),
                            first = %previous.name,
                            second = %request.name,
                            "requests map to the same file; the later one overwrites the earlier"
                        );
                    }
                }
            }
        }

        Ok(())
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !self.options.dry_run {
            // create_dir_all tolerates directories that already exist
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    fn generate(&self, path: &Path, request: &RequestItem) -> Result<GeneratedTest> {
        let contents = self.emitter.emit_request(request, self.vars)?;

        if !self.options.dry_run {
            write_atomic(path, &contents)?;
            tracing::debug!(path = %path.display(), bytes = contents.len(), "test written");
        }

        Ok(GeneratedTest {
            path: path.to_path_buf(),
            title: request.name.clone(),
            contents,
        })
    }
}

fn path_token(name: &str) -> String {
    let token = sanitize_name(name);
    if token.is_empty() {
        tracing::warn!(name = %name, "name has no usable characters; using '{}'", UNNAMED);
        UNNAMED.to_string()
    } else {
        token
    }
}

/// Write through a temp file in the same directory, then rename over `path`
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file().set_permissions(fs::Permissions::from_mode(0o644))?;
    }

    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
