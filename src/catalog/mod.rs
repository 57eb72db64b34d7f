//! Agent definition extraction and catalog assembly.
//!
//! One linear pipeline: discover markdown files, extract a record per file,
//! build the cross-reference indices, assemble the output document.

mod frontmatter;
mod index;
mod infer;
mod record;
mod sections;

pub use index::{build_indices, Catalog, CatalogIndices};
pub use record::{process_agent, AgentRecord};

use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collect markdown files under `root`, sorted by path so runs
/// are deterministic.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_file() && entry.path().extension().is_some_and(|ext| ext == "md") {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}
