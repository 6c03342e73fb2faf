//! Route metadata loading.
//!
//! Reads an area's `metadata/*.md` files in filename order and parses
//! each front-matter block into a [`RouteMeta`].

use super::RouteMeta;
use crate::{debug, log};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Metadata loading errors. Any of these aborts the run.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid front matter in `{0}`")]
    FrontMatter(PathBuf, #[source] serde_yaml::Error),
}

/// Strip the optional `---` front-matter fences.
///
/// Metadata files usually wrap the YAML block in `---` fences; files
/// without fences are taken as bare YAML. Any run of dashes at either
/// end is removed, so an unterminated opening fence is tolerated.
pub fn strip_fences(content: &str) -> &str {
    let trimmed = content.trim();
    if trimmed.starts_with("---") {
        trimmed.trim_matches('-').trim()
    } else {
        trimmed
    }
}

/// Parse one metadata file's content into a route record.
pub fn parse_route(content: &str) -> Result<RouteMeta, serde_yaml::Error> {
    serde_yaml::from_str(strip_fences(content))
}

/// Load all route metadata files for one area, sorted by filename.
///
/// A missing metadata directory yields an empty list (an area may have
/// no routes yet). An unreadable or malformed file is fatal.
pub fn load_area(metadata_dir: &Path) -> Result<Vec<RouteMeta>, MetadataError> {
    let mut files = collect_metadata_files(metadata_dir);
    files.sort();

    let mut routes = Vec::with_capacity(files.len());
    for path in files {
        let content = fs::read_to_string(&path).map_err(|e| MetadataError::Io(path.clone(), e))?;
        let meta =
            parse_route(&content).map_err(|e| MetadataError::FrontMatter(path.clone(), e))?;
        debug!("load"; "{}: slug `{}`", path.display(), meta.slug);
        routes.push(meta);
    }

    warn_duplicate_slugs(&routes);
    Ok(routes)
}

/// Collect `.md` files in the metadata directory (non-recursive).
fn collect_metadata_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return vec![];
    };

    entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "md"))
        .collect()
}

/// Slugs double as output filenames, so a duplicate means the later
/// route silently overwrites the earlier page.
fn warn_duplicate_slugs(routes: &[RouteMeta]) {
    let mut seen = HashSet::new();
    for route in routes {
        if !seen.insert(route.slug.as_str()) {
            log!("warn"; "duplicate slug `{}`, route page will be overwritten", route.slug);
        }
    }
}
