pub mod catalog_manager;
pub mod samples;
pub mod splitter;

pub use catalog_manager::CatalogManager;
pub use splitter::{load_file, split_blocks};

use std::path::PathBuf;
use tracing::{info, warn};

/// Collects blocks from local files and an optional CelesTrak group.
///
/// A source that fails is logged and skipped. With no source at all the
/// bundled samples are returned.
pub fn gather(files: &[PathBuf], group: Option<(&CatalogManager, &str)>) -> Vec<String> {
    if files.is_empty() && group.is_none() {
        return samples::all();
    }

    let mut blocks = Vec::new();
    for path in files {
        match load_file(path) {
            Ok(found) => {
                info!(path = %path.display(), count = found.len(), "Loaded catalog");
                blocks.extend(found);
            }
            Err(e) => warn!(path = %path.display(), error = %e, "Skipping catalog file"),
        }
    }
    if let Some((manager, group)) = group {
        match manager.get_group(group) {
            Ok(found) => {
                info!(group, count = found.len(), "Loaded CelesTrak group");
                blocks.extend(found);
            }
            Err(e) => warn!(group, error = %e, "Skipping CelesTrak group"),
        }
    }
    blocks
}
