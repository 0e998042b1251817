use crate::errors::PipelineErrors;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Splits a multi-record catalog into 3-line blocks.
///
/// Lines accumulate until a line starting with '2' directly follows one
/// starting with '1', which closes the block. Blank lines are skipped and an
/// unterminated tail is dropped.
pub fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let follows_line1 = current.last().is_some_and(|l| l.starts_with('1'));
        current.push(line);
        if follows_line1 && line.starts_with('2') {
            blocks.push(current.join("\n"));
            current.clear();
        }
    }

    if !current.is_empty() {
        debug!(lines = current.len(), "dropping unterminated catalog tail");
    }
    blocks
}

/// Reads a catalog file and splits it into blocks.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<String>, PipelineErrors> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let blocks = split_blocks(&text);
    if blocks.is_empty() {
        return Err(PipelineErrors::EmptyCatalog(path.display().to_string()));
    }
    Ok(blocks)
}
