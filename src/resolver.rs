//! Expands command-line paths into the list of image files to convert.

use crate::constants::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::{CompressionError, Result};
use crate::warn;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A path found while expanding the inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CandidatePath {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Everything discovered from the inputs, before and after extension filtering.
#[derive(Debug, Default)]
pub struct Discovery {
    pub candidates: Vec<PathBuf>,
    pub images: Vec<PathBuf>,
}

impl Discovery {
    pub fn skipped(&self) -> usize {
        self.candidates.len() - self.images.len()
    }
}

pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext_lower = ext.to_lowercase();
            SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_lower.as_str())
        })
        .unwrap_or(false)
}

/// Resolves a user-supplied path to an absolute one, or `None` if nothing exists there.
pub(crate) fn resolve_candidate(input: &Path) -> Option<CandidatePath> {
    let metadata = fs::metadata(input).ok()?;
    let path = input.canonicalize().ok()?;
    Some(CandidatePath {
        path,
        is_dir: metadata.is_dir(),
    })
}

/// Lists the files under `dir` in name order. Subdirectories are descended
/// into only when `recursive` is set; otherwise their contents are left out.
pub fn collect_directory_files(dir: &Path, recursive: bool) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(dir)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", CompressionError::from(e));
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }
        files.push(entry.into_path());
    }

    tracing::debug!(dir = %dir.display(), recursive, found = files.len(), "scanned directory");
    files
}

/// Expands every input into candidate files and filters them down to images.
/// Missing inputs are warned about and skipped.
pub fn discover(inputs: &[PathBuf], recursive: bool) -> Discovery {
    let mut candidates = Vec::new();

    for input in inputs {
        match resolve_candidate(input) {
            Some(CandidatePath { path, is_dir: true }) => {
                candidates.extend(collect_directory_files(&path, recursive));
            }
            Some(CandidatePath { path, is_dir: false }) => candidates.push(path),
            None => {
                let shown = std::path::absolute(input).unwrap_or_else(|_| input.clone());
                warn!("Path not found: {}", shown.display());
            }
        }
    }

    let images = candidates
        .iter()
        .filter(|p| is_image_file(p))
        .cloned()
        .collect();

    Discovery { candidates, images }
}

/// Pre-flight check on a discovery: fails when no image survived filtering and
/// warns once when some candidates were dropped.
pub fn select_images(discovery: Discovery) -> Result<Vec<PathBuf>> {
    if discovery.images.is_empty() {
        return Err(if discovery.candidates.is_empty() {
            CompressionError::NoFilesSelected
        } else {
            CompressionError::NoValidImageFiles
        });
    }

    if discovery.skipped() > 0 {
        warn!("Some files were skipped because they are not valid image files.");
    }

    Ok(discovery.images)
}

/// Resolves inputs and returns the image files to process.
pub fn resolve_inputs(inputs: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>> {
    select_images(discover(inputs, recursive))
}
