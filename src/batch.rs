use crate::constants::OUTPUT_EXTENSION;
use crate::error::{CompressionError, Result};
use crate::processing::{convert_to_webp, WebpOptions};
use crate::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Run parameters, built once from the command line.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    pub webp: WebpOptions,
    pub rename: Option<String>,
    pub delete_original: bool,
}

impl BatchOptions {
    /// The rename override, ignoring an empty value.
    pub fn rename(&self) -> Option<&str> {
        self.rename.as_deref().filter(|name| !name.is_empty())
    }
}

/// What happened to the source file after a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    Kept,
    Removed,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct CompressionResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub original_size: u64,
    pub compressed_size: u64,
    pub removal: Removal,
}

impl CompressionResult {
    pub fn ratio(&self) -> i64 {
        compression_ratio(self.original_size, self.compressed_size)
    }
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub converted: Vec<CompressionResult>,
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchSummary {
    /// Reports one file's outcome and files it under converted or failed.
    pub fn record(&mut self, input_path: &Path, outcome: Result<CompressionResult>) {
        match outcome {
            Ok(result) => {
                report(&result);
                self.converted.push(result);
            }
            Err(e) => {
                error!("Failed to process {}: {}", input_path.display(), e);
                self.failed.push((input_path.to_path_buf(), e.to_string()));
            }
        }
    }

    pub fn removed_count(&self) -> usize {
        self.converted
            .iter()
            .filter(|r| r.removal == Removal::Removed)
            .count()
    }

    pub fn total_before(&self) -> u64 {
        self.converted.iter().map(|r| r.original_size).sum()
    }

    pub fn total_after(&self) -> u64 {
        self.converted.iter().map(|r| r.compressed_size).sum()
    }
}

/// Percentage saved going from `before` to `after` bytes, rounded half up.
/// Negative when the output grew.
pub fn compression_ratio(before: u64, after: u64) -> i64 {
    if before == 0 {
        return 0;
    }
    let percent = (1.0 - after as f64 / before as f64) * 100.0;
    (percent + 0.5).floor() as i64
}

/// Output lives next to the input: the rename (or the input's stem) plus `.webp`.
pub fn generate_output_path(input_path: &Path, rename: Option<&str>) -> Result<PathBuf> {
    let base_name = match rename {
        Some(name) => name.to_string(),
        None => input_path
            .file_stem()
            .ok_or_else(|| CompressionError::InvalidFileName(input_path.to_path_buf()))?
            .to_string_lossy()
            .into_owned(),
    };

    let output_filename = format!("{}.{}", base_name, OUTPUT_EXTENSION);
    Ok(match input_path.parent() {
        Some(parent) => parent.join(output_filename),
        None => PathBuf::from(output_filename),
    })
}

/// Rejects a rename for anything but a single-file batch.
pub fn validate_batch(image_files: &[PathBuf], options: &BatchOptions) -> Result<()> {
    if options.rename().is_some() && image_files.len() > 1 {
        return Err(CompressionError::RenameWithMultipleFiles(image_files.len()));
    }
    Ok(())
}

/// Converts one file; removal of the source is attempted only after the
/// output has been written.
pub fn process_single_image(input_path: &Path, options: &BatchOptions) -> Result<CompressionResult> {
    let output_path = generate_output_path(input_path, options.rename())?;
    if output_path == input_path {
        return Err(CompressionError::SameInputOutput(output_path));
    }

    let (original_size, compressed_size) = convert_to_webp(input_path, &output_path, &options.webp)?;

    let removal = if options.delete_original {
        remove_original(input_path)
    } else {
        Removal::Kept
    };

    Ok(CompressionResult {
        input: input_path.to_path_buf(),
        output: output_path,
        original_size,
        compressed_size,
        removal,
    })
}

/// Deletes a converted source. Failure is returned, not raised, so the
/// conversion still counts.
pub fn remove_original(input_path: &Path) -> Removal {
    match fs::remove_file(input_path) {
        Ok(()) => Removal::Removed,
        Err(e) => Removal::Failed(e.to_string()),
    }
}

fn report(result: &CompressionResult) {
    info!(
        "Compressed and converted: {} → {} | ({}%) smaller",
        result.input.display(),
        result.output.display(),
        result.ratio()
    );

    match &result.removal {
        Removal::Kept => {}
        Removal::Removed => {
            info!("Original file removed.");
        }
        Removal::Failed(msg) => {
            error!("Failed to remove original {}: {}", result.input.display(), msg);
        }
    }
}

/// Converts every file in order. A failing file is reported and skipped; only
/// the up-front validation can fail the whole batch.
pub fn batch_compress_images(image_files: &[PathBuf], options: &BatchOptions) -> Result<BatchSummary> {
    validate_batch(image_files, options)?;

    let mut summary = BatchSummary::default();
    for input_path in image_files {
        tracing::debug!(input = %input_path.display(), "converting");
        summary.record(input_path, process_single_image(input_path, options));
    }

    Ok(summary)
}
