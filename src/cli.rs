use crate::batch::BatchOptions;
use crate::constants::MAX_QUALITY;
use crate::error::Result;
use crate::processing::WebpOptions;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "webp-squeeze",
    about = "Compress images by converting them to WebP",
    long_about = "webp-squeeze converts image files (jpg, jpeg, png, webp, svg, gif, avif, tiff) \
                  to lossy WebP next to the originals. Directories are scanned for images; \
                  subdirectories are included only with --recursive.",
    version,
    after_help = "EXAMPLES:\n  \
    webp-squeeze photo.jpg\n  \
    webp-squeeze photo.png -r banner -q 90\n  \
    webp-squeeze ./images -R -d"
)]
pub struct Args {
    #[arg(
        required = true,
        num_args = 1..,
        value_name = "PATHS",
        help = "Image files or directories to convert"
    )]
    pub paths: Vec<PathBuf>,

    #[arg(
        short = 'd',
        long = "delete",
        help = "Delete original files after compression"
    )]
    pub delete: bool,

    #[arg(
        short = 'q',
        long,
        default_value_t = crate::constants::DEFAULT_QUALITY,
        value_parser = clap::value_parser!(u8).range(0..=MAX_QUALITY as i64),
        help = "Compression quality (0-100)"
    )]
    pub quality: u8,

    #[arg(
        short = 'r',
        long,
        value_name = "NAME",
        help = "Rename file name (only valid for single file)",
        long_help = "Base name for the output file, without extension. \
                     Only allowed when exactly one image file is selected."
    )]
    pub rename: Option<String>,

    #[arg(
        short = 'R',
        long,
        help = "Scan folders recursively for image files"
    )]
    pub recursive: bool,

    #[arg(short = 'v', long, help = "Print debug diagnostics to stderr")]
    pub verbose: bool,

    #[arg(long, help = "Only print failures")]
    pub quiet: bool,
}

impl Args {
    pub fn batch_options(&self) -> Result<BatchOptions> {
        Ok(BatchOptions {
            webp: WebpOptions::new(Some(self.quality))?,
            rename: self.rename.clone().filter(|name| !name.is_empty()),
            delete_original: self.delete,
        })
    }
}
