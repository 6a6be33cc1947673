use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use webp_squeeze::cli::Args;
use webp_squeeze::{batch_compress_images, error, logger, resolve_inputs};

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init(args.quiet, args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let options = args.batch_options().context("invalid options")?;
    let image_files = resolve_inputs(&args.paths, args.recursive)?;
    tracing::debug!(count = image_files.len(), "resolved image files");

    let summary = batch_compress_images(&image_files, &options)?;

    // Per-file failures were already reported and do not change the exit code.
    tracing::debug!(
        converted = summary.converted.len(),
        failed = summary.failed.len(),
        removed = summary.removed_count(),
        bytes_before = summary.total_before(),
        bytes_after = summary.total_after(),
        "batch finished"
    );
    Ok(())
}
