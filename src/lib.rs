pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod logger;
pub mod processing;
pub mod resolver;

pub use batch::{
    batch_compress_images, compression_ratio, generate_output_path, process_single_image,
    remove_original, BatchOptions, BatchSummary, CompressionResult, Removal,
};
pub use error::{CompressionError, Result};
pub use processing::{
    convert_to_webp, encode_webp, load_image_with_metadata, rasterize_svg, WebpOptions,
};
pub use resolver::{discover, is_image_file, resolve_inputs, Discovery};
