pub const DEFAULT_QUALITY: u8 = 80;
pub const MAX_QUALITY: u8 = 100;

/// libwebp `method`: 0 is fastest, 6 spends the most effort on size.
pub const WEBP_METHOD: i32 = 6;

pub const OUTPUT_EXTENSION: &str = "webp";

/// Extensions accepted as image inputs, compared lowercase.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] =
    &["jpg", "jpeg", "png", "webp", "svg", "gif", "avif", "tiff"];

// Common output message prefixes
pub const WARNING_PREFIX: &str = "⚠️ ";
pub const ERROR_PREFIX: &str = "❌";

pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const VERBOSE_LOG_FILTER: &str = "webp_squeeze=debug";
