use crate::constants::{DEFAULT_QUALITY, MAX_QUALITY, WEBP_METHOD};
use crate::error::{CompressionError, Result};
use image::{DynamicImage, ImageReader, RgbaImage};
use libwebp_sys::WebPConfig;
use resvg::{tiny_skia, usvg};
use std::fs;
use std::path::Path;

/// Encoder settings shared by every file in a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebpOptions {
    pub quality: u8,
    pub method: i32,
    pub sharp_yuv: bool,
}

impl WebpOptions {
    pub fn new(quality: Option<u8>) -> Result<Self> {
        let quality = quality.unwrap_or(DEFAULT_QUALITY);
        if quality > MAX_QUALITY {
            return Err(CompressionError::InvalidQuality(quality));
        }

        Ok(Self::with_quality(quality))
    }

    const fn with_quality(quality: u8) -> Self {
        Self {
            quality,
            method: WEBP_METHOD,
            sharp_yuv: true,
        }
    }

    fn to_config(self) -> Result<WebPConfig> {
        let mut config = WebPConfig::new().map_err(|_| {
            CompressionError::WebpEncoding("libwebp config version mismatch".to_string())
        })?;
        config.lossless = 0;
        config.quality = f32::from(self.quality);
        config.method = self.method;
        config.use_sharp_yuv = i32::from(self.sharp_yuv);
        Ok(config)
    }
}

impl Default for WebpOptions {
    fn default() -> Self {
        Self::with_quality(DEFAULT_QUALITY)
    }
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

/// Renders an SVG document at its intrinsic size.
pub fn rasterize_svg(data: &[u8]) -> Result<DynamicImage> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        CompressionError::SvgRender(format!(
            "cannot allocate {}x{} canvas",
            size.width(),
            size.height()
        ))
    })?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha
    let pixels: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    RgbaImage::from_raw(size.width(), size.height(), pixels)
        .map(DynamicImage::ImageRgba8)
        .ok_or_else(|| CompressionError::SvgRender("pixel buffer size mismatch".to_string()))
}

/// Decodes an image, sniffing the real format from its contents so a
/// mislabelled extension still loads. SVG files are rasterized instead.
///
/// # Arguments
/// * `input_path` - Path to the image file to load
///
/// # Returns
/// * `Ok((image, file_size))` - The decoded image and its size on disk in bytes
/// * `Err(CompressionError)` - If the file cannot be read or decoded
pub fn load_image_with_metadata(input_path: &Path) -> Result<(DynamicImage, u64)> {
    let file_size = fs::metadata(input_path)?.len();
    if is_svg(input_path) {
        let img = rasterize_svg(&fs::read(input_path)?)?;
        return Ok((img, file_size));
    }

    let img = ImageReader::open(input_path)?
        .with_guessed_format()?
        .decode()?;
    Ok((img, file_size))
}

/// Encodes a decoded image as lossy WebP.
pub fn encode_webp(img: &DynamicImage, options: &WebpOptions) -> Result<Vec<u8>> {
    let config = options.to_config()?;
    let (width, height) = (img.width(), img.height());

    let encoded = if img.color().has_alpha() {
        let rgba = img.to_rgba8();
        webp::Encoder::from_rgba(rgba.as_raw(), width, height)
            .encode_advanced(&config)
            .map(|memory| memory.to_vec())
    } else {
        let rgb = img.to_rgb8();
        webp::Encoder::from_rgb(rgb.as_raw(), width, height)
            .encode_advanced(&config)
            .map(|memory| memory.to_vec())
    };

    encoded.map_err(|e| CompressionError::WebpEncoding(format!("{:?}", e)))
}

/// Converts `input_path` to WebP at `output_path`, overwriting any existing file.
///
/// # Returns
/// * `Ok((original_size, compressed_size))` - Tuple of file sizes in bytes
/// * `Err(CompressionError)` - If decoding, encoding or writing fails
pub fn convert_to_webp(
    input_path: &Path,
    output_path: &Path,
    options: &WebpOptions,
) -> Result<(u64, u64)> {
    let (img, original_size) = load_image_with_metadata(input_path)?;
    tracing::debug!(
        input = %input_path.display(),
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "decoded image"
    );

    let encoded = encode_webp(&img, options)?;
    fs::write(output_path, &encoded)?;

    let compressed_size = fs::metadata(output_path)?.len();
    Ok((original_size, compressed_size))
}
