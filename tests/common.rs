#![allow(dead_code)]

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn write_test_jpeg(path: &Path) {
    RgbImage::from_fn(64, 48, |x, y| Rgb([(x * 3) as u8, (y * 5) as u8, 128]))
        .save(path)
        .unwrap();
}

pub fn write_test_png(path: &Path) {
    RgbaImage::from_fn(40, 40, |x, y| Rgba([(x * 6) as u8, 40, (y * 6) as u8, 255]))
        .save(path)
        .unwrap();
}

pub fn write_test_svg(path: &Path) {
    std::fs::write(
        path,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4">
  <rect width="4" height="4" fill="#cc3300"/>
</svg>"##,
    )
    .unwrap();
}

pub fn write_text_file(path: &Path) {
    File::create(path)
        .unwrap()
        .write_all(b"not an image")
        .unwrap();
}

/// Two images and a text file at the top, one image and a text file in `subdir`.
pub fn create_nested_directory_structure(root: &Path) -> PathBuf {
    write_test_jpeg(&root.join("top.jpg"));
    write_test_png(&root.join("icon.png"));
    write_text_file(&root.join("notes.txt"));

    let subdir = root.join("subdir");
    std::fs::create_dir(&subdir).unwrap();
    write_test_jpeg(&subdir.join("nested.jpg"));
    write_text_file(&subdir.join("nested.txt"));

    subdir
}
