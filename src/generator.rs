use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::IconConfig;

/// One written icon. Width and height are both `size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconFile {
    pub size: u32,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Every configured size was written, in list order
    Generated(Vec<IconFile>),
    /// The source image could not be opened; nothing was written
    SourceMissing { path: PathBuf },
}

impl GenerationOutcome {
    pub fn icons(&self) -> &[IconFile] {
        match self {
            GenerationOutcome::Generated(icons) => icons,
            GenerationOutcome::SourceMissing { .. } => &[],
        }
    }
}

pub struct IconGenerator {
    config: IconConfig,
}

impl IconGenerator {
    pub fn new(config: IconConfig) -> Self {
        IconGenerator { config }
    }

    /// Resize the source logo into every configured size.
    ///
    /// A missing or unreadable source is reported on the console and returned as
    /// [`GenerationOutcome::SourceMissing`]. Decode and write failures are errors. Icons
    /// written before a failed write are left in place.
    pub fn generate(&self) -> Result<GenerationOutcome> {
        self.config.validate()?;

        fs::create_dir_all(&self.config.output_dir).with_context(|| {
            format!(
                "Failed to create output directory {}",
                self.config.output_dir.display()
            )
        })?;

        let source = match open_source(&self.config.source_path) {
            Ok(reader) => reader,
            Err(_) => {
                println!("{}", missing_source_message(&self.config.source_path));
                return Ok(GenerationOutcome::SourceMissing {
                    path: self.config.source_path.clone(),
                });
            }
        };

        let decoded = source.decode().with_context(|| {
            format!(
                "Failed to decode source image {}",
                self.config.source_path.display()
            )
        })?;
        let rgba = normalize_rgba(decoded);

        let mut icons = Vec::with_capacity(self.config.sizes.len());
        for &size in &self.config.sizes {
            let path = self.config.icon_path(size);
            let resized = resize_square(&rgba, size);
            resized
                .save_with_format(&path, ImageFormat::Png)
                .with_context(|| format!("Failed to write icon {}", path.display()))?;

            println!("✅ {} ({}x{})", path.display(), size, size);
            icons.push(IconFile { size, path });
        }

        println!(
            "\n🎉 {} icons generated in {}/",
            icons.len(),
            self.config.output_dir.display()
        );

        Ok(GenerationOutcome::Generated(icons))
    }
}

/// Run the generator with the built-in paths and sizes.
pub fn generate_icons() -> Result<()> {
    IconGenerator::new(IconConfig::default()).generate()?;
    Ok(())
}

/// Console diagnostic for a source image that could not be opened
pub fn missing_source_message(path: &Path) -> String {
    format!(
        "❌ Source image not found or unreadable: {}\n   Adjust the source path to point at your logo",
        path.display()
    )
}

// Content sniffing first, extension as fallback
fn open_source(path: &Path) -> io::Result<ImageReader<io::BufReader<fs::File>>> {
    ImageReader::open(path)?.with_guessed_format()
}

/// Convert to 8-bit RGBA unless the image already is. Sources without alpha come out
/// fully opaque.
pub fn normalize_rgba(image: DynamicImage) -> RgbaImage {
    match image {
        DynamicImage::ImageRgba8(rgba) => rgba,
        other => other.into_rgba8(),
    }
}

/// Exact `size`x`size` Lanczos3 resize. Aspect ratio is not preserved.
pub fn resize_square(image: &RgbaImage, size: u32) -> RgbaImage {
    imageops::resize(image, size, size, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage, Rgba};

    #[test]
    fn test_normalize_keeps_rgba() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 40]));
        let out = normalize_rgba(DynamicImage::ImageRgba8(img.clone()));
        assert_eq!(out, img);
    }

    #[test]
    fn test_normalize_rgb_is_opaque() {
        let img = RgbImage::from_pixel(3, 2, Rgb([200, 100, 50]));
        let out = normalize_rgba(DynamicImage::ImageRgb8(img));
        assert_eq!(out.dimensions(), (3, 2));
        assert!(out.pixels().all(|p| *p == Rgba([200, 100, 50, 255])));
    }

    #[test]
    fn test_normalize_grayscale() {
        let img = GrayImage::from_pixel(2, 2, Luma([128]));
        let out = normalize_rgba(DynamicImage::ImageLuma8(img));
        assert!(out.pixels().all(|p| *p == Rgba([128, 128, 128, 255])));
    }

    #[test]
    fn test_resize_non_square_is_square() {
        let img = RgbaImage::from_pixel(300, 150, Rgba([0, 0, 255, 255]));
        let out = resize_square(&img, 72);
        assert_eq!(out.dimensions(), (72, 72));
    }

    #[test]
    fn test_resize_upscales() {
        let img = RgbaImage::from_pixel(16, 16, Rgba([255, 0, 0, 255]));
        let out = resize_square(&img, 512);
        assert_eq!(out.dimensions(), (512, 512));
        // Flat input stays flat through Lanczos
        let px = out.get_pixel(256, 256);
        assert!(px[0] >= 254 && px[1] <= 1 && px[2] <= 1 && px[3] >= 254);
    }

    #[test]
    fn test_missing_source_message() {
        let msg = missing_source_message(Path::new("public/logo.png"));
        assert!(msg.contains("public/logo.png"));
        assert!(msg.contains("not found or unreadable"));
        assert!(msg.contains("Adjust the source path"));
        assert_eq!(msg.lines().count(), 2);
    }

    #[test]
    fn test_outcome_icons() {
        let missing = GenerationOutcome::SourceMissing {
            path: PathBuf::from("nope.png"),
        };
        assert!(missing.icons().is_empty());

        let icon = IconFile {
            size: 72,
            path: PathBuf::from("icons/icon-72x72.png"),
        };
        let generated = GenerationOutcome::Generated(vec![icon.clone()]);
        assert_eq!(generated.icons(), &[icon]);
    }
}
