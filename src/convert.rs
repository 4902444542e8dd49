use crate::error::ImageError;
use image::{DynamicImage, RgbImage};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Conversion targets. The set is closed: JPG carries no transparency and
/// needs the alpha channel flattened before encoding, PNG passes the pixel
/// grid straight through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// File extension used for default output names.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
        }
    }

    fn codec(self) -> image::ImageFormat {
        match self {
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
        }
    }
}

/// Decode `input`, re-encode it as `format` and write the result to `output`.
///
/// The encoded bytes are built in memory first, so neither a failed decode
/// nor a failed encode leaves a partial output file behind.
pub fn convert(input: &Path, output: &Path, format: ImageFormat) -> Result<(), ImageError> {
    let image = decode(input)?;

    let image = match format {
        ImageFormat::Jpeg if image.color().has_alpha() => {
            debug!(input = %input.display(), "flattening alpha channel for JPG");
            DynamicImage::ImageRgb8(flatten_alpha(&image))
        }
        _ => image,
    };

    let mut encoded = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut encoded), format.codec())
        .map_err(|source| ImageError::Encode {
            format: format.extension(),
            source,
        })?;
    fs::write(output, encoded)?;
    Ok(())
}

/// Decode an image file into an in-memory pixel grid.
pub fn decode(input: &Path) -> Result<DynamicImage, ImageError> {
    image::ImageReader::open(input)?
        .with_guessed_format()?
        .decode()
        .map_err(ImageError::Decode)
}

/// Composite the image over an opaque black background, dropping the alpha
/// channel.
fn flatten_alpha(image: &DynamicImage) -> RgbImage {
    let rgba = image.to_rgba8();
    let mut rgb = RgbImage::new(rgba.width(), rgba.height());

    for (out, px) in rgb.pixels_mut().zip(rgba.pixels()) {
        let alpha = u16::from(px[3]);
        for channel in 0..3 {
            out[channel] = ((u16::from(px[channel]) * alpha) / 255) as u8;
        }
    }

    rgb
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba, RgbaImage};

    fn uniform_rgba(width: u32, height: u32, pixel: [u8; 4]) -> RgbaImage {
        let mut img: RgbaImage = ImageBuffer::new(width, height);
        for px in img.pixels_mut() {
            *px = Rgba(pixel);
        }
        img
    }

    #[test]
    fn flatten_composites_over_black() {
        let mut rgba: RgbaImage = ImageBuffer::new(2, 1);
        rgba.put_pixel(0, 0, Rgba([200, 100, 50, 0]));
        rgba.put_pixel(1, 0, Rgba([200, 100, 50, 255]));

        let rgb = flatten_alpha(&DynamicImage::ImageRgba8(rgba));

        assert_eq!(
            rgb.get_pixel(0, 0).0,
            [0, 0, 0],
            "fully transparent pixels flatten to the background"
        );
        assert_eq!(
            rgb.get_pixel(1, 0).0,
            [200, 100, 50],
            "fully opaque pixels keep their color"
        );
    }

    #[test]
    fn flatten_scales_partial_alpha() {
        let rgba = uniform_rgba(1, 1, [200, 100, 50, 128]);
        let rgb = flatten_alpha(&DynamicImage::ImageRgba8(rgba));
        assert_eq!(rgb.get_pixel(0, 0).0, [100, 50, 25]);
    }

    #[test]
    fn rgba_png_to_jpg_never_fails_and_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("alpha.png");
        let dst = dir.path().join("alpha.png.jpg");
        uniform_rgba(4, 4, [10, 200, 30, 0]).save(&src).unwrap();

        convert(&src, &dst, ImageFormat::Jpeg).unwrap();

        let out = image::open(&dst).unwrap();
        assert!(
            !out.color().has_alpha(),
            "JPG output color model carries no alpha channel"
        );
    }

    #[test]
    fn png_target_keeps_the_pixel_grid_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("alpha.png");
        let dst = dir.path().join("copy.png");
        uniform_rgba(4, 4, [10, 200, 30, 77]).save(&src).unwrap();

        convert(&src, &dst, ImageFormat::Png).unwrap();

        let out = image::open(&dst).unwrap();
        assert!(
            out.color().has_alpha(),
            "PNG supports transparency, nothing is flattened"
        );
    }

    #[test]
    fn undecodable_input_is_a_decode_error_with_no_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("notes.txt");
        let dst = dir.path().join("out.png");
        fs::write(&src, "plain text, not pixels").unwrap();

        let err = convert(&src, &dst, ImageFormat::Png).unwrap_err();

        assert!(
            matches!(err, ImageError::Decode(_)),
            "expected a decode error, got {err:?}"
        );
        assert!(
            !dst.exists(),
            "a failed decode must not create an output file"
        );
    }

    #[test]
    fn missing_input_is_reported_before_any_output() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("out.jpg");

        let err = convert(&dir.path().join("absent.png"), &dst, ImageFormat::Jpeg).unwrap_err();

        assert!(matches!(err, ImageError::Io(_)), "got {err:?}");
        assert!(!dst.exists());
    }
}
