use crate::{Result, VisualTestError};
use image::{Rgba, RgbaImage};
use image_compare::Algorithm;
use std::path::Path;

/// Result of comparing two images
pub struct CompareResult {
    /// Similarity score from 0.0 to 1.0
    pub similarity: f64,
    /// Number of pixels whose channels differ by more than the noise floor
    pub differing_pixels: u64,
}

/// Channel difference below which two pixels count as equal
const NOISE_FLOOR: u8 = 10;

/// Compare two PNG files using SSIM
pub fn compare_images(reference: &Path, captured: &Path) -> Result<CompareResult> {
    let ref_img = image::open(reference)?.to_rgba8();
    let cap_img = image::open(captured)?.to_rgba8();
    compare_buffers(&ref_img, &cap_img)
}

/// Compare two in-memory images using SSIM on their RGB channels
pub fn compare_buffers(reference: &RgbaImage, captured: &RgbaImage) -> Result<CompareResult> {
    if reference.dimensions() != captured.dimensions() {
        return Err(VisualTestError::Compare(format!(
            "Image dimensions don't match: reference {:?} vs captured {:?}",
            reference.dimensions(),
            captured.dimensions()
        )));
    }

    let ref_rgb = image::DynamicImage::ImageRgba8(reference.clone()).to_rgb8();
    let cap_rgb = image::DynamicImage::ImageRgba8(captured.clone()).to_rgb8();
    let result =
        image_compare::rgb_similarity_structure(&Algorithm::MSSIMSimple, &ref_rgb, &cap_rgb)
            .map_err(|e| VisualTestError::Compare(format!("SSIM comparison failed: {}", e)))?;

    let differing_pixels = reference
        .pixels()
        .zip(captured.pixels())
        .filter(|(a, b)| pixel_difference(a, b) > NOISE_FLOOR)
        .count() as u64;

    Ok(CompareResult {
        similarity: result.score,
        differing_pixels,
    })
}

/// Generate a diff image highlighting differences between two images
pub fn generate_diff_image(reference: &Path, captured: &Path, output: &Path) -> Result<()> {
    let ref_rgba = image::open(reference)?.to_rgba8();
    let cap_rgba = image::open(captured)?.to_rgba8();
    let (width, height) = ref_rgba.dimensions();

    let diff_img = RgbaImage::from_fn(width, height, |x, y| {
        let ref_pixel = ref_rgba.get_pixel(x, y);
        let Some(cap_pixel) = cap_rgba.get_pixel_checked(x, y) else {
            return Rgba([255, 0, 255, 255]);
        };
        let diff = pixel_difference(ref_pixel, cap_pixel);
        if diff > NOISE_FLOOR {
            let intensity = (diff as f32 / 255.0 * 200.0 + 55.0) as u8;
            Rgba([intensity, 0, 0, 255])
        } else {
            Rgba([cap_pixel[0] / 3, cap_pixel[1] / 3, cap_pixel[2] / 3, 255])
        }
    });

    diff_img.save(output)?;
    Ok(())
}

/// Maximum channel difference between two pixels, alpha included
fn pixel_difference(a: &Rgba<u8>, b: &Rgba<u8>) -> u8 {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(x, y)| x.abs_diff(*y))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_buffers() {
        let img = RgbaImage::from_pixel(16, 16, Rgba([255, 255, 0, 255]));
        let result = compare_buffers(&img, &img).unwrap();
        assert!(result.similarity > 0.999);
        assert_eq!(result.differing_pixels, 0);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = RgbaImage::new(8, 8);
        let b = RgbaImage::new(8, 9);
        assert!(matches!(
            compare_buffers(&a, &b),
            Err(VisualTestError::Compare(_))
        ));
    }

    #[test]
    fn test_pixel_difference_counts_alpha() {
        assert_eq!(
            pixel_difference(&Rgba([1, 2, 3, 0]), &Rgba([1, 2, 3, 200])),
            200
        );
    }
}
