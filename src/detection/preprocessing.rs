use image::{DynamicImage, GrayImage};
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;

/// Sigma OpenCV derives for a 5x5 Gaussian kernel when asked to pick
/// one automatically: 0.3 * ((5 - 1) / 2 - 1) + 0.8.
pub const BLUR_SIGMA: f32 = 1.1;

/// Fixed Canny hysteresis thresholds. Not configurable; changing them
/// changes which contours exist downstream.
pub const CANNY_LOW: f32 = 50.0;
pub const CANNY_HIGH: f32 = 150.0;

/// Convert image to grayscale
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Apply Gaussian blur to reduce noise before edge detection
pub fn apply_blur(img: &GrayImage) -> GrayImage {
    gaussian_blur_f32(img, BLUR_SIGMA)
}

/// Detect edges using the Canny edge detector
pub fn detect_edges(img: &GrayImage) -> GrayImage {
    canny(img, CANNY_LOW, CANNY_HIGH)
}
