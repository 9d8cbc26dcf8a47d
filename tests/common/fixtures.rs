// Shared by multiple test binaries; not every binary uses every helper.
#![allow(dead_code)]

use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_polygon_mut};
use imageproc::point::Point;
use tempfile::NamedTempFile;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

fn blank_canvas(width: u32, height: u32) -> RgbImage {
    RgbImage::new(width, height)
}

fn filled_polygon(width: u32, height: u32, corners: &[(i32, i32)]) -> DynamicImage {
    let mut img = blank_canvas(width, height);
    let points: Vec<Point<i32>> = corners.iter().map(|&(x, y)| Point::new(x, y)).collect();
    draw_polygon_mut(&mut img, &points, WHITE);
    DynamicImage::ImageRgb8(img)
}

/// White filled triangle on a black background.
pub fn triangle_image() -> DynamicImage {
    filled_polygon(300, 300, &[(150, 40), (40, 250), (260, 250)])
}

/// White filled axis-aligned square.
pub fn square_image() -> DynamicImage {
    filled_polygon(300, 300, &[(60, 60), (240, 60), (240, 240), (60, 240)])
}

/// White filled regular pentagon, point up.
pub fn pentagon_image() -> DynamicImage {
    let corners: Vec<(i32, i32)> = (0..5)
        .map(|i| {
            let theta = std::f64::consts::TAU * i as f64 / 5.0 - std::f64::consts::FRAC_PI_2;
            (
                (150.0 + 100.0 * theta.cos()).round() as i32,
                (160.0 + 100.0 * theta.sin()).round() as i32,
            )
        })
        .collect();
    filled_polygon(300, 300, &corners)
}

/// White filled circle.
pub fn circle_image() -> DynamicImage {
    let mut img = blank_canvas(300, 300);
    draw_filled_circle_mut(&mut img, (150, 150), 90, WHITE);
    DynamicImage::ImageRgb8(img)
}

/// White filled L-shaped blob: six corners, circularity well below
/// the circle cutoff.
pub fn l_blob_image() -> DynamicImage {
    filled_polygon(
        300,
        300,
        &[
            (50, 50),
            (250, 50),
            (250, 150),
            (150, 150),
            (150, 250),
            (50, 250),
        ],
    )
}

/// One triangle, one square and one circle, spaced far enough apart
/// that their edge rings stay separate.
pub fn mixed_scene_image() -> DynamicImage {
    let mut img = blank_canvas(700, 300);

    let triangle: Vec<Point<i32>> = [(100, 40), (30, 250), (170, 250)]
        .iter()
        .map(|&(x, y)| Point::new(x, y))
        .collect();
    draw_polygon_mut(&mut img, &triangle, WHITE);

    let square: Vec<Point<i32>> = [(270, 70), (430, 70), (430, 230), (270, 230)]
        .iter()
        .map(|&(x, y)| Point::new(x, y))
        .collect();
    draw_polygon_mut(&mut img, &square, WHITE);

    draw_filled_circle_mut(&mut img, (570, 150), 80, WHITE);

    DynamicImage::ImageRgb8(img)
}

/// Writes an image to a temp PNG file. The file is removed on drop.
pub fn save_to_temp_png(img: &DynamicImage) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// A PNG-suffixed file whose content is not a decodable image.
pub fn save_corrupt_png() -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp file");
    std::fs::write(file.path(), b"this is not an image").expect("Failed to write temp file");
    file
}
