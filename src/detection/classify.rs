use image::{Rgb, RgbImage};
use imageproc::contours::Contour;
use imageproc::drawing::draw_line_segment_mut;
use imageproc::geometry::{approximate_polygon_dp, arc_length};
use imageproc::point::Point;

use crate::models::{ShapeCategory, ShapeCounts};

/// Polygon-approximation tolerance as a fraction of contour perimeter.
pub const APPROX_TOLERANCE_FACTOR: f64 = 0.04;

/// Minimum circularity (4*pi*area / perimeter^2) for a many-vertex
/// contour to count as a circle.
pub const CIRCULARITY_CUTOFF: f64 = 0.8;

/// Classify every contour and tally the results. Contours recognized
/// as triangle, quadrilateral, pentagon or circle are outlined on the
/// canvas in their category color; "other" contours are only counted.
pub fn classify_contours(contours: &[Contour<i32>], canvas: &mut RgbImage) -> ShapeCounts {
    let mut counts = ShapeCounts::default();

    for contour in contours {
        let category = classify_contour(&contour.points);
        counts.increment(category);

        if let Some(color) = category.overlay_color() {
            draw_contour_outline(canvas, &contour.points, color);
        }
    }

    counts
}

/// Bucket a single contour by approximated vertex count and, for
/// many-vertex contours, circularity.
pub fn classify_contour(points: &[Point<i32>]) -> ShapeCategory {
    // Degenerate contours (a point, a segment, zero perimeter) carry
    // no usable geometry.
    if points.len() < 3 {
        return ShapeCategory::Other;
    }

    let perimeter = arc_length(points, true);
    if perimeter <= 0.0 {
        return ShapeCategory::Other;
    }

    let approx = approximate_polygon_dp(points, APPROX_TOLERANCE_FACTOR * perimeter, true);

    match vertex_count(&approx) {
        3 => ShapeCategory::Triangle,
        4 => ShapeCategory::Quadrilateral,
        5 => ShapeCategory::Pentagon,
        n if n > 5 => {
            let area = polygon_area(points).abs();
            let circularity = 4.0 * std::f64::consts::PI * area / (perimeter * perimeter);
            if circularity > CIRCULARITY_CUTOFF {
                ShapeCategory::Circle
            } else {
                ShapeCategory::Other
            }
        }
        _ => ShapeCategory::Other,
    }
}

/// Number of distinct vertices in an approximated polygon. A closed
/// approximation may repeat its first point as the last one.
fn vertex_count(approx: &[Point<i32>]) -> usize {
    match (approx.first(), approx.last()) {
        (Some(first), Some(last)) if approx.len() > 1 && first == last => approx.len() - 1,
        _ => approx.len(),
    }
}

/// Signed area via the shoelace formula, in pixels squared.
fn polygon_area(points: &[Point<i32>]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    (0..n)
        .map(|i| {
            let j = (i + 1) % n;
            let (pi, pj) = (points[i], points[j]);
            (pi.x as f64) * (pj.y as f64) - (pj.x as f64) * (pi.y as f64)
        })
        .sum::<f64>()
        / 2.0
}

/// Draw the contour as a closed polyline on the canvas.
fn draw_contour_outline(canvas: &mut RgbImage, points: &[Point<i32>], color: Rgb<u8>) {
    if points.len() < 2 {
        return;
    }
    for i in 0..points.len() {
        let p1 = points[i];
        let p2 = points[(i + 1) % points.len()];
        draw_line_segment_mut(
            canvas,
            (p1.x as f32, p1.y as f32),
            (p2.x as f32, p2.y as f32),
            color,
        );
    }
}
