use image::GrayImage;
use imageproc::contours::{BorderType, Contour, find_contours};

/// Trace closed boundaries in a binary edge image, keeping only outer
/// contours. Holes nested inside another boundary are discarded.
///
/// Ordering follows whatever the border-following algorithm yields and
/// carries no meaning; callers must not rely on it.
pub fn find_outer_contours(edges: &GrayImage) -> Vec<Contour<i32>> {
    find_contours::<i32>(edges)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;
    use imageproc::drawing::draw_hollow_rect_mut;
    use imageproc::rect::Rect;

    #[test]
    fn hollow_rect_yields_one_outer_contour() {
        let mut img = GrayImage::new(60, 60);
        draw_hollow_rect_mut(&mut img, Rect::at(10, 10).of_size(30, 30), Luma([255]));

        // The ring has an outer border and an inner (hole) border.
        let all = find_contours::<i32>(&img);
        assert!(all.len() > 1);

        let outer = find_outer_contours(&img);
        assert_eq!(outer.len(), 1);
        assert!(outer[0].points.len() >= 4);
    }

    #[test]
    fn blank_image_has_no_contours() {
        let img = GrayImage::new(32, 32);
        assert!(find_outer_contours(&img).is_empty());
    }
}
