use image::{Rgb, RgbImage};

/// The five buckets a contour can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeCategory {
    Triangle,
    Quadrilateral,
    Pentagon,
    Circle,
    Other,
}

impl ShapeCategory {
    pub const ALL: [ShapeCategory; 5] = [
        ShapeCategory::Triangle,
        ShapeCategory::Quadrilateral,
        ShapeCategory::Pentagon,
        ShapeCategory::Circle,
        ShapeCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShapeCategory::Triangle => "Triangles",
            ShapeCategory::Quadrilateral => "Quadrilaterals",
            ShapeCategory::Pentagon => "Pentagons",
            ShapeCategory::Circle => "Circles",
            ShapeCategory::Other => "Other",
        }
    }

    /// Color used to outline contours of this category on the annotated
    /// canvas. "Other" contours are counted but never drawn.
    pub fn overlay_color(&self) -> Option<Rgb<u8>> {
        match self {
            ShapeCategory::Triangle => Some(Rgb([0, 255, 0])),
            ShapeCategory::Quadrilateral => Some(Rgb([0, 0, 255])),
            ShapeCategory::Pentagon => Some(Rgb([255, 255, 0])),
            ShapeCategory::Circle => Some(Rgb([255, 0, 0])),
            ShapeCategory::Other => None,
        }
    }
}

/// Per-category contour tallies, built up while iterating contours.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeCounts {
    triangles: u32,
    quadrilaterals: u32,
    pentagons: u32,
    circles: u32,
    others: u32,
}

impl ShapeCounts {
    pub fn increment(&mut self, category: ShapeCategory) {
        match category {
            ShapeCategory::Triangle => self.triangles += 1,
            ShapeCategory::Quadrilateral => self.quadrilaterals += 1,
            ShapeCategory::Pentagon => self.pentagons += 1,
            ShapeCategory::Circle => self.circles += 1,
            ShapeCategory::Other => self.others += 1,
        }
    }

    pub fn get(&self, category: ShapeCategory) -> u32 {
        match category {
            ShapeCategory::Triangle => self.triangles,
            ShapeCategory::Quadrilateral => self.quadrilaterals,
            ShapeCategory::Pentagon => self.pentagons,
            ShapeCategory::Circle => self.circles,
            ShapeCategory::Other => self.others,
        }
    }

    /// Total number of contours classified. Every contour lands in
    /// exactly one bucket, so this equals the contour count.
    pub fn total(&self) -> u32 {
        ShapeCategory::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

/// Output of a full pipeline run: the original image with colored
/// contour overlays burned in, plus the per-category tallies.
#[derive(Debug, Clone)]
pub struct ShapeAnalysis {
    pub annotated: RgbImage,
    pub counts: ShapeCounts,
}
