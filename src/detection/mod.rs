pub mod classify;
pub mod contours;
pub mod preprocessing;

use std::path::Path;

use image::{DynamicImage, ImageReader};
use log::{debug, info};

use crate::error::PipelineError;
use crate::models::{ShapeAnalysis, ShapeCategory};

/// Load and decode an image from disk.
pub fn load_image(path: &Path) -> Result<DynamicImage, PipelineError> {
    let reader = ImageReader::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => PipelineError::ImageNotFound {
            path: path.to_path_buf(),
        },
        _ => PipelineError::Io(e),
    })?;
    Ok(reader.decode()?)
}

/// Run the full detection pipeline on a decoded image:
/// grayscale -> blur -> Canny -> outer contours -> classification,
/// with category overlays drawn on a copy of the input.
pub fn analyze(img: &DynamicImage) -> ShapeAnalysis {
    debug!("converting to grayscale");
    let gray = preprocessing::to_grayscale(img);

    debug!("applying gaussian blur");
    let blurred = preprocessing::apply_blur(&gray);

    debug!("detecting edges");
    let edges = preprocessing::detect_edges(&blurred);

    debug!("finding contours");
    let found = contours::find_outer_contours(&edges);
    debug!("found {} outer contours", found.len());

    let mut canvas = img.to_rgb8();
    let counts = classify::classify_contours(&found, &mut canvas);

    info!(
        "classified {} contours ({})",
        counts.total(),
        ShapeCategory::ALL
            .iter()
            .map(|c| format!("{}: {}", c.label(), counts.get(*c)))
            .collect::<Vec<_>>()
            .join(", ")
    );

    ShapeAnalysis {
        annotated: canvas,
        counts,
    }
}

/// Load an image from disk and analyze it.
pub fn analyze_file(path: &Path) -> Result<ShapeAnalysis, PipelineError> {
    let img = load_image(path)?;
    Ok(analyze(&img))
}
