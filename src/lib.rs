pub mod detection;
pub mod error;
pub mod models;

pub use error::PipelineError;
pub use models::{ShapeAnalysis, ShapeCategory, ShapeCounts};

#[cfg(feature = "gui")]
pub mod gui;
