use std::path::PathBuf;

use crate::models::ShapeAnalysis;

#[derive(Debug, Clone)]
pub enum Message {
    ChooseImage,
    ImagePicked(Option<PathBuf>),
    AnalysisFinished(Result<ShapeAnalysis, String>),
    BackToPicker,
}
