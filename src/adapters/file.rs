use crate::domain::model::CvResponse;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Reads a CV document saved from the API as JSON.
pub fn load_cv_file<P: AsRef<Path>>(path: P) -> Result<CvResponse> {
    let path = path.as_ref();
    tracing::debug!("Reading CV from {}", path.display());
    let data = fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}
