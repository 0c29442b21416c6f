pub mod certifications;
pub mod degree;
pub mod normalize;
pub mod profile;
pub mod projects;
pub mod summary;
pub mod tenure;

pub use crate::domain::model::{CvResponse, Language};
pub use crate::utils::error::Result;
