// Adapters layer: concrete implementations for external systems.

pub mod file;
pub mod http;

pub use file::load_cv_file;
pub use http::CvPartnerClient;
