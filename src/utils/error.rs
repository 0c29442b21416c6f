use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvError {
    #[error("Invalid number in {field}: {value:?}")]
    InvalidNumber {
        field: String,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Invalid date: year {year}, month {month}")]
    InvalidDate { year: i32, month: u32 },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status} for {url}")]
    ApiStatus { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CvError {
    /// One-line hint shown by the CLI next to the error.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CvError::InvalidNumber { .. } | CvError::InvalidDate { .. } => {
                "Check the year/month fields of the CV record"
            }
            CvError::ApiError(_) => "Check network access and the organisation name",
            CvError::ApiStatus { status: 401 | 403, .. } => "Check the API key",
            CvError::ApiStatus { status: 404, .. } => "Check the user id and CV id",
            CvError::ApiStatus { .. } => "Try again later",
            CvError::IoError(_) => "Check that the file exists and is readable",
            CvError::SerializationError(_) => "Check that the input is a CV Partner JSON document",
            CvError::ConfigError { .. }
            | CvError::MissingConfigError { .. }
            | CvError::InvalidConfigValueError { .. } => "Check the command line and config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, CvError>;
