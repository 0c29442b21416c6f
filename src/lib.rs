pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{load_cv_file, CvPartnerClient};
pub use config::{CvLocation, Settings};
pub use crate::core::certifications::{get_new_certifications, scan_certifications, CertificationScan};
pub use crate::core::degree::{get_highest_degree, DegreeTier};
pub use crate::core::normalize::{clean_name, normalize_role};
pub use crate::core::profile::{get_age, get_graduation_year, get_tags_from_cv};
pub use crate::core::projects::{
    get_days_since_last_finished_project, newest_project_is_older_than_n_months, sort_projects,
    DatedProject, SortOrder,
};
pub use crate::core::summary::{summarize, CvSummary, SummaryOptions};
pub use crate::core::tenure::{create_dates_from_project, DateRange};
pub use domain::model::{
    Certification, CvResponse, CvRole, Department, Education, Employee, Language, LocalizedText,
    ProjectExperience, Technology, TechnologySkill,
};
pub use domain::ports::CvSource;
pub use utils::error::{CvError, Result};
