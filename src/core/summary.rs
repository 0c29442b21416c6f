use crate::core::certifications::{scan_certifications_at, SkippedCertification, DEFAULT_LOOKBACK_DAYS};
use crate::core::degree::{get_highest_degree, DegreeTier};
use crate::core::normalize::{clean_name, normalize_role};
use crate::core::profile::{get_age_at, get_graduation_year, get_tags_from_cv};
use crate::core::projects::{
    get_days_since_last_finished_project_at, newest_project_is_older_than_n_months_at,
    sort_projects_at, SortOrder,
};
use crate::core::tenure::DateRange;
use crate::domain::model::{CvResponse, Language};
use crate::utils::error::Result;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const DEFAULT_STALE_AFTER_MONTHS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    pub language: Language,
    pub certification_lookback_days: i64,
    pub stale_after_months: u32,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            certification_lookback_days: DEFAULT_LOOKBACK_DAYS,
            stale_after_months: DEFAULT_STALE_AFTER_MONTHS,
        }
    }
}

/// Derived facts for one CV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CvSummary {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub graduation_year: Option<i32>,
    pub highest_degree: Option<DegreeTier>,
    pub roles: Vec<String>,
    pub tags: Vec<String>,
    pub newest_project: Option<DateRange>,
    pub days_since_last_finished_project: Option<i64>,
    pub newest_project_is_stale: bool,
    pub new_certifications: Vec<String>,
    pub skipped_certifications: Vec<SkippedCertification>,
}

pub fn summarize(cv: &CvResponse, options: &SummaryOptions) -> Result<CvSummary> {
    summarize_at(cv, options, Local::now())
}

pub fn summarize_at(
    cv: &CvResponse,
    options: &SummaryOptions,
    now: DateTime<Local>,
) -> Result<CvSummary> {
    let language = options.language;

    let projects = sort_projects_at(cv, SortOrder::NewestFirst, now)?;
    let newest = projects.first();

    let certifications =
        scan_certifications_at(cv, options.certification_lookback_days, language, now)?;
    let new_certifications = certifications
        .new
        .iter()
        .filter_map(|cert| cert.name.get(language))
        .map(str::to_string)
        .collect();

    let summary = CvSummary {
        name: clean_name(cv.name.as_deref()),
        age: get_age_at(cv, now.date_naive()),
        graduation_year: get_graduation_year(cv)?,
        highest_degree: get_highest_degree(cv),
        roles: cv
            .cv_roles
            .iter()
            .filter_map(|role| normalize_role(role, language))
            .filter(|role| !role.is_empty())
            .collect(),
        tags: get_tags_from_cv(cv, language),
        newest_project: newest.map(|project| project.range),
        days_since_last_finished_project: newest
            .map(|project| get_days_since_last_finished_project_at(project, now)),
        newest_project_is_stale: newest_project_is_older_than_n_months_at(
            cv,
            options.stale_after_months,
            now,
        )?,
        new_certifications,
        skipped_certifications: certifications.skipped,
    };

    tracing::debug!(
        name = summary.name.as_deref().unwrap_or_default(),
        projects = projects.len(),
        stale = summary.newest_project_is_stale,
        "Summarized CV"
    );

    Ok(summary)
}
