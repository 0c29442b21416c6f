use crate::core::degree::is_completed;
use crate::core::tenure::parse_number;
use crate::domain::model::{CvResponse, Language};
use crate::utils::error::Result;
use chrono::{Datelike, Local, NaiveDate};

pub fn get_age(cv: &CvResponse) -> Option<i32> {
    get_age_at(cv, Local::now().date_naive())
}

/// Age by calendar year only; birthday and month are not taken into account.
/// A birth year too far off to subtract gives `None`.
pub fn get_age_at(cv: &CvResponse, today: NaiveDate) -> Option<i32> {
    cv.born_year
        .and_then(|born_year| today.year().checked_sub(born_year))
}

/// Final year of the last completed education.
pub fn get_graduation_year(cv: &CvResponse) -> Result<Option<i32>> {
    let mut latest = None;
    for education in cv.educations.iter().filter(|e| is_completed(e)) {
        let year = parse_number::<i32>("year_to", education.year_to.as_deref())?;
        latest = latest.max(year);
    }
    Ok(latest)
}

/// All non-empty skill tags in `language`, in CV order.
pub fn get_tags_from_cv(cv: &CvResponse, language: Language) -> Vec<String> {
    cv.technologies
        .iter()
        .flat_map(|technology| &technology.technology_skills)
        .filter_map(|skill| skill.tags.get(language))
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
