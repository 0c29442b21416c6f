use crate::core::tenure::{create_dates_from_project_at, DateRange};
use crate::domain::model::{CvResponse, ProjectExperience};
use crate::utils::error::Result;
use chrono::{DateTime, Local};

/// Months are approximated as 30 days in the staleness check.
pub const DAYS_PER_MONTH: i64 = 30;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

/// A project together with its computed date range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatedProject<'a> {
    pub range: DateRange,
    pub project: &'a ProjectExperience,
}

pub fn sort_projects(cv: &CvResponse, order: SortOrder) -> Result<Vec<DatedProject<'_>>> {
    sort_projects_at(cv, order, Local::now())
}

/// Sorts by start date. The sort is stable, so equal start dates keep CV order.
pub fn sort_projects_at(
    cv: &CvResponse,
    order: SortOrder,
    now: DateTime<Local>,
) -> Result<Vec<DatedProject<'_>>> {
    let mut projects = cv
        .project_experiences
        .iter()
        .map(|project| {
            Ok(DatedProject {
                range: create_dates_from_project_at(project, now)?,
                project,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    match order {
        SortOrder::NewestFirst => projects.sort_by(|a, b| b.range.start.cmp(&a.range.start)),
        SortOrder::OldestFirst => projects.sort_by(|a, b| a.range.start.cmp(&b.range.start)),
    }

    Ok(projects)
}

pub fn get_days_since_last_finished_project(project: &DatedProject<'_>) -> i64 {
    get_days_since_last_finished_project_at(project, Local::now())
}

/// Days since the project ended, or 0 while it is still ongoing.
pub fn get_days_since_last_finished_project_at(
    project: &DatedProject<'_>,
    now: DateTime<Local>,
) -> i64 {
    project.range.days_since_end(now).unwrap_or(0)
}

pub fn newest_project_is_older_than_n_months(cv: &CvResponse, n_months: u32) -> Result<bool> {
    newest_project_is_older_than_n_months_at(cv, n_months, Local::now())
}

/// True when the most recently started project ended more than `n_months * 30`
/// days ago. No projects, or an ongoing newest project, is never stale.
pub fn newest_project_is_older_than_n_months_at(
    cv: &CvResponse,
    n_months: u32,
    now: DateTime<Local>,
) -> Result<bool> {
    let projects = sort_projects_at(cv, SortOrder::NewestFirst, now)?;
    let Some(newest) = projects.first() else {
        return Ok(false);
    };

    if newest.range.is_ongoing() {
        return Ok(false);
    }

    let threshold = i64::from(n_months) * DAYS_PER_MONTH;
    Ok(get_days_since_last_finished_project_at(newest, now) > threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn project(from: (&str, &str), to: Option<(&str, &str)>) -> ProjectExperience {
        ProjectExperience {
            year_from: Some(from.0.to_string()),
            month_from: Some(from.1.to_string()),
            year_to: to.map(|t| t.0.to_string()),
            month_to: to.map(|t| t.1.to_string()),
            ..Default::default()
        }
    }

    fn cv_with(projects: Vec<ProjectExperience>) -> CvResponse {
        CvResponse {
            project_experiences: projects,
            ..Default::default()
        }
    }

    fn june_2024() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn starts(projects: &[DatedProject<'_>]) -> Vec<NaiveDate> {
        projects.iter().map(|p| p.range.start).collect()
    }

    #[test]
    fn test_sort_newest_first() {
        let cv = cv_with(vec![
            project(("2019", "1"), Some(("2019", "6"))),
            project(("2022", "3"), None),
            project(("2020", "9"), Some(("2021", "2"))),
        ]);

        let sorted = sort_projects_at(&cv, SortOrder::NewestFirst, june_2024()).unwrap();
        let years: Vec<_> = starts(&sorted).iter().map(|d| d.to_string()).collect();
        assert_eq!(years, ["2022-03-01", "2020-09-01", "2019-01-01"]);
        assert!(std::ptr::eq(sorted[0].project, &cv.project_experiences[1]));
    }

    #[test]
    fn test_sort_oldest_first() {
        let cv = cv_with(vec![
            project(("2022", "3"), None),
            project(("2019", "1"), Some(("2019", "6"))),
        ]);

        let sorted = sort_projects_at(&cv, SortOrder::OldestFirst, june_2024()).unwrap();
        assert_eq!(
            starts(&sorted),
            [
                NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2022, 3, 1).unwrap()
            ]
        );
    }

    #[test]
    fn test_sort_ties_keep_input_order() {
        let cv = cv_with(vec![
            project(("2021", "5"), Some(("2021", "6"))),
            project(("2021", "5"), Some(("2022", "1"))),
        ]);

        let sorted = sort_projects_at(&cv, SortOrder::NewestFirst, june_2024()).unwrap();
        assert!(std::ptr::eq(sorted[0].project, &cv.project_experiences[0]));
        assert!(std::ptr::eq(sorted[1].project, &cv.project_experiences[1]));
    }

    #[test]
    fn test_sort_propagates_parse_error() {
        let cv = cv_with(vec![project(("20-20", "1"), None)]);
        assert!(sort_projects_at(&cv, SortOrder::NewestFirst, june_2024()).is_err());
    }

    #[test]
    fn test_days_since_last_finished_project() {
        let cv = cv_with(vec![project(("2023", "1"), Some(("2024", "1")))]);
        let sorted = sort_projects_at(&cv, SortOrder::NewestFirst, june_2024()).unwrap();
        assert_eq!(get_days_since_last_finished_project_at(&sorted[0], june_2024()), 166);
    }

    #[test]
    fn test_days_since_ongoing_project_is_zero() {
        let cv = cv_with(vec![project(("2023", "1"), None)]);
        let sorted = sort_projects_at(&cv, SortOrder::NewestFirst, june_2024()).unwrap();
        assert_eq!(get_days_since_last_finished_project_at(&sorted[0], june_2024()), 0);
    }

    #[test]
    fn test_not_stale_without_projects() {
        let cv = CvResponse::default();
        assert!(!newest_project_is_older_than_n_months_at(&cv, 3, june_2024()).unwrap());
    }

    #[test]
    fn test_not_stale_when_newest_is_ongoing() {
        let cv = cv_with(vec![
            project(("2010", "1"), Some(("2011", "1"))),
            project(("2015", "1"), None),
        ]);
        assert!(!newest_project_is_older_than_n_months_at(&cv, 0, june_2024()).unwrap());
    }

    #[test]
    fn test_stale_threshold_uses_thirty_day_months() {
        // 2024-01-01 .. 2024-06-15 is 166 days.
        let cv = cv_with(vec![project(("2023", "1"), Some(("2024", "1")))]);

        assert!(newest_project_is_older_than_n_months_at(&cv, 3, june_2024()).unwrap());
        assert!(newest_project_is_older_than_n_months_at(&cv, 5, june_2024()).unwrap());
        assert!(!newest_project_is_older_than_n_months_at(&cv, 6, june_2024()).unwrap());
    }

    #[test]
    fn test_staleness_looks_at_latest_start_not_latest_end() {
        // The project that started last ended early; an older one runs later.
        let cv = cv_with(vec![
            project(("2020", "1"), Some(("2024", "5"))),
            project(("2021", "1"), Some(("2021", "6"))),
        ]);
        assert!(newest_project_is_older_than_n_months_at(&cv, 3, june_2024()).unwrap());
    }
}
