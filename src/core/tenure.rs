use crate::domain::model::ProjectExperience;
use crate::utils::error::{CvError, Result};
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveTime};
use serde::Serialize;
use std::num::ParseIntError;
use std::str::FromStr;

/// Year used when a CV leaves the year unset. Never a real year.
pub const PLACEHOLDER_YEAR: i32 = 1;

const SECONDS_PER_DAY: i64 = 86_400;

/// Start and end of a project. `end == None` means the project is still ongoing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
    /// Months from `start` to `end`, or to now when ongoing.
    pub elapsed_months: i32,
}

impl DateRange {
    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }

    /// Whole days between the end date (at midnight) and `now`; `None` when ongoing.
    pub fn days_since_end(&self, now: DateTime<Local>) -> Option<i64> {
        self.end
            .map(|end| whole_days(now.naive_local() - end.and_time(NaiveTime::MIN)))
    }
}

pub fn create_dates_from_project(project: &ProjectExperience) -> Result<DateRange> {
    create_dates_from_project_at(project, Local::now())
}

pub fn create_dates_from_project_at(
    project: &ProjectExperience,
    now: DateTime<Local>,
) -> Result<DateRange> {
    let year_from = parse_number::<i32>("year_from", project.year_from.as_deref())?
        .unwrap_or(PLACEHOLDER_YEAR);
    let month_from = parse_number::<u32>("month_from", project.month_from.as_deref())?.unwrap_or(1);
    let year_to = parse_number::<i32>("year_to", project.year_to.as_deref())?;
    let month_to = parse_number::<u32>("month_to", project.month_to.as_deref())?;

    let start = first_of_month(year_from, month_from)?;
    let end = match (year_to, month_to) {
        (None, None) => None,
        (year, month) => Some(first_of_month(
            year.unwrap_or(PLACEHOLDER_YEAR),
            month.unwrap_or(1),
        )?),
    };

    let elapsed_months = months_between(start, end.unwrap_or_else(|| now.date_naive()));

    Ok(DateRange {
        start,
        end,
        elapsed_months,
    })
}

/// Calendar months from `from` to `to`, ignoring the day of month.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32)
}

pub(crate) fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CvError::InvalidDate { year, month })
}

/// Parses an optional numeric CV field. Absent or blank values are `None`.
pub(crate) fn parse_number<T>(field: &str, value: Option<&str>) -> Result<Option<T>>
where
    T: FromStr<Err = ParseIntError>,
{
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => v
            .parse::<T>()
            .map(Some)
            .map_err(|source| CvError::InvalidNumber {
                field: field.to_string(),
                value: v.to_string(),
                source,
            }),
    }
}

/// Floors a duration to whole days, rounding towards negative infinity.
pub(crate) fn whole_days(elapsed: Duration) -> i64 {
    elapsed.num_seconds().div_euclid(SECONDS_PER_DAY)
}
