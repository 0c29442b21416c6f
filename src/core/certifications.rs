use crate::core::tenure::{first_of_month, parse_number, whole_days};
use crate::domain::model::{Certification, CvResponse, Language};
use crate::utils::error::Result;
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};
use serde::Serialize;
use std::fmt;

pub const DEFAULT_LOOKBACK_DAYS: i64 = 365;

/// A certification left out of the recency check because it has no year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedCertification {
    pub person: Option<String>,
    pub certification: Option<String>,
}

impl fmt::Display for SkippedCertification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has a certification without a year: {}",
            self.person.as_deref().unwrap_or("<unknown>"),
            self.certification.as_deref().unwrap_or("<unnamed>")
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CertificationScan<'a> {
    /// Certifications inside the lookback window, in CV order.
    pub new: Vec<&'a Certification>,
    pub skipped: Vec<SkippedCertification>,
}

pub fn scan_certifications(
    cv: &CvResponse,
    days_to_look_back: i64,
    language: Language,
) -> Result<CertificationScan<'_>> {
    scan_certifications_at(cv, days_to_look_back, language, Local::now())
}

pub fn scan_certifications_at(
    cv: &CvResponse,
    days_to_look_back: i64,
    language: Language,
    now: DateTime<Local>,
) -> Result<CertificationScan<'_>> {
    let mut scan = CertificationScan::default();

    for cert in &cv.certifications {
        let Some(year) = parse_number::<i32>("year", cert.year.as_deref())? else {
            scan.skipped.push(SkippedCertification {
                person: cv.name.clone(),
                certification: cert.name.get(language).map(str::to_string),
            });
            continue;
        };
        let month = parse_number::<u32>("month", cert.month.as_deref())?.unwrap_or(1);

        let earned = local_midnight(first_of_month(year, month)?);
        if whole_days(now - earned) < days_to_look_back {
            scan.new.push(cert);
        }
    }

    Ok(scan)
}

/// Certifications earned within the last `days_to_look_back` days.
///
/// Undated certifications are left out with a warning; use
/// [`scan_certifications`] to handle them yourself.
pub fn get_new_certifications(
    cv: &CvResponse,
    days_to_look_back: i64,
    language: Language,
) -> Result<Vec<&Certification>> {
    let scan = scan_certifications(cv, days_to_look_back, language)?;
    for skipped in &scan.skipped {
        tracing::warn!(
            person = skipped.person.as_deref().unwrap_or_default(),
            certification = skipped.certification.as_deref().unwrap_or_default(),
            "{}",
            skipped
        );
    }
    Ok(scan.new)
}

fn local_midnight(date: NaiveDate) -> DateTime<Local> {
    let naive = date.and_time(NaiveTime::MIN);
    naive
        .and_local_timezone(Local)
        .earliest()
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::LocalizedText;
    use crate::utils::error::CvError;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    fn cert(year: Option<&str>, month: Option<&str>, name: &str) -> Certification {
        Certification {
            year: year.map(str::to_string),
            month: month.map(str::to_string),
            name: LocalizedText::new(Some(name), Some(format!("{name} (en)").as_str())),
            ..Default::default()
        }
    }

    fn cv_with(certifications: Vec<Certification>) -> CvResponse {
        CvResponse {
            name: Some("Kari Nordmann".to_string()),
            certifications,
            ..Default::default()
        }
    }

    fn june_2024() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn names<'a>(certs: &[&'a Certification]) -> Vec<&'a str> {
        certs.iter().filter_map(|c| c.name.get(Language::No)).collect()
    }

    #[test]
    fn test_recent_certifications_in_input_order() {
        let cv = cv_with(vec![
            cert(Some("2024"), Some("3"), "AWS"),
            cert(Some("2020"), Some("1"), "Scrum"),
            cert(Some("2023"), Some("9"), "Azure"),
        ]);

        let scan = scan_certifications_at(&cv, 365, Language::No, june_2024()).unwrap();
        assert_eq!(names(&scan.new), ["AWS", "Azure"]);
        assert!(scan.skipped.is_empty());
    }

    #[test]
    fn test_missing_month_defaults_to_january() {
        // 2024-01-01 is 166 days before the reference date.
        let cv = cv_with(vec![cert(Some("2024"), None, "Kotlin")]);

        let within = scan_certifications_at(&cv, 167, Language::No, june_2024()).unwrap();
        assert_eq!(within.new.len(), 1);

        let outside = scan_certifications_at(&cv, 166, Language::No, june_2024()).unwrap();
        assert!(outside.new.is_empty());
    }

    #[test]
    fn test_undated_certification_is_skipped_and_reported() {
        let cv = cv_with(vec![
            cert(None, Some("5"), "Sertifisert Tester"),
            cert(Some("2024"), Some("5"), "CKA"),
        ]);

        let scan = scan_certifications_at(&cv, 365, Language::No, june_2024()).unwrap();
        assert_eq!(names(&scan.new), ["CKA"]);
        assert_eq!(
            scan.skipped,
            [SkippedCertification {
                person: Some("Kari Nordmann".to_string()),
                certification: Some("Sertifisert Tester".to_string()),
            }]
        );
        assert_eq!(
            scan.skipped[0].to_string(),
            "Kari Nordmann has a certification without a year: Sertifisert Tester"
        );
    }

    #[test]
    fn test_skip_report_uses_requested_language() {
        let cv = cv_with(vec![cert(Some(""), None, "Sertifikat")]);
        let scan = scan_certifications_at(&cv, 365, Language::En, june_2024()).unwrap();
        assert_eq!(scan.skipped[0].certification.as_deref(), Some("Sertifikat (en)"));
    }

    #[test]
    fn test_future_certification_counts_as_new() {
        let cv = cv_with(vec![cert(Some("2025"), Some("1"), "Planned")]);
        let scan = scan_certifications_at(&cv, 30, Language::No, june_2024()).unwrap();
        assert_eq!(scan.new.len(), 1);
    }

    #[test]
    fn test_malformed_year_propagates() {
        let cv = cv_with(vec![cert(Some("2O24"), None, "Typo")]);
        let err = scan_certifications_at(&cv, 365, Language::No, june_2024()).unwrap_err();
        assert!(matches!(err, CvError::InvalidNumber { .. }));
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_get_new_certifications_warns_about_undated() {
        let cv = cv_with(vec![
            cert(None, None, "Sertifisert Tester"),
            cert(Some("1999"), None, "Gammel"),
        ]);

        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let found = tracing::subscriber::with_default(subscriber, || {
            get_new_certifications(&cv, DEFAULT_LOOKBACK_DAYS, Language::No).unwrap()
        });
        assert!(found.is_empty());

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        let warnings: Vec<_> = output.lines().filter(|line| line.contains("WARN")).collect();
        assert_eq!(warnings.len(), 1, "{output}");
        assert!(warnings[0].contains("Kari Nordmann"));
        assert!(warnings[0].contains("Sertifisert Tester"));
    }

    #[test]
    fn test_get_new_certifications_never_fails_on_undated() {
        let cv = cv_with(vec![cert(None, None, "Undated")]);
        let found = get_new_certifications(&cv, DEFAULT_LOOKBACK_DAYS, Language::No).unwrap();
        assert!(found.is_empty());
    }
}
