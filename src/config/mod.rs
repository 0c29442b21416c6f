pub mod toml_config;

use crate::adapters::http::CvPartnerClient;
use crate::core::summary::SummaryOptions;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_required_field, validate_url,
    Validate,
};
use std::fmt;
use std::path::PathBuf;

#[cfg(feature = "cli")]
use crate::adapters::http::org_base_url;
#[cfg(feature = "cli")]
use crate::domain::model::Language;
#[cfg(feature = "cli")]
use crate::utils::error::CvError;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

/// Where the CV to summarize comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CvLocation {
    File(PathBuf),
    Api { user_id: String, cv_id: String },
}

/// Fully resolved settings for one run.
#[derive(Clone)]
pub struct Settings {
    pub location: CvLocation,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub report: SummaryOptions,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("location", &self.location)
            .field("base_url", &self.base_url)
            .field("api_key", &redact(&self.api_key))
            .field("report", &self.report)
            .finish()
    }
}

fn redact(secret: &Option<String>) -> Option<&'static str> {
    secret.as_ref().map(|_| "<redacted>")
}

impl Settings {
    pub fn client(&self) -> Result<CvPartnerClient> {
        let base_url = validate_required_field("api.base_url", &self.base_url)?;
        let api_key = validate_required_field("api.api_key", &self.api_key)?;
        Ok(CvPartnerClient::with_base_url(base_url.clone(), api_key.clone()))
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if let CvLocation::Api { .. } = self.location {
            validate_url("api.base_url", validate_required_field("api.base_url", &self.base_url)?)?;
            validate_non_empty_string(
                "api.api_key",
                validate_required_field("api.api_key", &self.api_key)?,
            )?;
        }

        validate_positive_number(
            "report.certification_lookback_days",
            self.report.certification_lookback_days,
            1,
        )?;

        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Clone, Default, Parser)]
#[command(name = "cvpartner")]
#[command(about = "Summarize CV Partner CVs: tenure, degrees, certifications and roles")]
pub struct CliConfig {
    #[arg(long, help = "TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Read the CV from a JSON file instead of the API")]
    pub cv_file: Option<PathBuf>,

    #[arg(long, env = "CVPARTNER_ORG")]
    pub org: Option<String>,

    #[arg(long, env = "CVPARTNER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, help = "Override the API base URL")]
    pub base_url: Option<String>,

    #[arg(long)]
    pub user_id: Option<String>,

    #[arg(long)]
    pub cv_id: Option<String>,

    #[arg(long, value_enum)]
    pub language: Option<Language>,

    #[arg(long, help = "Certifications newer than this many days count as new")]
    pub lookback_days: Option<i64>,

    #[arg(long, help = "Flag the CV when the newest project ended more than this many months ago")]
    pub stale_months: Option<u32>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliConfig")
            .field("config", &self.config)
            .field("cv_file", &self.cv_file)
            .field("org", &self.org)
            .field("api_key", &redact(&self.api_key))
            .field("base_url", &self.base_url)
            .field("user_id", &self.user_id)
            .field("cv_id", &self.cv_id)
            .field("language", &self.language)
            .field("lookback_days", &self.lookback_days)
            .field("stale_months", &self.stale_months)
            .field("verbose", &self.verbose)
            .finish()
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges the command line over the optional TOML file.
    pub fn resolve(&self) -> Result<Settings> {
        if self.cv_file.is_some() && (self.user_id.is_some() || self.cv_id.is_some()) {
            return Err(CvError::ConfigError {
                message: "--cv-file cannot be combined with --user-id/--cv-id".to_string(),
            });
        }

        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        let location = match &self.cv_file {
            Some(path) => CvLocation::File(path.clone()),
            None => CvLocation::Api {
                user_id: validate_required_field("user_id", &self.user_id)?.clone(),
                cv_id: validate_required_field("cv_id", &self.cv_id)?.clone(),
            },
        };

        let org = self.org.clone().or(file.api.org);
        let base_url = self
            .base_url
            .clone()
            .or(file.api.base_url)
            .or_else(|| org.as_deref().map(org_base_url));

        let mut report = file.report;
        if let Some(language) = self.language {
            report.language = language;
        }
        if let Some(days) = self.lookback_days {
            report.certification_lookback_days = days;
        }
        if let Some(months) = self.stale_months {
            report.stale_after_months = months;
        }

        Ok(Settings {
            location,
            base_url,
            api_key: self.api_key.clone().or(file.api.api_key),
            report,
        })
    }
}
