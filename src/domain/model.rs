use serde::{Deserialize, Serialize};
use std::fmt;

/// The two CV languages the helpers know about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    No,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::No => "no",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A text field carried in one or both CV languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub no: Option<String>,
    #[serde(default)]
    pub en: Option<String>,
}

impl LocalizedText {
    pub fn new(no: Option<&str>, en: Option<&str>) -> Self {
        Self {
            no: no.map(str::to_string),
            en: en.map(str::to_string),
        }
    }

    pub fn get(&self, language: Language) -> Option<&str> {
        match language {
            Language::No => self.no.as_deref(),
            Language::En => self.en.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectExperience {
    #[serde(default)]
    pub year_from: Option<String>,
    #[serde(default)]
    pub month_from: Option<String>,
    #[serde(default)]
    pub year_to: Option<String>,
    #[serde(default)]
    pub month_to: Option<String>,
    #[serde(default)]
    pub customer: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub name: LocalizedText,
    #[serde(default)]
    pub organiser: LocalizedText,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub year_from: Option<String>,
    #[serde(default)]
    pub year_to: Option<String>,
    #[serde(default)]
    pub degree: LocalizedText,
    #[serde(default)]
    pub school: LocalizedText,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CvRole {
    #[serde(default)]
    pub name: LocalizedText,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnologySkill {
    #[serde(default)]
    pub tags: LocalizedText,
}

/// A technology category; skills come grouped under it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    #[serde(default)]
    pub category: LocalizedText,
    #[serde(default)]
    pub technology_skills: Vec<TechnologySkill>,
}

/// A full CV document as returned by `GET /api/v3/cvs/{user_id}/{cv_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CvResponse {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(rename = "navn", alias = "name", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub born_year: Option<i32>,
    #[serde(default)]
    pub born_month: Option<u32>,
    #[serde(default)]
    pub born_day: Option<u32>,
    #[serde(default)]
    pub project_experiences: Vec<ProjectExperience>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub educations: Vec<Education>,
    #[serde(default)]
    pub technologies: Vec<Technology>,
    #[serde(default)]
    pub cv_roles: Vec<CvRole>,
}

/// One entry of the user listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub user_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub default_cv_id: Option<String>,
}

pub type Department = Vec<(Employee, CvResponse)>;
