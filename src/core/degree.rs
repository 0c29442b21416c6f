use crate::domain::model::{CvResponse, Education, Language};
use serde::Serialize;
use std::fmt;

/// Degree tiers, ordered by seniority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DegreeTier {
    Bachelor,
    Master,
    Phd,
}

impl DegreeTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            DegreeTier::Bachelor => "bachelor",
            DegreeTier::Master => "master",
            DegreeTier::Phd => "phd",
        }
    }
}

impl fmt::Display for DegreeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower-case spelling variants, matched as substrings of the degree text.
pub static DEGREE_KEYWORDS: &[(&str, DegreeTier)] = &[
    ("phd", DegreeTier::Phd),
    ("ph.d.", DegreeTier::Phd),
    ("doktor", DegreeTier::Phd),
    ("doctor", DegreeTier::Phd),
    ("master", DegreeTier::Master),
    ("m.a.", DegreeTier::Master),
    ("m.s.", DegreeTier::Master),
    ("siviløkonom", DegreeTier::Master),
    ("sivilingeniør", DegreeTier::Master),
    ("cand scient", DegreeTier::Master),
    ("cand.scient.", DegreeTier::Master),
    ("cand.mag.", DegreeTier::Master),
    ("cand-mag", DegreeTier::Master),
    ("m. sc", DegreeTier::Master),
    ("m.sc.", DegreeTier::Master),
    ("b.a.", DegreeTier::Bachelor),
    ("bs", DegreeTier::Bachelor),
    ("ba", DegreeTier::Bachelor),
    ("bachelor", DegreeTier::Bachelor),
    ("b.sc.", DegreeTier::Bachelor),
    ("b.sc", DegreeTier::Bachelor),
    ("ingeniør", DegreeTier::Bachelor),
];

/// Degree texts are always read in Norwegian.
const DEGREE_LANGUAGE: Language = Language::No;

/// An education counts as completed once its `year_to` is made of ASCII digits only.
pub fn is_completed(education: &Education) -> bool {
    education
        .year_to
        .as_deref()
        .map(str::trim)
        .is_some_and(|year| !year.is_empty() && year.chars().all(|c| c.is_ascii_digit()))
}

/// Every tier whose keywords appear in the degree text. One text can hit several tiers.
pub fn matching_tiers(degree: &str) -> impl Iterator<Item = DegreeTier> {
    let degree = degree.to_lowercase();
    [DegreeTier::Phd, DegreeTier::Master, DegreeTier::Bachelor]
        .into_iter()
        .filter(move |tier| {
            DEGREE_KEYWORDS
                .iter()
                .any(|(keyword, kw_tier)| kw_tier == tier && degree.contains(keyword))
        })
}

/// Highest degree tier across completed educations, or `None`.
pub fn get_highest_degree(cv: &CvResponse) -> Option<DegreeTier> {
    cv.educations
        .iter()
        .filter(|education| is_completed(education))
        .filter_map(|education| education.degree.get(DEGREE_LANGUAGE))
        .flat_map(matching_tiers)
        .max()
}
