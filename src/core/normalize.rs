use crate::domain::model::{CvRole, Language};
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Whole-title rewrites for common spellings of the same role.
pub static ROLE_VARIANTS: &[(&str, &str)] = &[
    ("Back End Developer", "Backend Utvikler"),
    ("Back End Utvikler", "Backend Utvikler"),
];

/// Case-insensitive substring rewrites, applied in order.
pub static ROLE_SYNONYMS: &[(&str, &str)] = &[("enginer", "engineer"), ("developer", "utvikler")];

static SYNONYM_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    ROLE_SYNONYMS
        .iter()
        .map(|(from, to)| {
            let pattern = RegexBuilder::new(&regex::escape(from))
                .case_insensitive(true)
                .build()
                .expect("escaped literal is a valid regex");
            (pattern, *to)
        })
        .collect()
});

/// Normalized role title in `language`, or `None` when the role has no text there.
pub fn normalize_role(role: &CvRole, language: Language) -> Option<String> {
    role.name.get(language).map(normalize_role_text)
}

/// The cleanup pipeline behind [`normalize_role`]. Step order matters: synonyms
/// match multi-word phrases, so slashes are spaced out afterwards.
pub fn normalize_role_text(text: &str) -> String {
    let text = text.replace('-', " ");
    let text = remove_ending_period(&text);
    let text = rename_role_variant(text);
    let text = replace_synonyms(&text);
    let text = add_space_around_slash(&text);
    let text = remove_extra_whitespace(&text);
    title_case(&text).trim().to_string()
}

/// Trims, drops one trailing period and collapses whitespace. `None` stays `None`.
pub fn clean_name(name: Option<&str>) -> Option<String> {
    let name = name?;
    if name.is_empty() {
        return Some(String::new());
    }
    Some(remove_extra_whitespace(&remove_ending_period(name)))
}

pub fn remove_ending_period(text: &str) -> String {
    let text = text.trim();
    text.strip_suffix('.').unwrap_or(text).to_string()
}

pub fn remove_extra_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn add_space_around_slash(text: &str) -> String {
    text.replace('/', " / ")
}

fn rename_role_variant(text: String) -> String {
    ROLE_VARIANTS
        .iter()
        .find(|(variant, _)| *variant == text)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(text)
}

fn replace_synonyms(text: &str) -> String {
    SYNONYM_PATTERNS
        .iter()
        .fold(text.to_string(), |acc, (pattern, replacement)| {
            pattern.replace_all(&acc, *replacement).into_owned()
        })
}

/// Upper-cases the first cased letter of every word and lower-cases the rest.
/// Any character without case (space, digit, slash, apostrophe) starts a new word.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if !cased {
            out.push(c);
        } else if in_word {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        in_word = cased;
    }
    out
}
