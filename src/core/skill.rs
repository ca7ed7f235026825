//! Skill identity: names, categories and titles.
//!
//! All checks here are pure and run before the filesystem is touched.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::{Error, Result};

pub const MAX_NAME_LEN: usize = 64;

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?$").unwrap())
}

/// Check a candidate skill name. Returns the message of the first rule it
/// breaks, or `None` if it is a valid kebab-case name.
pub fn validate_skill_name(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("Skill name cannot be empty.".to_string());
    }

    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Some(format!(
            "Skill name too long ({} chars, max {}).",
            len, MAX_NAME_LEN
        ));
    }

    if !name_pattern().is_match(name) {
        return Some(
            "Skill name must be lowercase alphanumeric with hyphens, no leading/trailing hyphens."
                .to_string(),
        );
    }

    if name.contains("--") {
        return Some("Skill name must not contain consecutive hyphens (--).".to_string());
    }

    None
}

/// A skill name that passed [`validate_skill_name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SkillName(String);

impl SkillName {
    pub fn parse(value: &str) -> Result<Self> {
        match validate_skill_name(value) {
            Some(problem) => Err(Error::validation_invalid_name(value, problem)),
            None => Ok(Self(value.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn title(&self) -> String {
        title_case(&self.0)
    }
}

impl fmt::Display for SkillName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Convert kebab-case to Title Case: `paper-triage` -> `Paper Triage`.
pub fn title_case(name: &str) -> String {
    name.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Citations,
    Writing,
    LiteratureReview,
    Experiments,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Citations,
        Category::Writing,
        Category::LiteratureReview,
        Category::Experiments,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Citations => "citations",
            Category::Writing => "writing",
            Category::LiteratureReview => "literature-review",
            Category::Experiments => "experiments",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Category::as_str).collect()
    }

    pub fn parse(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == value)
            .ok_or_else(|| Error::validation_invalid_category(value, &Self::names()))
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two language variants every skill ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ua,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Ua, Language::En];

    /// Directory name under the skill root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Language::Ua => "ua",
            Language::En => "en",
        }
    }

    /// Value written to `metadata.language` in SKILL.md.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Ua => "uk",
            Language::En => "en",
        }
    }
}
