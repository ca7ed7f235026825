//! SKILL.md metadata header.
//!
//! A SKILL.md opens with a YAML block fenced by `---` lines. Rendered
//! documents are parsed back through this module before anything is
//! written, so a template that breaks the header is caught up front.
//! Substituted values go through [`scalar`] or [`quoted`] first.

use regex::Regex;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::OnceLock;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct SkillFrontmatter {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub metadata: SkillMetadata,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillMetadata {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

fn plain_scalar_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z](?:[A-Za-z0-9 ._()/+-]*[A-Za-z0-9._()/+-])?$").unwrap()
    })
}

/// Words a YAML loader may read as booleans or null when left unquoted.
const RESERVED_WORDS: &[&str] = &["true", "false", "null", "yes", "no", "on", "off", "y", "n"];

/// Double-quoted YAML scalar. JSON string escaping is a subset of YAML's.
pub fn quoted(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| String::from("\"\""))
}

/// `value` as a header scalar: left plain when it reads back unchanged,
/// quoted otherwise.
pub fn scalar(value: &str) -> Cow<'_, str> {
    let reserved = RESERVED_WORDS
        .iter()
        .any(|word| value.eq_ignore_ascii_case(word));

    if !reserved && plain_scalar_pattern().is_match(value) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(quoted(value))
    }
}

/// Return the YAML between the opening and closing `---` fences.
pub fn split_header(document: &str) -> Option<&str> {
    let rest = document.strip_prefix("---\n")?;
    if rest.starts_with("---\n") {
        return Some("");
    }
    let end = rest.find("\n---\n")?;
    Some(&rest[..=end])
}

pub fn parse(document: &str) -> Result<SkillFrontmatter> {
    let header = split_header(document).ok_or_else(|| {
        Error::internal_unexpected("SKILL.md does not start with a '---' metadata block")
    })?;

    serde_yml::from_str(header)
        .map_err(|e| Error::internal_unexpected(format!("invalid SKILL.md metadata: {}", e)))
}

/// Parse `document` and confirm it names `name` with language `language`.
pub fn verify(document: &str, name: &str, language: &str) -> Result<SkillFrontmatter> {
    let fm = parse(document)?;

    if fm.name != name {
        return Err(Error::internal_unexpected(format!(
            "SKILL.md metadata names '{}', expected '{}'",
            fm.name, name
        )));
    }

    match fm.metadata.language.as_deref() {
        Some(lang) if lang == language => Ok(fm),
        other => Err(Error::internal_unexpected(format!(
            "SKILL.md metadata language is {:?}, expected '{}'",
            other, language
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "---\nname: demo\ndescription: >-\n  first\n  second\nlicense: MIT\nmetadata:\n  author: Someone\n  version: \"0.1\"\n  language: en\n---\n\n# Demo\n";

    #[test]
    fn parse_reads_all_fields() {
        let fm = parse(DOC).unwrap();
        assert_eq!(fm.name, "demo");
        assert_eq!(fm.description.as_deref(), Some("first second"));
        assert_eq!(fm.license.as_deref(), Some("MIT"));
        assert_eq!(fm.metadata.author.as_deref(), Some("Someone"));
        assert_eq!(fm.metadata.version.as_deref(), Some("0.1"));
        assert_eq!(fm.metadata.language.as_deref(), Some("en"));
    }

    #[test]
    fn parse_requires_opening_fence() {
        assert!(parse("# Demo\n").is_err());
    }

    #[test]
    fn parse_requires_closing_fence() {
        assert!(parse("---\nname: demo\n").is_err());
    }

    #[test]
    fn scalar_keeps_plain_values() {
        assert_eq!(scalar("Dmytro Zarezenko"), "Dmytro Zarezenko");
        assert_eq!(scalar("Apache-2.0"), "Apache-2.0");
        assert_eq!(scalar("MIT"), "MIT");
    }

    #[test]
    fn scalar_quotes_values_yaml_would_misread() {
        assert_eq!(scalar("Team: NLP"), "\"Team: NLP\"");
        assert_eq!(scalar("O'Brien"), "\"O'Brien\"");
        assert_eq!(scalar("true"), "\"true\"");
        assert_eq!(scalar("2024"), "\"2024\"");
        assert_eq!(scalar(""), "\"\"");
        assert_eq!(scalar("a\nb"), "\"a\\nb\"");
    }

    #[test]
    fn quoted_values_read_back_unchanged() {
        for value in ["Team: NLP", "#1 fan", "say \"hi\"", "a\nlanguage: fr", "- item", "[x]"] {
            let doc = format!("---\nname: demo\nmetadata:\n  author: {}\n---\n", scalar(value));
            let fm = parse(&doc).unwrap();
            assert_eq!(fm.metadata.author.as_deref(), Some(value));
        }
    }

    #[test]
    fn verify_checks_name_and_language() {
        assert!(verify(DOC, "demo", "en").is_ok());
        assert!(verify(DOC, "other", "en").is_err());
        assert!(verify(DOC, "demo", "uk").is_err());
    }
}
