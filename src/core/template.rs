//! Built-in skill templates and `{{placeholder}}` rendering.

use crate::skill::Language;

pub struct TemplateVars;

impl TemplateVars {
    pub const SKILL_NAME: &'static str = "skill_name";
    pub const SKILL_TITLE: &'static str = "skill_title";
    pub const AUTHOR: &'static str = "author";
    pub const LICENSE: &'static str = "license";
    pub const VERSION: &'static str = "version";
}

const SKILL_UA: &str = include_str!("../../templates/skill_ua.md");
const SKILL_EN: &str = include_str!("../../templates/skill_en.md");
const REFERENCE_UA: &str = include_str!("../../templates/reference_ua.md");
const REFERENCE_EN: &str = include_str!("../../templates/reference_en.md");

/// Template for `<lang>/SKILL.md`.
pub fn skill_template(language: Language) -> &'static str {
    match language {
        Language::Ua => SKILL_UA,
        Language::En => SKILL_EN,
    }
}

/// Template for `<lang>/references/REFERENCE.md`.
pub fn reference_template(language: Language) -> &'static str {
    match language {
        Language::Ua => REFERENCE_UA,
        Language::En => REFERENCE_EN,
    }
}

pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in variables {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}
