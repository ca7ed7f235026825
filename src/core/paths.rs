use std::path::{Path, PathBuf};

use crate::skill::{Category, Language, SkillName};

pub const SKILL_FILE: &str = "SKILL.md";
pub const REFERENCES_DIR: &str = "references";
pub const REFERENCE_FILE: &str = "REFERENCE.md";

/// `<root>/<category>`
pub fn category_dir(root: &Path, category: Category) -> PathBuf {
    root.join(category.as_str())
}

/// `<root>/<category>/<name>`
pub fn skill_dir(root: &Path, category: Category, name: &SkillName) -> PathBuf {
    category_dir(root, category).join(name.as_str())
}

/// Name prefix of the hidden staging directories a skill is assembled in.
/// Each run appends its own random suffix.
pub fn staging_prefix(name: &SkillName) -> String {
    format!(".{}.", name)
}

/// `<lang>`, relative to the skill directory.
pub fn language_dir(language: Language) -> PathBuf {
    PathBuf::from(language.dir_name())
}

/// `<lang>/references`, relative to the skill directory.
pub fn references_dir(language: Language) -> PathBuf {
    language_dir(language).join(REFERENCES_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_dir_joins_category_and_name() {
        let name = SkillName::parse("abstract-ua-en").unwrap();
        let dir = skill_dir(Path::new("skills"), Category::Writing, &name);
        assert_eq!(dir, PathBuf::from("skills/writing/abstract-ua-en"));
    }

    #[test]
    fn staging_prefix_is_hidden() {
        let name = SkillName::parse("paper-triage").unwrap();
        assert_eq!(staging_prefix(&name), ".paper-triage.");
    }

    #[test]
    fn references_dir_nests_under_language() {
        assert_eq!(references_dir(Language::Ua), PathBuf::from("ua/references"));
        assert_eq!(language_dir(Language::En), PathBuf::from("en"));
    }
}
