//! Skill scaffolding.
//!
//! Validates the requested name and category, renders the four documents
//! in memory, assembles them in a hidden staging directory next to the
//! target and renames the finished tree into place. A run that fails
//! after validation leaves no partial skill behind.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::defaults::ScaffoldConfig;
use crate::error::{Error, Result};
use crate::frontmatter;
use crate::paths;
use crate::skill::{Category, Language, SkillName};
use crate::template::{self, TemplateVars};
use crate::utils::io;

/// A rendered document, relative to the skill directory.
#[derive(Debug, Clone)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Everything a skill consists of, relative to its directory.
#[derive(Debug, Clone)]
pub struct SkillLayout {
    pub directories: Vec<PathBuf>,
    pub files: Vec<RenderedFile>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldReport {
    pub skill_name: SkillName,
    pub skill_title: String,
    pub category: Category,
    pub path: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
    pub next_steps: Vec<String>,
}

/// Render the bilingual layout for `name` without touching the filesystem.
///
/// Author, license and version are escaped for the YAML header. Each
/// SKILL.md header is parsed back and checked against the name and language
/// it was rendered for.
pub fn render_layout(name: &SkillName, config: &ScaffoldConfig) -> Result<SkillLayout> {
    let title = name.title();
    let author = frontmatter::scalar(&config.author);
    let license = frontmatter::scalar(&config.license);
    let version = frontmatter::quoted(&config.version);
    let vars = [
        (TemplateVars::SKILL_NAME, name.as_str()),
        (TemplateVars::SKILL_TITLE, title.as_str()),
        (TemplateVars::AUTHOR, &*author),
        (TemplateVars::LICENSE, &*license),
        (TemplateVars::VERSION, version.as_str()),
    ];

    let mut directories = Vec::new();
    let mut files = Vec::new();

    for language in Language::ALL {
        let lang_dir = paths::language_dir(language);
        let refs_dir = paths::references_dir(language);

        let skill_md = template::render(template::skill_template(language), &vars);
        frontmatter::verify(&skill_md, name.as_str(), language.tag())?;

        let reference_md = template::render(template::reference_template(language), &vars);

        files.push(RenderedFile {
            path: lang_dir.join(paths::SKILL_FILE),
            content: skill_md,
        });
        files.push(RenderedFile {
            path: refs_dir.join(paths::REFERENCE_FILE),
            content: reference_md,
        });

        directories.push(lang_dir);
        directories.push(refs_dir);
    }

    Ok(SkillLayout { directories, files })
}

/// Validate raw input and scaffold the skill.
///
/// Category is checked first, then name; both before any filesystem access.
pub fn init_skill(
    name: &str,
    category: &str,
    config: &ScaffoldConfig,
) -> Result<ScaffoldReport> {
    let category = Category::parse(category)?;
    let name = SkillName::parse(name)?;
    create(&name, category, config)
}

/// Create `<root>/<category>/<name>` with the ua/en skill documents.
pub fn create(
    name: &SkillName,
    category: Category,
    config: &ScaffoldConfig,
) -> Result<ScaffoldReport> {
    let root = config.skills_root.as_path();
    let target = paths::skill_dir(root, category, name);

    if target.exists() {
        return Err(Error::skill_already_exists(target.display().to_string()));
    }

    let layout = render_layout(name, config)?;

    crate::log_status!("scaffold", "Creating {}", target.display());

    let category_dir = paths::category_dir(root, category);
    io::create_dir_all(&category_dir, &format!("create {}", category_dir.display()))?;

    let staging = io::create_staging_dir(
        &category_dir,
        &paths::staging_prefix(name),
        &format!("create staging directory in {}", category_dir.display()),
    )?;
    promote(staging, &target, &layout)?;

    crate::log_status!("scaffold", "Created {} files", layout.files.len());

    Ok(ScaffoldReport {
        skill_name: name.clone(),
        skill_title: name.title(),
        category,
        directories: layout
            .directories
            .iter()
            .map(|d| target.join(d))
            .collect(),
        files: layout.files.iter().map(|f| target.join(&f.path)).collect(),
        next_steps: next_steps(),
        path: target,
    })
}

/// Fill `staging` with `layout` and rename it onto `target`. The staging
/// directory is removed if any step fails.
fn promote(staging: TempDir, target: &Path, layout: &SkillLayout) -> Result<()> {
    if let Err(err) = stage_and_rename(staging.path(), target, layout) {
        crate::log_status!("scaffold", "Rolling back {}", staging.path().display());
        // Cleanup failure is secondary; report the staging error.
        let _ = staging.close();
        return Err(err);
    }

    // The directory now lives at `target`; dropping the guard finds nothing
    // left to remove.
    drop(staging);
    Ok(())
}

fn stage_and_rename(staging: &Path, target: &Path, layout: &SkillLayout) -> Result<()> {
    for dir in &layout.directories {
        let path = staging.join(dir);
        io::create_dir_all(&path, &format!("create {}", dir.display()))?;
    }

    for file in &layout.files {
        let path = staging.join(&file.path);
        io::write_file(&path, &file.content, &format!("write {}", file.path.display()))?;
    }

    // Another run may have created the target while we were staging.
    if target.exists() {
        return Err(Error::skill_already_exists(target.display().to_string()));
    }

    io::rename_dir(
        staging,
        target,
        &format!("move skill into {}", target.display()),
    )
}

fn next_steps() -> Vec<String> {
    vec![
        format!("Fill in the [TODO] sections in ua/{}", paths::SKILL_FILE),
        format!("Fill in the [TODO] sections in en/{}", paths::SKILL_FILE),
        format!(
            "Complete both {}/{} files",
            paths::REFERENCES_DIR,
            paths::REFERENCE_FILE
        ),
    ]
}
