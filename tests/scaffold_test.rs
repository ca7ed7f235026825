use std::fs;
use std::path::{Path, PathBuf};

use skillinit::defaults::ScaffoldConfig;
use skillinit::{init_skill, ErrorCode};
use tempfile::TempDir;

/// (directories, files) under `root`, relative and sorted.
fn walk(root: &Path) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let mut dirs = Vec::new();
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            let rel = path.strip_prefix(root).unwrap().to_path_buf();
            if path.is_dir() {
                dirs.push(rel);
                stack.push(path);
            } else {
                files.push(rel);
            }
        }
    }

    dirs.sort();
    files.sort();
    (dirs, files)
}

fn config_in(dir: &Path) -> ScaffoldConfig {
    ScaffoldConfig {
        skills_root: dir.join("skills"),
        ..Default::default()
    }
}

#[test]
fn writing_skill_has_four_files_and_four_dirs() {
    let tmp = TempDir::new().unwrap();
    let config = config_in(tmp.path());

    init_skill("abstract-ua-en", "writing", &config).unwrap();

    let target = tmp.path().join("skills/writing/abstract-ua-en");
    let (dirs, files) = walk(&target);

    let dirs: Vec<_> = dirs.iter().map(|p| p.to_str().unwrap()).collect();
    assert_eq!(dirs, vec!["en", "en/references", "ua", "ua/references"]);

    let files: Vec<_> = files.iter().map(|p| p.to_str().unwrap()).collect();
    assert_eq!(
        files,
        vec![
            "en/SKILL.md",
            "en/references/REFERENCE.md",
            "ua/SKILL.md",
            "ua/references/REFERENCE.md",
        ]
    );

    let ua = fs::read_to_string(target.join("ua/SKILL.md")).unwrap();
    assert!(ua.starts_with("---\nname: abstract-ua-en\n"));
    assert!(ua.contains("language: uk"));
    assert!(ua.contains("## Призначення"));

    let en = fs::read_to_string(target.join("en/SKILL.md")).unwrap();
    assert!(en.starts_with("---\nname: abstract-ua-en\n"));
    assert!(en.contains("language: en"));
    assert!(en.contains("## Purpose"));

    let en_ref = fs::read_to_string(target.join("en/references/REFERENCE.md")).unwrap();
    assert_eq!(
        en_ref,
        "# Abstract Ua En — Reference Guide\n\n[TODO: Detailed technical reference for this skill.]\n"
    );
}

#[test]
fn generated_headers_parse() {
    let tmp = TempDir::new().unwrap();
    let config = config_in(tmp.path());

    let report = init_skill("paper-triage", "literature-review", &config).unwrap();

    for (lang, tag) in [("ua", "uk"), ("en", "en")] {
        let doc = fs::read_to_string(report.path.join(lang).join("SKILL.md")).unwrap();
        let fm = skillinit::frontmatter::parse(&doc).unwrap();
        assert_eq!(fm.name, "paper-triage");
        assert_eq!(fm.license.as_deref(), Some("MIT"));
        assert_eq!(fm.metadata.version.as_deref(), Some("0.1"));
        assert_eq!(fm.metadata.language.as_deref(), Some(tag));
        assert!(fm.description.unwrap().starts_with("[TODO:"));
    }
}

#[test]
fn second_run_fails_and_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let config = config_in(tmp.path());

    init_skill("abstract-ua-en", "writing", &config).unwrap();
    let target = tmp.path().join("skills/writing/abstract-ua-en");
    let ua_skill = target.join("ua/SKILL.md");
    fs::write(&ua_skill, "edited").unwrap();
    let before = walk(&tmp.path().join("skills"));

    let err = init_skill("abstract-ua-en", "writing", &config).unwrap_err();

    assert_eq!(err.code, ErrorCode::SkillAlreadyExists);
    assert_eq!(walk(&tmp.path().join("skills")), before);
    assert_eq!(fs::read_to_string(&ua_skill).unwrap(), "edited");
}

#[test]
fn invalid_category_fails_before_filesystem() {
    let tmp = TempDir::new().unwrap();
    let config = config_in(tmp.path());

    let err = init_skill("abstract-ua-en", "invalid-category", &config).unwrap_err();

    assert_eq!(err.code, ErrorCode::ValidationInvalidCategory);
    assert!(!config.skills_root.exists());
}

#[test]
fn invalid_name_fails_before_filesystem() {
    let tmp = TempDir::new().unwrap();
    let config = config_in(tmp.path());

    let err = init_skill("My_Skill", "writing", &config).unwrap_err();

    assert_eq!(err.code, ErrorCode::ValidationInvalidName);
    assert!(err.message.contains("lowercase alphanumeric"));
    assert!(!config.skills_root.exists());
}

#[test]
fn custom_author_and_license_flow_into_header() {
    let tmp = TempDir::new().unwrap();
    let config = ScaffoldConfig {
        author: "Jane Doe".to_string(),
        license: "Apache-2.0".to_string(),
        ..config_in(tmp.path())
    };

    let report = init_skill("cite-check", "citations", &config).unwrap();

    let en = fs::read_to_string(report.path.join("en/SKILL.md")).unwrap();
    assert!(en.contains("license: Apache-2.0\n"));
    assert!(en.contains("  author: Jane Doe\n"));
}

#[test]
fn sibling_skills_share_category_dir() {
    let tmp = TempDir::new().unwrap();
    let config = config_in(tmp.path());

    init_skill("first", "experiments", &config).unwrap();
    init_skill("second", "experiments", &config).unwrap();

    let mut names: Vec<_> = fs::read_dir(tmp.path().join("skills/experiments"))
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn concurrent_runs_promote_exactly_one_complete_tree() {
    for _ in 0..25 {
        let tmp = TempDir::new().unwrap();
        let config = config_in(tmp.path());

        let results: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| init_skill("demo", "writing", &config)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);

        let (_, files) = walk(&tmp.path().join("skills/writing/demo"));
        assert_eq!(files.len(), 4);

        let entries: Vec<_> = fs::read_dir(tmp.path().join("skills/writing"))
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(entries, vec!["demo"]);
    }
}
