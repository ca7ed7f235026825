use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use skillinit::defaults::{self, ConfigOverrides};
use skillinit::scaffold::{self, ScaffoldReport};
use skillinit::{Category, SkillName};

use super::CmdResult;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Skill name: lowercase kebab-case, at most 64 characters
    #[arg(allow_hyphen_values = true)]
    pub skill_name: String,

    /// One of: citations, writing, literature-review, experiments
    #[arg(long)]
    pub category: String,

    /// Directory that holds the category folders
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Author written to the SKILL.md metadata
    #[arg(long)]
    pub author: Option<String>,

    /// License identifier written to the SKILL.md metadata
    #[arg(long)]
    pub license: Option<String>,

    /// JSON settings file (skillsRoot, author, license, version)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct InitOutput {
    pub command: &'static str,
    #[serde(flatten)]
    pub report: ScaffoldReport,
}

pub fn run(args: InitArgs) -> CmdResult<InitOutput> {
    // Validate before reading any settings file.
    let category = Category::parse(&args.category)?;
    let name = SkillName::parse(&args.skill_name)?;

    if let Some(path) = &args.config {
        crate::tty::status(&format!("Using settings from {}", path.display()));
    }

    let config = defaults::resolve(
        args.config.as_deref(),
        ConfigOverrides {
            skills_root: args.root,
            author: args.author,
            license: args.license,
        },
    )?;

    let report = scaffold::create(&name, category, &config)?;

    Ok((
        InitOutput {
            command: "init",
            report,
        },
        0,
    ))
}
