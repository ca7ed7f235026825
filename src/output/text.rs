//! Human-readable console output.

use std::fmt::Write as _;

use skillinit::scaffold::ScaffoldReport;
use skillinit::{Category, Error, Result};

use crate::commands::init::InitOutput;

pub fn render_usage() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Usage: skillinit <skill-name> --category <category>");
    let _ = writeln!(out);
    let _ = writeln!(out, "Categories:");
    for category in Category::ALL {
        let _ = writeln!(out, "  - {}", category);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Options:");
    let _ = writeln!(out, "  --root <DIR>       Skills root directory (default: skills)");
    let _ = writeln!(out, "  --author <NAME>    Author written to SKILL.md metadata");
    let _ = writeln!(out, "  --license <ID>     License written to SKILL.md metadata");
    let _ = writeln!(out, "  --config <FILE>    JSON settings file");
    let _ = writeln!(out, "  --json             Print the result as a JSON envelope");
    let _ = writeln!(out);
    let _ = writeln!(out, "Examples:");
    let _ = writeln!(out, "  skillinit abstract-ua-en --category writing");
    let _ = writeln!(out, "  skillinit paper-triage --category literature-review");
    out
}

pub fn render_success(report: &ScaffoldReport) -> String {
    let rel = report.path.display();
    let mut out = String::new();

    let _ = writeln!(out, "✅ Skill '{}' created at {}/", report.skill_name, rel);
    let _ = writeln!(out);
    let _ = writeln!(out, "   Structure:");
    let _ = writeln!(out, "   {}/", rel);
    let _ = writeln!(out, "   ├── ua/");
    let _ = writeln!(out, "   │   ├── SKILL.md");
    let _ = writeln!(out, "   │   └── references/REFERENCE.md");
    let _ = writeln!(out, "   └── en/");
    let _ = writeln!(out, "       ├── SKILL.md");
    let _ = writeln!(out, "       └── references/REFERENCE.md");
    let _ = writeln!(out);
    let _ = writeln!(out, "   Next steps:");
    for (i, step) in report.next_steps.iter().enumerate() {
        let _ = writeln!(out, "   {}. {}", i + 1, step);
    }
    out
}

pub fn render_error(err: &Error) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "❌ {}", err.message);
    for hint in &err.hints {
        let _ = writeln!(out, "   {}", hint.message);
    }
    out
}

pub fn print_usage() {
    print!("{}", render_usage());
}

pub fn print_text_result(result: Result<InitOutput>) {
    match result {
        Ok(output) => print!("{}", render_success(&output.report)),
        Err(err) => print!("{}", render_error(&err)),
    }
}
