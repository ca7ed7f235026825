// Public modules
pub mod defaults;
pub mod error;
pub mod frontmatter;
pub mod paths;
pub mod scaffold;
pub mod skill;
pub mod template;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use scaffold::{init_skill, ScaffoldReport};
pub use skill::{Category, Language, SkillName};
