//! Scaffolding for bilingual (ua/en) agent skill folders.
//!
//! ```ignore
//! let config = skillinit::defaults::ScaffoldConfig::default();
//! let report = skillinit::init_skill("paper-triage", "literature-review", &config)?;
//! ```

/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Usage:
/// ```ignore
/// log_status!("scaffold", "Creating {}", target.display());
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

pub mod core;
pub mod utils;

// Re-export everything from core for ergonomic library use
// Users can write `skillinit::scaffold` instead of `skillinit::core::scaffold`
pub use self::core::*;
pub use self::utils::*;
