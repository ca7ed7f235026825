use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigInvalidJson,

    ValidationInvalidCategory,
    ValidationInvalidName,

    SkillAlreadyExists,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalidJson => "config.invalid_json",

            ErrorCode::ValidationInvalidCategory => "validation.invalid_category",
            ErrorCode::ValidationInvalidName => "validation.invalid_name",

            ErrorCode::SkillAlreadyExists => "skill.already_exists",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tried: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlreadyExistsDetails {
    pub path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidJsonDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalJsonErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    /// Category outside the fixed set. `valid` is echoed back as `tried`
    /// so callers can list the accepted values.
    pub fn validation_invalid_category(category: impl Into<String>, valid: &[&str]) -> Self {
        let category = category.into();
        let details = to_details(InvalidArgumentDetails {
            field: "category".to_string(),
            problem: "not a known category".to_string(),
            id: Some(category.clone()),
            tried: Some(valid.iter().map(|c| c.to_string()).collect()),
        });

        Self::new(
            ErrorCode::ValidationInvalidCategory,
            format!("Invalid category: '{}'", category),
            details,
        )
        .with_hint(format!("Valid categories: {}", valid.join(", ")))
    }

    /// `problem` is the message of the first naming rule the value broke.
    pub fn validation_invalid_name(name: impl Into<String>, problem: impl Into<String>) -> Self {
        let problem = problem.into();
        let details = to_details(InvalidArgumentDetails {
            field: "skill_name".to_string(),
            problem: problem.clone(),
            id: Some(name.into()),
            tried: None,
        });

        Self::new(
            ErrorCode::ValidationInvalidName,
            format!("Invalid skill name: {}", problem),
            details,
        )
    }

    pub fn skill_already_exists(path: impl Into<String>) -> Self {
        let path = path.into();
        let details = to_details(AlreadyExistsDetails { path: path.clone() });

        Self::new(
            ErrorCode::SkillAlreadyExists,
            format!("Skill already exists: {}", path),
            details,
        )
        .with_hint("Pick another skill name or remove the existing directory")
    }

    pub fn config_invalid_json(path: impl Into<String>, err: serde_json::Error) -> Self {
        let path = path.into();
        let details = to_details(ConfigInvalidJsonDetails {
            path: path.clone(),
            error: err.to_string(),
        });

        Self::new(
            ErrorCode::ConfigInvalidJson,
            format!("Invalid JSON in configuration: {}", path),
            details,
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let error = error.into();
        let message = match &context {
            Some(ctx) => format!("IO error ({}): {}", ctx, error),
            None => format!("IO error: {}", error),
        };
        let details = to_details(InternalIoErrorDetails { error, context });

        Self::new(ErrorCode::InternalIoError, message, details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalJsonErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        let error = error.into();
        Self::new(
            ErrorCode::InternalUnexpected,
            format!("Unexpected error: {}", error),
            serde_json::json!({ "error": error }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
