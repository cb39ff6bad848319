use thiserror::Error;

/// Message shown in the create dialog when a failure carries no text of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Not logged in. Please run 'admin login' first.")]
    NotAuthenticated,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    /// Logical failure reported inside a successful response body.
    #[error("{0}")]
    Rejected(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Another operation is still running")]
    Busy,

    #[error("Operation cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AdminError {
    /// Text suitable for a dialog: the server's own words for logical errors,
    /// the display form otherwise.
    pub fn user_message(&self) -> String {
        let message = match self {
            AdminError::Rejected(msg) => msg.clone(),
            other => other.to_string(),
        };

        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, AdminError::Cancelled)
    }
}

pub type AdminResult<T> = Result<T, AdminError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AdminResult<T>;
    fn with_context<F>(self, f: F) -> AdminResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> AdminResult<T> {
        self.map_err(|e| AdminError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AdminResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AdminError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> AdminResult<T> {
        self.ok_or_else(|| AdminError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> AdminResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| AdminError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! admin_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::AdminError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::AdminError::$error_type(format!($fmt, $($arg)*))
    };
}
