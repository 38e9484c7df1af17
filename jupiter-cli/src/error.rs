use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Store operation failed
    #[error("Database error: {0}")]
    Database(#[from] jupiter_db::StoreError),

    /// Credentials did not match any account
    #[error("Unauthorized: unknown user or wrong password")]
    Unauthorized,

    /// Registration hit an existing user id
    #[error("User '{0}' already exists")]
    Conflict(String),

    /// Input could not be parsed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Short hint printed under the error message.
    pub(crate) fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Database(e) if e.is_unavailable() => Some(
                "Check that the database path is writable, or run 'jupiter init' to create it.",
            ),
            Self::Config(_) => Some("Run 'jupiter config show' to see the resolved settings."),
            _ => None,
        }
    }
}
