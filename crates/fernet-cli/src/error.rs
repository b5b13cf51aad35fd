//! Error types for the command-line wrapper.

/// Errors surfaced to the terminal user.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Fernet(#[from] fernet::FernetError),
    #[error("token input is not valid UTF-8 text")]
    TokenNotText,
}
