use std::fmt;

/// Result type for drushctl-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while invoking Drush or loading configuration
#[derive(Debug)]
pub enum Error {
    /// The external tool could not be started at all
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// The external tool ran and exited non-zero
    CommandFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    /// The external tool exceeded the configured wall-clock limit and was killed
    Timeout { command: String, timeout_secs: u64 },

    /// Captured output exceeded the configured buffer cap
    OutputTooLarge { command: String, limit_bytes: u64 },

    /// A user-supplied identifier failed validation before any command ran
    InvalidIdentifier {
        kind: &'static str,
        value: String,
    },

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Spawn { program, source } => {
                write!(f, "could not start '{}': {}", program, source)
            }
            Error::CommandFailed {
                command,
                status,
                stderr,
            } => {
                match status {
                    Some(code) => write!(f, "`{}` exited with status {}", command, code)?,
                    None => write!(f, "`{}` was terminated by a signal", command)?,
                }
                let stderr = stderr.trim();
                if !stderr.is_empty() {
                    write!(f, ": {}", stderr)?;
                }
                Ok(())
            }
            Error::Timeout {
                command,
                timeout_secs,
            } => write!(
                f,
                "`{}` did not finish within {}s and was killed",
                command, timeout_secs
            ),
            Error::OutputTooLarge {
                command,
                limit_bytes,
            } => write!(
                f,
                "`{}` produced more than {} bytes of output",
                command, limit_bytes
            ),
            Error::InvalidIdentifier { kind, value } => {
                write!(f, "invalid {}: '{}'", kind, value)
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Spawn { source, .. } => Some(source),
            Error::Io(err) => Some(err),
            Error::CommandFailed { .. }
            | Error::Timeout { .. }
            | Error::OutputTooLarge { .. }
            | Error::InvalidIdentifier { .. }
            | Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
