use thiserror::Error;

/// Errors raised while composing a configuration script.
///
/// Both variants abort the whole generation call; nothing in this crate
/// returns a partially built result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Subnet or prefix input could not be interpreted as IPv4 CIDR.
    #[error("invalid CIDR '{input}': {reason}")]
    InvalidCidr { input: String, reason: String },
    /// A `set` command could not be tokenized during canonicalization.
    #[error("malformed command '{command}': {reason}")]
    MalformedCommand { command: String, reason: String },
}

impl Error {
    pub(crate) fn invalid_cidr(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCidr {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedCommand {
            command: command.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
