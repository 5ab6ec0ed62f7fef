use thiserror::Error;

pub type Result<T> = std::result::Result<T, RemoteInvocationError>;

/// The only failure a binding call can produce.
///
/// Variants record where the failure happened; none of them rewrite what
/// the host said.
#[derive(Debug, Error)]
pub enum RemoteInvocationError {
    /// The call mechanism could not deliver the request or its response.
    #[error("could not reach host for `{command}`: {reason}")]
    Transport { command: String, reason: String },

    /// The endpoint is missing or reported an application-level failure.
    #[error("`{command}` failed: {message}")]
    Remote { command: String, message: String },

    /// Arguments could not be encoded or the response was not the expected shape.
    #[error("malformed payload for `{command}`: {source}")]
    Payload {
        command: String,
        #[source]
        source: serde_json::Error,
    },
}

impl RemoteInvocationError {
    pub fn transport(command: impl Into<String>, reason: impl ToString) -> Self {
        Self::Transport {
            command: command.into(),
            reason: reason.to_string(),
        }
    }

    pub fn remote(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remote {
            command: command.into(),
            message: message.into(),
        }
    }

    pub fn payload(command: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Payload {
            command: command.into(),
            source,
        }
    }

    /// Fully qualified command the failed call was addressed to.
    pub fn command(&self) -> &str {
        match self {
            Self::Transport { command, .. }
            | Self::Remote { command, .. }
            | Self::Payload { command, .. } => command,
        }
    }

    /// Message reported by the host, exactly as received.
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Self::Remote { message, .. } => Some(message),
            _ => None,
        }
    }
}
