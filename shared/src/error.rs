use std::fmt;

/// Every way a snapshot load can fail. All variants end up as a single
/// error banner; the variant only shapes the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// No data endpoint was configured for this build.
    MissingEndpoint,
    /// The request never produced a response.
    Transport(String),
    /// The endpoint answered with a non-success status.
    Status(u16),
    /// The body was not the expected JSON document.
    Parse(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEndpoint => write!(f, "Missing data endpoint URL."),
            Self::Transport(e) => write!(f, "Fetch failed: {e}"),
            Self::Status(code) => write!(f, "Fetch failed: HTTP {code}"),
            Self::Parse(e) => write!(f, "Invalid response: {e}"),
        }
    }
}

impl std::error::Error for LoadError {}

#[cfg(test)]
mod tests {
    use super::LoadError;

    #[test]
    fn status_message_mentions_code() {
        assert_eq!(LoadError::Status(500).to_string(), "Fetch failed: HTTP 500");
    }

    #[test]
    fn transport_message_keeps_cause() {
        let msg = LoadError::Transport("connection reset".into()).to_string();
        assert!(msg.contains("connection reset"), "got {msg}");
    }
}
