use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateError {
    /// No access code was configured, so nobody can be let in.
    NotConfigured,
    Incorrect,
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConfigured => f.write_str("Access code is not configured."),
            Self::Incorrect => f.write_str("Incorrect code. Try again."),
        }
    }
}

impl std::error::Error for GateError {}

/// Passphrase screen in front of the dashboard. This is a courtesy gate for
/// casual visitors, not access control: the code ships with the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGate {
    passphrase: Option<String>,
    granted: bool,
}

impl AccessGate {
    /// `granted` is the persisted flag from a previous visit, read once at startup.
    pub fn new(passphrase: Option<&str>, granted: bool) -> Self {
        Self {
            passphrase: passphrase.map(normalize).filter(|code| !code.is_empty()),
            granted,
        }
    }

    pub fn is_granted(&self) -> bool {
        self.granted
    }

    pub fn is_configured(&self) -> bool {
        self.passphrase.is_some()
    }

    /// Check a typed code. Surrounding whitespace and case are ignored.
    pub fn submit(&mut self, input: &str) -> Result<(), GateError> {
        let Some(passphrase) = self.passphrase.as_deref() else {
            return Err(GateError::NotConfigured);
        };
        if normalize(input) != passphrase {
            return Err(GateError::Incorrect);
        }
        self.granted = true;
        Ok(())
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_lowercase()
}
