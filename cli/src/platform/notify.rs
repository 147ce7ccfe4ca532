//! # Notifications
//!
//! File: cli/src/platform/notify.rs
//!
//! Platform operations report their outcome as a `Notice`: a message plus a
//! severity. How a notice is shown (toast, terminal line) is up to the front
//! end; `render_line` is the terminal rendering used by the binary.
//!
use crate::core::error::EduError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    fn marker(self) -> &'static str {
        match self {
            Severity::Info => "[i]",
            Severity::Success => "[✓]",
            Severity::Warning => "[!]",
            Severity::Error => "[x]",
        }
    }
}

/// A (message, severity) pair for the notification surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    /// One terminal line, e.g. `[✓] ¡Bienvenido de vuelta!`.
    pub fn render_line(&self) -> String {
        format!("{} {}", self.severity.marker(), self.message)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<&EduError> for Notice {
    fn from(err: &EduError) -> Self {
        Self::new(err.to_string(), Severity::Error)
    }
}
