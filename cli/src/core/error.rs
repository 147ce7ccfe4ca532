//! # EduCírculos Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the crate. Two layers
//! work together:
//! - `EduError`: a `thiserror` enum for the failures the domain can name
//!   (bad configuration, rejected account forms, unknown courses).
//! - `Result<T>`: an alias for `anyhow::Result<T>` used by command handlers
//!   and configuration loading, where context matters more than the variant.
//!
//! Domain constructors (`ResponseMatcher::new`, `Catalog::new`, the account
//! operations on `Session`) return `std::result::Result<T, EduError>` so that
//! callers can match on the variant. Converting into `anyhow::Error` happens
//! automatically through `?`.
//!
//! ## Examples
//!
//! ```rust
//! use educirculos::core::error::EduError;
//!
//! let err = EduError::EmptyPool { category: "greeting".into() };
//! assert_eq!(
//!     err.to_string(),
//!     "Configuration error: category 'greeting' has an empty reply pool"
//! );
//! ```
//!
//! Account validation variants carry the Spanish messages shown to platform
//! users, since the binary prints them verbatim.
//!
use thiserror::Error;

/// Custom error type for the EduCírculos crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EduError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration error: category '{category}' has an empty reply pool")]
    EmptyPool { category: String },

    #[error("Configuration error: category '{category}' is referenced but has no reply pool")]
    UndefinedCategory { category: String },

    #[error("Configuration error: rule for category '{category}' has an empty trigger")]
    EmptyTrigger { category: String },

    #[error("Configuration error: course id {id} is defined more than once")]
    DuplicateCourse { id: u32 },

    #[error("Por favor ingresa un email válido")]
    InvalidEmail,

    #[error("La contraseña debe tener al menos {min} caracteres")]
    PasswordTooShort { min: usize },

    #[error("Las contraseñas no coinciden")]
    PasswordMismatch,

    #[error("Por favor ingresa tu nombre completo")]
    NameTooShort,

    #[error("Course {id} not found.")]
    CourseNotFound { id: u32 },

    #[error("No active session. Log in, register or continue as guest first.")]
    NoActiveSession,
}

impl EduError {
    /// True for the variants raised while validating configuration.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            EduError::Config(_)
                | EduError::EmptyPool { .. }
                | EduError::UndefinedCategory { .. }
                | EduError::EmptyTrigger { .. }
                | EduError::DuplicateCourse { .. }
        )
    }
}

/// Type alias for Result using anyhow::Error for application code.
pub type Result<T> = anyhow::Result<T>;
