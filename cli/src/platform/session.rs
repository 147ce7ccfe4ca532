//! # Sessions and Mock Accounts
//!
//! File: cli/src/platform/session.rs
//!
//! ## Overview
//!
//! A `Session` is the explicit context object for "who is using the platform
//! right now". Components that need the current user (the catalog's
//! enrollment bonus, the dashboard) receive the session; nothing reads global
//! state.
//!
//! Accounts are mock accounts: the forms are validated (email shape, password
//! length, confirmation) and a canned profile is installed. Passwords are
//! never stored.
//!
//! ## Examples
//!
//! ```rust
//! use educirculos::core::config::PlatformSettings;
//! use educirculos::platform::session::Session;
//!
//! let mut session = Session::new(PlatformSettings::default());
//! let notice = session.login("ana@example.com", "contraseña-larga").unwrap();
//! assert_eq!(notice.message, "¡Bienvenido de vuelta!");
//! assert_eq!(session.current_user().unwrap().edu_credits, 1250);
//! ```
//!
use super::notify::Notice;
use crate::core::config::PlatformSettings;
use crate::core::error::EduError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use tracing::{debug, info};
use uuid::Uuid;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Academic level shown on a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    Guest,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Beginner => "Principiante",
            Level::Intermediate => "Intermedio",
            Level::Advanced => "Avanzado",
            Level::Guest => "Invitado",
        })
    }
}

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Upper-cased first character of the name or email.
    pub avatar: String,
    pub edu_credits: u64,
    pub level: Level,
    pub courses_completed: u64,
    pub is_guest: bool,
}

impl UserProfile {
    /// Profile installed by a successful login.
    fn demo(email: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Usuario Demo".to_string(),
            email: email.to_string(),
            avatar: avatar_of(email),
            edu_credits: 1250,
            level: Level::Intermediate,
            courses_completed: 12,
            is_guest: false,
        }
    }

    /// Profile shown on the dashboard when nobody has signed in.
    pub fn showcase() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Ana García".to_string(),
            email: "ana.garcia@email.com".to_string(),
            avatar: "A".to_string(),
            edu_credits: 2450,
            level: Level::Advanced,
            courses_completed: 25,
            is_guest: false,
        }
    }

    pub fn guest() -> Self {
        Self {
            id: "guest".to_string(),
            name: "Invitado".to_string(),
            email: "invitado@educirculos.hn".to_string(),
            avatar: "I".to_string(),
            edu_credits: 0,
            level: Level::Guest,
            courses_completed: 0,
            is_guest: true,
        }
    }
}

fn avatar_of(text: &str) -> String {
    text.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Fields of the registration form.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn validate_password(password: &str, min_len: usize) -> bool {
    password.chars().count() >= min_len
}

/// The current user, if any, plus the platform rules that govern accounts.
#[derive(Debug, Clone)]
pub struct Session {
    settings: PlatformSettings,
    user: Option<UserProfile>,
}

impl Session {
    pub fn new(settings: PlatformSettings) -> Self {
        Self {
            settings,
            user: None,
        }
    }

    pub fn settings(&self) -> &PlatformSettings {
        &self.settings
    }

    /// Validates the login form and signs in the demo profile.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Notice, EduError> {
        if !validate_email(email) {
            return Err(EduError::InvalidEmail);
        }
        self.check_password(password)?;

        info!("Signed in as {}", email);
        self.user = Some(UserProfile::demo(email));
        Ok(Notice::success("¡Bienvenido de vuelta!"))
    }

    /// Validates the registration form and signs in a new beginner profile.
    ///
    /// Checks run in form order: name, email, password length, confirmation.
    pub fn register(&mut self, form: &RegistrationForm) -> Result<Notice, EduError> {
        let name = form.name.trim();
        if name.chars().count() < self.settings.min_name_len {
            return Err(EduError::NameTooShort);
        }
        if !validate_email(&form.email) {
            return Err(EduError::InvalidEmail);
        }
        self.check_password(&form.password)?;
        if form.password != form.confirm_password {
            return Err(EduError::PasswordMismatch);
        }

        info!("Registered account for {}", form.email);
        self.user = Some(UserProfile {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: form.email.clone(),
            avatar: avatar_of(name),
            edu_credits: self.settings.welcome_credits,
            level: Level::Beginner,
            courses_completed: 0,
            is_guest: false,
        });
        Ok(Notice::success(
            "¡Cuenta creada exitosamente! Bienvenido a EduCírculos",
        ))
    }

    /// Signs in the shared guest profile.
    pub fn guest(&mut self) -> Notice {
        debug!("Continuing as guest");
        self.user = Some(UserProfile::guest());
        Notice::info("Accediendo como invitado...")
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    pub fn current_user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn current_user_mut(&mut self) -> Option<&mut UserProfile> {
        self.user.as_mut()
    }

    /// Returns the current user, installing the showcase profile first if
    /// nobody is signed in.
    pub fn ensure_user(&mut self) -> &mut UserProfile {
        self.user.get_or_insert_with(UserProfile::showcase)
    }

    fn check_password(&self, password: &str) -> Result<(), EduError> {
        if validate_password(password, self.settings.min_password_len) {
            Ok(())
        } else {
            Err(EduError::PasswordTooShort {
                min: self.settings.min_password_len,
            })
        }
    }
}
