//! # Dashboard Statistics
//!
//! File: cli/src/platform/dashboard.rs
//!
//! Derived counters shown on a user's dashboard. Study hours and certificates
//! are estimates computed from the number of completed courses.
//!
use super::format::format_number;
use super::session::UserProfile;
use crate::core::config::PlatformSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub courses_completed: u64,
    pub edu_credits: u64,
    pub study_hours: u64,
    pub certificates: u64,
}

impl DashboardStats {
    /// Computes the dashboard counters for `profile`.
    ///
    /// Study hours saturate at `u64::MAX` instead of overflowing; a zero
    /// `courses_per_certificate` yields no certificates.
    pub fn for_profile(profile: &UserProfile, settings: &PlatformSettings) -> Self {
        let completed = profile.courses_completed;
        Self {
            courses_completed: completed,
            edu_credits: profile.edu_credits,
            study_hours: completed.saturating_mul(settings.hours_per_course),
            certificates: completed
                .checked_div(settings.courses_per_certificate)
                .unwrap_or(0),
        }
    }

    /// (label, formatted value) rows in display order.
    pub fn rows(&self) -> [(&'static str, String); 4] {
        [
            ("Cursos completados", format_number(self.courses_completed)),
            ("EduCréditos", format_number(self.edu_credits)),
            ("Horas de estudio", format_number(self.study_hours)),
            ("Certificados", format_number(self.certificates)),
        ]
    }
}
