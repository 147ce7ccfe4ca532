//! # Course Catalog
//!
//! File: cli/src/platform/catalog.rs
//!
//! ## Overview
//!
//! The catalog holds the configured courses and answers the questions the
//! course page asks: list everything, filter by subject or level, search by
//! text, enroll, preview. Enrollment credits the session's user with the
//! configured bonus.
//!
//! Course ids must be unique; `Catalog::new` rejects duplicates.
//!
use super::notify::Notice;
use super::session::Session;
use crate::core::error::EduError;
use serde::Deserialize;
use std::collections::HashSet;
use tracing::{debug, info};

/// Filter value that matches every course.
pub const FILTER_ALL: &str = "all";

/// One `[[catalog.courses]]` entry.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Display level, e.g. "Básico", "Intermedio", "Todos".
    pub level: String,
    pub duration_hours: u32,
    pub students: u64,
    pub rating: f32,
    /// Icon name used by graphical front ends.
    pub icon: String,
    /// Subject key used by filters, e.g. "matematicas".
    pub category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>) -> Result<Self, EduError> {
        let mut seen = HashSet::new();
        for course in &courses {
            if !seen.insert(course.id) {
                return Err(EduError::DuplicateCourse { id: course.id });
            }
        }
        debug!("Catalog loaded with {} courses", courses.len());
        Ok(Self { courses })
    }

    pub fn all(&self) -> &[Course] {
        &self.courses
    }

    pub fn find(&self, id: u32) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Courses whose subject equals `filter` or whose lower-cased level does.
    /// `"all"` returns everything.
    pub fn filter(&self, filter: &str) -> Vec<&Course> {
        if filter == FILTER_ALL {
            return self.courses.iter().collect();
        }
        self.courses
            .iter()
            .filter(|c| c.category == filter || c.level.to_lowercase() == filter)
            .collect()
    }

    /// Case-insensitive substring search over title and description.
    pub fn search(&self, term: &str) -> Vec<&Course> {
        let term = term.to_lowercase();
        self.courses
            .iter()
            .filter(|c| {
                c.title.to_lowercase().contains(&term)
                    || c.description.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Enrolls the session's user in course `id`, crediting the enrollment bonus.
    pub fn enroll(&self, session: &mut Session, id: u32) -> Result<Notice, EduError> {
        let course = self.find(id).ok_or(EduError::CourseNotFound { id })?;
        let bonus = session.settings().enroll_bonus;
        let user = session
            .current_user_mut()
            .ok_or(EduError::NoActiveSession)?;
        user.edu_credits = user.edu_credits.saturating_add(bonus);
        info!(
            "{} enrolled in course {} (+{} credits)",
            user.email, course.id, bonus
        );
        Ok(Notice::success(format!(
            "Te has inscrito en: {}",
            course.title
        )))
    }

    pub fn preview(&self, id: u32) -> Result<Notice, EduError> {
        let course = self.find(id).ok_or(EduError::CourseNotFound { id })?;
        Ok(Notice::info(format!(
            "Cargando vista previa de: {}",
            course.title
        )))
    }
}
