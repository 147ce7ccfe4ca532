//! # Reply Categories
//!
//! File: cli/src/assistant/category.rs
//!
//! The fixed set of topical buckets a reply belongs to. Categories are
//! spelled in lower case in configuration files (`greeting`, `courses`, ...).
//!
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A topical bucket of canned replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Greeting,
    Courses,
    Credits,
    Circles,
    Help,
    Motivation,
    Progress,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 7] = [
        Category::Greeting,
        Category::Courses,
        Category::Credits,
        Category::Circles,
        Category::Help,
        Category::Motivation,
        Category::Progress,
    ];

    /// The configuration spelling of this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Greeting => "greeting",
            Category::Courses => "courses",
            Category::Credits => "credits",
            Category::Circles => "circles",
            Category::Help => "help",
            Category::Motivation => "motivation",
            Category::Progress => "progress",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}
