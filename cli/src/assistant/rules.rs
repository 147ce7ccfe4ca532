//! # Keyword Rules
//!
//! File: cli/src/assistant/rules.rs
//!
//! A `KeywordRule` votes for one category when the normalized input contains
//! any of its triggers. Containment is plain substring search, so "punto"
//! also fires on "contrapunto".
//!
use super::category::Category;
use super::normalize::normalize;
use crate::core::error::EduError;

/// One (category, triggers) record. Triggers are stored normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    category: Category,
    triggers: Vec<String>,
}

impl KeywordRule {
    /// Builds a rule, normalizing each trigger so authors may write accented
    /// forms. An empty trigger list or a blank trigger is rejected, since a
    /// blank trigger would match every input.
    pub fn new<I, S>(category: Category, triggers: I) -> Result<Self, EduError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let triggers: Vec<String> = triggers
            .into_iter()
            .map(|t| normalize(t.as_ref().trim()))
            .collect();
        if triggers.is_empty() || triggers.iter().any(String::is_empty) {
            return Err(EduError::EmptyTrigger {
                category: category.to_string(),
            });
        }
        Ok(Self { category, triggers })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    /// True if `normalized` contains any trigger. The caller normalizes once
    /// for the whole rule list.
    pub fn matches(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|t| normalized.contains(t.as_str()))
    }
}
