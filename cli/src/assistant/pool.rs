//! # Response Pools
//!
//! File: cli/src/assistant/pool.rs
//!
//! A `ResponsePool` maps each category to its ordered list of canned replies.
//! Construction rejects empty lists and blank replies, so any category present
//! in the pool always has something to say. The pool is immutable afterwards.
//!
use super::category::Category;
use crate::core::error::EduError;
use rand::Rng;
use std::collections::BTreeMap;

/// Category → replies, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePool {
    replies: BTreeMap<Category, Vec<String>>,
}

impl ResponsePool {
    /// Builds a pool, failing with `EmptyPool` if any category has no replies
    /// and with `Config` if a reply is blank.
    pub fn new<I, S>(entries: I) -> Result<Self, EduError>
    where
        I: IntoIterator<Item = (Category, Vec<S>)>,
        S: Into<String>,
    {
        let mut replies = BTreeMap::new();
        for (category, list) in entries {
            let list: Vec<String> = list.into_iter().map(Into::into).collect();
            if list.is_empty() {
                return Err(EduError::EmptyPool {
                    category: category.to_string(),
                });
            }
            if list.iter().any(|reply| reply.trim().is_empty()) {
                return Err(EduError::Config(format!(
                    "category '{}' contains a blank reply",
                    category
                )));
            }
            replies.insert(category, list);
        }
        Ok(Self { replies })
    }

    pub fn contains(&self, category: Category) -> bool {
        self.replies.contains_key(&category)
    }

    /// Replies for `category`, or an empty slice if it is not pooled.
    pub fn replies(&self, category: Category) -> &[String] {
        self.replies
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Categories present in the pool, in `Category` order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.replies.keys().copied()
    }

    /// Picks one reply of `category` with a uniform index drawn from `rng`.
    /// Returns `None` only if the category is not pooled.
    pub fn pick<R: Rng + ?Sized>(&self, category: Category, rng: &mut R) -> Option<&str> {
        let list = self.replies.get(&category)?;
        let index = rng.random_range(0..list.len());
        list.get(index).map(String::as_str)
    }
}
