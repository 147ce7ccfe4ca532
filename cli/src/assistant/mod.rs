//! # EduCírculos Study Assistant
//!
//! File: cli/src/assistant/mod.rs
//!
//! ## Overview
//!
//! The assistant answers free-text questions with canned replies. It is a
//! keyword lookup, not a language model: each message is normalized, matched
//! against an ordered list of trigger rules and answered with a random reply
//! from the winning category.
//!
//! ## Architecture
//!
//! - `category`: the fixed set of reply categories
//! - `normalize`: lower-casing and diacritic stripping
//! - `pool`: category → replies, validated at construction
//! - `rules`: ordered (category, triggers) records
//! - `matcher`: `ResponseMatcher`, the classify-then-pick engine
//! - `chat`: `ChatSession`, history and reply delay around a shared matcher
//!
//! Rules and replies come from the `[assistant]` configuration section, see
//! `crate::core::config`.
//!
pub mod category;
pub mod chat;
pub mod matcher;
pub mod normalize;
pub mod pool;
pub mod rules;

pub use category::Category;
pub use chat::{ChatMessage, ChatSession, Sender};
pub use matcher::{MatchResult, ResponseMatcher};
pub use normalize::normalize;
pub use pool::ResponsePool;
pub use rules::KeywordRule;
