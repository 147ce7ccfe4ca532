//! # EduCírculos Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by the assistant, the platform domain and the
//! command handlers:
//! - `config`: configuration loading, merging and validation
//! - `error`: `EduError` and the `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use educirculos::core::config; // For loading configuration
//! use educirculos::core::error::{EduError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
