//! # EduCírculos Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates all top-level commands of the `educirculos` CLI.
//! Each command defines its own arguments structure and an async handler that
//! receives those arguments plus the configuration loaded in `main.rs`.
//!
//! ## Command Groups
//!
//! - `ask`: one question, one reply
//! - `chat`: interactive conversation on stdin
//! - `courses`: catalog listing, enrollment and previews
//! - `account`: mock login, registration and guest access
//! - `dashboard`: derived statistics for the current profile
//! - `config`: validation summary of the effective configuration
//!

/// Single-shot questions to the assistant.
pub mod ask;
/// Interactive chat loop around `ChatSession`.
pub mod chat;
/// Command group for the course catalog. Includes subcommands `list`, `enroll`, `preview`.
pub mod courses;
/// Command group for mock accounts. Includes subcommands `login`, `register`, `guest`.
pub mod account;
/// Dashboard statistics.
pub mod dashboard;
/// Command group for configuration inspection. Includes subcommand `check`.
pub mod config;
