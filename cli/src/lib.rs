//! # EduCírculos
//!
//! File: cli/src/lib.rs
//!
//! Library side of the `educirculos` crate. The binary (`main.rs`) is a thin
//! command-line front end over these modules:
//! - `assistant`: keyword-driven canned-response matcher and chat session
//! - `platform`: accounts, course catalog, dashboard, notifications
//! - `core`: configuration and errors
//!
pub mod assistant;
pub mod core;
pub mod platform;
