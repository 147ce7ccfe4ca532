//! # EduCírculos Platform Domain
//!
//! File: cli/src/platform/mod.rs
//!
//! ## Overview
//!
//! The headless logic behind the platform's pages: accounts and the current
//! session, the course catalog, dashboard counters and notifications. None of
//! it touches the assistant; the assistant never reads the session.
//!
//! - `session`: `Session`, `UserProfile`, mock login/registration/guest access
//! - `catalog`: `Catalog` with filter, search, enroll and preview
//! - `dashboard`: derived counters for a profile
//! - `notify`: `Notice` values reported by the operations above
//! - `format`: thousands separators for displayed numbers
//!
pub mod catalog;
pub mod dashboard;
pub mod format;
pub mod notify;
pub mod session;
