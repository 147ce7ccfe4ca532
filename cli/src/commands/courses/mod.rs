//! # Courses Command Group
//!
//! File: cli/src/commands/courses/mod.rs
//!
//! ## Overview
//!
//! `educirculos courses` works on the configured course catalog:
//! - `list`: all courses, optionally narrowed by `--filter` and `--search`
//! - `enroll <ID>`: enroll the current profile and credit the bonus
//! - `preview <ID>`: show the preview notice for a course
//!
//! ```bash
//! educirculos courses list --filter intermedio
//! educirculos courses list --search literatura
//! educirculos courses enroll 2 --guest
//! ```
//!
use clap::{Parser, Subcommand};
use educirculos::core::config::Config;
use educirculos::core::error::Result;
use educirculos::platform::catalog::Catalog;

mod enroll;
mod list;

#[derive(Parser, Debug)]
pub struct CoursesArgs {
    #[command(subcommand)]
    command: CoursesCommand,
}

#[derive(Subcommand, Debug)]
enum CoursesCommand {
    /// List courses in a table.
    List(list::ListArgs),
    /// Enroll in a course and earn the enrollment bonus.
    Enroll(enroll::EnrollArgs),
    /// Preview a course.
    Preview(enroll::PreviewArgs),
}

/// # Handle Courses Command (`handle_courses`)
///
/// Builds the catalog from configuration and dispatches to the subcommand.
pub async fn handle_courses(args: CoursesArgs, cfg: &Config) -> Result<()> {
    let catalog = Catalog::new(cfg.catalog.courses.clone())?;
    match args.command {
        CoursesCommand::List(args) => list::handle_list(args, &catalog).await?,
        CoursesCommand::Enroll(args) => enroll::handle_enroll(args, &catalog, cfg).await?,
        CoursesCommand::Preview(args) => enroll::handle_preview(args, &catalog).await?,
    }
    Ok(())
}
