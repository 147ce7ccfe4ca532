//! # Courses Enroll and Preview Subcommands
//!
//! File: cli/src/commands/courses/enroll.rs
//!
//! Each invocation starts a fresh in-memory session. Without `--guest` the
//! showcase profile is used, matching what the dashboard shows when nobody is
//! signed in.
//!
use clap::Parser;
use educirculos::core::config::Config;
use educirculos::core::error::Result;
use educirculos::platform::catalog::Catalog;
use educirculos::platform::format::format_number;
use educirculos::platform::session::Session;
use tracing::info;

#[derive(Parser, Debug)]
pub struct EnrollArgs {
    /// Id of the course, as shown by `courses list`.
    pub id: u32,

    /// Enroll as the guest profile instead of the showcase profile.
    #[arg(long)]
    pub guest: bool,
}

#[derive(Parser, Debug)]
pub struct PreviewArgs {
    pub id: u32,
}

pub async fn handle_enroll(args: EnrollArgs, catalog: &Catalog, cfg: &Config) -> Result<()> {
    info!("Handling courses enroll command for course {}", args.id);
    let mut session = Session::new(cfg.platform.clone());
    if args.guest {
        session.guest();
    } else {
        session.ensure_user();
    }

    let notice = catalog.enroll(&mut session, args.id)?;
    println!("{}", notice.render_line());
    if let Some(user) = session.current_user() {
        println!(
            "{}: {} EduCréditos",
            user.name,
            format_number(user.edu_credits)
        );
    }
    Ok(())
}

pub async fn handle_preview(args: PreviewArgs, catalog: &Catalog) -> Result<()> {
    let notice = catalog.preview(args.id)?;
    println!("{}", notice.render_line());
    if let Some(course) = catalog.find(args.id) {
        println!("{}", course.description);
        println!(
            "Nivel: {} · Duración: {} horas · {} estudiantes · ★ {:.1}",
            course.level,
            course.duration_hours,
            format_number(course.students),
            course.rating
        );
    }
    Ok(())
}
