//! # Courses List Subcommand
//!
//! File: cli/src/commands/courses/list.rs
//!
use clap::Parser;
use educirculos::core::error::Result;
use educirculos::platform::catalog::{Catalog, Course, FILTER_ALL};
use educirculos::platform::format::format_number;
use tracing::{debug, info};

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Subject key (e.g. `ciencias`) or lower-case level (e.g. `intermedio`).
    #[arg(long, default_value = FILTER_ALL)]
    pub filter: String,

    /// Case-insensitive text to look for in titles and descriptions.
    #[arg(long)]
    pub search: Option<String>,
}

pub async fn handle_list(args: ListArgs, catalog: &Catalog) -> Result<()> {
    info!("Handling courses list command...");
    let courses = select(catalog, &args.filter, args.search.as_deref());
    debug!("{} courses selected", courses.len());
    print_course_table(&courses);
    Ok(())
}

/// Applies the filter, then narrows by the search term if one is given.
fn select<'a>(catalog: &'a Catalog, filter: &str, search: Option<&str>) -> Vec<&'a Course> {
    let mut courses = catalog.filter(filter);
    if let Some(term) = search {
        let matching: Vec<u32> = catalog.search(term).iter().map(|c| c.id).collect();
        courses.retain(|c| matching.contains(&c.id));
    }
    courses
}

fn print_course_table(courses: &[&Course]) {
    if courses.is_empty() {
        println!("No se encontraron cursos.");
        return;
    }

    let title_width = courses
        .iter()
        .map(|c| c.title.chars().count())
        .max()
        .unwrap_or(0)
        .max("Curso".len());

    println!(
        "{:<4} {:<title_width$} {:<11} {:>9} {:>12} {:>6}",
        "ID", "Curso", "Nivel", "Duración", "Estudiantes", "★"
    );
    for course in courses {
        println!(
            "{:<4} {:<title_width$} {:<11} {:>9} {:>12} {:>6.1}",
            course.id,
            course.title,
            course.level,
            format!("{} h", course.duration_hours),
            format_number(course.students),
            course.rating
        );
    }
}
