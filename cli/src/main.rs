//! # EduCírculos Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `educirculos` CLI.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading the layered configuration once
//! - Routing execution to appropriate command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Ask the assistant one question
//! educirculos ask "¿Cuántos EduCréditos tengo?"
//!
//! # Chat interactively without the simulated delay
//! educirculos chat --no-delay
//!
//! # List intermediate courses with increased verbosity
//! educirculos -vv courses list --filter intermedio
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load and validate configuration
//! 4. Route to appropriate command handler
//! 5. Format and display any errors that occur
//!
use clap::{Parser, Subcommand};
use educirculos::core::config;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command-line handlers over the library modules.

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "educirculos",
    about = "EduCírculos: study assistant, course catalog and mock accounts",
    long_about = "Ask the EduCírculos assistant questions, browse the course catalog \
                  and try the mock account flows from the command line.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Extra configuration file, applied over user and project configuration.
    #[arg(long, global = true, env = "EDUCIRCULOS_CONFIG")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask the assistant a single question.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Chat with the assistant interactively.
    Chat(commands::chat::ChatArgs),
    /// Browse the course catalog and enroll.
    #[command(alias = "c")]
    Courses(commands::courses::CoursesArgs),
    /// Mock login, registration and guest access.
    Account(commands::account::AccountArgs),
    /// Show dashboard statistics.
    Dashboard(commands::dashboard::DashboardArgs),
    /// Inspect the effective configuration.
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match config::load_config(cli.config.as_deref()) {
        Ok(cfg) => match cli.command {
            Commands::Ask(args) => commands::ask::handle_ask(args, &cfg).await,
            Commands::Chat(args) => commands::chat::handle_chat(args, &cfg).await,
            Commands::Courses(args) => commands::courses::handle_courses(args, &cfg).await,
            Commands::Account(args) => commands::account::handle_account(args, &cfg).await,
            Commands::Dashboard(args) => commands::dashboard::handle_dashboard(args, &cfg).await,
            Commands::Config(args) => commands::config::handle_config(args, &cfg).await,
        },
        Err(e) => Err(e),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
