//! # Config Command Group
//!
//! File: cli/src/commands/config.rs
//!
//! `educirculos config check` reports the effective configuration after all
//! layers were merged and validated: rule priority, pool sizes, catalog size
//! and platform numbers. Reaching this handler already means validation
//! passed, since `main.rs` loads configuration before dispatching.
//!
use clap::{Parser, Subcommand};
use educirculos::assistant::ResponseMatcher;
use educirculos::core::config::Config;
use educirculos::core::error::Result;
use tracing::info;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate the configuration and print a summary.
    Check,
}

pub async fn handle_config(args: ConfigArgs, cfg: &Config) -> Result<()> {
    match args.command {
        ConfigCommand::Check => handle_check(cfg),
    }
}

fn handle_check(cfg: &Config) -> Result<()> {
    info!("Handling config check command...");
    let matcher = ResponseMatcher::from_settings(&cfg.assistant)?;

    println!("Configuration OK");
    println!("Assistant: {}", cfg.assistant.name);
    println!("Reply delay: {} ms", cfg.assistant.reply_delay_ms);
    println!("Rules (priority order):");
    for (i, rule) in matcher.rules().iter().enumerate() {
        println!(
            "  {}. {:<11} {}",
            i + 1,
            rule.category(),
            rule.triggers().join(", ")
        );
    }
    println!("  fallback: {}", matcher.fallback());
    println!("Reply pools:");
    for category in matcher.pool().categories() {
        println!(
            "  {:<11} {} replies",
            category,
            matcher.pool().replies(category).len()
        );
    }
    println!("Courses: {}", cfg.catalog.courses.len());
    let platform = &cfg.platform;
    println!(
        "Platform: min password {}, welcome credits {}, enrollment bonus {}",
        platform.min_password_len, platform.welcome_credits, platform.enroll_bonus
    );
    Ok(())
}
