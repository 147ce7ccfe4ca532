//! # Account Command Group
//!
//! File: cli/src/commands/account.rs
//!
//! ## Overview
//!
//! Runs the mock account flows against a fresh in-memory `Session` and prints
//! the resulting notice and profile. Rejected forms exit with status 1 and the
//! platform's Spanish validation message.
//!
//! ```bash
//! educirculos account login --email ana@example.com --password secreto123
//! educirculos account register --name "Luis Pérez" --email luis@correo.hn \
//!     --password secreto123 --confirm-password secreto123
//! educirculos account guest
//! ```
//!
use clap::{Parser, Subcommand};
use educirculos::core::config::Config;
use educirculos::core::error::Result;
use educirculos::platform::format::format_number;
use educirculos::platform::session::{RegistrationForm, Session, UserProfile};
use tracing::info;

#[derive(Parser, Debug)]
pub struct AccountArgs {
    #[command(subcommand)]
    command: AccountCommand,
}

#[derive(Subcommand, Debug)]
enum AccountCommand {
    /// Sign in with email and password.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Continue as guest.
    Guest,
}

/// # Handle Account Command (`handle_account`)
///
/// ## Returns
///
/// * `Result<()>`: `Err` carrying an `EduError` when the form is rejected.
pub async fn handle_account(args: AccountArgs, cfg: &Config) -> Result<()> {
    let mut session = Session::new(cfg.platform.clone());
    let notice = match args.command {
        AccountCommand::Login { email, password } => {
            info!("Handling account login command...");
            session.login(&email, &password)?
        }
        AccountCommand::Register {
            name,
            email,
            password,
            confirm_password,
        } => {
            info!("Handling account register command...");
            session.register(&RegistrationForm {
                name,
                email,
                password,
                confirm_password,
            })?
        }
        AccountCommand::Guest => {
            info!("Handling account guest command...");
            session.guest()
        }
    };

    println!("{}", notice.render_line());
    if let Some(user) = session.current_user() {
        print_profile(user);
    }
    Ok(())
}

fn print_profile(user: &UserProfile) {
    println!("  [{}] {} <{}>", user.avatar, user.name, user.email);
    println!("  Nivel: {}", user.level);
    println!("  EduCréditos: {}", format_number(user.edu_credits));
    println!("  Cursos completados: {}", user.courses_completed);
}
