//! # Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! `educirculos ask <MESSAGE>...` sends one message to the assistant and
//! prints the reply. Words are joined with spaces, so quoting is optional.
//!
//! ```bash
//! educirculos ask hola, quiero ver un curso
//! educirculos ask --show-category --seed 7 "me siento sin ánimo"
//! ```
//!
use educirculos::assistant::ResponseMatcher;
use educirculos::core::config::Config;
use educirculos::core::error::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

/// # Ask Arguments (`AskArgs`)
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The message for the assistant. An empty message gets a help reply.
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,

    /// Prefix the reply with the category that produced it, e.g. `[credits]`.
    #[arg(long)]
    pub show_category: bool,

    /// Seed for reply selection, for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// # Handle Ask Command (`handle_ask`)
///
/// Builds the matcher from the `[assistant]` section, answers the joined
/// message and prints the reply on stdout. No reply delay is applied; that
/// belongs to the interactive chat.
///
/// ## Returns
///
/// * `Result<()>`: `Err` only if the matcher cannot be built, which
///   configuration validation already rules out.
pub async fn handle_ask(args: AskArgs, cfg: &Config) -> Result<()> {
    info!("Handling ask command...");
    let matcher = ResponseMatcher::from_settings(&cfg.assistant)?;
    let message = args.message.join(" ");

    let result = match args.seed {
        Some(seed) => {
            debug!("Using seeded reply selection: {}", seed);
            matcher.respond_with(&message, &mut StdRng::seed_from_u64(seed))
        }
        None => matcher.respond_with(&message, &mut rand::rng()),
    };

    if args.show_category {
        println!("[{}] {}", result.category, result.reply);
    } else {
        println!("{}", result.reply);
    }
    Ok(())
}
