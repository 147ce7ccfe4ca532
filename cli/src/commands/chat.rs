//! # Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! `educirculos chat` opens a `ChatSession` and reads messages from stdin one
//! line at a time until `salir`, `bye` or end of input. Each reply waits for
//! the configured `reply_delay_ms` unless `--no-delay` is given.
//!
//! ```bash
//! educirculos chat
//! educirculos chat --no-delay --seed 1 < preguntas.txt
//! ```
//!
use anyhow::Context;
use clap::Parser;
use educirculos::assistant::{normalize, ChatSession, ResponseMatcher};
use educirculos::core::config::Config;
use educirculos::core::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// Words that end the conversation, compared after normalization.
const EXIT_WORDS: [&str; 3] = ["salir", "bye", "adios"];

#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Reply immediately instead of waiting `reply_delay_ms`.
    #[arg(long)]
    pub no_delay: bool,

    /// Seed for reply selection, for reproducible transcripts.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub async fn handle_chat(args: ChatArgs, cfg: &Config) -> Result<()> {
    info!("Handling chat command...");
    let settings = &cfg.assistant;
    let matcher = Arc::new(ResponseMatcher::from_settings(settings)?);
    let delay = if args.no_delay {
        Duration::ZERO
    } else {
        Duration::from_millis(settings.reply_delay_ms)
    };
    debug!("Reply delay: {:?}", delay);

    let mut chat = match args.seed {
        Some(seed) => ChatSession::with_rng(
            matcher,
            settings.welcome.clone(),
            delay,
            StdRng::seed_from_u64(seed),
        ),
        None => ChatSession::new(matcher, settings.welcome.clone(), delay),
    };

    chat.open();
    println!("{}: {}", settings.name, settings.welcome);
    println!("(Escribe 'salir' para terminar.)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;
    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read from stdin")?
    {
        let trimmed = line.trim();
        if is_exit_word(trimmed) {
            break;
        }
        if let Some(reply) = chat.send(trimmed).await {
            println!("{}: {}", settings.name, reply);
        }
        prompt()?;
    }

    chat.close();
    println!("{}: ¡Hasta pronto!", settings.name);
    debug!("Chat closed after {} messages", chat.history().len());
    Ok(())
}

fn prompt() -> Result<()> {
    print!("Tú: ");
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")
}

fn is_exit_word(input: &str) -> bool {
    let normalized = normalize(input);
    EXIT_WORDS.contains(&normalized.as_str())
}
