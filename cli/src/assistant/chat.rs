//! # Chat Session
//!
//! File: cli/src/assistant/chat.rs
//!
//! ## Overview
//!
//! A `ChatSession` is the conversation state around the matcher: whether the
//! chat is open, the message history, and the artificial "thinking" delay
//! applied before each reply. The matcher itself stays pure; the delay and the
//! random source are both injected here.
//!
//! ## Examples
//!
//! ```rust,no_run
//! # use std::{sync::Arc, time::Duration};
//! # use educirculos::assistant::{ChatSession, ResponseMatcher};
//! # async fn demo(matcher: Arc<ResponseMatcher>) {
//! let mut chat = ChatSession::new(matcher, "¡Hola!", Duration::from_millis(1000));
//! chat.open();
//! if let Some(reply) = chat.send("¿Qué cursos hay?").await {
//!     println!("{reply}");
//! }
//! # }
//! ```
//!
use super::matcher::ResponseMatcher;
use super::Category;
use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// One entry of the chat history.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    /// Category that produced an assistant reply; `None` for user messages and
    /// the welcome line.
    pub category: Option<Category>,
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>, category: Option<Category>) -> Self {
        Self {
            sender,
            text: text.into(),
            category,
            sent_at: Local::now(),
        }
    }
}

/// Conversation state around a shared `ResponseMatcher`.
pub struct ChatSession<R = StdRng> {
    matcher: Arc<ResponseMatcher>,
    welcome: String,
    reply_delay: Duration,
    rng: R,
    open: bool,
    history: Vec<ChatMessage>,
}

impl ChatSession<StdRng> {
    /// Creates a closed session seeded from the operating system.
    pub fn new(matcher: Arc<ResponseMatcher>, welcome: impl Into<String>, reply_delay: Duration) -> Self {
        Self::with_rng(matcher, welcome, reply_delay, StdRng::from_os_rng())
    }
}

impl<R: Rng> ChatSession<R> {
    /// Creates a closed session that draws replies from `rng`.
    pub fn with_rng(
        matcher: Arc<ResponseMatcher>,
        welcome: impl Into<String>,
        reply_delay: Duration,
        rng: R,
    ) -> Self {
        Self {
            matcher,
            welcome: welcome.into(),
            reply_delay,
            rng,
            open: false,
            history: Vec::new(),
        }
    }

    /// Opens the chat and greets the user. Re-opening greets again.
    pub fn open(&mut self) {
        self.open = true;
        let welcome = ChatMessage::new(Sender::Assistant, self.welcome.clone(), None);
        self.history.push(welcome);
    }

    /// Closes the chat. History is kept.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Records the user's message, waits the reply delay and answers.
    ///
    /// Input is trimmed first; blank input is ignored and returns `None`.
    pub async fn send(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.history
            .push(ChatMessage::new(Sender::User, text, None));

        if !self.reply_delay.is_zero() {
            tokio::time::sleep(self.reply_delay).await;
        }

        let result = self.matcher.respond_with(text, &mut self.rng);
        debug!("Replying from category '{}'", result.category);
        let reply = result.reply.to_owned();
        self.history.push(ChatMessage::new(
            Sender::Assistant,
            reply.clone(),
            Some(result.category),
        ));
        Some(reply)
    }

    /// Messages in the order they were added.
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }
}
