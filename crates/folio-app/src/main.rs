//! Folio application binary - composition root.
//!
//! Ties the Folio crates together into a terminal chat surface:
//! 1. Load configuration and the profile document from TOML
//! 2. Build the response engine and the action registry
//! 3. Host one chat session over stdin/stdout, dispatching reply actions
//!
//! The terminal stands in for the portfolio page that hosts the chat
//! widget: it renders the transcript, offers the quick-intent chips, and
//! executes the follow-up actions a reply carries.

mod cli;

use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use folio_action::ActionRegistry;
use folio_chat::{ChatError, ChatSession, Message, QuickIntent, ResponseEngine, Role};
use folio_core::config::FolioConfig;
use folio_core::profile::KnowledgeBase;

use crate::cli::CliArgs;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    let config_path = args.resolve_config_path();
    let mut config = FolioConfig::load_or_default(&config_path);
    config.chat.reply_delay_ms = args.resolve_reply_delay_ms(&config);

    init_tracing(&args.resolve_log_level(&config));

    let profile_path = args.resolve_profile_path(&config);
    let kb = KnowledgeBase::load_or_sample(&profile_path);
    tracing::info!(owner = %kb.owner, "Profile ready");

    let engine = Arc::new(ResponseEngine::new(Arc::new(kb)));
    let registry = ActionRegistry::with_defaults();
    let mut session = ChatSession::new(Arc::clone(&engine), &config.chat);

    println!("folio — type a question, /act N to run a reply action, /reset, /quit");
    print_quick_intents();
    render_message(&session.transcript()[0]);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read input");
                break;
            }
        };
        let input = line.trim();

        match input {
            "/quit" | "/q" => break,
            "/reset" => {
                session.reset();
                println!("(conversation reset)");
                render_message(&session.transcript()[0]);
            }
            _ if input.starts_with("/act") => {
                run_action(&session, &registry, input.trim_start_matches("/act").trim()).await;
            }
            _ => match session.submit(input).await {
                Ok(()) => {
                    if let Some(reply) = session.last_reply() {
                        render_message(reply);
                    }
                }
                Err(ChatError::EmptyMessage) => {}
                Err(e) => println!("({})", e),
            },
        }
    }

    println!("bye");
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_quick_intents() {
    let labels: Vec<&str> = QuickIntent::all().iter().map(|i| i.label()).collect();
    println!("quick intents: {}", labels.join(" | "));
}

fn render_message(message: &Message) {
    let who = match message.role {
        Role::User => "you",
        Role::Assistant => "folio",
    };
    println!("{}: {}", who, message.content);
    for (i, action) in message.actions.iter().enumerate() {
        println!("  [{}] {}", i + 1, action.label);
    }
}

/// Dispatch the N-th action of the most recent reply.
async fn run_action(session: &ChatSession, registry: &ActionRegistry, index: &str) {
    let Some(reply) = session.last_reply() else {
        println!("(no reply to act on)");
        return;
    };
    let Ok(n) = index.parse::<usize>() else {
        println!("(usage: /act N)");
        return;
    };
    let Some(action) = n.checked_sub(1).and_then(|i| reply.actions.get(i)) else {
        println!("(no action #{})", n);
        return;
    };

    match session.dispatch_action(action, registry).await {
        Ok(result) => println!("-> {}", result.message),
        Err(e) => println!("(action failed: {})", e),
    }
}
