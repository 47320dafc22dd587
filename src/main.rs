#![allow(missing_docs)]

//! Quickchat CLI — a thin, non-interactive adapter over the library core.
//!
//! Maps subcommand arguments onto the composition operations and prints
//! their return values. Owns no dialog and renders no menus; validation
//! outcomes decide the exit code.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use quickchat::config::QuickchatConfig;
use quickchat::logging;
use quickchat::messaging::record::MessageRecord;
use quickchat::messaging::validate;
use quickchat::session::Session;
use quickchat::store;

#[derive(Parser)]
#[command(name = "quickchat", version, about = "Compose, send, and store messages")]
struct Cli {
    /// Override the message log path from config.
    #[arg(long, global = true)]
    store_path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate and send one or more messages, counting them in this run.
    Send {
        /// Recipient address (starts with '+', at most 10 characters).
        #[arg(long)]
        to: String,
        /// Message contents, one per message, at most 250 characters each.
        #[arg(required = true)]
        messages: Vec<String>,
    },
    /// Validate a message and append it to the durable log.
    Store {
        /// Recipient address (starts with '+', at most 10 characters).
        #[arg(long)]
        to: String,
        /// 0-based batch index recorded with the message.
        #[arg(long, default_value_t = 0)]
        index: usize,
        /// Message content, at most 250 characters.
        message: String,
    },
    /// Print the durable log.
    Log,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = QuickchatConfig::load().context("failed to load configuration")?;
    if let Some(path) = cli.store_path {
        config.store.path = path;
    }

    logging::init_cli(&config.log.filter);

    match cli.command {
        Command::Send { to, messages } => run_send(&to, &messages),
        Command::Store { to, index, message } => {
            run_store(&to, index, &message, Path::new(&config.store.path))
        }
        Command::Log => run_log(Path::new(&config.store.path)),
    }
}

/// Compose and send a batch, then report the run total.
fn run_send(recipient: &str, messages: &[String]) -> Result<()> {
    check_recipient(recipient)?;

    let mut session = Session::new();
    for (index, content) in messages.iter().enumerate() {
        check_content(content)?;

        let mut record = MessageRecord::new(index);
        record.set_recipient(recipient);
        record.set_content(content);
        record.derive_fingerprint(index);

        let confirmation = record.send(&mut session);
        println!("{confirmation}");
        println!("{}", record.summary());
        session.record_send(record);
    }

    println!("Total messages sent: {}", session.total_sent());
    Ok(())
}

/// Compose a message and append it to the durable log.
fn run_store(recipient: &str, index: usize, content: &str, path: &Path) -> Result<()> {
    check_recipient(recipient)?;
    check_content(content)?;

    let mut record = MessageRecord::new(index);
    record.set_recipient(recipient);
    record.set_content(content);
    record.derive_fingerprint(index);

    let outcome = store::append_message(&record, path).context("failed to store message")?;
    if outcome.recovered_from_corruption {
        eprintln!("Warning: existing log was invalid and was discarded before appending.");
    }
    println!(
        "Message stored in {} ({} entries).",
        path.display(),
        outcome.entries
    );
    Ok(())
}

/// Print every stored message.
fn run_log(path: &Path) -> Result<()> {
    let entries = store::read_log(path).context("failed to read message log")?;
    if entries.is_empty() {
        println!("No messages stored.");
        return Ok(());
    }

    for (position, entry) in entries.iter().enumerate() {
        println!("Message {}:", position.saturating_add(1));
        println!("  ID: {}", entry.id);
        println!("  Recipient: {}", entry.recipient);
        println!("  Message: {}", entry.content);
        println!("  Hash: {}", entry.fingerprint);
    }
    println!("{} stored messages.", entries.len());
    Ok(())
}

/// Reject a recipient that fails the shape predicate.
fn check_recipient(recipient: &str) -> Result<()> {
    if !validate::is_valid_recipient(recipient) {
        bail!("invalid recipient: must start with '+' and be at most 10 characters");
    }
    Ok(())
}

/// Reject content that exceeds the length bound.
fn check_content(content: &str) -> Result<()> {
    if !validate::is_valid_content(content) {
        bail!("invalid message: must be at most 250 characters");
    }
    Ok(())
}
