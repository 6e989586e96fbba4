use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use beacon_core::{
    classify_and_respond, emergency_contacts, match_rules, ConversationTurn, InboundMessage,
};
use beacon_observability::init_tracing;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "beacon")]
#[command(about = "Beacon emergency guidance CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the guidance for a single message.
    Ask {
        #[arg(required = true)]
        message: Vec<String>,
        /// Emit the guidance response as JSON.
        #[arg(long, env = "BEACON_JSON")]
        json: bool,
    },
    /// Interactive session; `exit` or `quit` ends it.
    Chat,
    /// List the match rules in evaluation order.
    Rules,
    /// List the emergency contact directory.
    Contacts,
}

fn main() -> Result<()> {
    init_tracing("beacon_cli");
    let cli = Cli::parse();

    match cli.command {
        Command::Ask { message, json } => {
            let message = InboundMessage::new(message.join(" "));
            let guidance = classify_and_respond(&message, &[]);
            tracing::debug!(category = guidance.category.as_code(), "guidance dispatched");
            if json {
                println!("{}", serde_json::to_string_pretty(&guidance)?);
            } else {
                println!("[{}]\n{}", guidance.category.as_code(), guidance.text);
            }
        }
        Command::Chat => run_chat()?,
        Command::Rules => {
            for rule in match_rules() {
                println!(
                    "{:>2}  {:<18} {}",
                    rule.priority,
                    rule.category.as_code(),
                    rule.keywords.join(", ")
                );
            }
            println!(" -  fallback           (no keyword matched)");
        }
        Command::Contacts => {
            for contact in emergency_contacts() {
                println!("{:<6} {}", contact.number, contact.name);
            }
        }
    }

    Ok(())
}

fn run_chat() -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut history = Vec::new();

    println!("Beacon emergency guidance. For immediate danger call 112. Type 'exit' to quit.");

    loop {
        print!("you> ");
        stdout.flush().context("failed to flush stdout")?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read stdin")?;
        if read == 0 {
            break;
        }

        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if matches!(text, "exit" | "quit") {
            break;
        }

        let guidance = classify_and_respond(&InboundMessage::new(text), &history);
        tracing::debug!(
            category = guidance.category.as_code(),
            history_turns = history.len(),
            "guidance dispatched"
        );
        println!("beacon> {}\n", guidance.text);

        history.push(ConversationTurn::user(text));
        history.push(ConversationTurn::assistant(guidance.text));
    }

    Ok(())
}
