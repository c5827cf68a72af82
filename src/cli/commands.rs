//! Command implementations for the Qbank CLI.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::session::session::ConversationSession;
use crate::store::loader::load_dataset;

/// The control word that requests the next page of a pending result set.
/// It is a distinct shell-level input, deliberately not an intent.
const MORE_CONTROL: &str = "more";

/// Execute a CLI command.
pub fn execute_command(args: QbankArgs) -> Result<()> {
    match &args.command {
        Command::Chat(chat_args) => run_chat(chat_args.clone(), &args),
        Command::Categories(categories_args) => list_categories(categories_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Run the interactive chat shell.
///
/// The shell is a thin collaborator: it reads lines, maps the `more`
/// control word to `request_more`, hands everything else to
/// `submit_turn`, and stops when the session signals end of conversation.
fn run_chat(args: ChatArgs, cli_args: &QbankArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Loading question bank from: {}", args.dataset.display());
    }

    let store = Arc::new(load_dataset(&args.dataset)?);
    let mut session = ConversationSession::with_page_size(store, args.page_size);

    if cli_args.verbosity() > 0 && cli_args.output_format == OutputFormat::Human {
        println!("Question Bank Assistant. Type 'help' if you need guidance.");
        println!();
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        if cli_args.output_format == OutputFormat::Human {
            print!("> ");
            stdout.flush()?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.eq_ignore_ascii_case(MORE_CONTROL) {
            match session.request_more() {
                Some(message) => output_message(&message, cli_args)?,
                // "more" with nothing pending is a no-op; just hint.
                None => {
                    if cli_args.output_format == OutputFormat::Human {
                        println!("Nothing more to show. Ask me a new question.");
                    }
                }
            }
            continue;
        }

        let message = session.submit_turn(line);
        let done = message.end_of_conversation;
        output_message(&message, cli_args)?;
        if done {
            break;
        }
    }

    Ok(())
}

/// List the distinct categories of a question bank.
fn list_categories(args: CategoriesArgs, cli_args: &QbankArgs) -> Result<()> {
    let store = load_dataset(&args.dataset)?;
    let categories = store.categories().to_vec();

    output_categories(
        &CategoryListing {
            total: categories.len(),
            categories,
        },
        cli_args,
    )
}

/// Show record and category counts for a question bank.
fn show_stats(args: StatsArgs, cli_args: &QbankArgs) -> Result<()> {
    let store = load_dataset(&args.dataset)?;

    let categories: Vec<CategoryStats> = store
        .categories()
        .iter()
        .map(|name| CategoryStats {
            name: name.clone(),
            records: store.category_len(name),
        })
        .collect();

    output_stats(
        &StoreStats {
            total_records: store.len(),
            total_categories: categories.len(),
            categories,
        },
        cli_args,
    )
}
