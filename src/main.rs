//! termdeck CLI
//!
//! Present the generative-AI workshop deck in the terminal.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use termdeck::outline::format_outline;
use termdeck::tui;
use termdeck::tui::state::App;
use termdeck::types::{Deck, OutputFormat};

#[derive(Parser)]
#[command(name = "termdeck")]
#[command(about = "Present the generative-AI workshop deck in the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full-screen presenter (the default command)
    Present {
        /// 1-based slide to start on
        #[arg(long, default_value_t = 1)]
        start: usize,
    },

    /// Print the deck outline without entering the terminal UI
    Outline {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// List the labs embedded in the deck
    Labs,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Bare `termdeck` presents from the top.
    let command = cli.command.unwrap_or(Commands::Present { start: 1 });

    let result = match command {
        Commands::Present { start } => cmd_present(start),
        Commands::Outline { format } => cmd_outline(format.into()),
        Commands::Labs => cmd_labs(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_present(start: usize) -> Result<(), String> {
    let deck = Deck::builtin();

    // Reject a bad --start before the terminal enters raw mode.
    if start == 0 || start > deck.len() {
        return Err(format!("--start must be between 1 and {}", deck.len()));
    }

    tui::run::run(App::starting_at(deck, start - 1)).map_err(|e| e.to_string())
}

fn cmd_outline(format: OutputFormat) -> Result<(), String> {
    print!("{}", format_outline(&Deck::builtin(), format));
    Ok(())
}

fn cmd_labs() -> Result<(), String> {
    let deck = Deck::builtin();
    let labs = deck.labs();

    if labs.is_empty() {
        println!("No labs in this deck.");
        return Ok(());
    }

    for (sequence, lab) in labs {
        println!("slide {:>2}  {}", sequence, lab.title);
        println!("          {}", lab.url);
    }

    Ok(())
}
