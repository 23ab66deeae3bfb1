mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "entitext")]
#[command(about = "Escape and unescape named HTML character references", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Escape {
        text: Vec<String>,

        #[arg(long)]
        ascii: bool,

        #[arg(long)]
        registry: Option<PathBuf>,
    },
    Unescape {
        text: Vec<String>,

        #[arg(long)]
        registry: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Escape {
            text,
            ascii,
            registry,
        } => commands::escape_text(&text, ascii, registry.as_deref()),
        Commands::Unescape { text, registry } => {
            commands::unescape_text(&text, registry.as_deref())
        }
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}
