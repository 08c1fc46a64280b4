use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "split-timing leaderboard backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Build the timing and results views from a JSON file of provider records
    Transform {
        /// Path to a JSON array of provider records
        #[arg(short, long)]
        input: PathBuf,
        /// Write output here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the leaderboard to the terminal
    Show {
        /// Read records from a file instead of the live results page
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
