use anyhow::Result;

use split_leaderboard::cli::Command;
use split_leaderboard::{
    handle_completions, handle_serve, handle_show, handle_transform, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Transform { input, output } => handle_transform(input, output.as_deref()),
        Command::Show { input } => handle_show(input.as_deref()),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
