use anyhow::Result;

use lichess_daily_report::cli::Command;
use lichess_daily_report::{handle_preview, handle_send, interpret};

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
        Command::Send(args) => handle_send(args),
        Command::Preview(args) => handle_preview(args),
    }
}
