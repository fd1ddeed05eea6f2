use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Daily Lichess progress report")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Build the report and email it
    Send(ReportArgs),
    /// Build the report and print it instead of emailing it
    Preview(ReportArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ReportArgs {
    /// Minimum times an opening must be played to be graded
    #[arg(short, long)]
    pub min_played: Option<usize>,
    /// Speed category (blitz, rapid, ...)
    #[arg(short, long)]
    pub speed: Option<String>,
}
