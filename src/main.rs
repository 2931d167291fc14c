use clap::Parser;
use todos::cli::commands::Cli;
use todos::cli::handlers;

fn main() {
    let cli = Cli::parse();

    // No subcommand launches the TUI; dispatch handles both
    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
