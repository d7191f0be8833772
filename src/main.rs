use clap::Parser;
use todomd::cli::commands::Cli;
use todomd::cli::handlers;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
