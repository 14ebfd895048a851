use clap::Parser;
use tracing_subscriber::EnvFilter;

use primer_finder::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("primer_finder=debug,info")
    } else {
        EnvFilter::new("primer_finder=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Design(args) => {
            cli::design::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Locate(args) => {
            cli::locate::run(&args, cli.format)?;
        }
        cli::Commands::Evaluate(args) => {
            cli::evaluate::run(&args, cli.format)?;
        }
    }

    Ok(())
}
