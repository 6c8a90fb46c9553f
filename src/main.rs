use clap::Parser;
use tracing_subscriber::EnvFilter;

use rbs_chooser::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("rbs_chooser=debug,info")
    } else {
        EnvFilter::new("rbs_chooser=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Choose(args) => {
            cli::choose::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Catalog(args) => {
            cli::catalog::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
