mod commands;
mod discovery;
mod ops;
mod reports;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.run()
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins, then `HEALTHGEN_LOG`, then the `-v` count. Output goes to
/// stderr so previews on stdout can be piped.
fn init_tracing(verbose: u8) {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if let Ok(directives) = std::env::var("HEALTHGEN_LOG") {
        EnvFilter::new(directives)
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::new(level)
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
