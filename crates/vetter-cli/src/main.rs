//! vetter entry point.
//!
//! ```bash
//! cargo run -p vetter-cli -- check --schema schema.json --data data.json
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vetter_cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout stays machine-readable (respects RUST_LOG)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match vetter_cli::run(cli).await {
        Ok(outcome) => {
            println!("{}", outcome.output);
            if outcome.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("vetter: {e:#}");
            ExitCode::from(2)
        }
    }
}
