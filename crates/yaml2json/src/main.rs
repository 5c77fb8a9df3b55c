use clap::Parser;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yaml2json::{Args, exit_code, run};

fn main() {
    // Diagnostics go to stderr; stdout is reserved for the JSON sink.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yaml2json=warn,yaml2json_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("Error: {:#}", err);
        process::exit(exit_code(&err));
    }
}
