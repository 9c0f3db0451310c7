//! Track splitting binary.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tracksplit_cli::{run_batch, Args, RunOptions};
use tracksplit_media::{EncodingConfig, SplitConfig};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for scripts
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("tracksplit_cli=info".parse().unwrap())
        .add_directive("tracksplit_media=info".parse().unwrap());

    // Logs go to stderr; stdout is reserved for the marker report.
    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .with(env_filter)
            .init();
    }

    let args = Args::parse();

    let options = RunOptions {
        split: args.split,
        name_template: args.name_template.clone(),
        config: SplitConfig::default()
            .with_threshold_db(args.threshold_db)
            .with_min_silence_secs(args.min_silence),
        encoding: EncodingConfig::default(),
    };

    match run_batch(args.files.as_deref(), args.start_number, &options).await {
        Ok(_) => {
            info!("done");
        }
        Err(e) => {
            if let Some(stderr) = e.collaborator_stderr() {
                eprintln!("{}", stderr);
            }
            error!("Run failed: {}", e);
            std::process::exit(1);
        }
    }
}
