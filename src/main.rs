use clap::Parser;
use petlens::services::fs_service;
use petlens::{ClientConfig, ItemStore, RemoteClassifier, Uploader};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Submit images to a classification service and print the result per image.
#[derive(Parser, Debug)]
#[command(name = "petlens", version, about)]
struct Args {
    /// Image files or directories to classify
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// URL of the predict endpoint
    #[arg(long)]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = match ClientConfig::resolve(
        args.endpoint.as_deref(),
        args.timeout_secs,
        args.config.as_deref(),
    ) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let files = fs_service::collect_image_files(&args.paths);
    if files.is_empty() {
        eprintln!("No image files found in the given paths");
        return ExitCode::FAILURE;
    }

    let classifier = match RemoteClassifier::new(config.endpoint.clone(), config.timeout()) {
        Ok(classifier) => classifier,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let uploader = Uploader::new(ItemStore::new(), classifier);
    let ids = uploader.submit(files.clone()).await;
    uploader.wait_idle().await;

    let mut failures = 0;
    for (id, path) in ids.iter().zip(&files) {
        let Some(item) = uploader.store().get(id).await else {
            continue;
        };
        match (item.prediction, item.error) {
            (Some(label), _) => println!("{}: {}", path.display(), label),
            (None, Some(error)) => {
                failures += 1;
                println!("{}: error: {}", path.display(), error);
            }
            (None, None) => {}
        }
    }

    if failures == ids.len() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
