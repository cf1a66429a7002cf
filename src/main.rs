use hansard::config::HansardConfig;
use hansard::logging::TracingLogger;
use hansard::types::DaySummary;
use hansard::{Document, HansardDay};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const USAGE: &str = "Usage: hansard-pages [--config <file>] <xml>...";

fn summarize(path: &Path, config: &HansardConfig) -> hansard::Result<DaySummary> {
    let document = Document::from_file(path)?;
    let logger = TracingLogger;
    HansardDay::new(&document, config, &logger).summary()
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1).collect::<Vec<_>>();
    let mut config = HansardConfig::default();
    if args.first().map(String::as_str) == Some("--config") {
        if args.len() < 2 {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
        let config_path = args.remove(1);
        args.remove(0);
        config = match HansardConfig::load_from_file(&config_path) {
            Ok(config) => config,
            Err(err) => {
                tracing::error!("[Hansard] {}", err);
                std::process::exit(2);
            }
        };
    }
    if args.is_empty() {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }

    let config = Arc::new(config);
    // Documents share nothing, so each gets its own blocking task.
    let handles = args
        .into_iter()
        .map(PathBuf::from)
        .map(|path| {
            let config = config.clone();
            let handle = tokio::task::spawn_blocking({
                let path = path.clone();
                move || summarize(&path, &config)
            });
            (path, handle)
        })
        .collect::<Vec<_>>();

    let mut failures = 0;
    for (path, handle) in handles {
        match handle.await {
            Ok(Ok(summary)) => match serde_json::to_string(&summary) {
                Ok(line) => println!("{line}"),
                Err(err) => {
                    tracing::error!("[Hansard] {}: failed to serialize: {}", path.display(), err);
                    failures += 1;
                }
            },
            Ok(Err(err)) => {
                tracing::error!("[Hansard] {}: {}", path.display(), err);
                failures += 1;
            }
            Err(err) => {
                tracing::error!("[Hansard] {}: task panicked or was cancelled: {}", path.display(), err);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        tracing::error!("[Hansard] {} file(s) failed", failures);
        std::process::exit(1);
    }
}
