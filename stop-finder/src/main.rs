use std::process::ExitCode;

use tokio::io::BufReader;
use tracing::warn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use stop_finder::config::AppConfig;
use stop_finder::runner::Runner;

/// Runs one lookup. Any error is printed to stdout and the process then
/// exits with a failure status rather than the plain exit of a successful run.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the prompt and results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stop_finder=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if !config.stop_points.has_credentials() {
        warn!("TFL_APP_ID / TFL_APP_KEY not set; TfL requests will be anonymous and rate limited");
    }

    let runner = match Runner::from_config(&config) {
        Ok(runner) => runner,
        Err(e) => {
            println!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    match runner.run(&mut stdin, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}
