mod application;
mod cli;
mod config;
mod domain;
mod errors;
mod handlers;
mod service;
mod utils;

use std::process::ExitCode;

use cli::Cli;
use handlers::run;
use utils::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Parse CLI arguments
    let config = Cli::parse_config();

    if let Err(e) = logging::init_logging() {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    if let Err(e) = run(config).await {
        match e.path() {
            Some(path) => tracing::error!(path = %path.display(), "{}", e),
            None => tracing::error!("{}", e),
        }
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
