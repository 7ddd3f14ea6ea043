//! padel-sessions binary entry point.

use std::process::ExitCode;

use padel_sessions::api::{serve_with_state, AppState};
use padel_sessions::cli::{self, parse_args};
use padel_sessions::config::Config;
use padel_sessions::logging;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("Try 'padel-sessions --help' for more information.");
            return ExitCode::FAILURE;
        }
    };

    if args.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }

    if args.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &cli::Args) -> padel_sessions::Result<()> {
    let config = Config::load(args)?;

    if let Err(e) = logging::init_with_filter(config.log_filter()) {
        eprintln!("warning: logging already initialized: {}", e);
    }

    info!("padel-sessions v{}", env!("CARGO_PKG_VERSION"));

    let server_config = config.to_server_config()?;
    let state = AppState::new();
    info!("Session store initialized");

    serve_with_state(server_config, state).await
}
