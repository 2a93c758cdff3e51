use std::process::ExitCode;

use tracing::{error, info};

use postbox::{ChatService, Config, WebServer};

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration
    let mut config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };
    config.apply_env_overrides();

    // Initialize logging
    match postbox::logging::init(&config.logging) {
        Ok(path) => info!("Logging to file: {}", path.display()),
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            postbox::logging::init_console_only(&config.logging.level);
        }
    }

    if let Err(e) = config.validate() {
        error!("{}", e);
        return ExitCode::FAILURE;
    }

    info!("Postbox server started");

    let server = match WebServer::new(&config.server, ChatService::in_memory()) {
        Ok(server) => server,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = server.run().await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
