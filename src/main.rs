use std::sync::Arc;

use tracing::{error, info, warn};

use discussion_board::web::{AppState, WebServer};
use discussion_board::{Config, Database, DiscussionStore, SqliteBlobStore};

#[tokio::main]
async fn main() {
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
    if let Err(e) = discussion_board::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        discussion_board::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = run(config).await {
        error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> discussion_board::Result<()> {
    config.validate()?;

    info!("Discussion board starting");
    if config.discussion.admin_password.is_empty() {
        warn!("No admin password configured; delete operations are disabled");
    }

    let db = Database::open(&config.database.path).await?;
    info!("Database opened at {}", config.database.path);

    let store = Arc::new(DiscussionStore::new(SqliteBlobStore::from_database(&db)));
    let app_state = AppState::new(
        store,
        config.discussion.board_name.as_str(),
        config.web.site_name.as_str(),
        &config.discussion.admin_password,
    )
    .with_fail_open_reads(config.discussion.fail_open_reads);

    let server = WebServer::new(&config.web, app_state)?;
    info!(
        board = %config.discussion.board_name,
        "Server configured on {}",
        server.addr()
    );

    let result = server.run().await;
    db.close().await;
    result
}
