use std::sync::Arc;

use user_registry::api::routes::router;
use user_registry::config::Config;
use user_registry::store::file::FileStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                config.bind = args[i + 1].parse()?;
                i += 2;
            }
            "--data" => {
                config.data_path = args[i + 1].clone().into();
                i += 2;
            }
            "--strict-reads" => {
                config.empty_on_read_error = false;
                i += 1;
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: {} [--bind <addr:port>] [--data <path>] [--strict-reads]",
                    args[0]
                );
                eprintln!("Example: {} --bind 127.0.0.1:3000 --data users.json", args[0]);
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    tracing::info!("User data file: {}", config.data_path.display());
    if !config.empty_on_read_error {
        tracing::info!("Strict reads enabled: unreadable data files fail requests");
    }

    let store = Arc::new(FileStore::new(&config));
    let app = router(store);

    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
