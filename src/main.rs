use axum::{
    Router, Extension,
    routing::{get, post},
};
use mcp_directory::catalog::handlers::{handle_get_category, handle_list_categories};
use mcp_directory::catalog::store::CatalogStore;
use mcp_directory::query::handlers::handle_search;
use mcp_directory::query::lexicon::Lexicon;
use mcp_directory::submission::handlers::{
    handle_check_resource_exists, handle_submit_resource,
};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: Option<SocketAddr> = None;
    let mut data_dir = "data/json".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = Some(args[i + 1].parse()?);
                i += 2;
            }
            "--data" => {
                data_dir = args[i + 1].clone();
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let Some(bind_addr) = bind_addr else {
        eprintln!("Usage: {} --bind <addr:port> [--data <dir>]", args[0]);
        eprintln!("Example: {} --bind 127.0.0.1:8080", args[0]);
        eprintln!(
            "Example: {} --bind 0.0.0.0:8080 --data data/json",
            args[0]
        );
        std::process::exit(1);
    };

    tracing::info!("Serving catalog from {}", data_dir);

    // 1. Shared state: the catalog cache and the query lexicon.
    let store = Arc::new(CatalogStore::new(&data_dir));
    let lexicon = Arc::new(Lexicon::with_defaults());

    // 2. HTTP Router:
    let app = Router::new()
        .route("/categories", get(handle_list_categories))
        .route("/category/:category", get(handle_get_category))
        .route("/search", get(handle_search))
        .route("/check-resource-exists", get(handle_check_resource_exists))
        .route("/resources", post(handle_submit_resource))
        .layer(Extension(store))
        .layer(Extension(lexicon));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
