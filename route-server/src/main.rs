use std::net::SocketAddr;

use route_server::store::InMemoryNetwork;
use route_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Network file path from environment, with a local default
    let network_path =
        std::env::var("ROUTE_NETWORK").unwrap_or_else(|_| "data/network.json".to_string());

    let network = InMemoryNetwork::load(&network_path)
        .unwrap_or_else(|e| panic!("Failed to load network from {network_path}: {e}"));
    info!(
        path = %network_path,
        locations = network.location_count(),
        edges = network.edge_count(),
        "network loaded"
    );

    let state = AppState::new(network);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Route planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health         - Health check");
    println!("  GET  /api/v1/routes  - Search valid routes (origin, destination, date?)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
