use std::net::SocketAddr;

use metro_server::planner::RoutePlanner;
use metro_server::registry::{LineClient, LineClientConfig, LineRegistry};
use metro_server::transfers::delhi_connections;
use metro_server::web::{AppState, create_router};

/// Default location of the line data file.
const DEFAULT_LINES_PATH: &str = "static/metrolines.json";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Load the network once. Serving routes over a partial or empty graph
    // would silently give wrong answers, so any load failure is fatal.
    let registry = match std::env::var("METRO_LINES_URL") {
        Ok(url) => {
            println!("Fetching line data from {url}...");
            let client = LineClient::new(LineClientConfig::new(&url))
                .expect("Failed to create line data client");
            client.fetch_all().await.expect("Failed to fetch line data")
        }
        Err(_) => {
            let path = std::env::var("METRO_LINES_PATH")
                .unwrap_or_else(|_| DEFAULT_LINES_PATH.to_string());
            println!("Loading line data from {path}...");
            LineRegistry::load_file(&path).expect("Failed to load line data")
        }
    };
    println!(
        "Loaded {} lines, {} stations",
        registry.len(),
        registry.station_count()
    );

    // Curated bridges between differently-named interchange stations
    let transfers = delhi_connections();

    let planner = RoutePlanner::new(registry, &transfers);

    let state = AppState::new(planner);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Metro Route Planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health    - Health check");
    println!("  GET /route     - Plan a route (?from=&to=)");
    println!("  GET /stations  - List known stations");
    println!("  GET /lines     - List lines and their stops");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
