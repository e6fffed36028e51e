use dotenvy::dotenv;

use wardpass::logging::init_tracing;
use wardpass::metrics::{init_metrics, metrics_app};
use wardpass::router::init_router;
use wardpass::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let state = init_app_state();
    let mut app = init_router(state);

    if let Some(handle) = init_metrics() {
        app = app.merge(metrics_app(handle));
    }

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("Failed to bind server port");
    println!("🚀 Server running on http://localhost:{port}");
    println!("📚 Swagger UI available at http://localhost:{port}/swagger-ui");
    axum::serve(listener, app).await.expect("Server error");
}
