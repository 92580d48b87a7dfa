//! HTTP entry point of the Syntagma pipeline: raw text in, converted
//! annotation records out. Annotation itself happens in the external engine
//! configured via `ANNOTATOR_URL`; this binary only transports and re-shapes.

mod engine;
mod routes;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let annotator_url =
        std::env::var("ANNOTATOR_URL").unwrap_or_else(|_| "http://localhost:9000".to_string());
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    let client = engine::AnnotatorClient::new(annotator_url.clone());

    // Router with CORS and request tracing
    let app = routes::router(client)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, %annotator_url, "annotation record service listening");
    axum::serve(listener, app).await?;

    Ok(())
}
