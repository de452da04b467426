use axum::Router;
use tokio::net::TcpListener;

use crate::routes::configure_routes;
use crate::shared::core_client::CoreClient;
use crate::shared::state::AppState;

/// Serve `app` on an ephemeral local port, return its base URL
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Start the proxy pointed at `core_url`, return its base URL
pub async fn serve_proxy(core_url: &str) -> String {
    let state = AppState::new(CoreClient::new(core_url).unwrap());
    serve(configure_routes(state)).await
}

/// Base URL of a port nothing listens on
pub async fn dead_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
