use axum::Router;
use std::net::SocketAddr;
use std::path::Path;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

/// Default port of the local fixture server
pub const DEFAULT_PORT: u16 = 8080;

/// Default directory of static pages served by the fixture server
pub const DEFAULT_DIR: &str = "static_pages";

/// Router serving every file under `dir` at its relative path
pub fn router(dir: impl AsRef<Path>) -> Router {
    Router::new().fallback_service(ServeDir::new(dir.as_ref()))
}

/// Serve `dir` on an already bound listener until the process exits
pub async fn serve(listener: TcpListener, dir: impl AsRef<Path>) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    ::log::info!("Serving {} at http://{}", dir.as_ref().display(), addr);
    axum::serve(listener, router(dir)).await
}

/// Bind `addr` and serve `dir` on it
pub async fn bind_and_serve(addr: SocketAddr, dir: impl AsRef<Path>) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve(listener, dir).await
}

/// Start serving `dir` on an ephemeral localhost port in the background.
///
/// Returns the base URL, e.g. `http://127.0.0.1:49152`.
pub async fn spawn(dir: impl AsRef<Path>) -> std::io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    let app = router(dir);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            ::log::error!("Fixture server stopped: {}", e);
        }
    });

    Ok(base_url)
}
