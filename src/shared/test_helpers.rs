#[cfg(test)]
use axum::Router;

/// Serve `router` on an ephemeral localhost port and return its base URL.
///
/// Stands in for the external HTTP services (geocoder, tile API) in tests.
#[cfg(test)]
pub async fn spawn_fake_service(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL of a port with nothing listening on it
#[cfg(test)]
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
