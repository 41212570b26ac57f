//! HTTP server implementation.

use std::net::SocketAddr;

use axum::Router;
use tracing::{error, info};

use crate::error::Result;

/// HTTP server for the dog API.
pub struct HttpServer {
    /// Address to bind to
    addr: SocketAddr,
    /// Fully wired application router
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server.
    pub fn new(addr: SocketAddr, router: Router) -> Self {
        Self { addr, router }
    }

    /// Start the server with graceful shutdown.
    ///
    /// The server shuts down when the provided signal resolves.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;

        info!(addr = %self.addr, "Starting HTTP server");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(signal)
            .await
            .map_err(|e| {
                error!(error = %e, "HTTP server failed");
                e.into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dogs::{DogService, InMemoryDogRepository};
    use crate::http::{app_router, AdmissionState};
    use crate::ratelimit::{LimiterRegistry, SystemClock};
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_server_creation() {
        let addr: SocketAddr = "127.0.0.1:8080".parse().unwrap();
        let registry = Arc::new(LimiterRegistry::new(2, Duration::from_millis(1000)).unwrap());
        let admission = AdmissionState::new(registry, Arc::new(SystemClock::new()));
        let dogs = Arc::new(DogService::new(Arc::new(InMemoryDogRepository::new())));
        let _server = HttpServer::new(addr, app_router(dogs, admission));
    }
}
