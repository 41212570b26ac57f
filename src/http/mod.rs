//! HTTP surface: admission middleware, routes, and server.

mod admission;
mod handlers;
mod router;
mod server;

pub use admission::{AdmissionState, GlobalKey, KeyPolicy};
pub use router::{app_router, AppState};
pub use server::HttpServer;
