pub mod server;

pub use server::{router, serve, serve_with_listener, AppState};
