pub mod types;   // wire shapes for the order contract
pub mod error;   // forwarding failure taxonomy
pub mod engine;  // HTTP client for the external order engine
pub mod routes;  // handlers + router assembly

pub use routes::{router, AppState};
