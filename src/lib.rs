pub mod config;
pub mod logging;
pub mod receipt;
pub mod scoring;
pub mod server;
pub mod store;

pub use server::{create_router, AppState};
