//! Core module - configuration, state, server

pub mod config;
pub mod server;
pub mod state;

pub use config::{Config, MailConfig, StorageMode};
pub use server::Server;
pub use state::ServerState;
