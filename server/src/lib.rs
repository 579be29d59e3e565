//! Savannah Restaurant server
//!
//! # Architecture
//!
//! HTTP application behind the restaurant's marketing and ordering site:
//! menu and suites catalog, checkout, reservations, enquiries, newsletter,
//! blog, and the admin dashboard that drives order fulfillment.
//!
//! # Module structure
//!
//! ```text
//! server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT auth, admin gate
//! ├── api/           # HTTP routes and handlers
//! ├── orders/        # checkout validation, status machine, tracking
//! ├── notify/        # mail transport and detached dispatch
//! ├── utils/         # errors, logging, validation
//! └── db/            # storage, models, repositories, seed data
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod notify;
pub mod orders;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use crate::core::{Config, Server, ServerState, StorageMode};
pub use notify::Mailer;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger;

pub fn print_banner() {
    println!(
        r#"
   _____                                         __
  / ___/____ __   ______ _____  ____  ____ _____/ /_
  \__ \/ __ `/ | / / __ `/ __ \/ __ \/ __ `/ __  __ \
 ___/ / /_/ /| |/ / /_/ / / / / / / / /_/ / / / / / /
/____/\__,_/ |___/\__,_/_/ /_/_/ /_/\__,_/_/ /_/ /_/
    "#
    );
}
