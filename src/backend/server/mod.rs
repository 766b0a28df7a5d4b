//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading (store, Google verifier)
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: user store and Google verifier from the
//!    environment, each degrading gracefully when absent
//! 2. **State Creation**: one `AuthService` shared by all handlers
//! 3. **Router Creation**: routes, verification middleware, CORS and trace
//!    layers

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use init::create_app;
pub use state::AppState;
