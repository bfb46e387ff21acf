//! ChessMatch - Session & Statistics Tracker
//!
//! This library provides the core functionality for ChessMatch, a tracker
//! for chess-style match results against a personal roster of opponents.
//!
//! # Features
//!
//! - Account lifecycle with admin approval, blocking, and deletion cascades
//! - Session recording with score reconciliation into opponent records
//! - Per-account ownership of players and sessions
//! - JSON snapshot persistence with backup export/import merge
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Store**: In-memory entity collections + snapshot persistence
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
pub use store::Store;
