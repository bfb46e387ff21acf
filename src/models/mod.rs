//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod player;
pub mod session;
pub mod settings;
pub mod user;

pub use player::*;
pub use session::*;
pub use settings::*;
pub use user::*;
