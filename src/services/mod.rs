//! Business logic services

pub mod admin_service;
pub mod auth_service;
pub mod backup_service;
pub mod player_service;
pub mod session_service;

pub use admin_service::AdminService;
pub use auth_service::AuthService;
pub use backup_service::BackupService;
pub use player_service::PlayerService;
pub use session_service::SessionService;
