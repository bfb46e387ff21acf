//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// STORAGE DEFAULTS
// =============================================================================

/// Default path of the JSON snapshot file
pub const DEFAULT_DATA_PATH: &str = "chessmatch.json";

/// Version stamp written into export files
pub const EXPORT_FORMAT_VERSION: &str = "1.0";

// =============================================================================
// ACCOUNT DEFAULTS
// =============================================================================

/// Id of the seeded admin account; legacy records without an owner are
/// migrated to this id on load.
pub const SEED_ADMIN_ID: i64 = 1;

/// Default username of the seeded admin account
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Default password of the seeded admin account
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 4;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

// =============================================================================
// RATING DEFAULTS
// =============================================================================

/// Baseline rating for a newly added opponent
pub const DEFAULT_RATING_BASELINE: i32 = 1200;

/// Rating points an opponent gains per game the user loses (and loses per
/// game the user wins). A fixed heuristic, not Elo.
pub const DEFAULT_RATING_STEP: i32 = 5;

// =============================================================================
// SESSION LIMITS
// =============================================================================

/// Maximum number of matches recordable in a single session
pub const MAX_MATCHES_PER_SESSION: usize = 20;

/// Upper bound for a reported accuracy percentage
pub const MAX_ACCURACY: f64 = 100.0;
