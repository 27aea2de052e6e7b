// PortalNav - util/constants.rs
//
// Single source of truth for named constants, routes, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "PortalNav";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "PortalNav";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Routes
// =============================================================================

/// Route shown when the application starts logged in.
pub const HOME_ROUTE: &str = "/dashboard";

/// Route the shell redirects to after logout.
pub const LOGIN_ROUTE: &str = "/login";

/// Route of the logs page (error/audit tab switcher).
pub const LOGS_ROUTE: &str = "/logs";

/// Route whose presence in the allowed set marks an operator session.
/// Decides which group the License and Documentation entries attach to.
pub const PRIVILEGED_ROUTE: &str = "/tenants";

/// Route of the License entry.
pub const LICENSE_ROUTE: &str = "/license";

/// Route of the Documentation entry (always displayed, opens externally).
pub const DOCUMENTATION_ROUTE: &str = "/documentation";

// =============================================================================
// Menu groups
// =============================================================================

pub const GROUP_COMMON: &str = "common";
pub const GROUP_TOOLS: &str = "Tools";
pub const GROUP_OPERATOR: &str = "Operator";
pub const GROUP_LICENSE: &str = "License";

// =============================================================================
// External endpoints
// =============================================================================

/// Path of the backend session-termination endpoint.
pub const LOGOUT_ENDPOINT: &str = "/api/v1/logout";

/// Base of the external documentation URL. A `ref` query parameter
/// records whether the link came from operator or console mode.
pub const DOCUMENTATION_URL_BASE: &str = "https://docs.min.io/";

/// Default backend base URL.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:9090";

/// How often the UI polls an in-flight logout request (ms).
pub const LOGOUT_POLL_INTERVAL_MS: u64 = 100;

// =============================================================================
// Session
// =============================================================================

/// Local key-value store key cleared on logout.
pub const LOGGED_IN_KEY: &str = "userLoggedIn";

/// Feature name that enables the Audit Logs (log search) tab.
pub const LOG_SEARCH_FEATURE: &str = "log-search";

/// Maximum number of allowed pages accepted from configuration.
pub const MAX_ALLOWED_PAGES: usize = 256;

/// Maximum number of feature flags accepted from configuration.
pub const MAX_FEATURES: usize = 64;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Session persistence file name (stored in the platform data directory).
pub const SESSION_FILE_NAME: &str = "session.json";
