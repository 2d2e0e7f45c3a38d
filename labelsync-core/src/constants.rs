// Constants used throughout labelsync

// Default locations
pub const DEFAULT_DATA_FILE: &str = "data.yml";
pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// HTTP headers
pub const USER_AGENT: &str = "labelsync-rust/1.0";
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

// Override syntax
pub const OVERRIDE_SEPARATOR: char = '=';
pub const LABEL_SEPARATOR: char = ',';

// Environment variables
pub const ENV_DATA_FILE: &str = "LABELSYNC_DATA_FILE";
pub const ENV_API_URL: &str = "LABELSYNC_API_URL";
pub const ENV_TIMEOUT: &str = "LABELSYNC_TIMEOUT";
pub const ENV_DRY_RUN: &str = "LABELSYNC_DRY_RUN";
pub const ENV_CTX_OUT: &str = "LABELSYNC_CTXOUT";
pub const ENV_DEBUG: &str = "LABELSYNC_DEBUG";
