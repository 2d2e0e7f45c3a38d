use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_URL, DEFAULT_DATA_FILE, DEFAULT_TIMEOUT_SECS, ENV_API_URL, ENV_CTX_OUT,
    ENV_DATA_FILE, ENV_DEBUG, ENV_DRY_RUN, ENV_TIMEOUT,
};

/// Environment context packed in structure
///
/// Never holds the access token: `LABELSYNC_CTXOUT` logs this struct as is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    // From LABELSYNC_DATA_FILE, default data.yml
    pub data_file: String,

    // From LABELSYNC_API_URL, default https://api.github.com
    pub api_url: String,

    // From LABELSYNC_TIMEOUT, per request timeout in seconds, default 30
    pub timeout_secs: u64,

    // From LABELSYNC_DEBUG Debug level: 0-info, 1-debug, 2-trace, default 0
    pub debug: i32,

    // From LABELSYNC_DRY_RUN, resolve labels but do not call the API
    pub dry_run: bool,

    // From LABELSYNC_CTXOUT output all context data (this struct), default false
    pub ctx_out: bool,
}

impl Default for Context {
    fn default() -> Self {
        Context {
            data_file: DEFAULT_DATA_FILE.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            debug: 0,
            dry_run: false,
            ctx_out: false,
        }
    }
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load context from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a context from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut ctx = Self::default();

        if let Some(data_file) = lookup(ENV_DATA_FILE) {
            ctx.data_file = data_file;
        }

        if let Some(api_url) = lookup(ENV_API_URL) {
            ctx.api_url = api_url.trim_end_matches('/').to_string();
        }

        if let Some(timeout) = lookup(ENV_TIMEOUT) {
            ctx.timeout_secs = timeout
                .parse()
                .map_err(|_| anyhow::anyhow!("{} must be a number of seconds, got '{}'", ENV_TIMEOUT, timeout))?;
        }

        if let Some(debug) = lookup(ENV_DEBUG) {
            ctx.debug = debug.parse().unwrap_or(0);
        }

        // Boolean flags from environment
        ctx.dry_run = lookup(ENV_DRY_RUN).is_some();
        ctx.ctx_out = lookup(ENV_CTX_OUT).is_some();

        Ok(ctx)
    }

    /// Log filter directive matching the debug level
    pub fn log_filter(&self) -> &'static str {
        match self.debug {
            i32::MIN..=0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
