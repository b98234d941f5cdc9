//! Codec configuration options

use std::env;

/// Environment toggle that opts into the experimental codec variant for
/// interpreter versions whose encoding rules are not finalized yet.
pub const EXPERIMENTAL_ENV_VAR: &str = "BYTECODE_CODEC_EXPERIMENTAL";

/// Configuration options for codec selection.
///
/// The factory takes this value explicitly instead of reading the process
/// environment itself, so selection stays deterministic under test. Callers
/// that want the environment toggle read it once at startup via
/// [`CodecConfig::from_env`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CodecConfig {
    pub experimental: bool,
}

impl CodecConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Opt into the experimental variant for not-yet-finalized versions
    pub fn with_experimental(mut self, experimental: bool) -> Self {
        self.experimental = experimental;
        self
    }

    /// Build a configuration from the process environment. Absent or
    /// non-affirmative values select the stable variant.
    pub fn from_env() -> Self {
        let experimental = env::var(EXPERIMENTAL_ENV_VAR)
            .map(|value| is_affirmative(&value))
            .unwrap_or(false);
        Self { experimental }
    }
}

fn is_affirmative(value: &str) -> bool {
    matches!(value.trim(), "1" | "true" | "TRUE" | "True")
}
