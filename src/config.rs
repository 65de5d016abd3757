//! Environment-derived configuration
//!
//! Tuning knobs for code generation, read once from the environment the
//! first time `get_config` is called. The mapping store itself is never
//! global; only these scalar defaults are.

use std::env;

use once_cell::sync::Lazy;
use tracing::warn;

pub const DEFAULT_CODE_MIN_LENGTH: usize = 6;
pub const DEFAULT_CODE_MAX_LENGTH: usize = 8;
pub const DEFAULT_MAX_GENERATION_ATTEMPTS: usize = 32;

#[derive(Clone, Debug)]
pub struct Config {
    /// 短码最小长度
    pub code_min_length: usize,
    /// 短码最大长度
    pub code_max_length: usize,
    /// Collision retry cap before giving up with GenerationExhausted
    pub max_generation_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            code_min_length: DEFAULT_CODE_MIN_LENGTH,
            code_max_length: DEFAULT_CODE_MAX_LENGTH,
            max_generation_attempts: DEFAULT_MAX_GENERATION_ATTEMPTS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Config {
            code_min_length: env_usize("CODE_MIN_LENGTH", DEFAULT_CODE_MIN_LENGTH),
            code_max_length: env_usize("CODE_MAX_LENGTH", DEFAULT_CODE_MAX_LENGTH),
            max_generation_attempts: env_usize(
                "MAX_GENERATION_ATTEMPTS",
                DEFAULT_MAX_GENERATION_ATTEMPTS,
            ),
        }
        .normalized()
    }

    /// Repair nonsensical values instead of refusing to start.
    fn normalized(mut self) -> Self {
        if self.code_min_length == 0 {
            warn!(
                "CODE_MIN_LENGTH must be at least 1, using {}",
                DEFAULT_CODE_MIN_LENGTH
            );
            self.code_min_length = DEFAULT_CODE_MIN_LENGTH;
        }
        if self.code_min_length > self.code_max_length {
            warn!(
                "code length range inverted ({}..{}), swapping",
                self.code_min_length, self.code_max_length
            );
            std::mem::swap(&mut self.code_min_length, &mut self.code_max_length);
        }
        if self.max_generation_attempts == 0 {
            warn!(
                "MAX_GENERATION_ATTEMPTS must be at least 1, using {}",
                DEFAULT_MAX_GENERATION_ATTEMPTS
            );
            self.max_generation_attempts = DEFAULT_MAX_GENERATION_ATTEMPTS;
        }
        self
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

/// 获取全局配置
pub fn get_config() -> &'static Config {
    &CONFIG
}
