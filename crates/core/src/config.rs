use std::env;

use crate::diff::DiffMode;
use crate::tree::DEFAULT_MAX_DEPTH;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got `{value}`")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Validation settings, loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Deepest allowed nesting, counting the section as level 1.
    pub max_nesting_depth: usize,
    /// Stop after grammar violations instead of also running the key and
    /// depth checks.
    pub fail_fast: bool,
    /// How many structural violations to report for restricted tiers.
    pub diff_mode: DiffMode,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_DEPTH,
            fail_fast: true,
            diff_mode: DiffMode::FirstViolation,
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// - `PAGETREE_MAX_DEPTH`: positive integer, default 4
    /// - `PAGETREE_FAIL_FAST`: `true`/`false`, default `true`
    /// - `PAGETREE_DIFF_MODE`: `first`/`all`, default `first`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let max_nesting_depth = match lookup("PAGETREE_MAX_DEPTH") {
            None => defaults.max_nesting_depth,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(invalid("PAGETREE_MAX_DEPTH", "a positive integer", raw)),
            },
        };

        let fail_fast = match lookup("PAGETREE_FAIL_FAST") {
            None => defaults.fail_fast,
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => return Err(invalid("PAGETREE_FAIL_FAST", "true or false", raw)),
            },
        };

        let diff_mode = match lookup("PAGETREE_DIFF_MODE") {
            None => defaults.diff_mode,
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "first" => DiffMode::FirstViolation,
                "all" => DiffMode::AllViolations,
                _ => return Err(invalid("PAGETREE_DIFF_MODE", "`first` or `all`", raw)),
            },
        };

        Ok(Self {
            max_nesting_depth,
            fail_fast,
            diff_mode,
        })
    }
}

fn invalid(var: &'static str, expected: &'static str, value: String) -> ConfigError {
    ConfigError::Invalid {
        var,
        expected,
        value,
    }
}
