//! Pipeline stage configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Prefix of the thread name each stage runs on; the stage id is appended.
    pub thread_name_prefix: String,

    /// Optional stack size for stage threads. `None` uses the platform default.
    pub stack_size_bytes: Option<usize>,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            thread_name_prefix: "sortstream-stage".to_string(),
            stack_size_bytes: None,
        }
    }
}

impl StageConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `SORTSTREAM_THREAD_PREFIX`: stage thread name prefix
    /// - `SORTSTREAM_STACK_SIZE`: stage thread stack size in bytes
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("SORTSTREAM_THREAD_PREFIX") {
            cfg.thread_name_prefix = s;
        }

        if let Ok(s) = std::env::var("SORTSTREAM_STACK_SIZE") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.stack_size_bytes = Some(v);
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<()> {
        if self.thread_name_prefix.trim().is_empty() {
            return Err(Error::Config("thread_name_prefix must not be empty".into()));
        }
        if self.stack_size_bytes == Some(0) {
            return Err(Error::Config("stack_size_bytes must be positive".into()));
        }
        Ok(())
    }

    /// Thread name for the stage with the given id.
    pub fn thread_name(&self, stage_id: u64) -> String {
        format!("{}-{}", self.thread_name_prefix, stage_id)
    }
}
