//! Runtime settings: table size, batch EXIT policy and log level.

use crate::table::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Table, TableError};
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// Name of the environment variable that selects the log level.
pub const LOG_ENV_VAR: &str = "TOY_ROBOT_LOG";

/// What an `EXIT` line does while a command file is being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchExit {
    /// `EXIT` produces no output and the remaining lines still run.
    #[default]
    Continue,
    /// `EXIT` ends the batch; later lines are never processed.
    Stop,
}

/// Runtime settings for a simulator run.
#[derive(Debug, Clone)]
pub struct Config {
    pub width: i32,
    pub height: i32,
    pub batch_exit: BatchExit,
    pub log_level: LevelFilter,
}

impl Config {
    /// Defaults, with the log level taken from [`LOG_ENV_VAR`] if it is set and valid.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(level) = lookup(LOG_ENV_VAR).as_deref().and_then(parse_level) {
            config.log_level = level;
        }
        config
    }

    pub fn with_table_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_batch_exit(mut self, batch_exit: BatchExit) -> Self {
        self.batch_exit = batch_exit;
        self
    }

    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Build the table these settings describe.
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidDimensions`] if either dimension is not positive.
    pub fn table(&self) -> Result<Table, TableError> {
        Table::new(self.width, self.height)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            batch_exit: BatchExit::default(),
            log_level: LevelFilter::WARN,
        }
    }
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(value.trim()).ok()
}
