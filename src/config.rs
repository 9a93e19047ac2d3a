use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::Level;

use crate::error::AppError;
use crate::pipeline::services::HandSelector;

pub const ENV_PREFIX: &str = "GESTURE_ROOM";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Minimum seconds between two triggers of the same gesture.
    pub cooldown_secs: f64,
    pub frame_buffer_size: usize,
    pub hand_selection: HandSelector,
    pub log_level: String,
    pub replay_path: Option<PathBuf>,
    pub enable_metrics: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            cooldown_secs: 0.8,
            frame_buffer_size: 60,
            hand_selection: HandSelector::Largest,
            log_level: "info".to_string(),
            replay_path: None,
            enable_metrics: false,
        }
    }
}

impl Configuration {
    /// Defaults, then the optional file, then `GESTURE_ROOM_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        Self::load_with_env_prefix(path, ENV_PREFIX)
    }

    fn load_with_env_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self, AppError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        let configuration: Configuration = builder
            .add_source(Environment::with_prefix(env_prefix))
            .build()?
            .try_deserialize()?;
        configuration.validate()?;
        Ok(configuration)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.cooldown()?;
        if self.frame_buffer_size == 0 {
            return Err(AppError::InvalidConfiguration(
                "frame_buffer_size must be greater than 0".to_string(),
            ));
        }
        self.max_log_level()?;
        Ok(())
    }

    pub fn cooldown(&self) -> Result<Duration, AppError> {
        Duration::try_from_secs_f64(self.cooldown_secs).map_err(|_| {
            AppError::InvalidConfiguration(format!(
                "cooldown_secs must be a non-negative number of seconds, got {}",
                self.cooldown_secs
            ))
        })
    }

    pub fn max_log_level(&self) -> Result<Level, AppError> {
        self.log_level.parse::<Level>().map_err(|_| {
            AppError::InvalidConfiguration(format!("unknown log level '{}'", self.log_level))
        })
    }
}
