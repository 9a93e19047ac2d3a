use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] SkeletonError),
    #[error("Device Error: {0}")]
    Device(#[from] DeviceError),
    #[error("Failed to load configuration: {0}")]
    Configuration(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Failed to read frame source {1}: {0}")]
    SourceIo(std::io::Error, String),
    #[error("Failed to decode frame record on line {1}: {0}")]
    Decode(serde_json::Error, usize),
    #[error("Session task failed: {0}")]
    Session(#[from] tokio::task::JoinError),
}

// Device-control collaborator errors, surfaced to the caller of the dispatch step.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    #[error("Device is disconnected: {0}")]
    Disconnected(String),
    #[error("Device rejected command {command}: {reason}")]
    Rejected { command: String, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkeletonError {
    #[error("hand skeleton needs exactly {expected} landmarks, got {actual}")]
    LandmarkCount { expected: usize, actual: usize },
}
