use serde::Serialize;
use std::fmt;

use super::gesture::Gesture;
use crate::device::DeviceStatus;

/// A single imperative call on the device-control collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "command", content = "value", rename_all = "snake_case")]
pub enum DeviceCommand {
    SetLight(bool),
    SetMusicPlaying(bool),
    AdjustVolume(i32),
    /// Not bound to any gesture.
    SetFanSpeed(i32),
}

impl fmt::Display for DeviceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetLight(true) => f.write_str("LIGHT_ON"),
            Self::SetLight(false) => f.write_str("LIGHT_OFF"),
            Self::SetMusicPlaying(true) => f.write_str("MUSIC_PLAY"),
            Self::SetMusicPlaying(false) => f.write_str("MUSIC_STOP"),
            Self::AdjustVolume(delta) => write!(f, "VOLUME:{:+}", delta),
            Self::SetFanSpeed(speed) => write!(f, "FAN:{}", speed),
        }
    }
}

/// Why a triggered gesture resulted in no device call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MusicAlreadyPlaying,
    MusicAlreadyStopped,
    NoAction,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MusicAlreadyPlaying => f.write_str("music already playing"),
            Self::MusicAlreadyStopped => f.write_str("music already stopped"),
            Self::NoAction => f.write_str("no action for gesture"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DispatchOutcome {
    Issued {
        gesture: Gesture,
        command: DeviceCommand,
        status: DeviceStatus,
    },
    Skipped {
        gesture: Gesture,
        reason: SkipReason,
    },
}

impl DispatchOutcome {
    pub fn command(&self) -> Option<DeviceCommand> {
        match self {
            Self::Issued { command, .. } => Some(*command),
            Self::Skipped { .. } => None,
        }
    }
}
