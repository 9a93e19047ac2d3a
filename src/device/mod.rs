pub mod simulated;

use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::DeviceError;

pub use simulated::SimulatedDevice;

pub const MIN_LEVEL: u8 = 0;
pub const MAX_LEVEL: u8 = 100;

/// The room devices a triggered gesture can drive.
///
/// Each call returns the state observed after the command, which the dispatch
/// guards read back through [`DeviceController::status`] on the next gesture.
pub trait DeviceController: Send {
    fn set_light(&mut self, on: bool) -> Result<bool, DeviceError>;
    fn set_music_playing(&mut self, playing: bool) -> Result<bool, DeviceError>;
    /// Moves the volume by `delta`, clamped to `0..=100`, returning the new volume.
    fn adjust_volume(&mut self, delta: i32) -> Result<u8, DeviceError>;
    fn set_fan_speed(&mut self, speed: i32) -> Result<u8, DeviceError>;
    fn status(&self) -> DeviceStatus;
}

pub type SharedDevice = Arc<Mutex<dyn DeviceController>>;

pub fn shared<D: DeviceController + 'static>(device: D) -> (Arc<Mutex<D>>, SharedDevice) {
    let concrete = Arc::new(Mutex::new(device));
    let shared: SharedDevice = concrete.clone();
    (concrete, shared)
}

// A panic while holding the lock leaves plain data behind; keep using it.
pub fn lock(device: &SharedDevice) -> MutexGuard<'_, dyn DeviceController + 'static> {
    device.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn clamp_level(value: i32) -> u8 {
    value.clamp(MIN_LEVEL as i32, MAX_LEVEL as i32) as u8
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceStatus {
    pub light: LightStatus,
    pub music: MusicStatus,
    pub fan: FanStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LightStatus {
    pub on: bool,
    pub brightness: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MusicStatus {
    pub playing: bool,
    pub volume: u8,
    pub song: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FanStatus {
    pub speed: u8,
}

impl Default for DeviceStatus {
    fn default() -> Self {
        Self {
            light: LightStatus {
                on: false,
                brightness: 50,
            },
            music: MusicStatus {
                playing: false,
                volume: 50,
                song: "Song 1".to_string(),
            },
            fan: FanStatus { speed: 0 },
        }
    }
}
