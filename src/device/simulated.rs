use tracing::info;

use super::{clamp_level, DeviceController, DeviceStatus};
use crate::error::DeviceError;
use crate::pipeline::types::DeviceCommand;

/// In-memory room used when no hardware is attached.
#[derive(Debug, Default)]
pub struct SimulatedDevice {
    status: DeviceStatus,
    commands: Vec<DeviceCommand>,
}

impl SimulatedDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(status: DeviceStatus) -> Self {
        Self {
            status,
            commands: Vec::new(),
        }
    }

    /// Every command received so far, oldest first.
    pub fn commands(&self) -> &[DeviceCommand] {
        &self.commands
    }
}

impl DeviceController for SimulatedDevice {
    fn set_light(&mut self, on: bool) -> Result<bool, DeviceError> {
        self.commands.push(DeviceCommand::SetLight(on));
        self.status.light.on = on;
        info!("Light: {}", if on { "ON" } else { "OFF" });
        Ok(self.status.light.on)
    }

    fn set_music_playing(&mut self, playing: bool) -> Result<bool, DeviceError> {
        self.commands.push(DeviceCommand::SetMusicPlaying(playing));
        self.status.music.playing = playing;
        info!(
            "Music: {} ({})",
            if playing { "PLAYING" } else { "PAUSED" },
            self.status.music.song
        );
        Ok(self.status.music.playing)
    }

    fn adjust_volume(&mut self, delta: i32) -> Result<u8, DeviceError> {
        self.commands.push(DeviceCommand::AdjustVolume(delta));
        let volume = clamp_level(self.status.music.volume as i32 + delta);
        self.status.music.volume = volume;
        info!("Volume: {}%", volume);
        Ok(volume)
    }

    fn set_fan_speed(&mut self, speed: i32) -> Result<u8, DeviceError> {
        self.commands.push(DeviceCommand::SetFanSpeed(speed));
        let speed = clamp_level(speed);
        self.status.fan.speed = speed;
        info!("Fan speed: {}%", speed);
        Ok(speed)
    }

    fn status(&self) -> DeviceStatus {
        self.status.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_is_clamped_at_both_ends() {
        let mut device = SimulatedDevice::new();
        device.status.music.volume = 95;
        assert_eq!(device.adjust_volume(10).unwrap(), 100);
        device.status.music.volume = 5;
        assert_eq!(device.adjust_volume(-10).unwrap(), 0);
    }

    #[test]
    fn fan_speed_is_clamped() {
        let mut device = SimulatedDevice::new();
        assert_eq!(device.set_fan_speed(150).unwrap(), 100);
        assert_eq!(device.set_fan_speed(-3).unwrap(), 0);
        assert_eq!(
            device.commands(),
            &[DeviceCommand::SetFanSpeed(150), DeviceCommand::SetFanSpeed(-3)]
        );
        assert_eq!(device.status().fan.speed, 0);
    }

    #[test]
    fn records_commands_in_order() {
        let mut device = SimulatedDevice::new();
        device.set_light(true).unwrap();
        device.set_music_playing(true).unwrap();
        assert_eq!(
            device.commands(),
            &[
                DeviceCommand::SetLight(true),
                DeviceCommand::SetMusicPlaying(true)
            ]
        );
        assert!(device.status().light.on);
        assert!(device.status().music.playing);
    }
}
