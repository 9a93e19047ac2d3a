use crate::device::{self, DeviceController, DeviceStatus, SharedDevice};
use crate::error::{AppError, DeviceError};
use crate::pipeline::types::{DeviceCommand, DispatchOutcome, Gesture, SkipReason};
use futures::future::{self, BoxFuture, FutureExt};
use std::task::{Context, Poll};
use tower::Service;
use tracing::info;

pub const VOLUME_STEP: i32 = 10;

/// Gesture to device command lookup. Music guards read the current status so a
/// repeated play or stop never reaches the device; light commands always do.
pub fn action_for(gesture: Gesture, status: &DeviceStatus) -> Result<DeviceCommand, SkipReason> {
    match gesture {
        Gesture::Fist => Ok(DeviceCommand::SetLight(false)),
        Gesture::Palm => Ok(DeviceCommand::SetLight(true)),
        Gesture::OneFinger if status.music.playing => Err(SkipReason::MusicAlreadyPlaying),
        Gesture::OneFinger => Ok(DeviceCommand::SetMusicPlaying(true)),
        Gesture::Peace if !status.music.playing => Err(SkipReason::MusicAlreadyStopped),
        Gesture::Peace => Ok(DeviceCommand::SetMusicPlaying(false)),
        Gesture::ThumbsUp => Ok(DeviceCommand::AdjustVolume(VOLUME_STEP)),
        Gesture::ThumbsDown => Ok(DeviceCommand::AdjustVolume(-VOLUME_STEP)),
        Gesture::Unknown => Err(SkipReason::NoAction),
    }
}

pub fn apply(command: DeviceCommand, device: &mut dyn DeviceController) -> Result<(), DeviceError> {
    match command {
        DeviceCommand::SetLight(on) => device.set_light(on).map(|_| ()),
        DeviceCommand::SetMusicPlaying(playing) => device.set_music_playing(playing).map(|_| ()),
        DeviceCommand::AdjustVolume(delta) => device.adjust_volume(delta).map(|_| ()),
        DeviceCommand::SetFanSpeed(speed) => device.set_fan_speed(speed).map(|_| ()),
    }
}

/// Turns a triggered gesture into at most one device call.
#[derive(Clone)]
pub struct ActionService {
    device: SharedDevice,
}

impl ActionService {
    pub fn new(device: SharedDevice) -> Self {
        Self { device }
    }

    pub fn dispatch(&self, gesture: Gesture) -> Result<DispatchOutcome, AppError> {
        let mut device = device::lock(&self.device);
        match action_for(gesture, &device.status()) {
            Ok(command) => {
                apply(command, &mut *device)?;
                info!("Gesture {} issued {}", gesture, command);
                Ok(DispatchOutcome::Issued {
                    gesture,
                    command,
                    status: device.status(),
                })
            }
            Err(reason) => {
                info!("Gesture {} skipped: {}", gesture, reason);
                Ok(DispatchOutcome::Skipped { gesture, reason })
            }
        }
    }
}

impl Service<Gesture> for ActionService {
    type Response = DispatchOutcome;
    type Error = AppError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Gesture) -> Self::Future {
        // The device call is blocking and finishes before the future is returned.
        let outcome = self.dispatch(request);
        future::ready(outcome).boxed()
    }
}
