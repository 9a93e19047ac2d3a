use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::{
    common::Frame,
    config::Configuration,
    device::{self, DeviceStatus, SharedDevice, SimulatedDevice},
    error::AppError,
    pipeline::{
        orchestration::{FrameContext, ProcessingPipeline},
        services::{HandSelector, SharedDebouncer},
        types::Gesture,
    },
};

/// What the session looks like after the latest frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub current_gesture: Gesture,
    pub device: DeviceStatus,
    pub frames_processed: u64,
    pub actions_triggered: u64,
    pub updated_at: DateTime<Utc>,
}

/// One recognition session: a single task that takes frames one at a time.
pub struct Coordinator {
    pipeline_task: Option<tokio::task::JoinHandle<()>>,
    cancel_token: CancellationToken,
    snapshot_rx: watch::Receiver<SessionSnapshot>,
}

impl Coordinator {
    fn start(
        configuration: &Configuration,
        pipeline: ProcessingPipeline,
        device: SharedDevice,
    ) -> (Self, Sender<Frame>) {
        let cancel_token = CancellationToken::new();
        let (frame_tx, frame_rx) = mpsc::channel(configuration.frame_buffer_size);
        let (snapshot_tx, snapshot_rx) = watch::channel(SessionSnapshot {
            current_gesture: Gesture::Unknown,
            device: device::lock(&device).status(),
            frames_processed: 0,
            actions_triggered: 0,
            updated_at: Utc::now(),
        });
        let pipeline_task = Self::start_pipeline_task(
            pipeline,
            device,
            frame_rx,
            snapshot_tx,
            cancel_token.clone(),
        );
        let coordinator = Self {
            pipeline_task: Some(pipeline_task),
            cancel_token,
            snapshot_rx,
        };
        (coordinator, frame_tx)
    }

    fn start_pipeline_task(
        mut pipeline: ProcessingPipeline,
        device: SharedDevice,
        mut frame_rx: Receiver<Frame>,
        snapshot_tx: watch::Sender<SessionSnapshot>,
        cancel_token: CancellationToken,
    ) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            loop {
                let frame = tokio::select! {
                    _ = cancel_token.cancelled() => break,
                    frame = frame_rx.recv() => match frame {
                        Some(frame) => frame,
                        None => break,
                    },
                };
                let (gesture, triggered) = match pipeline.process(FrameContext::new(frame)).await {
                    Ok(context) => (Some(context.gesture), context.triggered),
                    Err(e) => {
                        tracing::error!("Pipeline error: {}", e);
                        (None, false)
                    }
                };
                let status = device::lock(&device).status();
                snapshot_tx.send_modify(|snapshot| {
                    if let Some(gesture) = gesture {
                        snapshot.current_gesture = gesture;
                    }
                    snapshot.device = status;
                    snapshot.frames_processed += 1;
                    if triggered {
                        snapshot.actions_triggered += 1;
                    }
                    snapshot.updated_at = Utc::now();
                });
            }
            tracing::info!("Recognition session stopped");
        })
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot_rx.clone()
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn stop(&self) {
        self.cancel_token.cancel();
    }

    /// Waits until the session ends: cancelled, or every frame sender dropped.
    pub async fn join(mut self) -> Result<SessionSnapshot, AppError> {
        if let Some(task) = self.pipeline_task.take() {
            task.await?;
        }
        Ok(self.snapshot())
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        self.stop();
    }
}

pub struct CoordinatorBuilder {
    configuration: Configuration,
    device: Option<SharedDevice>,
    pipeline: Option<ProcessingPipeline>,
}

impl CoordinatorBuilder {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            device: None,
            pipeline: None,
        }
    }

    // Sets the repeat cooldown, this will override the default configuration.
    pub fn cooldown_secs(mut self, cooldown_secs: f64) -> Self {
        self.configuration.cooldown_secs = cooldown_secs;
        self
    }

    // Adjusts the frame buffer size, this will override the default configuration.
    pub fn frame_buffer_size(mut self, frame_buffer_size: usize) -> Self {
        self.configuration.frame_buffer_size = frame_buffer_size;
        self
    }

    pub fn hand_selection(mut self, hand_selection: HandSelector) -> Self {
        self.configuration.hand_selection = hand_selection;
        self
    }

    // Enables metrics, this will override the default configuration.
    pub fn enable_metrics(mut self, enable_metrics: bool) -> Self {
        self.configuration.enable_metrics = enable_metrics;
        self
    }

    pub fn device(mut self, device: SharedDevice) -> Self {
        self.device = Some(device);
        self
    }

    // Replaces the standard gesture-control chain.
    pub fn pipeline(mut self, pipeline: ProcessingPipeline) -> Self {
        self.pipeline = Some(pipeline);
        self
    }

    /// Must be called inside a tokio runtime.
    pub fn build(self) -> Result<(Coordinator, Sender<Frame>), AppError> {
        self.configuration.validate()?;
        let device = self
            .device
            .unwrap_or_else(|| device::shared(SimulatedDevice::new()).1);
        let pipeline = match self.pipeline {
            Some(pipeline) => pipeline,
            None => ProcessingPipeline::gesture_control(
                self.configuration.hand_selection,
                SharedDebouncer::new(self.configuration.cooldown()?),
                device.clone(),
            ),
        }
        .enable_metrics(self.configuration.enable_metrics);
        Ok(Coordinator::start(&self.configuration, pipeline, device))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::landmark::{Landmark, LANDMARK_COUNT, THUMB_TIP};
    use crate::common::HandSkeleton;
    use crate::device::DeviceController;
    use crate::error::DeviceError;
    use crate::pipeline::DeviceCommand;
    use chrono::TimeDelta;

    fn palm() -> HandSkeleton {
        let mut points = [Landmark::new(0.5, 0.5); LANDMARK_COUNT];
        points[THUMB_TIP].x = 0.4;
        for tip in [8, 12, 16, 20] {
            points[tip].y = 0.2;
        }
        HandSkeleton::new(points)
    }

    fn fist() -> HandSkeleton {
        HandSkeleton::new([Landmark::new(0.5, 0.5); LANDMARK_COUNT])
    }

    fn at(offset_ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap() + TimeDelta::milliseconds(offset_ms)
    }

    #[tokio::test]
    async fn session_processes_frames_until_senders_drop() {
        let (sim, shared) = device::shared(SimulatedDevice::new());
        let (coordinator, frame_tx) = CoordinatorBuilder::new(Configuration::default())
            .frame_buffer_size(4)
            .enable_metrics(true)
            .device(shared)
            .build()
            .expect("Failed to build coordinator");

        for (hands, offset) in [
            (vec![palm()], 0),
            (vec![palm()], 100),
            (vec![], 150),
            (vec![fist()], 200),
        ] {
            frame_tx.send(Frame::new(hands, at(offset))).await.unwrap();
        }
        drop(frame_tx);

        let snapshot = coordinator.join().await.unwrap();
        assert_eq!(snapshot.frames_processed, 4);
        assert_eq!(snapshot.actions_triggered, 2);
        assert_eq!(snapshot.current_gesture, Gesture::Fist);
        assert!(!snapshot.device.light.on);
        assert_eq!(sim.lock().unwrap().commands().len(), 2);
    }

    #[tokio::test]
    async fn stop_ends_the_session() {
        let (coordinator, _frame_tx) = CoordinatorBuilder::new(Configuration::default())
            .build()
            .unwrap();
        coordinator.stop();
        let snapshot = coordinator.join().await.unwrap();
        assert_eq!(snapshot.frames_processed, 0);
        assert_eq!(snapshot.current_gesture, Gesture::Unknown);
    }

    #[tokio::test]
    async fn rejects_invalid_configuration() {
        let result = CoordinatorBuilder::new(Configuration::default())
            .cooldown_secs(f64::NAN)
            .build();
        assert!(matches!(result, Err(AppError::InvalidConfiguration(_))));
    }

    struct FlakyLight {
        inner: SimulatedDevice,
        failures_left: usize,
    }

    impl DeviceController for FlakyLight {
        fn set_light(&mut self, on: bool) -> Result<bool, DeviceError> {
            if self.failures_left > 0 {
                self.failures_left -= 1;
                return Err(DeviceError::Disconnected("no response".to_string()));
            }
            self.inner.set_light(on)
        }
        fn set_music_playing(&mut self, playing: bool) -> Result<bool, DeviceError> {
            self.inner.set_music_playing(playing)
        }
        fn adjust_volume(&mut self, delta: i32) -> Result<u8, DeviceError> {
            self.inner.adjust_volume(delta)
        }
        fn set_fan_speed(&mut self, speed: i32) -> Result<u8, DeviceError> {
            self.inner.set_fan_speed(speed)
        }
        fn status(&self) -> DeviceStatus {
            self.inner.status()
        }
    }

    #[tokio::test]
    async fn device_failure_is_logged_and_session_continues() {
        let (flaky, shared) = device::shared(FlakyLight {
            inner: SimulatedDevice::new(),
            failures_left: 1,
        });
        let (coordinator, frame_tx) = CoordinatorBuilder::new(Configuration::default())
            .device(shared)
            .build()
            .unwrap();

        let mut snapshots = coordinator.subscribe();
        frame_tx.send(Frame::new(vec![palm()], at(0))).await.unwrap();
        snapshots.changed().await.unwrap();
        {
            let after_failure = snapshots.borrow_and_update();
            assert_eq!(after_failure.current_gesture, Gesture::Palm);
            assert_eq!(after_failure.actions_triggered, 1);
            assert!(!after_failure.device.light.on);
        }

        // Still within the cooldown, so the failed command is not retried.
        frame_tx.send(Frame::new(vec![palm()], at(400))).await.unwrap();
        frame_tx.send(Frame::new(vec![palm()], at(900))).await.unwrap();
        drop(frame_tx);

        let snapshot = coordinator.join().await.unwrap();
        assert_eq!(snapshot.frames_processed, 3);
        assert_eq!(snapshot.actions_triggered, 2);
        assert!(snapshot.device.light.on);
        assert_eq!(
            flaky.lock().unwrap().inner.commands(),
            &[DeviceCommand::SetLight(true)]
        );
    }

    #[tokio::test]
    async fn failed_dispatch_still_reports_the_accepted_gesture() {
        let (_flaky, shared) = device::shared(FlakyLight {
            inner: SimulatedDevice::new(),
            failures_left: usize::MAX,
        });
        let (coordinator, frame_tx) = CoordinatorBuilder::new(Configuration::default())
            .device(shared)
            .build()
            .unwrap();

        frame_tx.send(Frame::new(vec![palm()], at(0))).await.unwrap();
        drop(frame_tx);

        let snapshot = coordinator.join().await.unwrap();
        assert_eq!(snapshot.frames_processed, 1);
        assert_eq!(snapshot.current_gesture, Gesture::Palm);
        assert_eq!(snapshot.actions_triggered, 1);
        assert!(!snapshot.device.light.on);
    }
}
