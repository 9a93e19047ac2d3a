use gesture_room::config::Configuration;
use gesture_room::coordinator::CoordinatorBuilder;
use gesture_room::device::{self, SimulatedDevice};
use gesture_room::error::AppError;
use gesture_room::intake::ReplaySource;
use std::path::PathBuf;
use tracing::{error, info, Level};

fn init_logging(level: Level) {
    tracing_subscriber::fmt().with_max_level(level).init();
}

fn print_gesture_table() {
    info!("Gestures:");
    info!("  FIST        -> Light OFF");
    info!("  PALM        -> Light ON");
    info!("  ONE_FINGER  -> Play Music");
    info!("  PEACE       -> Pause Music");
    info!("  THUMBS_UP   -> Volume UP");
    info!("  THUMBS_DOWN -> Volume DOWN");
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let replay_arg = args.next().map(PathBuf::from);

    let configuration = Configuration::load(config_path.as_deref())?;
    init_logging(configuration.max_log_level()?);
    print_gesture_table();

    let replay_path = replay_arg
        .or_else(|| configuration.replay_path.clone())
        .ok_or_else(|| {
            AppError::InvalidConfiguration(
                "no frame recording given (argument or replay_path)".to_string(),
            )
        })?;

    let (_, device) = device::shared(SimulatedDevice::new());
    let (coordinator, frame_tx) = CoordinatorBuilder::new(configuration).device(device).build()?;
    let cancel_token = coordinator.cancel_token();

    let replay = tokio::spawn(ReplaySource::new(replay_path).run(frame_tx, cancel_token.clone()));
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutting down...");
            cancel_token.cancel();
        }
    });

    if let Err(e) = replay.await? {
        error!("Replay failed: {}", e);
        coordinator.stop();
    }
    let snapshot = coordinator.join().await?;
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => info!("Final status:\n{}", json),
        Err(e) => error!("Failed to serialize final status: {}", e),
    }
    Ok(())
}
