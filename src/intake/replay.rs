use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc::Sender;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::common::{Frame, HandSkeleton};
use crate::error::AppError;

/// One line of a recorded landmark stream.
#[derive(Debug, Deserialize)]
struct FrameRecord {
    #[serde(default)]
    captured_at: Option<DateTime<Utc>>,
    #[serde(default)]
    hands: Vec<HandSkeleton>,
}

impl FrameRecord {
    fn into_frame(self) -> Frame {
        Frame::new(self.hands, self.captured_at.unwrap_or_else(Utc::now))
    }
}

pub fn parse_line(line: &str, line_number: usize) -> Result<Option<Frame>, AppError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let record: FrameRecord =
        serde_json::from_str(line).map_err(|e| AppError::Decode(e, line_number))?;
    Ok(Some(record.into_frame()))
}

/// Feeds frames from a newline-delimited JSON recording into a session.
pub struct ReplaySource {
    path: PathBuf,
}

impl ReplaySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sends every frame in the file, waiting for room in the channel.
    /// Returns the number of frames sent.
    pub async fn run(
        self,
        frame_tx: Sender<Frame>,
        cancel_token: CancellationToken,
    ) -> Result<usize, AppError> {
        let source = self.path.display().to_string();
        let file = File::open(&self.path)
            .await
            .map_err(|e| AppError::SourceIo(e, source.clone()))?;
        info!("Replaying frames from {}", source);
        let sent = feed(BufReader::new(file), &source, frame_tx, cancel_token).await?;
        info!("Replay of {} finished after {} frames", source, sent);
        Ok(sent)
    }
}

pub async fn feed<R>(
    reader: BufReader<R>,
    source: &str,
    frame_tx: Sender<Frame>,
    cancel_token: CancellationToken,
) -> Result<usize, AppError>
where
    R: AsyncRead + Unpin,
{
    let mut lines = reader.lines();
    let mut line_number = 0;
    let mut sent = 0;
    loop {
        let line = tokio::select! {
            _ = cancel_token.cancelled() => {
                debug!("Replay of {} cancelled", source);
                break;
            }
            line = lines.next_line() => line.map_err(|e| AppError::SourceIo(e, source.to_string()))?,
        };
        let Some(line) = line else {
            break;
        };
        line_number += 1;
        let Some(frame) = parse_line(&line, line_number)? else {
            continue;
        };
        tokio::select! {
            biased;
            _ = cancel_token.cancelled() => {
                debug!("Replay of {} cancelled while the session was busy", source);
                break;
            }
            result = frame_tx.send(frame) => {
                if result.is_err() {
                    warn!("Session closed, stopping replay of {}", source);
                    break;
                }
            }
        }
        sent += 1;
    }
    Ok(sent)
}
