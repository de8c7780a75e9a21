use crate::command::{self, Command};
use crate::linebuf::LineBuffer;
use crate::state::DeviceState;
use std::sync::Arc;
use thiserror::Error;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpStream,
};

const READ_CHUNK: usize = 1024;

#[derive(Debug, Error)]
pub(crate) enum ConnectionError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("stream is not valid utf-8: {0}")]
    Decode(#[from] std::str::Utf8Error),
}

/// Drives one client connection: reads bytes, reassembles lines, applies
/// commands to the shared device state and answers `PING`.
pub(crate) struct ConnectionHandler {
    socket: TcpStream,
    state: Arc<DeviceState>,
    lines: LineBuffer,
}

impl ConnectionHandler {
    /// Runs the connection to completion. Errors are logged and swallowed
    /// here so a broken client never takes anything else down with it.
    pub(crate) async fn start(socket: TcpStream, state: Arc<DeviceState>) {
        tracing::info!("connected!");
        let mut handler = Self {
            socket,
            state,
            lines: LineBuffer::new(),
        };
        if let Err(e) = handler.run().await {
            tracing::error!("connection interrupted! ({e})");
        }
        tracing::info!("disconnected!");
    }

    async fn run(&mut self) -> Result<(), ConnectionError> {
        let mut chunk = [0u8; READ_CHUNK];
        loop {
            let n = self.socket.read(&mut chunk).await?;
            if n == 0 {
                return Ok(());
            }
            self.lines.extend(&chunk[..n]);
            while let Some(line) = self.lines.next_line()? {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                tracing::debug!("rx: {line}");
                self.dispatch(command::parse(line)).await?;
            }
        }
    }

    async fn dispatch(&mut self, cmd: Command) -> Result<(), ConnectionError> {
        match cmd {
            Command::Ping => {
                self.socket.write_all(b"PONG\n").await?;
                tracing::debug!("tx: PONG");
            }
            Command::Stop => self.state.apply_motion(0, 0).await,
            // SPEED clamps to [0, 255]; the fixed-direction commands below
            // go negative. The asymmetry is intentional.
            Command::SetSpeed { left, right } => {
                self.state
                    .apply_motion(left.clamp(0, 255) as i32, right.clamp(0, 255) as i32)
                    .await
            }
            Command::Forward => self.state.apply_motion(180, 180).await,
            Command::Backward => self.state.apply_motion(-180, -180).await,
            Command::TurnLeft => self.state.apply_motion(-150, 150).await,
            Command::TurnRight => self.state.apply_motion(150, -150).await,
            Command::SetBaseSpeed { value } => {
                tracing::info!("base speed set to {value}");
            }
            Command::Unrecognized { raw } => {
                tracing::warn!("unknown command: {raw:?}");
            }
        }
        Ok(())
    }
}
