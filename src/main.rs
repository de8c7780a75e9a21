mod command;
mod handler;
mod linebuf;
mod logging;
mod observer;
mod state;

use crate::handler::ConnectionHandler;
use crate::state::DeviceState;
use std::io;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tracing::Instrument;

const ADDR: &str = "0.0.0.0:9000";

async fn handle_client(stream: TcpStream, state: Arc<DeviceState>) {
    let span = match stream.peer_addr() {
        Ok(addr) => tracing::trace_span!("client", %addr),
        Err(_) => tracing::trace_span!("client", addr = "unknown"),
    };
    ConnectionHandler::start(stream, state).instrument(span).await;
}

async fn serve(listener: TcpListener, state: Arc<DeviceState>) -> io::Result<()> {
    loop {
        let (socket, _) = listener.accept().await?;
        tokio::spawn(handle_client(socket, state.clone()));
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    logging::set_up();

    let state = Arc::new(DeviceState::new());
    tokio::spawn(observer::run(state.clone()));

    let listener = TcpListener::bind(ADDR).await?;
    tracing::info!("listening on {ADDR}");

    serve(listener, state).await
}
