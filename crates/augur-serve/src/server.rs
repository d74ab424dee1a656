//! TCP accept loop.

use std::sync::Arc;

use augur_container::{Container, HandlerRef};
use augur_http::{Communicable, Response};
use augur_router::Router;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info, warn};

use crate::capture::capture;
use crate::dispatch::dispatch;
use crate::error::Result;

/// A TCP server dispatching each connection through the router.
///
/// One request is read per connection (the head up to the blank line, then
/// as many body bytes as `Content-Length` announces), captured, dispatched,
/// answered and closed. The router is immutable once the
/// server starts; the container's caches are internally synchronized.
pub struct Server {
    router: Arc<Router<HandlerRef>>,
    container: Container,
}

impl Server {
    /// Creates a server from a bootstrapped router and container.
    pub fn new(router: Router<HandlerRef>, container: Container) -> Self {
        Self {
            router: Arc::new(router),
            container,
        }
    }

    /// Binds the address and serves until the process stops.
    pub async fn listen(self, addr: &str) -> Result<()> {
        let listener = TcpListener::bind(addr).await?;
        self.serve_on(listener).await
    }

    /// Serves connections accepted from an already-bound listener.
    pub async fn serve_on(self, listener: TcpListener) -> Result<()> {
        info!("listening on {}", listener.local_addr()?);

        loop {
            let (stream, peer) = listener.accept().await?;
            let router = Arc::clone(&self.router);
            let container = self.container.clone();

            tokio::spawn(async move {
                if let Err(err) = handle_connection(&router, &container, stream).await {
                    error!(%peer, "connection failed: {err}");
                }
            });
        }
    }
}

async fn handle_connection(
    router: &Router<HandlerRef>,
    container: &Container,
    mut stream: TcpStream,
) -> Result<()> {
    let raw = read_request(&mut stream).await?;

    let mut wire = Vec::new();
    match capture(&raw) {
        Ok(request) => dispatch(router, container, request, &mut wire).await?,
        Err(err) => {
            warn!("capture failed: {err}");
            Response::bad_request().send(&mut wire)?;
        }
    }

    stream.write_all(&wire).await?;
    stream.shutdown().await?;
    Ok(())
}

/// Reads one request: the head up to the blank line, then the body length
/// the `Content-Length` header announces.
async fn read_request(stream: &mut TcpStream) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    let head_len = loop {
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            // Peer closed early; capture works with what arrived.
            break buffer.len();
        }
        buffer.extend_from_slice(&chunk[..read]);
        if let Some(position) = head_end(&buffer) {
            break position;
        }
    };

    let expected = head_len + content_length(&buffer[..head_len]);
    while buffer.len() < expected {
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..read]);
    }

    Ok(buffer)
}

fn head_end(buffer: &[u8]) -> Option<usize> {
    buffer
        .windows(4)
        .position(|window| window == b"\r\n\r\n")
        .map(|position| position + 4)
}

fn content_length(head: &[u8]) -> usize {
    let Ok(head) = std::str::from_utf8(head) else {
        return 0;
    };
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}
