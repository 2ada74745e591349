use bytes::{Buf, BytesMut};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::http::parser::{ParseError, parse_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::router::Router;
use crate::http::writer::ResponseWriter;

/// Deadline for each socket read while a request is incomplete.
const READ_TIMEOUT: Duration = Duration::from_secs(10);
/// Deadline for writing the full response.
const WRITE_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a request could not be read off the connection. Either way the
/// client gets a 400 and the connection is closed.
#[derive(Debug)]
pub enum ConnectionError {
    Parse(ParseError),
    Timeout,
}

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionError::Parse(e) => write!(f, "Malformed request ({:?})", e),
            ConnectionError::Timeout => write!(f, "Timed out waiting for request"),
        }
    }
}

enum ReadState {
    /// A complete request was parsed.
    Complete(Request),
    /// The request is unusable; respond 400.
    Failed(ConnectionError),
    /// The peer closed before sending anything.
    Eof,
}

pub struct Connection {
    stream: TcpStream,
    router: Arc<Router>,
    buffer: BytesMut,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Dispatching(Request),
    Writing(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, router: Arc<Router>) -> Self {
        Self {
            stream,
            router,
            buffer: BytesMut::with_capacity(4096),
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        ReadState::Complete(req) => {
                            self.state = ConnectionState::Dispatching(req);
                        }
                        ReadState::Failed(err) => {
                            tracing::warn!(error = %err, "Rejecting request");
                            let response = Response::bad_request(&err.to_string());
                            self.state =
                                ConnectionState::Writing(ResponseWriter::new(&response));
                        }
                        ReadState::Eof => {
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Dispatching(req) => {
                    let response = self.router.dispatch(req);

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    timeout(WRITE_TIMEOUT, writer.write_to_stream(&mut self.stream))
                        .await
                        .map_err(|_| anyhow::anyhow!("response write timed out"))??;

                    // One response per connection, then close
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<ReadState> {
        loop {
            // Try parsing whatever we already have
            match parse_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.advance(consumed);
                    return Ok(ReadState::Complete(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    return Ok(ReadState::Failed(ConnectionError::Parse(e)));
                }
            }

            // Read more data, bounded by the per-read deadline
            let n = match timeout(READ_TIMEOUT, self.stream.read_buf(&mut self.buffer)).await {
                Ok(read) => read?,
                Err(_) => return Ok(ReadState::Failed(ConnectionError::Timeout)),
            };

            if n == 0 {
                // Peer closed; a partially received request is an error,
                // never silently truncated
                return if self.buffer.is_empty() {
                    Ok(ReadState::Eof)
                } else {
                    Ok(ReadState::Failed(ConnectionError::Parse(ParseError::Incomplete)))
                };
            }
        }
    }
}
