//! HTTP protocol implementation.
//!
//! This module implements a minimal HTTP/1.1 server side: one request per
//! connection, then close. No keep-alive, no pipelining, no chunked bodies.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler implementing the request-response state machine
//! - **`parser`**: Parses incoming HTTP requests from byte buffers
//! - **`request`**: HTTP request representation and parsing utilities
//! - **`response`**: HTTP response representation with builder pattern
//! - **`router`**: Exact-match dispatch of (method, path) to the device facade
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for incoming request data
//!        └──────┬──────┘
//!               │ Request received (parse failure / timeout → Writing a 400)
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← Route to the device facade
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─→ Closed (always; connections are single-use)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use devsim::config::Config;
//! use devsim::device::DeviceFacade;
//! use devsim::http::connection::Connection;
//! use devsim::http::router::Router;
//! use std::sync::Arc;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Config::load();
//!     let listener = TcpListener::bind(&cfg.listen_addr).await?;
//!     let router = Arc::new(Router::new(DeviceFacade::new(cfg.device.clone())));
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let router = router.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, router);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod router;
pub mod writer;
