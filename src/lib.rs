//! Minimal server-side `websockets`: upgrade negotiation and a single-frame
//! codec over blocking I/O.
//!
//! Two independent pieces:
//! - [`upgrade`] validates an HTTP upgrade request, emits the `101` response
//!   and hijacks the raw transport stream. Runs once per connection.
//! - [`read_frame`] / [`write_frame`] move one payload at a time over any
//!   established stream, fully decoupled from the handshake.
//!
//! [`WebSocket`] ties both together for the common case.
//!
//! Deliberately out of scope: message fragmentation, ping/pong keep-alive,
//! the close status-code protocol, per-message compression and client-side
//! handshakes. A close frame from the peer surfaces as an empty payload.

#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Example
//!
//! An echo server over `std::net`:
//!
//! ```no_run
//! use std::io::Read;
//! use std::net::TcpListener;
//!
//! use wsock::{
//!     WebSocket,
//!     http::{HttpResponse, Request},
//! };
//!
//! let listener = TcpListener::bind("127.0.0.1:9001")?;
//!
//! for stream in listener.incoming() {
//!     let mut stream = stream?;
//!
//!     // Read the upgrade request. A real server would read until the
//!     // terminating CRLF CRLF arrives.
//!     let mut buf = [0u8; 4096];
//!     let len = stream.read(&mut buf)?;
//!
//!     let mut headers = [httparse::EMPTY_HEADER; 32];
//!     let mut parsed = httparse::Request::new(&mut headers);
//!     parsed.parse(&buf[..len])?;
//!
//!     let request = Request::new(parsed.headers);
//!     let mut response = HttpResponse::new(stream);
//!
//!     let mut websocket = match WebSocket::accept(&request, &mut response) {
//!         Ok(websocket) => websocket,
//!         // The rejection response, if any, has already been written.
//!         Err(_) => continue,
//!     };
//!
//!     // Echo until the peer closes.
//!     loop {
//!         let payload = websocket.read()?;
//!
//!         if payload.is_empty() {
//!             break;
//!         }
//!
//!         websocket.send(&payload)?;
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod codec;
pub use codec::{read_frame, write_frame};

pub mod error;

mod frame;

mod handshake;
pub use handshake::{accept_key, upgrade, upgrade_with};

pub mod http;

mod mask;

mod opcode;

pub mod options;

mod websocket;
pub use websocket::WebSocket;
