//! The seam to the external HTTP layer.
//!
//! The negotiator consumes an already-parsed request through [`Request`] and
//! talks to the in-flight response through [`ResponseWriter`].
//! [`HttpResponse`] is a ready-made [`ResponseWriter`] over any duplex
//! stream.

use std::io::{self, Read, Write};

use httparse::Header;

/// A read-only view of an inbound upgrade request's headers.
///
/// The request stays owned by the HTTP layer; the negotiator only reads it.
#[derive(Debug)]
pub struct Request<'headers, 'buf> {
    headers: &'headers [Header<'buf>],
}

impl<'headers, 'buf> Request<'headers, 'buf> {
    /// Creates a view over already-parsed headers.
    pub const fn new(headers: &'headers [Header<'buf>]) -> Self {
        Request { headers }
    }

    /// Finds a header by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&Header<'buf>> {
        self.headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
    }

    /// Returns a header value by name.
    pub fn header_value(&self, name: &str) -> Option<&'buf [u8]> {
        self.header(name).map(|h| h.value)
    }

    /// Returns a header value by name as a string slice.
    pub fn header_value_str(&self, name: &str) -> Option<&'buf str> {
        self.header_value(name)
            .and_then(|v| core::str::from_utf8(v).ok())
    }
}

/// An in-flight HTTP response that can be hijacked into a raw stream.
///
/// Call order: [`ResponseWriter::set_header`] any number of times, then
/// [`ResponseWriter::set_status`] exactly once to send the head, then
/// optionally [`ResponseWriter::write_body`], then
/// [`ResponseWriter::hijack`]. After a successful hijack the returned stream
/// is exclusively owned by the caller and the HTTP layer must not touch it
/// again.
pub trait ResponseWriter {
    /// The transport stream released by [`ResponseWriter::hijack`].
    type Stream: Read + Write;

    /// Stages a response header.
    fn set_header(&mut self, name: &str, value: &[u8]);

    /// Writes the status line and all staged headers to the peer.
    fn set_status(&mut self, status: u16) -> io::Result<()>;

    /// Writes response body bytes to the peer.
    fn write_body(&mut self, body: &[u8]) -> io::Result<()>;

    /// Releases the underlying transport stream.
    ///
    /// Sinks that cannot give up their transport return
    /// [`io::ErrorKind::Unsupported`].
    fn hijack(&mut self) -> io::Result<Self::Stream>;
}

/// A [`ResponseWriter`] that serializes an HTTP/1.1 response head directly
/// over a duplex stream.
#[derive(Debug)]
pub struct HttpResponse<S> {
    stream: Option<S>,
    headers: Vec<(String, Vec<u8>)>,
}

impl<S: Read + Write> HttpResponse<S> {
    /// Wraps a connected stream.
    pub fn new(stream: S) -> Self {
        HttpResponse {
            stream: Some(stream),
            headers: Vec::new(),
        }
    }
}

impl<S: Read + Write> ResponseWriter for HttpResponse<S> {
    type Stream = S;

    fn set_header(&mut self, name: &str, value: &[u8]) {
        self.headers.push((name.to_owned(), value.to_vec()));
    }

    fn set_status(&mut self, status: u16) -> io::Result<()> {
        let stream = self.stream.as_mut().ok_or_else(hijacked)?;

        let mut head = Vec::with_capacity(256);

        head.extend_from_slice(b"HTTP/1.1 ");
        head.extend_from_slice(status.to_string().as_bytes());
        head.push(b' ');
        head.extend_from_slice(reason(status).as_bytes());
        head.extend_from_slice(b"\r\n");

        for (name, value) in self.headers.drain(..) {
            head.extend_from_slice(name.as_bytes());
            head.extend_from_slice(b": ");
            head.extend_from_slice(&value);
            head.extend_from_slice(b"\r\n");
        }

        head.extend_from_slice(b"\r\n");

        stream.write_all(&head)?;
        stream.flush()
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        let stream = self.stream.as_mut().ok_or_else(hijacked)?;

        stream.write_all(body)?;
        stream.flush()
    }

    fn hijack(&mut self) -> io::Result<S> {
        self.stream.take().ok_or_else(hijacked)
    }
}

fn hijacked() -> io::Error {
    io::Error::new(io::ErrorKind::NotConnected, "Connection already hijacked")
}

fn reason(status: u16) -> &'static str {
    match status {
        101 => "Switching Protocols",
        400 => "Bad Request",
        500 => "Internal Server Error",
        _ => "",
    }
}
