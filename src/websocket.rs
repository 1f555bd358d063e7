use std::io::{Read, Write};

use crate::{
    codec,
    error::{HandshakeError, ReadError, WriteError},
    http::{Request, ResponseWriter},
    options::UpgradeOptions,
};

/// An upgraded websocket connection.
///
/// Wholly owns its stream. Reads and writes are blocking; deadlines belong to
/// the underlying transport (for example
/// [`TcpStream::set_read_timeout`](std::net::TcpStream::set_read_timeout)).
#[derive(Debug)]
pub struct WebSocket<S> {
    inner: S,
}

impl<S> WebSocket<S> {
    /// Wraps an already-upgraded stream.
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns a reference to the stream.
    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns a mutable reference to the stream.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consumes the [`WebSocket`] and returns the stream.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Read + Write> WebSocket<S> {
    /// Negotiates a websocket upgrade and wraps the released stream.
    ///
    /// See [`upgrade`](crate::upgrade) for the rejection paths.
    pub fn accept<W>(request: &Request<'_, '_>, response: &mut W) -> Result<Self, HandshakeError>
    where
        W: ResponseWriter<Stream = S>,
    {
        Self::accept_with(UpgradeOptions::default(), request, response)
    }

    /// Negotiates a websocket upgrade with extra response headers.
    pub fn accept_with<W>(
        options: UpgradeOptions<'_, '_>,
        request: &Request<'_, '_>,
        response: &mut W,
    ) -> Result<Self, HandshakeError>
    where
        W: ResponseWriter<Stream = S>,
    {
        crate::handshake::upgrade_with(options, request, response).map(Self::new)
    }

    /// Reads the next payload from the connection.
    ///
    /// An empty payload signals a close frame from the peer, meaning no more
    /// data; terminating the session is up to the caller.
    pub fn read(&mut self) -> Result<Vec<u8>, ReadError> {
        codec::read_frame(&mut self.inner)
    }

    /// Sends the payload as a single unmasked text frame.
    pub fn send(&mut self, payload: &[u8]) -> Result<(), WriteError> {
        codec::write_frame(&mut self.inner, payload)
    }
}
