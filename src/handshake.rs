//! Upgrade negotiation.
//!
//! Runs once per connection. Validates the upgrade request, derives the
//! accept key, emits the `101` response and hands back the raw stream.

use base64::{Engine as _, engine::general_purpose};
use sha1::{Digest, Sha1};

use crate::{
    error::HandshakeError,
    http::{Request, ResponseWriter},
    options::UpgradeOptions,
};

/// The GUID every accept key is derived with, fixed by the protocol.
const WS_GUID: &[u8] = b"258EAFA5-E914-47DA-95CA-C5AB0DC85B11";

/// Derives the `Sec-WebSocket-Accept` value for a `Sec-WebSocket-Key`.
///
/// Pure and deterministic: the standard base64 encoding of the SHA-1 digest
/// of the key concatenated with the protocol GUID.
///
/// ```
/// assert_eq!(
///     wsock::accept_key(b"dGhlIHNhbXBsZSBub25jZQ=="),
///     "s3pPLMBiTxaQ9kYGzzhZRbK+xOo=",
/// );
/// ```
pub fn accept_key(key: &[u8]) -> String {
    let mut sha1 = Sha1::new();

    sha1.update(key);
    sha1.update(WS_GUID);

    general_purpose::STANDARD.encode(sha1.finalize())
}

/// Negotiates a websocket upgrade and releases the raw transport stream.
///
/// Equivalent to [`upgrade_with`] with default [`UpgradeOptions`].
pub fn upgrade<W: ResponseWriter>(
    request: &Request<'_, '_>,
    response: &mut W,
) -> Result<W::Stream, HandshakeError> {
    upgrade_with(UpgradeOptions::default(), request, response)
}

/// Negotiates a websocket upgrade with extra response headers.
///
/// On success the caller exclusively owns the returned stream; writing to
/// `response` afterwards is a protocol violation, the bytes would land on the
/// raw stream. Every rejection is terminal for this request:
///
/// - No or wrong `Upgrade` header: returns [`HandshakeError::NotWebSocket`]
///   without writing anything.
/// - Missing or empty `Sec-WebSocket-Key`: responds `400` and returns
///   [`HandshakeError::MissingKey`].
/// - The sink refuses the hijack: responds `500` and returns
///   [`HandshakeError::Hijack`].
pub fn upgrade_with<W: ResponseWriter>(
    options: UpgradeOptions<'_, '_>,
    request: &Request<'_, '_>,
    response: &mut W,
) -> Result<W::Stream, HandshakeError> {
    if !request
        .header_value_str("Upgrade")
        .is_some_and(|v| v.eq_ignore_ascii_case("websocket"))
    {
        return Err(HandshakeError::NotWebSocket);
    }

    let key = request.header_value("Sec-WebSocket-Key").unwrap_or(b"");

    if key.is_empty() {
        respond_error(response, 400, "400 Bad Request - Missing Sec-WebSocket-Key")?;

        return Err(HandshakeError::MissingKey);
    }

    let accept = accept_key(key);

    response.set_header("Upgrade", b"websocket");
    response.set_header("Connection", b"Upgrade");
    response.set_header("Sec-WebSocket-Accept", accept.as_bytes());

    for header in options.headers() {
        response.set_header(header.name, header.value);
    }

    response.set_status(101)?;

    match response.hijack() {
        Ok(stream) => Ok(stream),
        Err(err) => {
            // Best effort. The hijack failure is what gets reported.
            let _ = respond_error(
                response,
                500,
                "500 Internal Server Error: Failed to hijack connection",
            );

            Err(HandshakeError::Hijack(err))
        }
    }
}

fn respond_error<W: ResponseWriter>(
    response: &mut W,
    status: u16,
    message: &str,
) -> Result<(), HandshakeError> {
    response.set_header("Content-Type", b"text/plain; charset=utf-8");
    response.set_status(status)?;
    response.write_body(message.as_bytes())?;
    response.write_body(b"\n")?;

    Ok(())
}
