//! Frame codec over blocking I/O.
//!
//! One frame per call, no buffering layer: reads and writes go straight to
//! the stream.

use std::io::{Read, Write};

use crate::{
    error::{ReadError, WriteError},
    frame::Header,
    mask::unmask,
    opcode::OpCode,
};

/// Reads one frame from the stream and returns its unmasked payload.
///
/// A close frame yields an empty payload immediately; the rest of the close
/// body is left unread. The mask bit is authoritative: masked payloads are
/// unmasked with `mask[i % 4]`, unmasked client frames pass through
/// untouched. A zero-length payload is a valid empty payload, not an error.
///
/// Any short read surfaces the underlying I/O error. There is no
/// partial-frame recovery; the stream is desynchronized afterwards and the
/// caller is responsible for closing the connection.
pub fn read_frame<R: Read>(stream: &mut R) -> Result<Vec<u8>, ReadError> {
    let mut header = [0u8; 2];
    stream.read_exact(&mut header)?;

    if matches!(OpCode::from_bits(header[0] & 0x0F), Some(OpCode::Close)) {
        return Ok(Vec::new());
    }

    let masked = header[1] & 0x80 != 0;

    let payload_len = match header[1] & 0x7F {
        126 => {
            let mut extended = [0u8; 2];
            stream.read_exact(&mut extended)?;

            u64::from(u16::from_be_bytes(extended))
        }
        127 => {
            let mut extended = [0u8; 8];
            stream.read_exact(&mut extended)?;

            u64::from_be_bytes(extended)
        }
        length => u64::from(length),
    };

    let payload_len = usize::try_from(payload_len)
        .map_err(|_| ReadError::PayloadTooLarge { len: payload_len })?;

    let mask = if masked {
        let mut mask = [0u8; 4];
        stream.read_exact(&mut mask)?;

        Some(mask)
    } else {
        None
    };

    let mut payload = vec![0u8; payload_len];
    stream.read_exact(&mut payload)?;

    if let Some(mask) = mask {
        unmask(&mut payload, mask);
    }

    Ok(payload)
}

/// Writes the payload as a single final, unmasked text frame.
///
/// Payloads over 65535 bytes are rejected with
/// [`WriteError::PayloadTooLarge`] before any byte reaches the stream. A
/// failed write leaves the stream in an indeterminate state; no rollback is
/// attempted.
pub fn write_frame<W: Write>(stream: &mut W, payload: &[u8]) -> Result<(), WriteError> {
    let mut header = [0u8; 4];

    let header_len = Header::new(true, OpCode::Text, payload.len()).write(&mut header)?;

    stream.write_all(&header[..header_len])?;
    stream.write_all(payload)?;
    stream.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod decode {
        use std::io::Cursor;

        use super::*;

        #[test]
        fn unmasked() {
            let mut stream = Cursor::new(vec![0x81, 0x03, b'a', b'b', b'c']);

            let payload = read_frame(&mut stream).unwrap();

            assert_eq!(payload, b"abc");
        }

        #[test]
        fn masked() {
            let mask = [0x37, 0xFA, 0x21, 0x3D];

            let mut frame = vec![0x81, 0x85];
            frame.extend_from_slice(&mask);
            frame.extend(b"Hello".iter().enumerate().map(|(i, b)| b ^ mask[i & 3]));

            let payload = read_frame(&mut Cursor::new(frame)).unwrap();

            assert_eq!(payload, b"Hello");
        }

        #[test]
        fn empty_payload() {
            let mut stream = Cursor::new(vec![0x81, 0x00]);

            let payload = read_frame(&mut stream).unwrap();

            assert!(payload.is_empty());
        }

        #[test]
        fn extended_16_bit_length() {
            let mut frame = vec![0x81, 126];
            frame.extend_from_slice(&300u16.to_be_bytes());
            frame.extend(core::iter::repeat_n(0xAB, 300));

            let payload = read_frame(&mut Cursor::new(frame)).unwrap();

            assert_eq!(payload.len(), 300);
            assert!(payload.iter().all(|&b| b == 0xAB));
        }

        #[test]
        fn extended_64_bit_length() {
            let mut frame = vec![0x81, 127];
            frame.extend_from_slice(&70_000u64.to_be_bytes());
            frame.extend(core::iter::repeat_n(0xCD, 70_000));

            let payload = read_frame(&mut Cursor::new(frame)).unwrap();

            assert_eq!(payload.len(), 70_000);
            assert!(payload.iter().all(|&b| b == 0xCD));
        }

        #[test]
        fn close() {
            let mut stream = Cursor::new(vec![0x88, 0x02, 0x03, 0xE8]);

            let payload = read_frame(&mut stream).unwrap();

            assert!(payload.is_empty());
            // The close body stays unread.
            assert_eq!(stream.position(), 2);
        }

        #[test]
        fn close_ignores_second_header_byte() {
            let mut stream = Cursor::new(vec![0x88, 0xFE]);

            let payload = read_frame(&mut stream).unwrap();

            assert!(payload.is_empty());
        }

        #[test]
        fn unknown_opcode_passes_through() {
            let mut stream = Cursor::new(vec![0x83, 0x02, 0x01, 0x02]);

            let payload = read_frame(&mut stream).unwrap();

            assert_eq!(payload, [0x01, 0x02]);
        }

        #[test]
        fn short_header() {
            let error = read_frame(&mut Cursor::new(vec![0x81])).unwrap_err();

            assert!(matches!(error, ReadError::Io(_)));
        }

        #[test]
        fn short_payload() {
            let error = read_frame(&mut Cursor::new(vec![0x81, 0x05, b'a'])).unwrap_err();

            assert!(matches!(error, ReadError::Io(_)));
        }

        #[test]
        fn short_mask_key() {
            let error = read_frame(&mut Cursor::new(vec![0x81, 0x85, 0x01, 0x02])).unwrap_err();

            assert!(matches!(error, ReadError::Io(_)));
        }
    }

    mod encode {
        use super::*;

        #[test]
        fn inline_length() {
            let mut stream = Vec::new();

            write_frame(&mut stream, b"abc").unwrap();

            assert_eq!(stream, [0x81, 0x03, b'a', b'b', b'c']);
        }

        #[test]
        fn extended_16_bit_length() {
            let payload = [0x5A; 300];

            let mut stream = Vec::new();

            write_frame(&mut stream, &payload).unwrap();

            assert_eq!(stream[..4], [0x81, 126, 0x01, 0x2C]);
            assert_eq!(stream[4..], payload);
        }

        #[test]
        fn empty_payload() {
            let mut stream = Vec::new();

            write_frame(&mut stream, b"").unwrap();

            assert_eq!(stream, [0x81, 0x00]);
        }

        #[test]
        fn payload_too_large_writes_nothing() {
            let payload = vec![0u8; 65536];

            let mut stream = Vec::new();

            let error = write_frame(&mut stream, &payload).unwrap_err();

            assert!(matches!(error, WriteError::PayloadTooLarge { len: 65536 }));
            assert!(stream.is_empty());
        }
    }
}
