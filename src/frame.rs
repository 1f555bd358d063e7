use crate::{error::WriteError, opcode::OpCode};

/// An outbound frame header.
#[derive(Debug)]
pub struct Header {
    /// Indicates if this is the final frame in a message.
    fin: bool,
    /// The opcode of the frame.
    opcode: OpCode,
    /// The length of the payload.
    payload_len: usize,
}

impl Header {
    pub fn new(fin: bool, opcode: OpCode, payload_len: usize) -> Self {
        Self {
            fin,
            opcode,
            payload_len,
        }
    }

    /// Writes the header into the dst buffer, returning the number of bytes
    /// written.
    ///
    /// Server frames are never masked, so the mask bit stays clear. Payload
    /// lengths beyond the 16-bit extended encoding are rejected before
    /// anything reaches the wire.
    pub fn write(&self, dst: &mut [u8; 4]) -> Result<usize, WriteError> {
        dst[0] = (self.fin as u8) << 7 | (self.opcode as u8);

        let len = self.payload_len;

        if len < 126 {
            dst[1] = len as u8;

            Ok(2)
        } else if len < 65536 {
            dst[1] = 126;
            dst[2..4].copy_from_slice(&(len as u16).to_be_bytes());

            Ok(4)
        } else {
            Err(WriteError::PayloadTooLarge { len })
        }
    }
}
