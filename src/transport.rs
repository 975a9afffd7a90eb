//! # Transport containers
//!
//! A transport container is an ordered byte sequence used to carry encoded
//! interchange values across a process/IPC or persistence boundary. The
//! container side of the contract is deliberately narrow: a writer appends
//! textual tokens, a reader consumes them in the same order. Everything else
//! (how the bytes travel, where they are persisted) belongs to the host.
//!
//! The [`Parcel`] type in this module is the reference container. Each token
//! is framed on the wire as:
//!
//! # Format Layout
//! - 0x00: Token byte length (4 bytes, little-endian)
//! - 0x04: Token bytes (UTF-8, no terminator)
//!
//! Frames are densely packed; a container holding N tokens is N frames
//! back to back.

use std::io::Cursor;

use binrw::prelude::*;

use crate::error::Error;

/// Write half of the transport container capability.
///
/// An implementation owns the destination of the bytes; callers hold
/// exclusive access for the duration of a call.
pub trait TokenSink {
    /// Append one token to the container.
    fn append_token(&mut self, token: &str) -> Result<(), Error>;
}

/// Read half of the transport container capability.
pub trait TokenSource {
    /// Consume the next token from the container.
    ///
    /// Fails with [`Error::Transport`] if the container is exhausted or the
    /// frame is truncated, and [`Error::MalformedToken`] if the token bytes
    /// are not valid UTF-8.
    fn read_token(&mut self) -> Result<String, Error>;
}

#[binrw]
#[brw(little)]
struct TokenFrame {
    len: u32,
    #[br(count = len)]
    bytes: Vec<u8>,
}

/// An in-memory transport container backed by a byte buffer.
///
/// A `Parcel` is written front to back with [`TokenSink::append_token`] and
/// read in the same order with [`TokenSource::read_token`]. The read/write
/// position is shared, so a freshly written parcel must be [`rewound`]
/// (or shipped as bytes and reconstructed with [`Parcel::from_bytes`])
/// before decoding.
///
/// [`rewound`]: Parcel::rewind
pub struct Parcel {
    cursor: Cursor<Vec<u8>>,
}

impl Parcel {
    /// Create an empty parcel, positioned for writing.
    pub fn new() -> Self {
        Self {
            cursor: Cursor::new(Vec::new()),
        }
    }

    /// Wrap bytes received from the other side of the boundary,
    /// positioned for reading from the first frame.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            cursor: Cursor::new(bytes),
        }
    }

    /// Consume the parcel, yielding the raw bytes to hand to the transport.
    pub fn into_bytes(self) -> Vec<u8> {
        self.cursor.into_inner()
    }

    /// Borrow the underlying bytes without consuming the parcel.
    pub fn as_bytes(&self) -> &[u8] {
        self.cursor.get_ref()
    }

    /// Reset the position to the first frame.
    pub fn rewind(&mut self) {
        self.cursor.set_position(0);
    }

    /// Total size of the container in bytes, framing included.
    pub fn len(&self) -> usize {
        self.cursor.get_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.get_ref().is_empty()
    }
}

impl Default for Parcel {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenSink for Parcel {
    fn append_token(&mut self, token: &str) -> Result<(), Error> {
        let frame = TokenFrame {
            len: token.len() as u32,
            bytes: token.as_bytes().to_vec(),
        };
        self.cursor.write_le(&frame)?;
        Ok(())
    }
}

impl TokenSource for Parcel {
    fn read_token(&mut self) -> Result<String, Error> {
        let frame: TokenFrame = self.cursor.read_le()?;
        String::from_utf8(frame.bytes).map_err(|e| Error::MalformedToken(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_come_back_in_order() {
        let mut parcel = Parcel::new();
        parcel.append_token("FIRST").unwrap();
        parcel.append_token("SECOND").unwrap();
        parcel.append_token("THIRD").unwrap();

        let mut parcel = Parcel::from_bytes(parcel.into_bytes());
        assert_eq!(parcel.read_token().unwrap(), "FIRST");
        assert_eq!(parcel.read_token().unwrap(), "SECOND");
        assert_eq!(parcel.read_token().unwrap(), "THIRD");
    }

    #[test]
    fn rewind_allows_rereading() {
        let mut parcel = Parcel::new();
        parcel.append_token("ONCE").unwrap();

        parcel.rewind();
        assert_eq!(parcel.read_token().unwrap(), "ONCE");
        parcel.rewind();
        assert_eq!(parcel.read_token().unwrap(), "ONCE");
    }

    #[test]
    fn exhausted_parcel_is_a_transport_error() {
        let mut parcel = Parcel::from_bytes(Vec::new());
        let err = parcel.read_token().unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[test]
    fn truncated_frame_is_a_transport_error() {
        // Length claims 16 bytes, only 3 present
        let mut bytes = 16u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(b"abc");

        let mut parcel = Parcel::from_bytes(bytes);
        let err = parcel.read_token().unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[test]
    fn non_utf8_token_is_rejected() {
        let mut bytes = 2u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[0xFF, 0xFE]);

        let mut parcel = Parcel::from_bytes(bytes);
        let err = parcel.read_token().unwrap_err();
        assert!(matches!(err, Error::MalformedToken(_)));
    }

    #[test]
    fn frame_layout_is_length_prefixed() {
        let mut parcel = Parcel::new();
        parcel.append_token("AB").unwrap();

        assert_eq!(parcel.len(), 6);
        assert_eq!(parcel.as_bytes(), &[0x02, 0x00, 0x00, 0x00, b'A', b'B']);
    }
}
