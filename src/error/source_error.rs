use std::io;

#[derive(Debug)]
/// Represents all reasons a character source can stop before its real end.
///
/// A failing source reports end of input to the lexer at the point of
/// failure; the error itself is kept by the source for the caller to inspect.
pub enum SourceError {
    /// The underlying reader returned an I/O error.
    Io {
        /// The error reported by the reader.
        error:  io::Error,
        /// Byte offset at which the read was attempted.
        offset: usize,
    },
    /// The bytes read do not form valid UTF-8.
    InvalidUtf8 {
        /// The bytes of the malformed sequence read so far.
        bytes:  Vec<u8>,
        /// Byte offset of the first byte of the sequence.
        offset: usize,
    },
}

impl SourceError {
    /// Gets the byte offset at which the source failed.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Io { offset, .. } | Self::InvalidUtf8 { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { error, offset } => {
                write!(f, "Error at byte {offset}: Failed to read input: {error}.")
            },

            Self::InvalidUtf8 { bytes, offset } => {
                write!(f, "Error at byte {offset}: Input is not valid UTF-8: {bytes:02x?}.")
            },
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { error, .. } => Some(error),
            Self::InvalidUtf8 { .. } => None,
        }
    }
}
