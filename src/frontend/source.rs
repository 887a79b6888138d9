use std::io::{self, Read};

use crate::error::SourceError;

/// An ordered source of characters with an explicit end of input.
///
/// The lexer pulls one character at a time and never pushes anything back, so
/// a source only has to hand out characters in order. Once `next_char` has
/// returned `None` it is not called again by the lexer.
pub trait CharSource {
    /// Returns the next character, or `None` at end of input.
    fn next_char(&mut self) -> Option<char>;
}

/// Any character iterator is a source, e.g. `"def f(x) x".chars()`.
impl<I> CharSource for I where I: Iterator<Item = char>
{
    fn next_char(&mut self) -> Option<char> {
        self.next()
    }
}

/// A character source decoding UTF-8 from an [`io::Read`].
///
/// Bytes are requested one at a time and only as many as the next character
/// needs, so input typed interactively is tokenized as soon as it arrives.
/// Wrap unbuffered readers (files, sockets) in a [`io::BufReader`].
///
/// When the reader fails or yields malformed UTF-8, the source reports end of
/// input from then on and keeps the [`SourceError`] for
/// [`take_error`](Self::take_error).
///
/// ## Example
/// ```
/// use kaleido::frontend::source::{CharSource, ReaderSource};
///
/// let mut source = ReaderSource::new("λx".as_bytes());
///
/// assert_eq!(source.next_char(), Some('λ'));
/// assert_eq!(source.next_char(), Some('x'));
/// assert_eq!(source.next_char(), None);
/// assert!(source.take_error().is_none());
/// ```
pub struct ReaderSource<R> {
    reader:   R,
    offset:   usize,
    error:    Option<SourceError>,
    finished: bool,
}

impl<R: Read> ReaderSource<R> {
    /// Creates a source reading from `reader`.
    pub const fn new(reader: R) -> Self {
        Self { reader,
               offset: 0,
               error: None,
               finished: false }
    }

    /// Number of bytes consumed from the reader so far.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the error that ended this source early, if any.
    ///
    /// A source that simply ran out of input has no error.
    pub fn take_error(&mut self) -> Option<SourceError> {
        self.error.take()
    }

    /// Reads a single byte, retrying on interruption.
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.offset += 1;
                    return Ok(Some(byte[0]));
                },
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {},
                Err(e) => return Err(e),
            }
        }
    }

    fn fail(&mut self, error: SourceError) -> Option<char> {
        log::debug!("character source stopped: {error}");
        self.error = Some(error);
        self.finished = true;
        None
    }

    fn decode(&mut self) -> Result<Option<char>, SourceError> {
        let start = self.offset;
        let io_error = |error, offset| SourceError::Io { error, offset };

        let Some(first) = self.read_byte().map_err(|e| io_error(e, start))?
        else {
            return Ok(None);
        };

        let width = match first {
            0x00..=0x7f => return Ok(Some(char::from(first))),
            0xc0..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf7 => 4,
            _ => {
                return Err(SourceError::InvalidUtf8 { bytes:  vec![first],
                                                      offset: start, });
            },
        };

        let mut buf = [first, 0, 0, 0];
        for i in 1..width {
            let offset = self.offset;
            match self.read_byte().map_err(|e| io_error(e, offset))? {
                Some(byte) => buf[i] = byte,
                None => {
                    return Err(SourceError::InvalidUtf8 { bytes:  buf[..i].to_vec(),
                                                          offset: start, });
                },
            }
        }

        match std::str::from_utf8(&buf[..width]).map(|s| s.chars().next()) {
            Ok(Some(c)) => Ok(Some(c)),
            _ => Err(SourceError::InvalidUtf8 { bytes:  buf[..width].to_vec(),
                                                offset: start, }),
        }
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> Option<char> {
        if self.finished {
            return None;
        }
        match self.decode() {
            Ok(Some(c)) => Some(c),
            Ok(None) => {
                self.finished = true;
                None
            },
            Err(e) => self.fail(e),
        }
    }
}
