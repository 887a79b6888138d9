/// The lexer module tokenizes a character stream for the parser.
///
/// The lexer pulls characters one at a time from a [`source::CharSource`] and
/// produces tokens: identifiers, the `def` and `extern` keywords, numbers and
/// single-character symbols. Comments and whitespace are skipped.
///
/// # Responsibilities
/// - Classifies characters and groups them into tokens.
/// - Keeps the single lookahead character between calls.
/// - Tracks the line and column of each token.
pub mod lexer;
/// A generated scanner for text that is already in memory.
///
/// Built with `logos`, it yields the same tokens as the streaming lexer and
/// attaches byte spans and line numbers to them, which is what diagnostics
/// over a whole file need.
pub mod scan;
/// Character sources the lexer can read from.
///
/// Any `char` iterator is a source; [`source::ReaderSource`] decodes UTF-8
/// from an [`std::io::Read`] lazily, so standard input can be tokenized while
/// it is being typed.
pub mod source;
