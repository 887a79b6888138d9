/// Character source errors.
///
/// Lexing itself never fails, but the characters it consumes may come from a
/// reader that can. These errors describe why such a source stopped early.
pub mod source_error;

pub use source_error::SourceError;
