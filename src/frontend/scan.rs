use std::ops::Range;

use logos::Logos;

use crate::{
    frontend::lexer::{Keyword, Token},
    util::num::parse_permissive_float,
};

/// Lexemes recognized by the generated scanner.
///
/// Anything that matches none of these is reported by logos as an error and
/// turned into [`Token::Symbol`]s by [`scan`].
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = ScanExtras)]
enum Lexeme {
    /// `def`
    #[token("def")]
    Def,
    /// `extern`
    #[token("extern")]
    Extern,
    /// Identifier tokens; `define` is longer than `def`, so it lands here.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Runs of digits and dots, including degenerate ones like `.` or `1.2.3`.
    #[regex(r"[0-9.]+", |lex| parse_permissive_float(lex.slice()))]
    Number(f64),
    /// `# Comments.`
    #[regex(r"#[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line terminators.
    #[regex(r"\r\n|\n|\r", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\x0B\x0C]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the scanner.
///
/// Tracks the current line number so every token can report where it
/// starts.
#[derive(Debug, Default)]
struct ScanExtras {
    /// The current line number in the text being scanned.
    line: usize,
}

/// A token annotated with where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Spanned {
    /// The token itself.
    pub token: Token,
    /// Byte range of the token in the scanned text.
    pub span:  Range<usize>,
    /// Line on which the token starts, starting at 1.
    pub line:  usize,
}

impl Lexeme {
    fn into_token(self) -> Token {
        match self {
            Self::Def => Token::Keyword(Keyword::Def),
            Self::Extern => Token::Keyword(Keyword::Extern),
            Self::Identifier(name) => Token::Identifier(name),
            Self::Number(value) => Token::Number(value),
            // Skipped by their callbacks; logos never yields them.
            Self::Comment | Self::NewLine | Self::Ignored => {
                unreachable!("skipped lexeme {self:?} was produced")
            },
        }
    }
}

/// Scans a whole in-memory text into span-annotated tokens.
///
/// Produces the same token sequence as
/// [`tokenize`](crate::frontend::lexer::tokenize), but with each token's
/// byte span and line attached. The last element is always
/// [`Token::EndOfInput`] with an empty span at the end of `text`.
///
/// ## Example
/// ```
/// use kaleido::frontend::{lexer::Token, scan::scan};
///
/// let tokens = scan("# header\nextern sin(x)");
///
/// assert_eq!(tokens[0].line, 2);
/// assert_eq!(tokens[0].span, 9..15);
/// assert_eq!(tokens[1].token, Token::Identifier("sin".to_string()));
/// assert_eq!(tokens.last().map(|t| &t.token), Some(&Token::EndOfInput));
/// ```
#[must_use]
pub fn scan(text: &str) -> Vec<Spanned> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer_with_extras(text, ScanExtras { line: 1 });
    // End of the last unrecognized run, so a run split inside a multi-byte
    // character is reported once.
    let mut symbols_end = 0;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let line = lexer.extras.line;

        match result {
            Ok(lexeme) => tokens.push(Spanned { token: lexeme.into_token(),
                                                span,
                                                line }),
            Err(()) if span.start < symbols_end => {},
            Err(()) => {
                for (offset, c) in text[span.start..].char_indices() {
                    let start = span.start + offset;
                    if start >= span.end {
                        break;
                    }
                    let end = start + c.len_utf8();
                    tokens.push(Spanned { token: Token::Symbol(c),
                                          span: start..end,
                                          line });
                    symbols_end = end;
                }
            },
        }
    }

    tokens.push(Spanned { token: Token::EndOfInput,
                          span:  text.len()..text.len(),
                          line:  lexer.extras.line, });
    tokens
}
