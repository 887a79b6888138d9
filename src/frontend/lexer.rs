use std::{
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
};

use ordered_float::OrderedFloat;

use crate::{frontend::source::CharSource, util::num::parse_permissive_float};

/// A reserved word. Matching is case-sensitive and only whole identifiers
/// count, so `define` is an ordinary identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `def`
    Def,
    /// `extern`
    Extern,
}

impl Keyword {
    /// Looks up the keyword spelled exactly as `word`.
    ///
    /// ## Example
    /// ```
    /// use kaleido::frontend::lexer::Keyword;
    ///
    /// assert_eq!(Keyword::from_word("def"), Some(Keyword::Def));
    /// assert_eq!(Keyword::from_word("define"), None);
    /// assert_eq!(Keyword::from_word("Extern"), None);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "def" => Some(Self::Def),
            "extern" => Some(Self::Extern),
            _ => None,
        }
    }

    /// The reserved word as written in source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Def => "def",
            Self::Extern => "extern",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a lexical token in the source input.
///
/// A token is the smallest meaningful unit of text the lexer produces. Any
/// character that does not start one of the other kinds is passed through as
/// a [`Token::Symbol`]; deciding whether it is valid is up to the parser.
///
/// Numbers compare and hash by total order (`ordered_float`), so token
/// sequences can be compared with `==` and stored in hashed collections.
#[derive(Debug, Clone)]
pub enum Token {
    /// No more characters remain.
    EndOfInput,
    /// One of the reserved words.
    Keyword(Keyword),
    /// Identifier tokens such as `x` or `fib2`: a letter followed by letters
    /// and digits.
    Identifier(String),
    /// Numeric literal tokens such as `42`, `3.14` or `.5`.
    Number(f64),
    /// Any other single character, such as `+` or `(`.
    Symbol(char),
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::EndOfInput, Self::EndOfInput) => true,
            (Self::Keyword(a), Self::Keyword(b)) => a == b,
            (Self::Identifier(a), Self::Identifier(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => OrderedFloat(*a) == OrderedFloat(*b),
            (Self::Symbol(a), Self::Symbol(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::EndOfInput => {},
            Self::Keyword(keyword) => keyword.hash(state),
            Self::Identifier(name) => name.hash(state),
            Self::Number(value) => OrderedFloat(*value).hash(state),
            Self::Symbol(c) => c.hash(state),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfInput => write!(f, "end of input"),
            Self::Keyword(keyword) => write!(f, "keyword {keyword}"),
            Self::Identifier(name) => write!(f, "identifier {name}"),
            Self::Number(value) => write!(f, "number {value:?}"),
            Self::Symbol(c) => write!(f, "symbol {c:?}"),
        }
    }
}

/// A 1-based line and column in the character stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// The line, starting at 1.
    pub line:   usize,
    /// The column in characters, starting at 1.
    pub column: usize,
}

impl Position {
    /// The position of the first character of a stream.
    pub const START: Self = Self { line:   1,
                                   column: 1, };
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Whitespace as the C locale classifies it, which includes vertical tab.
const fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

const fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

const fn is_line_end(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// A streaming tokenizer over a [`CharSource`].
///
/// Each call to [`next_token`](Self::next_token) returns the next token and
/// advances past the characters it consumed. The only state carried between
/// calls is the lookahead character: the character that ended one token is
/// the first one examined by the next call.
///
/// Lexing never fails. Characters that start no other token come back as
/// [`Token::Symbol`], malformed numbers such as `1.2.3` are converted
/// permissively, and once the source is exhausted every call returns
/// [`Token::EndOfInput`].
///
/// ## Example
/// ```
/// use kaleido::frontend::lexer::{Keyword, Lexer, Token};
///
/// let mut lexer = Lexer::new("def f(x) x + 1 # done".chars());
///
/// assert_eq!(lexer.next_token(), Token::Keyword(Keyword::Def));
/// assert_eq!(lexer.next_token(), Token::Identifier("f".to_string()));
/// assert_eq!(lexer.next_token(), Token::Symbol('('));
///
/// let rest: Vec<Token> = lexer.collect();
/// assert_eq!(rest.len(), 5);
/// assert_eq!(rest[4], Token::Number(1.0));
/// ```
pub struct Lexer<S> {
    source:      S,
    /// The lookahead character; `None` once the source is exhausted.
    last_char:   Option<char>,
    exhausted:   bool,
    /// Position of `last_char`.
    char_pos:    Position,
    /// Position the next character read from the source will have.
    cursor:      Position,
    after_cr:    bool,
    token_start: Position,
}

impl<S: CharSource> Lexer<S> {
    /// Creates a lexer reading from `source`.
    ///
    /// Nothing is read until the first call to
    /// [`next_token`](Self::next_token).
    pub const fn new(source: S) -> Self {
        Self { source,
               last_char: Some(' '),
               exhausted: false,
               char_pos: Position::START,
               cursor: Position::START,
               after_cr: false,
               token_start: Position::START }
    }

    /// Returns the next token from the source.
    ///
    /// Grammar, in the order the cases are tried after skipping whitespace:
    /// ```text
    ///     identifier := [A-Za-z] [A-Za-z0-9]*      ("def" and "extern" are keywords)
    ///     number     := [0-9.]+
    ///     comment    := "#" (any but "\n" or "\r")*  (skipped)
    ///     symbol     := any other character
    /// ```
    pub fn next_token(&mut self) -> Token {
        let token = self.scan();
        log::trace!("{} at {}", token, self.token_start);
        token
    }

    /// Position of the first character of the token most recently returned.
    ///
    /// For [`Token::EndOfInput`] this is the position just past the last
    /// character.
    #[must_use]
    pub const fn token_start(&self) -> Position {
        self.token_start
    }

    /// Borrows the underlying source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Mutably borrows the underlying source, e.g. to retrieve a read error.
    pub const fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consumes the lexer, returning the underlying source.
    ///
    /// The lookahead character, if any, is lost.
    pub fn into_source(self) -> S {
        self.source
    }

    fn scan(&mut self) -> Token {
        loop {
            while self.last_char.is_some_and(is_space) {
                self.bump();
            }

            self.token_start = self.char_pos;

            let Some(c) = self.last_char else {
                return Token::EndOfInput;
            };

            if c.is_ascii_alphabetic() {
                let name = self.take_while(char::is_ascii_alphanumeric);
                return Keyword::from_word(&name).map_or(Token::Identifier(name), Token::Keyword);
            }

            if is_number_char(c) {
                let text = self.take_while(|c| is_number_char(*c));
                return Token::Number(parse_permissive_float(&text));
            }

            if c == '#' {
                self.bump();
                while self.last_char.is_some_and(|c| !is_line_end(c)) {
                    self.bump();
                }
                log::debug!("skipped comment starting at {}", self.token_start);
                continue;
            }

            self.bump();
            return Token::Symbol(c);
        }
    }

    /// Collects the lookahead character and every following character that
    /// satisfies `accept`. The lookahead character is taken unconditionally.
    fn take_while(&mut self, accept: impl Fn(&char) -> bool) -> String {
        let mut text = String::new();
        while let Some(c) = self.last_char {
            text.push(c);
            self.bump();
            if !self.last_char.as_ref().is_some_and(&accept) {
                break;
            }
        }
        text
    }

    /// Replaces the lookahead character with the next one from the source.
    fn bump(&mut self) {
        self.last_char = if self.exhausted { None } else { self.source.next_char() };
        self.char_pos = self.cursor;

        match self.last_char {
            None => self.exhausted = true,
            Some('\n') if self.after_cr => self.after_cr = false,
            Some(c) if is_line_end(c) => {
                self.cursor = Position { line:   self.cursor.line + 1,
                                         column: 1, };
                self.after_cr = c == '\r';
            },
            Some(_) => {
                self.cursor.column += 1;
                self.after_cr = false;
            },
        }
    }
}

impl<S: CharSource> Iterator for Lexer<S> {
    type Item = Token;

    /// Yields tokens up to, but not including, [`Token::EndOfInput`].
    fn next(&mut self) -> Option<Token> {
        match self.next_token() {
            Token::EndOfInput => None,
            token => Some(token),
        }
    }
}

impl<S: CharSource> FusedIterator for Lexer<S> {}

/// Tokenizes `text` from a fresh lexer.
///
/// The returned sequence always ends with a single [`Token::EndOfInput`].
///
/// ## Example
/// ```
/// use kaleido::frontend::lexer::{Token, tokenize};
///
/// assert_eq!(tokenize("x+1"),
///            vec![Token::Identifier("x".to_string()),
///                 Token::Symbol('+'),
///                 Token::Number(1.0),
///                 Token::EndOfInput]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Lexer::new(text.chars()).collect();
    tokens.push(Token::EndOfInput);
    tokens
}
