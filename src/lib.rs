//! # kaleido
//!
//! kaleido is the front end of a small expression-oriented language in which
//! every value is a floating-point number. It turns a character stream into
//! tokens and defines the expression tree a parser builds from them.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum, the tree a parser builds from tokens
/// and an evaluator or code generator later walks.
///
/// # Responsibilities
/// - Defines the four expression variants: numbers, variables, binary
///   operations and calls.
/// - Gives every node exclusive ownership of its children.
pub mod ast;
/// Provides the error types of the crate.
///
/// Lexing and tree construction cannot fail; the only errors are those of
/// the character sources feeding the lexer.
pub mod error;
/// Turns raw characters into tokens.
///
/// This module holds the streaming lexer, the character sources it reads
/// from, and a generated scanner for in-memory text.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Never rejects input: unknown characters become symbol tokens.
pub mod frontend;
/// General utilities.
///
/// Holds the permissive numeric conversion shared by both scanners.
pub mod util;

pub use frontend::lexer::{Keyword, Lexer, Position, Token, tokenize};
