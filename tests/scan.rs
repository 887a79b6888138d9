use std::fs;

use kaleido::{
    Keyword, Token,
    frontend::scan::{Spanned, scan},
    tokenize,
};
use walkdir::WalkDir;

fn scanned_tokens(src: &str) -> Vec<Token> {
    scan(src).into_iter().map(|spanned| spanned.token).collect()
}

fn assert_agrees(src: &str) {
    assert_eq!(scanned_tokens(src),
               tokenize(src),
               "scanner and lexer disagree on {src:?}");
}

#[test]
fn corpus_programs_scan_like_they_lex() {
    let mut count = 0;

    for entry in
        WalkDir::new("corpus").into_iter()
                              .filter_map(Result::ok)
                              .filter(|e| e.path().extension().is_some_and(|ext| ext == "kal"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        count += 1;
        assert_agrees(&content);
    }

    assert!(count > 0, "No programs found in corpus");
}

#[test]
fn scanner_agrees_on_edge_cases() {
    for src in ["",
                "   \t",
                "def define extern externs",
                "1.2.3 . .. 4e5 3abc",
                "# only",
                "x # trailing",
                "#a\rb",
                "a+-b",
                "é αβ ∑(x)",
                "\x0bx\x0c"]
    {
        assert_agrees(src);
    }
}

#[test]
fn spans_and_lines() {
    let tokens = scan("x + 10\n  foo(y)");

    let expected = [(Token::Identifier("x".to_string()), 0..1, 1),
                    (Token::Symbol('+'), 2..3, 1),
                    (Token::Number(10.0), 4..6, 1),
                    (Token::Identifier("foo".to_string()), 9..12, 2),
                    (Token::Symbol('('), 12..13, 2),
                    (Token::Identifier("y".to_string()), 13..14, 2),
                    (Token::Symbol(')'), 14..15, 2),
                    (Token::EndOfInput, 15..15, 2)];

    let expected: Vec<Spanned> =
        expected.into_iter()
                .map(|(token, span, line)| Spanned { token, span, line })
                .collect();
    assert_eq!(tokens, expected);
}

#[test]
fn crlf_counts_as_one_line() {
    let tokens = scan("a\r\nb\rc\n\nd");
    let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 2, 3, 5, 5]);
}

#[test]
fn multibyte_symbols_cover_whole_characters() {
    let tokens = scan("é+");
    assert_eq!(tokens[0].token, Token::Symbol('é'));
    assert_eq!(tokens[0].span, 0..2);
    assert_eq!(tokens[1].token, Token::Symbol('+'));
    assert_eq!(tokens[1].span, 2..3);
}

#[test]
fn keywords_win_only_on_exact_match() {
    assert_eq!(scanned_tokens("def define"),
               vec![Token::Keyword(Keyword::Def),
                    Token::Identifier("define".to_string()),
                    Token::EndOfInput]);
}
