use std::{fs, io, process};

use clap::Parser;
use kaleido::{
    Lexer, Token,
    frontend::{
        scan::scan,
        source::{CharSource, ReaderSource},
    },
};

/// kaleido prints the tokens of a program, one per line.
///
/// With no input given, tokens are read from standard input as it arrives.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells kaleido to look at a file instead of a script.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Prints the byte span and line of each token instead of its column.
    /// Reads all input before printing anything.
    #[arg(short, long)]
    spans: bool,

    contents: Option<String>,
}

fn read_input(args: &Args) -> String {
    match &args.contents {
        Some(path) if args.file => fs::read_to_string(path).unwrap_or_else(|_| {
                                       eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                                       process::exit(1);
                                   }),
        Some(script) => script.clone(),
        None => io::read_to_string(io::stdin()).unwrap_or_else(|e| {
                    eprintln!("Failed to read standard input: {e}");
                    process::exit(1);
                }),
    }
}

fn print_spans(text: &str) {
    for spanned in scan(text) {
        println!("{:>4} {:>10} {}",
                 spanned.line,
                 format!("{:?}", spanned.span),
                 spanned.token);
    }
}

fn print_stream<S: CharSource>(lexer: &mut Lexer<S>) {
    loop {
        let token = lexer.next_token();
        println!("{:>8} {token}", lexer.token_start().to_string());
        if token == Token::EndOfInput {
            break;
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.spans {
        print_spans(&read_input(&args));
        return;
    }

    if args.contents.is_some() {
        let text = read_input(&args);
        print_stream(&mut Lexer::new(text.chars()));
        return;
    }

    let mut lexer = Lexer::new(ReaderSource::new(io::stdin().lock()));
    print_stream(&mut lexer);
    if let Some(e) = lexer.source_mut().take_error() {
        eprintln!("{e}");
        process::exit(1);
    }
}
