//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and decimals)
//! - String literals with raw escape sequences
//! - Symbols and punctuation
//! - Comments and position tracking
//! - Totality over arbitrary input

use proptest::{prop_assert, prop_assert_eq, proptest};

use super::{
    lexer::{tokenize, Lexer, LexicalWarning},
    tokens::TokenKind,
};
use crate::Position;

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("module func class var if else loop unsafe return true false");

    assert_eq!(tokens.len(), 12);
    for token in &tokens[..11] {
        assert_eq!(token.kind, TokenKind::Keyword, "{}", token);
    }
    assert_eq!(tokens[0].lexeme, "module");
    assert_eq!(tokens[10].lexeme, "false");
    assert_eq!(tokens[11].kind, TokenKind::EndOfFile);
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let tokens = tokenize("return returnValue funcs _var");

    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "returnValue");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].lexeme, "_var");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase");

    let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["foo", "bar", "baz_123", "_underscore", "CamelCase", ""]);
    assert!(tokens[..5].iter().all(|t| t.kind == TokenKind::Identifier));
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5");

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "42");
    assert_eq!(tokens[1].lexeme, "3.14");
    assert_eq!(tokens[2].lexeme, "0");
    assert_eq!(tokens[3].lexeme, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::EndOfFile);
}

#[test]
fn test_number_dot_without_digit_is_left_behind() {
    let tokens = tokenize("3.");

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "3");
    assert_eq!(tokens[1].kind, TokenKind::Symbol);
    assert_eq!(tokens[1].lexeme, ".");
    assert_eq!(tokens[1].column, 2);
    assert_eq!(tokens[2].kind, TokenKind::EndOfFile);
}

#[test]
fn test_number_followed_by_identifier() {
    let tokens = tokenize("12abc 1.x");

    assert_eq!(tokens[0].lexeme, "12");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "abc");
    assert_eq!(tokens[2].lexeme, "1");
    assert_eq!(tokens[3].lexeme, ".");
    assert_eq!(tokens[4].lexeme, "x");
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "multiple words" """#);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "hello");
    assert_eq!(tokens[1].lexeme, "multiple words");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].lexeme, "");
    assert_eq!(tokens[3].kind, TokenKind::EndOfFile);
}

#[test]
fn test_escaped_quote_does_not_terminate_string() {
    let tokens = tokenize("\"a\\\"b\"");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "a\\\"b");
    assert_eq!(tokens[1].kind, TokenKind::EndOfFile);
}

#[test]
fn test_escapes_are_not_decoded() {
    let tokens = tokenize(r#""line\nbreak" "back\\slash""#);

    assert_eq!(tokens[0].lexeme, r"line\nbreak");
    assert_eq!(tokens[1].lexeme, r"back\\slash");
}

#[test]
fn test_unterminated_string_is_permissive() {
    let mut lexer = Lexer::new("x = \"never closed");

    assert_eq!(lexer.next_token().lexeme, "x");
    assert_eq!(lexer.next_token().lexeme, "=");

    let string = lexer.next_token();
    assert_eq!(string.kind, TokenKind::String);
    assert_eq!(string.lexeme, "never closed");
    assert_eq!(string.column, 5);

    assert!(lexer.next_token().is_eof());
    assert_eq!(
        lexer.warnings(),
        &[LexicalWarning::UnterminatedString {
            position: Position::new(1, 5)
        }]
    );
}

#[test]
fn test_unterminated_string_ending_in_backslash() {
    let tokens = tokenize("\"abc\\");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].lexeme, "abc\\");
    assert!(tokens[1].is_eof());
}

#[test]
fn test_multiline_string_advances_line() {
    let tokens = tokenize("\"a\nb\" c");

    assert_eq!(tokens[0].lexeme, "a\nb");
    assert_eq!(tokens[1].lexeme, "c");
    assert_eq!((tokens[1].line, tokens[1].column), (2, 4));
}

#[test]
fn test_tokenize_symbols() {
    let tokens = tokenize("( ) { } : , ; + - * / = -> ==");

    let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(
        lexemes,
        vec!["(", ")", "{", "}", ":", ",", ";", "+", "-", "*", "/", "=", "->", "==", ""]
    );
    assert!(tokens[..14].iter().all(|t| t.kind == TokenKind::Symbol));
}

#[test]
fn test_compound_symbols_without_spaces() {
    let tokens = tokenize("a->b===c-d");

    let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["a", "->", "b", "==", "=", "c", "-", "d", ""]);
}

#[test]
fn test_unknown_characters_become_symbols() {
    let tokens = tokenize("@ # é");

    assert_eq!(tokens[0].kind, TokenKind::Symbol);
    assert_eq!(tokens[0].lexeme, "@");
    assert_eq!(tokens[1].lexeme, "#");
    assert_eq!(tokens[2].kind, TokenKind::Symbol);
    assert_eq!(tokens[2].lexeme, "é");
    assert_eq!(tokens[2].column, 5);
    assert!(tokens[3].is_eof());
}

#[test]
fn test_tokenize_comments() {
    let tokens = tokenize("var x = 5; // this is a comment\nvar y // trailing");

    let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["var", "x", "=", "5", ";", "var", "y", ""]);
    assert_eq!((tokens[5].line, tokens[5].column), (2, 1));
}

#[test]
fn test_single_slash_is_a_symbol() {
    let tokens = tokenize("a / b");

    assert_eq!(tokens[1].kind, TokenKind::Symbol);
    assert_eq!(tokens[1].lexeme, "/");
}

#[test]
fn test_position_accounting() {
    let tokens = tokenize("a\nb");

    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    assert_eq!((tokens[1].line, tokens[1].column), (2, 1));
}

#[test]
fn test_columns_after_whitespace() {
    let tokens = tokenize("  func\tadd(\r\n    x");

    assert_eq!((tokens[0].line, tokens[0].column), (1, 3));
    assert_eq!((tokens[1].line, tokens[1].column), (1, 8));
    assert_eq!((tokens[2].line, tokens[2].column), (1, 11));
    assert_eq!((tokens[3].line, tokens[3].column), (2, 5));
    assert_eq!((tokens[4].line, tokens[4].column), (2, 6));
}

#[test]
fn test_empty_and_blank_sources() {
    for source in ["", "   \n\t ", "// only a comment", "// a\n// b\n"] {
        let tokens = tokenize(source);
        assert_eq!(tokens.len(), 1, "{:?}", source);
        assert!(tokens[0].is_eof());
        assert!(tokens[0].lexeme.is_empty());
    }
}

#[test]
fn test_next_token_is_idempotent_at_end() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().lexeme, "x");
    for _ in 0..3 {
        let token = lexer.next_token();
        assert!(token.is_eof());
        assert_eq!(token.column, 2);
    }
}

#[test]
fn test_peek_token_does_not_advance() {
    let mut lexer = Lexer::new("foo\n  bar");

    let peeked = lexer.peek_token();
    assert_eq!(peeked.lexeme, "foo");
    assert_eq!(lexer.next_token(), peeked);

    let peeked = lexer.peek_token();
    assert_eq!(peeked.lexeme, "bar");
    assert_eq!(lexer.current_position(), Position::new(1, 4));

    let next = lexer.next_token();
    assert_eq!(next, peeked);
    assert_eq!((next.line, next.column), (2, 3));
}

fn drain_with_positions(lexer: &mut Lexer) -> Vec<(String, Position)> {
    let mut seen = vec![(String::from("<start>"), lexer.current_position())];

    while let Some(token) = lexer.next() {
        seen.push((token.lexeme.clone(), lexer.current_position()));
    }

    seen
}

#[test]
fn test_position_through_mutable_reference() {
    let mut lexer = Lexer::new("ab\n  cd");

    let seen = drain_with_positions(&mut lexer);

    assert_eq!(
        seen,
        vec![
            (String::from("<start>"), Position::new(1, 1)),
            (String::from("ab"), Position::new(1, 3)),
            (String::from("cd"), Position::new(2, 5)),
            (String::new(), Position::new(2, 5)),
        ]
    );
    assert!(lexer.next().is_none());
}

#[test]
fn test_peek_does_not_duplicate_warnings() {
    let mut lexer = Lexer::new("\"open");

    lexer.peek_token();
    lexer.peek_token();
    assert!(lexer.warnings().is_empty());

    lexer.next_token();
    assert_eq!(lexer.warnings().len(), 1);
}

#[test]
fn test_tokenize_function_declaration() {
    let tokens = tokenize("func add(a: int, b: int) -> int { return a + b; }");

    assert!(tokens[0].is_keyword("func"));
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "add");
    assert!(tokens[2].is_symbol("("));
    assert!(tokens[11].is_symbol("->"));
    assert!(tokens[14].is_keyword("return"));
    assert_eq!(tokens.len(), 21);
}

proptest! {
    #[test]
    fn tokenizer_is_total(source in ".*") {
        let tokens = tokenize(&source);

        prop_assert!(!tokens.is_empty());
        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        prop_assert!(tokens[tokens.len() - 1].is_eof());
        prop_assert!(tokens[tokens.len() - 1].lexeme.is_empty());
    }

    #[test]
    fn tokenizer_is_total_over_program_like_text(source in "[a-z0-9 (){}:,;+*/=\"\\\\.\n-]{0,64}") {
        let mut lexer = Lexer::new(source.as_str());
        let mut count = 0;

        while !lexer.next_token().is_eof() {
            count += 1;
            prop_assert!(count <= source.len());
        }
        prop_assert!(lexer.next_token().is_eof());
    }
}
