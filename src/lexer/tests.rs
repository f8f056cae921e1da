//! Unit tests for the lexer module.
//!
//! - Reserved words, type names and identifiers (priority ordering)
//! - Numeric, string and boolean literals
//! - Operators and punctuation
//! - Comments and whitespace
//! - Positions and source coverage
//! - Error cases

use pretty_assertions::assert_eq;

use super::{
    lexer::{tokenize, tokenize_with_trivia},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("si sino fin_si mientras fin_mientras para funcion fin_funcion retornar"),
        vec![
            TokenKind::Si,
            TokenKind::Sino,
            TokenKind::FinSi,
            TokenKind::Mientras,
            TokenKind::FinMientras,
            TokenKind::Para,
            TokenKind::Funcion,
            TokenKind::FinFuncion,
            TokenKind::Retornar,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_data_types() {
    let tokens = tokenize("entero flotante texto booleano").unwrap();

    for (token, expected) in tokens.iter().zip(["entero", "flotante", "texto", "booleano"]) {
        assert_eq!(token.kind, TokenKind::DataType);
        assert_eq!(token.value, expected);
    }
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_boolean_wins_over_identifier() {
    let tokens = tokenize("verdadero").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Boolean);
    assert_eq!(tokens[0].value, "verdadero");

    assert_eq!(kinds("falso"), vec![TokenKind::Boolean, TokenKind::EOF]);
}

#[test]
fn test_reserved_prefix_is_still_an_identifier() {
    let tokens = tokenize("siguiente enteros sinon falsos paras").unwrap();

    for token in &tokens[..5] {
        assert_eq!(token.kind, TokenKind::Identifier, "{}", token.value);
    }
    assert_eq!(tokens[0].value, "siguiente");
    assert_eq!(tokens[2].value, "sinon");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 CamelCase").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "CamelCase");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].kind, TokenKind::Float);
    assert_eq!(tokens[3].value, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings_keep_quotes() {
    let tokens = tokenize(r#""hola" "dos palabras" """#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "\"hola\"");
    assert_eq!(tokens[1].value, "\"dos palabras\"");
    assert_eq!(tokens[2].value, "\"\"");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_strings_on_one_line_stay_separate() {
    let tokens = tokenize(r#"imprimir("a", "b");"#).unwrap();

    assert_eq!(tokens[2].value, "\"a\"");
    assert_eq!(tokens[3].kind, TokenKind::Comma);
    assert_eq!(tokens[4].value, "\"b\"");
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / == != < > <= >= ="),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Assignment,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } , ;"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "entero x = 5; // comentario\n/* bloque\n de dos lineas */ x = 10;";
    let tokens = tokenize(source).unwrap();

    let values: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(values, vec!["entero", "x", "=", "5", ";", "x", "=", "10", ";", ""]);
    assert_eq!(tokens[5].span.start.line, 3);
}

#[test]
fn test_comment_wins_over_slash() {
    assert_eq!(kinds("a / b // c"), vec![
        TokenKind::Identifier,
        TokenKind::Slash,
        TokenKind::Identifier,
        TokenKind::EOF,
    ]);
}

#[test]
fn test_tokenize_simple_declaration() {
    let tokens = tokenize("entero a = 5;").unwrap();

    assert_eq!(tokens.len(), 6);
    assert_eq!(tokens[0].kind, TokenKind::DataType);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_token_positions() {
    let tokens = tokenize("funcion main() {\nentero a = 5;\n}").unwrap();

    let main = &tokens[1];
    assert_eq!(main.value, "main");
    assert_eq!(main.span.start.offset, 8);
    assert_eq!(main.span.end.offset, 12);
    assert_eq!((main.line(), main.column()), (1, 9));

    let a = &tokens[6];
    assert_eq!(a.value, "a");
    assert_eq!((a.line(), a.column()), (2, 8));

    let close = &tokens[10];
    assert_eq!(close.kind, TokenKind::CloseCurly);
    assert_eq!((close.line(), close.column()), (3, 1));
}

#[test]
fn test_columns_count_characters() {
    let tokens = tokenize("texto s = \"año\"; x = 1;").unwrap();

    let x = &tokens[5];
    assert_eq!(x.value, "x");
    assert_eq!(x.column(), 18);
    assert_eq!(x.span.start.offset, 18);
}

#[test]
fn test_eof_token_sits_at_end() {
    let tokens = tokenize("a = 1;\n").unwrap();
    let eof = tokens.last().unwrap();

    assert_eq!(eof.kind, TokenKind::EOF);
    assert!(eof.span.is_empty());
    assert_eq!(eof.span.start.offset, 7);
    assert_eq!((eof.line(), eof.column()), (2, 1));
}

#[test]
fn test_trivia_covers_source_exactly() {
    let source = "// cabecera\nfuncion f(entero a, texto b) {\n\t/* nada */ retornar (a + 1) * 2;\n}\nsi (x != 3.5) { imprimir(\"hola\"); } sino { }\n";
    let tokens = tokenize_with_trivia(source).unwrap();

    let mut expected_start = 0;
    for token in &tokens {
        assert_eq!(token.span.start.offset, expected_start, "gap before {}", token);
        assert_eq!(&source[token.span.start.offset..token.span.end.offset], token.value);
        expected_start = token.span.end.offset;
    }
    assert_eq!(expected_start, source.len());

    let rebuilt: String = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(rebuilt, source);
}

fn assert_trivia_covers(source: &str) {
    let tokens = tokenize_with_trivia(source).unwrap();

    let mut expected_start = 0;
    for token in &tokens {
        assert_eq!(token.span.start.offset, expected_start, "gap before {}", token);
        assert_eq!(&source[token.span.start.offset..token.span.end.offset], token.value);
        expected_start = token.span.end.offset;
    }
    assert_eq!(expected_start, source.len());
}

#[test]
fn test_trivia_covers_crlf_source() {
    let source = "// cabecera\r\nentero a = 1;\r\nsi (a == 1) {\r\n\timprimir(a);\r\n}\r\n";

    assert_trivia_covers(source);

    let tokens = tokenize(source).unwrap();
    let si = tokens.iter().find(|token| token.kind == TokenKind::Si).unwrap();
    assert_eq!((si.line(), si.column()), (3, 1));
}

#[test]
fn test_trivia_covers_non_ascii_text() {
    let source = "texto s = \"año señal ünïcödé\"; // comentario: ñandú\n/* más */ x = s;\n";

    assert_trivia_covers(source);

    let tokens = tokenize(source).unwrap();
    let x = tokens.iter().find(|token| token.value == "x").unwrap();
    assert_eq!((x.line(), x.column()), (2, 11));
}

#[test]
fn test_tokenize_unterminated_block_comment() {
    let error = tokenize("x = 1;\n  /* sin cerrar\nx = 2;").unwrap_err();

    assert_eq!(error.get_error_name(), "UnterminatedComment");
    assert_eq!((error.get_line(), error.get_column()), (2, 3));
    assert_eq!(
        error.get_message(),
        "unterminated block comment\n\n\t  /* sin cerrar\n\t  ^\n"
    );
}

#[test]
fn test_block_comment_closed_later_is_not_unterminated() {
    assert_eq!(
        kinds("/* uno\n dos */ x = 1; /**/"),
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokens_strictly_increasing() {
    let tokens = tokenize("mientras (i < 10) { i = i + 1; }").unwrap();

    for pair in tokens.windows(2) {
        assert!(pair[0].span.start.offset < pair[1].span.start.offset);
        assert!(pair[0].span.end.offset <= pair[1].span.start.offset);
    }
}

#[test]
fn test_rescan_is_deterministic() {
    let source = "funcion f(entero a) { retornar a * 2; }\nf(3);";

    assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
}

#[test]
fn test_tokenize_unrecognized_token() {
    let error = tokenize("entero x = 1;\nx = @;").unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_line(), 2);
    assert_eq!(error.get_column(), 5);
    assert_eq!(
        error.get_message(),
        "unrecognised character '@'\n\n\tx = @;\n\t    ^\n"
    );
}

#[test]
fn test_tokenize_whitespace_handling() {
    assert_eq!(
        kinds("  \t x   =\r\n  42  "),
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Integer,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
}
