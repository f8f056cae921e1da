use pretty_assertions::assert_eq;

use super::emitter::{emit, emit_with, EmitterConfig};
use crate::{lexer::lexer::tokenize, parser::parser::parse};

fn emit_source(source: &str) -> String {
    emit(&parse(tokenize(source).unwrap()).unwrap())
}

fn emit_source_with(source: &str, config: &EmitterConfig) -> String {
    emit_with(&parse(tokenize(source).unwrap()).unwrap(), config)
}

#[test]
fn test_emit_function_with_declaration() {
    assert_eq!(
        emit_source("funcion main() {\nentero a = 5;\n}"),
        "def main():\n\ta = 5\n"
    );
}

#[test]
fn test_emit_parameters_are_annotated() {
    assert_eq!(
        emit_source(
            "funcion f(entero a, flotante b, texto c, booleano d) { retornar a; }"
        ),
        "def f(a: int, b: float, c: str, d: bool):\n\treturn a\n"
    );
}

#[test]
fn test_emit_assignment_and_literals() {
    assert_eq!(
        emit_source("x = 1.50; texto s = \"hola mundo\"; y = x;"),
        "x = 1.50\ns = \"hola mundo\"\ny = x\n"
    );
}

#[test]
fn test_emit_booleans() {
    assert_eq!(
        emit_source("booleano a = verdadero; booleano b = falso;"),
        "a = True\nb = False\n"
    );
}

#[test]
fn test_emit_print_builtin() {
    assert_eq!(
        emit_source("imprimir(\"hola\", x); otra(1)"),
        "print(\"hola\", x)\notra(1)\n"
    );
}

#[test]
fn test_emit_call_inside_expression() {
    assert_eq!(emit_source("x = f(a, 2) + 1;"), "x = f(a, 2) + 1\n");
}

#[test]
fn test_emit_flat_expression() {
    assert_eq!(emit_source("x = a + b;"), "x = a + b\n");
}

#[test]
fn test_emit_keeps_left_to_right_order() {
    assert_eq!(emit_source("x = 1 + 2 * 3;"), "x = (1 + 2) * 3\n");
    assert_eq!(emit_source("x = a - b - c;"), "x = (a - b) - c\n");
}

#[test]
fn test_emit_source_parentheses() {
    assert_eq!(emit_source("x = (a + b);"), "x = (a + b)\n");
    assert_eq!(emit_source("x = a * (b + c);"), "x = a * (b + c)\n");
}

#[test]
fn test_emit_source_parens_only() {
    let config = EmitterConfig {
        source_parens_only: true,
        ..EmitterConfig::default()
    };

    assert_eq!(
        emit_source_with("x = 1 + 2 * (3 - 4);", &config),
        "x = 1 + 2 * (3 - 4)\n"
    );
}

#[test]
fn test_emit_conditional_and_else() {
    let source = "si (a == 1) {\n  imprimir(a);\n} sino {\n  a = 1;\n}";

    assert_eq!(
        emit_source(source),
        "if (a == 1):\n\tprint(a)\nelse:\n\ta = 1\n"
    );
}

#[test]
fn test_emit_empty_blocks_use_pass() {
    assert_eq!(
        emit_source("si (a == 1) { } sino { }"),
        "if (a == 1):\n\tpass\nelse:\n\tpass\n"
    );
}

#[test]
fn test_emit_while_loop() {
    assert_eq!(
        emit_source("mientras (i < 10) { i = i + 1; }"),
        "while (i < 10):\n\ti = i + 1\n"
    );
}

#[test]
fn test_emit_nested_indentation() {
    let source = "funcion f(entero n) {\n mientras (n > 0) {\n  si (n == 2) { retornar n; }\n  n = n - 1;\n }\n retornar 0;\n}\nf(5);";

    assert_eq!(
        emit_source(source),
        "def f(n: int):\n\
         \twhile (n > 0):\n\
         \t\tif (n == 2):\n\
         \t\t\treturn n\n\
         \t\tn = n - 1\n\
         \treturn 0\n\
         f(5)\n"
    );
}

#[test]
fn test_emit_custom_indent() {
    let config = EmitterConfig {
        indent: String::from("    "),
        ..EmitterConfig::default()
    };

    assert_eq!(
        emit_source_with("mientras (verdadero) { x = 1; }", &config),
        "while (True):\n    x = 1\n"
    );
}

#[test]
fn test_emit_empty_program() {
    assert_eq!(emit_source(""), "");
}
