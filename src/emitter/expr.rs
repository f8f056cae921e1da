use crate::ast::expressions::{Expr, FunctionCall};

use super::{emitter::EmitterConfig, types::target_builtin};

pub fn gen_expression(expression: &Expr, config: &EmitterConfig) -> String {
    gen_operand(expression, config, false)
}

/// `nested` is set for the operands of a binary expression.
fn gen_operand(expression: &Expr, config: &EmitterConfig, nested: bool) -> String {
    match expression {
        Expr::Binary(binary) => {
            let text = format!(
                "{} {} {}",
                gen_operand(&binary.left, config, true),
                binary.operator,
                gen_operand(&binary.right, config, true)
            );

            if binary.parenthesized || (nested && !config.source_parens_only) {
                format!("({})", text)
            } else {
                text
            }
        }
        Expr::Identifier(name) => name.clone(),
        Expr::Integer(value) | Expr::Float(value) | Expr::String(value) => value.clone(),
        Expr::Boolean(value) => match value.as_str() {
            "verdadero" => String::from("True"),
            "falso" => String::from("False"),
            other => other.to_string(),
        },
        Expr::Call(call) => gen_call(call, config),
    }
}

/// `name(arg, arg, ...)`, with builtins renamed to their target equivalent.
pub fn gen_call(call: &FunctionCall, config: &EmitterConfig) -> String {
    let arguments = call
        .arguments
        .iter()
        .map(|argument| gen_expression(argument, config))
        .collect::<Vec<String>>()
        .join(", ");

    format!("{}({})", target_builtin(&call.identifier), arguments)
}
