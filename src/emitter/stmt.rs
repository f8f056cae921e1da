use crate::ast::statements::Stmt;

use super::{
    emitter::Emitter,
    expr::{gen_call, gen_expression},
    types::target_type,
};

pub fn gen_statement(emitter: &mut Emitter, statement: &Stmt) {
    let config = emitter.config;

    match statement {
        Stmt::Declaration(declaration) => {
            let value = gen_expression(&declaration.value, config);
            emitter.line(&format!("{} = {}", declaration.identifier, value));
        }
        Stmt::Assignment(assignment) => {
            let value = gen_expression(&assignment.value, config);
            emitter.line(&format!("{} = {}", assignment.identifier, value));
        }
        Stmt::FunctionCall(call) => {
            emitter.line(&gen_call(call, config));
        }
        Stmt::Return(return_stmt) => {
            let value = gen_expression(&return_stmt.value, config);
            emitter.line(&format!("return {}", value));
        }
        Stmt::Conditional(conditional) => {
            let condition = gen_expression(&conditional.condition, config);
            emitter.line(&format!("if ({}):", condition));
            emitter.block(&conditional.body);
        }
        Stmt::ConditionalElse(else_stmt) => {
            emitter.line("else:");
            emitter.block(&else_stmt.body);
        }
        Stmt::WhileLoop(while_loop) => {
            let condition = gen_expression(&while_loop.condition, config);
            emitter.line(&format!("while ({}):", condition));
            emitter.block(&while_loop.body);
        }
        Stmt::FunctionDeclaration(function) => {
            let parameters = function
                .parameters
                .iter()
                .map(|parameter| format!("{}: {}", parameter.name, target_type(&parameter.data_type)))
                .collect::<Vec<String>>()
                .join(", ");

            emitter.line(&format!("def {}({}):", function.identifier, parameters));
            emitter.block(&function.body);
        }
    }
}
