// src/ir/generator.rs
use super::{
    basic_block::BasicBlock,
    function::Function,
    instruction::{Instruction, InstructionKind, IrBinaryOp, IrUnaryOp},
    module::Module,
    terminator::{Terminator, TerminatorKind},
    types::IrType,
    value::{ImmediateValue, Value},
};
use crate::error::compile_error::CompileError;
use crate::location::source_span::SourceSpan;
use crate::parser::ast::{BinaryOp, Expr, LiteralValue, Parameter, Stmt, Type, UnaryOp};
use crate::tokens::number::Number;
use std::collections::HashMap;

/// Lowers a parsed AST into the per-function control-flow-graph IR consumed
/// by later passes (SSA construction, SCCP, dead code elimination).
pub struct IrGenerator {
    current_block: Option<BasicBlock>,
    symbol_table: HashMap<String, Value>,
    temp_counter: usize,
    block_counter: usize,
    errors: Vec<CompileError>,
    /// Control-flow edges recorded while lowering a function body. Resolved
    /// once every block of the function has been added to its CFG, since
    /// `Function::add_edge` requires both endpoints to already exist.
    pending_edges: Vec<(String, String)>,
}

impl IrGenerator {
    pub fn new() -> Self {
        Self {
            current_block: None,
            symbol_table: HashMap::new(),
            temp_counter: 0,
            block_counter: 0,
            errors: Vec::new(),
            pending_edges: Vec::new(),
        }
    }

    fn block_needs_terminator(&self) -> bool {
        self.current_block.as_ref().is_some_and(|b| !b.terminator().is_terminator())
    }

    /// Generates IR functions from a sequence of top-level statements.
    pub fn generate(&mut self, stmts: Vec<Stmt>) -> (Vec<Function>, Vec<CompileError>) {
        let mut functions = Vec::new();

        for stmt in stmts {
            match stmt {
                Stmt::Function { name, parameters, return_type, body, span: _ } => {
                    let mut func = self.create_function(&name, &parameters, &return_type);
                    self.generate_function_body(&mut func, body);
                    functions.push(func);
                }
                other => {
                    self.new_error("unsupported top-level statement".to_string(), other.span().clone());
                }
            }
        }

        (functions, std::mem::take(&mut self.errors))
    }

    /// Generates a full module from top-level statements, wrapping the
    /// generated functions with default target settings.
    pub fn generate_module(&mut self, name: &str, stmts: Vec<Stmt>) -> (Module, Vec<CompileError>) {
        let (functions, errors) = self.generate(stmts);
        let mut module = Module::new(name, None);
        for func in functions {
            module.add_function(func);
        }
        (module, errors)
    }

    fn new_error(&mut self, message: String, span: SourceSpan) {
        self.errors.push(CompileError::IrGeneratorError { message, span });
    }

    fn create_function(&mut self, name: &str, params: &[Parameter], return_type: &Type) -> Function {
        let ir_params = params.iter().map(|param| (param.name.clone(), self.map_type(&param.type_annotation))).collect();
        let ir_return_type = self.map_type(return_type);
        Function::new(name, ir_params, ir_return_type)
    }

    fn map_type(&self, ty: &Type) -> IrType {
        match ty {
            Type::I8 => IrType::I8,
            Type::I16 => IrType::I16,
            Type::I32 => IrType::I32,
            Type::I64 => IrType::I64,
            Type::U8 => IrType::U8,
            Type::U16 => IrType::U16,
            Type::U32 => IrType::U32,
            Type::U64 => IrType::U64,
            Type::F32 => IrType::F32,
            Type::F64 => IrType::F64,
            Type::Char => IrType::Char,
            Type::String => IrType::String,
            Type::Bool => IrType::Bool,
            Type::Void => IrType::Void,
            Type::Array(element_type, size_expr) => {
                if let Expr::Literal { value: LiteralValue::Number(Number::Integer(size)), .. } = size_expr.as_ref() {
                    IrType::Array(Box::new(self.map_type(element_type)), *size as usize)
                } else {
                    IrType::Pointer(Box::new(self.map_type(element_type)))
                }
            }
            Type::Vector(element_type) => IrType::Pointer(Box::new(self.map_type(element_type))),
        }
    }

    fn generate_function_body(&mut self, func: &mut Function, body: Vec<Stmt>) {
        self.start_block(func, "entry");

        for stmt in body {
            self.generate_stmt(func, stmt);
        }

        if self.block_needs_terminator() {
            let return_value = Value::new_immediate(ImmediateValue::I32(0));
            self.add_terminator(Terminator::new(
                TerminatorKind::Return { value: return_value, ty: func.return_type.clone() },
                SourceSpan::default(),
            ));
        }

        if let Some(block) = self.current_block.take() {
            func.add_block(block);
        }

        for (from, to) in self.pending_edges.drain(..) {
            func.add_edge(&from, &to);
        }

        self.symbol_table.clear();
    }

    fn generate_stmt(&mut self, func: &mut Function, stmt: Stmt) {
        match stmt {
            Stmt::Expression { expr } => {
                self.generate_expr(func, expr);
            }
            Stmt::VarDeclaration { variables, type_annotation, initializers, span } => {
                self.generate_var_declaration(func, variables, &type_annotation, initializers, span);
            }
            Stmt::Return { value, span } => {
                self.generate_return(func, value, span);
            }
            Stmt::Block { statements, .. } => {
                for stmt in statements {
                    self.generate_stmt(func, stmt);
                }
            }
            Stmt::If { condition, then_branch, else_branch, span } => {
                self.generate_if(func, condition, then_branch, else_branch, span);
            }
            Stmt::While { condition, body, span } => {
                self.generate_while(func, condition, body, span);
            }
            Stmt::Function { span, .. } => {
                self.new_error("nested function declarations are not supported".to_string(), span);
            }
        }
    }

    fn generate_var_declaration(
        &mut self,
        func: &mut Function,
        variables: Vec<String>,
        type_annotation: &Type,
        initializers: Vec<Expr>,
        span: SourceSpan,
    ) {
        let ty = self.map_type(type_annotation);

        for (i, var) in variables.iter().enumerate() {
            let temp = self.new_temp();
            func.add_local(var.clone(), ty.clone());
            let dest = Value::new_temporary(temp, ty.clone());

            self.add_instruction(
                Instruction::new(InstructionKind::Alloca { ty: ty.clone() }, span.clone()).with_result(dest.clone()),
            );
            self.symbol_table.insert(var.clone(), dest.clone());

            if let Some(init) = initializers.get(i) {
                let value = self.generate_expr(func, init.clone());
                self.add_instruction(Instruction::new(InstructionKind::Store { value, dest }, span.clone()));
            } else {
                self.new_error(format!("variable '{var}' must be initialized"), span.clone());
            }
        }
    }

    fn generate_return(&mut self, func: &mut Function, value: Option<Expr>, span: SourceSpan) {
        let return_value =
            value.map_or_else(|| Value::new_immediate(ImmediateValue::I32(0)), |expr| self.generate_expr(func, expr));

        self.add_terminator(Terminator::new(
            TerminatorKind::Return { value: return_value, ty: func.return_type.clone() },
            span,
        ));
    }

    fn generate_if(
        &mut self,
        func: &mut Function,
        condition: Expr,
        then_branch: Vec<Stmt>,
        else_branch: Option<Vec<Stmt>>,
        span: SourceSpan,
    ) {
        let cond_value = self.generate_expr(func, condition);

        let then_label = self.new_block_label("then");
        let else_label = self.new_block_label("else");
        let merge_label = self.new_block_label("merge");

        self.conditional_branch_to(func, cond_value, &then_label, &else_label, span.clone());

        self.start_block(func, &then_label);
        for stmt in then_branch {
            self.generate_stmt(func, stmt);
        }
        if self.block_needs_terminator() {
            self.branch_to(func, &merge_label, span.clone());
        }

        self.start_block(func, &else_label);
        if let Some(else_stmts) = else_branch {
            for stmt in else_stmts {
                self.generate_stmt(func, stmt);
            }
        }
        if self.block_needs_terminator() {
            self.branch_to(func, &merge_label, span);
        }

        self.start_block(func, &merge_label);
    }

    fn generate_while(&mut self, func: &mut Function, condition: Expr, body: Vec<Stmt>, span: SourceSpan) {
        let loop_start_label = self.new_block_label("loop_start");
        let loop_body_label = self.new_block_label("loop_body");
        let loop_end_label = self.new_block_label("loop_end");

        self.branch_to(func, &loop_start_label, span.clone());

        self.start_block(func, &loop_start_label);
        let cond_value = self.generate_expr(func, condition);
        self.conditional_branch_to(func, cond_value, &loop_body_label, &loop_end_label, span.clone());

        self.start_block(func, &loop_body_label);
        for stmt in body {
            self.generate_stmt(func, stmt);
        }
        if self.block_needs_terminator() {
            self.branch_to(func, &loop_start_label, span);
        }

        self.start_block(func, &loop_end_label);
    }

    fn generate_expr(&mut self, func: &mut Function, expr: Expr) -> Value {
        match expr {
            Expr::Literal { value, .. } => self.generate_literal(value),
            Expr::Binary { left, op, right, span } => self.generate_binary(func, *left, op, *right, span),
            Expr::Unary { op, expr, span } => self.generate_unary(func, op, *expr, span),
            Expr::Variable { name, span } => self.generate_variable(name, span),
            Expr::Assign { name, value, span } => self.generate_assign(func, name, *value, span),
            Expr::Grouping { expr, .. } => self.generate_expr(func, *expr),
            Expr::Call { callee, arguments, span } => self.generate_call(func, *callee, arguments, span),
            Expr::ArrayAccess { array, index, span } => self.generate_array_access(func, *array, *index, span),
        }
    }

    fn generate_literal(&mut self, value: LiteralValue) -> Value {
        match value {
            LiteralValue::Number(Number::Integer(i)) => Value::new_immediate(ImmediateValue::I64(i)),
            LiteralValue::Number(Number::Float(f)) => Value::new_immediate(ImmediateValue::F64(f)),
            LiteralValue::Number(Number::Scientific(base, exp)) => {
                Value::new_immediate(ImmediateValue::F64(base * 10f64.powi(exp)))
            }
            LiteralValue::Bool(b) => Value::new_immediate(ImmediateValue::Bool(b)),
            LiteralValue::StringLit(s) => Value::new_immediate(ImmediateValue::String(s)),
            LiteralValue::CharLit(c) => Value::new_immediate(ImmediateValue::Char(c.chars().next().unwrap_or('\0'))),
            LiteralValue::Nullptr => Value::new_immediate(ImmediateValue::I64(0)),
        }
    }

    fn generate_binary(&mut self, func: &mut Function, left: Expr, op: BinaryOp, right: Expr, span: SourceSpan) -> Value {
        let ir_op: IrBinaryOp = op.into();
        let left_val = self.generate_expr(func, left);
        let right_val = self.generate_expr(func, right);
        let ty = left_val.ty.clone();
        let dest = Value::new_temporary(self.new_temp(), ty.clone());

        self.add_instruction(
            Instruction::new(InstructionKind::Binary { op: ir_op, left: left_val, right: right_val, ty }, span)
                .with_result(dest.clone()),
        );

        dest
    }

    fn generate_unary(&mut self, func: &mut Function, op: UnaryOp, expr: Expr, span: SourceSpan) -> Value {
        let ir_op: IrUnaryOp = op.into();
        let operand = self.generate_expr(func, expr);
        let ty = operand.ty.clone();
        let dest = Value::new_temporary(self.new_temp(), ty.clone());

        self.add_instruction(
            Instruction::new(InstructionKind::Unary { op: ir_op, operand, ty }, span).with_result(dest.clone()),
        );

        dest
    }

    fn generate_variable(&mut self, name: String, span: SourceSpan) -> Value {
        if let Some(value) = self.symbol_table.get(&name) {
            value.clone()
        } else {
            self.new_error(format!("undefined variable '{name}'"), span);
            Value::new_immediate(ImmediateValue::I32(0))
        }
    }

    fn generate_assign(&mut self, func: &mut Function, name: String, value: Expr, span: SourceSpan) -> Value {
        let value_val = self.generate_expr(func, value);

        if let Some(dest) = self.symbol_table.get(&name).cloned() {
            self.add_instruction(Instruction::new(
                InstructionKind::Store { value: value_val.clone(), dest },
                span,
            ));
        } else {
            self.new_error(format!("cannot assign to undefined variable '{name}'"), span);
        }

        value_val
    }

    fn generate_call(&mut self, func: &mut Function, callee: Expr, arguments: Vec<Expr>, span: SourceSpan) -> Value {
        let callee_val = self.generate_expr(func, callee);
        let arg_vals = arguments.into_iter().map(|arg| self.generate_expr(func, arg)).collect::<Vec<_>>();

        // Calls aren't resolved against a function symbol table here, so the
        // result type defaults to i32; callers needing another type must cast.
        let ty = IrType::I32;
        let dest = Value::new_temporary(self.new_temp(), ty.clone());

        self.add_instruction(
            Instruction::new(InstructionKind::Call { func: callee_val, args: arg_vals, ty }, span)
                .with_result(dest.clone()),
        );

        dest
    }

    fn generate_array_access(&mut self, func: &mut Function, array: Expr, index: Expr, span: SourceSpan) -> Value {
        let array_val = self.generate_expr(func, array);
        let index_val = self.generate_expr(func, index);

        let element_ty = match &array_val.ty {
            IrType::Array(inner, _) | IrType::Pointer(inner) => inner.as_ref().clone(),
            other => other.clone(),
        };

        let ptr = Value::new_temporary(self.new_temp(), IrType::Pointer(Box::new(element_ty.clone())));
        self.add_instruction(
            Instruction::new(
                InstructionKind::GetElementPtr { base: array_val, index: index_val, element_ty: element_ty.clone() },
                span.clone(),
            )
            .with_result(ptr.clone()),
        );

        let loaded = Value::new_temporary(self.new_temp(), element_ty.clone());
        self.add_instruction(
            Instruction::new(InstructionKind::Load { src: ptr, ty: element_ty }, span).with_result(loaded.clone()),
        );

        loaded
    }

    // Helper methods
    fn new_temp(&mut self) -> String {
        self.temp_counter += 1;
        format!("t{}", self.temp_counter)
    }

    fn new_block_label(&mut self, prefix: &str) -> String {
        self.block_counter += 1;
        format!("{prefix}_{}", self.block_counter)
    }

    fn start_block(&mut self, func: &mut Function, label: &str) {
        if let Some(block) = self.current_block.take() {
            func.add_block(block);
        }
        self.current_block = Some(BasicBlock::new(label, SourceSpan::default()));
    }

    fn add_instruction(&mut self, inst: Instruction) {
        if let Some(block) = &mut self.current_block {
            block.instructions.push(inst);
        }
    }

    fn add_terminator(&mut self, term: Terminator) {
        if let Some(block) = &mut self.current_block {
            block.set_terminator(term);
        }
    }

    /// Sets an unconditional branch as the current block's terminator and
    /// queues the corresponding control-flow edge.
    fn branch_to(&mut self, _func: &mut Function, label: &str, span: SourceSpan) {
        if let Some(from) = self.current_block.as_ref().map(|b| b.label.to_string()) {
            self.add_terminator(Terminator::new(TerminatorKind::Branch { label: label.into() }, span));
            self.pending_edges.push((from, label.to_string()));
        }
    }

    /// Sets a conditional branch as the current block's terminator and
    /// queues both outgoing control-flow edges.
    fn conditional_branch_to(
        &mut self,
        _func: &mut Function,
        condition: Value,
        true_label: &str,
        false_label: &str,
        span: SourceSpan,
    ) {
        if let Some(from) = self.current_block.as_ref().map(|b| b.label.to_string()) {
            self.add_terminator(Terminator::new(
                TerminatorKind::ConditionalBranch {
                    condition,
                    true_label: true_label.into(),
                    false_label: false_label.into(),
                },
                span,
            ));
            self.pending_edges.push((from.clone(), true_label.to_string()));
            self.pending_edges.push((from, false_label.to_string()));
        }
    }
}

impl Default for IrGenerator {
    fn default() -> Self {
        Self::new()
    }
}
