//! Indented syntax-tree dump.
//!
//! One line per node, children indented two spaces below their parent, top-level declarations at column 0:
//!
//! ```text
//! Fun-Declaration
//!   Int
//!   Id: main
//!   Params
//!     Void
//!   CompStmt
//! ```
//!
//! Array references and array declarators print an `Array` line wrapping the `Id`; a local array declaration prints an
//! `Array` marker after its `Id` instead. A call with arguments wraps them in `Args`.

use crate::ast::*;

const INDENT_WIDTH: usize = 2;

/// Render `program` as an indented tree.
pub fn dump(program: &Program) -> String {
    let mut printer = TreePrinter::new();
    for decl in &program.declarations {
        printer.declaration(decl);
    }
    printer.finish()
}

/// Output buffer with indentation tracking.
struct TreePrinter {
    output: String,
    indent_level: usize,
}

impl TreePrinter {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    fn finish(self) -> String {
        self.output
    }

    fn line(&mut self, label: &str) {
        self.output.push_str(&" ".repeat(self.indent_level * INDENT_WIDTH));
        self.output.push_str(label);
        self.output.push('\n');
    }

    /// Print `label` and run `children` one level deeper.
    fn nested(&mut self, label: &str, children: impl FnOnce(&mut Self)) {
        self.line(label);
        self.indent_level += 1;
        children(self);
        self.indent_level -= 1;
    }

    // ---- declarations --------------------------------------------------

    fn declaration(&mut self, decl: &Node<Declaration>) {
        match &decl.node {
            Declaration::Var(var) => self.nested("Var-Declaration", |p| {
                p.type_spec(&var.ty);
                p.ident(&var.name.node);
            }),
            Declaration::Array(array) => self.nested("Array-Declaration", |p| {
                p.type_spec(&array.ty);
                p.nested("Array", |p| {
                    p.ident(&array.name.node);
                    p.line(&format!("Const: {}", array.size.node));
                });
            }),
            Declaration::Function(func) => self.nested("Fun-Declaration", |p| {
                p.type_spec(&func.return_ty);
                p.ident(&func.name.node);
                p.params(&func.params.node);
                p.compound(&func.body.node);
            }),
        }
    }

    fn params(&mut self, params: &Params) {
        self.nested("Params", |p| match params {
            Params::Void => p.line("Void"),
            Params::List(list) => {
                for param in list {
                    p.param(&param.node);
                }
            }
        });
    }

    fn param(&mut self, param: &Param) {
        self.nested("Param", |p| {
            p.type_spec(&param.ty);
            if param.is_array {
                p.nested("Array", |p| p.ident(&param.name.node));
            } else {
                p.ident(&param.name.node);
            }
        });
    }

    fn local(&mut self, local: &LocalDecl) {
        self.nested("Var-Declaration", |p| {
            p.type_spec(&local.ty);
            p.ident(&local.name.node);
            if local.is_array {
                p.line("Array");
            }
        });
    }

    fn type_spec(&mut self, ty: &Node<TypeSpec>) {
        self.line(match ty.node {
            TypeSpec::Int => "Int",
            TypeSpec::Void => "Void",
        });
    }

    fn ident(&mut self, name: &str) {
        self.line(&format!("Id: {name}"));
    }

    // ---- statements ----------------------------------------------------

    fn compound(&mut self, block: &CompoundStmt) {
        self.nested("CompStmt", |p| {
            for local in &block.locals {
                p.local(&local.node);
            }
            for stmt in &block.statements {
                p.statement(stmt);
            }
        });
    }

    fn statement(&mut self, stmt: &Node<Stmt>) {
        match &stmt.node {
            Stmt::Expr(expr) => self.expr(expr),
            Stmt::Compound(block) => self.compound(block),
            Stmt::If {
                cond,
                then_branch,
                else_branch,
            } => self.nested("if", |p| {
                p.expr(cond);
                for branch in [then_branch, else_branch].into_iter().flatten() {
                    p.statement(branch);
                }
            }),
            Stmt::While { cond, body } => self.nested("while", |p| {
                p.expr(cond);
                if let Some(body) = body {
                    p.statement(body);
                }
            }),
            Stmt::Return(value) => self.nested("return", |p| {
                if let Some(value) = value {
                    p.expr(value);
                }
            }),
        }
    }

    // ---- expressions ---------------------------------------------------

    fn expr(&mut self, expr: &Node<Expr>) {
        match &expr.node {
            Expr::Var(var) => self.var(var),
            Expr::Literal(value) => self.line(&format!("Const: {value}")),
            Expr::Assign { target, value } => self.nested("Assign", |p| {
                p.var(&target.node);
                p.expr(value);
            }),
            Expr::Binary(lhs, op, rhs) => self.nested(&format!("Op: {op}"), |p| {
                p.expr(lhs);
                p.expr(rhs);
            }),
            Expr::Call(call) => self.nested("Call", |p| {
                p.ident(&call.callee.node);
                if !call.args.is_empty() {
                    p.nested("Args", |p| {
                        for arg in &call.args {
                            p.expr(arg);
                        }
                    });
                }
            }),
        }
    }

    fn var(&mut self, var: &Var) {
        match var {
            Var::Scalar(name) => self.ident(name),
            Var::Indexed { name, index } => self.nested("Array", |p| {
                p.ident(&name.node);
                p.expr(index);
            }),
        }
    }
}
