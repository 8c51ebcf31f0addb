//! Abstract Syntax Tree definitions for C-Minus
//!
//! Every syntactic form is its own type with named fields, so illegal child combinations cannot be built. Sequences
//! (declarations, parameters, statements, arguments) are ordered `Vec`s owned by their parent.
//!
//! All nodes are wrapped in [`Node`], which records the source line and the (semantic-phase) type tag.
//! [`Node::new`] is the single construction primitive.

use std::fmt;

use cminus_core::lang::operators::{self, OperatorId};

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// Identifier spelling.
pub type Ident = String;

// ============================================================================
// Node kinds and the node factory
// ============================================================================

/// Tag naming the syntactic form of a node.
///
/// This is the flat view consumers (dumpers, later phases) can switch on without matching every payload type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // Type markers
    Int,
    Void,
    // Leaves
    Id,
    Const,
    // References
    Array,
    // Declarations
    VarDecl,
    ArrayDecl,
    FunDecl,
    Params,
    Param,
    // Statements
    CompoundStmt,
    SelectionStmt,
    IterationStmt,
    ReturnStmt,
    // Expressions
    Assign,
    Op,
    Call,
    Args,
}

impl NodeKind {
    /// Type tag a freshly constructed node of this kind starts with.
    ///
    /// Operators, identifiers and the `int` marker default to [`ExpType::Integer`]; everything else is left for the
    /// semantic phase to fill in.
    pub fn default_type(self) -> Option<ExpType> {
        match self {
            NodeKind::Op | NodeKind::Id | NodeKind::Int => Some(ExpType::Integer),
            _ => None,
        }
    }
}

/// Expression type tag used by later phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpType {
    Void,
    Integer,
    Boolean,
}

/// Anything that can live inside a [`Node`].
pub trait Kinded {
    fn kind(&self) -> NodeKind;
}

/// A tree node: payload plus source line and type tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    pub node: T,
    pub line: usize,
    pub ty: Option<ExpType>,
}

impl<T: Kinded> Node<T> {
    /// Construct a node stamped with `line`, applying the kind-specific type default.
    pub fn new(node: T, line: usize) -> Self {
        let ty = node.kind().default_type();
        Self { node, line, ty }
    }

    pub fn kind(&self) -> NodeKind {
        self.node.kind()
    }
}

// ============================================================================
// Program and declarations
// ============================================================================

/// A program is a sequence of top-level declarations
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub declarations: Vec<Node<Declaration>>,
}

/// `int` / `void` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSpec {
    Int,
    Void,
}

/// Top-level declarations
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// `int x;`
    Var(VarDecl),
    /// `int x[10];`
    Array(ArrayDecl),
    /// `int f(void) { ... }`
    Function(FunctionDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub ty: Node<TypeSpec>,
    pub name: Node<Ident>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayDecl {
    pub ty: Node<TypeSpec>,
    pub name: Node<Ident>,
    pub size: Node<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub return_ty: Node<TypeSpec>,
    pub name: Node<Ident>,
    pub params: Node<Params>,
    pub body: Node<CompoundStmt>,
}

/// Formal parameter list.
#[derive(Debug, Clone, PartialEq)]
pub enum Params {
    /// `(void)`: no parameters.
    Void,
    List(Vec<Node<Param>>),
}

impl Params {
    pub fn len(&self) -> usize {
        match self {
            Params::Void => 0,
            Params::List(params) => params.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `int a` or `int a[]`. No bound is recorded for array parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub ty: Node<TypeSpec>,
    pub name: Node<Ident>,
    pub is_array: bool,
}

/// Declaration at the head of a compound statement. No bound is recorded for local arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalDecl {
    pub ty: Node<TypeSpec>,
    pub name: Node<Ident>,
    pub is_array: bool,
}

// ============================================================================
// Statements
// ============================================================================

/// `{ locals statements }`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundStmt {
    pub locals: Vec<Node<LocalDecl>>,
    pub statements: Vec<Node<Stmt>>,
}

/// Statements. The empty statement `;` produces no node at all.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expr(Node<Expr>),
    Compound(CompoundStmt),
    If {
        cond: Node<Expr>,
        then_branch: Option<Box<Node<Stmt>>>,
        else_branch: Option<Box<Node<Stmt>>>,
    },
    While {
        cond: Node<Expr>,
        body: Option<Box<Node<Stmt>>>,
    },
    Return(Option<Node<Expr>>),
}

// ============================================================================
// Expressions
// ============================================================================

/// Variable reference: `x` or `x[i]`.
#[derive(Debug, Clone, PartialEq)]
pub enum Var {
    Scalar(Ident),
    Indexed { name: Node<Ident>, index: Box<Node<Expr>> },
}

/// Function call. An empty argument list is `f()`; arity is not checked here.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub callee: Node<Ident>,
    pub args: Vec<Node<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Var(Var),
    Literal(i64),
    Assign {
        target: Box<Node<Var>>,
        value: Box<Node<Expr>>,
    },
    Binary(Box<Node<Expr>>, BinaryOp, Box<Node<Expr>>),
    Call(Call),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Relational
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    // Additive
    Add,
    Sub,
    // Multiplicative
    Mul,
    Div,
}

impl BinaryOp {
    /// Map a scanned operator to its binary-expression form (`=` has none).
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        Some(match id {
            OperatorId::EqEq => BinaryOp::Eq,
            OperatorId::NotEq => BinaryOp::NotEq,
            OperatorId::Lt => BinaryOp::Lt,
            OperatorId::LtEq => BinaryOp::LtEq,
            OperatorId::Gt => BinaryOp::Gt,
            OperatorId::GtEq => BinaryOp::GtEq,
            OperatorId::Plus => BinaryOp::Add,
            OperatorId::Minus => BinaryOp::Sub,
            OperatorId::Star => BinaryOp::Mul,
            OperatorId::Slash => BinaryOp::Div,
            OperatorId::Eq => return None,
        })
    }

    /// The operator token this node was built from.
    pub fn operator_id(self) -> OperatorId {
        match self {
            BinaryOp::Eq => OperatorId::EqEq,
            BinaryOp::NotEq => OperatorId::NotEq,
            BinaryOp::Lt => OperatorId::Lt,
            BinaryOp::LtEq => OperatorId::LtEq,
            BinaryOp::Gt => OperatorId::Gt,
            BinaryOp::GtEq => OperatorId::GtEq,
            BinaryOp::Add => OperatorId::Plus,
            BinaryOp::Sub => OperatorId::Minus,
            BinaryOp::Mul => OperatorId::Star,
            BinaryOp::Div => OperatorId::Slash,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(operators::as_str(self.operator_id()))
    }
}

// ============================================================================
// Kind tags
// ============================================================================

impl Kinded for TypeSpec {
    fn kind(&self) -> NodeKind {
        match self {
            TypeSpec::Int => NodeKind::Int,
            TypeSpec::Void => NodeKind::Void,
        }
    }
}

impl Kinded for Ident {
    fn kind(&self) -> NodeKind {
        NodeKind::Id
    }
}

impl Kinded for i64 {
    fn kind(&self) -> NodeKind {
        NodeKind::Const
    }
}

impl Kinded for Declaration {
    fn kind(&self) -> NodeKind {
        match self {
            Declaration::Var(_) => NodeKind::VarDecl,
            Declaration::Array(_) => NodeKind::ArrayDecl,
            Declaration::Function(_) => NodeKind::FunDecl,
        }
    }
}

impl Kinded for Params {
    fn kind(&self) -> NodeKind {
        NodeKind::Params
    }
}

impl Kinded for Param {
    fn kind(&self) -> NodeKind {
        NodeKind::Param
    }
}

impl Kinded for LocalDecl {
    fn kind(&self) -> NodeKind {
        NodeKind::VarDecl
    }
}

impl Kinded for CompoundStmt {
    fn kind(&self) -> NodeKind {
        NodeKind::CompoundStmt
    }
}

impl Kinded for Stmt {
    fn kind(&self) -> NodeKind {
        match self {
            Stmt::Expr(expr) => expr.kind(),
            Stmt::Compound(_) => NodeKind::CompoundStmt,
            Stmt::If { .. } => NodeKind::SelectionStmt,
            Stmt::While { .. } => NodeKind::IterationStmt,
            Stmt::Return(_) => NodeKind::ReturnStmt,
        }
    }
}

impl Kinded for Var {
    fn kind(&self) -> NodeKind {
        match self {
            Var::Scalar(_) => NodeKind::Id,
            Var::Indexed { .. } => NodeKind::Array,
        }
    }
}

impl Kinded for Expr {
    fn kind(&self) -> NodeKind {
        match self {
            Expr::Var(var) => var.kind(),
            Expr::Literal(_) => NodeKind::Const,
            Expr::Assign { .. } => NodeKind::Assign,
            Expr::Binary(..) => NodeKind::Op,
            Expr::Call(_) => NodeKind::Call,
        }
    }
}

impl From<Node<Var>> for Node<Expr> {
    fn from(var: Node<Var>) -> Self {
        Node {
            node: Expr::Var(var.node),
            line: var.line,
            ty: var.ty,
        }
    }
}

// ============================================================================
// Visitor trait for AST traversal
// ============================================================================

pub trait Visitor {
    fn visit_program(&mut self, program: &Program) {
        for decl in &program.declarations {
            self.visit_declaration(decl);
        }
    }

    fn visit_declaration(&mut self, decl: &Node<Declaration>) {
        if let Declaration::Function(f) = &decl.node {
            self.visit_function(f);
        }
    }

    fn visit_function(&mut self, func: &FunctionDecl) {
        self.visit_compound(&func.body.node);
    }

    fn visit_compound(&mut self, block: &CompoundStmt) {
        for stmt in &block.statements {
            self.visit_statement(stmt);
        }
    }

    fn visit_statement(&mut self, stmt: &Node<Stmt>) {
        match &stmt.node {
            Stmt::Expr(expr) => self.visit_expr(expr),
            Stmt::Compound(block) => self.visit_compound(block),
            Stmt::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.visit_expr(cond);
                if let Some(then_branch) = then_branch {
                    self.visit_statement(then_branch);
                }
                if let Some(else_branch) = else_branch {
                    self.visit_statement(else_branch);
                }
            }
            Stmt::While { cond, body } => {
                self.visit_expr(cond);
                if let Some(body) = body {
                    self.visit_statement(body);
                }
            }
            Stmt::Return(value) => {
                if let Some(value) = value {
                    self.visit_expr(value);
                }
            }
        }
    }

    fn visit_expr(&mut self, _expr: &Node<Expr>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_type_defaults() {
        assert_eq!(Node::new(TypeSpec::Int, 1).ty, Some(ExpType::Integer));
        assert_eq!(Node::new(TypeSpec::Void, 1).ty, None);
        assert_eq!(Node::new("x".to_string(), 1).ty, Some(ExpType::Integer));
        assert_eq!(Node::new(7_i64, 1).ty, None);

        let lhs = Box::new(Node::new(Expr::Literal(1), 2));
        let rhs = Box::new(Node::new(Expr::Literal(2), 2));
        let op = Node::new(Expr::Binary(lhs, BinaryOp::Add, rhs), 2);
        assert_eq!(op.kind(), NodeKind::Op);
        assert_eq!(op.ty, Some(ExpType::Integer));
        assert_eq!(op.line, 2);
    }

    #[test]
    fn test_var_to_expr_keeps_line_and_type() {
        let var = Node::new(Var::Scalar("a".to_string()), 4);
        let expr: Node<Expr> = var.into();
        assert_eq!(expr.line, 4);
        assert_eq!(expr.kind(), NodeKind::Id);
        assert_eq!(expr.ty, Some(ExpType::Integer));
    }

    #[test]
    fn test_binary_op_operator_mapping() {
        for op in [
            BinaryOp::Eq,
            BinaryOp::NotEq,
            BinaryOp::Lt,
            BinaryOp::LtEq,
            BinaryOp::Gt,
            BinaryOp::GtEq,
            BinaryOp::Add,
            BinaryOp::Sub,
            BinaryOp::Mul,
            BinaryOp::Div,
        ] {
            assert_eq!(BinaryOp::from_operator(op.operator_id()), Some(op));
        }
        assert_eq!(BinaryOp::from_operator(OperatorId::Eq), None);
        assert_eq!(BinaryOp::LtEq.to_string(), "<=");
    }
}
