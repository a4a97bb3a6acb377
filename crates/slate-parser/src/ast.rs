//! Abstract Syntax Tree (AST) definitions for Slate.

use slate_core::{Span, Type};
use std::fmt;

use crate::control_flow::{If, While};

/// A complete Slate program (compilation unit).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

/// Function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub params: Vec<Parameter>,
    /// Declared return type; `None` when the definition omits `-> type`
    pub return_type: Option<Type>,
    pub body: Block,
    /// Span of the function name
    pub span: Span,
}

impl Function {
    /// The return type callers see: the declared one, or `void` when omitted.
    #[must_use]
    pub fn effective_return_type(&self) -> Type {
        self.return_type.unwrap_or(Type::Void)
    }
}

/// Function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub param_type: Type,
    pub span: Span,
}

/// A block of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub span: Span,
}

/// Statements in Slate.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Module import: `needs name;` (parsed but not supported yet)
    Needs { module: String, span: Span },

    /// Declaration without initializer: `let name: type;`
    Declaration {
        name: String,
        var_type: Type,
        span: Span,
    },

    /// Declaration with initializer: `let name[: type] = expr;`
    DeclarationAssign {
        name: String,
        /// `None` when the type is inferred from the initializer
        var_type: Option<Type>,
        initializer: Expression,
        span: Span,
    },

    /// Assignment statement: `name = expr;`
    Assignment {
        name: String,
        value: Expression,
        span: Span,
    },

    /// Function definition: `fn name(params) [-> type] { ... }`
    Function(Function),

    /// If statement with optional else-if chain and else block
    If(If),

    /// While loop
    While(While),

    /// Nested block: `{ ... }`
    Block(Block),

    /// Return statement: `return [expr];`
    Return {
        value: Option<Expression>,
        span: Span,
    },

    /// `break;`
    Break { span: Span },

    /// `continue;`
    Continue { span: Span },

    /// Expression statement: `expr;`
    Expression { expression: Expression, span: Span },

    /// A statement the parser could not parse, recorded at the offending token
    Error {
        text: String,
        reason: String,
        span: Span,
    },
}

impl Statement {
    /// Returns the span of this statement.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Needs { span, .. }
            | Self::Declaration { span, .. }
            | Self::DeclarationAssign { span, .. }
            | Self::Assignment { span, .. }
            | Self::Return { span, .. }
            | Self::Break { span }
            | Self::Continue { span }
            | Self::Expression { span, .. }
            | Self::Error { span, .. } => *span,
            Self::Function(function) => function.span,
            Self::If(if_stmt) => if_stmt.span,
            Self::While(while_loop) => while_loop.span,
            Self::Block(block) => block.span,
        }
    }
}

/// Expressions in Slate.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Integer literal
    Integer { value: i32, span: Span },

    /// String literal (escapes already resolved)
    String { value: String, span: Span },

    /// Boolean literal
    Boolean { value: bool, span: Span },

    /// Identifier reference
    Identifier { name: String, span: Span },

    /// Binary operation: `left op right`
    Binary {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
        span: Span,
    },

    /// Unary operation: `op expr`
    Unary {
        operator: UnaryOperator,
        operand: Box<Expression>,
        span: Span,
    },

    /// Function call: `name(args...)`
    Call {
        callee: String,
        arguments: Vec<Expression>,
        span: Span,
    },
}

impl Expression {
    /// Returns the span of this expression.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Integer { span, .. }
            | Self::String { span, .. }
            | Self::Boolean { span, .. }
            | Self::Identifier { span, .. }
            | Self::Binary { span, .. }
            | Self::Unary { span, .. }
            | Self::Call { span, .. } => *span,
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Arithmetic (`+` also concatenates strings)
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,

    // Ordering
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // Equality
    Equal,
    NotEqual,

    // Logical
    And,
    Or,
}

impl BinaryOperator {
    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Modulo
        )
    }

    /// `<`, `<=`, `>`, `>=`: integer operands, boolean result.
    #[must_use]
    pub const fn is_ordering(self) -> bool {
        matches!(
            self,
            Self::Less | Self::LessEqual | Self::Greater | Self::GreaterEqual
        )
    }

    #[must_use]
    pub const fn is_equality(self) -> bool {
        matches!(self, Self::Equal | Self::NotEqual)
    }

    #[must_use]
    pub const fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "&&",
            Self::Or => "||",
        };
        f.write_str(symbol)
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
    Not,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => f.write_str("-"),
            Self::Not => f.write_str("!"),
        }
    }
}
