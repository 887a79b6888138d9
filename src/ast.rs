use std::hash::{Hash, Hasher};

use ordered_float::OrderedFloat;

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` is a closed set of four variants. Every value in the language is an
/// `f64`, so there are no types to track; names and operators are stored
/// uninterpreted and given meaning by whichever stage consumes the tree.
///
/// Children are exclusively owned: a node owns its subexpressions, nothing
/// else refers to them, and dropping a node drops the whole subtree. Nodes
/// are not mutated after construction.
#[derive(Debug, Clone)]
pub enum Expr {
    /// A numeric literal such as `1.0`.
    Number {
        /// The constant value.
        value: f64,
    },
    /// Reference to a variable by name, such as `x`.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A binary operation such as `x + 1`.
    Binary {
        /// The operator character, e.g. `+` or `<`.
        op:  char,
        /// Left operand.
        lhs: Box<Self>,
        /// Right operand.
        rhs: Box<Self>,
    },
    /// Function call expression, such as `sin(x)`.
    Call {
        /// Name of the function being called.
        callee: String,
        /// Arguments to the function, in source order.
        args:   Vec<Self>,
    },
}

/// The variant of an [`Expr`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    /// [`Expr::Number`]
    Number,
    /// [`Expr::Variable`]
    Variable,
    /// [`Expr::Binary`]
    Binary,
    /// [`Expr::Call`]
    Call,
}

impl Expr {
    /// Creates a numeric literal.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number { value }
    }

    /// Creates a variable reference.
    ///
    /// Whether the variable exists is decided by a later stage.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// Creates a binary operation, taking ownership of both operands.
    ///
    /// ## Example
    /// ```
    /// use kaleido::ast::Expr;
    ///
    /// let sum = Expr::binary('+', Expr::variable("x"), Expr::number(1.0));
    ///
    /// let Expr::Binary { op, lhs, rhs } = &sum else {
    ///     unreachable!()
    /// };
    /// assert_eq!(*op, '+');
    /// assert_eq!(**lhs, Expr::variable("x"));
    /// assert_eq!(**rhs, Expr::number(1.0));
    /// ```
    #[must_use]
    pub fn binary(op: char, lhs: Self, rhs: Self) -> Self {
        Self::Binary { op,
                       lhs: Box::new(lhs),
                       rhs: Box::new(rhs) }
    }

    /// Creates a call, taking ownership of the arguments.
    ///
    /// An empty argument list is valid.
    ///
    /// ## Example
    /// ```
    /// use kaleido::ast::{Expr, ExprKind};
    ///
    /// let call = Expr::call("fib", vec![Expr::number(10.0)]);
    ///
    /// assert_eq!(call.kind(), ExprKind::Call);
    /// ```
    pub fn call(callee: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Call { callee: callee.into(),
                     args }
    }

    /// Gets the variant of `self`.
    #[must_use]
    pub const fn kind(&self) -> ExprKind {
        match self {
            Self::Number { .. } => ExprKind::Number,
            Self::Variable { .. } => ExprKind::Variable,
            Self::Binary { .. } => ExprKind::Binary,
            Self::Call { .. } => ExprKind::Call,
        }
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number { value: a }, Self::Number { value: b }) => {
                OrderedFloat(*a) == OrderedFloat(*b)
            },
            (Self::Variable { name: a }, Self::Variable { name: b }) => a == b,
            (Self::Binary { op: op_a,
                            lhs: lhs_a,
                            rhs: rhs_a, },
             Self::Binary { op: op_b,
                            lhs: lhs_b,
                            rhs: rhs_b, }) => op_a == op_b && lhs_a == lhs_b && rhs_a == rhs_b,
            (Self::Call { callee: callee_a,
                          args: args_a, },
             Self::Call { callee: callee_b,
                          args: args_b, }) => callee_a == callee_b && args_a == args_b,
            _ => false,
        }
    }
}

impl Eq for Expr {}

impl Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Self::Number { value } => OrderedFloat(*value).hash(state),
            Self::Variable { name } => name.hash(state),
            Self::Binary { op, lhs, rhs } => {
                op.hash(state);
                lhs.hash(state);
                rhs.hash(state);
            },
            Self::Call { callee, args } => {
                callee.hash(state);
                args.hash(state);
            },
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}
