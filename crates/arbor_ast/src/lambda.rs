//! Pre-built lambda objects

use crate::accessors;
use crate::error::ShapeError;
use crate::expr::TypedExpr;
use crate::value::TypedValue;
use arbor_symbols::Symbol;

/// Extra bindings captured alongside a lambda
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: Vec<(Symbol, TypedValue)>,
}

impl Environment {
    /// An environment with no bindings
    pub const fn empty() -> Self {
        Self { bindings: vec![] }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// A lambda ready for later passes: the raw `lambda` expression plus its environment.
///
/// The expression is checked to have the lambda shape when this is built, so the
/// accessors on it only fail if the tree was built by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct LambdaInfo {
    ast: TypedExpr,
    env: Environment,
}

impl LambdaInfo {
    /// Creates a new lambda info, checking that `ast` has the shape
    /// `(lambda <list or null> (<_> (locals ...) ...) (body ...))`
    pub fn new(ast: TypedExpr, env: Environment) -> Result<Self, ShapeError> {
        accessors::lam_args(&ast)?;
        accessors::lam_locals(&ast)?;
        accessors::lam_body(&ast)?;
        Ok(Self { ast, env })
    }

    /// The `lambda`-headed expression
    #[inline]
    pub fn ast(&self) -> &TypedExpr {
        &self.ast
    }

    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// The formal argument expressions
    pub fn args(&self) -> &[TypedValue] {
        accessors::lam_args(&self.ast).unwrap_or_default()
    }

    /// The local variable declarations
    pub fn locals(&self) -> &[TypedValue] {
        accessors::lam_locals(&self.ast).unwrap_or_default()
    }

    /// The body forms
    pub fn body(&self) -> &[TypedValue] {
        accessors::lam_body(&self.ast).unwrap_or_default()
    }

    /// Checks if the last formal argument is a rest argument
    pub fn is_variadic(&self) -> bool {
        self.args().last().is_some_and(accessors::is_rest_arg)
    }
}
