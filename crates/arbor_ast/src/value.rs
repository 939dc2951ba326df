//! Values that can appear as expression arguments

use crate::error::ShapeError;
use crate::expr::TypedExpr;
use crate::head::Head;
use crate::lambda::LambdaInfo;
use arbor_symbols::Symbol;
use bytes::Bytes;

/// A boxed numeric literal, recording the exact width it was given.
///
/// Exact integers should be built with [BoxedNumber::from_exact], which picks the smallest
/// width able to hold the value. Nothing is ever truncated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoxedNumber {
    Int32(i32),
    Int64(i64),
    UInt64(u64),
    Float64(f64),
}

impl BoxedNumber {
    /// Boxes an exact, non-negative integer.
    ///
    /// Values above `i64::MAX` become [BoxedNumber::UInt64], values above `i32::MAX`
    /// become [BoxedNumber::Int64], everything else is an [BoxedNumber::Int32].
    pub fn from_exact(n: u64) -> Self {
        match (i64::try_from(n), i32::try_from(n)) {
            (Err(_), _) => BoxedNumber::UInt64(n),
            (Ok(wide), Err(_)) => BoxedNumber::Int64(wide),
            (Ok(_), Ok(narrow)) => BoxedNumber::Int32(narrow),
        }
    }

    /// Boxes an inexact number
    #[inline]
    pub fn from_real(f: f64) -> Self {
        BoxedNumber::Float64(f)
    }
}

/// A value in the typed syntax tree
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Expr(TypedExpr),
    Symbol(Symbol),
    Number(BoxedNumber),
    /// A string literal, as the bytes the reader gave
    String(Bytes),
    Bool(bool),
    /// The canonical empty value. There is only ever this one null.
    Null,
    /// A pre-built lambda, only found as the argument of a `quote`
    LambdaInfo(Box<LambdaInfo>),
}

impl TypedValue {
    /// A short name for the kind of value, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            TypedValue::Expr(_) => "an expression",
            TypedValue::Symbol(_) => "a symbol",
            TypedValue::Number(_) => "a number",
            TypedValue::String(_) => "a string",
            TypedValue::Bool(_) => "a boolean",
            TypedValue::Null => "null",
            TypedValue::LambdaInfo(_) => "a lambda",
        }
    }

    /// Gets this value as an expression, if it is one
    pub fn as_expr(&self) -> Option<&TypedExpr> {
        match self {
            TypedValue::Expr(expr) => Some(expr),
            _ => None,
        }
    }

    /// Gets this value as an expression, or a [ShapeError] naming what it was instead
    pub fn expect_expr(&self) -> Result<&TypedExpr, ShapeError> {
        self.as_expr()
            .ok_or_else(|| ShapeError::ExpectedExpr(self.kind()))
    }

    /// Gets this value as a symbol, if it is one
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            TypedValue::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    /// Gets this value as a lambda, if it is one
    pub fn as_lambda_info(&self) -> Option<&LambdaInfo> {
        match self {
            TypedValue::LambdaInfo(info) => Some(info),
            _ => None,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, TypedValue::Null)
    }

    /// Checks if this value is an expression with the given head
    pub fn is_expr_with(&self, head: &Head) -> bool {
        self.as_expr().is_some_and(|expr| expr.head() == head)
    }
}

impl From<TypedExpr> for TypedValue {
    fn from(value: TypedExpr) -> Self {
        TypedValue::Expr(value)
    }
}

impl From<Symbol> for TypedValue {
    fn from(value: Symbol) -> Self {
        TypedValue::Symbol(value)
    }
}

impl From<BoxedNumber> for TypedValue {
    fn from(value: BoxedNumber) -> Self {
        TypedValue::Number(value)
    }
}

impl From<bool> for TypedValue {
    fn from(value: bool) -> Self {
        TypedValue::Bool(value)
    }
}

impl From<LambdaInfo> for TypedValue {
    fn from(value: LambdaInfo) -> Self {
        TypedValue::LambdaInfo(Box::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_width_tiers() {
        assert_eq!(BoxedNumber::from_exact(5), BoxedNumber::Int32(5));
        assert_eq!(
            BoxedNumber::from_exact(i32::MAX as u64),
            BoxedNumber::Int32(i32::MAX)
        );
        assert_eq!(
            BoxedNumber::from_exact(1 << 31),
            BoxedNumber::Int64(1 << 31)
        );
        assert_eq!(
            BoxedNumber::from_exact(i64::MAX as u64),
            BoxedNumber::Int64(i64::MAX)
        );
        assert_eq!(
            BoxedNumber::from_exact(1 << 63),
            BoxedNumber::UInt64(1 << 63)
        );
        assert_eq!(
            BoxedNumber::from_exact(u64::MAX),
            BoxedNumber::UInt64(u64::MAX)
        );
    }

    #[test]
    fn test_real_is_float() {
        let n = BoxedNumber::from_real(2.5);
        assert_eq!(n, BoxedNumber::Float64(2.5));
    }

    #[test]
    fn test_expect_expr_names_kind() {
        let err = TypedValue::Bool(true).expect_expr().unwrap_err();
        assert_eq!(err, ShapeError::ExpectedExpr("a boolean"));
        assert_eq!(err.to_string(), "expected an expression, found a boolean");
    }
}
