//! Structural accessors over translated lambdas.
//!
//! Passes after the front-end use these to pull apart a `lambda` expression:
//!
//! ```text
//! (lambda (list <formal>...)
//!         (<_> (locals <decl>...) ...)
//!         (body <form>...))
//! ```
//!
//! The formal list may also be null when there are no formals. Every accessor except
//! [is_rest_arg] checks the shape it needs and returns a [ShapeError] when it isn't there.
//! That is a bug in the caller, not a condition to recover from.

use crate::error::ShapeError;
use crate::expr::TypedExpr;
use crate::head::{Head, DOTS};
use crate::value::TypedValue;
use arbor_symbols::Symbol;
use log::debug;

fn expect_lambda(lambda: &TypedExpr) -> Result<&TypedExpr, ShapeError> {
    lambda.expect_head(Head::Lambda).inspect_err(|e| {
        debug!("lambda accessor used on a non-lambda: {e}");
    })
}

/// Gets the formal argument expressions of a lambda
pub fn lam_args(lambda: &TypedExpr) -> Result<&[TypedValue], ShapeError> {
    let args = expect_lambda(lambda)?.expect_arg(0)?;
    if args.is_null() {
        return Ok(&[]);
    }
    Ok(args.expect_expr()?.expect_head(Head::List)?.args())
}

/// Gets the local variable declarations of a lambda
pub fn lam_locals(lambda: &TypedExpr) -> Result<&[TypedValue], ShapeError> {
    let vars = expect_lambda(lambda)?.expect_arg(1)?.expect_expr()?;
    let locals = vars.expect_arg(0)?.expect_expr()?;
    Ok(locals.expect_head(Head::Locals)?.args())
}

/// Gets the body forms of a lambda
pub fn lam_body(lambda: &TypedExpr) -> Result<&[TypedValue], ShapeError> {
    let body = expect_lambda(lambda)?.expect_arg(2)?.expect_expr()?;
    Ok(body.expect_head(Head::Body)?.args())
}

/// Gets the name declared by a declaration form.
///
/// A bare symbol declares itself, otherwise the form is an expression like `x::T` whose
/// first argument is the name.
pub fn decl_var(form: &TypedValue) -> Result<&Symbol, ShapeError> {
    if let Some(symbol) = form.as_symbol() {
        return Ok(symbol);
    }
    let name = form.expect_expr()?.expect_arg(0)?;
    name.as_symbol()
        .ok_or_else(|| ShapeError::ExpectedSymbol(name.kind()))
}

/// Checks if a formal argument is a rest argument, `x::T...`.
///
/// There is no dedicated tag for these. The reader gives `(:: x (call _ ... T))`, so this
/// looks for a type ascription whose type is a three argument call with the dots marker
/// in the middle.
pub fn is_rest_arg(arg: &TypedValue) -> bool {
    let Some(ascription) = arg.as_expr() else {
        return false;
    };
    if ascription.head() != &Head::Colons {
        return false;
    }
    let Some(ty) = ascription.arg(1).and_then(TypedValue::as_expr) else {
        return false;
    };
    ty.head() == &Head::Call
        && ty.len() == 3
        && ty
            .arg(1)
            .and_then(TypedValue::as_symbol)
            .is_some_and(|marker| marker == DOTS)
}
