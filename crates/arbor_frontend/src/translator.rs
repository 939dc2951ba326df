//! Translates generic trees into typed values

use crate::error::{TranslateError, TranslateResult};
use crate::literal::{classify_number, classify_string};
use arbor_ast::{Environment, Head, LambdaInfo, TypedExpr, TypedValue};
use arbor_reader::{GenericNode, Pair};
use arbor_symbols::SymbolTable;
use tracing::trace;

/// The default limit on how deeply a tree may nest.
///
/// Unoptimized builds need several kilobytes of stack per level, this fits in a 2 MiB
/// thread stack. Matches the s-expression reader's default.
pub const DEFAULT_MAX_DEPTH: usize = arbor_reader::sexpr::DEFAULT_MAX_DEPTH;

/// Translates generic trees, interning names into a borrowed [SymbolTable].
///
/// Translation recurses once per level of nesting, so trees deeper than
/// [Translator::max_depth] are rejected with [TranslateError::TooDeep] instead.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'s> {
    symbols: &'s SymbolTable,
    max_depth: usize,
}

impl<'s> Translator<'s> {
    /// Creates a translator with the default depth limit
    pub fn new(symbols: &'s SymbolTable) -> Self {
        Self {
            symbols,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the depth limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Translates a tree
    pub fn translate(&self, node: &GenericNode) -> TranslateResult<TypedValue> {
        self.translate_at(node, 0)
    }

    fn translate_at(&self, node: &GenericNode, depth: usize) -> TranslateResult<TypedValue> {
        if depth >= self.max_depth {
            return Err(TranslateError::TooDeep(self.max_depth));
        }
        match node {
            GenericNode::Number(number) => Ok(TypedValue::Number(classify_number(number))),
            GenericNode::String(_) => classify_string(node, self.symbols),
            GenericNode::Null => Ok(TypedValue::Null),
            GenericNode::Pair(pair) => self.translate_pair(pair, depth),
            GenericNode::Symbol(name) => Err(TranslateError::malformed(format!(
                "unexpected bare atom `{name}`"
            ))),
        }
    }

    fn translate_pair(&self, pair: &Pair, depth: usize) -> TranslateResult<TypedValue> {
        let name = match pair.head().decode() {
            Some(Ok(name)) => name,
            Some(Err(e)) => {
                return Err(TranslateError::malformed(format!(
                    "node kind is not valid UTF-8: {e}"
                )))
            }
            None => {
                return Err(TranslateError::malformed(
                    "node kind must be a string",
                ))
            }
        };
        if name == Head::String.as_str() {
            return string_literal(pair.rest());
        }

        let head = Head::from_name(name, self.symbols);
        trace!(%head, depth, "translating node");
        let mut elements = pair.rest().iter();
        let args = elements
            .by_ref()
            .map(|element| self.translate_at(element, depth + 1))
            .collect::<TranslateResult<Vec<_>>>()?;
        if !elements.remainder().is_null() {
            return Err(TranslateError::malformed(format!(
                "`{head}` node is not a proper list"
            )));
        }
        let expr = TypedExpr::new(head, args)?;

        if expr.head() == &Head::Lambda {
            let info = LambdaInfo::new(expr, Environment::empty())?;
            let quoted = TypedExpr::new(Head::Quote, [TypedValue::from(info)])?;
            return Ok(TypedValue::Expr(quoted));
        }
        Ok(TypedValue::Expr(expr))
    }
}

/// `("string" <payload>)` is an explicit string literal, kept as bytes rather than
/// becoming a symbol
fn string_literal(rest: &GenericNode) -> TranslateResult<TypedValue> {
    let mut elements = rest.iter();
    match (elements.next(), elements.next()) {
        (Some(GenericNode::String(bytes)), None) if elements.remainder().is_null() => {
            Ok(TypedValue::String(bytes.clone()))
        }
        _ => Err(TranslateError::malformed(
            "`string` node must hold exactly one string",
        )),
    }
}
