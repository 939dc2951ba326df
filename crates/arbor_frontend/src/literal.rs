//! How literals in the generic tree become typed values.
//!
//! Exact integers are boxed in the narrowest of `Int32`, `Int64` and `UInt64` that holds
//! them, reals become `Float64`. Strings become symbols, except that the spellings
//! `true` and `false` become booleans. A string payload with exactly that content can't
//! be told apart from the boolean at this point, and is deliberately left that way.

use crate::error::{TranslateError, TranslateResult};
use arbor_ast::{BoxedNumber, TypedValue};
use arbor_reader::{GenericNode, GenericNumber};
use arbor_symbols::SymbolTable;

/// Boxes a number
pub fn classify_number(number: &GenericNumber) -> BoxedNumber {
    match *number {
        GenericNumber::Integer(n) => BoxedNumber::from_exact(n),
        GenericNumber::Real(f) => BoxedNumber::from_real(f),
    }
}

/// Turns decoded text into a boolean or a symbol
pub fn classify_text(text: &str, symbols: &SymbolTable) -> TypedValue {
    match text {
        "true" => TypedValue::Bool(true),
        "false" => TypedValue::Bool(false),
        name => TypedValue::Symbol(symbols.intern(name)),
    }
}

/// Decodes a string node and classifies its text
pub fn classify_string(node: &GenericNode, symbols: &SymbolTable) -> TranslateResult<TypedValue> {
    match node.decode() {
        Some(Ok(text)) => Ok(classify_text(text, symbols)),
        Some(Err(e)) => Err(TranslateError::malformed(format!(
            "string is not valid UTF-8: {e}"
        ))),
        None => Err(TranslateError::malformed("expected a string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_tiers() {
        assert_eq!(
            classify_number(&GenericNumber::Integer(5)),
            BoxedNumber::Int32(5)
        );
        assert_eq!(
            classify_number(&GenericNumber::Integer(1 << 31)),
            BoxedNumber::Int64(1 << 31)
        );
        assert_eq!(
            classify_number(&GenericNumber::Integer(1 << 63)),
            BoxedNumber::UInt64(1 << 63)
        );
        assert_eq!(
            classify_number(&GenericNumber::Real(0.5)),
            BoxedNumber::Float64(0.5)
        );
    }

    #[test]
    fn test_true_and_false_are_booleans() {
        let symbols = SymbolTable::new();
        assert_eq!(classify_text("true", &symbols), TypedValue::Bool(true));
        assert_eq!(classify_text("false", &symbols), TypedValue::Bool(false));
        assert!(symbols.is_empty());
    }

    #[test]
    fn test_other_text_is_symbol() {
        let symbols = SymbolTable::new();
        for name in ["x", "True", "true ", ""] {
            assert_eq!(
                classify_text(name, &symbols),
                TypedValue::Symbol(symbols.intern(name))
            );
        }
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let symbols = SymbolTable::new();
        let invalid = GenericNode::String(vec![0xc3_u8, 0x28].into());
        assert!(classify_string(&invalid, &symbols)
            .unwrap_err()
            .is_malformed());
    }
}
