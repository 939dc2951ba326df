//! Detects the reader's error marker

use crate::error::{TranslateError, TranslateResult};
use arbor_reader::GenericNode;
use tracing::debug;

/// The node kind the reader uses to report a syntax error
pub const ERROR_MARKER: &str = "error";

/// Checks if a tree is the reader's error report, `("error" (_ "message" ...) ...)`.
///
/// Only the root is looked at. Any root that isn't a pair headed by the string `"error"`
/// passes.
pub fn syntax_error_check(root: &GenericNode) -> TranslateResult<()> {
    let Some(pair) = root.as_pair() else {
        return Ok(());
    };
    if !matches!(pair.head().decode(), Some(Ok(ERROR_MARKER))) {
        return Ok(());
    }
    let message = root
        .nth(1)
        .and_then(|detail| detail.nth(1))
        .and_then(GenericNode::decode);
    match message {
        Some(Ok(message)) => {
            debug!(reason = message, "reader reported a syntax error");
            Err(TranslateError::Syntax(message.to_string()))
        }
        Some(Err(e)) => Err(TranslateError::malformed(format!(
            "syntax error message is not valid UTF-8: {e}"
        ))),
        None => Err(TranslateError::malformed(
            "syntax error report has no message",
        )),
    }
}
