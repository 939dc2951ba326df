//! Reads generic trees from their s-expression text form

use crate::node::GenericNode;
use crate::reader::{ReadError, ReadResult, TreeReader};
use datum_parsing::parse_top_level;
use nom::Finish;
use tracing::trace;

mod datum_parsing;

/// The default limit on how deeply lists may nest
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// A [TreeReader] for s-expressions.
///
/// * `( ... )` lists and `(a . b)` pairs
/// * `"..."` strings, with `\\ \" \n \r \t \u{..}` escapes
/// * exact unsigned integers and reals (`1.5`, `-2e3`)
/// * anything else up to a delimiter is a bare atom
/// * `;` starts a comment running to the end of the line
///
/// Only one datum is read, anything after it is an error.
#[derive(Debug, Clone)]
pub struct SexprReader {
    max_depth: usize,
}

impl SexprReader {
    /// Creates a reader with the default depth limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how deeply lists may nest before reading fails
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for SexprReader {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl TreeReader for SexprReader {
    fn read_str(&self, text: &str) -> ReadResult<Option<GenericNode>> {
        let (rest, node) = parse_top_level(text, self.max_depth).finish()?;
        if !rest.is_empty() {
            return Err(ReadError::TrailingInput(rest.to_string()));
        }
        trace!("read {}", if node.is_some() { "a datum" } else { "nothing" });
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use test_log::test;

    #[test]
    fn test_read_nothing() {
        let reader = SexprReader::new();
        assert_eq!(reader.read_str("").unwrap(), None);
        assert_eq!(reader.read_str("  ; only a comment\n").unwrap(), None);
    }

    #[test]
    fn test_read_tree() {
        let reader = SexprReader::new();
        let node = reader
            .read_str(r#"("=" "x" ("call" "+" 1 2.5))"#)
            .unwrap()
            .expect("should read a datum");
        assert_eq!(node.nth(0), Some(&GenericNode::string("=")));
        let call = node.nth(2).expect("has a call");
        assert_eq!(call.nth(3), Some(&GenericNode::real(2.5)));
    }

    #[test]
    fn test_trailing_input() {
        let reader = SexprReader::new();
        assert!(matches!(
            reader.read_str("(1) (2)"),
            Err(ReadError::TrailingInput(rest)) if rest == "(2)"
        ));
    }

    #[test]
    fn test_parse_error() {
        let reader = SexprReader::new();
        assert!(matches!(reader.read_str("(1 2"), Err(ReadError::Parse(_))));
        assert!(matches!(
            reader.read_str("99999999999999999999"),
            Err(ReadError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_error_is_bounded() {
        let text = format!("{}{}", "(".repeat(300), "atom ".repeat(200_000));
        let Err(ReadError::Parse(error)) = SexprReader::new().read_str(&text) else {
            panic!("lists nested past the limit should not parse");
        };
        assert_eq!(error.reason, "list nested too deeply");
        assert_eq!(error.offset, DEFAULT_MAX_DEPTH + 1);
        assert!(error.excerpt.chars().count() <= 32);
        assert!(error
            .to_string()
            .starts_with("list nested too deeply at byte 257"));
        let kept = error.excerpt.len()
            + error
                .trace
                .iter()
                .map(|(_, what)| what.len())
                .sum::<usize>();
        assert!(kept < 64 * 1024, "kept {kept} bytes for {} bytes of input", text.len());
    }

    #[test]
    fn test_max_depth() {
        let reader = SexprReader::new().with_max_depth(2);
        assert!(reader.read_str("((1))").is_ok());
        assert!(matches!(reader.read_str("(((1)))"), Err(ReadError::Parse(_))));
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().expect("could not create temp file");
        writeln!(file, r#"("file" ("line" 1) "x")"#).unwrap();
        let node = SexprReader::new().read_file(file.path()).unwrap();
        assert_eq!(node.iter().count(), 3);
    }

    #[test]
    fn test_read_empty_file() {
        let file = tempfile::NamedTempFile::new().expect("could not create temp file");
        let node = SexprReader::new().read_file(file.path()).unwrap();
        assert!(node.is_null());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SexprReader::new().read_file(&dir.path().join("missing.scm"));
        assert!(matches!(result, Err(ReadError::Io(_))));
    }
}
