use crate::error::{BuildFrontendError, TranslateResult};
use crate::syntax_check::syntax_error_check;
use crate::translator::{Translator, DEFAULT_MAX_DEPTH};
use arbor_ast::TypedValue;
use arbor_reader::{SexprReader, TreeReader};
use arbor_symbols::SymbolTable;
use std::fmt::{Debug, Formatter};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, debug_span, trace};

/// A front-end session: a reader, the symbol table everything is interned into, and the
/// translation settings.
///
/// The symbol table lives as long as the session unless it was shared through
/// [FrontendBuilder::symbols]. Must be configured using a [FrontendBuilder].
pub struct Frontend {
    reader: Box<dyn TreeReader>,
    symbols: Arc<SymbolTable>,
    max_depth: usize,
}

impl Frontend {
    /// Creates the default FrontendBuilder
    #[inline]
    pub fn builder() -> FrontendBuilder {
        FrontendBuilder::new()
    }

    /// Reads and translates one input line.
    ///
    /// Returns `Ok(None)` if the reader found nothing to read.
    pub fn parse_input_line(&self, text: &str) -> TranslateResult<Option<TypedValue>> {
        let _span = debug_span!("parse_input_line", len = text.len()).entered();
        let Some(tree) = self.reader.read_str(text)? else {
            trace!("no input");
            return Ok(None);
        };
        syntax_error_check(&tree)?;
        self.translator().translate(&tree).map(Some)
    }

    /// Reads and translates a whole file.
    ///
    /// A file whose tree isn't a pair, like an empty one, translates to null.
    pub fn parse_file(&self, path: &Path) -> TranslateResult<TypedValue> {
        let _span = debug_span!("parse_file", path = ?path).entered();
        let tree = self.reader.read_file(path)?;
        syntax_error_check(&tree)?;
        if !tree.is_pair() {
            debug!("file has no tree");
            return Ok(TypedValue::Null);
        }
        self.translator().translate(&tree)
    }

    /// A translator sharing this session's symbol table and settings
    pub fn translator(&self) -> Translator<'_> {
        Translator::new(&self.symbols).with_max_depth(self.max_depth)
    }

    /// The symbol table of this session
    pub fn symbols(&self) -> &Arc<SymbolTable> {
        &self.symbols
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Ends this session, releasing its hold on the symbol table
    pub fn shutdown(self) {
        debug!(
            symbols = self.symbols.len(),
            shared = Arc::strong_count(&self.symbols) > 1,
            "shutting down front-end"
        );
    }
}

impl Debug for Frontend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frontend")
            .field("symbols", &self.symbols.len())
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

/// Builder for creating a [Frontend] instance.
pub struct FrontendBuilder {
    /// How deeply trees may nest before translation is refused
    pub max_depth: usize,
    symbols: Option<Arc<SymbolTable>>,
    reader: Option<Box<dyn TreeReader>>,
}

impl FrontendBuilder {
    /// Creates a FrontendBuilder with default settings
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how deeply trees may nest
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Shares an existing symbol table instead of creating a new one
    pub fn symbols(mut self, symbols: Arc<SymbolTable>) -> Self {
        self.symbols = Some(symbols);
        self
    }

    /// Sets the reader. Defaults to a [SexprReader].
    pub fn reader<R: TreeReader + 'static>(mut self, reader: R) -> Self {
        self.reader = Some(Box::new(reader));
        self
    }

    /// Builds a [Frontend] instance from this builder
    pub fn build(self) -> Result<Frontend, BuildFrontendError> {
        if self.max_depth == 0 {
            return Err(BuildFrontendError::ZeroMaxDepth);
        }
        let frontend = Frontend {
            reader: self
                .reader
                .unwrap_or_else(|| Box::new(SexprReader::new())),
            symbols: self.symbols.unwrap_or_default(),
            max_depth: self.max_depth,
        };
        debug!(?frontend, "front-end ready");
        Ok(frontend)
    }
}

impl Default for FrontendBuilder {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            symbols: None,
            reader: None,
        }
    }
}

impl Debug for FrontendBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrontendBuilder")
            .field("max_depth", &self.max_depth)
            .field("shared_symbols", &self.symbols.is_some())
            .field("custom_reader", &self.reader.is_some())
            .finish()
    }
}
