//! The syntactic kind of an expression

use arbor_symbols::{Symbol, SymbolTable};
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

/// The spelling of the marker symbol used for variadic parameters, `x::T...`
pub const DOTS: &str = "...";

macro_rules! heads {
    ($($(#[$meta:meta])* $variant:ident => $name:literal $(, arity = $arity:expr)?;)*) => {
        /// The head of an expression.
        ///
        /// Known heads get their own variant. Anything else the reader produces is kept as
        /// [Head::Other] so the vocabulary can grow without changing this crate.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum Head {
            $(
            $(#[$meta])*
            $variant,
            )*
            /// A head outside of the known vocabulary
            Other(Symbol),
        }

        impl Head {
            /// Gets the head for a name, interning it only when it isn't a known head
            pub fn from_name(name: &str, symbols: &SymbolTable) -> Self {
                match name {
                    $($name => Head::$variant,)*
                    other => Head::Other(symbols.intern(other)),
                }
            }

            /// The spelling of this head in the generic tree
            pub fn as_str(&self) -> &str {
                match self {
                    $(Head::$variant => $name,)*
                    Head::Other(symbol) => symbol.as_str(),
                }
            }

            /// The number of arguments this head accepts, when known statically
            pub fn arity(&self) -> Option<RangeInclusive<usize>> {
                match self {
                    $($(Head::$variant => Some($arity),)?)*
                    _ => None,
                }
            }
        }
    };
}

heads! {
    /// Unconditional jump to a label
    Goto => "goto", arity = 1..=1;
    /// Jump to a label unless the condition holds
    GotoIfNot => "goto-ifnot", arity = 2..=2;
    Label => "label", arity = 1..=1;
    Return => "return", arity = 1..=1;
    /// A lambda. After translation these only live inside a [LambdaInfo](crate::LambdaInfo)
    Lambda => "lambda", arity = 3..=3;
    Call => "call";
    /// Assignment
    Assign => "=", arity = 2..=2;
    Quote => "quote", arity = 1..=1;
    Null => "null", arity = 0..=0;
    Top => "top", arity = 1..=1;
    Unbound => "unbound", arity = 1..=1;
    BoxUnbound => "box-unbound", arity = 1..=1;
    ClosureRef => "closure-ref", arity = 1..=1;
    Body => "body";
    File => "file";
    /// Only seen in the generic tree, translation turns it into a string literal
    String => "string", arity = 1..=1;
    /// Line number, optionally followed by a file name
    Line => "line", arity = 1..=2;
    List => "list";
    Locals => "locals";
    /// Type ascription, `x::T`
    Colons => "::";
    /// Splatting, `f(x...)`
    Dots => "...";
}

impl Head {
    /// Checks if this head accepts the given number of arguments
    pub fn accepts(&self, len: usize) -> bool {
        self.arity().map_or(true, |arity| arity.contains(&len))
    }
}

impl Display for Head {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
