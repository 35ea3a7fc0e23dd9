/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing an input line or
/// while the grammar routines consume the token stream. Parse errors include
/// unexpected tokens, truncated input, unbalanced parentheses, and oversized
/// literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while computing the value of
/// a well-formed expression, such as division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// The failure outcome of a full evaluation.
///
/// [`crate::evaluate`] returns this type so that callers can distinguish
/// grammar failures from arithmetic failures without string matching.
pub enum EvalError {
    /// The input could not be tokenized or did not follow the grammar.
    Parse(ParseError),
    /// The expression was well formed but its value could not be computed.
    Runtime(RuntimeError),
}

impl From<ParseError> for EvalError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
