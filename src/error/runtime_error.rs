#[derive(Debug)]
/// Represents all errors that can occur while computing a value.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The input column of the `/` operator.
        column: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { column } => {
                write!(f, "Error at column {column}: Division by zero.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
