/// The evaluator module computes the value of the token stream.
///
/// The evaluator consumes tokens strictly from the front of the stream and
/// folds each grammar rule into a numeric value on the spot. No syntax tree
/// is built; the three mutually recursive routines are the whole grammar.
///
/// # Responsibilities
/// - Consumes the token stream left to right, exactly once per token.
/// - Applies operator precedence and left-associativity while folding.
/// - Reports grammar errors and arithmetic errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes an input line for evaluation.
///
/// The lexer (tokenizer) reads the raw input text and produces a stream of
/// tokens, each corresponding to an integer literal, an operator, or a
/// parenthesis. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source columns.
/// - Keeps maximal digit runs together as single integer literals.
/// - Reports lexical errors for characters outside the grammar.
pub mod lexer;
