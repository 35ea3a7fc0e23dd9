use std::iter::Peekable;

use crate::{
    error::{EvalError, ParseError, RuntimeError},
    interpreter::lexer::Token,
    util::num::i64_to_f64_checked,
};

/// Result type used by the evaluation routines.
///
/// All evaluation routines return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates the longest valid additive expression at the front of the
/// stream.
///
/// This is the top of the mutual recursion: it folds terms over the
/// left-associative operators `+` and `-`, reducing each step immediately
/// into the running value. The loop stops as soon as the front token is not
/// an additive operator, or the stream is empty; deciding what to do with
/// the remaining tokens is the caller's concern.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream, consumed from the front.
///
/// # Returns
/// The computed value of the expression.
///
/// # Errors
/// Propagates any error from the tighter-binding routines.
///
/// # Examples
/// ```
/// use calq::interpreter::{evaluator::eval_expression, lexer::tokenize};
///
/// let tokens = tokenize("10-2-3").unwrap();
/// let mut tokens = tokens.iter().peekable();
///
/// // Left-associative: (10 - 2) - 3, not 10 - (2 - 3).
/// assert_eq!(eval_expression(&mut tokens).unwrap(), 5.0);
/// assert!(tokens.next().is_none());
/// ```
pub fn eval_expression<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<f64>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut value = eval_term(tokens)?;
    loop {
        if let Some((op, _)) = tokens.peek()
           && matches!(op, Token::Plus | Token::Minus)
        {
            let op = *op;
            tokens.next();
            let right = eval_term(tokens)?;
            value = match op {
                Token::Plus => value + right,
                Token::Minus => value - right,
                _ => unreachable!(),
            };
            continue;
        }
        break;
    }
    Ok(value)
}

/// Evaluates the next term found in the expression.
///
/// Structurally the same fold as [`eval_expression`], one precedence level
/// tighter: operands come from [`eval_factor`] and the operators recognized
/// are `*` and `/`. Division is `f64` division, so `7/2` is `3.5`; the
/// quotient is never truncated. A zero divisor aborts the evaluation.
///
/// Grammar: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream, consumed from the front.
///
/// # Returns
/// The computed value of the term.
///
/// # Errors
/// Returns [`RuntimeError::DivisionByZero`] with the operator's column when
/// a `/` meets a zero right operand; otherwise propagates errors from
/// [`eval_factor`].
pub fn eval_term<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<f64>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut value = eval_factor(tokens)?;
    loop {
        if let Some((op, column)) = tokens.peek()
           && matches!(op, Token::Star | Token::Slash)
        {
            let (op, column) = (*op, *column);
            tokens.next();
            let right = eval_factor(tokens)?;
            value = match op {
                Token::Star => value * right,
                Token::Slash => {
                    if right == 0.0 {
                        return Err(RuntimeError::DivisionByZero { column }.into());
                    }
                    value / right
                },
                _ => unreachable!(),
            };
            continue;
        }
        break;
    }
    Ok(value)
}

/// Evaluates the next factor found in the expression.
///
/// A factor is exactly one meaningful unit: a single integer literal, whose
/// value is returned directly, or a parenthesized sub-expression, which
/// recurses back into [`eval_expression`] and then requires the matching
/// `)`. This closes the mutual recursion.
///
/// Grammar: `factor := INTEGER | "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token stream, consumed from the front.
///
/// # Returns
/// The value of the literal or of the parenthesized sub-expression.
///
/// # Errors
/// - [`ParseError::UnexpectedEndOfInput`] if the stream is exhausted where a
///   factor is required.
/// - [`ParseError::UnexpectedToken`] if the front token is an operator or a
///   stray `)` where a value was expected.
/// - [`ParseError::ExpectedClosingParen`] if a grouped expression is not
///   followed by `)`; the column points at the unmatched `(`.
/// - [`ParseError::LiteralTooLarge`] if a literal cannot be represented
///   exactly as an `f64`.
pub fn eval_factor<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<f64>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Integer(n), column)) => {
            Ok(i64_to_f64_checked(*n, ParseError::LiteralTooLarge { column: *column })?)
        },

        Some((Token::LParen, column)) => {
            let value = eval_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(value),
                _ => Err(ParseError::ExpectedClosingParen { column: *column }.into()),
            }
        },

        Some((token, column)) => {
            Err(ParseError::UnexpectedToken { token:  format!("{token:?}"),
                                              column: *column, }.into())
        },

        None => Err(ParseError::UnexpectedEndOfInput.into()),
    }
}
