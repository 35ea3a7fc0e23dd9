use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the input expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the grammar.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Integer literal tokens, such as `42`. A maximal run of digits is one
    /// token; the lexer never splits `12` into `1` and `2`. A minus sign is
    /// never part of a literal.
    #[regex(r"[0-9]+", |lex| lex.slice().parse().ok())]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f]+", logos::skip)]
    Ignored,
}

/// Breaks an input line into tokens.
///
/// Each token is paired with the 1-based column of its first character so
/// that later errors can point back into the input. Inline whitespace is
/// skipped. An integer literal that does not fit an `i64`, or any character
/// outside the grammar, stops tokenization immediately.
///
/// # Parameters
/// - `source`: The input line to tokenize.
///
/// # Returns
/// The ordered token stream, front first.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] with the offending input slice
/// and its column when the input cannot be tokenized.
///
/// # Examples
/// ```
/// use calq::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("12+3").unwrap();
///
/// assert_eq!(tokens, vec![(Token::Integer(12), 1), (Token::Plus, 3), (Token::Integer(3), 4)]);
/// assert!(tokenize("2$3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start + 1));
        } else {
            return Err(ParseError::UnexpectedToken { token:  lexer.slice().to_string(),
                                                     column: lexer.span().start + 1, });
        }
    }

    Ok(tokens)
}
