use calq::{
    error::{EvalError, ParseError, RuntimeError},
    evaluate,
    interpreter::{
        evaluator::eval_expression,
        lexer::{Token, tokenize},
    },
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

#[test]
fn precedence_and_grouping() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("2*(3+4)", 14.0);
    assert_value("2*3+4*5", 26.0);
    assert_value("((2))", 2.0);
    assert_value("(1+2)*(3+4)", 21.0);
}

#[test]
fn left_associativity() {
    assert_value("10-2-3", 5.0);
    assert_value("8/2/2", 2.0);
    assert_value("100/5/2/2", 5.0);
    assert_value("1-2+3", 2.0);
    assert_value("10-(2-3)", 11.0);
}

#[test]
fn multi_digit_literals() {
    assert_value("12+3", 15.0);
    assert_value("120+345", 465.0);
    assert_value("007", 7.0);
}

#[test]
fn fractional_division() {
    assert_value("7/2", 3.5);
    assert_value("1/4", 0.25);
    assert_value("3/2*2", 3.0);
    assert_value("10/4", 2.5);
}

#[test]
fn single_values() {
    assert_value("42", 42.0);
    assert_value("(5)", 5.0);
    assert_value("0", 0.0);
}

#[test]
fn whitespace_between_tokens() {
    assert_value("12 + 3", 15.0);
    assert_value(" ( 2 + 3 ) * 4 ", 20.0);
}

#[test]
fn evaluation_is_idempotent() {
    let first = evaluate("(2+3)*4").unwrap();
    let second = evaluate("(2+3)*4").unwrap();
    assert_eq!(first, second);
}

#[test]
fn valid_input_consumes_every_token() {
    let tokens = tokenize("(2+3)*4-1").unwrap();
    let mut tokens = tokens.iter().peekable();

    assert_eq!(eval_expression(&mut tokens).unwrap(), 19.0);
    assert!(tokens.next().is_none());
}

#[test]
fn tokenizer_keeps_digit_runs_together() {
    let tokens = tokenize("12+3").unwrap();
    assert_eq!(tokens,
               vec![(Token::Integer(12), 1), (Token::Plus, 3), (Token::Integer(3), 4)]);
}

#[test]
fn truncated_input_is_rejected() {
    assert!(matches!(evaluate("3+"),
                     Err(EvalError::Parse(ParseError::UnexpectedEndOfInput))));
    assert!(matches!(evaluate(""),
                     Err(EvalError::Parse(ParseError::UnexpectedEndOfInput))));
    assert!(matches!(evaluate("2*(3+"),
                     Err(EvalError::Parse(ParseError::UnexpectedEndOfInput))));
}

#[test]
fn unbalanced_parentheses_are_rejected() {
    assert!(matches!(evaluate("(1+2"),
                     Err(EvalError::Parse(ParseError::ExpectedClosingParen { column: 1 }))));
    assert!(matches!(evaluate("2*((3+4)"),
                     Err(EvalError::Parse(ParseError::ExpectedClosingParen { column: 3 }))));
}

#[test]
fn division_by_zero_is_rejected() {
    assert!(matches!(evaluate("1/0"),
                     Err(EvalError::Runtime(RuntimeError::DivisionByZero { column: 2 }))));
    assert!(matches!(evaluate("10/(4-4)"),
                     Err(EvalError::Runtime(RuntimeError::DivisionByZero { .. }))));
}

#[test]
fn operator_without_operand_is_rejected() {
    assert!(matches!(evaluate("+1"),
                     Err(EvalError::Parse(ParseError::UnexpectedToken { .. }))));
    assert!(matches!(evaluate("2*+3"),
                     Err(EvalError::Parse(ParseError::UnexpectedToken { .. }))));
    assert!(matches!(evaluate("()"),
                     Err(EvalError::Parse(ParseError::UnexpectedToken { .. }))));
}

#[test]
fn trailing_tokens_are_rejected() {
    assert!(matches!(evaluate("1 2"),
                     Err(EvalError::Parse(ParseError::UnexpectedTrailingTokens { .. }))));
    assert!(matches!(evaluate("1)"),
                     Err(EvalError::Parse(ParseError::UnexpectedTrailingTokens { .. }))));
    assert!(matches!(evaluate("(2+3)4"),
                     Err(EvalError::Parse(ParseError::UnexpectedTrailingTokens { .. }))));
}

#[test]
fn junk_characters_are_rejected() {
    assert!(matches!(evaluate("2$3"),
                     Err(EvalError::Parse(ParseError::UnexpectedToken { .. }))));
    // Float literals are outside the grammar; the dot is unlexable.
    assert!(matches!(evaluate("1.5"),
                     Err(EvalError::Parse(ParseError::UnexpectedToken { .. }))));
}

#[test]
fn oversized_literals_are_rejected() {
    // Fits an i64, but past the range where f64 stays exact.
    assert!(matches!(evaluate("9007199254740993"),
                     Err(EvalError::Parse(ParseError::LiteralTooLarge { column: 1 }))));
    // Does not fit an i64 at all; rejected by the lexer.
    assert!(matches!(evaluate("99999999999999999999"),
                     Err(EvalError::Parse(ParseError::UnexpectedToken { .. }))));
    assert_value("9007199254740991", 9_007_199_254_740_991.0);
}

#[test]
fn errors_render_their_location() {
    let e = evaluate("1/0").unwrap_err();
    assert_eq!(e.to_string(), "Error at column 2: Division by zero.");

    let e = evaluate("(1+2").unwrap_err();
    assert_eq!(e.to_string(),
               "Error at column 1: Expected closing parenthesis ')' but none found.");
}
