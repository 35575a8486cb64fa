use std::fs;

use calcrepl::{
    Error, Session,
    error::{LexicalError, RuntimeError, SyntaxError},
    evaluate_line,
    interpreter::{lexer::Token, value::Value},
    repl::{ReplConfig, run},
};
use walkdir::WalkDir;

#[test]
fn session_transcripts_replay() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/sessions").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let (input, expected) = split_transcript(&content);

        let mut output = Vec::new();
        run(&ReplConfig::quiet(), &mut Session::new(), input.as_bytes(), &mut output)
            .unwrap_or_else(|e| panic!("I/O error replaying {path:?}: {e}"));
        let actual = String::from_utf8(output).expect("output is UTF-8");

        assert_eq!(actual, expected, "transcript {path:?} diverged");
        count += 1;
    }

    assert!(count > 0, "No transcripts found in tests/sessions");
}

/// Splits a transcript into the lines typed after `calc> ` and the output
/// lines expected in between. Lines starting with `#` are comments.
fn split_transcript(content: &str) -> (String, String) {
    let mut input = String::new();
    let mut expected = String::new();

    for line in content.lines() {
        if line.starts_with('#') {
            continue;
        }
        if let Some(typed) = line.strip_prefix("calc> ")
                                 .or_else(|| (line == "calc>").then_some(""))
        {
            input.push_str(typed);
            input.push('\n');
        } else {
            expected.push_str(line);
            expected.push('\n');
        }
    }

    (input, expected)
}

fn eval(src: &str) -> Value {
    match evaluate_line(src) {
        Ok(Some(value)) => value,
        Ok(None) => panic!("'{src}' produced no value"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match evaluate_line(src) {
        Ok(value) => panic!("'{src}' succeeded with {value:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn literals_keep_their_type() {
    assert_eq!(eval("42"), Value::Integer(42));
    assert_eq!(eval("4.25"), Value::Float(4.25));
    assert_eq!(eval("2."), Value::Float(2.0));
    assert_eq!(eval("007"), Value::Integer(7));
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(eval("2 + 3 * 4"), Value::Integer(14));
    assert_eq!(eval("(2 + 3) * 4"), Value::Integer(20));
    assert_eq!(eval("2 * (3 + 4) * 5"), Value::Integer(70));
    assert_eq!(eval("((7))"), Value::Integer(7));
}

#[test]
fn left_associativity() {
    assert_eq!(eval("10 - 3 - 2"), Value::Integer(5));
    assert_eq!(eval("20 / 4 / 5"), Value::Float(1.0));
    assert_eq!(eval("2 * 3 - 4 * 5"), Value::Integer(-14));
}

#[test]
fn division_always_produces_a_float() {
    for (a, b) in [(10_i64, 5_i64), (7, 2), (-9, 4), (1, 3), (100, -10)] {
        #[allow(clippy::cast_precision_loss)]
        let quotient = a as f64 / b as f64;
        assert_eq!(eval(&format!("{a} / {b}")), Value::Float(quotient));
    }
}

#[test]
fn mixed_operands_promote_to_float() {
    assert_eq!(eval("1 + 2.5"), Value::Float(3.5));
    assert_eq!(eval("2.0 * 3"), Value::Float(6.0));
    assert_eq!(eval("5 - 0.5"), Value::Float(4.5));
    assert_eq!(eval("3 * 4"), Value::Integer(12));
}

#[test]
fn unary_signs() {
    assert_eq!(eval("-5"), Value::Integer(-5));
    assert_eq!(eval("--5"), Value::Integer(5));
    assert_eq!(eval("+-+3"), Value::Integer(-3));
    assert_eq!(eval("-2 * 3"), Value::Integer(-6));
    assert_eq!(eval("4 - -2"), Value::Integer(6));
    assert_eq!(eval("-(1.5 + 1)"), Value::Float(-2.5));
}

#[test]
fn whitespace_is_ignored() {
    assert_eq!(eval("  1+\t2 "), Value::Integer(3));
    assert_eq!(eval("1+2"), Value::Integer(3));
}

#[test]
fn division_by_zero_is_error() {
    for src in ["10 / 0", "1 / 0.0", "0 / 0", "5 / (2 - 2)", "1 / -0.0"] {
        assert_eq!(assert_failure(src),
                   Error::Runtime(RuntimeError::DivisionByZero),
                   "{src}");
    }
}

#[test]
fn error_messages_have_category_prefix() {
    assert_eq!(assert_failure("10 / 0").to_string(),
               "Runtime error: Division by zero");
    assert_eq!(assert_failure("z").to_string(),
               "Runtime error: Undefined variable 'z'");
    assert_eq!(assert_failure("1 @ 2").to_string(),
               "Lexical error: Invalid character '@' at position 2");
    assert_eq!(assert_failure("1 + 2 3").to_string(),
               "Syntax error: Unexpected token integer literal 3 at position 6");
}

#[test]
fn undefined_variable_is_name_error() {
    match assert_failure("z + 1") {
        Error::Runtime(e) => {
            assert!(e.is_name_error());
            assert_eq!(e, RuntimeError::UndefinedVariable { name: "z".to_string() });
        },
        other => panic!("expected runtime error, got {other:?}"),
    }
}

#[test]
fn invalid_character_is_lexical_error() {
    assert_eq!(assert_failure("@"),
               Error::Lexical(LexicalError::InvalidCharacter { character: '@',
                                                               position:  0, }));
    assert_eq!(assert_failure("x = 3 $ 4"),
               Error::Lexical(LexicalError::InvalidCharacter { character: '$',
                                                               position:  6, }));
    assert_eq!(assert_failure("1 + é"),
               Error::Lexical(LexicalError::InvalidCharacter { character: 'é',
                                                               position:  4, }));
}

#[test]
fn trailing_tokens_are_syntax_errors() {
    assert_eq!(assert_failure("1 + 2 3"),
               Error::Syntax(SyntaxError::UnexpectedTrailingTokens { found:    Token::Integer(3),
                                                                     position: 6, }));
    assert!(matches!(assert_failure("x y"), Error::Syntax(_)));
    assert!(matches!(assert_failure("5 = 3"), Error::Syntax(_)));
    assert!(matches!(assert_failure("(1 + 2))"), Error::Syntax(_)));
}

#[test]
fn malformed_expressions_are_syntax_errors() {
    assert_eq!(assert_failure("(1 + 2"),
               Error::Syntax(SyntaxError::ExpectedClosingParen { found:    Token::Eof,
                                                                 position: 6, }));
    assert_eq!(assert_failure("1 +"),
               Error::Syntax(SyntaxError::UnexpectedToken { expected:
                                                                "a number, identifier, sign or '('",
                                                            found:    Token::Eof,
                                                            position: 3, }));
    for src in ["", "   ", "*2", "x =", "x = = 1", "()", "2 * / 3"] {
        assert!(matches!(assert_failure(src), Error::Syntax(_)), "{src:?}");
    }
}

#[test]
fn integer_overflow_is_runtime_error() {
    assert!(matches!(assert_failure("9223372036854775807 + 1"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
    assert!(matches!(assert_failure("-9223372036854775807 - 2"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
    assert!(matches!(assert_failure("4611686018427387904 * 2"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
}

#[test]
fn oversized_integer_literal_is_lexical_error() {
    assert_eq!(assert_failure("99999999999999999999"),
               Error::Lexical(LexicalError::IntegerTooLarge { literal:  "99999999999999999999".to_string(),
                                                              position: 0, }));
}

#[test]
fn large_integers_promote_to_nearest_float() {
    assert_eq!(eval("9007199254740991 / 1"), Value::Float(9_007_199_254_740_991.0));
    assert_eq!(eval("9007199254740993 / 1"), Value::Float(9_007_199_254_740_992.0));
    assert_eq!(eval("9000000000000000000 / 2"), Value::Float(4.5e18));
    assert_eq!(eval("9007199254740993 + 0.5"), Value::Float(9_007_199_254_740_992.0));

    let mut session = Session::new();
    session.run_line("x = 3000000000 * 3000000000").unwrap();
    assert_eq!(session.run_line("x / 2"), Ok(Some(Value::Float(4.5e18))));
}

#[test]
fn deep_nesting_is_rejected_not_a_crash() {
    let src = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert!(matches!(assert_failure(&src),
                     Error::Syntax(SyntaxError::NestingTooDeep { .. })));

    let signs = format!("{}1", "-".repeat(10_000));
    assert!(matches!(assert_failure(&signs),
                     Error::Syntax(SyntaxError::NestingTooDeep { .. })));

    assert_eq!(eval(&format!("{}1{}", "(".repeat(100), ")".repeat(100))),
               Value::Integer(1));
}

#[test]
fn assignment_then_reference() {
    let mut session = Session::new();
    assert_eq!(session.run_line("x = 10 + 5"), Ok(None));
    assert_eq!(session.run_line("x * 2"), Ok(Some(Value::Integer(30))));
}

#[test]
fn chained_dependency() {
    let mut session = Session::new();
    assert_eq!(session.run_line("x = 10 + 5"), Ok(None));
    assert_eq!(session.run_line("y = (x + 10) / 5"), Ok(None));
    assert_eq!(session.run_line("y"), Ok(Some(Value::Float(5.0))));
}

#[test]
fn reassignment_overwrites() {
    let mut session = Session::new();
    session.run_line("x = 1").unwrap();
    session.run_line("x = x + 1").unwrap();
    session.run_line("x = x * 2.5").unwrap();
    assert_eq!(session.run_line("x"), Ok(Some(Value::Float(5.0))));
    assert_eq!(session.symbols().len(), 1);
}

#[test]
fn rereading_a_variable_is_stable() {
    let mut session = Session::new();
    session.run_line("answer = 6 * 7").unwrap();
    let first = session.run_line("answer").unwrap();
    let second = session.run_line("answer").unwrap();
    assert_eq!(first, second);
    assert_eq!(first, Some(Value::Integer(42)));
}

#[test]
fn names_are_case_sensitive() {
    let mut session = Session::new();
    session.run_line("Total = 3").unwrap();
    assert_eq!(session.run_line("Total"), Ok(Some(Value::Integer(3))));
    assert!(session.run_line("total").is_err());
}

#[test]
fn identifiers_with_digits_and_underscores() {
    let mut session = Session::new();
    session.run_line("_tmp_1 = 4").unwrap();
    session.run_line("x2 = _tmp_1 * 2").unwrap();
    assert_eq!(session.run_line("x2"), Ok(Some(Value::Integer(8))));
}

#[test]
fn failed_assignment_leaves_table_untouched() {
    let mut session = Session::new();
    session.run_line("x = 1").unwrap();

    assert!(session.run_line("x = 1 / 0").is_err());
    assert!(session.run_line("x = undefined_name").is_err());
    assert!(session.run_line("y = 2 +").is_err());
    assert!(session.run_line("y = 2 # 3").is_err());

    assert_eq!(session.run_line("x"), Ok(Some(Value::Integer(1))));
    assert!(!session.symbols().contains("y"));
}

#[test]
fn sessions_are_independent() {
    let mut first = Session::new();
    let mut second = Session::new();
    assert!(first.symbols().is_empty());

    first.run_line("x = 1").unwrap();
    assert!(second.symbols().is_empty());
    assert!(second.run_line("x").is_err());

    second.run_line("x = 2").unwrap();
    assert_eq!(first.run_line("x"), Ok(Some(Value::Integer(1))));
}

#[test]
fn exit_and_quit_are_plain_identifiers_to_the_pipeline() {
    let mut session = Session::new();
    assert!(session.run_line("exit").is_err());
    session.run_line("quit = 3").unwrap();
    assert_eq!(session.run_line("quit + 1"), Ok(Some(Value::Integer(4))));
}

#[test]
fn values_print_like_the_repl() {
    assert_eq!(eval("(15 + 10) / 5").to_string(), "5.0");
    assert_eq!(eval("1 / 4").to_string(), "0.25");
    assert_eq!(eval("10 * 3").to_string(), "30");
    assert_eq!(eval("-7").to_string(), "-7");
}

#[test]
fn printing_floats_with_exponents() {
    assert_eq!(eval("10000000000000000.0").to_string(), "1e+16");
    assert_eq!(eval("9000000000000000000 / 2").to_string(), "4.5e+18");
    assert_eq!(eval("1 / 100000").to_string(), "1e-05");
    assert_eq!(eval("1 / 10000").to_string(), "0.0001");
    assert_eq!(eval("1000000000000000.0").to_string(), "1000000000000000.0");
}
