use super::*;

fn lex_str(s: &str) -> Vec<String> {
    lex(s)
        .iter()
        .filter(|t| !matches!(t, Token::Whitespace(_)))
        .map(|t| t.to_string())
        .collect()
}

#[test]
fn test_keywords_and_idents() {
    let tokens = lex("LET X1 = 5");
    assert_eq!(
        tokens,
        vec![
            Token::Word(Word::Let),
            Token::Whitespace(1),
            Token::Ident("X1".to_string()),
            Token::Whitespace(1),
            Token::Operator(Operator::Equal),
            Token::Whitespace(1),
            Token::Literal("5".to_string()),
        ]
    );
}

#[test]
fn test_case_sensitive_keywords() {
    assert_eq!(lex("print"), vec![Token::Ident("print".to_string())]);
    assert_eq!(lex("PRINTX"), vec![Token::Ident("PRINTX".to_string())]);
}

#[test]
fn test_multi_digit_numbers() {
    assert_eq!(lex_str("120+3"), vec!["120", "+", "3"]);
    assert_eq!(lex("007"), vec![Token::Literal("007".to_string())]);
}

#[test]
fn test_operators_and_parens() {
    assert_eq!(
        lex_str("(A-B)*C/D<E>F"),
        vec!["(", "A", "-", "B", ")", "*", "C", "/", "D", "<", "E", ">", "F"]
    );
}

#[test]
fn test_unknown() {
    assert_eq!(lex("A%"), vec![Token::Ident("A".to_string()), Token::Unknown("%".to_string())]);
}

#[test]
fn test_remark_swallows_rest() {
    assert_eq!(
        lex("REM GOTO 10 : \"x\"   "),
        vec![
            Token::Word(Word::Rem),
            Token::Unknown(" GOTO 10 : \"x\"".to_string()),
        ]
    );
}

#[test]
fn test_trailing_whitespace_dropped() {
    assert_eq!(lex("END \t"), vec![Token::Word(Word::End)]);
}
