use super::*;

#[test]
fn test_direct() {
    let l = Line::new("  PRINT 1\r\n").unwrap();
    assert!(l.is_direct());
    assert_eq!(l.number(), None);
    assert_eq!(l.source(), "PRINT 1");
}

#[test]
fn test_numbered() {
    let l = Line::new("010   LET A = 1 ").unwrap();
    assert_eq!(l.number(), Some(10));
    assert_eq!(l.literal(), Some("010"));
    assert_eq!(l.source(), "  LET A = 1 ");
    assert_eq!(l.to_string(), "010   LET A = 1 ");
}

#[test]
fn test_numbered_keeps_text() {
    let l = Line::new("20\tPRINT  A   \r\n").unwrap();
    assert_eq!(l.source(), "PRINT  A   ");
    assert_eq!(l.to_string(), "20 PRINT  A   ");
}

#[test]
fn test_number_alone() {
    let l = Line::new("20").unwrap();
    assert_eq!(l.number(), Some(20));
    assert!(l.is_empty());
    let l = Line::new("20   \n").unwrap();
    assert!(l.is_empty());
}

#[test]
fn test_bad_numbers() {
    let e = Line::new("10PRINT 1").unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    let e = Line::new("0 PRINT 1").unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    let e = Line::new("99999999999 PRINT 1").unwrap_err();
    assert_eq!(e.code(), ErrorCode::Overflow);
}

#[test]
fn test_line_number() {
    assert_eq!(line_number("4294967295"), Ok(u32::MAX));
    assert!(line_number("").is_err());
    assert!(line_number("1a").is_err());
}
