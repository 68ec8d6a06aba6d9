use super::{Error, LineNumber};
use crate::error;

/// One line of user input, split into its optional line number literal
/// and the statement text that follows it. A numbered line keeps its
/// text verbatim after the single separator so LIST shows it as typed.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: Option<(LineNumber, String)>,
    source: String,
}

impl Line {
    pub fn new(s: &str) -> Result<Line, Error> {
        let s = s.trim_end_matches(|c| c == '\n' || c == '\r');
        let digits = s.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            return Ok(Line {
                number: None,
                source: s.trim().to_string(),
            });
        }
        let (literal, rest) = s.split_at(digits);
        let source = match rest.chars().next() {
            None => "",
            Some(ch) if ch.is_whitespace() => &rest[ch.len_utf8()..],
            Some(_) => {
                return Err(error!(SyntaxError; "EXPECTED SPACE AFTER LINE NUMBER"));
            }
        };
        Ok(Line {
            number: Some((line_number(literal)?, literal.to_string())),
            source: source.to_string(),
        })
    }

    pub fn number(&self) -> Option<LineNumber> {
        self.number.as_ref().map(|(n, _)| *n)
    }

    /// The line number exactly as typed, leading zeros included.
    pub fn literal(&self) -> Option<&str> {
        self.number.as_ref().map(|(_, s)| s.as_str())
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    /// True for a blank line, or a line number with nothing after it.
    pub fn is_empty(&self) -> bool {
        self.source.trim().is_empty()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.literal() {
            Some(literal) => write!(f, "{} {}", literal, self.source),
            None => write!(f, "{}", self.source),
        }
    }
}

/// Decimal digits to a line number. Zero is not a line number.
pub fn line_number(s: &str) -> Result<LineNumber, Error> {
    let msg = "INVALID LINE NUMBER";
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(error!(SyntaxError; msg));
    }
    match s.parse::<LineNumber>() {
        Ok(0) => Err(error!(SyntaxError; msg)),
        Ok(n) => Ok(n),
        Err(_) => Err(error!(Overflow; msg)),
    }
}
