use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: "",
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    /// Tags the error with the program line it came from. An error
    /// that already knows its line keeps it.
    pub fn in_line_number(&self, line: LineNumber) -> Error {
        Error {
            code: self.code,
            line_number: self.line_number.or(Some(line)),
            message: self.message,
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            line_number: self.line_number,
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError,
    LineNumberError,
    UndefinedVariable,
    DivideByZero,
    InvalidNumber,
    Overflow,
    Break,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            SyntaxError => "SYNTAX ERROR",
            LineNumberError => "LINE NUMBER ERROR",
            UndefinedVariable => "VARIABLE NOT DEFINED",
            DivideByZero => "DIVIDE BY ZERO",
            InvalidNumber => "INVALID NUMBER",
            Overflow => "OVERFLOW",
            Break => "BREAK",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" IN {}", line_number));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", self.code, suffix)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(error!(SyntaxError).to_string(), "SYNTAX ERROR");
        assert_eq!(
            error!(LineNumberError, 10).to_string(),
            "LINE NUMBER ERROR IN 10"
        );
        assert_eq!(
            error!(SyntaxError, 20; "EXPECTED THEN").to_string(),
            "SYNTAX ERROR IN 20; EXPECTED THEN"
        );
    }

    #[test]
    fn test_first_line_number_sticks() {
        let e = error!(DivideByZero, 30).in_line_number(40);
        assert_eq!(e.line_number(), Some(30));
        assert!(!e.is_direct());
        assert_eq!(e.code(), ErrorCode::DivideByZero);
    }
}
