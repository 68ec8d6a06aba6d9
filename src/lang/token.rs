use std::collections::HashMap;

thread_local!(
    static STRING_TO_TOKEN: HashMap<String, Token> = Word::ALL
        .iter()
        .map(|w| Token::Word(w.clone()))
        .chain(Operator::ALL.iter().map(|op| Token::Operator(op.clone())))
        .chain(vec![Token::LParen, Token::RParen])
        .map(|d| (d.to_string(), d))
        .collect();
);

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Whitespace(usize),
    Literal(String),
    Word(Word),
    Operator(Operator),
    Ident(String),
    LParen,
    RParen,
}

impl Token {
    pub fn from_string(s: &str) -> Option<Token> {
        STRING_TO_TOKEN.with(|stt| stt.get(s).cloned())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = u),
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
        }
    }
}

/// Reserved words. None of these may name a variable.
#[derive(Debug, PartialEq, Clone)]
pub enum Word {
    Clear,
    End,
    Goto,
    Help,
    If,
    Input,
    Let,
    List,
    Print,
    Quit,
    Rem,
    Run,
    Then,
}

impl Word {
    const ALL: [Word; 13] = [
        Word::Clear,
        Word::End,
        Word::Goto,
        Word::Help,
        Word::If,
        Word::Input,
        Word::Let,
        Word::List,
        Word::Print,
        Word::Quit,
        Word::Rem,
        Word::Run,
        Word::Then,
    ];
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Clear => write!(f, "CLEAR"),
            End => write!(f, "END"),
            Goto => write!(f, "GOTO"),
            Help => write!(f, "HELP"),
            If => write!(f, "IF"),
            Input => write!(f, "INPUT"),
            Let => write!(f, "LET"),
            List => write!(f, "LIST"),
            Print => write!(f, "PRINT"),
            Quit => write!(f, "QUIT"),
            Rem => write!(f, "REM"),
            Run => write!(f, "RUN"),
            Then => write!(f, "THEN"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Operator {
    Multiply,
    Divide,
    Plus,
    Minus,
    Equal,
    Less,
    Greater,
}

impl Operator {
    const ALL: [Operator; 7] = [
        Operator::Multiply,
        Operator::Divide,
        Operator::Plus,
        Operator::Minus,
        Operator::Equal,
        Operator::Less,
        Operator::Greater,
    ];

    pub fn is_relational(&self) -> bool {
        use Operator::*;
        match self {
            Equal | Less | Greater => true,
            Multiply | Divide | Plus | Minus => false,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Equal => write!(f, "="),
            Less => write!(f, "<"),
            Greater => write!(f, ">"),
        }
    }
}
