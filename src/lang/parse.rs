use super::{ast::*, lex, line, token::*, Error, LineNumber};
use crate::error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// Parse the text of a stored program line.
pub fn parse(s: &str) -> Result<Statement> {
    let tokens = lex(s);
    let mut parse = Parser::new(&tokens);
    let statement = parse.statement()?;
    parse.expect_end()?;
    Ok(statement)
}

/// Parse a line typed without a line number.
pub fn parse_command(s: &str) -> Result<Command> {
    let tokens = lex(s);
    let mut parse = Parser::new(&tokens);
    let command = match parse.peek() {
        Some(Token::Word(word)) => match word {
            Word::Run => Some(Command::Run),
            Word::List => Some(Command::List),
            Word::Clear => Some(Command::Clear),
            Word::Quit => Some(Command::Quit),
            Word::Help => Some(Command::Help),
            Word::Let | Word::Print | Word::Input => None,
            Word::Rem | Word::End | Word::Goto | Word::If => {
                return Err(error!(SyntaxError; "ILLEGAL DIRECT"))
            }
            Word::Then => return Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        },
        _ => return Err(error!(SyntaxError; "EXPECTED STATEMENT")),
    };
    let command = match command {
        Some(command) => {
            parse.next();
            command
        }
        None => Command::Statement(parse.statement()?),
    };
    parse.expect_end()?;
    Ok(command)
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Parser<'a> {
        Parser {
            token_stream: tokens.iter(),
            peeked: None,
        }
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        loop {
            match self.token_stream.next()? {
                Token::Whitespace(_) => continue,
                t => return Some(t),
            }
        }
    }

    fn peek(&mut self) -> Option<&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked
    }

    fn statement(&mut self) -> Result<Statement> {
        match self.next() {
            Some(Token::Word(word)) => Statement::for_word(self, word),
            _ => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        fn parse(this: &mut Parser, precedence: usize) -> Result<Expression> {
            let mut lhs = match this.next() {
                Some(Token::LParen) => {
                    let expr = this.expression()?;
                    this.expect(Token::RParen)?;
                    expr
                }
                Some(Token::Ident(i)) => Expression::Var(i.as_str().into()),
                Some(Token::Literal(l)) => Expression::for_literal(l)?,
                _ => return Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
            };
            loop {
                let op = match this.peek() {
                    Some(Token::Operator(op)) if !op.is_relational() => op,
                    _ => break,
                };
                let op_precedence = Expression::op_precedence(op);
                if op_precedence < precedence {
                    break;
                }
                this.next();
                let rhs = parse(this, op_precedence + 1)?;
                lhs = Expression::for_binary_op(op, lhs, rhs);
            }
            Ok(lhs)
        }
        parse(self, 0)
    }

    fn ident(&mut self) -> Result<Ident> {
        match self.next() {
            Some(Token::Ident(i)) => Ok(i.as_str().into()),
            Some(Token::Word(_)) => Err(error!(SyntaxError; "RESERVED WORD")),
            _ => Err(error!(SyntaxError; "EXPECTED IDENTIFIER")),
        }
    }

    fn relation(&mut self) -> Result<Relation> {
        match self.next() {
            Some(Token::Operator(Operator::Equal)) => Ok(Relation::Equal),
            Some(Token::Operator(Operator::Less)) => Ok(Relation::Less),
            Some(Token::Operator(Operator::Greater)) => Ok(Relation::Greater),
            _ => Err(error!(SyntaxError; "EXPECTED RELATIONAL OPERATOR")),
        }
    }

    fn line_number(&mut self) -> Result<LineNumber> {
        match self.next() {
            Some(token) => LineNumber::try_from(token),
            None => Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        Err(error!(SyntaxError;
            match token {
                Token::Unknown(_) | Token::Whitespace(_) => {"UNEXPECTED TOKEN"}
                Token::Literal(_) => {"EXPECTED LITERAL"}
                Token::Word(Word::Then) => {"EXPECTED THEN"}
                Token::Word(_) => {"EXPECTED RESERVED WORD"}
                Token::Operator(Operator::Equal) => {"EXPECTED ="}
                Token::Operator(_) => {"EXPECTED OPERATOR"}
                Token::Ident(_) => {"EXPECTED IDENTIFIER"}
                Token::LParen => {"EXPECTED LEFT PARENTHESIS"}
                Token::RParen => {"EXPECTED RIGHT PARENTHESIS"}
            }
        ))
    }

    fn expect_end(&mut self) -> Result<()> {
        match self.next() {
            None => Ok(()),
            Some(_) => Err(error!(SyntaxError; "UNEXPECTED TOKEN")),
        }
    }
}

impl TryFrom<&Token> for LineNumber {
    type Error = Error;
    fn try_from(token: &Token) -> std::result::Result<Self, Self::Error> {
        match token {
            Token::Literal(s) => line::line_number(s),
            _ => Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        }
    }
}

impl Expression {
    fn for_binary_op(op: &Operator, lhs: Expression, rhs: Expression) -> Expression {
        use Operator::*;
        let (lhs, rhs) = (Box::new(lhs), Box::new(rhs));
        match op {
            Plus => Expression::Add(lhs, rhs),
            Minus => Expression::Subtract(lhs, rhs),
            Multiply => Expression::Multiply(lhs, rhs),
            Divide => Expression::Divide(lhs, rhs),
            Equal | Less | Greater => unreachable!("relational operator in arithmetic"),
        }
    }

    fn op_precedence(op: &Operator) -> usize {
        use Operator::*;
        match op {
            Equal | Less | Greater => 0,
            Plus | Minus => 10,
            Multiply | Divide => 20,
        }
    }

    fn for_literal(lit: &str) -> Result<Expression> {
        match lit.parse::<i32>() {
            Ok(n) => Ok(Expression::Integer(n)),
            Err(_) => Err(error!(Overflow; "INTEGER LITERAL TOO LARGE")),
        }
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: &Word) -> Result<Statement> {
        use Word::*;
        match word {
            Rem => Self::r#rem(parse),
            Let => Self::r#let(parse),
            Print => Self::r#print(parse),
            Input => Self::r#input(parse),
            End => Ok(Statement::End),
            Goto => Self::r#goto(parse),
            If => Self::r#if(parse),
            Run | List | Clear | Quit | Help => Err(error!(SyntaxError; "COMMAND IN PROGRAM")),
            Then => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn r#rem(parse: &mut Parser) -> Result<Statement> {
        while parse.next().is_some() {}
        Ok(Statement::Rem)
    }

    fn r#let(parse: &mut Parser) -> Result<Statement> {
        let ident = parse.ident()?;
        parse.expect(Token::Operator(Operator::Equal))?;
        let expr = parse.expression()?;
        Ok(Statement::Let(ident, expr))
    }

    fn r#print(parse: &mut Parser) -> Result<Statement> {
        Ok(Statement::Print(parse.expression()?))
    }

    fn r#input(parse: &mut Parser) -> Result<Statement> {
        Ok(Statement::Input(parse.ident()?))
    }

    fn r#goto(parse: &mut Parser) -> Result<Statement> {
        Ok(Statement::Goto(parse.line_number()?))
    }

    fn r#if(parse: &mut Parser) -> Result<Statement> {
        let lhs = parse.expression()?;
        let relation = parse.relation()?;
        let rhs = parse.expression()?;
        parse.expect(Token::Word(Word::Then))?;
        let then = parse.line_number()?;
        Ok(Statement::If(lhs, relation, rhs, then))
    }
}
