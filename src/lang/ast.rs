use super::LineNumber;
use std::rc::Rc;

pub type Ident = Rc<str>;

/// An executable statement. Parsed once, never mutated afterwards.
#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Rem,
    Let(Ident, Expression),
    Print(Expression),
    Input(Ident),
    End,
    Goto(LineNumber),
    If(Expression, Relation, Expression, LineNumber),
}

/// A line typed without a line number.
#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    Statement(Statement),
    Run,
    List,
    Clear,
    Quit,
    Help,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Integer(i32),
    Var(Ident),
    Add(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
    Multiply(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Relation {
    Equal,
    Less,
    Greater,
}

impl Relation {
    pub fn holds(self, lhs: i32, rhs: i32) -> bool {
        match self {
            Relation::Equal => lhs == rhs,
            Relation::Less => lhs < rhs,
            Relation::Greater => lhs > rhs,
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Relation::Equal => write!(f, "="),
            Relation::Less => write!(f, "<"),
            Relation::Greater => write!(f, ">"),
        }
    }
}
