use super::{Event, Listing, Var};
use crate::error;
use crate::lang::ast::{Expression, Ident, Statement};
use crate::lang::{Error, ErrorCode, LineNumber};
use std::collections::VecDeque;
use tracing::trace;

type Result<T> = std::result::Result<T, Error>;

/// What a statement asks the engine to do with the cursor.
#[derive(Debug, PartialEq, Clone)]
pub enum Flow {
    Advance,
    JumpTo(LineNumber),
    Halt,
    /// Suspend until a line of input arrives, then bind it and advance.
    Input(Ident),
}

/// Result of evaluating an expression whose failure must not abort
/// the statement outright.
#[derive(Debug, PartialEq, Clone)]
pub enum Evaluated {
    Value(i32),
    /// Division by zero. Stops the program as END would.
    Halt(Error),
    /// Any other evaluation failure. The statement is skipped.
    Suppressed(Error),
}

impl From<Result<i32>> for Evaluated {
    fn from(result: Result<i32>) -> Evaluated {
        match result {
            Ok(n) => Evaluated::Value(n),
            Err(e) if e.code() == ErrorCode::DivideByZero => Evaluated::Halt(e),
            Err(e) => Evaluated::Suppressed(e),
        }
    }
}

/// Everything a statement may touch while it executes. Borrowed for the
/// duration of one call only.
pub struct Context<'a> {
    pub listing: &'a Listing,
    pub vars: &'a mut Var,
    pub events: &'a mut VecDeque<Event>,
    pub line: Option<LineNumber>,
}

impl<'a> Context<'a> {
    fn print(&mut self, s: String) {
        self.events.push_back(Event::Print(s));
    }

    fn report(&mut self, error: Error) {
        let error = match self.line {
            Some(line) => error.in_line_number(line),
            None => error,
        };
        self.events.push_back(Event::Error(error));
    }

    /// Evaluate, reporting a halt or suppressed failure as it happens.
    fn evaluate(&mut self, expr: &Expression) -> Evaluated {
        let evaluated = Evaluated::from(expr.eval(self.vars));
        match &evaluated {
            Evaluated::Halt(e) | Evaluated::Suppressed(e) => self.report(e.clone()),
            Evaluated::Value(_) => {}
        }
        evaluated
    }
}

macro_rules! value {
    ($evaluated:expr) => {
        match $evaluated {
            Evaluated::Value(n) => n,
            Evaluated::Halt(_) => return Ok(Flow::Halt),
            Evaluated::Suppressed(_) => return Ok(Flow::Advance),
        }
    };
}

impl Statement {
    /// Run-mode execution inside a stored program. The returned flow
    /// is the only way a statement moves the cursor.
    pub fn execute(&self, ctx: &mut Context) -> Result<Flow> {
        trace!(line = ?ctx.line, statement = ?self, "execute");
        match self {
            Statement::Rem => Ok(Flow::Advance),
            Statement::Let(var, expr) => {
                let value = expr.eval(ctx.vars)?;
                ctx.vars.store(var, value);
                Ok(Flow::Advance)
            }
            Statement::Print(expr) => {
                let value = value!(ctx.evaluate(expr));
                ctx.print(format!("{}\n", value));
                Ok(Flow::Advance)
            }
            Statement::Input(var) => Ok(Flow::Input(var.clone())),
            Statement::End => Ok(Flow::Halt),
            Statement::Goto(line) => Ok(Flow::JumpTo(*line)),
            Statement::If(lhs, relation, rhs, then) => {
                let (lhs, rhs) = match (ctx.evaluate(lhs), ctx.evaluate(rhs)) {
                    (Evaluated::Value(lhs), Evaluated::Value(rhs)) => (lhs, rhs),
                    (Evaluated::Halt(_), _) | (_, Evaluated::Halt(_)) => return Ok(Flow::Halt),
                    _ => return Ok(Flow::Advance),
                };
                trace!(lhs, %relation, rhs, "compare");
                if relation.holds(lhs, rhs) {
                    Ok(Flow::JumpTo(*then))
                } else {
                    Ok(Flow::Advance)
                }
            }
        }
    }

    /// Immediate-mode execution of a typed line. There is no cursor, so
    /// jumps are only checked for a valid target. Returns the variable
    /// to read when the statement waits for input.
    pub fn execute_direct(&self, ctx: &mut Context) -> Result<Option<Ident>> {
        match self.execute(ctx)? {
            Flow::Advance | Flow::Halt => Ok(None),
            Flow::JumpTo(line) => {
                if !ctx.listing.contains(line) {
                    return Err(error!(LineNumberError));
                }
                Ok(None)
            }
            Flow::Input(var) => Ok(Some(var)),
        }
    }
}

/// A signed decimal integer, as INPUT accepts it. Only the line ending
/// is stripped; any other whitespace makes the answer invalid.
pub fn parse_input(s: &str) -> Result<i32> {
    let s = s.trim_end_matches(|c| c == '\n' || c == '\r');
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(error!(InvalidNumber));
    }
    s.parse::<i32>().map_err(|_| error!(InvalidNumber))
}
