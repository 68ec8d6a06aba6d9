use super::exec::{parse_input, Context, Flow};
use super::{Listing, Var};
use crate::error;
use crate::lang::ast::{Command, Ident, Statement};
use crate::lang::{parse_command, Error, Line, LineNumber};
use std::collections::VecDeque;
use tracing::{debug, trace};

const PROMPT: &str = " ? ";

const HELP: &str = "\
Enter a line number followed by a statement to store it, or a line
number alone to delete that line.
Statements: REM, LET var = expr, PRINT expr, INPUT var, END,
            GOTO line, IF expr op expr THEN line (op is =, < or >)
Commands:   RUN, LIST, CLEAR, QUIT, HELP, and LET, PRINT, INPUT
";

/// ## Events
///
/// Returned by `Runtime::execute` to tell the front end what to do next.
#[derive(Debug, PartialEq, Clone)]
pub enum Event {
    /// Nothing is running. Read a command with `enter`.
    Stopped,
    /// The time slice ran out; call `execute` again.
    Running,
    Print(String),
    List(String),
    Error(Error),
    /// Read an answer for INPUT with `enter`.
    Input(String),
    Quit,
}

#[derive(Debug, PartialEq)]
enum State {
    Stopped,
    Running(LineNumber),
    Input {
        var: Ident,
        resume: Option<LineNumber>,
    },
}

/// ## Runtime
///
/// One interactive session: the stored program, the variables and the
/// cursor of the program being run.
#[derive(Debug)]
pub struct Runtime {
    listing: Listing,
    vars: Var,
    state: State,
    pending: VecDeque<Event>,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime {
            listing: Listing::default(),
            vars: Var::new(),
            state: State::Stopped,
            pending: VecDeque::new(),
        }
    }
}

impl Runtime {
    /// Accept a line of input. Returns false when the line was ignored.
    pub fn enter(&mut self, s: &str) -> bool {
        if let State::Input { .. } = self.state {
            self.enter_input(s);
            return true;
        }
        if let State::Running(_) = self.state {
            debug!("input ignored while running");
            return false;
        }
        let line = match Line::new(s) {
            Ok(line) => line,
            Err(error) => {
                self.pending.push_back(Event::Error(error));
                return true;
            }
        };
        if line.is_direct() {
            if line.is_empty() {
                return false;
            }
            match parse_command(line.source()) {
                Ok(command) => self.command(command),
                Err(error) => self.pending.push_back(Event::Error(error)),
            }
        } else if let (Some(number), Some(literal)) = (line.number(), line.literal()) {
            self.program_line(number, literal, line.source());
        }
        true
    }

    /// Run up to `cycles` program statements and report what happened.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(event) = self.pending.pop_front() {
            return event;
        }
        for _ in 0..cycles {
            match self.state {
                State::Running(cursor) => self.step(cursor),
                _ => break,
            }
            if !self.pending.is_empty() {
                break;
            }
        }
        if let Some(event) = self.pending.pop_front() {
            return event;
        }
        match self.state {
            State::Stopped => Event::Stopped,
            State::Running(_) => Event::Running,
            State::Input { .. } => Event::Input(PROMPT.to_string()),
        }
    }

    /// Stop the program or abandon a pending INPUT.
    pub fn interrupt(&mut self) {
        if self.state != State::Stopped {
            let error = match self.state {
                State::Running(line)
                | State::Input {
                    resume: Some(line), ..
                } => error!(Break, line),
                _ => error!(Break),
            };
            debug!(state = ?self.state, "interrupted");
            self.state = State::Stopped;
            self.pending.push_back(Event::Error(error));
        }
    }

    /// The line about to execute, or None when no program is running.
    pub fn cursor(&self) -> Option<LineNumber> {
        match self.state {
            State::Running(line) => Some(line),
            _ => None,
        }
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    fn program_line(&mut self, number: LineNumber, literal: &str, source: &str) {
        if source.trim().is_empty() {
            debug!(line = number, "remove line");
            self.listing.remove(number);
            return;
        }
        match self.listing.insert(number, literal, source) {
            Ok(_) => debug!(line = number, source, "store line"),
            Err(error) => self.pending.push_back(Event::Error(error)),
        }
    }

    fn command(&mut self, command: Command) {
        match command {
            Command::Statement(statement) => self.direct(statement),
            Command::Run => self.run(),
            Command::List => {
                for line in self.listing.lines() {
                    self.pending.push_back(Event::List(line));
                }
            }
            Command::Clear => {
                debug!("clear program and variables");
                self.listing.clear();
                self.vars.clear();
            }
            Command::Quit => {
                self.listing.clear();
                self.pending.push_back(Event::Quit);
            }
            Command::Help => self.pending.push_back(Event::Print(HELP.to_string())),
        }
    }

    fn direct(&mut self, statement: Statement) {
        let mut ctx = Context {
            listing: &self.listing,
            vars: &mut self.vars,
            events: &mut self.pending,
            line: None,
        };
        match statement.execute_direct(&mut ctx) {
            Ok(Some(var)) => {
                self.state = State::Input { var, resume: None };
            }
            Ok(None) => {}
            Err(error) => self.pending.push_back(Event::Error(error)),
        }
    }

    fn enter_input(&mut self, s: &str) {
        let value = match parse_input(s) {
            Ok(value) => value,
            Err(error) => {
                self.pending.push_back(Event::Print(format!("{}\n", error)));
                return;
            }
        };
        let state = std::mem::replace(&mut self.state, State::Stopped);
        if let State::Input { var, resume } = state {
            trace!(var = %var, value, "input");
            self.vars.store(&var, value);
            if let Some(cursor) = resume {
                self.advance_to_next(cursor);
            }
        }
    }

    fn run(&mut self) {
        debug!(lines = self.listing.len(), "run");
        match self.listing.first_line() {
            Some(line) => self.state = State::Running(line),
            None => self.halt(),
        }
    }

    fn step(&mut self, cursor: LineNumber) {
        let flow = match self.listing.statement(cursor) {
            Some(statement) => {
                let mut ctx = Context {
                    listing: &self.listing,
                    vars: &mut self.vars,
                    events: &mut self.pending,
                    line: Some(cursor),
                };
                statement.execute(&mut ctx)
            }
            None => Err(error!(LineNumberError)),
        };
        let result = match flow {
            Ok(Flow::Advance) => {
                self.advance_to_next(cursor);
                Ok(())
            }
            Ok(Flow::JumpTo(line)) => self.goto_line_number(line),
            Ok(Flow::Halt) => {
                self.halt();
                Ok(())
            }
            Ok(Flow::Input(var)) => {
                self.state = State::Input {
                    var,
                    resume: Some(cursor),
                };
                Ok(())
            }
            Err(error) => Err(error),
        };
        if let Err(error) = result {
            debug!(line = cursor, %error, "run aborted");
            self.halt();
            self.pending
                .push_back(Event::Error(error.in_line_number(cursor)));
        }
    }

    fn advance_to_next(&mut self, cursor: LineNumber) {
        match self.listing.next_line(cursor) {
            Some(line) => self.state = State::Running(line),
            None => self.halt(),
        }
    }

    /// Move the cursor to a stored line. A missing target leaves the
    /// cursor where it was.
    fn goto_line_number(&mut self, line: LineNumber) -> Result<(), Error> {
        if !self.listing.contains(line) {
            return Err(error!(LineNumberError));
        }
        trace!(line, "jump");
        self.state = State::Running(line);
        Ok(())
    }

    fn halt(&mut self) {
        if let State::Running(line) = self.state {
            debug!(line, "halt");
        }
        self.state = State::Stopped;
    }
}
