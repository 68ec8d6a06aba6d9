extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use basic::mach::{Event, Runtime};
use linefeed::{Interface, ReadResult, Signal};
use std::io::{BufRead, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Statements run between checks for Ctrl-C.
const CYCLES: usize = 5000;

pub fn main() {
    init_tracing();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        tracing::warn!(%error, "Ctrl-C handler not installed");
    }
    let result = if std::io::stdin().is_terminal() {
        main_loop(interrupted)
    } else {
        piped_loop(interrupted)
    };
    if let Err(error) = result {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr and only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main_loop(interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let mut runtime = Runtime::default();
    let command = Interface::new("BASIC")?;
    let input = Interface::new("INPUT")?;
    input.set_report_signal(Signal::Interrupt, true);

    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(CYCLES) {
            Event::Stopped => {
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                if runtime.enter(&string) {
                    command.add_history_unique(string);
                }
            }
            Event::Input(prompt) => {
                input.set_prompt(&prompt)?;
                match input.read_line()? {
                    ReadResult::Input(string) => {
                        runtime.enter(&string);
                    }
                    ReadResult::Signal(Signal::Interrupt) => {
                        input.set_buffer("")?;
                        input.lock_reader().cancel_read_line()?;
                        runtime.interrupt();
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
            }
            Event::Error(error) => {
                command.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(error.to_string())
                ))?;
            }
            Event::Running => {}
            Event::Print(s) => {
                command.write_fmt(format_args!("{}", s))?;
            }
            Event::List(s) => {
                command.write_fmt(format_args!("{}\n", s))?;
            }
            Event::Quit => break,
        }
    }
    Ok(())
}

/// Scripted sessions: lines come from stdin as-is, output is plain.
fn piped_loop(interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let mut runtime = Runtime::default();
    let mut lines = std::io::stdin().lock().lines();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(CYCLES) {
            Event::Stopped => match lines.next() {
                Some(line) => {
                    runtime.enter(&line?);
                }
                None => break,
            },
            Event::Input(prompt) => {
                write!(out, "{}", prompt)?;
                out.flush()?;
                match lines.next() {
                    Some(line) => {
                        runtime.enter(&line?);
                    }
                    None => break,
                }
            }
            Event::Error(error) => writeln!(out, "{}", error)?,
            Event::Running => {}
            Event::Print(s) => write!(out, "{}", s)?,
            Event::List(s) => writeln!(out, "{}", s)?,
            Event::Quit => break,
        }
    }
    out.flush()
}
