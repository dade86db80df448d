use std::{
    io::{self, BufRead, Write},
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use kaprekar_core::{explore_with, validate, Exploration, ValidationError};
use tracing::{debug, error, info};

use crate::{
    config::Settings,
    render::{Renderer, Tone},
};

const NUMBER_PROMPT: &str = "Enter a 4-digit number";
const CONTINUE_PROMPT: &str = "Try another number? [y/n/yes/no] (y)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Explored(Exploration),
    Rejected(ValidationError),
}

/// Turns one line of user input into a [`Response`]. Holds no console state.
#[derive(Debug, Clone)]
pub struct Session {
    max_steps: usize,
}

impl Session {
    pub fn new(settings: &Settings) -> Self {
        Self {
            max_steps: settings.max_steps,
        }
    }

    pub fn submit(&self, line: &str) -> Response {
        match validate(line) {
            Ok(candidate) => {
                let exploration = explore_with(candidate, self.max_steps, |step, record| {
                    debug!(step, %record, "kaprekar step");
                });
                info!(
                    start = exploration.start,
                    steps = exploration.steps(),
                    outcome = ?exploration.outcome,
                    "exploration complete"
                );
                Response::Explored(exploration)
            }
            Err(error) => {
                debug!(input = line.trim(), %error, "rejected input");
                Response::Rejected(error)
            }
        }
    }
}

/// `Some(true)` to continue, `Some(false)` to stop, `None` to ask again.
/// Choices are case-sensitive; a blank answer takes the default "y".
pub fn parse_continue(answer: &str) -> Option<bool> {
    match answer.trim() {
        "" | "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// What the prompt loop receives next.
#[derive(Debug)]
pub enum Input {
    Line(String),
    /// The input stream ended.
    Closed,
    /// The user pressed Ctrl-C.
    Interrupted,
}

pub trait InputSource {
    fn next_input(&mut self) -> io::Result<Input>;
}

impl<R: BufRead> InputSource for R {
    fn next_input(&mut self) -> io::Result<Input> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(Input::Closed);
        }
        Ok(Input::Line(line))
    }
}

/// Inputs delivered over a channel, so an interrupt can arrive while a line
/// read is still blocked.
pub struct ChannelInput {
    receiver: Receiver<io::Result<Input>>,
}

impl ChannelInput {
    pub fn new(receiver: Receiver<io::Result<Input>>) -> Self {
        Self { receiver }
    }

    /// Reads stdin lines on a background thread. The returned sender feeds the
    /// same queue and is meant for the Ctrl-C handler.
    pub fn stdin() -> (Self, Sender<io::Result<Input>>) {
        let (sender, receiver) = mpsc::channel();
        let lines = sender.clone();
        thread::spawn(move || {
            let mut stdin = io::stdin().lock();
            loop {
                let next = stdin.next_input();
                let more = matches!(next, Ok(Input::Line(_)));
                if lines.send(next).is_err() || !more {
                    break;
                }
            }
        });
        (Self::new(receiver), sender)
    }
}

impl InputSource for ChannelInput {
    fn next_input(&mut self) -> io::Result<Input> {
        self.receiver.recv().unwrap_or(Ok(Input::Closed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exit {
    Declined,
    Interrupted,
}

/// Prompt loop over `input`, rendering to `output`. Returns an error only when
/// `output` itself can no longer be written.
pub fn run_interactive<R, W>(
    input: &mut R,
    output: &mut W,
    session: &Session,
    renderer: &Renderer,
) -> io::Result<()>
where
    R: InputSource,
    W: Write,
{
    renderer.welcome(output)?;

    match drive(input, output, session, renderer) {
        Ok(Exit::Declined) => {}
        Ok(Exit::Interrupted) => {
            writeln!(output, "\n\n{}", renderer.paint("Goodbye!", Tone::Warning))?;
        }
        Err(err) => {
            error!(error = %err, "interactive session aborted");
            eprintln!("{} {err}", renderer.paint("Unexpected error:", Tone::Error));
        }
    }

    writeln!(
        output,
        "\n{}",
        renderer.paint("Thank you for exploring Kaprekar's constant!", Tone::Success)
    )?;
    output.flush()
}

fn drive<R, W>(
    input: &mut R,
    output: &mut W,
    session: &Session,
    renderer: &Renderer,
) -> io::Result<Exit>
where
    R: InputSource,
    W: Write,
{
    loop {
        renderer.prompt(output, NUMBER_PROMPT)?;
        let Some(line) = next_line(input)? else {
            return Ok(Exit::Interrupted);
        };

        match session.submit(&line) {
            Response::Rejected(error) => {
                renderer.error(output, &error.to_string())?;
                continue;
            }
            Response::Explored(exploration) => renderer.exploration(output, &exploration)?,
        }

        let keep_going = loop {
            renderer.prompt(output, CONTINUE_PROMPT)?;
            let Some(answer) = next_line(input)? else {
                return Ok(Exit::Interrupted);
            };
            match parse_continue(&answer) {
                Some(choice) => break choice,
                None => renderer.error(output, "Please select one of the available options")?,
            }
        };
        if !keep_going {
            return Ok(Exit::Declined);
        }
    }
}

/// `None` once the stream closes or the user interrupts.
fn next_line<R: InputSource>(input: &mut R) -> io::Result<Option<String>> {
    match input.next_input()? {
        Input::Line(line) => Ok(Some(line)),
        Input::Closed => Ok(None),
        Input::Interrupted => {
            debug!("prompt interrupted");
            Ok(None)
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
