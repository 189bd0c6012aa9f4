use std::io::{self, BufRead, Write};

/// Yes/no confirmation asked before destructive steps.
pub trait Prompter {
    fn confirm(&mut self, question: &str) -> bool;
}

/// Asks on stderr and reads the answer from stdin. Only `y`/`yes` accepts;
/// anything else, including a read error, declines.
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn confirm(&mut self, question: &str) -> bool {
        ask(question, &mut io::stdin().lock(), &mut io::stderr())
    }
}

fn ask<R: BufRead, W: Write>(question: &str, reader: &mut R, writer: &mut W) -> bool {
    if write!(writer, "{question} ").and_then(|_| writer.flush()).is_err() {
        return false;
    }
    let mut answer = String::new();
    match reader.read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

/// Prompter with a fixed answer; used when no terminal interaction is wanted.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Prompter for FixedAnswer {
    fn confirm(&mut self, _question: &str) -> bool {
        self.0
    }
}
