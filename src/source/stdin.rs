//! Stdin-based row source for piped input.
//!
//! A background thread blocks on line reads and forwards them over a
//! channel, so the TUI event loop can poll without blocking. Supports both
//! streaming input (`tail -f data.jsonl | flextab`) and complete input
//! (`cat data.jsonl | flextab`).

use crate::model::error::InputError;
use std::io::{BufRead, BufReader, IsTerminal, Read};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::thread;

/// Message from the reader thread.
enum ReaderMessage {
    Line(String),
    Eof,
}

/// Stdin source for piped JSONL input.
#[derive(Debug)]
pub struct StdinSource {
    rx: Receiver<ReaderMessage>,
    complete: bool,
}

impl StdinSource {
    /// Create a new StdinSource from the process's stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY (interactive
    /// terminal). This prevents the TUI from blocking on user input when the
    /// user forgot to pipe data.
    pub fn new() -> Result<Self, InputError> {
        if std::io::stdin().is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self::from_reader(std::io::stdin()))
    }

    /// Create a StdinSource from any reader.
    ///
    /// Bypasses the TTY check; also the test entry point.
    pub fn from_reader(reader: impl Read + Send + 'static) -> Self {
        let (tx, rx) = std::sync::mpsc::channel();

        thread::spawn(move || {
            let buffered = BufReader::new(reader);
            for line in buffered.lines() {
                let message = match line {
                    Ok(line) => ReaderMessage::Line(line),
                    // Read errors terminate the stream like EOF does.
                    Err(_) => ReaderMessage::Eof,
                };
                let is_eof = matches!(message, ReaderMessage::Eof);
                if tx.send(message).is_err() || is_eof {
                    return;
                }
            }
            let _ = tx.send(ReaderMessage::Eof);
        });

        Self {
            rx,
            complete: false,
        }
    }

    /// Poll for new lines.
    ///
    /// Non-blocking: drains whatever the reader thread has produced so far.
    /// Sets the complete flag when EOF is reached.
    pub fn poll(&mut self) -> Result<Vec<String>, InputError> {
        let mut lines = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(ReaderMessage::Line(line)) => lines.push(line),
                Ok(ReaderMessage::Eof) => {
                    self.complete = true;
                    break;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.complete = true;
                    break;
                }
            }
        }
        Ok(lines)
    }

    /// Check if EOF has been reached (no more data will arrive).
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}
