//! Console line input.
//!
//! One prompt, one line. When stdin is a terminal the line is read through
//! `rustyline` with persistent history; otherwise a plain stdin read, so
//! piped input still works. Which mode applies is decided once, when the
//! manager is built.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

/// Outcome of reading a line from the console.
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

type PromptEditor = rustyline::Editor<(), DefaultHistory>;

/// Reads prompt responses, interactively when stdin is a terminal.
pub struct InputManager {
    editor: Option<PromptEditor>,
    history: Option<PathBuf>,
}

impl InputManager {
    pub fn new() -> Self {
        if !io::stdin().is_terminal() {
            info!("stdin is not a TTY; reading plain lines");
            return Self { editor: None, history: None };
        }

        match PromptEditor::new() {
            Ok(mut editor) => {
                let history = history_path();
                if let Some(path) = history.as_ref() {
                    load_history(&mut editor, path);
                }
                Self { editor: Some(editor), history }
            },
            Err(err) => {
                warn!("rustyline unavailable ({err}); reading plain lines");
                Self { editor: None, history: None }
            },
        }
    }

    /// Show `prompt` and read one line, without its trailing newline.
    ///
    /// # Errors
    /// - Propagates I/O failures from the underlying reader.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        let Some(editor) = self.editor.as_mut() else {
            return read_plain_line(prompt);
        };

        match editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    remember(editor, self.history.as_deref(), &line);
                }
                Ok(InputEvent::Line(line))
            },
            Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
            Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
            Err(ReadlineError::Io(io_err)) => Err(io_err),
            Err(other) => Err(io::Error::other(other)),
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

fn read_plain_line(prompt: &str) -> io::Result<InputEvent> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(InputEvent::Eof);
    }
    trim_newline(&mut line);
    Ok(InputEvent::Line(line))
}

/// Strip one trailing LF or CRLF, leaving all other whitespace alone.
fn trim_newline(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

fn history_path() -> Option<PathBuf> {
    dirs::data_dir().or_else(dirs::data_local_dir).map(|base| history_path_in(&base))
}

fn history_path_in(base: &Path) -> PathBuf {
    base.join("matweave").join("history.txt")
}

fn load_history(editor: &mut PromptEditor, path: &Path) {
    if let Some(dir) = path.parent() {
        if let Err(err) = fs::create_dir_all(dir) {
            warn!("failed to create history directory {}: {err}", dir.display());
        }
    }

    match editor.load_history(path) {
        Ok(()) => {},
        Err(ReadlineError::Io(ref io_err)) if io_err.kind() == io::ErrorKind::NotFound => {
            info!("no prior history at {}, starting fresh", path.display());
        },
        Err(err) => warn!("failed to load history from {}: {err}", path.display()),
    }
}

/// Record a non-empty response in the editor history and persist it.
/// History failures are logged, never fatal.
fn remember(editor: &mut PromptEditor, path: Option<&Path>, line: &str) {
    if let Err(err) = editor.add_history_entry(line) {
        warn!("failed to record history entry: {err}");
    }
    let Some(path) = path else { return };
    if let Err(err) = editor.save_history(path) {
        warn!("failed to persist history to {}: {err}", path.display());
    }
}
