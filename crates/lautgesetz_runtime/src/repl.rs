//! The interactive derivation loop.

use crate::editor::{LineEditor, ReadResult, RustylineEditor, default_keywords};
use crate::session::{OutputFormat, Session};
use lautgesetz_debug::EVENT_TYPES;
use lautgesetz_foundation::{DevoicePolicy, Error, Notation, Result};
use std::io::{self, Write};

const HELP: &str = "\
Enter one or more words to derive them.

Commands:
  :analyze WORD          show graphemes, phonemes and syllabicity
  :trace on|off          echo derivation records to stderr
  :trace last N          show the N most recent trace records
  :trace clear           drop buffered trace records
  :trace only TYPE...    record only these events (stage, derivation-start,
                         derivation-end, derivation-failed)
  :trace all             record every event again
  :json on|off           switch between text and JSON output
  :notation TAG          parse input in TAG (PIE, PBS)
  :aspiration keep|drop  how devoicing treats aspirated stops
  :laws                  list the laws in order
  :help                  show this message
  :quit                  leave the REPL";

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Inventories, configuration and tracer.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,

    /// Cleared by `:quit`.
    running: bool,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E, session: Session) -> Self {
        editor.set_keywords(default_keywords());
        let prompt = format!("{}> ", session.config().ancestor.tag());
        Self {
            editor,
            session,
            show_banner: true,
            prompt,
            running: true,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the prompt shown before each line.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.running {
            let input = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => {
                    println!();
                    continue;
                }
                ReadResult::Eof => break,
            };

            if input.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&input);

            match self.eval(&input) {
                Ok(Some(output)) => println!("{output}"),
                Ok(None) => {}
                Err(e) => Self::print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Evaluates one line: a command or words to derive.
    ///
    /// Returns the text to print, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if a command is malformed or a word fails to derive.
    pub fn eval(&mut self, input: &str) -> Result<Option<String>> {
        let input = input.trim();
        if let Some(command) = input.strip_prefix(':') {
            return self.eval_command(command);
        }

        let outputs = input
            .split_whitespace()
            .map(|word| self.session.run(word))
            .collect::<Result<Vec<_>>>()?;
        if outputs.is_empty() {
            Ok(None)
        } else {
            Ok(Some(outputs.join("\n\n")))
        }
    }

    fn eval_command(&mut self, command: &str) -> Result<Option<String>> {
        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match (name, args.as_slice()) {
            ("help" | "h" | "?", []) => Ok(Some(HELP.to_string())),
            ("quit" | "q" | "exit", []) => {
                self.running = false;
                Ok(None)
            }
            ("analyze" | "a", [word]) => {
                let analysis = self.session.analyze(word)?;
                match self.session.format() {
                    OutputFormat::Text => Ok(Some(analysis.to_string())),
                    OutputFormat::Json => serde_json::to_string_pretty(&analysis)
                        .map(Some)
                        .map_err(|e| Error::io(e.to_string())),
                }
            }
            ("trace", args) => self.eval_trace(args),
            ("json", [flag]) => {
                let format = if parse_switch(flag)? {
                    OutputFormat::Json
                } else {
                    OutputFormat::Text
                };
                self.session.set_format(format);
                Ok(None)
            }
            ("notation", [tag]) => {
                let notation: Notation = tag.parse()?;
                self.session.set_notation(notation);
                self.prompt = format!("{}> ", notation.tag());
                Ok(Some(format!("Input notation: {}", notation.label())))
            }
            ("aspiration", [policy]) => {
                let policy = match *policy {
                    "keep" => DevoicePolicy::KeepAspiration,
                    "drop" => DevoicePolicy::Deaspirate,
                    other => {
                        return Err(Error::invalid_command(format!(
                            "expected keep or drop, got {other:?}"
                        )));
                    }
                };
                self.session.set_devoice_policy(policy);
                Ok(None)
            }
            ("laws", []) => {
                let pipeline = self.session.pipeline();
                let lines: Vec<String> = pipeline
                    .laws()
                    .iter()
                    .enumerate()
                    .map(|(i, law)| format!("{} {:<16} {}", i + 1, law.name(), law.label()))
                    .collect();
                Ok(Some(lines.join("\n")))
            }
            _ => Err(Error::invalid_command(format!(
                ":{command} (type :help for a list of commands)"
            ))),
        }
    }

    fn eval_trace(&mut self, args: &[&str]) -> Result<Option<String>> {
        match args {
            ["last", count] => {
                let count: usize = count.parse().map_err(|_| {
                    Error::invalid_command(format!("expected a record count, got {count:?}"))
                })?;
                let tracer = self.session.tracer();
                let records = tracer.buffer().recent(count);
                if records.is_empty() {
                    Ok(Some("No trace records.".to_string()))
                } else {
                    Ok(Some(tracer.format_records(&records)))
                }
            }
            ["clear"] => {
                self.session.tracer_mut().clear();
                Ok(None)
            }
            ["all"] => {
                self.session.tracer_mut().set_event_filter(Vec::new());
                Ok(Some("Recording all trace events".to_string()))
            }
            ["only", types @ ..] if !types.is_empty() => {
                if let Some(unknown) = types.iter().find(|t| !EVENT_TYPES.contains(*t)) {
                    return Err(Error::invalid_command(format!(
                        "unknown trace event {unknown:?} (expected one of {})",
                        EVENT_TYPES.join(", ")
                    )));
                }
                let types: Vec<String> = types.iter().map(|t| (*t).to_string()).collect();
                let message = format!("Recording only {}", types.join(", "));
                self.session.tracer_mut().set_event_filter(types);
                Ok(Some(message))
            }
            [flag] => {
                let on = parse_switch(flag)?;
                self.session.set_trace(on);
                Ok(Some(format!("Tracing {}", if on { "on" } else { "off" })))
            }
            _ => Err(Error::invalid_command(
                ":trace on|off|clear|all|only TYPE...|last N".to_string(),
            )),
        }
    }

    /// Prints an error to stderr.
    fn print_error(error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        println!("\x1b[1;36mLautgesetz v{}\x1b[0m", env!("CARGO_PKG_VERSION"));
        println!(
            "Deriving {} forms into {}. Type :help for commands, Ctrl+D to exit.\n",
            self.session.config().ancestor.label(),
            self.session.config().descendant.label()
        );
        let _ = io::stdout().flush();
    }
}

fn parse_switch(flag: &str) -> Result<bool> {
    match flag {
        "on" => Ok(true),
        "off" => Ok(false),
        other => Err(Error::invalid_command(format!(
            "expected on or off, got {other:?}"
        ))),
    }
}
