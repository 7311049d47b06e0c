//! Error types for the Lautgesetz system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every failure in the core is a hard stop; callers decide what to do
//! with it at the boundary.

use std::fmt;

use thiserror::Error;

use crate::notation::Notation;

/// Result type alias for Lautgesetz operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Lautgesetz operations.
///
/// Displays as the kind's message, followed by the definition source and
/// line when a context carries them.
#[derive(Debug, Error)]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unknown symbol error.
    #[must_use]
    pub fn unknown_symbol(symbol: impl Into<String>, notation: Notation) -> Self {
        Self::new(ErrorKind::UnknownSymbol {
            symbol: symbol.into(),
            notation,
        })
    }

    /// Creates an unknown quality error.
    #[must_use]
    pub fn unknown_quality(quality: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownQuality {
            quality: quality.into(),
            symbol: symbol.into(),
        })
    }

    /// Creates a missing grapheme error for a feature description.
    #[must_use]
    pub fn missing_grapheme(features: impl Into<String>, notation: Notation) -> Self {
        Self::new(ErrorKind::MissingGraphemeForFeatures {
            features: features.into(),
            notation,
        })
    }

    /// Creates a malformed secondary mark error.
    #[must_use]
    pub fn malformed_secondary_mark(mark: char, notation: Notation) -> Self {
        Self::new(ErrorKind::MalformedSecondaryMark { mark, notation })
    }

    /// Creates a malformed inventory entry error.
    #[must_use]
    pub fn malformed_entry(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedEntry(message.into()))
    }

    /// Creates an index out of bounds error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfBounds { index, length })
    }

    /// Creates an unknown notation error.
    #[must_use]
    pub fn unknown_notation(tag: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownNotation(tag.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates an invalid command error.
    #[must_use]
    pub fn invalid_command(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCommand(message.into()))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(location) = self.context.as_ref().and_then(ErrorContext::location) {
            write!(f, " ({location})")?;
        }
        Ok(())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An input symbol is not present in the loaded inventory.
    #[error("unknown symbol {symbol:?} (notation: {notation})")]
    UnknownSymbol {
        /// The offending written unit.
        symbol: String,
        /// The notation it was looked up in.
        notation: Notation,
    },

    /// An inventory definition used a quality token nobody recognizes.
    #[error("unknown quality {quality:?} for symbol {symbol:?}")]
    UnknownQuality {
        /// The unrecognized token.
        quality: String,
        /// The symbol being defined.
        symbol: String,
    },

    /// A feature bundle has no registered grapheme.
    #[error("no grapheme for {features} (notation: {notation})")]
    MissingGraphemeForFeatures {
        /// Description of the bundle that was looked up.
        features: String,
        /// The notation that was consulted.
        notation: Notation,
    },

    /// A secondary mark appeared where no base symbol precedes it.
    #[error("secondary mark {mark:?} at beginning of word (notation: {notation})")]
    MalformedSecondaryMark {
        /// The mark.
        mark: char,
        /// The notation of the input.
        notation: Notation,
    },

    /// An inventory definition entry is malformed.
    #[error("malformed inventory entry: {0}")]
    MalformedEntry(String),

    /// Index out of bounds.
    #[error("index out of bounds: {index} (length {length})")]
    IndexOutOfBounds {
        /// The index that was accessed.
        index: usize,
        /// The actual length of the sequence.
        length: usize,
    },

    /// A notation tag that no inventory is defined for.
    #[error("unknown notation: {0}")]
    UnknownNotation(String),

    /// Reading a definition failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// A REPL or command-line argument was not understood.
    #[error("invalid command: {0}")]
    InvalidCommand(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or definition name.
    pub source: Option<String>,
    /// Line number in source (1-indexed).
    pub line: Option<usize>,
    /// Stack of stages the error passed through.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }

    /// Returns `at SOURCE[:LINE]`, or `None` without a source.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        let source = self.source.as_deref()?;
        Some(match self.line {
            Some(line) => format!("at {source}:{line}"),
            None => format!("at {source}"),
        })
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = self.location() {
            write!(f, "{location}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
