//! Trace event and record types.

use lautgesetz_engine::Stage;
use lautgesetz_foundation::Notation;

// =============================================================================
// Trace Event
// =============================================================================

/// Every value [`TraceEvent::event_type`] can return.
pub const EVENT_TYPES: [&str; 4] = [
    "derivation-start",
    "stage",
    "derivation-end",
    "derivation-failed",
];

/// Events recorded while deriving words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// A derivation has started.
    DerivationStart {
        /// The input text.
        input: String,
        /// The notation the input is parsed in.
        notation: Notation,
    },

    /// A stage was recorded. Stage 0 is the parsed input.
    StageRecorded {
        /// Position in the derivation.
        index: usize,
        /// Machine name of the law, `None` for the input.
        law: Option<String>,
        /// Stage label.
        label: String,
        /// Rendered text after the stage.
        text: String,
        /// Rewrites performed.
        changes: usize,
    },

    /// A derivation finished.
    DerivationEnd {
        /// The input text.
        input: String,
        /// Final rendered text.
        output: String,
    },

    /// A derivation stopped with an error.
    DerivationFailed {
        /// The input text.
        input: String,
        /// Error message.
        message: String,
    },
}

impl TraceEvent {
    /// Builds a stage event from a pipeline stage.
    #[must_use]
    pub fn stage(stage: &Stage) -> Self {
        Self::StageRecorded {
            index: stage.index,
            law: stage.law.clone(),
            label: stage.label.clone(),
            text: stage.text().to_string(),
            changes: stage.changes,
        }
    }

    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::DerivationStart { .. } => "derivation-start",
            Self::StageRecorded { .. } => "stage",
            Self::DerivationEnd { .. } => "derivation-end",
            Self::DerivationFailed { .. } => "derivation-failed",
        }
    }

    /// Returns true if this event opens or closes a derivation.
    #[must_use]
    pub fn is_boundary(&self) -> bool {
        !matches!(self, Self::StageRecorded { .. })
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A timestamped trace record.
#[derive(Clone, Debug)]
pub struct TraceRecord {
    /// Unique record ID within the session.
    pub id: u64,
    /// Sequence number of the derivation the event belongs to.
    pub derivation: u64,
    /// Timestamp in nanoseconds since session start.
    pub timestamp_ns: u64,
    /// The trace event.
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a new trace record.
    #[must_use]
    pub fn new(id: u64, derivation: u64, timestamp_ns: u64, event: TraceEvent) -> Self {
        Self {
            id,
            derivation,
            timestamp_ns,
            event,
        }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}
