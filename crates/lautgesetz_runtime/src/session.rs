//! Session state for the CLI and REPL.
//!
//! A session owns the inventories, the derivation configuration and the
//! tracer, and turns input words into printable output.

use std::fmt;
use std::path::Path;

use lautgesetz_debug::{TraceOutput, Tracer, TracerConfig};
use lautgesetz_engine::{Derivation, DerivationConfig, Pipeline};
use lautgesetz_foundation::{DevoicePolicy, Error, Notation, Result};
use lautgesetz_inventory::Inventories;
use lautgesetz_word::{Word, WordSnapshot};
use serde::Serialize;

// =============================================================================
// Output Format
// =============================================================================

/// How results are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `<stage> <text> <label>` line per stage.
    #[default]
    Text,
    /// One JSON document per word.
    Json,
}

// =============================================================================
// Analysis
// =============================================================================

/// A parsed word before any law has applied.
#[derive(Clone, Debug, Serialize)]
pub struct Analysis {
    /// The word as parsed.
    #[serde(flatten)]
    pub word: WordSnapshot,
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: Vec<&str> = self
            .word
            .syllabic
            .iter()
            .map(|s| if *s { "1" } else { "0" })
            .collect();
        writeln!(f, "Graphemes: [{}]", self.word.graphemes.join(", "))?;
        writeln!(f, "Phonemes: [{}]", self.word.phonemes.join(", "))?;
        write!(f, "Syllabic: [{}]", flags.join(", "))
    }
}

// =============================================================================
// Session
// =============================================================================

/// Inventories, configuration and tracing for one run.
#[derive(Debug)]
pub struct Session {
    inventories: Inventories,
    config: DerivationConfig,
    tracer: Tracer,
    format: OutputFormat,
    analyze: bool,
}

impl Session {
    /// Creates a session over the built-in inventories.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in definition is malformed.
    pub fn new() -> Result<Self> {
        Ok(Self::with_inventories(Inventories::builtin()?))
    }

    /// Creates a session over inventories loaded from `dir`.
    ///
    /// # Errors
    ///
    /// Returns `Io` or a definition error.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::with_inventories(Inventories::from_dir(dir)?))
    }

    /// Creates a session over the given inventories.
    #[must_use]
    pub fn with_inventories(inventories: Inventories) -> Self {
        Self {
            inventories,
            config: DerivationConfig::default(),
            tracer: Tracer::disabled(),
            format: OutputFormat::default(),
            analyze: false,
        }
    }

    /// Builder method to set the derivation configuration.
    #[must_use]
    pub fn with_config(mut self, config: DerivationConfig) -> Self {
        self.config = config;
        self
    }

    /// Builder method to set the output format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Builder method to print the analysis before each derivation.
    #[must_use]
    pub fn with_analysis(mut self, analyze: bool) -> Self {
        self.analyze = analyze;
        self
    }

    /// Builder method to echo trace records to stderr.
    #[must_use]
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.set_trace(trace);
        self
    }

    /// The inventories.
    #[must_use]
    pub const fn inventories(&self) -> &Inventories {
        &self.inventories
    }

    /// The derivation configuration.
    #[must_use]
    pub const fn config(&self) -> &DerivationConfig {
        &self.config
    }

    /// The output format.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// The tracer.
    #[must_use]
    pub const fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// The tracer, mutably.
    pub fn tracer_mut(&mut self) -> &mut Tracer {
        &mut self.tracer
    }

    /// Sets the notation input is parsed in.
    pub fn set_notation(&mut self, notation: Notation) {
        self.config.ancestor = notation;
    }

    /// Sets the devoicing policy.
    pub fn set_devoice_policy(&mut self, policy: DevoicePolicy) {
        self.config.devoice_policy = policy;
    }

    /// Sets the output format.
    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
        self.tracer.set_json_format(format == OutputFormat::Json);
    }

    /// Turns analysis output on or off.
    pub fn set_analysis(&mut self, analyze: bool) {
        self.analyze = analyze;
    }

    /// Turns stderr tracing on or off.
    pub fn set_trace(&mut self, trace: bool) {
        if trace {
            self.tracer.enable();
            self.tracer.set_output(TraceOutput::Stderr);
        } else {
            self.tracer.disable();
            self.tracer.set_output(TraceOutput::None);
        }
    }

    /// Replaces the tracer.
    pub fn set_tracer(&mut self, config: TracerConfig) {
        self.tracer = Tracer::new(config);
    }

    /// The standard pipeline for the current configuration.
    #[must_use]
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::balto_slavic(self.config)
    }

    /// Parses `text` without deriving it.
    ///
    /// # Errors
    ///
    /// Returns a parse error.
    pub fn analyze(&self, text: &str) -> Result<Analysis> {
        let word = Word::parse(text, self.config.ancestor, &self.inventories)?;
        Ok(Analysis {
            word: word.snapshot(),
        })
    }

    /// Derives `text`, recording every stage with the tracer.
    ///
    /// # Errors
    ///
    /// Returns a parse error or the first law error.
    pub fn derive(&mut self, text: &str) -> Result<Derivation> {
        let pipeline = self.pipeline();
        let tracer = &mut self.tracer;
        tracer.derivation_start(text, self.config.ancestor);

        let result = Word::parse(text, self.config.ancestor, &self.inventories).and_then(|mut word| {
            pipeline.derive_observed(&mut word, |stage| tracer.stage(stage))
        });

        match &result {
            Ok(derivation) => tracer.derivation_end(text, derivation.output()),
            Err(e) => {
                tracing::warn!(input = text, error = %e, "derivation failed");
                tracer.derivation_failed(text, e);
            }
        }
        result
    }

    /// Derives `text` and renders it in the session's output format.
    ///
    /// # Errors
    ///
    /// Returns a derivation error or a JSON encoding error.
    pub fn run(&mut self, text: &str) -> Result<String> {
        let analysis = if self.analyze {
            Some(self.analyze(text)?)
        } else {
            None
        };
        let derivation = self.derive(text)?;

        match self.format {
            OutputFormat::Text => {
                let mut out = String::new();
                if let Some(analysis) = analysis {
                    out.push_str(&analysis.to_string());
                    out.push('\n');
                }
                out.push_str(derivation.to_string().trim_end());
                Ok(out)
            }
            OutputFormat::Json => {
                let value = match analysis {
                    Some(analysis) => serde_json::json!({
                        "analysis": analysis,
                        "derivation": derivation,
                    }),
                    None => serde_json::to_value(&derivation).map_err(json_error)?,
                };
                serde_json::to_string_pretty(&value).map_err(json_error)
            }
        }
    }
}

fn json_error(e: serde_json::Error) -> Error {
    Error::io(format!("JSON encoding failed: {e}"))
}
