//! Derivation pipeline for Lautgesetz.
//!
//! A derivation:
//! 1. Records the input word as stage 0
//! 2. Applies each law in order to the same word
//! 3. Records a snapshot after every law

use std::fmt;

use lautgesetz_foundation::Result;
use lautgesetz_inventory::Inventories;
use lautgesetz_word::{Word, WordSnapshot};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::DerivationConfig;
use crate::law::{SoundLaw, balto_slavic_laws};

// =============================================================================
// Stage
// =============================================================================

/// The state of a word after one step of a derivation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stage {
    /// Position in the derivation; the input is stage 0.
    pub index: usize,
    /// Machine name of the law applied, `None` for the input.
    pub law: Option<String>,
    /// Human-readable label.
    pub label: String,
    /// Rewrites performed by the law.
    pub changes: usize,
    /// The word after this stage.
    pub word: WordSnapshot,
}

impl Stage {
    /// Rendered text at this stage.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.word.text
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.index, self.word.text, self.label)
    }
}

// =============================================================================
// Derivation
// =============================================================================

/// Every stage of one derivation, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Derivation {
    /// The input text.
    pub input: String,
    /// Stage 0 is the input; one further stage per law.
    pub stages: Vec<Stage>,
}

impl Derivation {
    /// The last stage.
    #[must_use]
    pub fn final_stage(&self) -> Option<&Stage> {
        self.stages.last()
    }

    /// Rendered text after the last law.
    #[must_use]
    pub fn output(&self) -> &str {
        self.final_stage().map_or(self.input.as_str(), Stage::text)
    }

    /// Total rewrites across all laws.
    #[must_use]
    pub fn total_changes(&self) -> usize {
        self.stages.iter().map(|s| s.changes).sum()
    }

    /// Iterates over the stages.
    pub fn iter(&self) -> impl Iterator<Item = &Stage> {
        self.stages.iter()
    }

    /// Number of stages, the input included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns true if no stage was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stage in &self.stages {
            writeln!(f, "{stage}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// An ordered list of sound laws and the configuration they share.
pub struct Pipeline {
    config: DerivationConfig,
    laws: Vec<Box<dyn SoundLaw>>,
}

impl Pipeline {
    /// Creates a pipeline with no laws.
    #[must_use]
    pub fn new(config: DerivationConfig) -> Self {
        Self {
            config,
            laws: Vec::new(),
        }
    }

    /// Creates the standard PIE → PBS pipeline: RUKI, laryngeal loss,
    /// Winter's law.
    #[must_use]
    pub fn balto_slavic(config: DerivationConfig) -> Self {
        let mut pipeline = Self::new(config);
        for law in balto_slavic_laws() {
            pipeline.add_law(law);
        }
        pipeline
    }

    /// Appends a law.
    #[must_use]
    pub fn with_law(mut self, law: impl SoundLaw + 'static) -> Self {
        self.add_law(Box::new(law));
        self
    }

    /// Appends a boxed law.
    pub fn add_law(&mut self, law: Box<dyn SoundLaw>) {
        self.laws.push(law);
    }

    /// The shared configuration.
    #[must_use]
    pub const fn config(&self) -> &DerivationConfig {
        &self.config
    }

    /// The laws in application order.
    #[must_use]
    pub fn laws(&self) -> &[Box<dyn SoundLaw>] {
        &self.laws
    }

    /// Number of laws.
    #[must_use]
    pub fn law_count(&self) -> usize {
        self.laws.len()
    }

    /// Parses `text` in the ancestor notation and derives it.
    ///
    /// # Errors
    ///
    /// Returns a parse error or the first law error.
    pub fn derive_text(&self, text: &str, inventories: &Inventories) -> Result<Derivation> {
        let mut word = Word::parse(text, self.config.ancestor, inventories)?;
        self.derive(&mut word)
    }

    /// Applies every law to `word` in order.
    ///
    /// # Errors
    ///
    /// Returns the first law error; `word` keeps the rewrites made so far.
    pub fn derive(&self, word: &mut Word<'_>) -> Result<Derivation> {
        self.derive_observed(word, |_| {})
    }

    /// Like [`derive`](Self::derive), calling `observe` as each stage is
    /// recorded.
    ///
    /// # Errors
    ///
    /// Returns the first law error.
    pub fn derive_observed(
        &self,
        word: &mut Word<'_>,
        mut observe: impl FnMut(&Stage),
    ) -> Result<Derivation> {
        let input = word.text().to_string();
        let mut stages = Vec::with_capacity(self.laws.len() + 1);

        let original = Stage {
            index: 0,
            law: None,
            label: format!("Original {}", self.config.ancestor.tag()),
            changes: 0,
            word: word.snapshot(),
        };
        observe(&original);
        stages.push(original);

        for (i, law) in self.laws.iter().enumerate() {
            let outcome = law.apply(word, &self.config)?;
            tracing::debug!(
                law = law.name(),
                changes = outcome.changes,
                text = %word,
                "applied sound law"
            );
            let stage = Stage {
                index: i + 1,
                law: Some(law.name().to_string()),
                label: law.label().to_string(),
                changes: outcome.changes,
                word: word.snapshot(),
            };
            observe(&stage);
            stages.push(stage);
        }

        Ok(Derivation { input, stages })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::balto_slavic(DerivationConfig::default())
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .field("laws", &self.laws.iter().map(|l| l.name()).collect::<Vec<_>>())
            .finish()
    }
}
