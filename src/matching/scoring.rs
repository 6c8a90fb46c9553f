use serde::Serialize;
use thiserror::Error;

use crate::core::sequence::reverse_complement;

/// Scores hairpin interference for a nucleotide sequence. Lower is better.
///
/// Implementations must be deterministic and free of side effects: the
/// chooser may call them in any order and compares results exactly.
pub trait HairpinScorer {
    fn score(&self, sequence: &str) -> f64;
}

impl<F> HairpinScorer for F
where
    F: Fn(&str) -> f64,
{
    fn score(&self, sequence: &str) -> f64 {
        self(sequence)
    }
}

/// Default stem length for hairpin detection
pub const DEFAULT_STEM_LENGTH: usize = 6;
/// Default minimum loop length between stem halves
pub const DEFAULT_MIN_LOOP: usize = 3;
/// Default maximum loop length between stem halves
pub const DEFAULT_MAX_LOOP: usize = 30;
/// Longest stem accepted by [`HairpinConfig::validate`]
pub const MAX_STEM_LENGTH: usize = 64;
/// Longest loop accepted by [`HairpinConfig::validate`]
pub const MAX_LOOP_LENGTH: usize = 1000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HairpinConfigError {
    #[error("Stem length must be at least 1")]
    ZeroStem,

    #[error("Minimum loop ({min_loop}) exceeds maximum loop ({max_loop})")]
    LoopRange { min_loop: usize, max_loop: usize },

    #[error("{field} of {value} exceeds the limit of {limit}")]
    TooLarge {
        field: &'static str,
        value: usize,
        limit: usize,
    },
}

/// Configurable parameters for [`HairpinCounter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HairpinConfig {
    /// Number of paired bases on each side of the stem
    pub stem_length: usize,
    /// Fewest unpaired bases allowed in the loop
    pub min_loop: usize,
    /// Most unpaired bases allowed in the loop
    pub max_loop: usize,
}

impl Default for HairpinConfig {
    fn default() -> Self {
        Self {
            stem_length: DEFAULT_STEM_LENGTH,
            min_loop: DEFAULT_MIN_LOOP,
            max_loop: DEFAULT_MAX_LOOP,
        }
    }
}

impl HairpinConfig {
    /// Check that the parameters describe a possible hairpin.
    ///
    /// # Errors
    ///
    /// Returns `HairpinConfigError` for a zero-length stem, a stem or loop
    /// above [`MAX_STEM_LENGTH`] or [`MAX_LOOP_LENGTH`], or an inverted loop
    /// range.
    pub fn validate(&self) -> Result<(), HairpinConfigError> {
        if self.stem_length == 0 {
            return Err(HairpinConfigError::ZeroStem);
        }
        if self.stem_length > MAX_STEM_LENGTH {
            return Err(HairpinConfigError::TooLarge {
                field: "Stem length",
                value: self.stem_length,
                limit: MAX_STEM_LENGTH,
            });
        }
        if self.max_loop > MAX_LOOP_LENGTH {
            return Err(HairpinConfigError::TooLarge {
                field: "Maximum loop",
                value: self.max_loop,
                limit: MAX_LOOP_LENGTH,
            });
        }
        if self.min_loop > self.max_loop {
            return Err(HairpinConfigError::LoopRange {
                min_loop: self.min_loop,
                max_loop: self.max_loop,
            });
        }
        Ok(())
    }
}

/// Counts candidate hairpins in a sequence.
///
/// A stem start `i` counts once if the reverse complement of
/// `seq[i..i + stem_length]` appears downstream with a loop of
/// `min_loop..=max_loop` unpaired bases in between.
#[derive(Debug, Clone, Default)]
pub struct HairpinCounter {
    config: HairpinConfig,
}

impl HairpinCounter {
    /// Create a counter with custom parameters.
    ///
    /// # Errors
    ///
    /// Returns `HairpinConfigError` if the configuration is invalid.
    pub fn new(config: HairpinConfig) -> Result<Self, HairpinConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &HairpinConfig {
        &self.config
    }

    /// Number of stem start positions that can fold back into a hairpin
    pub fn count(&self, sequence: &str) -> usize {
        let seq = sequence.as_bytes();
        let HairpinConfig {
            stem_length: stem,
            min_loop,
            max_loop,
        } = self.config;

        if seq.len() < 2 * stem + min_loop {
            return 0;
        }

        (0..=seq.len() - (2 * stem + min_loop))
            .filter(|&i| {
                let partner = reverse_complement(&seq[i..i + stem]);
                let window_start = i + stem + min_loop;
                let window_end = (i + 2 * stem + max_loop).min(seq.len());
                seq[window_start..window_end]
                    .windows(stem)
                    .any(|w| w == partner.as_slice())
            })
            .count()
    }
}

impl HairpinScorer for HairpinCounter {
    #[allow(clippy::cast_precision_loss)] // Counts are far below 2^52
    fn score(&self, sequence: &str) -> f64 {
        self.count(sequence) as f64
    }
}

/// Levenshtein distance between two amino-acid signatures
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> u32 {
    bio::alignment::distance::levenshtein(a.as_bytes(), b.as_bytes())
}
