//! Synthetic work order generation.

use std::ops::{Range, RangeInclusive};

use fake::{
    Fake,
    faker::lorem::en::{Paragraph, Sentence},
};
use rand::Rng;

use rentals::models::{CreateWorkOrderParams, User, WorkCategory};

use super::category::RandomCategory;
use super::{GenConfigError, check_ranges};

/// Unit numbers handed out to generated records.
pub const UNIT_NUMBERS: RangeInclusive<i64> = 1..=100;

/// Configuration for work order generation.
#[derive(Debug, Clone)]
pub struct WorkOrderGenConfig {
    /// Word count range for the title sentence.
    pub title_words: Range<usize>,
    /// Sentence count range for the description paragraph.
    pub description_sentences: Range<usize>,
    /// Unit numbers to draw from.
    pub unit_numbers: RangeInclusive<i64>,
}

impl Default for WorkOrderGenConfig {
    fn default() -> Self {
        Self {
            title_words: 4..8,
            description_sentences: 3..6,
            unit_numbers: UNIT_NUMBERS,
        }
    }
}

/// Generates work order creation parameters for a user.
pub struct WorkOrderGenerator {
    config: WorkOrderGenConfig,
}

impl WorkOrderGenerator {
    /// Creates a new generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: WorkOrderGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    ///
    /// Every range must be non-empty.
    pub fn with_config(config: WorkOrderGenConfig) -> Result<Self, GenConfigError> {
        check_ranges(
            &config.title_words,
            &config.description_sentences,
            &config.unit_numbers,
        )?;
        Ok(Self { config })
    }

    /// Generates a single work order owned by `user`.
    pub fn generate(&self, user: &User, rng: &mut impl Rng) -> CreateWorkOrderParams {
        CreateWorkOrderParams {
            created_by: user.id,
            category: WorkCategory::random(rng),
            title: Sentence(self.config.title_words.clone()).fake_with_rng(rng),
            description: Paragraph(self.config.description_sentences.clone()).fake_with_rng(rng),
            unit_number: rng.gen_range(self.config.unit_numbers.clone()),
        }
    }
}

impl Default for WorkOrderGenerator {
    fn default() -> Self {
        Self::new()
    }
}
