//! Record generators for seed data.
//!
//! - [`RandomCategory`]: uniform selection over the category enumerations
//! - [`WorkOrderGenerator`]: work orders with lorem text and a random unit
//! - [`ComplaintGenerator`]: tenant complaints with lorem text and a random unit

use std::ops::{Range, RangeInclusive};

use thiserror::Error;

pub mod category;
pub mod complaint;
pub mod work_order;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenConfigError {
    #[error("{0} range is empty")]
    EmptyRange(&'static str),
}

/// Rejects configs whose ranges would make sampling panic.
pub(crate) fn check_ranges(
    title_words: &Range<usize>,
    description_sentences: &Range<usize>,
    unit_numbers: &RangeInclusive<i64>,
) -> Result<(), GenConfigError> {
    if title_words.is_empty() {
        return Err(GenConfigError::EmptyRange("title_words"));
    }
    if description_sentences.is_empty() {
        return Err(GenConfigError::EmptyRange("description_sentences"));
    }
    if unit_numbers.is_empty() {
        return Err(GenConfigError::EmptyRange("unit_numbers"));
    }
    Ok(())
}

pub use category::RandomCategory;
pub use complaint::{ComplaintGenConfig, ComplaintGenerator};
pub use work_order::{UNIT_NUMBERS, WorkOrderGenConfig, WorkOrderGenerator};
