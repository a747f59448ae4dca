//! Uniform selection over the fixed category enumerations.

use rand::Rng;

use rentals::models::{ComplaintCategory, Status, WorkCategory};

/// An enumeration that can be sampled uniformly from a caller-supplied RNG.
pub trait RandomCategory: Copy + 'static {
    /// Every value in declaration order.
    const VALUES: &'static [Self];

    /// Returns one value chosen uniformly at random.
    fn random(rng: &mut impl Rng) -> Self {
        Self::VALUES[rng.gen_range(0..Self::VALUES.len())]
    }
}

impl RandomCategory for WorkCategory {
    const VALUES: &'static [Self] = &WorkCategory::ALL;
}

impl RandomCategory for ComplaintCategory {
    const VALUES: &'static [Self] = &ComplaintCategory::ALL;
}

impl RandomCategory for Status {
    const VALUES: &'static [Self] = &Status::ALL;
}
