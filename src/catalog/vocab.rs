//! Fixed filter vocabularies.
//!
//! Every view pulls its chip lists from here; the lists are defined once and
//! never mutated, so "no filter" and "unknown value" cannot drift between
//! call sites.

use crate::catalog::product::{Balance, PlayingStyle, SkillLevel};
use crate::price::Rupees;
use serde::Serialize;

/// Brands carried by the store.
pub const BRANDS: [&str; 6] = ["Yonex", "Victor", "Li-Ning", "Apacs", "Carlton", "Forza"];

/// Skill levels in display order.
pub const SKILL_LEVELS: [SkillLevel; 4] = [
    SkillLevel::Beginner,
    SkillLevel::Intermediate,
    SkillLevel::Advanced,
    SkillLevel::All,
];

/// Playing styles in display order.
pub const PLAYING_STYLES: [PlayingStyle; 3] = [
    PlayingStyle::Power,
    PlayingStyle::Control,
    PlayingStyle::AllRound,
];

/// Balance types in display order.
pub const BALANCE_TYPES: [Balance; 3] = [Balance::HeadHeavy, Balance::Even, Balance::HeadLight];

/// A named price bucket for the price-range filter.
///
/// Both bounds are inclusive; the top bucket has no upper bound. Buckets are
/// non-overlapping apart from sharing their boundary values, by construction
/// (not enforced).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    /// Display label, also the filter key (e.g. "Under ₹5,000").
    pub label: &'static str,
    /// Inclusive lower bound in rupees.
    pub min: u32,
    /// Inclusive upper bound in rupees; `None` means unbounded.
    pub max: Option<u32>,
}

impl PriceRange {
    /// Check whether a price falls inside this bucket.
    pub fn contains(&self, price: Rupees) -> bool {
        price.amount() >= self.min && self.max.map_or(true, |max| price.amount() <= max)
    }

    /// Look up a bucket by its label. Unknown labels yield `None`, which the
    /// predicate builder treats as "no price constraint".
    pub fn by_label(label: &str) -> Option<&'static PriceRange> {
        PRICE_RANGES.iter().find(|r| r.label == label)
    }
}

/// The fixed price buckets in display order.
pub const PRICE_RANGES: [PriceRange; 5] = [
    PriceRange {
        label: "Under \u{20b9}5,000",
        min: 0,
        max: Some(5000),
    },
    PriceRange {
        label: "\u{20b9}5,000 - \u{20b9}10,000",
        min: 5000,
        max: Some(10000),
    },
    PriceRange {
        label: "\u{20b9}10,000 - \u{20b9}15,000",
        min: 10000,
        max: Some(15000),
    },
    PriceRange {
        label: "\u{20b9}15,000 - \u{20b9}20,000",
        min: 15000,
        max: Some(20000),
    },
    PriceRange {
        label: "Above \u{20b9}20,000",
        min: 20000,
        max: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_bounds_inclusive() {
        let under_5k = PriceRange::by_label("Under \u{20b9}5,000").unwrap();
        assert!(under_5k.contains(Rupees::new(0)));
        assert!(under_5k.contains(Rupees::new(4999)));
        assert!(under_5k.contains(Rupees::new(5000)));
        assert!(!under_5k.contains(Rupees::new(5001)));

        // Adjacent buckets share the boundary value.
        let mid = PriceRange::by_label("\u{20b9}5,000 - \u{20b9}10,000").unwrap();
        assert!(mid.contains(Rupees::new(5000)));
    }

    #[test]
    fn test_top_bucket_unbounded() {
        let above = PriceRange::by_label("Above \u{20b9}20,000").unwrap();
        assert!(above.contains(Rupees::new(20000)));
        assert!(above.contains(Rupees::new(1_000_000)));
        assert!(!above.contains(Rupees::new(19999)));

        // 20,001 sits above every finite bucket's max.
        let in_finite = PRICE_RANGES
            .iter()
            .filter(|r| r.max.is_some())
            .any(|r| r.contains(Rupees::new(20001)));
        assert!(!in_finite);
        assert!(above.contains(Rupees::new(20001)));
    }

    #[test]
    fn test_unknown_label() {
        assert!(PriceRange::by_label("Under $50").is_none());
    }
}
