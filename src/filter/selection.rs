//! User filter selection with toggle semantics.

use crate::catalog::{Balance, PlayingStyle, SkillLevel};
use serde::{Deserialize, Serialize};

/// A value for one filter dimension, as produced by a filter chip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterValue {
    /// A price bucket label (e.g. "Under ₹5,000"). Unknown labels are
    /// accepted here and ignored by the predicate builder.
    PriceRange(String),
    SkillLevel(SkillLevel),
    PlayingStyle(PlayingStyle),
    Balance(Balance),
    Brand(String),
    /// A category-chip value. Chips are subcategory names, so this matches
    /// against the product SUBCATEGORY (sport-level chips like "Cricket"
    /// therefore match nothing; the chip list just mixes both tile groups).
    Category(String),
}

/// The user's current per-dimension filter choices.
///
/// At most one value per dimension, every dimension optional. An unset
/// dimension never excludes a product. Dimensions are explicit `Option`s
/// rather than empty-string sentinels, so "no filter" can never collide with
/// a filter value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub price_range: Option<String>,
    pub skill_level: Option<SkillLevel>,
    pub playing_style: Option<PlayingStyle>,
    pub balance: Option<Balance>,
    pub brand: Option<String>,
    pub category: Option<String>,
}

impl FilterSelection {
    /// Create an all-unset selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a chip: selecting the currently selected value clears the
    /// dimension, selecting a different value replaces it.
    pub fn toggle(&mut self, value: FilterValue) {
        match value {
            FilterValue::PriceRange(label) => toggle_slot(&mut self.price_range, label),
            FilterValue::SkillLevel(level) => toggle_slot(&mut self.skill_level, level),
            FilterValue::PlayingStyle(style) => toggle_slot(&mut self.playing_style, style),
            FilterValue::Balance(balance) => toggle_slot(&mut self.balance, balance),
            FilterValue::Brand(brand) => toggle_slot(&mut self.brand, brand),
            FilterValue::Category(category) => toggle_slot(&mut self.category, category),
        }
    }

    /// Reset every dimension to unset.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of dimensions currently set (the filter badge count).
    pub fn active_count(&self) -> usize {
        [
            self.price_range.is_some(),
            self.skill_level.is_some(),
            self.playing_style.is_some(),
            self.balance.is_some(),
            self.brand.is_some(),
            self.category.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    /// Check if no dimension is set.
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

fn toggle_slot<T: PartialEq>(slot: &mut Option<T>, value: T) {
    if slot.as_ref() == Some(&value) {
        *slot = None;
    } else {
        *slot = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_sets_and_clears() {
        let mut selection = FilterSelection::new();
        selection.toggle(FilterValue::Brand("Yonex".to_string()));
        assert_eq!(selection.brand.as_deref(), Some("Yonex"));

        // Re-selecting the same value unsets the dimension.
        selection.toggle(FilterValue::Brand("Yonex".to_string()));
        assert_eq!(selection.brand, None);
    }

    #[test]
    fn test_toggle_replaces_different_value() {
        let mut selection = FilterSelection::new();
        selection.toggle(FilterValue::SkillLevel(SkillLevel::Beginner));
        selection.toggle(FilterValue::SkillLevel(SkillLevel::Advanced));
        assert_eq!(selection.skill_level, Some(SkillLevel::Advanced));
    }

    #[test]
    fn test_dimensions_independent() {
        let mut selection = FilterSelection::new();
        selection.toggle(FilterValue::Brand("Victor".to_string()));
        selection.toggle(FilterValue::Balance(Balance::Even));
        selection.toggle(FilterValue::PriceRange("Under \u{20b9}5,000".to_string()));
        assert_eq!(selection.active_count(), 3);

        selection.toggle(FilterValue::Balance(Balance::Even));
        assert_eq!(selection.active_count(), 2);
        assert_eq!(selection.brand.as_deref(), Some("Victor"));
    }

    #[test]
    fn test_clear() {
        let mut selection = FilterSelection::new();
        selection.toggle(FilterValue::Brand("Yonex".to_string()));
        selection.toggle(FilterValue::PlayingStyle(PlayingStyle::Power));
        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection, FilterSelection::default());
    }
}
