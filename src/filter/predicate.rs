//! Predicate construction and evaluation.
//!
//! A [`Predicate`] is the AND of individual [`Constraint`]s. Each constraint
//! evaluates itself against a product in memory; an empty predicate matches
//! everything.

use crate::catalog::vocab::PriceRange;
use crate::catalog::{Balance, PlayingStyle, Product, SkillLevel};
use crate::filter::scope::RouteScope;
use crate::filter::selection::FilterSelection;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A single product constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Constraint {
    /// Exact brand match.
    Brand(String),
    /// Exact skill-level match; products without a skill level never match.
    SkillLevel(SkillLevel),
    /// Exact playing-style match; products without one never match.
    PlayingStyle(PlayingStyle),
    /// Exact balance match; products without one never match.
    Balance(Balance),
    /// Exact subcategory match (category chips carry subcategory names).
    Subcategory(String),
    /// Case-insensitive subcategory match for a route token.
    SubcategoryToken(String),
    /// Case-insensitive category match for a route token.
    CategoryToken(String),
    /// Exact category match against the canonical stored value.
    CategoryExact(String),
    /// Price within a bucket, both bounds inclusive, `max: None` unbounded.
    PriceBetween { min: u32, max: Option<u32> },
    /// Only products carrying the NEW badge.
    NewOnly,
    /// Only featured products.
    FeaturedOnly,
    /// Only in-stock products.
    InStockOnly,
    /// Everything except the given product (related-items exclusion).
    NotProduct(ProductId),
}

impl Constraint {
    /// Evaluate this constraint against a product.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Constraint::Brand(brand) => product.brand == *brand,
            Constraint::SkillLevel(level) => product.skill_level == Some(*level),
            Constraint::PlayingStyle(style) => product.playing_style == Some(*style),
            Constraint::Balance(balance) => product.balance == Some(*balance),
            Constraint::Subcategory(sub) => product.subcategory == *sub,
            Constraint::SubcategoryToken(token) => {
                product.subcategory.eq_ignore_ascii_case(token)
            }
            Constraint::CategoryToken(token) => product.category.eq_ignore_ascii_case(token),
            Constraint::CategoryExact(category) => product.category == *category,
            Constraint::PriceBetween { min, max } => {
                let price = product.price.amount();
                price >= *min && max.map_or(true, |max| price <= max)
            }
            Constraint::NewOnly => product.is_new,
            Constraint::FeaturedOnly => product.is_featured,
            Constraint::InStockOnly => product.in_stock,
            Constraint::NotProduct(id) => product.id != *id,
        }
    }
}

/// A composite predicate over products: the AND of its constraints.
///
/// There is no OR mode and no negation beyond [`Constraint::NotProduct`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    constraints: Vec<Constraint>,
}

impl Predicate {
    /// A predicate with no constraints; matches every product.
    pub fn all() -> Self {
        Self::default()
    }

    /// Add a constraint, builder-style.
    pub fn with(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Build the predicate for a filter selection under an optional route
    /// scope. Scope constraints are added first, then one constraint per set
    /// dimension; dimensions left unset contribute nothing.
    pub fn build(selection: &FilterSelection, scope: Option<&RouteScope>) -> Self {
        let mut predicate = Predicate::all();

        if let Some(scope) = scope {
            if scope.new_arrivals {
                // New-arrivals listing ignores category scoping.
                predicate.constraints.push(Constraint::NewOnly);
            } else if let Some(sub) = &scope.subcategory {
                predicate
                    .constraints
                    .push(Constraint::SubcategoryToken(sub.clone()));
            } else if let Some(sport) = &scope.sport {
                if scope.is_badminton_umbrella() {
                    predicate
                        .constraints
                        .push(Constraint::CategoryExact("Badminton".to_string()));
                } else {
                    predicate
                        .constraints
                        .push(Constraint::CategoryToken(sport.clone()));
                }
            }
        }

        if let Some(label) = &selection.price_range {
            // A label not in the fixed bucket list means no price constraint.
            if let Some(range) = PriceRange::by_label(label) {
                predicate.constraints.push(Constraint::PriceBetween {
                    min: range.min,
                    max: range.max,
                });
            }
        }
        if let Some(level) = selection.skill_level {
            predicate.constraints.push(Constraint::SkillLevel(level));
        }
        if let Some(style) = selection.playing_style {
            predicate.constraints.push(Constraint::PlayingStyle(style));
        }
        if let Some(balance) = selection.balance {
            predicate.constraints.push(Constraint::Balance(balance));
        }
        if let Some(brand) = &selection.brand {
            predicate.constraints.push(Constraint::Brand(brand.clone()));
        }
        if let Some(category) = &selection.category {
            predicate
                .constraints
                .push(Constraint::Subcategory(category.clone()));
        }

        predicate
    }

    /// Evaluate the predicate: true iff every constraint holds.
    pub fn matches(&self, product: &Product) -> bool {
        self.constraints.iter().all(|c| c.matches(product))
    }

    /// Number of constraints.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Check if the predicate is unconstrained.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::selection::FilterValue;

    fn racquet() -> Product {
        Product::new("rac-001", "Yonex Astrox 99 Pro", "Yonex", "Badminton", "Racquets", 18999)
            .with_racquet_specs(
                SkillLevel::Advanced,
                PlayingStyle::Power,
                "4U",
                Balance::HeadHeavy,
                "G5",
            )
            .with_new_badge()
    }

    fn shoe() -> Product {
        Product::new("shoe-002", "Victor A970ACE", "Victor", "Badminton", "Shoes", 8999)
    }

    #[test]
    fn test_empty_predicate_matches_everything() {
        let predicate = Predicate::build(&FilterSelection::new(), None);
        assert!(predicate.is_empty());
        assert!(predicate.matches(&racquet()));
        assert!(predicate.matches(&shoe()));
    }

    #[test]
    fn test_unset_dimension_is_neutral() {
        let mut selection = FilterSelection::new();
        selection.toggle(FilterValue::Brand("Yonex".to_string()));
        let with_brand_only = Predicate::build(&selection, None);

        selection.toggle(FilterValue::Balance(Balance::HeadHeavy));
        selection.toggle(FilterValue::Balance(Balance::HeadHeavy));
        let after_toggle_off = Predicate::build(&selection, None);

        assert_eq!(with_brand_only, after_toggle_off);
    }

    #[test]
    fn test_missing_attribute_excludes() {
        let mut selection = FilterSelection::new();
        selection.toggle(FilterValue::SkillLevel(SkillLevel::Advanced));
        let predicate = Predicate::build(&selection, None);

        assert!(predicate.matches(&racquet()));
        // Shoes carry no skill level, so a skill filter excludes them.
        assert!(!predicate.matches(&shoe()));
    }

    #[test]
    fn test_unknown_price_label_is_no_constraint() {
        let mut selection = FilterSelection::new();
        selection.toggle(FilterValue::PriceRange("Under $50".to_string()));
        let predicate = Predicate::build(&selection, None);
        assert!(predicate.is_empty());
        assert!(predicate.matches(&racquet()));
    }

    #[test]
    fn test_price_bucket_constraint() {
        let mut selection = FilterSelection::new();
        selection.toggle(FilterValue::PriceRange(
            "\u{20b9}15,000 - \u{20b9}20,000".to_string(),
        ));
        let predicate = Predicate::build(&selection, None);
        assert!(predicate.matches(&racquet())); // 18,999
        assert!(!predicate.matches(&shoe())); // 8,999
    }

    #[test]
    fn test_badminton_umbrella_scope() {
        let scope = RouteScope::sport("badminton");
        let predicate = Predicate::build(&FilterSelection::new(), Some(&scope));
        assert!(predicate.matches(&racquet()));

        let cricket_bat =
            Product::new("cricket-001", "SG Test Cricket Bat", "SG", "Cricket", "Bats", 8999);
        assert!(!predicate.matches(&cricket_bat));
    }

    #[test]
    fn test_sport_scope_case_insensitive() {
        let scope = RouteScope::sport("CRICKET");
        let predicate = Predicate::build(&FilterSelection::new(), Some(&scope));
        let cricket_bat =
            Product::new("cricket-001", "SG Test Cricket Bat", "SG", "Cricket", "Bats", 8999);
        assert!(predicate.matches(&cricket_bat));
        assert!(!predicate.matches(&racquet()));
    }

    #[test]
    fn test_subcategory_scope_takes_precedence() {
        let scope = RouteScope::subcategory("badminton", "racquets");
        let predicate = Predicate::build(&FilterSelection::new(), Some(&scope));
        assert!(predicate.matches(&racquet()));
        assert!(!predicate.matches(&shoe()));
    }

    #[test]
    fn test_new_arrivals_scope_ignores_category() {
        let mut scope = RouteScope::new_arrivals();
        scope.sport = Some("cricket".to_string());
        let predicate = Predicate::build(&FilterSelection::new(), Some(&scope));

        // The racquet is new and from another sport; new-arrivals still takes it.
        assert!(predicate.matches(&racquet()));
        assert!(!predicate.matches(&shoe()));
    }

    #[test]
    fn test_scope_and_selection_combine() {
        let mut selection = FilterSelection::new();
        selection.toggle(FilterValue::Brand("Victor".to_string()));
        let scope = RouteScope::sport("badminton");
        let predicate = Predicate::build(&selection, Some(&scope));

        assert!(predicate.matches(&shoe()));
        assert!(!predicate.matches(&racquet()));
    }
}
