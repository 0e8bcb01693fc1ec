//! Query execution over the catalog.
//!
//! A query is a single ordered pass: every product the predicate accepts, in
//! catalog order, truncated to the first `limit` matches. Queries never
//! mutate the catalog and are idempotent; the same predicate over the same
//! catalog always yields the same sequence.

use crate::catalog::Product;
use crate::filter::Predicate;

/// Apply a predicate to a product sequence.
///
/// Returns references into `catalog` in source order (stable filter). With
/// `limit` the scan stops after that many matches; `None` is unbounded.
///
/// O(n) over the slice. Catalogs are small enough that no index is kept, but
/// nothing here depends on the source being the full catalog, so an indexed
/// subset can be passed instead without changing the predicate contract.
pub fn query<'a>(
    catalog: &'a [Product],
    predicate: &Predicate,
    limit: Option<usize>,
) -> Vec<&'a Product> {
    let cap = limit.unwrap_or(usize::MAX);
    let mut matches = Vec::new();
    if cap == 0 {
        return matches;
    }
    for product in catalog {
        if predicate.matches(product) {
            matches.push(product);
            if matches.len() == cap {
                break;
            }
        }
    }
    tracing::debug!(
        matched = matches.len(),
        constraints = predicate.len(),
        limit = ?limit,
        "catalog query"
    );
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{seed_products, Catalog};
    use crate::filter::{Constraint, FilterSelection, FilterValue, RouteScope};

    #[test]
    fn test_order_preserved() {
        let products = seed_products();
        let yonex = Predicate::all().with(Constraint::Brand("Yonex".to_string()));
        let results = query(&products, &yonex, None);

        let ids: Vec<_> = results.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "rac-001",
                "rac-004",
                "shoe-001",
                "bag-001",
                "shuttle-001",
                "string-001",
                "string-002",
                "grip-001"
            ]
        );
    }

    #[test]
    fn test_limit_truncates() {
        let products = seed_products();
        let yonex = Predicate::all().with(Constraint::Brand("Yonex".to_string()));

        let unbounded = query(&products, &yonex, None);
        let limited = query(&products, &yonex, Some(3));
        assert_eq!(limited.len(), 3.min(unbounded.len()));
        assert_eq!(&unbounded[..3], &limited[..]);

        // A limit beyond the match count returns every match.
        let generous = query(&products, &yonex, Some(100));
        assert_eq!(generous.len(), unbounded.len());

        assert!(query(&products, &yonex, Some(0)).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let products = seed_products();
        let mut selection = FilterSelection::new();
        selection.toggle(FilterValue::Brand("Li-Ning".to_string()));
        let scope = RouteScope::sport("badminton");

        let first = query(&products, &Predicate::build(&selection, Some(&scope)), Some(4));
        let second = query(&products, &Predicate::build(&selection, Some(&scope)), Some(4));
        assert_eq!(first, second);
    }

    #[test]
    fn test_yonex_advanced_scenario() {
        let catalog = Catalog::seeded();
        let mut selection = FilterSelection::new();
        selection.toggle(FilterValue::Brand("Yonex".to_string()));
        selection.toggle(FilterValue::SkillLevel(
            crate::catalog::SkillLevel::Advanced,
        ));
        let results = catalog.select(&Predicate::build(&selection, None), None);

        let ids: Vec<_> = results.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["rac-001"]);
    }

    #[test]
    fn test_under_5000_scenario() {
        let catalog = Catalog::seeded();
        let mut selection = FilterSelection::new();
        selection.toggle(FilterValue::PriceRange("Under \u{20b9}5,000".to_string()));
        let results = catalog.select(&Predicate::build(&selection, None), None);

        let ids: Vec<_> = results.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            ["bag-002", "shuttle-001", "shuttle-002", "string-001", "string-002", "grip-001", "football-001"]
        );
        assert!(results.iter().all(|p| p.price.amount() <= 5000));
    }

    #[test]
    fn test_unknown_subcategory_scope_is_empty() {
        let catalog = Catalog::seeded();
        let scope = RouteScope::subcategory("badminton", "nonexistent");
        let predicate = Predicate::build(&FilterSelection::new(), Some(&scope));
        assert!(catalog.select(&predicate, None).is_empty());
    }
}
