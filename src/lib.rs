//! Catalog and filtering core for the CourtKart sporting-goods storefront.
//!
//! This crate provides the data layer behind the storefront's listing pages:
//!
//! - **Catalog**: an immutable, in-memory product catalog with fixed
//!   vocabularies (brands, skill levels, playing styles, balances, price
//!   buckets) and the category taxonomy.
//! - **Filter**: per-dimension filter selection with toggle semantics,
//!   route-derived scope, and a predicate builder that ANDs them together.
//! - **Query**: a stable, order-preserving filter pass with an optional
//!   result limit.
//!
//! All data is defined at build time; nothing is created, mutated, or
//! destroyed at runtime, so the catalog is safe to share across threads
//! without synchronization.
//!
//! # Example
//!
//! ```rust
//! use courtkart_commerce::prelude::*;
//!
//! let catalog = Catalog::seeded();
//!
//! // A shopper on the badminton racquets page toggles two chips.
//! let mut selection = FilterSelection::new();
//! selection.toggle(FilterValue::Brand("Yonex".to_string()));
//! selection.toggle(FilterValue::SkillLevel(SkillLevel::Advanced));
//!
//! let scope = RouteScope::subcategory("badminton", "racquets");
//! let predicate = Predicate::build(&selection, Some(&scope));
//! let results = catalog.select(&predicate, None);
//!
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].id.as_str(), "rac-001");
//! assert_eq!(results[0].discount_percent(), 17);
//! ```

pub mod error;
pub mod ids;
pub mod price;

pub mod catalog;
pub mod filter;
pub mod query;

pub use error::CatalogError;
pub use ids::ProductId;
pub use price::Rupees;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;
    pub use crate::price::Rupees;

    // Catalog
    pub use crate::catalog::{
        all_tiles, Balance, Catalog, CategoryTile, PlayingStyle, PriceRange, Product, SkillLevel,
        BADMINTON_CATEGORIES, BALANCE_TYPES, BRANDS, OTHER_SPORTS, PLAYING_STYLES, PRICE_RANGES,
        SKILL_LEVELS,
    };

    // Filter
    pub use crate::filter::{Constraint, FilterSelection, FilterValue, Predicate, RouteScope};

    // Query
    pub use crate::query::query;
}
