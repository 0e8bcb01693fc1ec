//! Product catalog module.
//!
//! Contains the product record, category taxonomy, fixed vocabularies, the
//! hard-coded seed data, and the catalog store.

mod category;
mod product;
mod seed;
mod store;
pub mod vocab;

pub use category::{all_tiles, CategoryTile, BADMINTON_CATEGORIES, OTHER_SPORTS};
pub use product::{Balance, PlayingStyle, Product, SkillLevel};
pub use seed::seed_products;
pub use store::Catalog;
pub use vocab::{PriceRange, BALANCE_TYPES, BRANDS, PLAYING_STYLES, PRICE_RANGES, SKILL_LEVELS};
