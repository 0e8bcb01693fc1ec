//! The catalog store: canonical product order plus id lookup.

use crate::catalog::product::Product;
use crate::catalog::seed::seed_products;
use crate::error::CatalogError;
use crate::filter::{Constraint, Predicate};
use crate::ids::ProductId;
use crate::query::query;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

/// The immutable product catalog.
///
/// Owns the products in canonical display order. Read-only for the life of
/// the process; because it is never mutated it can be shared freely across
/// concurrent readers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, validating that product ids are unique.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateProduct(product.id.to_string()));
            }
        }
        Ok(Self { products })
    }

    /// The process-wide seed catalog, loaded once.
    pub fn seeded() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            let catalog = Catalog::new(seed_products()).expect("seed catalog ids are unique");
            tracing::debug!(products = catalog.len(), "seed catalog loaded");
            catalog
        })
    }

    /// The full catalog in canonical order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate the catalog in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id. Not-found is `None`, never an error; the
    /// caller decides the user-visible fallback.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == *id)
    }

    /// Look up a product by id, erroring when absent.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }

    /// Run a predicate over the catalog in canonical order.
    pub fn select(&self, predicate: &Predicate, limit: Option<usize>) -> Vec<&Product> {
        query(&self.products, predicate, limit)
    }

    /// Latest new-badge products, for the home page strip.
    pub fn new_arrivals(&self, limit: usize) -> Vec<&Product> {
        self.select(&Predicate::all().with(Constraint::NewOnly), Some(limit))
    }

    /// Featured badminton picks, for the home page strip.
    pub fn featured(&self, limit: usize) -> Vec<&Product> {
        let predicate = Predicate::all()
            .with(Constraint::FeaturedOnly)
            .with(Constraint::CategoryExact("Badminton".to_string()));
        self.select(&predicate, Some(limit))
    }

    /// Products related to the given one: same subcategory, itself excluded.
    /// Unknown ids yield an empty list.
    pub fn related(&self, id: &ProductId, limit: usize) -> Vec<&Product> {
        let Some(product) = self.get(id) else {
            return Vec::new();
        };
        let predicate = Predicate::all()
            .with(Constraint::Subcategory(product.subcategory.clone()))
            .with(Constraint::NotProduct(id.clone()));
        self.select(&predicate, Some(limit))
    }
}
