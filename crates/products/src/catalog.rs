//! The ordered, immutable product catalog.

use std::collections::BTreeSet;

use storefront_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::{Price, Product};

/// Ordered list of purchasable products with unique ids.
///
/// Insertion order is the display order and is never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = BTreeSet::new();
        for product in &products {
            if !seen.insert(*product.id()) {
                return Err(DomainError::validation(format!(
                    "duplicate product id {}",
                    product.id()
                )));
            }
        }
        tracing::debug!(products = products.len(), "catalog built");
        Ok(Self { products })
    }

    /// The fixed three-entry catalog shown by the storefront.
    pub fn demo() -> Self {
        let products = (1..=3u32)
            .map(|n| Product {
                id: ProductId::new(n),
                name: format!("Product {n}"),
                price: Price::from_major(u64::from(n) * 10),
            })
            .collect();
        Self { products }
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| *p.id() == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::demo()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
