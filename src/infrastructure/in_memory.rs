use crate::domain::money::Price;
use crate::domain::ports::Catalog;
use crate::domain::product::Product;
use crate::error::{CheckoutError, Result};
use std::collections::{HashMap, HashSet};

/// An immutable, in-memory product catalog.
///
/// Products keep the order they were given in; lookups go through an
/// id index built once at construction.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl InMemoryCatalog {
    /// Builds a catalog, rejecting blank or duplicate ids.
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if product.id.trim().is_empty() {
                return Err(CheckoutError::ValidationError(format!(
                    "Product at position {} has a blank id",
                    position + 1
                )));
            }
            if !seen.insert(product.id.as_str()) {
                return Err(CheckoutError::ValidationError(format!(
                    "Duplicate product id {}",
                    product.id
                )));
            }
        }
        Ok(Self::indexed(products))
    }

    /// The store's default grocery catalog, barcodes "1" through "10".
    pub fn builtin() -> Self {
        let entries: [(&str, &str, u32); 10] = [
            ("1", "Fresh Milk (1L)", 65),
            ("2", "Whole Wheat Bread", 40),
            ("3", "Basmati Rice (1kg)", 120),
            ("4", "Tata Tea Gold (250g)", 150),
            ("5", "Amul Butter (500g)", 250),
            ("6", "Fortune Sunflower Oil (1L)", 180),
            ("7", "Britannia Biscuits Pack", 85),
            ("8", "Fresh Eggs (12pcs)", 95),
            ("9", "Colgate Toothpaste", 110),
            ("10", "Dove Soap (3pack)", 135),
        ];

        Self::indexed(
            entries
                .into_iter()
                .map(|(id, name, rupees)| Product::new(id, name, Price::from(rupees)))
                .collect(),
        )
    }

    /// Ids must already be unique.
    fn indexed(products: Vec<Product>) -> Self {
        let index = products
            .iter()
            .enumerate()
            .map(|(position, product)| (product.id.clone(), position))
            .collect();
        Self { products, index }
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog for InMemoryCatalog {
    fn lookup(&self, id: &str) -> Option<&Product> {
        self.index.get(id).map(|&position| &self.products[position])
    }

    fn products(&self) -> &[Product] {
        &self.products
    }
}
