use super::money::Price;
use serde::{Deserialize, Serialize};

/// A purchasable item, identified by its barcode.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(rename = "price")]
    pub unit_price: Price,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_product_deserialization() {
        let csv = "id, name, price\n1, Fresh Milk (1L), 65";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let mut iter = reader.deserialize();

        let result: Product = iter
            .next()
            .unwrap()
            .expect("Failed to deserialize product");
        assert_eq!(result.id, "1");
        assert_eq!(result.name, "Fresh Milk (1L)");
        assert_eq!(result.unit_price.value(), dec!(65));
    }

    #[test]
    fn test_product_negative_price_rejected() {
        let csv = "id, name, price\n1, Broken, -5";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let result: Option<Result<Product, csv::Error>> = reader.deserialize().next();
        assert!(result.unwrap().is_err());
    }
}
