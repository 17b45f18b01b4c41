use crate::domain::product::Product;
use crate::error::{CheckoutError, Result};
use crate::infrastructure::in_memory::InMemoryCatalog;
use std::io::Read;

/// Reads products from a CSV source with an `id, name, price` header.
///
/// Fields are trimmed of surrounding whitespace.
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CatalogReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes products.
    pub fn products(self) -> impl Iterator<Item = Result<Product>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CheckoutError::from))
    }

    /// Reads every row into a catalog, failing on the first bad row.
    pub fn into_catalog(self) -> Result<InMemoryCatalog> {
        let products = self.products().collect::<Result<Vec<_>>>()?;
        InMemoryCatalog::from_products(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::Catalog;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "id, name, price\nA1, Masala Chai, 20\nB2, Samosa, 12.50";
        let catalog = CatalogReader::new(data.as_bytes()).into_catalog().unwrap();

        assert_eq!(catalog.products().len(), 2);
        let samosa = catalog.lookup("B2").unwrap();
        assert_eq!(samosa.name, "Samosa");
        assert_eq!(samosa.unit_price.value(), dec!(12.5));
    }

    #[test]
    fn test_reader_keeps_price_digits() {
        let data = "id, name, price\nP1, Precise, 19.999999999999999999\nP2, Large, 100000000000000000001";
        let catalog = CatalogReader::new(data.as_bytes()).into_catalog().unwrap();

        assert_eq!(
            catalog.lookup("P1").unwrap().unit_price.value(),
            dec!(19.999999999999999999)
        );
        assert_eq!(
            catalog.lookup("P2").unwrap().unit_price.value(),
            dec!(100000000000000000001)
        );
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "id, name, price\nA1, Masala Chai, free";
        let results: Vec<Result<Product>> = CatalogReader::new(data.as_bytes()).products().collect();

        assert!(matches!(results[0], Err(CheckoutError::CsvError(_))));
    }

    #[test]
    fn test_reader_duplicate_ids() {
        let data = "id, name, price\nA1, Masala Chai, 20\nA1, Filter Coffee, 25";
        let result = CatalogReader::new(data.as_bytes()).into_catalog();

        assert!(matches!(result, Err(CheckoutError::ValidationError(_))));
    }
}
