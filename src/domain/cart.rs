use super::money::Price;
use super::product::Product;
use crate::error::{CheckoutError, Result};
use serde::Serialize;

/// A product paired with how many units of it are in the cart.
///
/// `quantity` is always positive; a line that would drop to zero is removed
/// from the cart instead.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Price {
        self.product.unit_price.times(self.quantity)
    }
}

/// What an insertion did to the cart.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AddOutcome {
    Added,
    QuantityUpdated(u32),
}

/// Ordered line items, at most one per product id.
#[derive(Debug, Default, Serialize, PartialEq, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds one unit of `product`, appending a new line if it is not in the cart yet.
    ///
    /// Fails with [`CheckoutError::AmountOverflow`] and leaves the cart as it
    /// was if the new total cannot be represented.
    pub fn add(&mut self, product: &Product) -> Result<AddOutcome> {
        let index = self.position(&product.id);
        let quantity = index.map_or(1, |i| self.lines[i].quantity.saturating_add(1));
        self.ensure_total_fits(&product.id, product.unit_price, quantity)?;

        match index {
            Some(index) => {
                self.lines[index].quantity = quantity;
                Ok(AddOutcome::QuantityUpdated(quantity))
            }
            None => {
                self.lines.push(CartLine {
                    product: product.clone(),
                    quantity,
                });
                Ok(AddOutcome::Added)
            }
        }
    }

    /// Removes the line for `id`, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<CartLine> {
        let index = self.position(id)?;
        Some(self.lines.remove(index))
    }

    /// Shifts the quantity of `id` by `delta`, clamping at zero.
    ///
    /// Returns the resulting quantity, or `None` if `id` is not in the cart.
    /// A result of zero means the line has been removed. An increase whose
    /// total cannot be represented is rejected and changes nothing.
    pub fn adjust(&mut self, id: &str, delta: i64) -> Result<Option<u32>> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };
        let current = i64::from(self.lines[index].quantity);
        let quantity = u32::try_from(current.saturating_add(delta).max(0)).unwrap_or(u32::MAX);

        if quantity == 0 {
            self.lines.remove(index);
        } else {
            let unit_price = self.lines[index].product.unit_price;
            self.ensure_total_fits(id, unit_price, quantity)?;
            self.lines[index].quantity = quantity;
        }
        Ok(Some(quantity))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn tax(&self) -> Price {
        Price::ZERO
    }

    pub fn total(&self) -> Price {
        self.subtotal() + self.tax()
    }

    /// Checks that the cart total stays representable with `id` at `quantity`.
    fn ensure_total_fits(&self, id: &str, unit_price: Price, quantity: u32) -> Result<()> {
        let line_total = unit_price
            .checked_times(quantity)
            .ok_or(CheckoutError::AmountOverflow)?;
        self.lines
            .iter()
            .filter(|line| line.product.id != id)
            .try_fold(line_total, |total, line| {
                total.checked_add(line.product.unit_price.checked_times(line.quantity)?)
            })
            .map(|_| ())
            .ok_or(CheckoutError::AmountOverflow)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.product.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(id: &str, price: rust_decimal::Decimal) -> Product {
        Product::new(id, format!("Product {id}"), Price::new(price).unwrap())
    }

    #[test]
    fn test_add_new_then_existing() {
        let milk = product("1", dec!(65));
        let mut cart = Cart::new();

        assert_eq!(cart.add(&milk).unwrap(), AddOutcome::Added);
        assert_eq!(cart.add(&milk).unwrap(), AddOutcome::QuantityUpdated(2));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line("1").unwrap().quantity, 2);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&product("3", dec!(120))).unwrap();
        cart.add(&product("1", dec!(65))).unwrap();
        cart.add(&product("3", dec!(120))).unwrap();

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_adjust_clamps_and_removes() {
        let mut cart = Cart::new();
        cart.add(&product("1", dec!(65))).unwrap();
        cart.add(&product("1", dec!(65))).unwrap();

        assert_eq!(cart.adjust("1", 3).unwrap(), Some(5));
        assert_eq!(cart.adjust("1", -1).unwrap(), Some(4));
        assert_eq!(cart.adjust("1", -100).unwrap(), Some(0));
        assert!(cart.line("1").is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_adjust_unknown_line_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product("1", dec!(65))).unwrap();
        assert_eq!(cart.adjust("2", 1).unwrap(), None);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        cart.add(&product("1", dec!(65))).unwrap();
        cart.add(&product("2", dec!(40))).unwrap();

        let removed = cart.remove("1").unwrap();
        assert_eq!(removed.product.id, "1");
        assert!(cart.remove("1").is_none());
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add(&product("1", dec!(65))).unwrap();
        cart.add(&product("1", dec!(65))).unwrap();
        cart.add(&product("3", dec!(120))).unwrap();

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal().value(), dec!(250));
        assert_eq!(cart.tax(), Price::ZERO);
        assert_eq!(cart.total().value(), dec!(250));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_overflowing_change_is_rejected() {
        let mut cart = Cart::new();
        cart.add(&product("X", dec!(100000000000000000000))).unwrap();

        assert!(matches!(
            cart.adjust("X", 1_000_000_000),
            Err(CheckoutError::AmountOverflow)
        ));
        assert_eq!(cart.line("X").unwrap().quantity, 1);
        assert_eq!(cart.total().value(), dec!(100000000000000000000));

        assert_eq!(cart.adjust("X", 1).unwrap(), Some(2));
        assert_eq!(cart.adjust("X", -1).unwrap(), Some(1));
    }

    #[test]
    fn test_add_rejects_overflowing_cart_total() {
        let mut cart = Cart::new();
        let huge = product("H", rust_decimal::Decimal::MAX);
        cart.add(&huge).unwrap();

        assert!(matches!(cart.add(&huge), Err(CheckoutError::AmountOverflow)));
        assert!(matches!(
            cart.add(&product("1", dec!(65))),
            Err(CheckoutError::AmountOverflow)
        ));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total(), Price::new(rust_decimal::Decimal::MAX).unwrap());
    }
}
