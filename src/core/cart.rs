//! Cart state backing the storefront's cart collaborator

use serde::{Deserialize, Serialize};

use super::product::Product;

/// One product in the cart and how many of it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Cart contents, keyed by product id
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartState {
    pub lines: Vec<CartLine>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product, merging with an existing line
    pub fn add(&mut self, product: &Product) {
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            }),
        }
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask() -> Product {
        Product::new("bio-1", "BIODANCE Mask", "biodance-mask", 23.99)
    }

    #[test]
    fn test_add_merges_same_product() {
        let mut cart = CartState::new();
        cart.add(&mask());
        cart.add(&mask());

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.item_count(), 2);
        assert!((cart.subtotal() - 47.98).abs() < 1e-9);
    }

    #[test]
    fn test_add_distinct_products() {
        let mut cart = CartState::new();
        cart.add(&mask());
        cart.add(&Product::new("ton-1", "Toner", "toner", 10.0));

        assert_eq!(cart.lines.len(), 2);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.lines[1].total(), 10.0);
    }

    #[test]
    fn test_empty_cart() {
        let cart = CartState::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.subtotal(), 0.0);
    }

    #[test]
    fn test_serialized_cart_restores() {
        let mut cart = CartState::new();
        cart.add(&mask());
        let json = serde_json::to_string(&cart).unwrap();
        let restored: CartState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }
}
