//! Purchase-intent actions: add to cart and buy now
//!
//! The landing page never owns cart state or routing. Both are reached
//! through small capability traits supplied when the page is composed.

use super::product::Product;

/// Route the buy-now flow lands on after adding the product
pub const CHECKOUT_PATH: &str = "/carrito";

/// Cart collaborator
pub trait CartCapability {
    fn add_item(&self, product: &Product);
}

/// Navigation collaborator
pub trait Navigator {
    fn go_to(&self, path: &str);
}

/// Outcome of a purchase action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Product added, staying on the page
    Added,
    /// Product added and navigation to checkout requested
    AddedAndNavigated,
    /// No target product, nothing happened
    Skipped,
}

/// Purchase actions bound to a cart and a navigator
pub struct PurchaseActions<'a, C: ?Sized, N: ?Sized> {
    cart: &'a C,
    navigator: &'a N,
}

impl<'a, C, N> PurchaseActions<'a, C, N>
where
    C: CartCapability + ?Sized,
    N: Navigator + ?Sized,
{
    pub fn new(cart: &'a C, navigator: &'a N) -> Self {
        Self { cart, navigator }
    }

    /// Add the target product to the cart. Never navigates.
    pub fn add_to_cart(&self, target: Option<&Product>) -> PurchaseOutcome {
        match target {
            Some(product) => {
                self.cart.add_item(product);
                PurchaseOutcome::Added
            }
            None => PurchaseOutcome::Skipped,
        }
    }

    /// Add the target product, then go to checkout.
    pub fn buy_now(&self, target: Option<&Product>) -> PurchaseOutcome {
        match target {
            Some(product) => {
                self.cart.add_item(product);
                self.navigator.go_to(CHECKOUT_PATH);
                PurchaseOutcome::AddedAndNavigated
            }
            None => PurchaseOutcome::Skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Journal {
        calls: RefCell<Vec<String>>,
    }

    impl CartCapability for Journal {
        fn add_item(&self, product: &Product) {
            self.calls.borrow_mut().push(format!("add:{}", product.id));
        }
    }

    impl Navigator for Journal {
        fn go_to(&self, path: &str) {
            self.calls.borrow_mut().push(format!("nav:{}", path));
        }
    }

    fn mask() -> Product {
        Product::new("bio-1", "BIODANCE Mask", "biodance-mask", 23.99)
    }

    #[test]
    fn test_buy_now_adds_then_navigates_once() {
        let journal = Journal::default();
        let actions = PurchaseActions::new(&journal, &journal);

        let outcome = actions.buy_now(Some(&mask()));

        assert_eq!(outcome, PurchaseOutcome::AddedAndNavigated);
        assert_eq!(
            *journal.calls.borrow(),
            vec!["add:bio-1".to_string(), "nav:/carrito".to_string()]
        );
    }

    #[test]
    fn test_buy_now_without_target_does_nothing() {
        let journal = Journal::default();
        let actions = PurchaseActions::new(&journal, &journal);

        assert_eq!(actions.buy_now(None), PurchaseOutcome::Skipped);
        assert!(journal.calls.borrow().is_empty());
    }

    #[test]
    fn test_add_to_cart_never_navigates() {
        let journal = Journal::default();
        let actions = PurchaseActions::new(&journal, &journal);

        assert_eq!(actions.add_to_cart(Some(&mask())), PurchaseOutcome::Added);
        assert_eq!(actions.add_to_cart(Some(&mask())), PurchaseOutcome::Added);
        assert_eq!(actions.add_to_cart(None), PurchaseOutcome::Skipped);

        let calls = journal.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|c| c.starts_with("add:")));
    }

    #[test]
    fn test_separate_collaborators() {
        let cart = Journal::default();
        let navigator = Journal::default();
        let actions = PurchaseActions::new(&cart, &navigator);

        actions.buy_now(Some(&mask()));

        assert_eq!(*cart.calls.borrow(), vec!["add:bio-1".to_string()]);
        assert_eq!(*navigator.calls.borrow(), vec!["nav:/carrito".to_string()]);
    }
}
