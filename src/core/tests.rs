#[cfg(test)]
mod tests {
    use crate::core::{
        CHECKOUT_PATH, CartCapability, CartState, Navigator, PriceDisplay, Product,
        PurchaseActions, PurchaseOutcome, target_product_from,
    };
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct MemoryCart {
        state: RefCell<CartState>,
        add_calls: Cell<u32>,
    }

    impl CartCapability for MemoryCart {
        fn add_item(&self, product: &Product) {
            self.add_calls.set(self.add_calls.get() + 1);
            self.state.borrow_mut().add(product);
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn go_to(&self, path: &str) {
            self.visited.borrow_mut().push(path.to_string());
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("ton-1", "Hydrating Toner", "hydrating-toner", 18.0),
            Product::new(
                "bio-1",
                "BIODANCE Bio-Collagen Real Deep Mask",
                "bio-collagen-real-deep-mask",
                23.99,
            )
            .with_compare_at_price(35.99),
        ]
    }

    #[test]
    fn test_landing_flow_with_target() {
        let products = catalog();
        let target = target_product_from(&products);
        assert!(PriceDisplay::for_target(target.as_ref()).is_some());

        let cart = MemoryCart::default();
        let navigator = RecordingNavigator::default();
        let actions = PurchaseActions::new(&cart, &navigator);

        assert_eq!(actions.add_to_cart(target.as_ref()), PurchaseOutcome::Added);
        assert!(navigator.visited.borrow().is_empty());

        assert_eq!(
            actions.buy_now(target.as_ref()),
            PurchaseOutcome::AddedAndNavigated
        );
        assert_eq!(cart.add_calls.get(), 2);
        assert_eq!(*navigator.visited.borrow(), vec![CHECKOUT_PATH.to_string()]);

        let state = cart.state.borrow();
        assert_eq!(state.item_count(), 2);
        assert_eq!(state.lines[0].product.id, "bio-1");
    }

    #[test]
    fn test_landing_flow_without_target() {
        let products: Vec<Product> = catalog()
            .into_iter()
            .filter(|p| !p.is_brand_product())
            .collect();
        let target = target_product_from(&products);
        assert!(target.is_none());
        assert!(PriceDisplay::for_target(target.as_ref()).is_none());

        let cart = MemoryCart::default();
        let navigator = RecordingNavigator::default();
        let actions = PurchaseActions::new(&cart, &navigator);

        assert_eq!(actions.add_to_cart(target.as_ref()), PurchaseOutcome::Skipped);
        assert_eq!(actions.buy_now(target.as_ref()), PurchaseOutcome::Skipped);
        assert_eq!(cart.add_calls.get(), 0);
        assert!(cart.state.borrow().is_empty());
        assert!(navigator.visited.borrow().is_empty());
    }

    #[test]
    fn test_buy_now_from_empty_catalog() {
        let target = target_product_from(&Vec::<Product>::new());
        let cart = MemoryCart::default();
        let navigator = RecordingNavigator::default();

        PurchaseActions::new(&cart, &navigator).buy_now(target.as_ref());

        assert_eq!(cart.add_calls.get(), 0);
        assert!(navigator.visited.borrow().is_empty());
    }
}
