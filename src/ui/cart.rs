//! Cart context: the storefront's concrete cart collaborator
//!
//! Provides:
//! - CartContext holding reactive cart state
//! - `CartCapability` so purchase actions can add items
//! - LocalStorage persistence across page loads

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

use crate::core::{CartCapability, CartState, Product};

#[cfg_attr(feature = "ssr", allow(dead_code))]
const STORAGE_KEY_CART: &str = "biodance_cart";

/// Cart context for managing cart state
#[derive(Clone, Copy)]
pub struct CartContext {
    /// Current cart contents
    pub state: RwSignal<CartState>,
}

impl CartContext {
    /// Total number of units in the cart
    pub fn item_count(&self) -> u32 {
        self.state.with(CartState::item_count)
    }

    /// Persist cart to localStorage
    fn persist(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            else {
                leptos::logging::warn!("localStorage unavailable, cart not saved");
                return;
            };
            if let Err(e) = self.state.with_untracked(|cart| save_cart(&storage, cart)) {
                leptos::logging::warn!("Could not save cart: {}", e);
            }
        }
    }
}

/// Key-value store the cart is written to
#[cfg_attr(feature = "ssr", allow(dead_code))]
trait CartStorage {
    fn write(&self, key: &str, value: &str) -> Result<(), String>;
}

#[cfg(not(feature = "ssr"))]
impl CartStorage for web_sys::Storage {
    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        self.set_item(key, value).map_err(|e| format!("{:?}", e))
    }
}

#[cfg_attr(feature = "ssr", allow(dead_code))]
fn save_cart(storage: &impl CartStorage, cart: &CartState) -> Result<(), String> {
    let json = serde_json::to_string(cart).map_err(|e| e.to_string())?;
    storage.write(STORAGE_KEY_CART, &json)
}

impl CartCapability for CartContext {
    fn add_item(&self, product: &Product) {
        self.state.update(|cart| cart.add(product));
        self.persist();
    }
}

/// Load cart from localStorage
#[cfg(not(feature = "ssr"))]
fn load_persisted_cart() -> Option<CartState> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let json = storage.get_item(STORAGE_KEY_CART).ok()??;
    match serde_json::from_str(&json) {
        Ok(cart) => Some(cart),
        Err(e) => {
            leptos::logging::warn!("Discarding unreadable stored cart: {}", e);
            None
        }
    }
}

/// Provide cart context to the component tree
pub fn provide_cart_context() -> CartContext {
    // Start empty on both server and client to avoid hydration mismatch
    let state = RwSignal::new(CartState::new());
    let ctx = CartContext { state };

    // Restore the stored cart after hydration (client-side only)
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            if let Some(cart) = load_persisted_cart() {
                state.set(cart);
            }
        });
    }

    provide_context(ctx);

    ctx
}

/// Use cart context from anywhere in the component tree
pub fn use_cart_context() -> CartContext {
    use_context::<CartContext>().expect("CartContext should be provided")
}
