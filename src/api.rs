//! Server functions backing the storefront
//!
//! Both run on the server and are called from the browser under `/api`.
//! Shared state reaches them through the context provided in `main`.

use leptos::prelude::*;
use leptos::server_fn::error::ServerFnError;

use crate::core::Product;

/// Server state shared by all requests
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: crate::core::catalog::Catalog,
    pub subscribers: crate::core::subscribers::SubscriberStore,
}

#[cfg(feature = "ssr")]
fn app_state() -> Result<AppState, ServerFnError> {
    use_context::<AppState>().ok_or_else(|| ServerFnError::new("Storefront state is not available"))
}

/// Product list for the landing page
#[server(prefix = "/api")]
pub async fn get_products() -> Result<Vec<Product>, ServerFnError> {
    let state = app_state()?;
    Ok(state.catalog.products().to_vec())
}

/// Subscribe an address to the newsletter
#[server(prefix = "/api")]
pub async fn subscribe_newsletter(email: String) -> Result<(), ServerFnError> {
    use crate::core::subscribers::{Subscription, mask_email};

    let state = app_state()?;
    match state.subscribers.subscribe(&email) {
        Ok(Subscription::New) => {
            tracing::info!(
                "New newsletter subscriber {} ({} total)",
                mask_email(email.trim()),
                state.subscribers.count()
            );
            Ok(())
        }
        Ok(Subscription::AlreadySubscribed) => {
            tracing::debug!("Repeat subscription for {}", mask_email(email.trim()));
            Ok(())
        }
        Err(e) => {
            tracing::warn!("Rejected newsletter subscription: {}", e);
            Err(ServerFnError::new(e))
        }
    }
}
