//! Core domain models and presentation logic for the landing storefront

pub mod ambient;
pub mod brand;
pub mod cart;
#[cfg(feature = "ssr")]
pub mod catalog;
#[cfg(feature = "ssr")]
pub mod config;
pub mod newsletter;
pub mod product;
pub mod purchase;
#[cfg(feature = "ssr")]
pub mod subscribers;
pub mod subscription;
#[cfg(test)]
mod tests;

pub use ambient::{PointerPosition, progress_bar_style, scroll_progress};
pub use brand::{BRAND_NAME, BrandLogo, LOGO_SRC};
pub use cart::{CartLine, CartState};
pub use newsletter::{
    FormSubmission, NewsletterLogic, NewsletterView, submit_label, submit_newsletter,
    visible_error,
};
pub use product::{
    BRAND_MARKER, BRAND_SLUG, PriceDisplay, Product, ProductSource, format_price,
    resolve_target_product, sticky_cta_label, target_product_from,
};
pub use purchase::{CHECKOUT_PATH, CartCapability, Navigator, PurchaseActions, PurchaseOutcome};
pub use subscription::{ReleaseFn, ScopedSubscriptions, Unsubscribe};
