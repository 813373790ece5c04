//! Shared page template: header, content, newsletter, footer

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::{BRAND_NAME, CHECKOUT_PATH};
use crate::ui::brand_header::BrandHeader;
use crate::ui::cart::use_cart_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::newsletter::{NewsletterCapture, use_newsletter_context};

/// Storefront page frame
#[component]
pub fn EcommerceTemplate(
    /// Show the cart link with item count in the header
    #[prop(default = false)]
    show_cart: bool,
    children: Children,
) -> impl IntoView {
    let newsletter = use_newsletter_context();

    view! {
        <div class="min-h-screen bg-background text-foreground overflow-x-hidden">
            <header class="sticky top-0 z-40 glass-card border-b border-white/10">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                    <BrandHeader />
                    {show_cart.then(|| view! { <CartLink /> })}
                </div>
            </header>

            <main>{children()}</main>

            <NewsletterCapture logic=newsletter />

            <Footer />
        </div>
    }
}

/// Header cart link with a live item count
#[component]
fn CartLink() -> impl IntoView {
    let cart = use_cart_context();
    let count = move || cart.item_count();

    view! {
        <A
            href=CHECKOUT_PATH
            attr:class="relative p-2 rounded-full hover:bg-white/10 transition-colors"
            attr:aria-label="Open cart"
        >
            <Icon name=icons::SHOPPING_BAG class="w-6 h-6" />
            <Show when=move || { count() > 0 }>
                <span class="absolute -top-1 -right-1 min-w-5 h-5 px-1 rounded-full bg-primary text-xs font-bold flex items-center justify-center">
                    {count}
                </span>
            </Show>
        </A>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-10 text-center text-sm text-foreground/60">
            <p>{format!("© 2025 {}. All rights reserved.", BRAND_NAME)}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    const STYLESHEET: &str = include_str!("../../style/tailwind.css");

    // Surfaces used outside the landing page must not depend on its inline styles
    #[test]
    fn test_shared_surfaces_live_in_site_stylesheet() {
        for class in [
            "glass-card",
            "gradient-text",
            "mesh-gradient",
            "neon-glow-magenta",
            "neon-glow-blue",
        ] {
            assert!(
                STYLESHEET.contains(&format!("@utility {} {{", class)),
                "missing utility {}",
                class
            );
        }
    }
}
