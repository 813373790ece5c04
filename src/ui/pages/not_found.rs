//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::{BRAND_NAME, CHECKOUT_PATH};
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-background text-foreground mesh-gradient flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 glass-card rounded-full flex items-center justify-center">
                    <Icon name=icons::SPARKLES class="w-12 h-12" />
                </div>

                <h1 class="text-6xl font-bold gradient-text mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold mb-2">"Page Not Found"</h2>

                <p class="text-foreground/70 mb-8 max-w-md mx-auto">
                    "This glow doesn't live here. The page may have moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A href="/" attr:class="btn-base btn-gradient">
                        "Go Home"
                    </A>
                    <A href=CHECKOUT_PATH attr:class="btn-base btn-outline glass-card">
                        "View Cart"
                    </A>
                </div>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-foreground/50">{format!("© 2025 {}", BRAND_NAME)}</p>
            </div>
        </div>
    }
}
