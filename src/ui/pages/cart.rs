//! Cart page
//!
//! Purchase navigation lands here. Shows what the cart collaborator holds.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::{CartLine, format_price};
use crate::ui::cart::use_cart_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::template::EcommerceTemplate;

/// Cart contents with line totals and subtotal
#[component]
pub fn CartPage() -> impl IntoView {
    let cart = use_cart_context();
    let is_empty = move || cart.state.with(|c| c.is_empty());

    view! {
        <Title text="Your Cart - BIODANCE" />
        <EcommerceTemplate>
            <section class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
                <h1 class="font-space-grotesk text-4xl font-bold gradient-text mb-10">"Your Cart"</h1>

                <Show when=move || !is_empty() fallback=|| view! { <EmptyCart /> }>
                    <ul class="space-y-4">
                        <For
                            each=move || cart.state.get().lines
                            key=|line| (line.product.id.clone(), line.quantity)
                            children=|line| view! { <CartLineRow line=line /> }
                        />
                    </ul>

                    <div class="mt-8 glass-card rounded-2xl p-6 flex items-center justify-between">
                        <span class="text-lg text-foreground/70">
                            {move || format!("Subtotal ({} items)", cart.item_count())}
                        </span>
                        <span class="text-3xl font-bold gradient-text">
                            {move || cart.state.with(|c| format_price(c.subtotal()))}
                        </span>
                    </div>
                </Show>
            </section>
        </EcommerceTemplate>
    }
}

#[component]
fn CartLineRow(line: CartLine) -> impl IntoView {
    let total = format_price(line.total());
    let unit = line.product.display_price();

    view! {
        <li class="glass-card rounded-xl p-4 flex items-center gap-4">
            {line.product.image.clone().map(|src| view! {
                <img src=src alt=line.product.title.clone() class="w-20 h-20 rounded-lg object-cover" />
            })}
            <div class="flex-1">
                <div class="font-semibold">{line.product.title.clone()}</div>
                <div class="text-sm text-foreground/60">
                    {format!("{} × {}", line.quantity, unit)}
                </div>
            </div>
            <div class="text-xl font-bold">{total}</div>
        </li>
    }
}

#[component]
fn EmptyCart() -> impl IntoView {
    view! {
        <div class="text-center py-16">
            <div class="w-20 h-20 mx-auto mb-6 glass-card rounded-full flex items-center justify-center">
                <Icon name=icons::SHOPPING_BAG class="w-10 h-10" />
            </div>
            <p class="text-foreground/70 mb-8">"Your cart is empty."</p>
            <A href="/" attr:class="btn-base btn-gradient btn-lg">
                "Back to the mask"
            </A>
        </div>
    }
}
