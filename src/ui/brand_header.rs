//! Brand logo link for the page header

use leptos::html::Img;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::{BRAND_NAME, BrandLogo, LOGO_SRC};

/// Logo linking to the site root.
///
/// If `/logo.png` fails to load, the image is swapped for the brand name in
/// gradient text. The swap happens once and is never undone.
#[component]
pub fn BrandHeader() -> impl IntoView {
    let logo = RwSignal::new(BrandLogo::default());
    let img_ref = NodeRef::<Img>::new();

    let on_error = move |_| {
        logo.update(|state| warn_on_fallback(state.on_load_error()));
    };

    // The server-rendered image can fail before hydration attaches `on:error`
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            if let Some(img) = img_ref.get() {
                logo.update(|state| {
                    warn_on_fallback(state.on_mount(img.complete(), img.natural_width()))
                });
            }
        });
    }

    view! {
        <A href="/" attr:class="ml-2 flex items-center" attr:aria-label="Home">
            {move || {
                if logo.get().shows_image() {
                    view! {
                        <img
                            node_ref=img_ref
                            src=LOGO_SRC
                            alt=format!("{} Logo", BRAND_NAME)
                            class="h-10 w-auto object-contain"
                            on:error=on_error
                        />
                    }.into_any()
                } else {
                    view! {
                        <span class="text-xl font-bold bg-gradient-to-r from-primary to-secondary bg-clip-text text-transparent">
                            {BRAND_NAME}
                        </span>
                    }.into_any()
                }
            }}
        </A>
    }
}

fn warn_on_fallback(switched: bool) {
    if switched {
        leptos::logging::warn!("{} failed to load, showing text logo", LOGO_SRC);
    }
}
