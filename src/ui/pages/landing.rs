//! Landing page for the BIODANCE Bio-Collagen Real Deep Mask
//!
//! `IndexPage` loads the catalog and hands `ProductLandingView` its product
//! list. The view resolves the target product, wires the purchase buttons to
//! the cart and router collaborators, and keeps two cosmetic pieces of state:
//! - scroll progress for the bar pinned to the top of the viewport
//! - pointer position for the glow that follows the cursor
//!
//! Sections: hero, benefits, social proof, before/after, ingredients,
//! final call to action and a sticky mobile call to action.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::api::get_products;
use crate::core::ambient::{PARTICLE_COUNT, particle_layout};
use crate::core::{
    BRAND_NAME, CartCapability, Navigator, PointerPosition, PriceDisplay, Product, ProductSource,
    PurchaseActions, progress_bar_style, resolve_target_product, sticky_cta_label,
};
use crate::ui::cart::use_cart_context;
use crate::ui::common::{Button, ButtonSize, ButtonVariant};
use crate::ui::icon::{Icon, icons};
use crate::ui::navigation::use_router_navigator;
use crate::ui::template::EcommerceTemplate;

/// Product list handed to the landing view by its page container
#[derive(Clone, Copy)]
pub struct IndexLogic {
    pub filtered_products: Signal<Vec<Product>>,
}

impl ProductSource for IndexLogic {
    fn filtered_products(&self) -> Vec<Product> {
        self.filtered_products.get()
    }
}

/// Home route: loads products and composes the landing view
#[component]
pub fn IndexPage() -> impl IntoView {
    let products = Resource::new(|| (), |_| get_products());

    // A failed load behaves like an empty catalog: no price UI, inert buttons
    let filtered_products =
        Signal::derive(move || products.get().and_then(Result::ok).unwrap_or_default());

    let logic = IndexLogic { filtered_products };
    let cart = use_cart_context();
    let navigator = use_router_navigator();

    view! {
        <SeoMeta />
        <EcommerceTemplate show_cart=true>
            <ProductLandingView logic=logic cart=cart navigator=navigator />
        </EcommerceTemplate>
        <LandingStyles />
    }
}

/// Landing view over injected product, cart and navigation collaborators
#[component]
pub fn ProductLandingView<
    L: ProductSource + Copy + Send + Sync + 'static,
    C: CartCapability + Copy + Send + Sync + 'static,
    N: Navigator + Clone + Send + Sync + 'static,
>(
    /// Product source for this page
    logic: L,
    /// Cart collaborator
    cart: C,
    /// Navigation collaborator
    navigator: N,
) -> impl IntoView {
    let target = target_signal(logic);

    let add_to_cart = Callback::new({
        let navigator = navigator.clone();
        move |_: ()| {
            let target = target.get_untracked();
            PurchaseActions::new(&cart, &navigator).add_to_cart(target.as_ref());
        }
    });

    let buy_now = Callback::new(move |_: ()| {
        let target = target.get_untracked();
        PurchaseActions::new(&cart, &navigator).buy_now(target.as_ref());
    });

    let scroll_progress = RwSignal::new(0.0_f64);
    let pointer = RwSignal::new(PointerPosition::default());

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::{ReleaseFn, ScopedSubscriptions};
        use leptos::ev::{mousemove, scroll};

        let scroll_handle = window_event_listener(scroll, move |_| {
            scroll_progress.set(read_scroll_progress());
        });
        let pointer_handle = window_event_listener(mousemove, move |ev| {
            pointer.set(PointerPosition::new(
                f64::from(ev.client_x()),
                f64::from(ev.client_y()),
            ));
        });

        let subscriptions: ScopedSubscriptions<ReleaseFn> = ScopedSubscriptions::new()
            .with(Box::new(move || scroll_handle.remove()))
            .with(Box::new(move || pointer_handle.remove()));

        on_cleanup(move || subscriptions.release());
    }

    view! {
        // Scroll progress bar
        <div
            class="fixed top-0 left-0 h-1 bg-gradient-to-r from-primary via-secondary to-accent z-50 transition-all duration-300"
            style=move || progress_bar_style(scroll_progress.get())
        ></div>

        // Cursor glow
        <div
            class="pointer-events-none fixed top-0 left-0 w-64 h-64 rounded-full opacity-20 blur-3xl transition-transform duration-200 ease-out z-0"
            style=move || format!(
                "background: radial-gradient(circle, hsl(var(--neon-magenta)) 0%, transparent 70%); transform: {};",
                pointer.get().glow_transform()
            )
            aria-hidden="true"
        ></div>

        <HeroSection target=target buy_now=buy_now add_to_cart=add_to_cart />
        <BenefitsSection />
        <SocialProofSection buy_now=buy_now />
        <BeforeAfterSection />
        <IngredientsSection />
        <FinalCtaSection buy_now=buy_now />

        // Sticky mobile CTA
        <div class="lg:hidden fixed bottom-0 left-0 right-0 p-4 glass-card border-t border-white/10 z-40">
            <Button
                on_click=buy_now
                size=ButtonSize::Large
                class="w-full neon-glow-magenta font-bold".to_string()
            >
                <Transition fallback=|| "GET YOURS NOW">
                    {move || sticky_cta_label(target.get().as_ref())}
                </Transition>
            </Button>
        </div>
    }
}

/// Target product, re-resolved whenever the source's products change
fn target_signal<L>(logic: L) -> Signal<Option<Product>>
where
    L: ProductSource + Copy + Send + Sync + 'static,
{
    Signal::derive(move || resolve_target_product(&logic.filtered_products()).cloned())
}

#[cfg(not(feature = "ssr"))]
fn read_scroll_progress() -> f64 {
    let Some(window) = leptos::web_sys::window() else {
        return 0.0;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(0.0);

    crate::core::scroll_progress(scroll_y, document_height, viewport_height)
}

// ============================================================================
// Static copy
// ============================================================================

struct Benefit {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

static BENEFITS: [Benefit; 3] = [
    Benefit {
        icon: icons::SPARKLES,
        title: "Instant Glass Skin Glow",
        description: "See visible results in just 20 minutes. Your skin will look radiant, plump, and luminous.",
    },
    Benefit {
        icon: icons::ZAP,
        title: "Deep Hydration Serum",
        description: "Packed with hyaluronic acid that holds 1000x its weight in water for long-lasting moisture.",
    },
    Benefit {
        icon: icons::SHIELD,
        title: "Probiotic + Collagen Power",
        description: "Strengthens skin barrier while boosting collagen production for firmer, healthier skin.",
    },
];

#[derive(Clone, Copy, PartialEq)]
enum Platform {
    TikTok,
    Instagram,
}

impl Platform {
    fn badge(&self) -> &'static str {
        match self {
            Platform::TikTok => "🎵 TIKTOK",
            Platform::Instagram => "📸 INSTAGRAM",
        }
    }
}

struct Testimonial {
    handle: &'static str,
    name: &'static str,
    platform: Platform,
    image: &'static str,
    text: &'static str,
    posted: &'static str,
    likes: &'static str,
    verified: bool,
}

static TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        handle: "@skincare_bymia",
        name: "Mia Chen",
        platform: Platform::TikTok,
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400&h=400&fit=crop",
        text: "omg stopped me mid-scroll... used it before my date and my bf literally asked if I got botox 💀 buying 10 more",
        posted: "3 days ago",
        likes: "12.4K",
        verified: true,
    },
    Testimonial {
        handle: "@jessglowup",
        name: "Jessica Torres",
        platform: Platform::TikTok,
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&h=400&fit=crop",
        text: "tried it for my wedding day and I'm SOBBING... my skin has never been this glowy. photographer kept asking what I used 😭✨",
        posted: "1 week ago",
        likes: "28.9K",
        verified: true,
    },
    Testimonial {
        handle: "@emilyskintok",
        name: "Emily Rodriguez",
        platform: Platform::Instagram,
        image: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=400&h=400&fit=crop",
        text: "POV: you finally found the mask from that viral TikTok & it's actually better than they said??? glass skin is REAL 🔥",
        posted: "5 days ago",
        likes: "9.2K",
        verified: true,
    },
    Testimonial {
        handle: "@skincarewithmichelle",
        name: "Michelle Park",
        platform: Platform::Instagram,
        image: "https://images.unsplash.com/photo-1488426862026-3ee34a7d66df?w=400&h=400&fit=crop",
        text: "week 3 update: my mom asked for my skincare routine... she's 58 and never cared before. that's the power of this mask ✨",
        posted: "2 days ago",
        likes: "15.7K",
        verified: true,
    },
];

struct Ingredient {
    name: &'static str,
    badge: &'static str,
    description: &'static str,
}

static INGREDIENTS: [Ingredient; 4] = [
    Ingredient {
        name: "Probiotics",
        badge: "LIVE CULTURES",
        description: "Strengthens skin barrier and balances microbiome",
    },
    Ingredient {
        name: "Marine Collagen",
        badge: "ANTI-AGING",
        description: "Boosts elasticity and reduces fine lines",
    },
    Ingredient {
        name: "Hyaluronic Acid",
        badge: "HYDRATION",
        description: "Locks in moisture for plump, dewy skin",
    },
    Ingredient {
        name: "Niacinamide",
        badge: "BRIGHTENING",
        description: "Evens skin tone and minimizes pores",
    },
];

// ============================================================================
// Sections
// ============================================================================

#[component]
fn HeroSection(
    target: Signal<Option<Product>>,
    buy_now: Callback<()>,
    add_to_cart: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden hero-gradient mesh-gradient">
            // Floating particles
            <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
                {particle_layout(PARTICLE_COUNT)
                    .into_iter()
                    .map(|particle| view! {
                        <div
                            class="absolute w-1 h-1 bg-white/20 rounded-full animate-float"
                            style=particle.style()
                        ></div>
                    })
                    .collect_view()}
            </div>

            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="text-center lg:text-left space-y-8">
                        <div class="inline-flex items-center gap-2 glass-card px-4 py-2 rounded-full text-sm font-medium animate-pulse-glow">
                            <span class="text-2xl">"🔥"</span>
                            <span class="gradient-text font-semibold">"VIRAL ON TIKTOK - 4M+ VIEWS"</span>
                        </div>

                        <h1
                            class="font-space-grotesk font-bold leading-tight gradient-text"
                            style="font-size: clamp(3rem, 8vw, 5rem)"
                        >
                            "GLASS SKIN"<br />"IN ONE USE"
                        </h1>

                        <p class="text-lg md:text-xl text-foreground/80 max-w-2xl">
                            "The TikTok-viral Korean mask with probiotics + collagen serum that delivers glowing, hydrated skin"
                        </p>

                        <div class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start">
                            <Button
                                on_click=buy_now
                                size=ButtonSize::Large
                                class="neon-glow-magenta font-semibold".to_string()
                            >
                                "GET YOURS NOW"
                            </Button>
                            <a href="#benefits" class="btn-base btn-outline btn-lg glass-card">
                                "Learn More"
                            </a>
                        </div>

                        <div class="flex flex-wrap gap-6 justify-center lg:justify-start text-sm text-foreground/60">
                            <TrustItem icon=icons::SHIELD label="Free Shipping" />
                            <TrustItem icon=icons::STAR label="4.9★ Rating" />
                            <TrustItem icon=icons::SPARKLES label="30-Day Returns" />
                        </div>
                    </div>

                    <div class="relative">
                        <div class="relative animate-float">
                            <img
                                src="/hero-product.jpg"
                                alt=format!("{} Bio-Collagen Real Deep Mask", BRAND_NAME)
                                class="w-full h-auto rounded-2xl"
                                loading="eager"
                            />
                            <div class="absolute inset-0 bg-gradient-to-t from-primary/20 to-transparent rounded-2xl pointer-events-none"></div>
                        </div>

                        <Transition fallback=|| ()>
                            {move || {
                                PriceDisplay::for_target(target.get().as_ref())
                                    .map(|price| view! { <PriceBadge price=price add_to_cart=add_to_cart /> })
                            }}
                        </Transition>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TrustItem(icon: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <Icon name=icon class="w-4 h-4" />
            <span>{label}</span>
        </div>
    }
}

/// Price badge over the hero image, only rendered for a present product
#[component]
fn PriceBadge(price: PriceDisplay, add_to_cart: Callback<()>) -> impl IntoView {
    view! {
        <div class="absolute -bottom-6 -right-6 glass-card p-6 rounded-2xl neon-glow-magenta space-y-1">
            {price.compare_at.map(|compare_at| view! {
                <div class="text-sm text-foreground/60 line-through">{compare_at}</div>
            })}
            <div class="text-4xl font-bold gradient-text">{price.price}</div>
            {price.discount_label.map(|label| view! {
                <div class="text-sm text-primary font-semibold">{label}</div>
            })}
            <Button
                on_click=add_to_cart
                variant=ButtonVariant::Outline
                class="mt-3 w-full text-sm".to_string()
            >
                "Add to Cart"
            </Button>
        </div>
    }
}

#[component]
fn BenefitsSection() -> impl IntoView {
    view! {
        <section id="benefits" class="py-24 bg-background relative overflow-hidden">
            <div class="absolute inset-0 mesh-gradient opacity-50"></div>

            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Why Everyone's Obsessed"
                    subtitle="The science-backed formula that delivers instant results"
                />

                <div class="grid md:grid-cols-3 gap-8">
                    {BENEFITS
                        .iter()
                        .enumerate()
                        .map(|(idx, benefit)| view! {
                            <div
                                class="glass-card p-8 rounded-2xl hover:scale-105 transition-all duration-300 group"
                                style=format!("animation-delay: {:.1}s", idx as f64 * 0.1)
                            >
                                <div class="w-16 h-16 rounded-full bg-gradient-to-br from-primary to-secondary flex items-center justify-center mb-6 group-hover:neon-glow-magenta transition-all duration-300">
                                    <Icon name=benefit.icon class="w-8 h-8" />
                                </div>
                                <h3 class="text-2xl font-bold mb-4 gradient-text">{benefit.title}</h3>
                                <p class="text-foreground/70 leading-relaxed">{benefit.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SocialProofSection(buy_now: Callback<()>) -> impl IntoView {
    view! {
        <section class="py-24 bg-gradient-to-b from-background to-muted/20 relative overflow-hidden">
            <div class="absolute inset-0 opacity-30" aria-hidden="true">
                <div class="absolute top-1/4 left-1/4 w-64 h-64 bg-primary/20 rounded-full blur-3xl animate-pulse" style="animation-duration: 4s"></div>
                <div class="absolute bottom-1/3 right-1/4 w-96 h-96 bg-secondary/20 rounded-full blur-3xl animate-pulse" style="animation-duration: 6s; animation-delay: 1s"></div>
            </div>

            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <div class="inline-flex items-center gap-2 mb-6">
                        {(0..5)
                            .map(|i| view! {
                                <span style=format!("animation-delay: {:.1}s", f64::from(i) * 0.1)>
                                    <Icon name=icons::STAR class="w-7 h-7 animate-shimmer" />
                                </span>
                            })
                            .collect_view()}
                    </div>

                    <h2 class="font-space-grotesk text-4xl md:text-6xl font-bold mb-6">
                        <span class="gradient-text inline-block animate-pulse-glow">"320M+"</span>
                        " People Glow Different Now"
                    </h2>

                    <div class="max-w-3xl mx-auto glass-card p-8 rounded-2xl neon-glow-magenta">
                        <p class="text-2xl md:text-3xl italic text-white font-light mb-4">
                            "\"POV: You found the mask that actually works\""
                        </p>
                        <p class="text-sm text-primary font-semibold uppercase tracking-wider">
                            "— Every TikTok Comment Ever"
                        </p>
                    </div>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(idx, testimonial)| view! { <TestimonialCard testimonial=testimonial idx=idx /> })
                        .collect_view()}
                </div>

                <div class="text-center mt-16">
                    <p class="text-lg text-foreground/70 mb-6">
                        "Join thousands of people experiencing the viral glow ✨"
                    </p>
                    <Button
                        on_click=buy_now
                        size=ButtonSize::Large
                        class="hover:scale-110 neon-glow-magenta font-bold".to_string()
                    >
                        "GET THE VIRAL MASK NOW"
                    </Button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: &'static Testimonial, idx: usize) -> impl IntoView {
    view! {
        <div
            class="relative glass-card p-6 rounded-xl hover:scale-105 hover:neon-glow-magenta transition-all duration-500 cursor-pointer group"
            style=format!("animation: float 6s ease-in-out infinite; animation-delay: {:.1}s", idx as f64 * 0.5)
        >
            <div class="absolute -top-3 -right-3 bg-gradient-to-br from-primary to-secondary px-3 py-1 rounded-full text-xs font-bold flex items-center gap-1 neon-glow-magenta">
                {testimonial.platform.badge()}
            </div>

            <div class="flex items-start gap-3 mb-4">
                <div class="relative">
                    <img
                        src=testimonial.image
                        alt=testimonial.handle
                        class="w-14 h-14 rounded-full object-cover ring-2 ring-primary/50 group-hover:ring-4 group-hover:ring-primary transition-all duration-300"
                        loading="lazy"
                    />
                    {testimonial.verified.then(|| view! { <VerifiedMark /> })}
                </div>

                <div class="flex-1">
                    <div class="font-bold text-white group-hover:text-primary transition-colors">
                        {testimonial.handle}
                    </div>
                    <div class="text-xs text-foreground/60">{testimonial.name}</div>
                    <div class="flex items-center gap-3 mt-1">
                        <div class="flex gap-0.5">
                            {(0..5)
                                .map(|_| view! { <Icon name=icons::STAR class="w-3 h-3" /> })
                                .collect_view()}
                        </div>
                        <span class="text-xs text-foreground/50">{testimonial.posted}</span>
                    </div>
                </div>
            </div>

            <p class="text-foreground/90 text-sm leading-relaxed mb-4">
                {format!("\"{}\"", testimonial.text)}
            </p>

            <div class="flex items-center gap-4 text-xs text-foreground/60">
                <div class="flex items-center gap-1">
                    <span class="text-red-400">"❤️"</span>
                    <span class="font-semibold">{testimonial.likes}</span>
                </div>
                <div class="text-foreground/40">"•"</div>
                <div class="text-primary font-semibold group-hover:text-secondary transition-colors">
                    "Verified Purchase"
                </div>
            </div>
        </div>
    }
}

#[component]
fn VerifiedMark() -> impl IntoView {
    view! {
        <div class="absolute -bottom-1 -right-1 bg-primary rounded-full p-1">
            <svg class="w-3 h-3 text-white" fill="currentColor" viewBox="0 0 20 20" aria-hidden="true">
                <path
                    fill-rule="evenodd"
                    d="M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z"
                    clip-rule="evenodd"
                />
            </svg>
        </div>
    }
}

#[component]
fn BeforeAfterSection() -> impl IntoView {
    view! {
        <section class="py-24 bg-background relative overflow-hidden">
            <div class="absolute inset-0 mesh-gradient opacity-30"></div>

            <div class="relative z-10 max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Real Results, Real Fast"
                    subtitle="See the transformation after just one use"
                />

                <div class="relative rounded-2xl overflow-hidden glass-card">
                    <img src="/before-after.jpg" alt="Before and After Results" class="w-full h-auto" loading="lazy" />
                    <div class="absolute inset-0 bg-gradient-to-t from-background/80 via-transparent to-transparent"></div>
                    <div class="absolute bottom-8 left-1/2 -translate-x-1/2">
                        <span class="btn-base btn-outline btn-lg glass-card neon-glow-blue">
                            "SEE THE TRANSFORMATION"
                        </span>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn IngredientsSection() -> impl IntoView {
    view! {
        <section class="py-24 bg-gradient-to-b from-muted/20 to-background relative">
            <div class="absolute inset-0" aria-hidden="true">
                <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[500px] h-[500px] bg-primary/10 rounded-full blur-3xl"></div>
            </div>

            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Powered by Science"
                    subtitle="Clean, effective ingredients that actually work"
                />

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {INGREDIENTS
                        .iter()
                        .map(|ingredient| view! {
                            <div class="glass-card p-6 rounded-xl text-center hover:scale-105 transition-all duration-300">
                                <div class="inline-flex items-center justify-center px-3 py-1 rounded-full bg-gradient-to-r from-primary to-secondary text-xs font-bold mb-4">
                                    {ingredient.badge}
                                </div>
                                <h3 class="text-xl font-bold mb-3 gradient-text">{ingredient.name}</h3>
                                <p class="text-sm text-foreground/70 leading-relaxed">{ingredient.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FinalCtaSection(buy_now: Callback<()>) -> impl IntoView {
    view! {
        <section class="py-32 bg-gradient-to-br from-primary via-secondary to-accent relative overflow-hidden">
            <div class="absolute inset-0" aria-hidden="true">
                <div class="absolute inset-0 bg-black/30"></div>
                <div class="absolute top-0 left-1/4 w-96 h-96 bg-accent/30 rounded-full blur-3xl animate-pulse"></div>
                <div class="absolute bottom-0 right-1/4 w-96 h-96 bg-primary/30 rounded-full blur-3xl animate-pulse" style="animation-delay: 1s"></div>
            </div>

            <div class="relative z-10 max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h2 class="font-space-grotesk text-5xl md:text-6xl font-bold text-white mb-6">
                    "READY FOR GLASS SKIN?"
                </h2>
                <p class="text-xl text-white/90 mb-12 max-w-2xl mx-auto">
                    "Join millions who've transformed their skincare routine with the viral mask everyone's talking about"
                </p>

                <Button
                    on_click=buy_now
                    variant=ButtonVariant::Light
                    size=ButtonSize::ExtraLarge
                    class="hover:scale-110 font-bold animate-pulse-glow shadow-2xl".to_string()
                >
                    "SHOP NOW - FREE SHIPPING"
                </Button>

                <div class="flex flex-wrap gap-8 justify-center mt-12 text-white/80">
                    <TrustItem icon=icons::SHIELD label="Secure Checkout" />
                    <TrustItem icon=icons::STAR label="30-Day Returns" />
                    <TrustItem icon=icons::SPARKLES label="Cruelty Free" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="font-space-grotesk text-4xl md:text-5xl font-bold gradient-text mb-4">{title}</h2>
            <p class="text-xl text-foreground/70">{subtitle}</p>
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="BIODANCE Bio-Collagen Real Deep Mask - Glass Skin in One Use" />

        <Meta name="description" content="The TikTok-viral Korean mask with probiotics and collagen serum for glowing, hydrated glass skin. Free shipping and 30-day returns." />
        <Meta name="keywords" content="BIODANCE, collagen mask, glass skin, korean skincare, hydrogel mask, probiotics" />

        // Open Graph
        <Meta property="og:type" content="product" />
        <Meta property="og:title" content="BIODANCE Bio-Collagen Real Deep Mask" />
        <Meta property="og:description" content="Glass skin in one use. The viral Korean collagen mask." />
        <Meta property="og:image" content="/hero-product.jpg" />

        <Link rel="preload" href="/hero-product.jpg" as_="image" />
    }
}

/// Landing-only hero background and animation keyframes
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html { scroll-behavior: smooth; }

            .hero-gradient {
                background: radial-gradient(ellipse at top, hsl(var(--primary) / 0.25), transparent 60%);
            }

            @keyframes float {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(-12px); }
            }
            .animate-float { animation: float 6s ease-in-out infinite; }

            @keyframes pulse-glow {
                0%, 100% { filter: drop-shadow(0 0 0 transparent); }
                50% { filter: drop-shadow(0 0 12px hsl(var(--neon-magenta) / 0.6)); }
            }
            .animate-pulse-glow { animation: pulse-glow 3s ease-in-out infinite; }

            @keyframes shimmer {
                0%, 100% { opacity: 1; }
                50% { opacity: 0.6; }
            }
            .animate-shimmer { animation: shimmer 2s ease-in-out infinite; }

            @media (prefers-reduced-motion: reduce) {
                .animate-float, .animate-pulse-glow, .animate-shimmer { animation: none; }
                html { scroll-behavior: auto; }
            }
            "#
        </style>
    }
}
