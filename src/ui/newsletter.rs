//! Newsletter capture section
//!
//! `NewsletterCapture` renders any [`NewsletterLogic`]; `NewsletterContext`
//! is the storefront's own logic object, backed by the
//! `subscribe_newsletter` server function.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::server_fn::error::ServerFnError;

use crate::core::{FormSubmission, NewsletterLogic, NewsletterView, submit_label, submit_newsletter};
use crate::ui::common::{Button, EmailField, ErrorMessage};
use crate::ui::icon::{Icon, icons};

impl FormSubmission for SubmitEvent {
    fn prevent_default(&self) {
        leptos::web_sys::Event::prevent_default(self);
    }
}

/// Newsletter subscription state
#[derive(Clone, Copy)]
pub struct NewsletterContext {
    pub email: RwSignal<String>,
    pub is_submitting: RwSignal<bool>,
    pub success: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl NewsletterContext {
    /// Apply the server's answer and leave the submitting state
    #[cfg_attr(feature = "ssr", allow(dead_code))]
    fn finish(&self, result: Result<(), ServerFnError>) {
        match result {
            Ok(()) => self.success.set(true),
            Err(e) => self.error.set(Some(server_error_message(&e))),
        }
        self.is_submitting.set(false);
    }
}

impl NewsletterLogic for NewsletterContext {
    fn email(&self) -> String {
        self.email.get()
    }

    fn set_email(&self, email: String) {
        self.email.set(email);
    }

    fn is_submitting(&self) -> bool {
        self.is_submitting.get()
    }

    fn success(&self) -> bool {
        self.success.get()
    }

    fn error(&self) -> Option<String> {
        self.error.get()
    }

    fn handle_subscribe(&self) {
        if self.is_submitting.get_untracked() {
            return;
        }
        self.error.set(None);
        self.is_submitting.set(true);

        let email = self.email.get_untracked();
        let ctx = *self;

        #[cfg(not(feature = "ssr"))]
        {
            use crate::api::subscribe_newsletter;
            use leptos::task::spawn_local;

            spawn_local(async move {
                let result = subscribe_newsletter(email).await;
                ctx.finish(result);
            });
        }

        #[cfg(feature = "ssr")]
        {
            // Forms are never submitted during server rendering
            let _ = (ctx, email);
        }
    }
}

/// User-facing text for a failed server call
pub fn server_error_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(msg) => msg.clone(),
        _ => "Something went wrong. Please try again.".to_string(),
    }
}

/// Provide newsletter context to the component tree
pub fn provide_newsletter_context() -> NewsletterContext {
    let ctx = NewsletterContext {
        email: RwSignal::new(String::new()),
        is_submitting: RwSignal::new(false),
        success: RwSignal::new(false),
        error: RwSignal::new(None),
    };
    provide_context(ctx);
    ctx
}

/// Use newsletter context from anywhere in the component tree
pub fn use_newsletter_context() -> NewsletterContext {
    use_context::<NewsletterContext>().expect("NewsletterContext should be provided")
}

/// Newsletter section: form until `success`, then a thank-you panel
#[component]
pub fn NewsletterCapture<L: NewsletterLogic + Copy + Send + Sync + 'static>(
    /// Subscription logic this view renders
    logic: L,
) -> impl IntoView {
    view! {
        <section class="bg-muted/30 py-16 border-y border-white/10">
            <div class="max-w-2xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                {move || match NewsletterView::for_logic(&logic) {
                    NewsletterView::Success => view! { <SubscribedPanel /> }.into_any(),
                    NewsletterView::Form => view! { <SubscribeForm logic=logic /> }.into_any(),
                }}
            </div>
        </section>
    }
}

#[component]
fn SubscribeForm<L: NewsletterLogic + Copy + Send + Sync + 'static>(logic: L) -> impl IntoView {
    let is_submitting = Signal::derive(move || logic.is_submitting());

    view! {
        <div class="space-y-6">
            <div class="space-y-2">
                <h3 class="text-2xl font-bold gradient-text">"Get Exclusive Skincare Tips"</h3>
                <p class="text-lg text-muted-foreground">
                    "Join our community for early access to new products & special offers"
                </p>
            </div>

            <form
                class="flex flex-col sm:flex-row gap-3 max-w-md mx-auto"
                on:submit=move |ev: SubmitEvent| submit_newsletter(&ev, &logic)
            >
                <EmailField
                    value=Signal::derive(move || logic.email())
                    on_input=Callback::new(move |email: String| logic.set_email(email))
                    disabled=is_submitting
                    class="flex-1 glass-card border-white/20"
                />
                <Button
                    button_type="submit"
                    disabled=is_submitting
                    class="sm:w-auto hover:scale-105 transition-all duration-300".to_string()
                >
                    {move || submit_label(is_submitting.get())}
                </Button>
            </form>

            <ErrorMessage error=Signal::derive(move || logic.error()) />
        </div>
    }
}

#[component]
fn SubscribedPanel() -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div class="flex justify-center">
                <div class="bg-gradient-to-br from-primary to-secondary rounded-full p-3 neon-glow-magenta">
                    <Icon name=icons::MAIL class="h-8 w-8" />
                </div>
            </div>
            <h3 class="text-2xl font-bold gradient-text">"Thank You for Subscribing!"</h3>
            <p class="text-muted-foreground">
                "Get ready for exclusive skincare tips and special offers."
            </p>
        </div>
    }
}
