use leptos::prelude::*;

/// Email input bound to an external value and setter
#[component]
pub fn EmailField(
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Placeholder text
    #[prop(default = "your@email.com")]
    placeholder: &'static str,
    /// Whether field is required (browser-level hint only)
    #[prop(default = true)]
    required: bool,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <input
            type="email"
            class=format!("input-base {}", class)
            placeholder=placeholder
            aria-label="Email address"
            autocomplete="email"
            required=required
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
            disabled=move || disabled.get()
        />
    }
}
