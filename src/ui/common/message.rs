//! Inline status messages

use leptos::prelude::*;

/// Error message component
/// Displays the message only when it is present and non-empty
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    let visible = move || crate::core::visible_error(error.get());

    view! {
        <Show when=move || visible().is_some()>
            <p class="text-sm text-destructive" role="alert">
                {move || visible().unwrap_or_default()}
            </p>
        </Show>
    }
}
