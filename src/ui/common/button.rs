use leptos::prelude::*;

/// Visual style of a storefront button
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Brand gradient, main call to action
    Gradient,
    /// Glass outline, secondary actions
    Outline,
    /// White on the gradient final CTA section
    Light,
}

/// Padding and font scale
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Medium,
    Large,
    ExtraLarge,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Gradient => "btn-gradient",
            ButtonVariant::Outline => "btn-outline glass-card",
            ButtonVariant::Light => "btn-light",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
            ButtonSize::ExtraLarge => "btn-xl",
        }
    }
}

/// Storefront call-to-action button
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Gradient)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler. Submit buttons usually leave this to the form.
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// HTML button type
    #[prop(default = "button")]
    button_type: &'static str,
    /// Whether button is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Label content
    children: Children,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let base_classes = format!("btn-base {} {}", variant.class(), size.class());
    let full_classes = if class.is_empty() {
        base_classes
    } else {
        format!("{} {}", base_classes, class)
    };

    view! {
        <button
            type=button_type
            class=full_classes
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(())
                }
            }
            disabled=move || disabled.get()
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLESHEET: &str = include_str!("../../../style/tailwind.css");

    fn defined(class: &str) -> bool {
        STYLESHEET.contains(&format!(".{} {{", class))
    }

    #[test]
    fn test_button_classes_live_in_site_stylesheet() {
        assert!(defined("btn-base"));

        for variant in [ButtonVariant::Gradient, ButtonVariant::Outline, ButtonVariant::Light] {
            let class = variant.class().split_whitespace().next().unwrap();
            assert!(defined(class), "missing .{}", class);
        }

        for size in [ButtonSize::Large, ButtonSize::ExtraLarge] {
            assert!(defined(size.class()), "missing .{}", size.class());
        }
        assert_eq!(ButtonSize::Medium.class(), "");
    }
}
