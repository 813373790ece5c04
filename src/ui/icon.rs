use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file stem under /icons, without .svg)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    // Icons sit next to text labels, so they are decorative
    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icon names shipped in public/icons
pub mod icons {
    pub const SPARKLES: &str = "sparkles";
    pub const ZAP: &str = "zap";
    pub const SHIELD: &str = "shield";
    pub const STAR: &str = "star";
    pub const MAIL: &str = "mail";
    pub const SHOPPING_BAG: &str = "shopping-bag";
}
