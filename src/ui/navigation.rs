//! Router-backed navigation collaborator

use leptos_router::hooks::use_navigate;

use crate::core::Navigator;

/// `Navigator` over the leptos router
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str) + Clone,
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str),
{
    fn go_to(&self, path: &str) {
        (self.navigate)(path)
    }
}

/// Navigator for the current router. Must be called inside a `<Router>`.
pub fn use_router_navigator() -> RouterNavigator<impl Fn(&str) + Clone + Send + Sync + 'static> {
    let navigate = use_navigate();
    RouterNavigator::new(move |path: &str| navigate(path, Default::default()))
}
