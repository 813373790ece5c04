//! Newsletter capture contract
//!
//! The capture section is a view over a logic object it does not own.
//! Validation, network calls and success/error state all live behind
//! [`NewsletterLogic`].

/// Subscription logic consumed by the newsletter view
pub trait NewsletterLogic {
    fn email(&self) -> String;
    fn set_email(&self, email: String);
    fn is_submitting(&self) -> bool;
    fn success(&self) -> bool;
    fn error(&self) -> Option<String>;
    fn handle_subscribe(&self);
}

/// Which face of the newsletter section is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsletterView {
    Form,
    Success,
}

impl NewsletterView {
    /// Selected by `success` alone, whatever the other fields say
    pub fn for_logic<L: NewsletterLogic + ?Sized>(logic: &L) -> Self {
        if logic.success() {
            NewsletterView::Success
        } else {
            NewsletterView::Form
        }
    }
}

/// Submit button label for the current submitting state
pub fn submit_label(is_submitting: bool) -> &'static str {
    if is_submitting {
        "Subscribing..."
    } else {
        "Subscribe"
    }
}

/// Error text worth showing: present and non-empty
pub fn visible_error(error: Option<String>) -> Option<String> {
    error.filter(|e| !e.trim().is_empty())
}

/// A form submission event whose default browser handling can be suppressed
pub trait FormSubmission {
    fn prevent_default(&self);
}

/// Handle a newsletter form submission.
///
/// The default full-page submission is always suppressed before the logic
/// object is asked to subscribe.
pub fn submit_newsletter<E, L>(event: &E, logic: &L)
where
    E: FormSubmission + ?Sized,
    L: NewsletterLogic + ?Sized,
{
    event.prevent_default();
    logic.handle_subscribe();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeLogic {
        email: RefCell<String>,
        submitting: Cell<bool>,
        success: Cell<bool>,
        error: RefCell<Option<String>>,
        subscribe_calls: Cell<u32>,
    }

    impl NewsletterLogic for FakeLogic {
        fn email(&self) -> String {
            self.email.borrow().clone()
        }
        fn set_email(&self, email: String) {
            *self.email.borrow_mut() = email;
        }
        fn is_submitting(&self) -> bool {
            self.submitting.get()
        }
        fn success(&self) -> bool {
            self.success.get()
        }
        fn error(&self) -> Option<String> {
            self.error.borrow().clone()
        }
        fn handle_subscribe(&self) {
            self.subscribe_calls.set(self.subscribe_calls.get() + 1);
        }
    }

    #[derive(Default)]
    struct FakeSubmit {
        prevented: Cell<u32>,
    }

    impl FormSubmission for FakeSubmit {
        fn prevent_default(&self) {
            self.prevented.set(self.prevented.get() + 1);
        }
    }

    #[test]
    fn test_view_follows_success_only() {
        let logic = FakeLogic::default();
        assert_eq!(NewsletterView::for_logic(&logic), NewsletterView::Form);

        logic.submitting.set(true);
        *logic.error.borrow_mut() = Some("boom".to_string());
        assert_eq!(NewsletterView::for_logic(&logic), NewsletterView::Form);

        logic.success.set(true);
        assert_eq!(NewsletterView::for_logic(&logic), NewsletterView::Success);

        logic.submitting.set(false);
        *logic.error.borrow_mut() = None;
        assert_eq!(NewsletterView::for_logic(&logic), NewsletterView::Success);
    }

    #[test]
    fn test_submit_prevents_default_and_subscribes() {
        let logic = FakeLogic::default();
        let event = FakeSubmit::default();

        submit_newsletter(&event, &logic);

        assert_eq!(event.prevented.get(), 1);
        assert_eq!(logic.subscribe_calls.get(), 1);
    }

    #[test]
    fn test_submit_prevents_default_even_while_submitting() {
        let logic = FakeLogic::default();
        logic.submitting.set(true);
        let event = FakeSubmit::default();

        submit_newsletter(&event, &logic);

        assert_eq!(event.prevented.get(), 1);
    }

    #[test]
    fn test_visible_error() {
        assert_eq!(visible_error(None), None);
        assert_eq!(visible_error(Some(String::new())), None);
        assert_eq!(visible_error(Some("   ".to_string())), None);
        assert_eq!(
            visible_error(Some("Invalid email".to_string())),
            Some("Invalid email".to_string())
        );
    }

    #[test]
    fn test_submit_label() {
        assert_eq!(submit_label(true), "Subscribing...");
        assert_eq!(submit_label(false), "Subscribe");
    }
}
