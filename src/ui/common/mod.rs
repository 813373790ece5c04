//! Common reusable UI components
//!
//! Small building blocks shared by the landing page, the newsletter section
//! and the cart page.

pub mod button;
pub mod form;
pub mod message;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use form::EmailField;
pub use message::ErrorMessage;
