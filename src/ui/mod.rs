pub mod brand_header;
pub mod cart;
pub mod common;
pub mod icon;
pub mod navigation;
pub mod newsletter;
pub mod pages;
pub mod template;

pub use brand_header::BrandHeader;
pub use cart::{CartContext, provide_cart_context, use_cart_context};
pub use icon::{Icon, icons};
pub use navigation::{RouterNavigator, use_router_navigator};
pub use newsletter::{
    NewsletterCapture, NewsletterContext, provide_newsletter_context, use_newsletter_context,
};
pub use pages::{CartPage, IndexPage, NotFoundPage, ProductLandingView};
pub use template::EcommerceTemplate;
