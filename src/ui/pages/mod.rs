//! Application pages module
//!
//! - Landing page (home)
//! - Cart page
//! - Not found page

mod cart;
mod landing;
mod not_found;

pub use cart::CartPage;
pub use landing::{IndexLogic, IndexPage, ProductLandingView};
pub use not_found::NotFoundPage;
