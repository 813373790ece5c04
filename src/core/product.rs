//! Product model and target product resolution
//!
//! The landing page sells exactly one item. It is picked out of whatever
//! product list the page receives by matching the brand marker in the title
//! or the brand slug in the product slug.

use serde::{Deserialize, Serialize};

/// Brand marker searched for in product titles
pub const BRAND_MARKER: &str = "BIODANCE";

/// Brand slug searched for in product slugs
pub const BRAND_SLUG: &str = "biodance";

/// A catalog product, owned by the product source and read-only here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub price: f64,
    #[serde(default)]
    pub compare_at_price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        slug: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: slug.into(),
            price,
            compare_at_price: None,
            image: None,
        }
    }

    /// Builder: set the original (strike-through) price
    pub fn with_compare_at_price(mut self, compare_at_price: f64) -> Self {
        self.compare_at_price = Some(compare_at_price);
        self
    }

    /// Builder: set the product image path
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Whether this product is the one the landing page is built to sell
    pub fn is_brand_product(&self) -> bool {
        self.title.contains(BRAND_MARKER) || self.slug.contains(BRAND_SLUG)
    }

    /// Discount against the compare-at price, rounded to a whole percent.
    ///
    /// `None` unless the compare-at price is positive and above the price.
    pub fn discount_percent(&self) -> Option<u32> {
        let compare_at = self.compare_at_price?;
        if compare_at <= 0.0 || compare_at <= self.price {
            return None;
        }
        let percent = (compare_at - self.price) / compare_at * 100.0;
        Some(percent.round() as u32)
    }

    /// Formatted current price, e.g. `$23.99`
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }

    /// Formatted compare-at price, if any
    pub fn display_compare_at_price(&self) -> Option<String> {
        self.compare_at_price.map(format_price)
    }
}

/// Format an amount as dollars with two decimals
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Anything that can hand the landing page its current product list
pub trait ProductSource {
    fn filtered_products(&self) -> Vec<Product>;
}

impl ProductSource for Vec<Product> {
    fn filtered_products(&self) -> Vec<Product> {
        self.clone()
    }
}

impl ProductSource for [Product] {
    fn filtered_products(&self) -> Vec<Product> {
        self.to_vec()
    }
}

/// First brand product in the list, if any
pub fn resolve_target_product(products: &[Product]) -> Option<&Product> {
    products.iter().find(|p| p.is_brand_product())
}

/// Resolve the target product from a product source
pub fn target_product_from<S: ProductSource + ?Sized>(source: &S) -> Option<Product> {
    resolve_target_product(&source.filtered_products()).cloned()
}

/// Price-dependent display values for the target product.
///
/// Built only from a present product, so every price element on the page
/// disappears together when there is no target.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceDisplay {
    pub price: String,
    pub compare_at: Option<String>,
    pub discount_label: Option<String>,
}

impl PriceDisplay {
    pub fn for_target(target: Option<&Product>) -> Option<Self> {
        let product = target?;
        Some(Self {
            price: product.display_price(),
            compare_at: product.display_compare_at_price(),
            discount_label: product.discount_percent().map(|p| format!("{}% OFF", p)),
        })
    }
}

/// Label for the sticky mobile call to action
pub fn sticky_cta_label(target: Option<&Product>) -> String {
    match PriceDisplay::for_target(target) {
        Some(display) => format!("GET YOURS NOW - {}", display.price),
        None => "GET YOURS NOW".to_string(),
    }
}
