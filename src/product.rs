//! Product identity tracking and product-type inference.

use serde::{Deserialize, Serialize};

/// Opaque product identity (typically the page title text).
///
/// Compared by exact string equality; used only to detect when the review
/// corpus must reset for a new product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductIdentity(String);

impl ProductIdentity {
    pub fn new(identity: impl Into<String>) -> ProductIdentity {
        ProductIdentity(identity.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductIdentity {
    fn from(identity: &str) -> ProductIdentity {
        ProductIdentity(identity.to_string())
    }
}

// Checked most-specific first so "liquid blush" wins over a bare "blush"
// title, and "lip" stays last as the loosest match.
const PRODUCT_TYPES: &[(&str, &str)] = &[
    ("liquid blush", "liquid blush"),
    ("cream blush", "cream blush"),
    ("powder blush", "powder blush"),
    ("foundation", "foundation"),
    ("concealer", "concealer"),
    ("mascara", "mascara"),
    ("lip", "lip product"),
];

/// Classify combined title/breadcrumb text into a product-type label.
///
/// Falls back to `"beauty product"` when nothing matches. Input is plain
/// text; collecting it from a page is the external scraper's job.
pub fn infer_product_type(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    for &(needle, label) in PRODUCT_TYPES {
        if lower.contains(needle) {
            return label;
        }
    }
    "beauty product"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_compares_exactly() {
        assert_eq!(ProductIdentity::from("Rose Tint"), ProductIdentity::new("Rose Tint"));
        assert_ne!(ProductIdentity::from("Rose Tint"), ProductIdentity::new("rose tint"));
    }

    #[test]
    fn specific_types_win_over_loose_ones() {
        assert_eq!(infer_product_type("Soft Pinch Liquid Blush"), "liquid blush");
        assert_eq!(infer_product_type("Cloud Paint cream blush duo"), "cream blush");
        assert_eq!(infer_product_type("Matte Lipstick > Lip"), "lip product");
    }

    #[test]
    fn unknown_titles_fall_back() {
        assert_eq!(infer_product_type("Setting Spray Ultra"), "beauty product");
        assert_eq!(infer_product_type(""), "beauty product");
    }
}
