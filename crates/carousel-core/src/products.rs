use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A promotional product as served by the remote product feed.
///
/// Field names mirror the feed's JSON keys exactly; the cache stores the
/// feed body verbatim, so both sources deserialize through this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Numeric id, unique within one fetch.
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    /// Product image URL.
    #[serde(default)]
    pub img: String,
    /// Detail-page URL opened on card click. Absent or `null` disables
    /// click-through for this product.
    #[serde(default)]
    pub url: Option<String>,
    /// Current selling price.
    pub price: Decimal,
    /// Pre-discount price; `null`/absent means the product is not discounted.
    #[serde(default)]
    pub original_price: Option<Decimal>,
}

impl Product {
    /// Returns the detail URL if it is present and non-blank.
    #[must_use]
    pub fn detail_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.trim().is_empty())
    }
}

/// Finds the product with `id` in `products`.
#[must_use]
pub fn find_product(products: &[Product], id: i64) -> Option<&Product> {
    products.iter().find(|p| p.id == id)
}

/// Ordered list of favorited product ids.
///
/// Uniqueness is maintained by [`Favorites::toggle`] checking membership
/// before inserting; a hand-edited stored array may still contain
/// duplicates, and toggling such an id removes only its first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites(Vec<i64>);

impl Favorites {
    #[must_use]
    pub fn new(ids: Vec<i64>) -> Self {
        Self(ids)
    }

    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.0.contains(&id)
    }

    /// Removes `id` if present, otherwise appends it. Returns `true` when the
    /// id is a favorite after the call.
    pub fn toggle(&mut self, id: i64) -> bool {
        if let Some(index) = self.0.iter().position(|&f| f == id) {
            self.0.remove(index);
            false
        } else {
            self.0.push(id);
            true
        }
    }

    #[must_use]
    pub fn ids(&self) -> &[i64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
