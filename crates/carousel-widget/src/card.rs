//! Product card view-model.
//!
//! [`render_card`] is pure apart from the injected [`RandomSource`]: it maps
//! a product and the current favorites to a [`CardView`] without touching
//! the page. [`crate::materialize`] turns the view into page elements.

use carousel_core::{calculate_discount, format_price, Favorites, Product};

use crate::random::RandomSource;

pub const BESTSELLER_PROBABILITY: f64 = 0.4;
pub const FREE_SHIPPING_PROBABILITY: f64 = 0.3;
pub const PROMOTION_PROBABILITY: f64 = 0.4;
pub const MAX_BADGES: usize = 2;
pub const MAX_REVIEW_COUNT: u32 = 500;

pub const RATING_STARS: &str = "★★★★☆";
pub const PROMOTION_TEXT: &str = "Farklı ürünlerde 3 al 2 öde";
pub const ADD_TO_CART_LABEL: &str = "Sepete Ekle";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Bestseller,
    FreeShipping,
}

impl Badge {
    #[must_use]
    pub fn image_url(self) -> &'static str {
        match self {
            Badge::Bestseller => "https://www.e-bebek.com/assets/images/cok-satan@2x.png",
            Badge::FreeShipping => "https://www.e-bebek.com/assets/images/kargo-bedava@2x.png",
        }
    }

    #[must_use]
    pub fn alt(self) -> &'static str {
        match self {
            Badge::Bestseller => "Çok Satan",
            Badge::FreeShipping => "Kargo Bedava",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceView {
    /// Formatted current price, e.g. `"1.234 TL"`.
    pub current: String,
    /// Formatted original price; only set when there is a discount.
    pub original: Option<String>,
    /// Whole discount percentage; `0` means no discount block.
    pub discount_percent: u32,
}

impl PriceView {
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.discount_percent > 0
    }

    /// `"%33"` style label, or `None` without a discount.
    #[must_use]
    pub fn discount_label(&self) -> Option<String> {
        self.has_discount()
            .then(|| format!("%{}", self.discount_percent))
    }

    /// Colour class of the current price.
    #[must_use]
    pub fn current_price_class(&self) -> &'static str {
        if self.has_discount() {
            "has-discount"
        } else {
            "no-discount"
        }
    }
}

/// Everything a product card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub product_id: i64,
    pub badges: Vec<Badge>,
    pub favorite: bool,
    pub image_url: String,
    pub brand: String,
    pub name: String,
    pub stars: &'static str,
    /// Cosmetic review count in `1..=500`, re-rolled on every render.
    pub review_count: u32,
    pub price: PriceView,
    pub promotion: Option<&'static str>,
    pub cta_label: &'static str,
}

/// Builds the card view for `product`.
///
/// Draws from `random` in a fixed order: bestseller badge, free-shipping
/// badge (only while under [`MAX_BADGES`]), review count, promotion line.
pub fn render_card<R: RandomSource + ?Sized>(
    product: &Product,
    favorites: &Favorites,
    random: &mut R,
) -> CardView {
    let discount_percent = calculate_discount(product.original_price, product.price);
    let price = PriceView {
        current: format_price(product.price),
        original: if discount_percent > 0 {
            product.original_price.map(format_price)
        } else {
            None
        },
        discount_percent,
    };

    let mut badges = Vec::with_capacity(MAX_BADGES);
    if random.chance(BESTSELLER_PROBABILITY) {
        badges.push(Badge::Bestseller);
    }
    if badges.len() < MAX_BADGES && random.chance(FREE_SHIPPING_PROBABILITY) {
        badges.push(Badge::FreeShipping);
    }
    let review_count = random.int_inclusive(1, MAX_REVIEW_COUNT);
    let promotion = random
        .chance(PROMOTION_PROBABILITY)
        .then_some(PROMOTION_TEXT);

    CardView {
        product_id: product.id,
        badges,
        favorite: favorites.contains(product.id),
        image_url: product.img.clone(),
        brand: product.brand.clone(),
        name: product.name.clone(),
        stars: RATING_STARS,
        review_count,
        price,
        promotion,
        cta_label: ADD_TO_CART_LABEL,
    }
}

#[cfg(test)]
#[path = "card_test.rs"]
mod tests;
