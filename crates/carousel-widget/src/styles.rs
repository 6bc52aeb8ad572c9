//! The carousel stylesheet and its one-time injection.

use std::fmt::Write as _;

use crate::dom::{Element, Page};
use crate::layout::Breakpoint;

/// Id of the injected `<style>` element; its presence marks injection done.
pub const STYLESHEET_ID: &str = "product-carousel-styles";

const BRAND_ORANGE: &str = "#f28e00";
const DISCOUNT_GREEN: &str = "#00a365";
const MUTED_GREY: &str = "#7d7d7d";

/// Appends the carousel stylesheet to the page head unless it is already
/// present. Returns `true` if a stylesheet was inserted.
pub fn inject_styles(page: &mut Page) -> bool {
    if page.get_element_by_id(STYLESHEET_ID).is_some() {
        return false;
    }
    page.head_mut().append_child(
        Element::new("style")
            .with_id(STYLESHEET_ID)
            .with_text(&stylesheet()),
    );
    true
}

/// Full CSS for the widget: base rules sized for wide viewports, then one
/// media block per narrower breakpoint.
#[must_use]
pub fn stylesheet() -> String {
    let mut css = base_rules();
    for breakpoint in &Breakpoint::ALL[1..] {
        css.push_str(&media_block(*breakpoint));
    }
    css
}

fn base_rules() -> String {
    let wide = Breakpoint::Wide;
    let (card_width, card_height) = wide.card_size();
    let Tuning {
        button_size,
        button_font,
        ..
    } = tuning(wide);
    let mut css = String::new();

    let _ = write!(
        css,
        "
.carousel-main-wrapper {{
    margin: 20px auto;
    width: fit-content;
    max-width: min(1200px, calc(100vw - 40px));
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 15px;
}}
.banner-container {{
    background-color: #fff;
    border-radius: 35px;
    overflow: hidden;
    box-shadow: 0 2px 8px rgba(0,0,0,0.1);
    width: fit-content;
    max-width: 100%;
}}
.banner-title {{
    font-size: 24px;
    font-family: 'Quicksand', sans-serif;
    font-weight: 700;
    color: {BRAND_ORANGE};
    margin: 0;
    padding: 20px 30px;
    background-color: #fff6eb;
    border-top-left-radius: 35px;
    border-top-right-radius: 35px;
}}
.carousel-container {{
    padding: 20px 25px 25px 25px;
    overflow: hidden;
}}
.carousel-scrollable {{
    display: flex;
    gap: {gap}px;
    overflow-x: auto;
    scroll-behavior: smooth;
    scrollbar-width: none;
    -ms-overflow-style: none;
    padding: 15px 0 20px 0;
    width: {strip};
    max-width: 100%;
}}
.carousel-scrollable::-webkit-scrollbar {{
    display: none;
}}
.carousel-button {{
    background-color: {BRAND_ORANGE};
    color: white;
    border: none;
    width: {button_size}px;
    height: {button_size}px;
    border-radius: 50%;
    cursor: pointer;
    font-size: {button_font}px;
    font-weight: bold;
    display: flex;
    align-items: center;
    justify-content: center;
    box-shadow: 0 2px 6px rgba(0,0,0,0.15);
    transition: all 0.3s ease;
    flex-shrink: 0;
}}
.carousel-button:hover {{
    opacity: 1;
    transform: scale(1.05);
}}
.product-card {{
    flex: 0 0 auto;
    width: {card_width}px;
    height: {card_height}px;
    background-color: #fff;
    border-radius: 8px;
    border: 1px solid #e5e5e5;
    position: relative;
    cursor: pointer;
    overflow: visible;
    margin: 8px 0;
    display: flex;
    flex-direction: column;
    transition: all 0.3s ease;
}}
.product-card:hover {{
    border-color: {BRAND_ORANGE};
}}
.product-badges {{
    position: absolute;
    top: 10px;
    left: 10px;
    right: 10px;
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    z-index: 5;
    gap: 5px;
}}
.badge-group {{
    display: flex;
    flex-direction: column;
    gap: 5px;
}}
.badge {{
    width: 50px;
    height: 50px;
    object-fit: contain;
    display: block;
}}
.favorite-button {{
    background-color: rgba(255,255,255,0.95);
    border: none;
    width: 36px;
    height: 36px;
    border-radius: 50%;
    cursor: pointer;
    display: flex;
    align-items: center;
    justify-content: center;
    transition: all 0.3s ease;
    box-shadow: 0 2px 8px rgba(0,0,0,0.1);
}}
.favorite-button svg {{
    width: 20px;
    height: 20px;
    fill: none;
    stroke: {BRAND_ORANGE};
    stroke-width: 2.5;
}}
.favorite-button.filled svg {{
    fill: {BRAND_ORANGE};
}}
.product-image {{
    width: 100%;
    height: 160px;
    object-fit: cover;
    border-radius: 8px 8px 0 0;
}}
.product-details {{
    padding: 12px 12px 18px 12px;
    display: flex;
    flex-direction: column;
    flex-grow: 1;
    justify-content: space-between;
}}
.product-title {{
    font-size: 11px;
    color: {MUTED_GREY};
    margin: 0 0 8px 0;
    line-height: 1.3;
    height: 42px;
    overflow: hidden;
}}
.product-brand {{
    font-weight: 700;
    color: #333;
}}
.product-rating {{
    display: flex;
    align-items: center;
    gap: 5px;
    margin-bottom: 8px;
}}
.stars {{
    color: #ffc107;
    font-size: 14px;
}}
.review-count {{
    font-size: 11px;
    color: #999;
}}
.discount-area {{
    min-height: 24px;
    display: flex;
    align-items: center;
    gap: 8px;
    margin-bottom: 4px;
}}
.original-price {{
    font-size: 12px;
    color: #999;
    text-decoration: line-through;
}}
.discount-percent {{
    background-color: {DISCOUNT_GREEN};
    color: white;
    font-size: 12px;
    font-weight: 700;
    padding: 3px 6px;
    border-radius: 3px;
}}
.current-price {{
    font-size: 20px;
    font-weight: 700;
    margin-top: 4px;
}}
.current-price.has-discount {{
    color: {DISCOUNT_GREEN};
}}
.current-price.no-discount {{
    color: {MUTED_GREY};
}}
.promotion-area {{
    min-height: 30px;
    display: flex;
    align-items: flex-start;
    margin-top: auto;
}}
.product-promotion {{
    font-size: 10px;
    color: {DISCOUNT_GREEN};
    background-color: rgba(0, 163, 101, 0.1);
    padding: 4px 8px;
    border-radius: 12px;
    margin: 0;
}}
.add-to-cart-button {{
    width: 100%;
    background-color: #fff7ec;
    color: {BRAND_ORANGE};
    border: none;
    padding: 12px;
    border-radius: 20px;
    font-weight: 700;
    font-size: 13px;
    cursor: pointer;
    transition: all 0.3s ease;
    margin-top: 15px;
}}
.add-to-cart-button:hover {{
    background-color: {BRAND_ORANGE};
    color: white;
}}
",
        gap = wide.gap(),
        strip = wide.strip_width_css(),
    );
    css
}

/// Per-breakpoint overrides beyond card and strip geometry.
struct Tuning {
    button_size: u32,
    button_font: u32,
    /// Banner title `(font size, padding)`.
    title: Option<(u32, &'static str)>,
    image_height: Option<u32>,
    badge_size: Option<u32>,
    price_font: Option<u32>,
}

fn tuning(breakpoint: Breakpoint) -> Tuning {
    match breakpoint {
        Breakpoint::Wide => Tuning {
            button_size: 36,
            button_font: 18,
            title: None,
            image_height: None,
            badge_size: None,
            price_font: None,
        },
        Breakpoint::Desktop => Tuning {
            button_size: 32,
            button_font: 16,
            title: None,
            image_height: None,
            badge_size: None,
            price_font: None,
        },
        Breakpoint::Tablet => Tuning {
            button_size: 30,
            button_font: 16,
            title: Some((20, "18px 25px")),
            image_height: Some(140),
            badge_size: Some(45),
            price_font: Some(16),
        },
        Breakpoint::Mobile => Tuning {
            button_size: 28,
            button_font: 14,
            title: Some((18, "15px 18px")),
            image_height: Some(120),
            badge_size: Some(40),
            price_font: Some(15),
        },
    }
}

fn media_block(breakpoint: Breakpoint) -> String {
    let Some(max_width) = breakpoint.max_width() else {
        return String::new();
    };
    let (card_width, card_height) = breakpoint.card_size();
    let Tuning {
        button_size,
        button_font,
        title,
        image_height,
        badge_size,
        price_font,
    } = tuning(breakpoint);

    let mut css = String::new();
    let _ = writeln!(css, "@media (max-width: {max_width}px) {{");
    let _ = writeln!(
        css,
        "    .carousel-scrollable {{ gap: {gap}px; width: {strip}; }}",
        gap = breakpoint.gap(),
        strip = breakpoint.strip_width_css(),
    );
    let _ = writeln!(
        css,
        "    .product-card {{ width: {card_width}px; height: {card_height}px; }}"
    );
    let _ = writeln!(
        css,
        "    .carousel-button {{ width: {button_size}px; height: {button_size}px; font-size: {button_font}px; }}"
    );
    if let Some((font_size, padding)) = title {
        let _ = writeln!(
            css,
            "    .banner-title {{ font-size: {font_size}px; padding: {padding}; }}"
        );
    }
    if let Some(height) = image_height {
        let _ = writeln!(css, "    .product-image {{ height: {height}px; }}");
    }
    if let Some(size) = badge_size {
        let _ = writeln!(css, "    .badge {{ width: {size}px; height: {size}px; }}");
    }
    if let Some(size) = price_font {
        let _ = writeln!(css, "    .current-price {{ font-size: {size}px; }}");
    }
    if breakpoint == Breakpoint::Mobile {
        let _ = writeln!(css, "    .favorite-button {{ width: 32px; height: 32px; }}");
    }
    css.push_str("}\n");
    css
}
