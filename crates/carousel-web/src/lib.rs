//! Browser host for the carousel.
//!
//! The render pipeline runs against a shadow [`carousel_widget::Page`] that
//! mirrors the parts of the live document the widget touches. [`mirror`]
//! extracts markup and view state from that shadow page; on `wasm32` the
//! `host` module copies them into the real DOM and forwards DOM events to
//! the [`carousel_widget::InteractionController`].

pub mod mirror;

#[cfg(target_arch = "wasm32")]
mod host;

pub use mirror::{
    shadow_page, stylesheet_markup, view_state, widget_markup, ButtonStyle, ViewState,
};
