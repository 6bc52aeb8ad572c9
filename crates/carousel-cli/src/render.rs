//! `render` and `click` command handlers.

use std::fmt;
use std::path::Path;

use anyhow::Context;
use carousel_core::AppConfig;
use carousel_source::{ProductClient, ProductSource};
use carousel_store::{CarouselStorage, FileStore};
use carousel_widget::{
    ClickTarget, OpenUrl, Page, RandomSource, SeededRandom, ThreadRandom, UiEvent, WidgetSettings,
};

use crate::page_load::{host_page, load_carousel, PageLoad};

/// Storage, feed, and settings for one simulated page visit.
struct Visit {
    storage: CarouselStorage<FileStore>,
    source: ProductSource,
    settings: WidgetSettings,
}

impl Visit {
    fn open(config: &AppConfig) -> anyhow::Result<Self> {
        let store = FileStore::open(&config.storage_path).with_context(|| {
            format!(
                "opening local storage at {}",
                config.storage_path.display()
            )
        })?;
        let client = ProductClient::from_config(config)?;
        Ok(Self {
            storage: CarouselStorage::from_config(store, config),
            source: ProductSource::new(client),
            settings: WidgetSettings::from_config(config),
        })
    }

    async fn load(&mut self, page: &mut Page, seed: Option<u64>) -> PageLoad {
        let mut random: Box<dyn RandomSource> = match seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(ThreadRandom),
        };
        load_carousel(
            page,
            &self.source,
            &mut self.storage,
            &self.settings,
            random.as_mut(),
        )
        .await
    }
}

pub(crate) async fn run_render(
    config: &AppConfig,
    path: &str,
    viewport: u32,
    seed: Option<u64>,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    let mut visit = Visit::open(config)?;
    let mut page = host_page(path, viewport, &config.anchor_selector);
    match visit.load(&mut page, seed).await {
        PageLoad::WrongPage => eprintln!("Not the home page; carousel not loaded."),
        PageLoad::NoProducts => eprintln!("No products available; carousel not rendered."),
        PageLoad::Mounted(_) => {}
    }

    let html = page.to_html();
    match out {
        Some(out) => {
            std::fs::write(out, html)
                .with_context(|| format!("writing page to {}", out.display()))?;
            println!("Page written to {}", out.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}

/// What a simulated click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ClickReport {
    Favorited(i64),
    Unfavorited(i64),
    /// No card for this id is on the page; nothing changed.
    NoCard(i64),
    Open(OpenUrl),
    /// The card exists but its product has no detail URL.
    NoNavigation(i64),
}

impl fmt::Display for ClickReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Favorited(id) => write!(f, "Product {id} added to favorites."),
            Self::Unfavorited(id) => write!(f, "Product {id} removed from favorites."),
            Self::NoCard(id) => write!(f, "No card for product {id}."),
            Self::Open(open) => write!(f, "Open {} in {}", open.url, open.target),
            Self::NoNavigation(id) => write!(f, "No product page for card {id}."),
        }
    }
}

pub(crate) async fn run_click(
    config: &AppConfig,
    id: i64,
    favorite: bool,
    viewport: u32,
) -> anyhow::Result<()> {
    let report = click(config, id, favorite, viewport).await?;
    println!("{report}");
    Ok(())
}

/// Renders the home page and clicks the card (or its heart) for `id`.
pub(crate) async fn click(
    config: &AppConfig,
    id: i64,
    favorite: bool,
    viewport: u32,
) -> anyhow::Result<ClickReport> {
    let mut visit = Visit::open(config)?;
    let mut page = host_page("/", viewport, &config.anchor_selector);
    let PageLoad::Mounted(mut controller) = visit.load(&mut page, None).await else {
        anyhow::bail!("carousel did not mount; nothing to click");
    };

    if favorite {
        return Ok(
            match controller.toggle_favorite(&mut page, &mut visit.storage, id) {
                Some(true) => ClickReport::Favorited(id),
                Some(false) => ClickReport::Unfavorited(id),
                None => ClickReport::NoCard(id),
            },
        );
    }

    let navigation = controller.dispatch(
        &mut page,
        &mut visit.storage,
        UiEvent::Click(ClickTarget::Card(id)),
    );
    Ok(match navigation {
        Some(open) => ClickReport::Open(open),
        None if controller.has_card(id) => ClickReport::NoNavigation(id),
        None => ClickReport::NoCard(id),
    })
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
