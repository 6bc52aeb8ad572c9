//! `favorites` command handlers.

use anyhow::Context;
use carousel_core::AppConfig;
use carousel_store::{CarouselStorage, FileStore, KeyValueStore};
use clap::Subcommand;

/// Sub-commands available under `favorites`.
#[derive(Debug, Subcommand)]
pub enum FavoritesCommands {
    /// List favorited product ids in insertion order
    List,
    /// Add the id if absent, remove it if present
    Toggle { id: i64 },
    /// Remove all favorites
    Clear,
}

pub(crate) fn run(config: &AppConfig, command: &FavoritesCommands) -> anyhow::Result<()> {
    let store = FileStore::open(&config.storage_path)
        .with_context(|| format!("opening local storage at {}", config.storage_path.display()))?;
    let mut storage = CarouselStorage::from_config(store, config);
    print!("{}", execute(&mut storage, command)?);
    Ok(())
}

/// Applies `command` to `storage` and returns the text to print.
pub(crate) fn execute<S: KeyValueStore>(
    storage: &mut CarouselStorage<S>,
    command: &FavoritesCommands,
) -> anyhow::Result<String> {
    let output = match command {
        FavoritesCommands::List => {
            let favorites = storage.favorites();
            if favorites.is_empty() {
                "No favorites.\n".to_owned()
            } else {
                favorites.ids().iter().map(|id| format!("{id}\n")).collect()
            }
        }
        FavoritesCommands::Toggle { id } => {
            let filled = storage.toggle_favorite(*id)?;
            tracing::info!(product_id = *id, filled, "favorite toggled");
            let state = if filled { "favorited" } else { "unfavorited" };
            format!("Product {id} {state}.\n")
        }
        FavoritesCommands::Clear => {
            storage.clear_favorites()?;
            "Favorites cleared.\n".to_owned()
        }
    };
    Ok(output)
}
