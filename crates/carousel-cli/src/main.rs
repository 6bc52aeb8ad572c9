mod favorites;
mod page_load;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::favorites::FavoritesCommands;

#[derive(Debug, Parser)]
#[command(name = "carousel-cli")]
#[command(about = "Render and exercise the promo product carousel")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load a host page, inject the carousel, and print the resulting HTML
    Render {
        /// Request path of the host page
        #[arg(long, default_value = "/")]
        path: String,

        /// Viewport width in px
        #[arg(long, default_value_t = 1280)]
        viewport: u32,

        /// Seed for the cosmetic card variation (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Write the page here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Render the home page, then click a product card and report the result
    Click {
        /// Product id of the card to click
        id: i64,

        /// Click the card's favorite button instead of the card itself
        #[arg(long)]
        favorite: bool,

        /// Viewport width in px
        #[arg(long, default_value_t = 1280)]
        viewport: u32,
    },
    /// Inspect or edit the persisted favorites
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommands,
    },
    /// Print the carousel stylesheet
    Styles,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = carousel_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Render {
            path,
            viewport,
            seed,
            out,
        }) => render::run_render(&config, &path, viewport, seed, out.as_deref()).await?,
        Some(Commands::Click {
            id,
            favorite,
            viewport,
        }) => render::run_click(&config, id, favorite, viewport).await?,
        Some(Commands::Favorites { command }) => favorites::run(&config, &command)?,
        Some(Commands::Styles) => print!("{}", carousel_widget::stylesheet()),
        None => {
            render::run_render(&config, "/", 1280, None, None).await?;
        }
    }

    Ok(())
}
