//! Exports every standard page as a standalone HTML document.
//!
//! Usage: `export_deck [output-dir]`, defaulting to `deck-out/`.

use std::env;
use std::fs;
use std::path::PathBuf;

use deck_rs::pages::PageRegistry;
use deck_rs::render::HtmlSurface;
use deck_rs::{Deck, DeckConfig};

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = deck_rs::telemetry::init_default_tracing();

    let out_dir = env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("deck-out"), PathBuf::from);
    fs::create_dir_all(&out_dir)
        .map_err(|err| format!("failed to create `{}`: {err}", out_dir.display()))?;

    let config = DeckConfig::default();
    for (page, meta) in PageRegistry::standard().iter() {
        // Each export is a standalone document, so mount the chrome into a
        // fresh deck per page.
        let mut deck = Deck::new(HtmlSurface::new(), config.clone());
        deck.mount()
            .map_err(|err| format!("failed to mount deck: {err}"))?;
        deck.select(page)
            .map_err(|err| format!("failed to select `{}`: {err}", page.slug()))?;
        deck.render()
            .map_err(|err| format!("failed to render `{}`: {err}", page.slug()))?;

        let title = format!("{} | {}", meta.title, config.brand_title);
        let document = deck.into_surface().into_document(&title);
        let path = out_dir.join(format!("{}.html", page.slug()));
        fs::write(&path, document)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
