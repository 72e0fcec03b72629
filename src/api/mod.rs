//! Public entry point: [`Deck`] owns a surface, a page registry and a
//! theme, and renders one selected page at a time.

use tracing::debug;

use crate::error::{DeckError, DeckResult};
use crate::pages::{Page, PageRegistry};
use crate::render::{Fragment, Surface};
use crate::theme::Theme;

/// Deck-wide presentation settings: the theme plus the brand strings shown
/// in the side panel.
#[derive(Debug, Clone)]
pub struct DeckConfig {
    pub theme: Theme,
    pub brand_title: String,
    pub brand_tagline: String,
    pub footer: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            brand_title: "セセラギズム".to_owned(),
            brand_tagline: "三島商工会議所 80周年ビジョン".to_owned(),
            footer: "湧き上がれ、鳴り響け\n三島商工会議所 創立80周年".to_owned(),
        }
    }
}

impl DeckConfig {
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_brand_title(mut self, title: impl Into<String>) -> Self {
        self.brand_title = title.into();
        self
    }

    #[must_use]
    pub fn with_brand_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.brand_tagline = tagline.into();
        self
    }

    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }
}

/// A vision deck bound to one output surface.
///
/// The deck owns its surface for its whole life. [`Deck::mount`] writes the
/// chrome (stylesheet and side panel) once, [`Deck::select`] picks the page,
/// and [`Deck::render`] writes that page's content. [`Deck::into_surface`]
/// hands the surface back when composition is finished.
pub struct Deck<S: Surface> {
    surface: S,
    config: DeckConfig,
    registry: PageRegistry,
    selected: Page,
    mounted: bool,
}

impl<S: Surface> Deck<S> {
    /// Creates a deck over the standard six-page registry, with the first
    /// page selected.
    pub fn new(surface: S, config: DeckConfig) -> Self {
        let registry = PageRegistry::standard();
        // The standard registry is never empty, so first() always holds.
        let selected = registry.first().unwrap_or(Page::VisionEvolution);
        Self {
            surface,
            config,
            registry,
            selected,
            mounted: false,
        }
    }

    /// Creates a deck over a caller-picked subset of pages.
    pub fn with_pages(surface: S, config: DeckConfig, registry: PageRegistry) -> DeckResult<Self> {
        let Some(selected) = registry.first() else {
            return Err(DeckError::InvalidData(
                "a deck needs at least one registered page".to_owned(),
            ));
        };
        Ok(Self {
            surface,
            config,
            registry,
            selected,
            mounted: false,
        })
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn selected(&self) -> Page {
        self.selected
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Writes the stylesheet and side panel to the surface. Mounting twice
    /// is a no-op, so page renders never duplicate the chrome.
    pub fn mount(&mut self) -> DeckResult<()> {
        if self.mounted {
            debug!("deck already mounted, skipping chrome");
            return Ok(());
        }

        let stylesheet = Fragment::element("style")
            .with_child(Fragment::raw(self.config.theme.stylesheet()))
            .build();
        self.surface.fragment(&stylesheet)?;
        self.surface.fragment(&self.side_panel())?;

        self.mounted = true;
        debug!(pages = self.registry.len(), "deck mounted");
        Ok(())
    }

    /// Switches the page that [`Deck::render`] will draw.
    pub fn select(&mut self, page: Page) -> DeckResult<()> {
        self.registry.ensure_registered(page)?;
        self.selected = page;
        debug!(page = page.slug(), "page selected");
        Ok(())
    }

    /// Renders the selected page onto the surface. The deck must be mounted
    /// first.
    pub fn render(&mut self) -> DeckResult<()> {
        if !self.mounted {
            return Err(DeckError::NotMounted);
        }
        self.selected.render(&mut self.surface)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consumes the deck and returns the surface with everything written
    /// so far.
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn side_panel(&self) -> Fragment {
        let mut nav = Fragment::element("ul").with_class("side-panel-nav");
        for (page, meta) in self.registry.iter() {
            nav = nav.with_child(
                Fragment::element("li").with_child(
                    Fragment::element("a")
                        .with_attr("href", format!("{}.html", page.slug()))
                        .with_text(format!("{} {}", meta.icon, meta.title))
                        .build(),
                ),
            );
        }

        Fragment::element("aside")
            .with_class("side-panel")
            .with_child(
                Fragment::element("div")
                    .with_class("side-panel-brand")
                    .with_text(&self.config.brand_title)
                    .build(),
            )
            .with_child(
                Fragment::element("div")
                    .with_class("side-panel-tagline")
                    .with_text(&self.config.brand_tagline)
                    .build(),
            )
            .with_child(Fragment::element("nav").with_child(nav.build()).build())
            .with_child(
                Fragment::element("div")
                    .with_class("side-panel-footer")
                    .with_text(&self.config.footer)
                    .build(),
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NullSurface;

    #[test]
    fn new_deck_selects_the_first_standard_page() {
        let deck = Deck::new(NullSurface::default(), DeckConfig::default());
        assert_eq!(deck.selected(), Page::VisionEvolution);
        assert!(!deck.is_mounted());
    }

    #[test]
    fn with_pages_rejects_an_empty_registry() {
        let result = Deck::with_pages(
            NullSurface::default(),
            DeckConfig::default(),
            PageRegistry::new(),
        );
        assert!(matches!(result, Err(DeckError::InvalidData(_))));
    }

    #[test]
    fn render_before_mount_is_an_error() {
        let mut deck = Deck::new(NullSurface::default(), DeckConfig::default());
        assert!(matches!(deck.render(), Err(DeckError::NotMounted)));
    }

    #[test]
    fn mount_is_idempotent() {
        let mut deck = Deck::new(NullSurface::default(), DeckConfig::default());
        deck.mount().expect("first mount succeeds");
        deck.mount().expect("second mount is a no-op");
        assert_eq!(deck.surface().fragments, 2);
    }

    #[test]
    fn side_panel_links_every_registered_page() {
        let deck = Deck::new(NullSurface::default(), DeckConfig::default());
        let html = deck.side_panel().to_html();
        for page in Page::ALL {
            assert!(html.contains(&format!("{}.html", page.slug())));
        }
    }
}
