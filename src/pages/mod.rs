//! The built-in pages of the vision deck and the registry that orders
//! them.
//!
//! The page set is a closed enum: adding a page means adding a variant,
//! and the compiler walks every dispatch site. Pages never call each
//! other; each render function composes components and charts onto the
//! surface it is handed and returns.

pub mod concept;
pub mod principles;
pub mod statistics;
pub mod survey;
pub mod vision_evolution;
pub mod workshop;

use indexmap::IndexMap;
use tracing::debug;

use crate::components::{ComponentSpec, layout, render_component};
use crate::error::{DeckError, DeckResult};
use crate::render::{Fragment, Surface};

/// Identity of one navigable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    VisionEvolution,
    Concept,
    Principles,
    Workshop,
    Survey,
    Statistics,
}

impl Page {
    /// Every page, in the standard navigation order.
    pub const ALL: [Page; 6] = [
        Page::VisionEvolution,
        Page::Concept,
        Page::Principles,
        Page::Workshop,
        Page::Survey,
        Page::Statistics,
    ];

    /// Stable identifier used in errors, logs, and export file names.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Page::VisionEvolution => "vision-evolution",
            Page::Concept => "concept",
            Page::Principles => "principles",
            Page::Workshop => "workshop",
            Page::Survey => "survey",
            Page::Statistics => "statistics",
        }
    }

    /// Navigation title and icon used by [`PageRegistry::standard`].
    #[must_use]
    pub fn standard_meta(self) -> PageMeta {
        match self {
            Page::VisionEvolution => PageMeta::new("ビジョンの変遷", "📊"),
            Page::Concept => PageMeta::new("セセラギズム", "🌊"),
            Page::Principles => PageMeta::new("行動原則", "💧"),
            Page::Workshop => PageMeta::new("ワークショップ分析", "🔍"),
            Page::Survey => PageMeta::new("アンケート分析", "📋"),
            Page::Statistics => PageMeta::new("三島市統計データ", "📈"),
        }
    }

    /// Renders this page onto `surface`.
    ///
    /// Exactly one page renders per navigation event; the caller decides
    /// which. Fragments and charts arrive on the surface in display
    /// order.
    pub fn render(self, surface: &mut dyn Surface) -> DeckResult<()> {
        debug!(page = self.slug(), "rendering page");
        match self {
            Page::VisionEvolution => vision_evolution::render(surface),
            Page::Concept => concept::render(surface),
            Page::Principles => principles::render(surface),
            Page::Workshop => workshop::render(surface),
            Page::Survey => survey::render(surface),
            Page::Statistics => statistics::render(surface),
        }
    }
}

/// Navigation metadata for one registered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub icon: String,
}

impl PageMeta {
    #[must_use]
    pub fn new(title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
        }
    }
}

/// Ordered set of navigable pages.
///
/// Insertion order is menu order and nothing more; it carries no render
/// semantics. Re-registering a page replaces its metadata without moving
/// it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageRegistry {
    entries: IndexMap<Page, PageMeta>,
}

impl PageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The full deck in its standard order.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for page in Page::ALL {
            registry.register(page, page.standard_meta());
        }
        registry
    }

    pub fn register(&mut self, page: Page, meta: PageMeta) {
        self.entries.insert(page, meta);
    }

    /// The initially selected page: the first one registered.
    #[must_use]
    pub fn first(&self) -> Option<Page> {
        self.entries.keys().next().copied()
    }

    #[must_use]
    pub fn contains(&self, page: Page) -> bool {
        self.entries.contains_key(&page)
    }

    #[must_use]
    pub fn meta(&self, page: Page) -> Option<&PageMeta> {
        self.entries.get(&page)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Page, &PageMeta)> + '_ {
        self.entries.iter().map(|(page, meta)| (*page, meta))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn ensure_registered(&self, page: Page) -> DeckResult<()> {
        if !self.contains(page) {
            return Err(DeckError::PageNotRegistered { page: page.slug() });
        }
        Ok(())
    }
}

/// Renders one component spec and emits it.
pub(crate) fn emit(surface: &mut dyn Surface, spec: &ComponentSpec) -> DeckResult<()> {
    surface.fragment(&render_component(spec)?)
}

/// Renders a run of component specs into one equal-width grid.
pub(crate) fn grid_of(columns: usize, specs: &[ComponentSpec]) -> DeckResult<Fragment> {
    let cells = specs
        .iter()
        .map(render_component)
        .collect::<DeckResult<Vec<_>>>()?;
    Ok(layout::grid(columns, cells))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_keeps_navigation_order() {
        let registry = PageRegistry::standard();
        let order: Vec<Page> = registry.iter().map(|(page, _)| page).collect();
        assert_eq!(order, Page::ALL);
        assert_eq!(registry.first(), Some(Page::VisionEvolution));
    }

    #[test]
    fn reregistering_updates_meta_in_place() {
        let mut registry = PageRegistry::standard();
        registry.register(Page::Concept, PageMeta::new("改訂版", "🌀"));

        let order: Vec<Page> = registry.iter().map(|(page, _)| page).collect();
        assert_eq!(order, Page::ALL);
        assert_eq!(
            registry.meta(Page::Concept).map(|meta| meta.title.as_str()),
            Some("改訂版")
        );
    }

    #[test]
    fn slugs_are_unique() {
        let mut slugs: Vec<&str> = Page::ALL.iter().map(|page| page.slug()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), Page::ALL.len());
    }
}
