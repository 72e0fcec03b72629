use crate::components::waves;
use crate::error::{DeckError, DeckResult};
use crate::render::Fragment;

/// Opening banner of a page: title, optional subtitle and description,
/// and the decorative wave band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
}

impl Hero {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            description: None,
        }
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validate(&self) -> DeckResult<()> {
        if self.title.trim().is_empty() {
            return Err(DeckError::MissingField {
                component: "hero",
                field: "title",
            });
        }
        Ok(())
    }

    pub(crate) fn fragment(&self) -> DeckResult<Fragment> {
        self.validate()?;

        let mut banner = Fragment::element("header").with_class("hero").with_child(
            Fragment::element("h1")
                .with_class("hero-title")
                .with_text(self.title.as_str())
                .build(),
        );
        if let Some(subtitle) = &self.subtitle {
            banner = banner.with_child(
                Fragment::element("p")
                    .with_class("hero-subtitle")
                    .with_text(subtitle.as_str())
                    .build(),
            );
        }
        // An absent description omits the element entirely.
        if let Some(description) = &self.description {
            banner = banner.with_child(
                Fragment::element("p")
                    .with_class("hero-description")
                    .with_text(description.as_str())
                    .build(),
            );
        }

        Ok(banner.with_child(waves::hero_wave()).build())
    }
}
