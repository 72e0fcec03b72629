use crate::error::DeckResult;
use crate::render::Fragment;

/// One milestone row of an anniversary evolution sequence.
///
/// `active` selects the "current era" visual variant. Whether exactly one
/// card in a sequence is active is the calling page's concern; the card
/// renders whatever it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineCard {
    pub year: String,
    pub title: String,
    pub stage: String,
    pub description: String,
    pub active: bool,
}

impl TimelineCard {
    #[must_use]
    pub fn new(
        year: impl Into<String>,
        title: impl Into<String>,
        stage: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            year: year.into(),
            title: title.into(),
            stage: stage.into(),
            description: description.into(),
            active: false,
        }
    }

    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub(crate) fn fragment(&self) -> DeckResult<Fragment> {
        let mut card = Fragment::element("div").with_class("timeline-card");
        if self.active {
            card = card.with_class("current");
        }

        let body = Fragment::element("div")
            .with_class("timeline-body")
            .with_child(
                Fragment::element("div")
                    .with_class("timeline-title")
                    .with_text(self.title.as_str())
                    .build(),
            )
            .with_child(
                Fragment::element("span")
                    .with_class("timeline-stage")
                    .with_text(self.stage.as_str())
                    .build(),
            )
            .with_child(
                Fragment::element("p")
                    .with_class("timeline-desc")
                    .with_text(self.description.as_str())
                    .build(),
            )
            .build();

        Ok(card
            .with_child(
                Fragment::element("span")
                    .with_class("timeline-year")
                    .with_text(self.year.as_str())
                    .build(),
            )
            .with_child(body)
            .build())
    }
}
