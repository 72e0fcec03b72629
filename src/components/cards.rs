//! Fixed-shape card components: record in, fragment out.

use crate::error::DeckResult;
use crate::render::Fragment;
use crate::theme::Tone;

/// Labeled headline figure, e.g. a population count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub description: Option<String>,
    /// Overrides the value color, e.g. danger for a declining figure.
    pub value_tone: Option<Tone>,
}

impl MetricCard {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            description: None,
            value_tone: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_value_tone(mut self, tone: Tone) -> Self {
        self.value_tone = Some(tone);
        self
    }

    pub(crate) fn fragment(&self) -> DeckResult<Fragment> {
        let mut value = Fragment::element("div")
            .with_class("metric-value")
            .with_text(self.value.as_str());
        if let Some(tone) = self.value_tone {
            value = value.with_style(format!("color: {};", tone.css_var()));
        }

        let mut card = Fragment::element("div")
            .with_class("metric-card")
            .with_child(
                Fragment::element("div")
                    .with_class("metric-label")
                    .with_text(self.label.as_str())
                    .build(),
            )
            .with_child(value.build());
        if let Some(description) = &self.description {
            card = card.with_child(
                Fragment::element("div")
                    .with_class("metric-desc")
                    .with_text(description.as_str())
                    .build(),
            );
        }

        Ok(card.build())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConceptLayout {
    /// Accent stripe on the left edge, left-aligned text.
    LeftAccent,
    /// Accent stripe on the top edge, centered text.
    TopAccent,
}

/// Short explanatory card with an accent stripe and optional icon glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptCard {
    pub title: String,
    pub body: String,
    pub icon: Option<String>,
    pub accent: Tone,
    pub layout: ConceptLayout,
}

impl ConceptCard {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            icon: None,
            accent: Tone::Teal,
            layout: ConceptLayout::LeftAccent,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_accent(mut self, accent: Tone) -> Self {
        self.accent = accent;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: ConceptLayout) -> Self {
        self.layout = layout;
        self
    }

    pub(crate) fn fragment(&self) -> DeckResult<Fragment> {
        let mut card = Fragment::element("div").with_class("concept-card");
        card = match self.layout {
            ConceptLayout::LeftAccent => {
                card.with_style(format!("border-left-color: {};", self.accent.css_var()))
            }
            ConceptLayout::TopAccent => card
                .with_class("centered")
                .with_style(format!("border-top-color: {};", self.accent.css_var())),
        };

        if let Some(icon) = &self.icon {
            card = card.with_child(
                Fragment::element("div")
                    .with_class("concept-icon")
                    .with_text(icon.as_str())
                    .build(),
            );
        }

        Ok(card
            .with_child(
                Fragment::element("div")
                    .with_class("concept-title")
                    .with_text(self.title.as_str())
                    .build(),
            )
            .with_child(
                Fragment::element("div")
                    .with_class("concept-body")
                    .with_text(self.body.as_str())
                    .build(),
            )
            .build())
    }
}

/// Candidate card for the central philosophy sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhilosophyCard {
    pub title: String,
    pub description: Option<String>,
    /// Small uppercase label above the title, e.g. a candidate number.
    pub eyebrow: Option<String>,
    /// Bordered emphasis variant, used for the formula result card.
    pub highlight: bool,
}

impl PhilosophyCard {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            eyebrow: None,
            highlight: false,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_eyebrow(mut self, eyebrow: impl Into<String>) -> Self {
        self.eyebrow = Some(eyebrow.into());
        self
    }

    #[must_use]
    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    pub(crate) fn fragment(&self) -> DeckResult<Fragment> {
        let mut card = Fragment::element("div").with_class("philosophy-card");
        if self.highlight {
            card = card.with_class("highlight");
        }

        if let Some(eyebrow) = &self.eyebrow {
            card = card.with_child(
                Fragment::element("div")
                    .with_class("philosophy-eyebrow")
                    .with_text(eyebrow.as_str())
                    .build(),
            );
        }
        card = card.with_child(
            Fragment::element("div")
                .with_class("philosophy-title")
                .with_text(self.title.as_str())
                .build(),
        );
        if let Some(description) = &self.description {
            card = card.with_child(
                Fragment::element("div")
                    .with_class("philosophy-desc")
                    .with_text(description.as_str())
                    .build(),
            );
        }

        Ok(card.build())
    }
}

/// Large number over a caption, for survey and workshop headline stats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatHighlight {
    pub number: String,
    pub label: String,
}

impl StatHighlight {
    #[must_use]
    pub fn new(number: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            label: label.into(),
        }
    }

    pub(crate) fn fragment(&self) -> DeckResult<Fragment> {
        Ok(Fragment::element("div")
            .with_class("stat-highlight")
            .with_child(
                Fragment::element("div")
                    .with_class("stat-number")
                    .with_text(self.number.as_str())
                    .build(),
            )
            .with_child(
                Fragment::element("div")
                    .with_class("stat-label")
                    .with_text(self.label.as_str())
                    .build(),
            )
            .build())
    }
}

/// Workshop team card: name plus its keyword line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamCard {
    pub name: String,
    pub keywords: String,
}

impl TeamCard {
    #[must_use]
    pub fn new(name: impl Into<String>, keywords: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.into(),
        }
    }

    pub(crate) fn fragment(&self) -> DeckResult<Fragment> {
        Ok(Fragment::element("div")
            .with_class("team-card")
            .with_child(
                Fragment::element("div")
                    .with_class("team-name")
                    .with_text(self.name.as_str())
                    .build(),
            )
            .with_child(
                Fragment::element("div")
                    .with_class("team-keywords")
                    .with_text(self.keywords.as_str())
                    .build(),
            )
            .build())
    }
}

/// Dark banner card for candidate taglines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcopyCard {
    pub text: String,
}

impl SubcopyCard {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub(crate) fn fragment(&self) -> DeckResult<Fragment> {
        Ok(Fragment::element("div")
            .with_class("subcopy-card")
            .with_text(self.text.as_str())
            .build())
    }
}
