use crate::error::DeckResult;
use crate::render::Fragment;

/// Dark storytelling panel: paragraphs plus an optional emphasis line.
///
/// Emphasis copy frequently carries arrow and equals glyphs
/// (`蓄積 → 放出` and the like); serialization passes them through
/// byte-identically.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NarrativeBox {
    pub paragraphs: Vec<String>,
    pub emphasis: Option<String>,
}

impl NarrativeBox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_paragraph(mut self, paragraph: impl Into<String>) -> Self {
        self.paragraphs.push(paragraph.into());
        self
    }

    #[must_use]
    pub fn with_emphasis(mut self, emphasis: impl Into<String>) -> Self {
        self.emphasis = Some(emphasis.into());
        self
    }

    pub(crate) fn fragment(&self) -> DeckResult<Fragment> {
        let mut panel = Fragment::element("div").with_class("narrative-box");
        for paragraph in &self.paragraphs {
            panel = panel.with_child(
                Fragment::element("p")
                    .with_text(paragraph.as_str())
                    .build(),
            );
        }
        if let Some(emphasis) = &self.emphasis {
            panel = panel.with_child(
                Fragment::element("p")
                    .with_class("narrative-emphasis")
                    .with_text(emphasis.as_str())
                    .build(),
            );
        }
        Ok(panel.build())
    }
}

/// Centered quotation panel, with an optional source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteBlock {
    pub text: String,
    pub source: Option<String>,
}

impl QuoteBlock {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: None,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub(crate) fn fragment(&self) -> DeckResult<Fragment> {
        let mut block = Fragment::element("blockquote")
            .with_class("quote-block")
            .with_text(self.text.as_str());
        if let Some(source) = &self.source {
            block = block.with_child(
                Fragment::element("div")
                    .with_class("quote-source")
                    .with_text(source.as_str())
                    .build(),
            );
        }
        Ok(block.build())
    }
}
