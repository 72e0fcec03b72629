use chrono::Utc;
use tracing::{debug, warn};

use crate::chart::ChartSpec;
use crate::error::{DeckError, DeckResult};
use crate::render::Surface;
use crate::render::fragment::{Fragment, escape_text};

/// Surface that accumulates the emission stream as HTML text.
///
/// Fragments serialize in emission order. Charts embed as JSON payloads on
/// a `data-deck-chart` attribute; the host's plotting layer hydrates them
/// client-side.
#[derive(Debug, Clone)]
pub struct HtmlSurface {
    lang: String,
    stream: String,
    charts_embedded: usize,
}

impl Default for HtmlSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlSurface {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lang: "ja".to_string(),
            stream: String::new(),
            charts_embedded: 0,
        }
    }

    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// The accumulated body stream, without the document envelope.
    #[must_use]
    pub fn body_html(&self) -> &str {
        &self.stream
    }

    #[must_use]
    pub fn charts_embedded(&self) -> usize {
        self.charts_embedded
    }

    /// Wraps the accumulated stream into a complete standalone document.
    #[must_use]
    pub fn into_document(self, title: &str) -> String {
        let mut document = String::with_capacity(self.stream.len() + 1024);
        document.push_str("<!DOCTYPE html>\n<html lang=\"");
        document.push_str(&self.lang);
        document.push_str("\">\n<head>\n<meta charset=\"utf-8\">\n");
        document.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>",
        );
        escape_text(title, &mut document);
        document.push_str("</title>\n</head>\n<body>\n");
        document.push_str(&self.stream);
        document.push_str(&format!(
            "<!-- generated {} by deck-rs -->\n",
            Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
        ));
        document.push_str("</body>\n</html>\n");

        debug!(
            bytes = document.len(),
            charts = self.charts_embedded,
            "assembled deck document"
        );
        document
    }
}

impl Surface for HtmlSurface {
    fn fragment(&mut self, fragment: &Fragment) -> DeckResult<()> {
        fragment.write_html(&mut self.stream);
        self.stream.push('\n');
        Ok(())
    }

    fn chart(&mut self, spec: &ChartSpec) -> DeckResult<()> {
        spec.validate()?;
        if spec.is_empty() {
            warn!(chart = %spec.label(), "embedding a chart with no data points");
        }

        let payload = serde_json::to_string(spec).map_err(|err| {
            DeckError::InvalidData(format!("chart payload serialization failed: {err}"))
        })?;

        let mut figure = Fragment::element("figure").with_class("chart-embed");
        if let Some(title) = &spec.title {
            figure = figure.with_child(Fragment::element("figcaption").with_text(title).build());
        }
        let figure = figure
            .with_child(
                Fragment::element("div")
                    .with_class("chart-host")
                    .with_attr("data-deck-chart", payload)
                    .build(),
            )
            .build();

        figure.write_html(&mut self.stream);
        self.stream.push('\n');
        self.charts_embedded += 1;
        Ok(())
    }
}
