use serde::{Deserialize, Serialize};

use crate::theme::{Color, Tone};

/// Color reference used by chart styling.
///
/// Uniform series styling names theme tokens; data-visualization ramps
/// (gradient scales over bars) are chart data and may carry explicit
/// colors. The host resolves `Token` paints against the emitted
/// stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum Paint {
    Token(Tone),
    Rgb(Color),
}

impl From<Tone> for Paint {
    fn from(tone: Tone) -> Self {
        Paint::Token(tone)
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Rgb(color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrokeDash {
    Solid,
    Dashed,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerShape {
    Circle,
    Diamond,
    Square,
}

/// Area fill below or inside a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AreaFill {
    None,
    /// Fill between the line and the zero baseline.
    ToZero { alpha: f32 },
    /// Fill the enclosed polygon, for radar series.
    ToSelf { alpha: f32 },
}

/// Per-point coloring policy for bar series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PalettePolicy {
    Uniform { paint: Paint },
    /// One paint per point, in point order. Length must match the series.
    Sequence { paints: Vec<Paint> },
    /// Split coloring on a value cutoff.
    Threshold { cutoff: f64, above: Paint, below: Paint },
}

impl Default for PalettePolicy {
    fn default() -> Self {
        PalettePolicy::Uniform {
            paint: Paint::Token(Tone::Primary),
        }
    }
}

/// Value labels drawn next to points or bars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ValueLabels {
    Hidden,
    /// The host formats each value.
    Auto,
    /// Pre-formatted label per point, in point order.
    Custom { labels: Vec<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BarOrientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TickFormat {
    Plain,
    /// Thousands separators, e.g. `103,359`.
    Thousands,
}

/// Display styling for one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub stroke: Paint,
    pub stroke_width_px: f32,
    pub dash: StrokeDash,
    pub marker: MarkerShape,
    pub marker_size_px: u8,
    pub fill: AreaFill,
    pub palette: PalettePolicy,
    pub value_labels: ValueLabels,
    /// Hover template with `{category}` / `{value}` placeholders, carried
    /// as data for the host.
    pub hover_template: Option<String>,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            stroke: Paint::Token(Tone::Primary),
            stroke_width_px: 3.0,
            dash: StrokeDash::Solid,
            marker: MarkerShape::Circle,
            marker_size_px: 6,
            fill: AreaFill::None,
            palette: PalettePolicy::default(),
            value_labels: ValueLabels::Hidden,
            hover_template: None,
        }
    }
}

impl SeriesStyle {
    #[must_use]
    pub fn with_stroke(mut self, stroke: impl Into<Paint>) -> Self {
        self.stroke = stroke.into();
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, width_px: f32) -> Self {
        self.stroke_width_px = width_px;
        self
    }

    #[must_use]
    pub fn with_dash(mut self, dash: StrokeDash) -> Self {
        self.dash = dash;
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: MarkerShape, size_px: u8) -> Self {
        self.marker = marker;
        self.marker_size_px = size_px;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: AreaFill) -> Self {
        self.fill = fill;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: PalettePolicy) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_value_labels(mut self, value_labels: ValueLabels) -> Self {
        self.value_labels = value_labels;
        self
    }

    #[must_use]
    pub fn with_hover_template(mut self, template: impl Into<String>) -> Self {
        self.hover_template = Some(template.into());
        self
    }
}
