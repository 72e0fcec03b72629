use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::chart::style::{BarOrientation, PalettePolicy, SeriesStyle, TickFormat, ValueLabels};
use crate::error::{DeckError, DeckResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Bar,
    Line,
    Radar,
    Scatter,
}

impl ChartKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Radar => "radar",
            ChartKind::Scatter => "scatter",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub category: String,
    pub value: f64,
}

impl SeriesPoint {
    #[must_use]
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: Option<String>,
    pub points: Vec<SeriesPoint>,
    pub style: SeriesStyle,
}

impl Series {
    #[must_use]
    pub fn new(points: Vec<SeriesPoint>) -> Self {
        Self {
            name: None,
            points,
            style: SeriesStyle::default(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryAxis {
    pub title: Option<String>,
    pub categories: Vec<String>,
}

impl CategoryAxis {
    #[must_use]
    pub fn new(categories: Vec<String>) -> Self {
        Self {
            title: None,
            categories,
        }
    }

    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.categories.iter().any(|entry| entry == category)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAxis {
    pub title: Option<String>,
    /// Fixed display range. `None` leaves the host to autorange, typically
    /// from [`ChartSpec::value_bounds`].
    pub range: Option<(f64, f64)>,
    pub tick_format: TickFormat,
    pub grid: bool,
}

impl Default for ValueAxis {
    fn default() -> Self {
        Self {
            title: None,
            range: None,
            tick_format: TickFormat::Plain,
            grid: true,
        }
    }
}

/// Overlay note on a chart. Annotations never touch series data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Annotation {
    /// Full-height marker line at one category.
    VerticalMarker { category: String, label: String },
    /// Arrowed callout pointing at one (category, value) position.
    Callout {
        category: String,
        value: f64,
        text: String,
    },
}

impl Annotation {
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Annotation::VerticalMarker { category, .. } => category,
            Annotation::Callout { category, .. } => category,
        }
    }
}

/// Fully described chart, ready for embedding.
///
/// Specs are plain data: building one has no side effects, and the same
/// inputs always produce an equal spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub category_axis: CategoryAxis,
    pub value_axis: ValueAxis,
    pub annotations: Vec<Annotation>,
    pub orientation: BarOrientation,
    pub height_px: u32,
}

impl ChartSpec {
    /// Chart name used in contract errors: the title when present, the
    /// kind otherwise.
    #[must_use]
    pub fn label(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| self.kind.name().to_string())
    }

    pub fn validate(&self) -> DeckResult<()> {
        let label = self.label();

        for series in &self.series {
            match self.kind {
                ChartKind::Bar | ChartKind::Radar => {
                    if series.points.len() != self.category_axis.categories.len() {
                        return Err(DeckError::SeriesLengthMismatch {
                            chart: label,
                            categories: self.category_axis.categories.len(),
                            values: series.points.len(),
                        });
                    }
                }
                ChartKind::Line | ChartKind::Scatter => {
                    // Segments of one line chart may cover different
                    // sub-ranges of the axis domain, so containment is the
                    // contract here, not equal cardinality.
                    for point in &series.points {
                        if !self.category_axis.contains(&point.category) {
                            return Err(DeckError::UnknownCategory {
                                chart: label,
                                category: point.category.clone(),
                            });
                        }
                    }
                }
            }

            for point in &series.points {
                if !point.value.is_finite() {
                    return Err(DeckError::InvalidData(format!(
                        "chart '{label}' has a non-finite value at category '{}'",
                        point.category
                    )));
                }
            }

            if let PalettePolicy::Sequence { paints } = &series.style.palette {
                if paints.len() != series.points.len() {
                    return Err(DeckError::PaintOverrideMismatch {
                        chart: label,
                        points: series.points.len(),
                        paints: paints.len(),
                    });
                }
            }

            if let ValueLabels::Custom { labels } = &series.style.value_labels {
                if labels.len() != series.points.len() {
                    return Err(DeckError::InvalidData(format!(
                        "chart '{label}' has {} custom value labels for {} points",
                        labels.len(),
                        series.points.len()
                    )));
                }
            }
        }

        if let Some((low, high)) = self.value_axis.range {
            if !(low.is_finite() && high.is_finite() && low < high) {
                return Err(DeckError::InvalidData(format!(
                    "chart '{label}' has an invalid value range: {low}..{high}"
                )));
            }
        }

        for annotation in &self.annotations {
            if !self.category_axis.contains(annotation.category()) {
                return Err(DeckError::UnknownCategory {
                    chart: label,
                    category: annotation.category().to_string(),
                });
            }
        }

        Ok(())
    }

    /// Minimum and maximum value across all series, for autoranging.
    /// `None` when the spec has no points.
    #[must_use]
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        let values = self
            .series
            .iter()
            .flat_map(|series| series.points.iter().map(|point| OrderedFloat(point.value)));

        let min = values.clone().min()?;
        let max = values.max()?;
        Some((min.into_inner(), max.into_inner()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|series| series.points.is_empty())
    }
}
