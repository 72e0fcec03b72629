//! Chart constructors from flat datasets.
//!
//! Builders are the only way pages create [`ChartSpec`] values. Every
//! builder checks its length preconditions before assembling anything and
//! validates the finished spec, so a returned spec is always internally
//! consistent.

use tracing::trace;

use crate::chart::spec::{
    Annotation, CategoryAxis, ChartKind, ChartSpec, Series, SeriesPoint, ValueAxis,
};
use crate::chart::style::{
    AreaFill, BarOrientation, MarkerShape, Paint, PalettePolicy, SeriesStyle, StrokeDash,
    TickFormat, ValueLabels,
};
use crate::error::{DeckError, DeckResult};
use crate::theme::Tone;

#[derive(Debug, Clone, PartialEq)]
pub struct BarOptions {
    pub title: Option<String>,
    pub series_name: Option<String>,
    pub orientation: BarOrientation,
    pub palette: PalettePolicy,
    pub value_labels: ValueLabels,
    pub hover_template: Option<String>,
    pub category_title: Option<String>,
    pub value_title: Option<String>,
    pub value_range: Option<(f64, f64)>,
    pub tick_format: TickFormat,
    pub annotations: Vec<Annotation>,
    pub height_px: u32,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            title: None,
            series_name: None,
            orientation: BarOrientation::Vertical,
            palette: PalettePolicy::default(),
            value_labels: ValueLabels::Hidden,
            hover_template: None,
            category_title: None,
            value_title: None,
            value_range: None,
            tick_format: TickFormat::Plain,
            annotations: Vec::new(),
            height_px: 380,
        }
    }
}

impl BarOptions {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_series_name(mut self, name: impl Into<String>) -> Self {
        self.series_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: BarOrientation) -> Self {
        self.orientation = orientation;
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

    #[must_use]
    pub fn with_axis_titles(
        mut self,
        category: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.category_title = Some(category.into());
        self.value_title = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_value_range(mut self, low: f64, high: f64) -> Self {
        self.value_range = Some((low, high));
        self
    }

    #[must_use]
    pub fn with_tick_format(mut self, tick_format: TickFormat) -> Self {
        self.tick_format = tick_format;
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn with_height(mut self, height_px: u32) -> Self {
        self.height_px = height_px;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineOptions {
    pub title: Option<String>,
    pub series_name: Option<String>,
    pub stroke: Paint,
    pub stroke_width_px: f32,
    pub dash: StrokeDash,
    pub marker: MarkerShape,
    pub marker_size_px: u8,
    pub fill: AreaFill,
    pub hover_template: Option<String>,
    pub category_title: Option<String>,
    pub value_title: Option<String>,
    pub value_range: Option<(f64, f64)>,
    pub tick_format: TickFormat,
    pub annotations: Vec<Annotation>,
    pub height_px: u32,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            title: None,
            series_name: None,
            stroke: Paint::Token(Tone::Primary),
            stroke_width_px: 3.0,
            dash: StrokeDash::Solid,
            marker: MarkerShape::Circle,
            marker_size_px: 6,
            fill: AreaFill::None,
            hover_template: None,
            category_title: None,
            value_title: None,
            value_range: None,
            tick_format: TickFormat::Plain,
            annotations: Vec::new(),
            height_px: 420,
        }
    }
}

impl LineOptions {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_series_name(mut self, name: impl Into<String>) -> Self {
        self.series_name = Some(name.into());
        self
    }

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
    pub fn with_hover_template(mut self, template: impl Into<String>) -> Self {
        self.hover_template = Some(template.into());
        self
    }

    #[must_use]
    pub fn with_axis_titles(
        mut self,
        category: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.category_title = Some(category.into());
        self.value_title = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_value_range(mut self, low: f64, high: f64) -> Self {
        self.value_range = Some((low, high));
        self
    }

    #[must_use]
    pub fn with_tick_format(mut self, tick_format: TickFormat) -> Self {
        self.tick_format = tick_format;
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn with_height(mut self, height_px: u32) -> Self {
        self.height_px = height_px;
        self
    }

    fn series_style(&self) -> SeriesStyle {
        let mut style = SeriesStyle::default()
            .with_stroke(self.stroke)
            .with_stroke_width(self.stroke_width_px)
            .with_dash(self.dash)
            .with_marker(self.marker, self.marker_size_px)
            .with_fill(self.fill);
        if let Some(template) = &self.hover_template {
            style = style.with_hover_template(template.clone());
        }
        style
    }
}

/// Styling of the projected segment in an actual-vs-projected line chart.
///
/// The dash is not configurable: projections always render dashed so the
/// transition from observed data is visible at a glance.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedSegmentStyle {
    pub name: Option<String>,
    pub stroke: Paint,
    pub marker: MarkerShape,
    pub marker_size_px: u8,
    pub hover_template: Option<String>,
}

impl Default for ProjectedSegmentStyle {
    fn default() -> Self {
        Self {
            name: None,
            stroke: Paint::Token(Tone::Danger),
            marker: MarkerShape::Diamond,
            marker_size_px: 6,
            hover_template: None,
        }
    }
}

impl ProjectedSegmentStyle {
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: impl Into<Paint>) -> Self {
        self.stroke = stroke.into();
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: MarkerShape, size_px: u8) -> Self {
        self.marker = marker;
        self.marker_size_px = size_px;
        self
    }

    #[must_use]
    pub fn with_hover_template(mut self, template: impl Into<String>) -> Self {
        self.hover_template = Some(template.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarOptions {
    pub title: Option<String>,
    pub series_name: Option<String>,
    pub stroke: Paint,
    pub fill_alpha: f32,
    pub marker: MarkerShape,
    pub marker_size_px: u8,
    pub value_range: Option<(f64, f64)>,
    pub hover_template: Option<String>,
    pub height_px: u32,
}

impl Default for RadarOptions {
    fn default() -> Self {
        Self {
            title: None,
            series_name: None,
            stroke: Paint::Token(Tone::Primary),
            fill_alpha: 0.3,
            marker: MarkerShape::Circle,
            marker_size_px: 8,
            value_range: Some((0.0, 100.0)),
            hover_template: None,
            height_px: 420,
        }
    }
}

impl RadarOptions {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_series_name(mut self, name: impl Into<String>) -> Self {
        self.series_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: impl Into<Paint>) -> Self {
        self.stroke = stroke.into();
        self
    }

    #[must_use]
    pub fn with_fill_alpha(mut self, alpha: f32) -> Self {
        self.fill_alpha = alpha;
        self
    }

    #[must_use]
    pub fn with_value_range(mut self, low: f64, high: f64) -> Self {
        self.value_range = Some((low, high));
        self
    }

    #[must_use]
    pub fn with_hover_template(mut self, template: impl Into<String>) -> Self {
        self.hover_template = Some(template.into());
        self
    }

    #[must_use]
    pub fn with_height(mut self, height_px: u32) -> Self {
        self.height_px = height_px;
        self
    }
}

/// Builds a bar chart from parallel category and value slices.
pub fn build_bar<C: AsRef<str>>(
    categories: &[C],
    values: &[f64],
    options: BarOptions,
) -> DeckResult<ChartSpec> {
    ensure_same_length(
        "bar",
        options.title.as_deref(),
        categories.len(),
        values.len(),
    )?;

    let style = SeriesStyle {
        palette: options.palette,
        value_labels: options.value_labels,
        hover_template: options.hover_template,
        ..SeriesStyle::default()
    };

    let mut series = Series::new(points_from(categories, values)).with_style(style);
    if let Some(name) = options.series_name {
        series = series.with_name(name);
    }

    let spec = ChartSpec {
        kind: ChartKind::Bar,
        title: options.title,
        series: vec![series],
        category_axis: CategoryAxis {
            title: options.category_title,
            categories: to_strings(categories),
        },
        value_axis: ValueAxis {
            title: options.value_title,
            range: options.value_range,
            tick_format: options.tick_format,
            grid: true,
        },
        annotations: options.annotations,
        orientation: options.orientation,
        height_px: options.height_px,
    };

    spec.validate()?;
    trace!(chart = %spec.label(), points = values.len(), "built bar spec");
    Ok(spec)
}

/// Builds a single-series line chart from parallel category and value
/// slices.
pub fn build_line<C: AsRef<str>>(
    categories: &[C],
    values: &[f64],
    options: LineOptions,
) -> DeckResult<ChartSpec> {
    ensure_same_length(
        "line",
        options.title.as_deref(),
        categories.len(),
        values.len(),
    )?;

    let mut series = Series::new(points_from(categories, values)).with_style(options.series_style());
    if let Some(name) = &options.series_name {
        series = series.with_name(name.clone());
    }

    let spec = ChartSpec {
        kind: ChartKind::Line,
        title: options.title,
        series: vec![series],
        category_axis: CategoryAxis {
            title: options.category_title,
            categories: to_strings(categories),
        },
        value_axis: ValueAxis {
            title: options.value_title,
            range: options.value_range,
            tick_format: options.tick_format,
            grid: true,
        },
        annotations: options.annotations,
        orientation: BarOrientation::Vertical,
        height_px: options.height_px,
    };

    spec.validate()?;
    trace!(chart = %spec.label(), points = values.len(), "built line spec");
    Ok(spec)
}

/// Builds a two-segment line chart: an actual series followed by a
/// projected continuation.
///
/// The axis covers both category runs in order. The projected segment is
/// produced by [`stitch_actual_and_projected`], rendered dashed with the
/// marker shape from `tail`.
pub fn build_line_with_projection<C: AsRef<str>, P: AsRef<str>>(
    actual_categories: &[C],
    actual_values: &[f64],
    projected_categories: &[P],
    projected_values: &[f64],
    options: LineOptions,
    tail: ProjectedSegmentStyle,
) -> DeckResult<ChartSpec> {
    ensure_same_length(
        "line",
        options.title.as_deref(),
        actual_categories.len(),
        actual_values.len(),
    )?;
    ensure_same_length(
        "line",
        options.title.as_deref(),
        projected_categories.len(),
        projected_values.len(),
    )?;

    let actual_points = points_from(actual_categories, actual_values);
    let projected_points = points_from(projected_categories, projected_values);
    let stitched = stitch_actual_and_projected(&actual_points, &projected_points)?;

    let mut actual_series = Series::new(actual_points).with_style(options.series_style());
    if let Some(name) = &options.series_name {
        actual_series = actual_series.with_name(name.clone());
    }

    let mut tail_style = SeriesStyle::default()
        .with_stroke(tail.stroke)
        .with_stroke_width(options.stroke_width_px)
        .with_dash(StrokeDash::Dashed)
        .with_marker(tail.marker, tail.marker_size_px);
    if let Some(template) = tail.hover_template {
        tail_style = tail_style.with_hover_template(template);
    }
    let mut projected_series = Series::new(stitched).with_style(tail_style);
    if let Some(name) = tail.name {
        projected_series = projected_series.with_name(name);
    }

    let mut axis_categories = to_strings(actual_categories);
    axis_categories.extend(to_strings(projected_categories));

    let spec = ChartSpec {
        kind: ChartKind::Line,
        title: options.title,
        series: vec![actual_series, projected_series],
        category_axis: CategoryAxis {
            title: options.category_title,
            categories: axis_categories,
        },
        value_axis: ValueAxis {
            title: options.value_title,
            range: options.value_range,
            tick_format: options.tick_format,
            grid: true,
        },
        annotations: options.annotations,
        orientation: BarOrientation::Vertical,
        height_px: options.height_px,
    };

    spec.validate()?;
    trace!(
        chart = %spec.label(),
        actual = actual_values.len(),
        projected = projected_values.len(),
        "built stitched line spec"
    );
    Ok(spec)
}

/// Builds a closed radar chart from parallel category and value slices.
///
/// Radar polygons close by re-appending the first element to both the
/// category and the value sequence, so a built spec carries `n + 1` points
/// with `points[0] == points[n]`. Empty input stays empty.
pub fn build_radar<C: AsRef<str>>(
    categories: &[C],
    values: &[f64],
    options: RadarOptions,
) -> DeckResult<ChartSpec> {
    ensure_same_length(
        "radar",
        options.title.as_deref(),
        categories.len(),
        values.len(),
    )?;

    let mut closed_categories = to_strings(categories);
    let mut closed_values = values.to_vec();
    if let (Some(first_category), Some(first_value)) = (
        closed_categories.first().cloned(),
        closed_values.first().copied(),
    ) {
        closed_categories.push(first_category);
        closed_values.push(first_value);
    }

    let mut style = SeriesStyle::default()
        .with_stroke(options.stroke)
        .with_marker(options.marker, options.marker_size_px)
        .with_fill(AreaFill::ToSelf {
            alpha: options.fill_alpha,
        });
    if let Some(template) = &options.hover_template {
        style = style.with_hover_template(template.clone());
    }

    let points = closed_categories
        .iter()
        .zip(closed_values.iter())
        .map(|(category, value)| SeriesPoint::new(category.clone(), *value))
        .collect();
    let mut series = Series::new(points).with_style(style);
    if let Some(name) = options.series_name {
        series = series.with_name(name);
    }

    let spec = ChartSpec {
        kind: ChartKind::Radar,
        title: options.title,
        series: vec![series],
        category_axis: CategoryAxis::new(closed_categories),
        value_axis: ValueAxis {
            title: None,
            range: options.value_range,
            tick_format: TickFormat::Plain,
            grid: true,
        },
        annotations: Vec::new(),
        orientation: BarOrientation::Vertical,
        height_px: options.height_px,
    };

    spec.validate()?;
    trace!(chart = %spec.label(), points = values.len(), "built radar spec");
    Ok(spec)
}

/// Builds the point run for the projected segment of an
/// actual-vs-projected line chart.
///
/// The returned run starts with a copy of the final actual point, so both
/// segments share the boundary and the projected segment carries
/// `projected.len() + 1` points. The boundary is duplicated exactly once;
/// the actual series itself is left untouched.
pub fn stitch_actual_and_projected(
    actual: &[SeriesPoint],
    projected: &[SeriesPoint],
) -> DeckResult<Vec<SeriesPoint>> {
    let boundary = actual.last().cloned().ok_or_else(|| {
        DeckError::InvalidData("cannot stitch a projection onto an empty actual series".to_string())
    })?;

    let mut run = Vec::with_capacity(projected.len() + 1);
    run.push(boundary);
    run.extend(projected.iter().cloned());
    Ok(run)
}

fn ensure_same_length(
    kind: &str,
    title: Option<&str>,
    categories: usize,
    values: usize,
) -> DeckResult<()> {
    if categories != values {
        return Err(DeckError::SeriesLengthMismatch {
            chart: title.unwrap_or(kind).to_string(),
            categories,
            values,
        });
    }
    Ok(())
}

fn points_from<C: AsRef<str>>(categories: &[C], values: &[f64]) -> Vec<SeriesPoint> {
    categories
        .iter()
        .zip(values.iter())
        .map(|(category, value)| SeriesPoint::new(category.as_ref(), *value))
        .collect()
}

fn to_strings<C: AsRef<str>>(categories: &[C]) -> Vec<String> {
    categories
        .iter()
        .map(|category| category.as_ref().to_string())
        .collect()
}
