pub mod builder;
pub mod projection;
pub mod spec;
pub mod style;

pub use builder::{
    BarOptions, LineOptions, ProjectedSegmentStyle, RadarOptions, build_bar, build_line,
    build_line_with_projection, build_radar, stitch_actual_and_projected,
};
pub use projection::{project, project_decimal_rates};
pub use spec::{Annotation, CategoryAxis, ChartKind, ChartSpec, Series, SeriesPoint, ValueAxis};
pub use style::{
    AreaFill, BarOrientation, MarkerShape, Paint, PalettePolicy, SeriesStyle, StrokeDash,
    TickFormat, ValueLabels,
};
